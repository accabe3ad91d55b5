mod chart;
mod mode;
mod output;
mod projection;

use std::collections::BTreeSet;

use clap::Parser;

use mode::ViewOptions;
use output::print_error;
use projection::{
    DEFAULT_RANGE_SIZE, DEFAULT_SCALE_BASE, MAX_RANGE_SIZE, MAX_SCALE_BASE, MIN_RANGE_SIZE,
    MIN_SCALE_BASE, ProjectionModel, get_adjustments, resolve_adjustment,
};

#[derive(Parser)]
#[command(
    name = "projview",
    version,
    about = "Projection chart with toggleable fixes and adjustable axes",
    after_help = "Examples:
  projview                                   Default projection (4 years, scale 100)
  projview --fix 1 --fix 3                   Projection with FIX 1 and FIX 3 active
  projview -y 10 -s 250                      10 years starting at 250
  projview --fix 2 --image chart.png         Save the chart as PNG
  projview -i --image chart.svg              Interactive session, chart kept up to date
  projview --no-color                        Disable colored output"
)]
struct Args {
    /// Activate a fix (repeatable): 1, fix1, "fix 1"
    #[arg(short, long = "fix", value_name = "FIX")]
    fixes: Vec<String>,

    /// Number of years shown
    #[arg(
        short,
        long,
        default_value_t = DEFAULT_RANGE_SIZE,
        value_name = "N",
        value_parser = clap::value_parser!(u32).range(MIN_RANGE_SIZE as i64..=MAX_RANGE_SIZE as i64)
    )]
    years: u32,

    /// Starting value of the projection (vertical scale)
    #[arg(
        short,
        long,
        default_value_t = DEFAULT_SCALE_BASE,
        value_name = "N",
        value_parser = clap::value_parser!(u32).range(MIN_SCALE_BASE as i64..=MAX_SCALE_BASE as i64)
    )]
    scale: u32,

    /// Interactive mode (read commands from stdin)
    #[arg(short, long)]
    interactive: bool,

    /// Suppress explanations (show data only)
    #[arg(short, long)]
    quiet: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Output the chart as an image (.png or .svg)
    #[arg(long, value_name = "PATH")]
    image: Option<String>,
}

fn main() {
    let args = Args::parse();

    // Handle --no-color
    if args.no_color {
        colored::control::set_override(false);
    }

    // Resolve fixes before touching the model so unknown names fail early
    let catalog = get_adjustments();
    let mut fix_ids = BTreeSet::new();
    for token in &args.fixes {
        match resolve_adjustment(catalog, token) {
            Some(id) => {
                fix_ids.insert(id);
            }
            None => {
                print_error(&format!("Unknown fix: {}", token));
                std::process::exit(1);
            }
        }
    }

    // Validate image output path
    if let Some(ref path) = args.image {
        use std::path::Path;
        if let Some(parent) = Path::new(path).parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            print_error(&format!("Directory does not exist: {}", parent.display()));
            std::process::exit(1);
        }

        if let Err(e) = chart::ChartFormat::from_path(path) {
            print_error(&e);
            std::process::exit(1);
        }
    }

    let mut model = ProjectionModel::new(catalog)
        .with_range_size(args.years)
        .with_scale_base(args.scale);
    for id in fix_ids {
        let known = model.toggle_adjustment(id);
        debug_assert!(known, "resolved fix {} missing from catalog", id);
    }

    let options = ViewOptions {
        quiet: args.quiet,
        image_path: args.image.as_deref(),
    };

    // Dispatch to appropriate mode
    if args.interactive {
        mode::run_interactive(model, &options);
    } else {
        mode::run_snapshot(&model, &options);
    }
}
