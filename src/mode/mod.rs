//! CLI mode implementations

mod interactive;
mod snapshot;

pub use interactive::run_interactive;
pub use snapshot::run_snapshot;

use crate::chart;
use crate::output::{print_legend, print_series, print_state};
use crate::projection::ProjectionModel;

/// Options shared by both modes
pub struct ViewOptions<'a> {
    pub quiet: bool,
    pub image_path: Option<&'a str>,
}

/// Print the full view: state block, series table and legend
pub(crate) fn print_view(model: &ProjectionModel, quiet: bool) {
    if !quiet {
        print_state(model);
    }

    print_series(model);

    if !quiet {
        println!();
        print_legend();
    }
}

/// Render the current projection to an image file
pub(crate) fn render_chart(model: &ProjectionModel, path: &str) -> Result<(), String> {
    let data = chart::ProjectionChartData {
        active_fixes: model.selected().iter().map(|a| a.label()).collect(),
        total_adjustment: model.total_adjustment(),
        points: model
            .compute_series()
            .iter()
            .map(|p| (p.index, p.value))
            .collect(),
    };
    chart::render_projection_chart(&data, path)
}
