//! One-shot mode: print the projection for the given state and exit

use crate::output::print_error;
use crate::projection::ProjectionModel;

use super::{ViewOptions, print_view, render_chart};

/// Print the projection once, optionally saving the chart
pub fn run_snapshot(model: &ProjectionModel, options: &ViewOptions) {
    print_view(model, options.quiet);

    if let Some(path) = options.image_path {
        if let Err(e) = render_chart(model, path) {
            print_error(&e);
            std::process::exit(1);
        }
        eprintln!("Chart saved to: {}", path);
    }
}
