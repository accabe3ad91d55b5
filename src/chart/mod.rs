//! Chart rendering for the projection view

mod colors;
mod line;

pub use line::render_projection_chart;

use std::path::Path;

/// Data for the projection line chart
pub struct ProjectionChartData {
    /// Active fix labels, in catalog order
    pub active_fixes: Vec<String>,
    pub total_adjustment: f64,
    /// (year, value) pairs
    pub points: Vec<(u32, f64)>,
}

/// Chart dimensions (2x for Retina quality)
pub(super) const CHART_WIDTH: u32 = 2400;
pub(super) const CHART_HEIGHT: u32 = 1000;

/// Output image format, picked from the file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartFormat {
    Png,
    Svg,
}

impl ChartFormat {
    pub fn from_path(path: &str) -> Result<Self, String> {
        let ext = Path::new(path)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "png" => Ok(Self::Png),
            "svg" => Ok(Self::Svg),
            "" => Err("Unsupported image format: none (use .png or .svg)".to_string()),
            other => Err(format!(
                "Unsupported image format: {} (use .png or .svg)",
                other
            )),
        }
    }
}

/// Round to 1 decimal place for display
pub(super) fn round_display(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}
