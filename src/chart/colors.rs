//! Color definitions for the projection chart

pub(super) const COLOR_BACKGROUND: &str = "#008DB9"; // Chart blue
pub(super) const COLOR_TEXT: &str = "#FFFFFF"; // White
pub(super) const COLOR_GRID: &str = "#FFFFFF"; // Dashed grid lines
pub(super) const COLOR_AXIS: &str = "#D6C2F7"; // Lavender axis text
pub(super) const COLOR_LINE: &str = "#FFFFFF"; // Projection line
pub(super) const COLOR_MARKER: &str = "#C084FC"; // Violet point markers
