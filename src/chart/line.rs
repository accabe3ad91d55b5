//! Projection line chart rendering

use charming::{
    Chart, ImageRenderer,
    component::{Axis, Grid, Title},
    element::{
        AxisLabel, AxisLine, AxisType, Color, ItemStyle, LineStyle, LineStyleType,
        NameLocation, SplitLine, Symbol, TextStyle,
    },
    renderer::ImageFormat,
    series::Line,
};

use super::colors::{
    COLOR_AXIS, COLOR_BACKGROUND, COLOR_GRID, COLOR_LINE, COLOR_MARKER, COLOR_TEXT,
};
use super::{CHART_HEIGHT, CHART_WIDTH, ChartFormat, ProjectionChartData, round_display};
use crate::output::format_adjustment;

const AXIS_LINE_WIDTH: f64 = 1.0;

/// Render the projection line chart to a PNG or SVG file
pub fn render_projection_chart(
    data: &ProjectionChartData,
    output_path: &str,
) -> Result<(), String> {
    if data.points.is_empty() {
        return Err("No data to render".to_string());
    }
    let format = ChartFormat::from_path(output_path)?;
    let chart = build_projection_chart(data);

    let mut renderer = ImageRenderer::new(CHART_WIDTH, CHART_HEIGHT);
    let saved = match format {
        ChartFormat::Png => renderer.save_format(ImageFormat::Png, &chart, output_path),
        ChartFormat::Svg => renderer.save(&chart, output_path),
    };
    saved.map_err(|e| format!("Failed to save chart: {}", e))?;

    Ok(())
}

/// Build the chart definition: dashed grid, lavender axes, white line
/// with violet markers
fn build_projection_chart(data: &ProjectionChartData) -> Chart {
    let subtitle = if data.active_fixes.is_empty() {
        "No fixes active".to_string()
    } else {
        format!(
            "{}  ({})",
            data.active_fixes.join(" + "),
            format_adjustment(data.total_adjustment)
        )
    };

    let years: Vec<String> = data
        .points
        .iter()
        .map(|(year, _)| year.to_string())
        .collect();
    let values: Vec<f64> = data
        .points
        .iter()
        .map(|&(_, v)| round_display(v))
        .collect();

    let axis_text = || TextStyle::new().color(COLOR_AXIS).font_size(24);

    Chart::new()
        .background_color(Color::Value(COLOR_BACKGROUND.to_string()))
        .title(
            Title::new()
                .text("Projection")
                .subtext(subtitle)
                .left("center")
                .top("3%")
                .text_style(TextStyle::new().color(COLOR_TEXT).font_size(36))
                .subtext_style(TextStyle::new().color(COLOR_TEXT).font_size(24)),
        )
        .grid(
            Grid::new()
                .left("8%")
                .right("4%")
                .bottom("12%")
                .top("16%")
                .contain_label(true),
        )
        .x_axis(
            Axis::new()
                .type_(AxisType::Category)
                .boundary_gap(false)
                .data(years)
                .name("Years")
                .name_location(NameLocation::Middle)
                .name_gap(50)
                .name_text_style(axis_text())
                .axis_line(AxisLine::new().line_style((AXIS_LINE_WIDTH, COLOR_AXIS)))
                .axis_label(AxisLabel::new().color(COLOR_AXIS).font_size(22)),
        )
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .min(0)
                .name("Projection (%)")
                .name_location(NameLocation::Middle)
                .name_gap(90)
                .name_text_style(axis_text())
                .axis_line(AxisLine::new().line_style((AXIS_LINE_WIDTH, COLOR_AXIS)))
                .axis_label(AxisLabel::new().color(COLOR_AXIS).font_size(22))
                .split_line(
                    SplitLine::new().line_style(
                        LineStyle::new()
                            .width(1)
                            .type_(LineStyleType::Dashed)
                            .color(COLOR_GRID),
                    ),
                ),
        )
        .series(
            Line::new()
                .name("Projection")
                .data(values)
                .symbol(Symbol::Circle)
                .symbol_size(12)
                .line_style(LineStyle::new().width(3).color(COLOR_LINE))
                .item_style(ItemStyle::new().color(COLOR_MARKER)),
        )
}
