use crate::projection::{
    DataPoint, MAX_RANGE_SIZE, MAX_SCALE_BASE, MIN_RANGE_SIZE, MIN_SCALE_BASE, ProjectionModel,
};
use colored::*;

/// Column width for one series point
const COLUMN_WIDTH: usize = 8;
/// Width of the row label column
const LABEL_WIDTH: usize = 8;

pub(crate) fn print_error(msg: &str) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

pub(crate) fn print_warning(msg: &str) {
    eprintln!("{}: {}", "warning".yellow().bold(), msg);
}

/// Format a fractional adjustment as a signed percentage ("+5.0%")
pub(crate) fn format_adjustment(fraction: f64) -> String {
    let pct = fraction * 100.0;
    // Avoid printing "-0.0%"
    let pct = if (pct * 10.0).round() == 0.0 { 0.0 } else { pct };
    format!("{:+.1}%", pct)
}

pub(crate) fn print_separator(columns: usize) {
    println!("{}", "-".repeat(LABEL_WIDTH + columns * COLUMN_WIDTH));
}

pub(crate) fn print_header(series: &[DataPoint]) {
    print!("{:<width$}", "Year", width = LABEL_WIDTH);
    for point in series {
        print!("{:>width$}", point.index, width = COLUMN_WIDTH);
    }
    println!();
}

pub(crate) fn print_row(label: &str, series: &[DataPoint]) {
    print!("{:<width$}", label, width = LABEL_WIDTH);
    for point in series {
        if point.value.is_finite() {
            print!("{:>width$.1}", point.value, width = COLUMN_WIDTH);
        } else {
            print!("{:>width$}", "-", width = COLUMN_WIDTH);
        }
    }
    println!();
}

pub(crate) fn print_diff_row(label: &str, base: &[DataPoint], adjusted: &[DataPoint]) {
    print!("{:<width$}", label, width = LABEL_WIDTH);
    for (b, a) in base.iter().zip(adjusted) {
        let diff = a.value - b.value;
        if diff.is_finite() {
            print_colored_diff(diff);
        } else {
            print!("{:>width$}", "-", width = COLUMN_WIDTH);
        }
    }
    println!();
}

fn print_colored_diff(diff: f64) {
    let rounded = (diff * 10.0).round() / 10.0;
    if rounded == 0.0 {
        print!("{:>width$}", "0.0", width = COLUMN_WIDTH);
    } else {
        let formatted = format!("{:>+width$.1}", diff, width = COLUMN_WIDTH);
        if rounded > 0.0 {
            print!("{}", formatted.green());
        } else {
            print!("{}", formatted.red());
        }
    }
}

/// Fix buttons: active ones highlighted, inactive ones dimmed
pub(crate) fn print_fixes(model: &ProjectionModel) {
    print!("Fixes:");
    for adjustment in model.catalog() {
        let tag = format!("[{}]", adjustment.label());
        if model.is_selected(adjustment.id) {
            print!(" {}", tag.black().on_yellow().bold());
        } else {
            print!(" {}", tag.dimmed());
        }
    }
    println!();
}

pub(crate) fn print_state(model: &ProjectionModel) {
    print_fixes(model);
    println!(
        "Total adjustment: {}",
        format_adjustment(model.total_adjustment())
    );
    println!(
        "Years: {} ({}-{}), Scale: {} ({}-{})",
        model.range_size(),
        MIN_RANGE_SIZE,
        MAX_RANGE_SIZE,
        model.scale_base(),
        MIN_SCALE_BASE,
        MAX_SCALE_BASE
    );
    println!();
}

/// Print the series table. The Base and Diff rows only appear when a fix
/// is active, since they would repeat the projection otherwise.
pub(crate) fn print_series(model: &ProjectionModel) {
    let adjusted = model.compute_series();

    println!("[Projection]");
    print_header(&adjusted);
    print_separator(adjusted.len());
    if model.selected().is_empty() {
        print_row("Value", &adjusted);
    } else {
        let base = model.base_series();
        print_row("Base", &base);
        print_row("Value", &adjusted);
        print_separator(adjusted.len());
        print_diff_row("Diff", &base, &adjusted);
    }
}

pub(crate) fn print_legend() {
    println!("Base: Projection without fixes (scale + (year - 1) * (80 + years * 5))");
    println!("Value: Base scaled by (1 + total adjustment)");
    println!("Diff: Difference between Value and Base");
}

pub(crate) fn print_catalog(model: &ProjectionModel) {
    println!("Available fixes:");
    for adjustment in model.catalog() {
        println!(
            "  {:>6}: {}",
            adjustment.label(),
            format_adjustment(adjustment.effect)
        );
    }
    println!();
}

pub(crate) fn print_commands() {
    println!("Commands:");
    println!("  1, 2, 3 / fix N        Toggle a fix");
    println!("  reset, r               Clear all fixes");
    println!("  +, years+, right       More years");
    println!("  -, years-, left        Fewer years");
    println!("  up, scale+             Raise scale by 50");
    println!("  down, scale-           Lower scale by 50");
    println!("  show, s                Reprint the projection");
    println!("  help, h, ?             Show this help");
    println!("  quit, q, exit          Exit");
    println!();
}
