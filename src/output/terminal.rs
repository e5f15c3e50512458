//! Terminal output with colors.

use crate::models::PrefixResult;
use crate::processing::OverlapSummary;
use colored::Colorize;

/// Format a value as a quoted, right-aligned field.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
///
/// # Returns
/// A quoted, right-aligned string
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string();
    let quoted = format!("\"{value_str}\"");
    format!("{quoted:>width$}")
}

/// Short status label for a result.
pub fn status_label(result: &PrefixResult) -> &'static str {
    if result.overlap {
        "OVERLAP"
    } else if result.is_invalid() {
        "INVALID"
    } else {
        "OK"
    }
}

/// One aligned report line, without colors.
pub fn format_report_row(index: usize, result: &PrefixResult) -> String {
    format!(
        "{index:>4}  {status:<7}  {cidr:<43}  {message}",
        status = status_label(result),
        cidr = result.cidr(),
        message = result.message.as_deref().unwrap_or(""),
    )
}

/// Print every result and the summary to stdout.
pub fn print_report(results: &[PrefixResult]) {
    log::info!("#Start print_report() results={}", results.len());
    for (i, result) in results.iter().enumerate() {
        let row = format_report_row(i, result);
        if result.overlap {
            println!("{}", row.red());
        } else if result.is_invalid() {
            println!("{}", row.yellow());
        } else {
            println!("{}", row.green());
        }
    }

    let summary = OverlapSummary::from_results(results);
    let line = format!("# {summary}");
    if summary.is_clean() {
        println!("{}", line.on_green());
    } else {
        println!("{}", line.on_red());
    }
}
