//! CSV output formatting for prefix results.

use super::terminal::{format_field, status_label};
use crate::models::PrefixResult;

/// CSV header matching [`format_csv_row`].
pub const CSV_HEADER: &str = r#" "cnt",   "status",                                  "prefix", "len", "conflict",  "message""#;

/// Format one result as a CSV row of quoted, right-aligned fields.
pub fn format_csv_row(index: usize, result: &PrefixResult) -> String {
    let conflict = result
        .conflict
        .map(|kind| format!("{kind:?}"))
        .unwrap_or_default();
    format!(
        "{cnt},{status},{prefix},{len},{conflict},{message}",
        cnt = format_field(index, 6),
        status = format_field(status_label(result), 9),
        prefix = format_field(escape_csv(&result.address), 42),
        len = format_field(result.prefix_length, 5),
        conflict = format_field(conflict, 21),
        message = format_field(escape_csv(result.message.as_deref().unwrap_or("")), 10),
    )
}

/// Print results as CSV to stdout.
pub fn print_csv(results: &[PrefixResult]) {
    log::info!("#Start print_csv() results={}", results.len());
    println!("{CSV_HEADER}");
    for (i, result) in results.iter().enumerate() {
        println!("{}", format_csv_row(i, result));
    }
}

/// Double any embedded quotes so the field survives quoting.
fn escape_csv(input: &str) -> String {
    input.replace('"', "\"\"")
}
