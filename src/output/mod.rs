//! Output formatting for prefix results.
//!
//! This module handles formatting and outputting overlap results:
//! - [`csv`] - CSV output formatting
//! - [`json`] - JSON output
//! - [`terminal`] - Terminal output with colors

mod csv;
mod json;
mod terminal;

pub use csv::{format_csv_row, print_csv, CSV_HEADER};
pub use json::{print_json, results_to_json};
pub use terminal::{format_field, format_report_row, print_report};
