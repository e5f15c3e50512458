//! Prefix input parsing.
//!
//! - [`cidr`] - `address/length` text to [`crate::models::PrefixEntry`]
//! - [`file`] - Reading JSON or line oriented prefix files

mod cidr;
mod file;

pub use cidr::parse_cidr;
pub use file::{parse_prefix_lines, read_prefix_file};
