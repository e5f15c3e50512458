//! Overlap detection for IPv4/IPv6 address prefixes.
//!
//! Prefixes are encoded to bit sequences ([`encoding`]) and inserted into a
//! binary trie ([`trie`]) that classifies any overlap with an already
//! registered prefix as an exact duplicate, contained in an existing prefix,
//! or containing an existing prefix. [`processing`] runs whole batches.
//!
//! ```
//! use prefix_overlap::models::PrefixEntry;
//! use prefix_overlap::processing::check_overlaps_ipv4;
//! use prefix_overlap::trie::ConflictKind;
//!
//! let results = check_overlaps_ipv4(&[
//!     PrefixEntry::new("192.168.0.0", 16),
//!     PrefixEntry::new("192.168.1.0", 24),
//! ]);
//! assert!(!results[0].overlap);
//! assert_eq!(results[1].conflict, Some(ConflictKind::ContainedInExisting));
//! ```

pub mod config;
pub mod encoding;
pub mod error;
pub mod input;
pub mod logging;
pub mod models;
pub mod output;
pub mod processing;
pub mod trie;

use config::{Config, OutputFormat};
use processing::OverlapSummary;
use std::error::Error;

pub use error::AddressError;

/// Read the configured prefix file, check it and print the report.
///
/// IPv4 and IPv6 entries may be mixed; each family is checked in its own trie.
pub fn run(config: &Config) -> Result<OverlapSummary, Box<dyn Error>> {
    let entries = input::read_prefix_file(&config.input)?;
    let results = processing::check_mixed_overlaps(&entries);
    processing::log_overlaps(&results);

    match config.format {
        OutputFormat::Terminal => output::print_report(&results),
        OutputFormat::Csv => output::print_csv(&results),
        OutputFormat::Json => output::print_json(&results)?,
    }

    Ok(OverlapSummary::from_results(&results))
}
