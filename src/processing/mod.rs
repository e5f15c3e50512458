//! Prefix batch processing logic.
//!
//! This module contains the overlap checks run over a list of prefixes:
//! - [`overlap`] - Trie based per-entry overlap classification
//! - [`range_check`] - Pairwise IPv4 range intersection

mod overlap;
mod range_check;

// Re-export public functions
pub use overlap::{
    check_mixed_overlaps, check_overlaps, check_overlaps_ipv4, check_overlaps_ipv6, log_overlaps,
    OverlapSummary,
};
pub use range_check::find_range_overlaps;
