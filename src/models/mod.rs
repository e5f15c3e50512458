//! Domain models for prefix overlap checking.
//!
//! This module contains the core data structures used throughout the application:
//! - [`AddressFamily`] - IPv4 / IPv6 selection, widths and encoding
//! - [`PrefixEntry`] and [`PrefixResult`] - batch input and per-entry outcome
//! - [`AddressRange`] - IPv4 CIDR integer ranges for the pairwise check

mod family;
mod prefix;
mod range;

// Re-export public types
pub use family::AddressFamily;
pub use prefix::{PrefixEntry, PrefixResult};
pub use range::{
    cidr_to_range, get_cidr_mask, ip_ranges_overlap, ip_to_int, ranges_overlap, AddressRange,
    MAX_LENGTH,
};
