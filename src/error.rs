//! Error types for address parsing and encoding.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while turning address text into bits or integers.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "type", content = "message", rename_all = "camelCase")]
pub enum AddressError {
    /// Text cannot be split/expanded into the expected shape
    /// (bad `::` compression, wrong group count, bad CIDR syntax).
    #[error("Malformed address: {0}")]
    MalformedAddress(String),

    /// An octet or group is not a number in range.
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    /// Prefix length exceeds the address width.
    #[error("Invalid prefix length {length}, expected 0..={max}")]
    InvalidPrefixLength { length: u32, max: u8 },
}
