//! CIDR text parsing.

use crate::error::AddressError;
use crate::models::PrefixEntry;
use regex::Regex;
use std::sync::OnceLock;

/// `address/length` with optional surrounding whitespace and trailing `# comment`.
static CIDR_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_cidr_regex() -> &'static Regex {
    CIDR_REGEX.get_or_init(|| {
        Regex::new(r"^\s*(?P<addr>[0-9A-Fa-f:.]+)/(?P<len>\d+)\s*(?:#.*)?$").expect("Invalid Regex")
    })
}

/// Parse `address/length` text into a [`PrefixEntry`].
///
/// Only the shape is checked here; the address itself is validated when it
/// is encoded.
///
/// # Examples
/// ```
/// use prefix_overlap::input::parse_cidr;
/// let entry = parse_cidr(" 2001:db8::/32  # docs").unwrap();
/// assert_eq!(entry.address, "2001:db8::");
/// assert_eq!(entry.prefix_length, 32);
/// ```
pub fn parse_cidr(text: &str) -> Result<PrefixEntry, AddressError> {
    let caps = get_cidr_regex().captures(text).ok_or_else(|| {
        AddressError::MalformedAddress(format!("'{}' is not address/length", text.trim()))
    })?;
    let address = &caps["addr"];
    let prefix_length: u32 = caps["len"].parse().map_err(|_| {
        AddressError::MalformedAddress(format!("'{}': prefix length too large", text.trim()))
    })?;
    Ok(PrefixEntry::new(address, prefix_length))
}

/// Whether a line carries no prefix (blank or only a comment).
pub(crate) fn is_blank_or_comment(line: &str) -> bool {
    let line = line.trim();
    line.is_empty() || line.starts_with('#')
}
