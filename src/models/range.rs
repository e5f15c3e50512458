//! IPv4 CIDR integer arithmetic.
//!
//! Provides [`AddressRange`] and the helpers used by the pairwise (non-trie)
//! overlap check: CIDR text to `{start, end}` and interval intersection.

use crate::encoding::{parse_ipv4_octets, IPV4_BITS};
use crate::error::AddressError;
use serde::{Deserialize, Serialize};
use std::net::Ipv4Addr;

/// Maximum length for an IPv4 prefix (32 bits).
pub const MAX_LENGTH: u8 = IPV4_BITS as u8;

/// Inclusive integer range covered by an IPv4 prefix.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AddressRange {
    /// Network address.
    pub start: u32,
    /// Broadcast address.
    pub end: u32,
}

impl AddressRange {
    pub fn contains(&self, other: &AddressRange) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Number of addresses in the range.
    pub fn size(&self) -> u64 {
        (self.end - self.start) as u64 + 1
    }
}

impl std::fmt::Display for AddressRange {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}-{}", Ipv4Addr::from(self.start), Ipv4Addr::from(self.end))
    }
}

/// Convert a dotted-decimal IPv4 address to its integer value.
pub fn ip_to_int(address: &str) -> Result<u32, AddressError> {
    parse_ipv4_octets(address).map(u32::from_be_bytes)
}

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use prefix_overlap::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
/// assert_eq!(get_cidr_mask(0).unwrap(), 0);
/// ```
pub fn get_cidr_mask(len: u32) -> Result<u32, AddressError> {
    if len > MAX_LENGTH as u32 {
        Err(AddressError::InvalidPrefixLength {
            length: len,
            max: MAX_LENGTH,
        })
    } else {
        let right_len = MAX_LENGTH as u32 - len;
        let all_bits = u32::MAX as u64;

        let mask = (all_bits >> right_len) << right_len;

        Ok(mask as u32)
    }
}

/// Parse `a.b.c.d/len` into the range it covers. A bare address means `/32`.
///
/// # Examples
/// ```
/// use prefix_overlap::models::cidr_to_range;
/// let range = cidr_to_range("192.168.1.77/24").unwrap();
/// assert_eq!(range.to_string(), "192.168.1.0-192.168.1.255");
/// ```
pub fn cidr_to_range(cidr: &str) -> Result<AddressRange, AddressError> {
    let parts: Vec<&str> = cidr.trim().split('/').collect();
    let len: u32 = match parts.as_slice() {
        [_] => MAX_LENGTH as u32,
        [_, len] => len.parse().map_err(|_| {
            AddressError::MalformedAddress(format!("{cidr}: invalid prefix length '{len}'"))
        })?,
        _ => {
            return Err(AddressError::MalformedAddress(format!(
                "{cidr}: invalid CIDR notation"
            )))
        }
    };

    let addr = ip_to_int(parts[0])?;
    let mask = get_cidr_mask(len)?;

    let start = addr & mask;
    let end = start | !mask;
    Ok(AddressRange { start, end })
}

/// Whether two inclusive ranges share at least one address.
pub fn ranges_overlap(a: &AddressRange, b: &AddressRange) -> bool {
    !(a.end < b.start || b.end < a.start)
}

/// Whether two CIDR strings cover any common address.
pub fn ip_ranges_overlap(cidr1: &str, cidr2: &str) -> Result<bool, AddressError> {
    let range1 = cidr_to_range(cidr1)?;
    let range2 = cidr_to_range(cidr2)?;
    Ok(ranges_overlap(&range1, &range2))
}
