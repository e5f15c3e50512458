//! IPv6 expansion and encoding.

use super::push_bits;
use crate::error::AddressError;
use itertools::Itertools;

/// Number of bits in an encoded IPv6 address.
pub const IPV6_BITS: usize = 128;

const GROUPS: usize = 8;

/// Expand an IPv6 address to eight colon separated, zero padded groups.
///
/// `::` stands for zero or more all-zero groups and may appear at most once.
/// Without `::` the address must already have eight groups.
///
/// # Examples
/// ```
/// use prefix_overlap::encoding::expand_ipv6;
/// assert_eq!(
///     expand_ipv6("2001:db8::1").unwrap(),
///     "2001:0db8:0000:0000:0000:0000:0000:0001"
/// );
/// ```
pub fn expand_ipv6(address: &str) -> Result<String, AddressError> {
    let parts: Vec<&str> = address.split("::").collect();
    if parts.len() > 2 {
        return Err(AddressError::MalformedAddress(format!(
            "{address}: '::' may appear only once"
        )));
    }
    let compressed = parts.len() == 2;

    let left = split_groups(parts[0]);
    let right = parts.get(1).map(|p| split_groups(p)).unwrap_or_default();

    let present = left.len() + right.len();
    if present > GROUPS {
        return Err(AddressError::MalformedAddress(format!(
            "{address}: too many groups"
        )));
    }
    if !compressed && present != GROUPS {
        return Err(AddressError::MalformedAddress(format!(
            "{address}: expected {GROUPS} groups, found {present}"
        )));
    }

    for group in left.iter().chain(right.iter()) {
        if group.len() > 4 || !group.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(AddressError::InvalidAddress(format!(
                "{address}: group '{group}' is not a 16-bit hex value"
            )));
        }
    }

    let missing = GROUPS - present;
    let expanded = left
        .iter()
        .copied()
        .chain(std::iter::repeat("0000").take(missing))
        .chain(right.iter().copied())
        .map(|group| format!("{group:0>4}"))
        .join(":");

    Ok(expanded)
}

/// Split on single colons, dropping the empty tokens left by leading/trailing colons.
fn split_groups(part: &str) -> Vec<&str> {
    part.split(':').filter(|g| !g.is_empty()).collect()
}

/// Encode an IPv6 address as 128 bits, each group most significant bit first.
pub fn encode_ipv6(address: &str) -> Result<Vec<u8>, AddressError> {
    let expanded = expand_ipv6(address)?;
    let groups: Vec<&str> = expanded.split(':').collect();
    if groups.len() != GROUPS {
        return Err(AddressError::MalformedAddress(format!(
            "invalid expanded IPv6 address: {expanded}"
        )));
    }

    let mut bits = Vec::with_capacity(IPV6_BITS);
    for group in groups {
        let value = u16::from_str_radix(group, 16).map_err(|e| {
            AddressError::InvalidAddress(format!("{address}: group '{group}': {e}"))
        })?;
        push_bits(&mut bits, value as u32, 16);
    }
    Ok(bits)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group_bits(value: u16) -> Vec<u8> {
        (0..16).rev().map(|i| ((value >> i) & 1) as u8).collect()
    }

    #[test]
    fn test_expand_ipv6() {
        assert_eq!(
            expand_ipv6("2001:db8::1").unwrap(),
            "2001:0db8:0000:0000:0000:0000:0000:0001"
        );
        assert_eq!(
            expand_ipv6("fe80::1ff:fe23:4567:890a").unwrap(),
            "fe80:0000:0000:0000:01ff:fe23:4567:890a"
        );
    }

    #[test]
    fn test_expand_ipv6_edges() {
        assert_eq!(
            expand_ipv6("::").unwrap(),
            "0000:0000:0000:0000:0000:0000:0000:0000"
        );
        assert_eq!(
            expand_ipv6("::1").unwrap(),
            "0000:0000:0000:0000:0000:0000:0000:0001"
        );
        assert_eq!(
            expand_ipv6("2001:db8::").unwrap(),
            "2001:0db8:0000:0000:0000:0000:0000:0000"
        );
    }

    #[test]
    fn test_expand_ipv6_empty_compression() {
        let expanded = "0001:0002:0003:0004:0005:0006:0007:0008";
        assert_eq!(expand_ipv6("1:2:3:4::5:6:7:8").unwrap(), expanded);
        assert_eq!(expand_ipv6("::1:2:3:4:5:6:7:8").unwrap(), expanded);
        assert_eq!(
            encode_ipv6("1:2:3:4::5:6:7:8").unwrap(),
            encode_ipv6(expanded).unwrap()
        );
    }

    #[test]
    fn test_expand_ipv6_identity() {
        let expanded = "2001:0db8:0000:0000:0000:0000:0000:0001";
        assert_eq!(expand_ipv6(expanded).unwrap(), expanded);
    }

    #[test]
    fn test_expand_ipv6_malformed() {
        for bad in [
            "1::2::3",
            "1:2:3:4:5:6:7:8:9",
            "1:2:3:4:5:6:7",
            "",
        ] {
            assert!(
                matches!(expand_ipv6(bad), Err(AddressError::MalformedAddress(_))),
                "expected MalformedAddress for {bad:?}"
            );
        }
    }

    #[test]
    fn test_expand_ipv6_invalid_group() {
        assert!(matches!(
            expand_ipv6("2001:db8::g"),
            Err(AddressError::InvalidAddress(_))
        ));
        assert!(matches!(
            expand_ipv6("2001:db8::12345"),
            Err(AddressError::InvalidAddress(_))
        ));
    }

    #[test]
    fn test_encode_ipv6() {
        let bits = encode_ipv6("2001:db8::1").unwrap();
        assert_eq!(bits.len(), 128);

        let mut expected = group_bits(0x2001);
        expected.extend(group_bits(0x0db8));
        expected.extend(vec![0; 16 * 5]);
        expected.extend(group_bits(0x0001));
        assert_eq!(bits, expected);
        assert_eq!(
            encode_ipv6("2001:0db8:0000:0000:0000:0000:0000:0001").unwrap(),
            expected
        );
    }

    #[test]
    fn test_encode_ipv6_link_local() {
        let bits = encode_ipv6("fe80::1ff:fe23:4567:890a").unwrap();
        let mut expected = group_bits(0xfe80);
        expected.extend(vec![0; 16 * 3]);
        for g in [0x01ff, 0xfe23, 0x4567, 0x890a] {
            expected.extend(group_bits(g));
        }
        assert_eq!(bits, expected);
    }
}
