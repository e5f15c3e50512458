//! IPv4 dotted-decimal encoding.

use super::push_bits;
use crate::error::AddressError;

/// Number of bits in an encoded IPv4 address.
pub const IPV4_BITS: usize = 32;

/// Parse a dotted-decimal IPv4 address into its four octets.
///
/// Strict: exactly four dot separated decimal octets, each 0-255.
///
/// # Examples
/// ```
/// use prefix_overlap::encoding::parse_ipv4_octets;
/// assert_eq!(parse_ipv4_octets("10.1.2.3").unwrap(), [10, 1, 2, 3]);
/// assert!(parse_ipv4_octets("10.1.2.256").is_err());
/// ```
pub fn parse_ipv4_octets(address: &str) -> Result<[u8; 4], AddressError> {
    let parts: Vec<&str> = address.split('.').collect();
    if parts.len() != 4 {
        return Err(AddressError::InvalidAddress(format!(
            "{address}: expected 4 octets, found {}",
            parts.len()
        )));
    }

    let mut octets = [0u8; 4];
    for (octet, part) in octets.iter_mut().zip(parts) {
        // u8::from_str would also accept a leading '+'
        if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(AddressError::InvalidAddress(format!(
                "{address}: octet '{part}' is not a decimal number"
            )));
        }
        *octet = part.parse().map_err(|_| {
            AddressError::InvalidAddress(format!("{address}: octet '{part}' is out of range 0-255"))
        })?;
    }
    Ok(octets)
}

/// Encode an IPv4 address as 32 bits, each octet most significant bit first.
///
/// # Examples
/// ```
/// use prefix_overlap::encoding::encode_ipv4;
/// let bits = encode_ipv4("128.0.0.1").unwrap();
/// assert_eq!(bits.len(), 32);
/// assert_eq!(bits[0], 1);
/// assert_eq!(bits[31], 1);
/// ```
pub fn encode_ipv4(address: &str) -> Result<Vec<u8>, AddressError> {
    let octets = parse_ipv4_octets(address)?;
    let mut bits = Vec::with_capacity(IPV4_BITS);
    for octet in octets {
        push_bits(&mut bits, octet as u32, 8);
    }
    Ok(bits)
}
