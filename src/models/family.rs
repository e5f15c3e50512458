//! Address family selection.

use crate::encoding::{encode_ipv4, encode_ipv6, IPV4_BITS, IPV6_BITS};
use crate::error::AddressError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// IP address family of a prefix.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AddressFamily {
    Ipv4,
    Ipv6,
}

impl AddressFamily {
    /// Guess the family from address text: anything with a `:` is IPv6.
    pub fn detect(address: &str) -> AddressFamily {
        if address.contains(':') {
            AddressFamily::Ipv6
        } else {
            AddressFamily::Ipv4
        }
    }

    /// Longest valid prefix length (the address width in bits).
    pub fn max_prefix_length(&self) -> u8 {
        match self {
            AddressFamily::Ipv4 => IPV4_BITS as u8,
            AddressFamily::Ipv6 => IPV6_BITS as u8,
        }
    }

    /// Encode `address` to this family's bit sequence.
    pub fn encode(&self, address: &str) -> Result<Vec<u8>, AddressError> {
        match self {
            AddressFamily::Ipv4 => encode_ipv4(address),
            AddressFamily::Ipv6 => encode_ipv6(address),
        }
    }

    /// Check a prefix length against the address width.
    pub fn check_prefix_length(&self, length: u32) -> Result<usize, AddressError> {
        let max = self.max_prefix_length();
        if length > max as u32 {
            Err(AddressError::InvalidPrefixLength { length, max })
        } else {
            Ok(length as usize)
        }
    }
}

impl fmt::Display for AddressFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddressFamily::Ipv4 => write!(f, "IPv4"),
            AddressFamily::Ipv6 => write!(f, "IPv6"),
        }
    }
}
