//! Address to bit-sequence encoding.
//!
//! Turns textual addresses into fixed-width sequences of `0`/`1` values,
//! most significant bit first, ready for [`crate::trie::PrefixTrie`]:
//! - [`ipv4`] - dotted-decimal IPv4 (32 bits)
//! - [`ipv6`] - colon-hex IPv6 with `::` expansion (128 bits)

mod ipv4;
mod ipv6;

pub use ipv4::{encode_ipv4, parse_ipv4_octets, IPV4_BITS};
pub use ipv6::{encode_ipv6, expand_ipv6, IPV6_BITS};

/// Push the low `width` bits of `value` onto `bits`, most significant first.
pub(crate) fn push_bits(bits: &mut Vec<u8>, value: u32, width: u32) {
    for i in (0..width).rev() {
        bits.push(((value >> i) & 1) as u8);
    }
}
