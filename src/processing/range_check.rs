//! Pairwise IPv4 overlap check on integer ranges.
//!
//! Independent of the trie: every pair of CIDRs is compared as `{start, end}`
//! intervals. Quadratic, meant for small lists and for cross-checking.

use crate::error::AddressError;
use crate::models::{cidr_to_range, ranges_overlap, AddressRange};
use itertools::Itertools;

/// Find every pair of CIDRs (by index, `i < j`) whose ranges intersect.
///
/// # Arguments
/// * `cidrs` - IPv4 CIDR strings, a bare address meaning `/32`
///
/// # Returns
/// * `Ok(pairs)` - Overlapping index pairs in ascending order
/// * `Err` - The first CIDR that fails to parse
pub fn find_range_overlaps<S: AsRef<str>>(cidrs: &[S]) -> Result<Vec<(usize, usize)>, AddressError> {
    let ranges: Vec<AddressRange> = cidrs
        .iter()
        .map(|c| cidr_to_range(c.as_ref()))
        .collect::<Result<_, _>>()?;

    let pairs: Vec<(usize, usize)> = ranges
        .iter()
        .enumerate()
        .tuple_combinations()
        .filter(|((_, a), (_, b))| ranges_overlap(a, b))
        .map(|((i, _), (j, _))| (i, j))
        .collect();

    log::debug!(
        "find_range_overlaps() checked {} ranges, {} overlapping pairs",
        ranges.len(),
        pairs.len()
    );
    Ok(pairs)
}
