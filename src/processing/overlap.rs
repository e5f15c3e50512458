//! Prefix overlap detection over an ordered batch.
//!
//! Every call builds its own [`PrefixTrie`] per address family, inserts the
//! entries in input order and returns one [`PrefixResult`] per entry. A
//! conflicting or unparsable entry is reported and the batch carries on.

use crate::models::{AddressFamily, PrefixEntry, PrefixResult};
use crate::trie::PrefixTrie;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Check a batch of prefixes of one address family for overlaps.
///
/// # Arguments
/// * `family` - Address family every entry is encoded as
/// * `entries` - Prefixes in registration order
///
/// # Returns
/// One result per entry, same order and cardinality as `entries`
pub fn check_overlaps(family: AddressFamily, entries: &[PrefixEntry]) -> Vec<PrefixResult> {
    log::debug!("#Start check_overlaps() {family} entries={}", entries.len());
    let mut trie = PrefixTrie::new();
    entries
        .iter()
        .map(|entry| check_entry(&mut trie, family, entry))
        .collect()
}

/// [`check_overlaps`] for IPv4 dotted-decimal entries.
pub fn check_overlaps_ipv4(entries: &[PrefixEntry]) -> Vec<PrefixResult> {
    check_overlaps(AddressFamily::Ipv4, entries)
}

/// [`check_overlaps`] for IPv6 entries (compressed notation allowed).
pub fn check_overlaps_ipv6(entries: &[PrefixEntry]) -> Vec<PrefixResult> {
    check_overlaps(AddressFamily::Ipv6, entries)
}

/// Check a batch mixing IPv4 and IPv6 entries.
///
/// The family of each entry is detected from its address text; each family
/// gets its own trie, so prefixes only ever conflict within a family.
pub fn check_mixed_overlaps(entries: &[PrefixEntry]) -> Vec<PrefixResult> {
    log::debug!("#Start check_mixed_overlaps() entries={}", entries.len());
    let mut tries: HashMap<AddressFamily, PrefixTrie> = HashMap::new();
    entries
        .iter()
        .map(|entry| {
            let family = AddressFamily::detect(&entry.address);
            let trie = tries.entry(family).or_default();
            check_entry(trie, family, entry)
        })
        .collect()
}

fn check_entry(trie: &mut PrefixTrie, family: AddressFamily, entry: &PrefixEntry) -> PrefixResult {
    let encoded = family.check_prefix_length(entry.prefix_length).and_then(|len| {
        let bits = family.encode(&entry.address)?;
        Ok((bits, len))
    });
    let (bits, prefix_len) = match encoded {
        Ok(encoded) => encoded,
        Err(e) => {
            log::warn!("Skipping invalid {family} prefix {entry}: {e}");
            return PrefixResult::invalid(entry, e);
        }
    };

    match trie.insert(&bits, prefix_len) {
        Ok(()) => {
            log::debug!("Registered {entry}");
            PrefixResult::accepted(entry)
        }
        Err(kind) => {
            log::debug!("Overlap on {entry}: {kind:?}");
            PrefixResult::conflict(entry, kind)
        }
    }
}

/// Counts over a checked batch.
#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct OverlapSummary {
    pub total: usize,
    pub accepted: usize,
    pub conflicts: usize,
    pub invalid: usize,
}

impl OverlapSummary {
    pub fn from_results(results: &[PrefixResult]) -> OverlapSummary {
        let mut summary = OverlapSummary {
            total: results.len(),
            ..Default::default()
        };
        for result in results {
            if result.overlap {
                summary.conflicts += 1;
            } else if result.is_invalid() {
                summary.invalid += 1;
            } else {
                summary.accepted += 1;
            }
        }
        summary
    }

    /// True when every entry was registered.
    pub fn is_clean(&self) -> bool {
        self.conflicts == 0 && self.invalid == 0
    }
}

impl std::fmt::Display for OverlapSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} prefixes: {} accepted, {} overlapping, {} invalid",
            self.total, self.accepted, self.conflicts, self.invalid
        )
    }
}

/// Log overlapping and invalid entries as warnings, and the summary.
pub fn log_overlaps(results: &[PrefixResult]) {
    let summary = OverlapSummary::from_results(results);
    if summary.is_clean() {
        log::info!("No overlapping prefixes found. {summary}");
        return;
    }

    log::warn!(
        "Found {} overlapping and {} invalid prefix(es):",
        summary.conflicts,
        summary.invalid
    );
    for (i, result) in results.iter().enumerate() {
        if result.is_accepted() {
            continue;
        }
        log::warn!(
            "  [{i}] {}: {}",
            result.cidr(),
            result.message.as_deref().unwrap_or("unknown")
        );
    }
    log::info!("{summary}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::encode_ipv4;
    use crate::trie::ConflictKind;

    fn entries(list: &[(&str, u32)]) -> Vec<PrefixEntry> {
        list.iter().map(|(a, l)| PrefixEntry::new(a, *l)).collect()
    }

    #[test]
    fn test_ipv4_no_overlaps() {
        let results = check_overlaps_ipv4(&entries(&[
            ("192.168.0.0", 16),
            ("10.0.0.0", 8),
            ("172.16.0.0", 12),
        ]));
        assert_eq!(results.len(), 3);
        assert!(results.iter().all(|r| !r.overlap && r.conflict.is_none()));
    }

    #[test]
    fn test_ipv4_overlap_kinds() {
        let results = check_overlaps_ipv4(&entries(&[
            ("192.168.0.0", 16),
            ("192.168.0.0", 16),
            ("192.168.1.0", 24),
            ("192.168.0.0", 15),
        ]));
        assert_eq!(results[0].conflict, None);
        assert!(!results[0].overlap);
        assert_eq!(results[1].conflict, Some(ConflictKind::ExactDuplicate));
        assert_eq!(results[2].conflict, Some(ConflictKind::ContainedInExisting));
        assert_eq!(results[3].conflict, Some(ConflictKind::ContainsExisting));
        assert!(results[1..].iter().all(|r| r.overlap));
        assert_eq!(
            results[2].message.as_deref(),
            Some("The specified prefix is included in an existing prefix.")
        );
    }

    #[test]
    fn test_ipv6_overlap_kinds() {
        let results = check_overlaps_ipv6(&entries(&[
            ("2001:db8::", 32),
            ("2001:db8::", 32),
            ("2001:db8:1::", 48),
            ("2001:db8::", 16),
            ("2001:db9::", 32),
        ]));
        let kinds: Vec<Option<ConflictKind>> = results.iter().map(|r| r.conflict).collect();
        assert_eq!(
            kinds,
            vec![
                None,
                Some(ConflictKind::ExactDuplicate),
                Some(ConflictKind::ContainedInExisting),
                Some(ConflictKind::ContainsExisting),
                None,
            ]
        );
    }

    #[test]
    fn test_invalid_entry_does_not_abort_batch() {
        let results = check_overlaps_ipv4(&entries(&[
            ("10.0.0.0", 8),
            ("10.0.0.300", 24),
            ("10.1.0.0", 33),
            ("10.2.0.0", 16),
        ]));
        assert_eq!(results.len(), 4);
        assert!(results[0].is_accepted());
        assert!(results[1].is_invalid() && !results[1].overlap);
        assert!(matches!(
            results[2].error,
            Some(crate::error::AddressError::InvalidPrefixLength { length: 33, max: 32 })
        ));
        assert_eq!(results[3].conflict, Some(ConflictKind::ContainedInExisting));
    }

    #[test]
    fn test_matches_direct_trie_calls() {
        let batch = entries(&[
            ("10.0.0.0", 8),
            ("10.10.0.0", 16),
            ("11.0.0.0", 8),
            ("10.0.0.0", 7),
            ("8.0.0.0", 7),
            ("11.0.0.0", 8),
        ]);
        let results = check_overlaps_ipv4(&batch);

        let mut trie = PrefixTrie::new();
        for (entry, result) in batch.iter().zip(&results) {
            let bits = encode_ipv4(&entry.address).unwrap();
            let direct = trie.insert(&bits, entry.prefix_length as usize).err();
            assert_eq!(result.conflict, direct, "mismatch for {entry}");
        }
    }

    #[test]
    fn test_mixed_families_do_not_conflict() {
        let results = check_mixed_overlaps(&entries(&[
            ("0.0.0.0", 0),
            ("::", 0),
            ("10.0.0.0", 8),
            ("2001:db8::", 32),
        ]));
        assert!(results[0].is_accepted());
        assert!(results[1].is_accepted());
        assert_eq!(results[2].conflict, Some(ConflictKind::ContainedInExisting));
        assert_eq!(results[3].conflict, Some(ConflictKind::ContainedInExisting));
    }

    #[test]
    fn test_summary() {
        let results = check_overlaps_ipv4(&entries(&[
            ("10.0.0.0", 8),
            ("10.0.0.0", 8),
            ("bad", 8),
            ("11.0.0.0", 8),
        ]));
        let summary = OverlapSummary::from_results(&results);
        assert_eq!(
            summary,
            OverlapSummary {
                total: 4,
                accepted: 2,
                conflicts: 1,
                invalid: 1
            }
        );
        assert!(!summary.is_clean());
        assert_eq!(
            summary.to_string(),
            "4 prefixes: 2 accepted, 1 overlapping, 1 invalid"
        );
        log_overlaps(&results);
    }

    #[test]
    fn test_empty_batch() {
        assert!(check_overlaps_ipv6(&[]).is_empty());
        assert!(OverlapSummary::from_results(&[]).is_clean());
    }
}
