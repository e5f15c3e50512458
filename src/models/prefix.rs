//! Prefix batch input and per-entry results.

use crate::error::AddressError;
use crate::trie::ConflictKind;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A prefix to register: address text plus prefix length.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct PrefixEntry {
    pub address: String,
    pub prefix_length: u32,
}

impl PrefixEntry {
    pub fn new(address: &str, prefix_length: u32) -> PrefixEntry {
        PrefixEntry {
            address: address.to_string(),
            prefix_length,
        }
    }
}

impl fmt::Display for PrefixEntry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.address, self.prefix_length)
    }
}

/// Outcome of checking one [`PrefixEntry`].
///
/// `overlap` is true exactly when `conflict` is set. An entry whose address
/// could not be encoded carries `error` instead and never overlaps.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PrefixResult {
    pub address: String,
    pub prefix_length: u32,
    pub overlap: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conflict: Option<ConflictKind>,
    /// Human readable conflict or error text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<AddressError>,
}

impl PrefixResult {
    pub fn accepted(entry: &PrefixEntry) -> PrefixResult {
        PrefixResult {
            address: entry.address.clone(),
            prefix_length: entry.prefix_length,
            overlap: false,
            conflict: None,
            message: None,
            error: None,
        }
    }

    pub fn conflict(entry: &PrefixEntry, kind: ConflictKind) -> PrefixResult {
        PrefixResult {
            overlap: true,
            conflict: Some(kind),
            message: Some(kind.message().to_string()),
            ..Self::accepted(entry)
        }
    }

    pub fn invalid(entry: &PrefixEntry, error: AddressError) -> PrefixResult {
        PrefixResult {
            message: Some(error.to_string()),
            error: Some(error),
            ..Self::accepted(entry)
        }
    }

    pub fn is_accepted(&self) -> bool {
        !self.overlap && self.error.is_none()
    }

    pub fn is_invalid(&self) -> bool {
        self.error.is_some()
    }

    /// `address/length` for display.
    pub fn cidr(&self) -> String {
        format!("{}/{}", self.address, self.prefix_length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_invariant() {
        let entry = PrefixEntry::new("10.0.0.0", 8);
        let ok = PrefixResult::accepted(&entry);
        assert!(!ok.overlap && ok.conflict.is_none() && ok.is_accepted());

        let dup = PrefixResult::conflict(&entry, ConflictKind::ExactDuplicate);
        assert!(dup.overlap && dup.conflict.is_some() && !dup.is_accepted());
        assert_eq!(dup.message.as_deref(), Some("The same prefix already exists."));

        let bad = PrefixResult::invalid(
            &entry,
            AddressError::InvalidAddress("10.0.0.300".to_string()),
        );
        assert!(!bad.overlap && bad.conflict.is_none() && bad.is_invalid());
    }

    #[test]
    fn test_json_shape() {
        let entry = PrefixEntry::new("192.168.1.0", 24);
        let result = PrefixResult::conflict(&entry, ConflictKind::ContainedInExisting);
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["address"], "192.168.1.0");
        assert_eq!(json["prefixLength"], 24);
        assert_eq!(json["overlap"], true);
        assert_eq!(json["conflict"], "containedInExisting");
        assert!(json.get("error").is_none());

        let ok = serde_json::to_value(PrefixResult::accepted(&entry)).unwrap();
        assert!(ok.get("conflict").is_none());
        assert!(ok.get("message").is_none());
    }

    #[test]
    fn test_entry_from_json() {
        let entries: Vec<PrefixEntry> =
            serde_json::from_str(r#"[{"address":"2001:db8::","prefixLength":32}]"#).unwrap();
        assert_eq!(entries, vec![PrefixEntry::new("2001:db8::", 32)]);
        assert_eq!(entries[0].to_string(), "2001:db8::/32");
    }
}
