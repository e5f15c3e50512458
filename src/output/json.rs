//! JSON output of prefix results.

use crate::models::PrefixResult;
use std::error::Error;

/// Render results as a pretty printed JSON array.
pub fn results_to_json(results: &[PrefixResult]) -> Result<String, Box<dyn Error>> {
    serde_json::to_string_pretty(results)
        .map_err(|e| format!("Error serializing results JSON: {e}").into())
}

/// Print results as JSON to stdout.
pub fn print_json(results: &[PrefixResult]) -> Result<(), Box<dyn Error>> {
    println!("{}", results_to_json(results)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PrefixEntry;
    use crate::trie::ConflictKind;

    #[test]
    fn test_results_to_json_roundtrip() {
        let entry = PrefixEntry::new("10.0.0.0", 8);
        let results = vec![
            PrefixResult::accepted(&entry),
            PrefixResult::conflict(&entry, ConflictKind::ExactDuplicate),
        ];
        let json = results_to_json(&results).unwrap();
        assert!(json.contains("\"exactDuplicate\""));
        let back: Vec<PrefixResult> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, results);
    }
}
