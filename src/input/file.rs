//! Reading prefix lists from disk.

use super::cidr::{is_blank_or_comment, parse_cidr};
use crate::models::PrefixEntry;
use std::error::Error;
use std::path::Path;

/// Read a batch of prefixes from a file.
///
/// A `.json` file holds an array of `{"address", "prefixLength"}` objects.
/// Anything else is read as text, one `address/length` per line; blank lines
/// and `#` comments are skipped.
///
/// # Arguments
/// * `path` - Path to the prefix file
///
/// # Returns
/// * `Ok(Vec<PrefixEntry>)` - Entries in file order
/// * `Err` - If the file is missing or a line/record cannot be parsed
pub fn read_prefix_file<P: AsRef<Path>>(path: P) -> Result<Vec<PrefixEntry>, Box<dyn Error>> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(format!("Prefix file does not exist: {}", path.display()).into());
    }
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("Error reading prefix file {}: {e}", path.display()))?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let entries = if is_json {
        log::info!("Reading JSON prefix file: {}", path.display());
        serde_json::from_str(&content).map_err(|e| format!("Error parsing prefix JSON: {e}"))?
    } else {
        log::info!("Reading text prefix file: {}", path.display());
        parse_prefix_lines(&content)?
    };

    log::info!("Read {} prefixes from {}", entries.len(), path.display());
    Ok(entries)
}

/// Parse line oriented CIDR text; errors name the 1-based line number.
pub fn parse_prefix_lines(content: &str) -> Result<Vec<PrefixEntry>, Box<dyn Error>> {
    let mut entries = Vec::new();
    for (i, line) in content.lines().enumerate() {
        if is_blank_or_comment(line) {
            continue;
        }
        let entry = parse_cidr(line).map_err(|e| format!("line {}: {e}", i + 1))?;
        entries.push(entry);
    }
    Ok(entries)
}
