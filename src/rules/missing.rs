//! Missing key detection.
//!
//! Finds keys that exist in the base locale file but not in a comparison
//! locale file. Only keys are compared; values are ignored.

use crate::{core::StringsTable, issues::MissingKeyIssue};

/// Keys of `base` that `compare` lacks, sorted lexicographically.
pub fn missing_keys(base: &StringsTable, compare: &StringsTable) -> Vec<String> {
    let compare_keys = compare.key_set();
    let mut missing: Vec<String> = base
        .key_set()
        .into_iter()
        .filter(|key| !compare_keys.contains(key))
        .map(str::to_string)
        .collect();
    missing.sort();
    missing
}

/// Build one issue per missing key, located at the key's line in the base file.
pub fn check_missing_keys_issues(
    base: &StringsTable,
    compare: &StringsTable,
    base_file: &str,
    compare_file: &str,
) -> Vec<MissingKeyIssue> {
    missing_keys(base, compare)
        .into_iter()
        .map(|key| MissingKeyIssue {
            file_path: compare_file.to_string(),
            base_file: base_file.to_string(),
            base_line: base.get(&key).map(|e| e.line).unwrap_or(0),
            key,
        })
        .collect()
}
