//! Usage classification for localization keys.
//!
//! A key counts as used if any scanned source file contains either its
//! SwiftGen accessor (`L10n.Common.ok`) or an `NSLocalizedString` lookup
//! with the original key as a literal. Matching is plain substring
//! search; the first hit wins and no further files are examined.

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    core::{StringsTable, UsageKind, UsageRecord, transform_key},
    issues::{SourceReadIssue, UnusedKeyIssue},
};

/// Language of a source file, decided by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceLanguage {
    /// `.m`, `.mm`, `.h`
    ObjC,
    /// `.swift`
    Swift,
    /// Anything else; only SwiftGen references are checked.
    Other,
}

impl SourceLanguage {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("m" | "mm" | "h") => SourceLanguage::ObjC,
            Some("swift") => SourceLanguage::Swift,
            _ => SourceLanguage::Other,
        }
    }
}

/// A source file held in memory for repeated searching.
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub path: PathBuf,
    pub language: SourceLanguage,
    pub content: String,
}

impl SourceFile {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        let path = path.into();
        Self {
            language: SourceLanguage::from_path(&path),
            path,
            content: content.into(),
        }
    }
}

/// Source files loaded for scanning, plus the ones that failed.
#[derive(Debug, Default)]
pub struct LoadedSources {
    pub files: Vec<SourceFile>,
    pub warnings: Vec<SourceReadIssue>,
}

/// Read every path once. Invalid UTF-8 bytes are dropped rather than
/// rejected; files that can't be read at all are recorded and skipped.
pub fn load_sources(paths: impl IntoIterator<Item = PathBuf>) -> LoadedSources {
    let mut result = LoadedSources::default();

    for path in paths {
        match fs::read(&path) {
            Ok(bytes) => {
                result.files.push(SourceFile::new(path, decode_ignoring_invalid(&bytes)));
            }
            Err(e) => result.warnings.push(SourceReadIssue {
                file_path: path.to_string_lossy().to_string(),
                error: e.to_string(),
            }),
        }
    }

    result
}

fn decode_ignoring_invalid(bytes: &[u8]) -> String {
    let mut content = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        content.push_str(chunk.valid());
    }
    content
}

/// The literal strings that count as a reference to one key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferencePatterns {
    /// `L10n.Common.ok`
    pub swiftgen: String,
    /// `NSLocalizedString(@"common.ok"`
    pub objc: String,
    /// `NSLocalizedString("common.ok"`
    pub swift: String,
}

impl ReferencePatterns {
    pub fn new(namespace: &str, key: &str, transformed_key: &str) -> Self {
        Self {
            swiftgen: format!("{}.{}", namespace, transformed_key),
            objc: format!("NSLocalizedString(@\"{}\"", key),
            swift: format!("NSLocalizedString(\"{}\"", key),
        }
    }

    fn matches_native(&self, file: &SourceFile) -> bool {
        match file.language {
            SourceLanguage::ObjC => file.content.contains(&self.objc),
            // Swift files may still carry the ObjC literal form
            SourceLanguage::Swift => {
                file.content.contains(&self.swift) || file.content.contains(&self.objc)
            }
            SourceLanguage::Other => false,
        }
    }
}

/// Decide how (if at all) a key is referenced.
///
/// SwiftGen references are searched across all files before any native
/// lookup is considered. Returns the file the reference was found in.
pub fn classify_key<'a>(
    patterns: &ReferencePatterns,
    files: &'a [SourceFile],
) -> (UsageKind, Option<&'a SourceFile>) {
    if let Some(file) = files.iter().find(|f| f.content.contains(&patterns.swiftgen)) {
        return (UsageKind::SwiftGen, Some(file));
    }

    if let Some(file) = files.iter().find(|f| patterns.matches_native(f)) {
        return (UsageKind::NativeLookup, Some(file));
    }

    (UsageKind::Unused, None)
}

/// Usage of every entry of one localization file.
#[derive(Debug, Clone, Default)]
pub struct UsageReport {
    /// One record per entry, in file order.
    pub records: Vec<UsageRecord>,
}

impl UsageReport {
    pub fn total(&self) -> usize {
        self.records.len()
    }

    pub fn count(&self, kind: UsageKind) -> usize {
        self.records.iter().filter(|r| r.kind == kind).count()
    }

    pub fn used_count(&self) -> usize {
        self.records.iter().filter(|r| r.is_used()).count()
    }

    pub fn unused(&self) -> impl Iterator<Item = &UsageRecord> {
        self.records.iter().filter(|r| !r.is_used())
    }

    pub fn unused_count(&self) -> usize {
        self.total() - self.used_count()
    }

    /// Percentage of used entries. 0.0 for an empty report.
    pub fn usage_rate(&self) -> f64 {
        if self.records.is_empty() {
            return 0.0;
        }
        self.used_count() as f64 / self.total() as f64 * 100.0
    }
}

/// Classify every entry in `table` against the loaded sources.
///
/// `on_progress` is called after each key with `(index, total, record)`,
/// `index` being 1-based.
pub fn classify_usages<F>(
    table: &StringsTable,
    files: &[SourceFile],
    namespace: &str,
    mut on_progress: F,
) -> UsageReport
where
    F: FnMut(usize, usize, &UsageRecord),
{
    let total = table.len();
    let mut records = Vec::with_capacity(total);

    for (i, entry) in table.iter().enumerate() {
        let transformed_key = transform_key(&entry.key);
        let patterns = ReferencePatterns::new(namespace, &entry.key, &transformed_key);
        let (kind, file) = classify_key(&patterns, files);

        let record = UsageRecord {
            key: entry.key.clone(),
            transformed_key,
            value: entry.value.clone(),
            kind,
            found_in: file.map(|f| f.path.clone()),
        };
        on_progress(i + 1, total, &record);
        records.push(record);
    }

    UsageReport { records }
}

/// Build issues for the unused entries of `table`.
pub fn check_unused_keys_issues(
    report: &UsageReport,
    table: &StringsTable,
    file_path: &str,
) -> Vec<UnusedKeyIssue> {
    report
        .unused()
        .map(|record| UnusedKeyIssue {
            file_path: file_path.to_string(),
            line: table.get(&record.key).map(|e| e.line).unwrap_or(0),
            key: record.key.clone(),
            value: record.value.clone(),
        })
        .collect()
}
