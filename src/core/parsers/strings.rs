//! Parser for single-line Apple `.strings` files.
//!
//! Only the `"key" = "value";` form is understood. Blank lines and
//! `//` comment lines are skipped; anything else that fails to match
//! is either ignored or, when it looks like a botched entry, reported
//! as a [`ParseWarning`].

use std::{fs, io, path::Path, sync::LazyLock};

use regex::Regex;

use crate::core::{
    data::{StringsEntry, StringsTable},
    error::LoadError,
};

// Keys restricted to [A-Za-z0-9_.-]; the whole line must be the entry.
static STRICT_ENTRY_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^\s*"([a-zA-Z0-9_.-]+)"\s*=\s*"((?:[^"\\]|\\.)*)"\s*;\s*$"#).unwrap()
});

// Any quoted key with escapes; trailing content after `";` is tolerated.
static QUOTED_ENTRY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^"((?:[^"\\]|\\.)*)"\s*=\s*"(.*?)";"#).unwrap());

/// Which key grammar to accept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeySyntax {
    /// `[A-Za-z0-9_.-]+` keys, entry must span the whole line.
    Strict,
    /// Any quoted key, escape-aware.
    Quoted,
}

impl KeySyntax {
    fn regex(self) -> &'static Regex {
        match self {
            KeySyntax::Strict => &STRICT_ENTRY_REGEX,
            KeySyntax::Quoted => &QUOTED_ENTRY_REGEX,
        }
    }
}

/// A line that looks like an entry but doesn't match the grammar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseWarning {
    /// Line number (1-indexed).
    pub line: usize,
    /// The trimmed line text.
    pub text: String,
}

/// Result of parsing a `.strings` file.
#[derive(Debug, Clone, Default)]
pub struct ParsedStrings {
    pub table: StringsTable,
    pub warnings: Vec<ParseWarning>,
}

/// Parse `.strings` content into a table.
///
/// Never fails: unmatched lines are skipped, and lines containing a
/// quote, `=` and `;` are additionally recorded as warnings.
pub fn parse_strings(content: &str, syntax: KeySyntax) -> ParsedStrings {
    let mut result = ParsedStrings::default();

    for (idx, raw_line) in content.lines().enumerate() {
        let line = raw_line.trim();
        if is_skippable(line) {
            continue;
        }

        match match_entry(line, syntax) {
            Some((key, value)) => {
                result.table.insert(StringsEntry::new(key, value, idx + 1));
            }
            None => {
                if looks_like_entry(line) {
                    result.warnings.push(ParseWarning {
                        line: idx + 1,
                        text: line.to_string(),
                    });
                }
            }
        }
    }

    result
}

/// Read and parse a `.strings` file.
///
/// A missing file is reported as [`LoadError::NotFound`] so callers can
/// tell it apart from a file that parsed to zero entries.
pub fn read_strings_file(path: &Path, syntax: KeySyntax) -> Result<ParsedStrings, LoadError> {
    if !path.exists() {
        return Err(LoadError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => LoadError::NotFound {
            path: path.to_path_buf(),
        },
        _ => LoadError::Read {
            path: path.to_path_buf(),
            source,
        },
    })?;

    Ok(parse_strings(&content, syntax))
}

/// Return the key defined on `line`, if the line is an entry.
pub fn line_key(line: &str, syntax: KeySyntax) -> Option<&str> {
    let line = line.trim();
    if is_skippable(line) {
        return None;
    }
    match_entry(line, syntax).map(|(key, _)| key)
}

/// Serialize an entry back to its single-line form.
pub fn format_entry(key: &str, value: &str) -> String {
    format!("\"{}\" = \"{}\";", key, value)
}

fn match_entry(line: &str, syntax: KeySyntax) -> Option<(&str, &str)> {
    let caps = syntax.regex().captures(line)?;
    let key = caps.get(1)?.as_str();
    let value = caps.get(2)?.as_str();
    Some((key, value))
}

fn is_skippable(trimmed: &str) -> bool {
    trimmed.is_empty() || trimmed.starts_with("//")
}

fn looks_like_entry(trimmed: &str) -> bool {
    trimmed.contains('"') && trimmed.contains('=') && trimmed.contains(';')
}
