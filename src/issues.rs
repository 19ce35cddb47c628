//! Issue types reported by the two tools.
//!
//! Each issue carries everything the reporter needs to print it.

use std::fmt;

// ============================================================
// Severity and Rule
// ============================================================

/// Severity level of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Rule identifier for each issue type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rule {
    MissingKey,
    UnusedKey,
    ParseAmbiguous,
    SourceRead,
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::MissingKey => write!(f, "missing-key"),
            Rule::UnusedKey => write!(f, "unused-key"),
            Rule::ParseAmbiguous => write!(f, "parse-ambiguous"),
            Rule::SourceRead => write!(f, "source-read"),
        }
    }
}

// ============================================================
// Issue Types
// ============================================================

/// Key defined in the base locale but absent from a comparison locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingKeyIssue {
    /// Comparison file lacking the key.
    pub file_path: String,
    pub key: String,
    /// Base file defining the key; diagnostics point here.
    pub base_file: String,
    pub base_line: usize,
}

impl MissingKeyIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::MissingKey
    }
}

/// Key defined in the localization file but never referenced from source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnusedKeyIssue {
    pub file_path: String,
    pub line: usize,
    pub key: String,
    pub value: String,
}

impl UnusedKeyIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::UnusedKey
    }
}

/// A line that looks like an entry but doesn't parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseAmbiguousIssue {
    pub file_path: String,
    pub line: usize,
    pub text: String,
}

impl ParseAmbiguousIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::ParseAmbiguous
    }
}

/// A source file that could not be read during scanning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceReadIssue {
    pub file_path: String,
    pub error: String,
}

impl SourceReadIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::SourceRead
    }
}

// ============================================================
// Issue Enum
// ============================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    MissingKey(MissingKeyIssue),
    UnusedKey(UnusedKeyIssue),
    ParseAmbiguous(ParseAmbiguousIssue),
    SourceRead(SourceReadIssue),
}

impl Issue {
    pub fn severity(&self) -> Severity {
        match self {
            Issue::MissingKey(_) => MissingKeyIssue::severity(),
            Issue::UnusedKey(_) => UnusedKeyIssue::severity(),
            Issue::ParseAmbiguous(_) => ParseAmbiguousIssue::severity(),
            Issue::SourceRead(_) => SourceReadIssue::severity(),
        }
    }

    pub fn rule(&self) -> Rule {
        match self {
            Issue::MissingKey(_) => MissingKeyIssue::rule(),
            Issue::UnusedKey(_) => UnusedKeyIssue::rule(),
            Issue::ParseAmbiguous(_) => ParseAmbiguousIssue::rule(),
            Issue::SourceRead(_) => SourceReadIssue::rule(),
        }
    }

    /// File the diagnostic points at.
    pub fn file_path(&self) -> &str {
        match self {
            Issue::MissingKey(i) => &i.base_file,
            Issue::UnusedKey(i) => &i.file_path,
            Issue::ParseAmbiguous(i) => &i.file_path,
            Issue::SourceRead(i) => &i.file_path,
        }
    }

    /// Line in `file_path`, 0 when the issue is about the whole file.
    pub fn line(&self) -> usize {
        match self {
            Issue::MissingKey(i) => i.base_line,
            Issue::SourceRead(_) => 0,
            Issue::UnusedKey(i) => i.line,
            Issue::ParseAmbiguous(i) => i.line,
        }
    }

    pub fn message(&self) -> String {
        match self {
            Issue::MissingKey(i) => format!("missing key \"{}\" in {}", i.key, i.file_path),
            Issue::UnusedKey(i) => format!("unused key \"{}\"", i.key),
            Issue::ParseAmbiguous(i) => format!("line may be malformed: {}", i.text),
            Issue::SourceRead(i) => format!("could not read source file: {}", i.error),
        }
    }
}
