use std::{fmt, path::PathBuf};

/// How a localization key is referenced from source code.
///
/// Ordered by scan priority: a generator-style reference wins over a
/// native lookup even if both exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum UsageKind {
    /// SwiftGen accessor: `L10n.Common.ok`
    SwiftGen,
    /// Direct lookup: `NSLocalizedString("common.ok", ...)` or
    /// `NSLocalizedString(@"common.ok", ...)`
    NativeLookup,
    /// No reference found in any scanned file.
    Unused,
}

impl UsageKind {
    pub fn is_used(self) -> bool {
        !matches!(self, UsageKind::Unused)
    }
}

impl fmt::Display for UsageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UsageKind::SwiftGen => write!(f, "SwiftGen"),
            UsageKind::NativeLookup => write!(f, "NSLocalizedString"),
            UsageKind::Unused => write!(f, "unused"),
        }
    }
}

/// Classification result for one localization entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsageRecord {
    /// Original key from the `.strings` file.
    pub key: String,
    /// Generator-style identifier (without namespace), e.g. "Common.ok".
    pub transformed_key: String,
    pub value: String,
    pub kind: UsageKind,
    /// First file the reference was found in. `None` when unused.
    pub found_in: Option<PathBuf>,
}

impl UsageRecord {
    pub fn is_used(&self) -> bool {
        self.kind.is_used()
    }
}
