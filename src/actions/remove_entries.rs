//! RemoveEntries action.
//!
//! Deletes unused localization entries from a `.strings` file.
//! Used by `strings-clean`.

use std::{collections::HashSet, path::{Path, PathBuf}};

use anyhow::Result;

use super::strings_editor::StringsEditor;

/// Whether to touch the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemovalMode {
    /// Count what would be removed; write nothing.
    DryRun,
    /// Back up the file, then rewrite it without the entries.
    Apply,
}

/// Result of running [`RemoveEntries`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemovalOutcome {
    /// Lines removed (or that would be removed in dry-run mode).
    pub removed: usize,
    /// Backup file, if one was written.
    pub backup: Option<PathBuf>,
}

/// Action to delete entries from a `.strings` file.
pub struct RemoveEntries;

impl RemoveEntries {
    /// Remove every line defining one of `keys` from `path`.
    ///
    /// In [`RemovalMode::Apply`] the original content is written to
    /// `<file>.strings.backup` and synced before the file is overwritten.
    /// Nothing is written when no line matches.
    pub fn run(path: &Path, keys: &HashSet<String>, mode: RemovalMode) -> Result<RemovalOutcome> {
        if keys.is_empty() {
            return Ok(RemovalOutcome::default());
        }

        let mut editor = StringsEditor::open(path)?;
        let removed = editor.remove_keys(keys);

        if mode == RemovalMode::DryRun || removed == 0 {
            return Ok(RemovalOutcome {
                removed,
                backup: None,
            });
        }

        let backup = editor.write_backup()?;
        editor.save()?;

        Ok(RemovalOutcome {
            removed,
            backup: Some(backup),
        })
    }
}
