use std::{
    collections::HashSet,
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

use crate::core::{KeySyntax, line_key};

/// Suffix of the backup file written before any destructive edit.
pub const BACKUP_EXTENSION: &str = "strings.backup";

/// A line-preserving editor for `.strings` files.
///
/// Lines are removed whole; everything else, including comments, blank
/// lines and line terminators, is kept byte-for-byte.
pub struct StringsEditor {
    file_path: PathBuf,
    original: String,
    content: String,
}

impl StringsEditor {
    /// Open a `.strings` file for editing.
    pub fn open(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;
        Ok(Self {
            file_path: path.to_path_buf(),
            original: content.clone(),
            content,
        })
    }

    /// Remove every entry line whose key is in `keys`.
    ///
    /// Returns the number of lines removed.
    pub fn remove_keys(&mut self, keys: &HashSet<String>) -> usize {
        let (content, removed) = remove_entry_lines(&self.content, keys);
        self.content = content;
        removed
    }

    /// Sibling path the backup is written to (`Localizable.strings.backup`).
    pub fn backup_path(&self) -> PathBuf {
        self.file_path.with_extension(BACKUP_EXTENSION)
    }

    /// Write the content as it was when opened to the backup path and
    /// flush it to disk.
    pub fn write_backup(&self) -> Result<PathBuf> {
        let backup = self.backup_path();
        let mut file = File::create(&backup)
            .with_context(|| format!("Failed to create backup: {}", backup.display()))?;
        file.write_all(self.original.as_bytes())
            .with_context(|| format!("Failed to write backup: {}", backup.display()))?;
        file.sync_all()
            .with_context(|| format!("Failed to flush backup: {}", backup.display()))?;
        Ok(backup)
    }

    /// Save the modified content back to the file.
    pub fn save(&self) -> Result<()> {
        fs::write(&self.file_path, &self.content)
            .with_context(|| format!("Failed to write file: {}", self.file_path.display()))?;
        Ok(())
    }
}

/// Drop the lines defining any of `keys`, keeping every other line as-is.
///
/// Lines are matched with the strict entry grammar, the same one the
/// cleaner parses with, so a key is only removed from lines it was
/// read from.
pub fn remove_entry_lines(content: &str, keys: &HashSet<String>) -> (String, usize) {
    let mut kept = String::with_capacity(content.len());
    let mut removed = 0;

    for line in content.split_inclusive('\n') {
        match line_key(line, KeySyntax::Strict) {
            Some(key) if keys.contains(key) => removed += 1,
            _ => kept.push_str(line),
        }
    }

    (kept, removed)
}
