use std::path::{Path, PathBuf};

use colored::Colorize;
use glob::Pattern;
use walkdir::{DirEntry, WalkDir};

/// Result of scanning a source tree.
pub struct ScanResult {
    pub files: Vec<PathBuf>,
    pub skipped_count: usize,
}

/// Walks a source tree and yields files with matching extensions.
///
/// Directories whose name equals one of `excluded_dirs` are pruned
/// (whole-segment match: `build` excludes `App/build/x.swift` but not
/// `App/buildtools/x.swift`). Traversal order is sorted by file name so
/// repeated walks see the same sequence.
#[derive(Debug, Clone)]
pub struct SourceScanner {
    root: PathBuf,
    extensions: Vec<String>,
    excluded_dirs: Vec<String>,
    ignore_patterns: Vec<Pattern>,
}

impl SourceScanner {
    pub fn new(
        root: impl Into<PathBuf>,
        extensions: &[String],
        excluded_dirs: &[String],
    ) -> Self {
        Self {
            root: root.into(),
            extensions: extensions
                .iter()
                .map(|e| e.trim_start_matches('.').to_string())
                .collect(),
            excluded_dirs: excluded_dirs.to_vec(),
            ignore_patterns: Vec::new(),
        }
    }

    /// Additionally skip files whose path matches one of these globs.
    /// Invalid patterns are dropped (with a warning when `verbose`).
    pub fn with_ignores(mut self, ignores: &[String], verbose: bool) -> Self {
        for p in ignores {
            match Pattern::new(p) {
                Ok(pattern) => self.ignore_patterns.push(pattern),
                Err(e) => {
                    if verbose {
                        eprintln!(
                            "{} Invalid ignore pattern '{}': {}",
                            "warning:".bold().yellow(),
                            p,
                            e
                        );
                    }
                }
            }
        }
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Lazily walk the tree. Unreadable entries are skipped.
    ///
    /// Each call starts a fresh walk; nothing is cached.
    pub fn files(&self) -> impl Iterator<Item = PathBuf> + '_ {
        self.walk().filter_map(Result::ok)
    }

    /// Walk the tree and collect all files, counting entries that could
    /// not be read.
    pub fn scan(&self, verbose: bool) -> ScanResult {
        let mut files = Vec::new();
        let mut skipped_count = 0;

        for entry in self.walk() {
            match entry {
                Ok(path) => files.push(path),
                Err(e) => {
                    skipped_count += 1;
                    if verbose {
                        eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), e);
                    }
                }
            }
        }

        ScanResult {
            files,
            skipped_count,
        }
    }

    /// Whether the tree contains at least one file with the given extension.
    pub fn contains_extension(&self, extension: &str) -> bool {
        let extension = extension.trim_start_matches('.');
        self.files()
            .any(|path| path.extension().and_then(|e| e.to_str()) == Some(extension))
    }

    fn walk(&self) -> impl Iterator<Item = Result<PathBuf, walkdir::Error>> + '_ {
        WalkDir::new(&self.root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(move |entry| !self.is_excluded_dir(entry))
            .filter_map(move |entry| match entry {
                Ok(entry) => {
                    let path = entry.path();
                    // Links are not followed, but a link to a regular file is scanned
                    let is_file = entry.file_type().is_file()
                        || (entry.path_is_symlink() && path.is_file());
                    if is_file
                        && self.has_wanted_extension(path)
                        && !self.is_ignored(path)
                    {
                        Some(Ok(entry.into_path()))
                    } else {
                        None
                    }
                }
                Err(e) => Some(Err(e)),
            })
    }

    fn is_excluded_dir(&self, entry: &DirEntry) -> bool {
        // The root itself is never excluded, whatever its name.
        if entry.depth() == 0 || !entry.file_type().is_dir() {
            return false;
        }
        let name = entry.file_name().to_string_lossy();
        self.excluded_dirs.iter().any(|d| d.as_str() == name)
    }

    fn has_wanted_extension(&self, path: &Path) -> bool {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) => self.extensions.iter().any(|e| e == ext),
            None => false,
        }
    }

    fn is_ignored(&self, path: &Path) -> bool {
        if self.ignore_patterns.is_empty() {
            return false;
        }
        let relative = path.strip_prefix(&self.root).unwrap_or(path);
        let relative = relative.to_string_lossy();
        self.ignore_patterns.iter().any(|p| p.matches(&relative))
    }
}
