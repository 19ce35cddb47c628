//! CLI argument definitions using clap.
//!
//! Each binary has its own top-level parser:
//!
//! - `strings-missing`: [`MissingArgs`]
//! - `strings-clean`: [`CleanArgs`]

use std::path::PathBuf;

use clap::Parser;

/// Report keys present in a base .strings file but missing from others.
#[derive(Debug, Parser)]
#[command(name = "strings-missing", author, version, about, long_about = None)]
#[command(after_help = "Examples:\n  \
    strings-missing en.lproj/Localizable.strings zh-Hans.lproj/Localizable.strings\n  \
    strings-missing en.lproj/Localizable.strings zh-Hans.lproj/Localizable.strings zh-Hant.lproj/Localizable.strings")]
pub struct MissingArgs {
    /// Base locale file whose keys are the reference (e.g. en.lproj/Localizable.strings)
    pub base_file: PathBuf,

    /// First locale file to compare (e.g. zh-Hans.lproj/Localizable.strings)
    pub compare_file1: PathBuf,

    /// Optional second locale file to compare (e.g. zh-Hant.lproj/Localizable.strings)
    pub compare_file2: Option<PathBuf>,

    /// Show lines that look like entries but could not be parsed
    #[arg(short, long)]
    pub verbose: bool,
}

impl MissingArgs {
    pub fn compare_files(&self) -> impl Iterator<Item = &PathBuf> {
        std::iter::once(&self.compare_file1).chain(self.compare_file2.iter())
    }
}

/// Find and remove localization keys that no source file references.
#[derive(Debug, Parser)]
#[command(name = "strings-clean", author, version, about, long_about = None)]
#[command(after_help = "Examples:\n  \
    strings-clean --dry-run\n  \
    strings-clean --localizable-file App/en.lproj/Localizable.strings\n  \
    strings-clean --project-root ./MyApp --source-dir ./MyApp/Sources")]
pub struct CleanArgs {
    /// Only show what would be removed; don't modify any file
    #[arg(long)]
    pub dry_run: bool,

    /// Print every key as it is checked
    #[arg(short, long)]
    pub verbose: bool,

    /// Project root directory
    #[arg(long, default_value = ".")]
    pub project_root: PathBuf,

    /// Localizable.strings to clean (default: auto-detected under the project root)
    #[arg(long)]
    pub localizable_file: Option<PathBuf>,

    /// Source directory to scan (default: auto-detected)
    #[arg(long)]
    pub source_dir: Option<PathBuf>,

    /// Remove unused entries without asking for confirmation
    #[arg(short, long)]
    pub yes: bool,
}
