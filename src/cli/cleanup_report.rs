//! Plain-text usage report written by `strings-clean`.

use std::{fs, path::Path};

use anyhow::{Context, Result};

use crate::{
    core::{UsageKind, format_entry},
    rules::usage::UsageReport,
};

/// Inputs for rendering the report.
pub struct CleanupReport<'a> {
    pub project_root: &'a Path,
    pub localizable_file: &'a Path,
    /// Pre-formatted scan time.
    pub generated_at: &'a str,
    /// SwiftGen namespace, shown in the breakdown.
    pub namespace: &'a str,
    pub usage: &'a UsageReport,
}

impl CleanupReport<'_> {
    pub fn render(&self) -> String {
        let usage = self.usage;
        let mut out = String::new();

        out.push_str("Localization Cleanup Report\n");
        out.push_str(&"=".repeat(50));
        out.push_str("\n\n");
        out.push_str(&format!("Project root: {}\n", self.project_root.display()));
        out.push_str(&format!(
            "Localization file: {}\n",
            self.localizable_file.display()
        ));
        out.push_str(&format!("Scanned at: {}\n\n", self.generated_at));

        out.push_str("Statistics:\n");
        out.push_str(&"-".repeat(20));
        out.push('\n');
        out.push_str(&format!("Total entries: {}\n", usage.total()));
        out.push_str(&format!("Used entries: {}\n", usage.used_count()));
        out.push_str(&format!(
            "  - SwiftGen ({}.xxx): {}\n",
            self.namespace,
            usage.count(UsageKind::SwiftGen)
        ));
        out.push_str(&format!(
            "  - Native (NSLocalizedString): {}\n",
            usage.count(UsageKind::NativeLookup)
        ));
        out.push_str(&format!("Unused entries: {}\n", usage.unused_count()));
        out.push_str(&format!("Usage rate: {:.1}%\n\n", usage.usage_rate()));

        if usage.unused_count() > 0 {
            out.push_str("\nUnused entries:\n");
            out.push_str(&"=".repeat(30));
            out.push('\n');
            for record in usage.unused() {
                out.push_str(&format_entry(&record.key, &record.value));
                out.push('\n');
            }
        } else {
            out.push_str("\nNo unused entries found.\n");
        }

        out
    }

    pub fn write(&self, path: &Path) -> Result<()> {
        fs::write(path, self.render())
            .with_context(|| format!("Failed to write report: {}", path.display()))
    }
}
