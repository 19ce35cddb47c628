use std::path::PathBuf;

use super::super::ExitStatus;
use crate::{
    actions::RemovalOutcome,
    issues::{Issue, MissingKeyIssue, UnusedKeyIssue},
    rules::usage::UsageReport,
};

#[derive(Debug)]
pub enum CommandSummary {
    Missing(MissingSummary),
    Clean(CleanSummary),
}

/// A locale file as shown to the user.
#[derive(Debug, Clone)]
pub struct LocaleFile {
    pub path: String,
    /// Parent directory name, e.g. "zh-Hans.lproj".
    pub display_name: String,
    pub key_count: usize,
}

#[derive(Debug)]
pub enum ComparisonOutcome {
    Compared { missing: Vec<MissingKeyIssue> },
    /// The comparison file could not be loaded; nothing was compared.
    Unreadable { error: String },
}

#[derive(Debug)]
pub struct Comparison {
    pub file: LocaleFile,
    pub outcome: ComparisonOutcome,
}

#[derive(Debug)]
pub struct MissingSummary {
    pub base: LocaleFile,
    pub comparisons: Vec<Comparison>,
}

impl MissingSummary {
    pub fn total_missing(&self) -> usize {
        self.comparisons
            .iter()
            .map(|c| match &c.outcome {
                ComparisonOutcome::Compared { missing } => missing.len(),
                ComparisonOutcome::Unreadable { .. } => 0,
            })
            .sum()
    }

    pub fn has_unreadable(&self) -> bool {
        self.comparisons
            .iter()
            .any(|c| matches!(c.outcome, ComparisonOutcome::Unreadable { .. }))
    }

    /// Base file parsed to zero keys, so nothing was compared.
    pub fn is_base_empty(&self) -> bool {
        self.base.key_count == 0
    }
}

/// What happened to the unused entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CleanAction {
    /// No unused entries.
    NothingToClean,
    /// `--dry-run`: nothing written.
    DryRun { would_remove: usize },
    /// User answered no at the prompt.
    Declined,
    Removed(RemovalOutcome),
}

#[derive(Debug)]
pub struct CleanSummary {
    pub localizable_file: PathBuf,
    pub report_path: PathBuf,
    pub usage: UsageReport,
    pub unused_issues: Vec<UnusedKeyIssue>,
    pub action: CleanAction,
}

/// Result of running one of the tools.
pub struct CommandResult {
    pub summary: CommandSummary,
    /// Diagnostics collected along the way (parse warnings, unreadable sources).
    pub issues: Vec<Issue>,
}

impl CommandResult {
    pub fn exit_status(&self) -> ExitStatus {
        match &self.summary {
            CommandSummary::Missing(summary) => {
                if summary.is_base_empty()
                    || summary.has_unreadable()
                    || summary.total_missing() > 0
                {
                    ExitStatus::Failure
                } else {
                    ExitStatus::Success
                }
            }
            CommandSummary::Clean(_) => ExitStatus::Success,
        }
    }
}
