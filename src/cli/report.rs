//! Console output for both tools.
//!
//! Results go to stdout, diagnostics to stderr. Every printer has a `_to`
//! variant taking a writer so output can be tested without a terminal.

use std::{
    io::{self, Write},
    path::Path,
};

use colored::Colorize;

use super::commands::{
    CleanAction, CommandResult, CommandSummary, Comparison, ComparisonOutcome, MissingSummary,
};
use crate::{
    core::{UsageKind, UsageRecord, format_entry},
    issues::{Issue, Rule, Severity},
    rules::usage::UsageReport,
};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Command printed after entries were removed.
pub const SWIFTGEN_HINT: &str = "swiftgen config run --config swiftgen.yml";

/// Non-verbose progress interval.
const PROGRESS_INTERVAL: usize = 50;

fn separator() -> String {
    "=".repeat(50)
}

pub(super) fn plural<'a>(n: usize, one: &'a str, many: &'a str) -> &'a str {
    if n == 1 { one } else { many }
}

pub fn print(result: &CommandResult, verbose: bool) {
    match &result.summary {
        CommandSummary::Missing(summary) => {
            print_diagnostics(&result.issues, verbose);
            print_missing_to(summary, &mut io::stdout().lock());
        }
        CommandSummary::Clean(summary) => {
            // Parse and read warnings were printed as they came up
            let unused: Vec<Issue> = result
                .issues
                .iter()
                .filter(|i| i.rule() == Rule::UnusedKey)
                .cloned()
                .collect();
            print_diagnostics(&unused, verbose);
            print_clean_action_to(
                &summary.action,
                &summary.localizable_file,
                &mut io::stdout().lock(),
            );
        }
    }
}

// ============================================================
// Diagnostics
// ============================================================

/// Print parse and read warnings to stderr.
///
/// In verbose mode every issue is printed with its location; otherwise
/// one summary line per rule.
pub fn print_diagnostics(issues: &[Issue], verbose: bool) {
    print_diagnostics_to(issues, verbose, &mut io::stderr().lock());
}

pub fn print_diagnostics_to<W: Write>(issues: &[Issue], verbose: bool, writer: &mut W) {
    if issues.is_empty() {
        return;
    }

    if verbose {
        let mut sorted: Vec<&Issue> = issues.iter().collect();
        sorted.sort_by(|a, b| {
            a.file_path()
                .cmp(b.file_path())
                .then_with(|| a.line().cmp(&b.line()))
        });
        for issue in sorted {
            print_issue(issue, writer);
        }
        return;
    }

    let parse_count = count_rule(issues, Rule::ParseAmbiguous);
    if parse_count > 0 {
        let _ = writeln!(
            writer,
            "{} {} {} could not be parsed (use {} for details)",
            "warning:".bold().yellow(),
            parse_count,
            plural(parse_count, "line", "lines"),
            "-v".cyan()
        );
    }

    let read_count = count_rule(issues, Rule::SourceRead);
    if read_count > 0 {
        let _ = writeln!(
            writer,
            "{} {} file(s) could not be read (use {} for details)",
            "warning:".bold().yellow(),
            read_count,
            "-v".cyan()
        );
    }
}

/// Summarize directory entries the scanner could not access. Verbose
/// runs already printed each one.
pub fn print_skipped_paths(count: usize, verbose: bool) {
    print_skipped_paths_to(count, verbose, &mut io::stderr().lock());
}

pub fn print_skipped_paths_to<W: Write>(count: usize, verbose: bool, writer: &mut W) {
    if count > 0 && !verbose {
        let _ = writeln!(
            writer,
            "{} {} path(s) could not be accessed (use {} for details)",
            "warning:".bold().yellow(),
            count,
            "-v".cyan()
        );
    }
}

fn count_rule(issues: &[Issue], rule: Rule) -> usize {
    issues.iter().filter(|i| i.rule() == rule).count()
}

fn print_issue<W: Write>(issue: &Issue, writer: &mut W) {
    let severity = match issue.severity() {
        Severity::Error => "error".bold().red(),
        Severity::Warning => "warning".bold().yellow(),
    };

    let _ = writeln!(
        writer,
        "{}: {}  {}",
        severity,
        issue.message(),
        issue.rule().to_string().dimmed().cyan()
    );

    if issue.line() > 0 {
        let _ = writeln!(
            writer,
            "  {} {}:{}",
            "-->".blue(),
            issue.file_path(),
            issue.line()
        );
    } else {
        let _ = writeln!(writer, "  {} {}", "-->".blue(), issue.file_path());
    }
}

// ============================================================
// strings-missing
// ============================================================

pub fn print_missing_to<W: Write>(summary: &MissingSummary, writer: &mut W) {
    let base = &summary.base;
    let _ = writeln!(writer, "Reading base file: {}", base.path);

    if summary.is_base_empty() {
        let _ = writeln!(
            writer,
            "{} {} contains no keys, nothing to compare",
            "warning:".bold().yellow(),
            base.display_name
        );
        return;
    }

    let _ = writeln!(
        writer,
        "{} {} contains {} {}",
        SUCCESS_MARK.green(),
        base.display_name,
        base.key_count,
        plural(base.key_count, "key", "keys")
    );

    for comparison in &summary.comparisons {
        let _ = writeln!(writer);
        let _ = writeln!(writer, "{}", separator());
        print_comparison(comparison, writer);
    }

    let _ = writeln!(writer);
    let _ = writeln!(writer, "{}", separator());

    let total = summary.total_missing();
    if total > 0 {
        let _ = writeln!(
            writer,
            "{} {}",
            FAILURE_MARK.red(),
            format!("Found {} missing key(s) in total", total).red()
        );
    } else if summary.has_unreadable() {
        let _ = writeln!(
            writer,
            "{} {}",
            FAILURE_MARK.red(),
            "Some files could not be compared".red()
        );
    } else {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            "All files contain every base key".green()
        );
    }
}

fn print_comparison<W: Write>(comparison: &Comparison, writer: &mut W) {
    let file = &comparison.file;
    let _ = writeln!(writer, "Checking {}: {}", file.display_name, file.path);

    match &comparison.outcome {
        ComparisonOutcome::Unreadable { error } => {
            let _ = writeln!(
                writer,
                "{} cannot read {}: {}",
                "error:".bold().red(),
                file.display_name,
                error
            );
        }
        ComparisonOutcome::Compared { missing } if missing.is_empty() => {
            let _ = writeln!(
                writer,
                "{} {}",
                SUCCESS_MARK.green(),
                format!("{} has no missing keys", file.display_name).green()
            );
        }
        ComparisonOutcome::Compared { missing } => {
            let _ = writeln!(
                writer,
                "{} {} is missing {} key(s):",
                FAILURE_MARK.red(),
                file.display_name,
                missing.len()
            );
            for issue in missing {
                let _ = writeln!(writer, "  \"{}\"", issue.key);
            }
        }
    }
}

// ============================================================
// strings-clean
// ============================================================

pub struct CleanHeader<'a> {
    pub project_root: &'a Path,
    pub localizable_file: &'a Path,
    pub source_dir: &'a Path,
    pub dry_run: bool,
    pub from_config: bool,
}

pub fn print_clean_header_to<W: Write>(header: &CleanHeader, writer: &mut W) {
    let _ = writeln!(writer, "Project root: {}", header.project_root.display());
    let _ = writeln!(
        writer,
        "Localization file: {}",
        header.localizable_file.display()
    );
    let _ = writeln!(writer, "Source directory: {}", header.source_dir.display());
    if header.from_config {
        let _ = writeln!(writer, "Using configuration file");
    }
    let mode = if header.dry_run {
        "DRY RUN (no files will be modified)".yellow()
    } else {
        "REAL RUN".green()
    };
    let _ = writeln!(writer, "Mode: {}", mode);
    let _ = writeln!(writer, "{}", separator());
}

pub fn print_parsed_key(key: &str, namespace: &str, transformed: &str) {
    println!("  parsed: {} -> {}.{}", key, namespace, transformed);
}

/// Progress line for one classified key.
///
/// Verbose mode prints every key with its outcome; otherwise one line every
/// [`PROGRESS_INTERVAL`] keys and for the last one.
pub fn print_progress_to<W: Write>(
    index: usize,
    total: usize,
    record: &UsageRecord,
    verbose: bool,
    writer: &mut W,
) {
    if verbose {
        let _ = writeln!(writer, "checking ({}/{}): {}", index, total, record.key);
        if record.kind.is_used() {
            let location = record
                .found_in
                .as_deref()
                .and_then(Path::file_name)
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default();
            let _ = writeln!(
                writer,
                "  {} used ({}) in {}",
                SUCCESS_MARK.green(),
                record.kind,
                location
            );
        } else {
            let _ = writeln!(writer, "  {} unused", FAILURE_MARK.red());
        }
        return;
    }

    if index % PROGRESS_INTERVAL == 0 || index == total {
        let percent = if total == 0 {
            100.0
        } else {
            index as f64 / total as f64 * 100.0
        };
        let _ = writeln!(writer, "Progress: {}/{} ({:.1}%)", index, total, percent);
    }
}

pub fn print_usage_stats_to<W: Write>(
    usage: &UsageReport,
    namespace: &str,
    report_path: &Path,
    writer: &mut W,
) {
    let native = usage.count(UsageKind::NativeLookup);

    let _ = writeln!(writer);
    let _ = writeln!(writer, "{}", separator());
    let _ = writeln!(writer, "Usage statistics:");
    let _ = writeln!(
        writer,
        "  {} ({}.xxx): {}",
        UsageKind::SwiftGen,
        namespace,
        usage.count(UsageKind::SwiftGen)
    );
    let _ = writeln!(writer, "  {}: {}", UsageKind::NativeLookup, native);
    if native > 0 {
        let _ = writeln!(
            writer,
            "  {} {} {} still looked up with NSLocalizedString, consider migrating to {}",
            "hint:".bold().cyan(),
            native,
            plural(native, "key is", "keys are"),
            namespace
        );
    }
    let _ = writeln!(writer, "Total entries: {}", usage.total());
    let _ = writeln!(writer, "Unused entries: {}", usage.unused_count());
    let _ = writeln!(writer, "Usage rate: {:.1}%", usage.usage_rate());

    if usage.unused_count() > 0 {
        let _ = writeln!(writer);
        let _ = writeln!(writer, "Unused entries:");
        for record in usage.unused() {
            let _ = writeln!(writer, "  {}", format_entry(&record.key, &record.value));
        }
    }

    let _ = writeln!(writer);
    let _ = writeln!(writer, "Report written to: {}", report_path.display());
}

pub fn print_clean_action_to<W: Write>(
    action: &CleanAction,
    localizable_file: &Path,
    writer: &mut W,
) {
    match action {
        CleanAction::NothingToClean => {
            let _ = writeln!(
                writer,
                "{} {}",
                SUCCESS_MARK.green(),
                "No unused entries found".green()
            );
        }
        CleanAction::DryRun { would_remove } => {
            let _ = writeln!(
                writer,
                "{} {} unused {} from {}.",
                "Would remove".yellow().bold(),
                would_remove,
                plural(*would_remove, "entry", "entries"),
                localizable_file.display()
            );
            let _ = writeln!(writer, "Run without {} to remove them.", "--dry-run".cyan());
        }
        CleanAction::Declined => {
            let _ = writeln!(writer, "Cancelled, no changes made.");
        }
        CleanAction::Removed(outcome) => {
            let _ = writeln!(
                writer,
                "{} {}",
                SUCCESS_MARK.green(),
                format!(
                    "Removed {} unused {}",
                    outcome.removed,
                    plural(outcome.removed, "entry", "entries")
                )
                .green()
            );
            if let Some(backup) = &outcome.backup {
                let _ = writeln!(writer, "Backup saved to: {}", backup.display());
            }
            let _ = writeln!(writer);
            let _ = writeln!(writer, "Regenerate SwiftGen code with:");
            let _ = writeln!(writer, "  {}", SWIFTGEN_HINT.cyan());
        }
    }
}

// ============================================================
// Tests
// ============================================================
