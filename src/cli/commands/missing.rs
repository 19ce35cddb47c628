use std::path::Path;

use anyhow::{Context, Result};

use super::super::args::MissingArgs;
use super::{
    CommandResult, CommandSummary, Comparison, ComparisonOutcome, LocaleFile, MissingSummary,
    helper::parse_warnings_to_issues,
};
use crate::{
    core::{KeySyntax, ParsedStrings, read_strings_file},
    issues::Issue,
    rules::missing::check_missing_keys_issues,
};

pub fn missing(args: &MissingArgs) -> Result<CommandResult> {
    let mut issues: Vec<Issue> = Vec::new();

    let base = load(&args.base_file, &mut issues).context("Cannot read base file")?;
    let base_file = locale_file(&args.base_file, &base);

    let mut comparisons = Vec::new();
    if !base.table.is_empty() {
        for (i, path) in args.compare_files().enumerate() {
            match load(path, &mut issues) {
                Ok(parsed) => {
                    let file = locale_file(path, &parsed);
                    let missing = check_missing_keys_issues(
                        &base.table,
                        &parsed.table,
                        &base_file.path,
                        &file.path,
                    );
                    issues.extend(missing.iter().cloned().map(Issue::MissingKey));
                    comparisons.push(Comparison {
                        file,
                        outcome: ComparisonOutcome::Compared { missing },
                    });
                }
                // Only the first comparison file is required
                Err(e) if i > 0 => comparisons.push(Comparison {
                    file: LocaleFile {
                        path: path.to_string_lossy().to_string(),
                        display_name: display_name(path),
                        key_count: 0,
                    },
                    outcome: ComparisonOutcome::Unreadable {
                        error: format!("{:#}", e),
                    },
                }),
                Err(e) => {
                    return Err(e).with_context(|| format!("Cannot read compare file {}", i + 1));
                }
            }
        }
    }

    Ok(CommandResult {
        summary: CommandSummary::Missing(MissingSummary {
            base: base_file,
            comparisons,
        }),
        issues,
    })
}

fn load(path: &Path, issues: &mut Vec<Issue>) -> Result<ParsedStrings> {
    let parsed = read_strings_file(path, KeySyntax::Quoted)?;
    issues.extend(parse_warnings_to_issues(path, &parsed.warnings));
    Ok(parsed)
}

fn locale_file(path: &Path, parsed: &ParsedStrings) -> LocaleFile {
    LocaleFile {
        path: path.to_string_lossy().to_string(),
        display_name: display_name(path),
        key_count: parsed.table.len(),
    }
}

/// Name shown for a locale file: its `.lproj` directory when there is one.
pub fn display_name(path: &Path) -> String {
    path.parent()
        .and_then(|p| p.file_name())
        .or_else(|| path.file_name())
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string_lossy().to_string())
}
