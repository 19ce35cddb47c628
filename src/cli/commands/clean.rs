use std::{
    collections::HashSet,
    io,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};

use super::super::{
    args::CleanArgs,
    cleanup_report::CleanupReport,
    prompt,
    report::{self, CleanHeader},
};
use super::{
    CleanAction, CleanSummary, CommandResult, CommandSummary, helper::parse_warnings_to_issues,
};
use crate::{
    actions::{RemovalMode, RemoveEntries},
    config::{Config, load_config},
    core::{KeySyntax, SourceScanner, read_strings_file, transform_key},
    issues::Issue,
    rules::usage::{check_unused_keys_issues, classify_usages, load_sources},
};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn clean(args: &CleanArgs) -> Result<CommandResult> {
    let project_root = args
        .project_root
        .canonicalize()
        .with_context(|| format!("Project root does not exist: {}", args.project_root.display()))?;
    let loaded = load_config(&project_root)?;
    let config = loaded.config;

    let localizable_file = match &args.localizable_file {
        Some(path) => {
            if !path.is_file() {
                bail!("Localization file does not exist: {}", path.display());
            }
            path.clone()
        }
        None => find_localizable_file(&project_root, &config)?,
    };
    let source_dir = match &args.source_dir {
        Some(path) => {
            if !path.is_dir() {
                bail!("Source directory does not exist: {}", path.display());
            }
            path.clone()
        }
        None => find_source_dir(&project_root, &config),
    };

    report::print_clean_header_to(
        &CleanHeader {
            project_root: &project_root,
            localizable_file: &localizable_file,
            source_dir: &source_dir,
            dry_run: args.dry_run,
            from_config: loaded.from_file,
        },
        &mut io::stdout().lock(),
    );

    let mut issues: Vec<Issue> = Vec::new();

    let parsed = read_strings_file(&localizable_file, KeySyntax::Strict)
        .context("Cannot read localization file")?;
    let parse_issues = parse_warnings_to_issues(&localizable_file, &parsed.warnings);
    report::print_diagnostics(&parse_issues, args.verbose);
    issues.extend(parse_issues);

    let table = parsed.table;
    if table.is_empty() {
        bail!(
            "No localization entries found in {}",
            localizable_file.display()
        );
    }
    println!("Parsed {} entries", table.len());

    let scanner = SourceScanner::new(&source_dir, &config.search_extensions, &config.excluded_dirs)
        .with_ignores(&config.ignores, args.verbose);
    let scan = scanner.scan(args.verbose);
    report::print_skipped_paths(scan.skipped_count, args.verbose);
    println!("Found {} source file(s) to scan", scan.files.len());

    let sources = load_sources(scan.files);
    let read_issues: Vec<Issue> = sources.warnings.into_iter().map(Issue::SourceRead).collect();
    report::print_diagnostics(&read_issues, args.verbose);
    issues.extend(read_issues);

    if args.verbose {
        for entry in table.iter() {
            let transformed = transform_key(&entry.key);
            report::print_parsed_key(&entry.key, &config.namespace, &transformed);
        }
    }

    println!("Checking usage of {} entries...", table.len());
    let usage = classify_usages(&table, &sources.files, &config.namespace, |i, total, record| {
        report::print_progress_to(i, total, record, args.verbose, &mut io::stdout().lock());
    });

    let report_path = project_root.join(&config.report_file);
    let generated_at = chrono::Local::now().format(TIMESTAMP_FORMAT).to_string();
    CleanupReport {
        project_root: &project_root,
        localizable_file: &localizable_file,
        generated_at: &generated_at,
        namespace: &config.namespace,
        usage: &usage,
    }
    .write(&report_path)?;

    report::print_usage_stats_to(&usage, &config.namespace, &report_path, &mut io::stdout().lock());

    let file_path = localizable_file.to_string_lossy().to_string();
    let unused_issues = check_unused_keys_issues(&usage, &table, &file_path);
    let keys: HashSet<String> = unused_issues.iter().map(|i| i.key.clone()).collect();

    let action = if keys.is_empty() {
        CleanAction::NothingToClean
    } else if args.dry_run {
        let outcome = RemoveEntries::run(&localizable_file, &keys, RemovalMode::DryRun)?;
        CleanAction::DryRun {
            would_remove: outcome.removed,
        }
    } else if !args.yes && !prompt::confirm(&delete_question(keys.len()))? {
        CleanAction::Declined
    } else {
        CleanAction::Removed(RemoveEntries::run(
            &localizable_file,
            &keys,
            RemovalMode::Apply,
        )?)
    };

    issues.extend(unused_issues.iter().cloned().map(Issue::UnusedKey));

    Ok(CommandResult {
        summary: CommandSummary::Clean(CleanSummary {
            localizable_file,
            report_path,
            usage,
            unused_issues,
            action,
        }),
        issues,
    })
}

fn delete_question(count: usize) -> String {
    format!(
        "Delete {} unused {}?",
        count,
        report::plural(count, "entry", "entries")
    )
}

/// First existing candidate under `root`.
fn find_localizable_file(root: &Path, config: &Config) -> Result<PathBuf> {
    let candidates: Vec<PathBuf> = config
        .localizable_candidates
        .iter()
        .map(|c| root.join(c))
        .collect();

    if let Some(found) = candidates.iter().find(|p| p.is_file()) {
        return Ok(found.clone());
    }

    let checked = candidates
        .iter()
        .map(|p| format!("  - {}", p.display()))
        .collect::<Vec<_>>()
        .join("\n");
    bail!(
        "Cannot find Localizable.strings, checked:\n{}\nUse --localizable-file to specify it",
        checked
    )
}

/// First candidate directory holding at least one file with the primary
/// extension, falling back to `root`.
fn find_source_dir(root: &Path, config: &Config) -> PathBuf {
    let extension = config.primary_extension().to_string();

    config
        .source_dir_candidates
        .iter()
        .map(|c| if c.is_empty() { root.to_path_buf() } else { root.join(c) })
        .find(|dir| {
            dir.is_dir()
                && SourceScanner::new(dir, std::slice::from_ref(&extension), &config.excluded_dirs)
                    .contains_extension(&extension)
        })
        .unwrap_or_else(|| root.to_path_buf())
}
