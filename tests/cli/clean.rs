use std::process::Command;

use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::CliTest;

const STRINGS_PATH: &str = "Localization/en.lproj/Localizable.strings";

const STRINGS: &str = r#"// Common
"common.ok" = "OK";
"market.back" = "Back";

// Leftovers
"orphan.key" = "Orphan";
"#;

fn setup() -> Result<CliTest> {
    let test = CliTest::new()?;
    test.write_file(STRINGS_PATH, STRINGS)?;
    test.write_file("Sources/View.swift", "let title = L10n.Common.ok\n")?;
    test.write_file(
        "Sources/Legacy.swift",
        "let back = NSLocalizedString(\"market.back\", comment: \"\")\n",
    )?;
    Ok(test)
}

fn run(mut cmd: Command) -> Result<(Option<i32>, String, String)> {
    let output = cmd.output()?;
    Ok((
        output.status.code(),
        String::from_utf8(output.stdout)?,
        String::from_utf8(output.stderr)?,
    ))
}

#[test]
fn test_clean_dry_run() -> Result<()> {
    let test = setup()?;
    let root = regex::escape(&test.root().display().to_string());

    let mut cmd = test.clean_command();
    cmd.arg("--dry-run");

    insta::with_settings!({filters => vec![(root.as_str(), "[ROOT]")]}, {
        assert_cmd_snapshot!(cmd, @r#"
        success: true
        exit_code: 0
        ----- stdout -----
        Project root: [ROOT]
        Localization file: [ROOT]/Localization/en.lproj/Localizable.strings
        Source directory: [ROOT]
        Mode: DRY RUN (no files will be modified)
        ==================================================
        Parsed 3 entries
        Found 2 source file(s) to scan
        Checking usage of 3 entries...
        Progress: 3/3 (100.0%)

        ==================================================
        Usage statistics:
          SwiftGen (L10n.xxx): 1
          NSLocalizedString: 1
          hint: 1 key is still looked up with NSLocalizedString, consider migrating to L10n
        Total entries: 3
        Unused entries: 1
        Usage rate: 66.7%

        Unused entries:
          "orphan.key" = "Orphan";

        Report written to: [ROOT]/localization_cleanup_report.txt
        Would remove 1 unused entry from [ROOT]/Localization/en.lproj/Localizable.strings.
        Run without --dry-run to remove them.

        ----- stderr -----
        "#);
    });

    assert_eq!(test.read_file(STRINGS_PATH)?, STRINGS);
    Ok(())
}

#[test]
fn test_clean_yes_removes_unused_entries() -> Result<()> {
    let test = setup()?;

    let mut cmd = test.clean_command();
    cmd.arg("--yes");
    let (code, stdout, _) = run(cmd)?;

    assert_eq!(code, Some(0));
    assert!(stdout.contains("✓ Removed 1 unused entry"));
    assert!(stdout.contains("swiftgen config run --config swiftgen.yml"));

    // Comments and blank lines stay where they were
    assert_eq!(
        test.read_file(STRINGS_PATH)?,
        "// Common\n\"common.ok\" = \"OK\";\n\"market.back\" = \"Back\";\n\n// Leftovers\n"
    );
    assert_eq!(
        test.read_file("Localization/en.lproj/Localizable.strings.backup")?,
        STRINGS
    );
    Ok(())
}

#[test]
fn test_clean_declined_when_stdin_closed() -> Result<()> {
    let test = setup()?;

    let (code, stdout, _) = run(test.clean_command())?;

    assert_eq!(code, Some(0));
    assert!(stdout.contains("Delete 1 unused entry? (y/N): "));
    assert!(stdout.contains("Cancelled, no changes made."));
    assert_eq!(test.read_file(STRINGS_PATH)?, STRINGS);
    assert!(!test.root().join("Localization/en.lproj/Localizable.strings.backup").exists());
    Ok(())
}

#[test]
fn test_clean_writes_report() -> Result<()> {
    let test = setup()?;

    let mut cmd = test.clean_command();
    cmd.arg("--dry-run");
    let (code, _, _) = run(cmd)?;
    assert_eq!(code, Some(0));

    let report = test.read_file("localization_cleanup_report.txt")?;
    assert!(report.starts_with("Localization Cleanup Report\n"));
    assert!(report.contains("Total entries: 3\n"));
    assert!(report.contains("Used entries: 2\n"));
    assert!(report.contains("  - SwiftGen (L10n.xxx): 1\n"));
    assert!(report.contains("  - Native (NSLocalizedString): 1\n"));
    assert!(report.contains("Usage rate: 66.7%\n"));
    assert!(report.ends_with("\"orphan.key\" = \"Orphan\";\n"));
    Ok(())
}

#[test]
fn test_clean_nothing_to_clean() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(STRINGS_PATH, "\"common.ok\" = \"OK\";\n")?;
    test.write_file("App/View.swift", "let title = L10n.Common.ok\n")?;

    let (code, stdout, _) = run(test.clean_command())?;

    assert_eq!(code, Some(0));
    assert!(stdout.contains("Usage rate: 100.0%"));
    assert!(stdout.contains("✓ No unused entries found"));
    Ok(())
}

#[test]
fn test_clean_skips_excluded_dirs() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(STRINGS_PATH, "\"common.ok\" = \"OK\";\n")?;
    test.write_file("App/View.swift", "let x = 1\n")?;
    test.write_file("Pods/Vendor/Vendor.swift", "let title = L10n.Common.ok\n")?;

    let mut cmd = test.clean_command();
    cmd.arg("--dry-run");
    let (code, stdout, _) = run(cmd)?;

    assert_eq!(code, Some(0));
    assert!(stdout.contains("Unused entries: 1"));
    Ok(())
}

#[test]
fn test_clean_explicit_paths() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        "Custom/Strings.strings",
        "\"common.ok\" = \"OK\";\n\"orphan.key\" = \"Orphan\";\n",
    )?;
    test.write_file(
        "Code/View.m",
        "NSString *s = NSLocalizedString(@\"common.ok\", nil);\n",
    )?;
    test.write_file(
        "Other/Unrelated.m",
        "NSString *s = NSLocalizedString(@\"orphan.key\", nil);\n",
    )?;

    let mut cmd = test.clean_command();
    cmd.args([
        "--dry-run",
        "--localizable-file",
        "Custom/Strings.strings",
        "--source-dir",
        "Code",
    ]);
    let (code, stdout, _) = run(cmd)?;

    assert_eq!(code, Some(0));
    assert!(stdout.contains("Source directory: Code"));
    assert!(stdout.contains("  NSLocalizedString: 1\n"));
    assert!(stdout.contains("  \"orphan.key\" = \"Orphan\";\n"));
    Ok(())
}

#[test]
fn test_clean_verbose_traces_keys() -> Result<()> {
    let test = setup()?;

    let mut cmd = test.clean_command();
    cmd.args(["--dry-run", "-v"]);
    let (_, stdout, _) = run(cmd)?;

    assert!(stdout.contains("  parsed: common.ok -> L10n.Common.ok\n"));
    assert!(stdout.contains("checking (1/3): common.ok\n  ✓ used (SwiftGen) in View.swift\n"));
    assert!(stdout.contains(
        "checking (2/3): market.back\n  ✓ used (NSLocalizedString) in Legacy.swift\n"
    ));
    assert!(stdout.contains("checking (3/3): orphan.key\n  ✘ unused\n"));
    Ok(())
}

#[test]
fn test_clean_verbose_lists_unused_keys() -> Result<()> {
    let test = setup()?;

    let mut cmd = test.clean_command();
    cmd.args(["--dry-run", "-v"]);
    let (code, _, stderr) = run(cmd)?;

    assert_eq!(code, Some(0));
    assert!(stderr.contains("warning: unused key \"orphan.key\"  unused-key\n"));
    assert!(stderr.contains(&format!("  --> {}:6\n", test.root().join(STRINGS_PATH).display())));
    assert!(!stderr.contains("common.ok"));

    let mut cmd = test.clean_command();
    cmd.arg("--dry-run");
    let (_, _, stderr) = run(cmd)?;
    assert!(stderr.is_empty());
    Ok(())
}

#[test]
fn test_clean_missing_localizable_file() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("Sources/View.swift", "let x = 1\n")?;

    let (code, _, stderr) = run(test.clean_command())?;

    assert_eq!(code, Some(1));
    assert!(stderr.contains("Error: Cannot find Localizable.strings, checked:"));
    assert!(stderr.contains("Resources/Localization/en.lproj/Localizable.strings"));
    Ok(())
}

#[test]
fn test_clean_missing_project_root() -> Result<()> {
    let test = CliTest::new()?;

    let mut cmd = test.clean_command();
    cmd.args(["--project-root", "does-not-exist"]);
    let (code, _, stderr) = run(cmd)?;

    assert_eq!(code, Some(1));
    assert!(stderr.contains("Error: Project root does not exist: does-not-exist"));
    Ok(())
}

#[test]
fn test_clean_config_file_namespace() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".stringsrc.json", r#"{ "namespace": "Strings" }"#)?;
    test.write_file(STRINGS_PATH, "\"common.ok\" = \"OK\";\n")?;
    test.write_file("Sources/View.swift", "let title = Strings.Common.ok\n")?;

    let mut cmd = test.clean_command();
    cmd.arg("--dry-run");
    let (code, stdout, _) = run(cmd)?;

    assert_eq!(code, Some(0));
    assert!(stdout.contains("Using configuration file"));
    assert!(stdout.contains("  SwiftGen (Strings.xxx): 1\n"));
    assert!(stdout.contains("✓ No unused entries found"));
    Ok(())
}
