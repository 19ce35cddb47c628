use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::CliTest;

const BASE: &str = "en.lproj/Localizable.strings";
const ZH_HANS: &str = "zh-Hans.lproj/Localizable.strings";
const ZH_HANT: &str = "zh-Hant.lproj/Localizable.strings";

fn setup(base: &str, zh_hans: &str) -> Result<CliTest> {
    let test = CliTest::new()?;
    test.write_file(BASE, base)?;
    test.write_file(ZH_HANS, zh_hans)?;
    Ok(test)
}

#[test]
fn test_missing_key_reported() -> Result<()> {
    let test = setup(
        "/* Common */\n\"a\" = \"A\";\n\"b\" = \"B\";\n\"c\" = \"C\";\n",
        "\"a\" = \"甲\";\n\"c\" = \"丙\";\n",
    )?;

    let mut cmd = test.missing_command();
    cmd.args([BASE, ZH_HANS]);
    assert_cmd_snapshot!(cmd, @r#"
    success: false
    exit_code: 1
    ----- stdout -----
    Reading base file: en.lproj/Localizable.strings
    ✓ en.lproj contains 3 keys

    ==================================================
    Checking zh-Hans.lproj: zh-Hans.lproj/Localizable.strings
    ✘ zh-Hans.lproj is missing 1 key(s):
      "b"

    ==================================================
    ✘ Found 1 missing key(s) in total

    ----- stderr -----
    "#);
    Ok(())
}

#[test]
fn test_missing_key_verbose_points_at_base_line() -> Result<()> {
    let test = setup(
        "/* Common */\n\"a\" = \"A\";\n\"b\" = \"B\";\n\"c\" = \"C\";\n",
        "\"a\" = \"甲\";\n\"c\" = \"丙\";\n",
    )?;

    let output = test.missing_command().args(["-v", BASE, ZH_HANS]).output()?;
    let stderr = String::from_utf8(output.stderr)?;

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stderr,
        "error: missing key \"b\" in zh-Hans.lproj/Localizable.strings  missing-key\n  \
         --> en.lproj/Localizable.strings:3\n"
    );
    Ok(())
}

#[test]
fn test_no_missing_keys() -> Result<()> {
    let test = setup("\"a\" = \"A\";\n", "\"a\" = \"甲\";\n")?;
    test.write_file(ZH_HANT, "\"a\" = \"甲\";\n\"extra\" = \"多\";\n")?;

    let output = test.missing_command().args([BASE, ZH_HANS, ZH_HANT]).output()?;
    let stdout = String::from_utf8(output.stdout)?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout.contains("✓ zh-Hans.lproj has no missing keys"));
    assert!(stdout.contains("✓ zh-Hant.lproj has no missing keys"));
    assert!(stdout.contains("All files contain every base key"));
    Ok(())
}

#[test]
fn test_missing_keys_sorted() -> Result<()> {
    let test = setup(
        "\"zeta\" = \"Z\";\n\"alpha\" = \"A\";\n\"mid\" = \"M\";\n",
        "\"mid\" = \"M\";\n",
    )?;

    let output = test.missing_command().args([BASE, ZH_HANS]).output()?;
    let stdout = String::from_utf8(output.stdout)?;

    assert!(stdout.contains("is missing 2 key(s):\n  \"alpha\"\n  \"zeta\"\n"));
    Ok(())
}

#[test]
fn test_missing_both_compare_files() -> Result<()> {
    let test = setup("\"a\" = \"A\";\n\"b\" = \"B\";\n", "\"a\" = \"甲\";\n")?;
    test.write_file(ZH_HANT, "\"b\" = \"乙\";\n")?;

    let output = test.missing_command().args([BASE, ZH_HANS, ZH_HANT]).output()?;
    let stdout = String::from_utf8(output.stdout)?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout.contains("zh-Hans.lproj is missing 1 key(s):\n  \"b\"\n"));
    assert!(stdout.contains("zh-Hant.lproj is missing 1 key(s):\n  \"a\"\n"));
    assert!(stdout.contains("Found 2 missing key(s) in total"));
    Ok(())
}

#[test]
fn test_missing_base_file() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(ZH_HANS, "\"a\" = \"甲\";\n")?;

    let output = test.missing_command().args([BASE, ZH_HANS]).output()?;
    let stderr = String::from_utf8(output.stderr)?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr.contains(
        "Error: Cannot read base file: file does not exist: en.lproj/Localizable.strings"
    ));
    Ok(())
}

#[test]
fn test_undecodable_base_file() -> Result<()> {
    let test = setup("", "\"a\" = \"甲\";\n")?;
    test.write_bytes(BASE, b"\"a\" = \"\xff\xfe\";\n")?;

    let output = test.missing_command().args([BASE, ZH_HANS]).output()?;
    let stderr = String::from_utf8(output.stderr)?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr.contains(
        "Error: Cannot read base file: failed to read en.lproj/Localizable.strings"
    ));
    Ok(())
}

#[test]
fn test_missing_second_compare_file_reported() -> Result<()> {
    let test = setup("\"a\" = \"A\";\n", "\"a\" = \"甲\";\n")?;

    let output = test.missing_command().args([BASE, ZH_HANS, ZH_HANT]).output()?;
    let stdout = String::from_utf8(output.stdout)?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout.contains("✓ zh-Hans.lproj has no missing keys"));
    assert!(stdout.contains("error: cannot read zh-Hant.lproj: file does not exist"));
    Ok(())
}

#[test]
fn test_empty_base_file() -> Result<()> {
    let test = setup("// nothing yet\n\n", "\"a\" = \"甲\";\n")?;

    let output = test.missing_command().args([BASE, ZH_HANS]).output()?;
    let stdout = String::from_utf8(output.stdout)?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout.contains("en.lproj contains no keys, nothing to compare"));
    assert!(!stdout.contains("Checking"));
    Ok(())
}

#[test]
fn test_malformed_line_warning() -> Result<()> {
    let test = setup("\"a\" = \"A\";\n\"b\" = B;\n", "\"a\" = \"甲\";\n")?;

    let output = test.missing_command().args([BASE, ZH_HANS]).output()?;
    let stderr = String::from_utf8(output.stderr)?;
    assert_eq!(output.status.code(), Some(0));
    assert!(stderr.contains("warning: 1 line could not be parsed (use -v for details)"));

    let output = test.missing_command().args(["-v", BASE, ZH_HANS]).output()?;
    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("warning: line may be malformed: \"b\" = B;  parse-ambiguous"));
    assert!(stderr.contains("--> en.lproj/Localizable.strings:2"));
    Ok(())
}

#[test]
fn test_usage_errors_exit_one() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.missing_command().arg(BASE).output()?;
    assert_eq!(output.status.code(), Some(1));

    let output = test.missing_command().arg("--help").output()?;
    assert_eq!(output.status.code(), Some(0));
    Ok(())
}
