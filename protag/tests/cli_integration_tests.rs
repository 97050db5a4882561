// protag/tests/cli_integration_tests.rs
//! Command-line integration tests for the `protag` binary.
//!
//! These tests run the compiled executable with `assert_cmd`, feeding it
//! temporary CSV files created with `tempfile`, and check exit status,
//! stdout (tagged CSV / JSON / classification) and stderr (summary, errors).
//! Output is passed through `strip_ansi_escapes` before comparison.

use anyhow::Result;
use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

use strip_ansi_escapes::strip as strip_ansi_escapes_fn;

const SAMPLE_CSV: &str = "\
text,label
@john123: check http://x.co now,1
She is Christian and proud,2
the sky is blue today,1
an elderly deaf man,0
";

fn protag_cmd() -> Command {
    let mut cmd = Command::cargo_bin("protag").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd.env_remove("PROTAG_ALLOW_DEBUG_TEXT");
    cmd
}

fn strip_ansi(s: &[u8]) -> String {
    String::from_utf8_lossy(&strip_ansi_escapes_fn(s)).to_string()
}

fn write_csv(content: &str) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;
    file.write_all(content.as_bytes())?;
    Ok(file)
}

#[test]
fn tag_writes_tagged_rows_to_stdout() -> Result<()> {
    let input = write_csv(SAMPLE_CSV)?;
    let output = protag_cmd()
        .arg("tag")
        .arg("-i")
        .arg(input.path())
        .output()?;

    assert!(output.status.success());
    let stdout = strip_ansi(&output.stdout);
    let stderr = strip_ansi(&output.stderr);

    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        vec![
            "text,label,protected_category",
            "She is Christian and proud,2,gender",
            "an elderly deaf man,0,gender",
        ]
    );
    assert!(stderr.contains("Total rows: 4"));
    assert!(stderr.contains("Rows with protected attributes: 2"));
    Ok(())
}

#[test]
fn tag_writes_output_file() -> Result<()> {
    let input = write_csv(SAMPLE_CSV)?;
    let dir = TempDir::new()?;
    let out_path = dir.path().join("protected.csv");

    protag_cmd()
        .args(["tag", "--no-summary", "-o"])
        .arg(&out_path)
        .arg("-i")
        .arg(input.path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let written = fs::read_to_string(&out_path)?;
    assert!(written.starts_with("text,label,protected_category\n"));
    assert_eq!(written.lines().count(), 3);
    Ok(())
}

#[test]
fn tag_fails_without_text_column() -> Result<()> {
    let input = write_csv("body,label\nhello,1\n")?;
    protag_cmd()
        .arg("tag")
        .arg("-i")
        .arg(input.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("required column 'text' not found"));
    Ok(())
}

#[test]
fn tag_fails_on_missing_input() {
    protag_cmd()
        .args(["tag", "-i", "/no/such/dataset.csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read input"));
}

#[test]
fn tag_custom_text_column_and_skip_malformed() -> Result<()> {
    let input = write_csv("label,tweet\n1,a muslim family\n2\n0,hello\n")?;

    protag_cmd()
        .arg("tag")
        .arg("-i")
        .arg(input.path())
        .args(["--text-column", "tweet"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("row 2"));

    protag_cmd()
        .arg("tag")
        .arg("-i")
        .arg(input.path())
        .args(["--text-column", "tweet", "--skip-malformed", "--no-summary"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1,a muslim family,religion"));
    Ok(())
}

#[test]
fn tag_json_stdout_summary() -> Result<()> {
    let input = write_csv(SAMPLE_CSV)?;
    let output = protag_cmd()
        .arg("--quiet")
        .arg("tag")
        .arg("-i")
        .arg(input.path())
        .arg("--json-stdout")
        .output()?;

    assert!(output.status.success());
    assert!(output.stderr.is_empty());
    let json: Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(json["total_records"], 4);
    assert_eq!(json["tagged_records"], 2);
    assert_eq!(json["text_column"], "text");
    assert_eq!(json["input_sha256"].as_str().map(str::len), Some(64));

    let counts = json["counts"].as_array().expect("counts array");
    assert_eq!(counts.len(), 7);
    assert_eq!(counts[1]["category"], "gender");
    assert_eq!(counts[1]["count"], 2);
    let total: u64 = counts.iter().filter_map(|c| c["count"].as_u64()).sum();
    assert_eq!(total, 2);
    Ok(())
}

#[test]
fn tag_json_file_and_disabled_category() -> Result<()> {
    let input = write_csv(SAMPLE_CSV)?;
    let dir = TempDir::new()?;
    let json_path = dir.path().join("summary.json");

    protag_cmd()
        .arg("tag")
        .arg("-i")
        .arg(input.path())
        .args(["--disable", "gender", "--no-summary", "--json-file"])
        .arg(&json_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("She is Christian and proud,2,religion"))
        .stdout(predicate::str::contains("an elderly deaf man,0,disability"));

    let json: Value = serde_json::from_str(&fs::read_to_string(&json_path)?)?;
    assert_eq!(json["counts"].as_array().map(Vec::len), Some(6));
    Ok(())
}

#[test]
fn classify_shows_first_category() {
    protag_cmd()
        .args(["classify", "@ana: she is christian http://t.co/x"])
        .assert()
        .success()
        .stdout(predicate::str::contains("religion: 1 pattern(s)"))
        .stdout(predicate::str::contains("protected_category: gender"));
}

#[test]
fn classify_reads_stdin() {
    protag_cmd()
        .args(["classify", "--no-clean"])
        .write_stdin("the sky is blue today\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("protected_category: (none)"));
}

#[test]
fn categories_lists_active_table() -> Result<()> {
    let output = protag_cmd().args(["categories", "--disable", "age"]).output()?;
    assert!(output.status.success());
    let stdout = strip_ansi(&output.stdout);
    assert!(stdout.contains("race_ethnicity"));
    assert!(stdout.contains("nationality"));
    assert!(!stdout.contains("Age groups"));
    Ok(())
}

#[test]
fn custom_config_overrides_category() -> Result<()> {
    let mut config = NamedTempFile::new()?;
    writeln!(config, "categories:\n  - category: religion\n    patterns:\n      - '\\bmonk\\b'")?;

    protag_cmd()
        .arg("classify")
        .arg("--config")
        .arg(config.path())
        .arg("a buddhist monk")
        .assert()
        .success()
        .stdout(predicate::str::contains("protected_category: religion"));
    Ok(())
}

#[test]
fn invalid_theme_file_fails() -> Result<()> {
    let mut theme = NamedTempFile::new()?;
    writeln!(theme, "not: [valid")?;
    protag_cmd()
        .arg("--theme")
        .arg(theme.path())
        .args(["classify", "hello"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Theme error"));
    Ok(())
}

#[test]
fn misspelled_enable_category_fails() -> Result<()> {
    let input = write_csv(SAMPLE_CSV)?;
    protag_cmd()
        .arg("tag")
        .arg("-i")
        .arg(input.path())
        .args(["--enable", "gendr"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("no known category in `enable` list: gendr"));
    Ok(())
}

#[test]
fn unknown_theme_color_fails() -> Result<()> {
    let mut theme = NamedTempFile::new()?;
    writeln!(theme, "header:\n  fg: purpel")?;
    protag_cmd()
        .arg("--theme")
        .arg(theme.path())
        .args(["classify", "hello"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown colour 'purpel'"));
    Ok(())
}
