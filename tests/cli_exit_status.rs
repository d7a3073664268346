//! Command-Line Exit Status Tests
//!
//! - Help and fully valid runs exit 0
//! - Any invalid file, load failure or bad config exits 1
//! - Failure lines reach stdout before the process exits

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

const VALID: &str = r#"<module moduleId="m1"><title>LED</title><properties><property name="color">red</property></properties></module>"#;
const NO_TITLE: &str = r#"<module moduleId="m1"><properties><property name="color">red</property></properties></module>"#;

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_fzp-validator"))
        .args(args)
        .output()
        .unwrap()
}

fn path_arg(path: &Path) -> &str {
    path.to_str().unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

// =============================================================================
// Success
// =============================================================================

/// No subcommand prints the top-level help and exits 0.
#[test]
fn test_no_subcommand_shows_help() {
    let output = run(&[]);

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("validate"));
}

/// `validate` without a target prints usage samples and exits 0.
#[test]
fn test_validate_without_target_shows_usage() {
    let output = run(&["validate"]);

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("USAGE-SAMPLES"));
}

/// A valid file produces no output and exits 0.
#[test]
fn test_valid_file_exits_zero() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("a.fzp");
    fs::write(&path, VALID).unwrap();

    let output = run(&["validate", "--file", path_arg(&path)]);

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).is_empty());
}

// =============================================================================
// Failure
// =============================================================================

/// An invalid file streams its failures and exits 1.
#[test]
fn test_invalid_file_exits_one() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("b.fzp");
    fs::write(&path, NO_TITLE).unwrap();

    let output = run(&["validate", "-f", path_arg(&path)]);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stdout(&output),
        format!("=> title undefined\n1 Errors @ {}\n", path.display())
    );
    assert!(String::from_utf8_lossy(&output.stderr).contains("FZP_CLI_VALIDATION_FAILED"));
}

/// Disabling the failing check turns the same run into a success.
#[test]
fn test_disable_flag_changes_exit_status() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("b.fzp");
    fs::write(&path, NO_TITLE).unwrap();

    let output = run(&["validate", "-f", path_arg(&path), "--no-check-title"]);
    assert_eq!(output.status.code(), Some(0));
}

/// A directory holding one invalid file exits 1.
#[test]
fn test_invalid_directory_exits_one() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("a.fzp"), VALID).unwrap();
    fs::write(tmp.path().join("b.fzp"), NO_TITLE).unwrap();

    let output = run(&["validate", "--dir", path_arg(tmp.path())]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("1 Errors @ "));
}

/// A config file with an unknown key is rejected before any file is read.
#[test]
fn test_bad_config_exits_one() {
    let tmp = TempDir::new().unwrap();
    let part = tmp.path().join("a.fzp");
    let config = tmp.path().join("checks.json");
    fs::write(&part, VALID).unwrap();
    fs::write(&config, r#"{ "unknown": true }"#).unwrap();

    let output = run(&["validate", "-f", path_arg(&part), "--config", path_arg(&config)]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("FZP_CLI_CONFIG_ERROR"));
}
