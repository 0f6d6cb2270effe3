//! Failure handling tests for the juoppo binary.
//!
//! These tests verify the program gives up cleanly on:
//! - Input ending mid-session
//! - Corrupted database files
//! - Broken configuration

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn cli(data_dir: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("juoppo"));
    cmd.env("XDG_CONFIG_HOME", data_dir.join("config"))
        .env_remove("RUST_LOG")
        .arg("--data-dir")
        .arg(data_dir);
    cmd
}

fn setup_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

#[test]
fn test_input_closed_before_report() {
    let temp_dir = setup_test_dir();

    cli(temp_dir.path())
        .write_stdin("matti\nKoff\nIII\n0.33\n")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Pahoittelut"))
        .stdout(predicate::str::contains("YHTEENSÄ").not())
        .stderr(predicate::str::contains("Input closed"));
}

#[test]
fn test_input_closed_during_continue_prompt() {
    let temp_dir = setup_test_dir();

    // An unanswered continue prompt is not taken as "no"
    cli(temp_dir.path())
        .write_stdin("matti\nKoff\nIII\n0.33\n4.5\nehkä\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Vieläkö joit?"));
}

#[test]
fn test_error_is_logged() {
    let temp_dir = setup_test_dir();

    cli(temp_dir.path()).write_stdin("").assert().failure();

    let log = fs::read_to_string(temp_dir.path().join("juoppo.log")).expect("Failed to read log");
    assert!(log.contains("ERROR"));
    assert!(log.contains("InputClosed"));
}

#[test]
fn test_corrupted_database_file() {
    let temp_dir = setup_test_dir();
    fs::write(
        temp_dir.path().join("juoppodata.db"),
        "this is definitely not an sqlite database, just some text long enough to have a header",
    )
    .unwrap();

    cli(temp_dir.path())
        .write_stdin("matti\n")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Pahoittelut"))
        .stderr(predicate::str::contains("Database error"));
}

#[test]
fn test_invalid_config_file() {
    let temp_dir = setup_test_dir();
    let config_path = temp_dir.path().join("broken.toml");
    fs::write(&config_path, "[data\ndata_dir = ").unwrap();

    cli(temp_dir.path())
        .arg("--config")
        .arg(&config_path)
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("TOML error"));
}

#[test]
fn test_missing_config_file() {
    let temp_dir = setup_test_dir();

    cli(temp_dir.path())
        .arg("--config")
        .arg(temp_dir.path().join("nope.toml"))
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("IO error"));
}
