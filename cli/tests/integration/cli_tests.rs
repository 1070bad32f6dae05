//! Integration tests for argument parsing and startup.

#![allow(clippy::expect_used)]

use assert_cmd::Command;
use predicates::prelude::*;

fn azvm() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("azvm"));
    cmd.env("NO_COLOR", "1")
        .env("AZVM_CONFIG", "/nonexistent/azvm/config.yaml")
        .env_remove("AZVM_VM_LIST");
    cmd
}

#[test]
fn test_help_flag_shows_usage() {
    azvm()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("--file"))
        .stdout(predicate::str::contains("power state"));
}

#[test]
fn test_version_flag_shows_version() {
    azvm()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("azvm"));
}

#[test]
fn test_unknown_flag_is_rejected() {
    azvm().arg("--bogus").assert().code(2);
}

#[test]
fn test_zero_timeout_is_a_startup_error() {
    azvm()
        .args(["--timeout", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("command_timeout_secs"));
}

#[test]
fn test_invalid_config_file_is_a_startup_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "command_timeout_secs: [oops\n").expect("write");

    azvm()
        .env("AZVM_CONFIG", &path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("loading configuration"));
}

#[test]
fn test_closed_stdin_at_filename_prompt_fails_cleanly() {
    let dir = tempfile::tempdir().expect("tempdir");
    azvm()
        .current_dir(dir.path())
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("input closed"));
}
