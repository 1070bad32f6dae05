//! End-to-end sessions against a fake Azure CLI.

#![cfg(unix)]
#![allow(clippy::expect_used)]

use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const FAKE_AZ: &str = r#"#!/bin/sh
echo "$@" >> "$AZ_LOG"
case "$2" in
  get-instance-view)
    case "$4" in
      vm1) printf 'alpha\nVM running\n' ;;
      vm2) printf 'beta\nVM deallocated\n' ;;
      *) echo "ResourceNotFound" >&2; exit 1 ;;
    esac ;;
  start) exit 0 ;;
  deallocate) echo "AuthorizationFailed" >&2; exit 1 ;;
esac
"#;

struct Fixture {
    dir: TempDir,
}

impl Fixture {
    fn new() -> Self {
        let dir = tempfile::tempdir().expect("tempdir");
        let az = dir.path().join("az");
        std::fs::write(&az, FAKE_AZ).expect("write az");
        std::fs::set_permissions(&az, std::fs::Permissions::from_mode(0o755)).expect("chmod");
        std::fs::write(dir.path().join("manage_vmlist.txt"), "vm1\n\nvm2\nvm3\n")
            .expect("write list");
        Self { dir }
    }

    fn path(&self) -> &Path {
        self.dir.path()
    }

    fn log(&self) -> PathBuf {
        self.path().join("az.log")
    }

    fn azvm(&self) -> Command {
        let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("azvm"));
        cmd.current_dir(self.path())
            .env("NO_COLOR", "1")
            .env("AZVM_CONFIG", self.path().join("absent.yaml"))
            .env("AZ_LOG", self.log())
            .env_remove("AZVM_VM_LIST")
            .arg("--az")
            .arg(self.path().join("az"));
        cmd
    }

    fn az_calls(&self) -> Vec<String> {
        std::fs::read_to_string(self.log())
            .unwrap_or_default()
            .lines()
            .map(ToString::to_string)
            .collect()
    }
}

#[test]
fn test_default_filename_then_exit() {
    let fx = Fixture::new();
    fx.azvm()
        .write_stdin("\n2\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Loaded 3 VM(s)"))
        .stdout(predicate::str::contains("Exiting."));
    assert!(fx.az_calls().is_empty());
}

#[test]
fn test_missing_file_reprompts() {
    let fx = Fixture::new();
    fx.azvm()
        .write_stdin("nope.txt\nmanage_vmlist.txt\n2\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("File 'nope.txt' not found"));
}

#[test]
fn test_scan_shows_all_rows() {
    let fx = Fixture::new();
    fx.azvm()
        .args(["--file", "manage_vmlist.txt"])
        .write_stdin("1\n1\n4\n2\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("VM status scan completed."))
        .stdout(predicate::str::contains("VM Status Summary (All)"))
        .stdout(predicate::str::contains("alpha"))
        .stdout(predicate::str::contains("beta"))
        .stdout(predicate::str::contains("Error"))
        .stdout(predicate::str::contains("Could not retrieve status for vm3"));
    assert_eq!(fx.az_calls().len(), 3);
}

#[test]
fn test_start_deallocated_vm() {
    let fx = Fixture::new();
    fx.azvm()
        .args(["--file", "manage_vmlist.txt"])
        .write_stdin("1\n3\ny\n1\ny\n4\n2\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("VM Status Summary (Deallocated)"))
        .stdout(predicate::str::contains("VM start initiated."));
    let calls = fx.az_calls();
    assert_eq!(calls.last().map(String::as_str), Some("vm start --ids vm2 --no-wait"));
}

#[test]
fn test_failed_deallocate_is_reported_and_session_continues() {
    let fx = Fixture::new();
    fx.azvm()
        .args(["--file", "manage_vmlist.txt", "--wait"])
        .write_stdin("1\n2\ny\n1\ny\n4\n2\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Error deallocating VM"))
        .stderr(predicate::str::contains("AuthorizationFailed"))
        .stdout(predicate::str::contains("Exiting."));
    let calls = fx.az_calls();
    assert_eq!(calls.last().map(String::as_str), Some("vm deallocate --ids vm1"));
}

#[test]
fn test_cancelled_action_makes_no_call() {
    let fx = Fixture::new();
    fx.azvm()
        .args(["--file", "manage_vmlist.txt"])
        .write_stdin("1\n3\ny\n1\nn\n4\n2\n")
        .assert()
        .success();
    assert!(fx.az_calls().iter().all(|c| c.contains("get-instance-view")));
}

#[test]
fn test_unreadable_list_file_aborts_the_run() {
    let fx = Fixture::new();
    std::fs::write(fx.path().join("binary.txt"), [0xff, 0xfe, 0x00, b'\n']).expect("write");
    fx.azvm()
        .write_stdin("binary.txt\nmanage_vmlist.txt\n2\n")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: reading VM list"))
        .stdout(predicate::str::contains("Loaded").not());
    assert!(fx.az_calls().is_empty());
}

#[test]
fn test_quiet_mode_still_reports_action_outcomes() {
    let fx = Fixture::new();
    fx.azvm()
        .args(["--file", "manage_vmlist.txt", "--quiet"])
        .write_stdin("1\n3\ny\n1\ny\n4\n2\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("VM status scan completed."))
        .stdout(predicate::str::contains("VM start initiated."))
        .stdout(predicate::str::contains("Loaded").not())
        .stdout(predicate::str::contains("Could not retrieve status").not());
}
