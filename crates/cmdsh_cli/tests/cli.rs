//! End-to-end tests driving the `cmdsh` binary through stdin.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

fn cmdsh(dir: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("cmdsh").unwrap();
    cmd.current_dir(dir).arg("--no-color");
    cmd
}

#[test]
fn help_then_exit() {
    let dir = tempfile::tempdir().unwrap();
    cmdsh(dir.path())
        .write_stdin("help\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome to the Custom CLI"))
        .stdout(predicate::str::contains("Available commands:"))
        .stdout(predicate::str::contains("sysinfo"));
}

#[test]
fn unknown_command_is_reported_and_logged() {
    let dir = tempfile::tempdir().unwrap();
    cmdsh(dir.path())
        .write_stdin("frobnicate\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("unknown command: frobnicate"));

    let log = fs::read_to_string(dir.path().join("cli_log.txt")).unwrap();
    assert_eq!(log, "unknown command: frobnicate\n");
}

#[test]
fn exit_stops_reading_input() {
    let dir = tempfile::tempdir().unwrap();
    cmdsh(dir.path())
        .write_stdin("exit\ncreate late.txt\n")
        .assert()
        .success();
    assert!(!dir.path().join("late.txt").exists());
}

#[test]
fn log_file_flag_redirects_failures() {
    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("errors.log");
    cmdsh(dir.path())
        .arg("--log-file")
        .arg(&log)
        .write_stdin("type missing.txt\nalias\nalias x\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("no aliases defined"))
        .stderr(predicate::str::contains("usage: alias <name> <command>"));

    let contents = fs::read_to_string(&log).unwrap();
    assert!(contents.contains("missing.txt"));
    assert!(!contents.contains("usage"));
    assert!(!dir.path().join("cli_log.txt").exists());
}

#[test]
fn one_shot_command_skips_the_banner() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("note.txt"), "first\nsecond\n").unwrap();
    cmdsh(dir.path())
        .arg("type note.txt")
        .assert()
        .success()
        .stdout("first\nsecond\n");
}
