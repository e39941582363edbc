//! Integration tests for the stimpl CLI binary.
//!
//! These exercise the actual compiled binary against JSON fixtures
//! under `fixtures/`.

use assert_cmd::{Command, cargo::cargo_bin_cmd};
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_cli_version() {
    let mut cmd = cargo_bin_cmd!();
    cmd.arg("--version");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("stimpl"));
}

#[test]
fn test_cli_help() {
    let mut cmd = cargo_bin_cmd!();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("--debug"));
}

#[test]
fn test_counter_program_prints_each_iteration() {
    let mut cmd = cargo_bin_cmd!();
    cmd.arg("fixtures/counter.json");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("0"))
        .stdout(predicate::str::contains("1"))
        .stdout(predicate::str::contains("2"))
        .stdout(predicate::str::contains("false : Boolean"));
}

#[test]
fn test_divide_by_zero_fails_with_math_error() {
    let mut cmd = cargo_bin_cmd!();
    cmd.arg("fixtures/divide_by_zero.json");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Cannot Divide by 0"));
}

#[test]
fn test_unbound_variable_fails_with_syntax_error() {
    let mut cmd = cargo_bin_cmd!();
    cmd.arg("fixtures/unbound_variable.json");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("before assignment"));
}

#[test]
fn test_missing_program_file_fails() {
    let mut cmd = cargo_bin_cmd!();
    cmd.arg("fixtures/does_not_exist.json");

    cmd.assert().failure();
}

#[test]
fn test_debug_flag_is_accepted() {
    let mut cmd = cargo_bin_cmd!();
    cmd.arg("--debug").arg("fixtures/counter.json");

    cmd.assert().success();
}

#[test]
fn test_program_loaded_from_an_arbitrary_path() {
    let mut file = NamedTempFile::new().expect("failed to create temp file");
    write!(
        file,
        r#"{{"kind": "Add", "left": {{"kind": "IntLiteral", "literal": 2}}, "right": {{"kind": "IntLiteral", "literal": 3}}}}"#
    )
    .unwrap();

    let mut cmd = cargo_bin_cmd!();
    cmd.arg(file.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("5 : Integer"));
}
