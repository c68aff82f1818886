//! Integration tests for the deskcloud CLI skeleton.

#![allow(clippy::expect_used)]

use assert_cmd::Command;
use predicates::prelude::*;

fn deskcloud() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("deskcloud"))
}

// --- Help and version tests ---

#[test]
fn test_cli_no_args_shows_help_and_exits_two() {
    deskcloud().assert().code(2).stderr(predicate::str::contains(
        "Parallels Desktop VM slots for build agents",
    ));
}

#[test]
fn test_cli_help_lists_commands() {
    deskcloud()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("slots"))
        .stdout(predicate::str::contains("behaviors"))
        .stdout(predicate::str::contains("post-build"))
        .stdout(predicate::str::contains("check"));
}

#[test]
fn test_cli_version_command() {
    deskcloud()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("deskcloud "));
}

#[test]
fn test_cli_version_json() {
    deskcloud()
        .args(["version", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""version":""#));
}

#[test]
fn test_cli_unknown_command_fails() {
    deskcloud().arg("frobnicate").assert().failure();
}

// --- Behaviors ---

#[test]
fn test_behaviors_lists_all_four_in_order() {
    deskcloud()
        .arg("behaviors")
        .assert()
        .success()
        .stdout(predicate::str::contains("Parallels Desktop virtual machine"))
        .stdout(predicate::str::is_match("(?s)Suspend.*Stop.*KeepRunning.*ReturnPrevState").expect("regex"));
}

#[test]
fn test_behaviors_json_has_values_and_labels() {
    let output = deskcloud()
        .args(["behaviors", "--json"])
        .output()
        .expect("run deskcloud");
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid json");
    let items = json[0]["post_build_behaviors"].as_array().expect("array");
    assert_eq!(items.len(), 4);
    assert_eq!(items[3]["value"], "ReturnPrevState");
    assert_eq!(items[2]["label"], "Keep running");
}
