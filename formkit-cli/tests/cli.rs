//! CLI integration tests for the `check`, `validate` and `session` commands.
//!
//! Uses `assert_cmd` to spawn the `formkit` binary and verify exit codes,
//! stdout and stderr. Each command runs with its home, config and cache
//! directories pointed into a temporary directory.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

fn signup_config() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("demos/signup.json")
}

/// Helper: create a Command for the `formkit` binary, isolated in `home`.
fn formkit(home: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("formkit");
    cmd.env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join("config"))
        .env("XDG_CACHE_HOME", home.path().join("cache"));
    cmd
}

fn write(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

// ──────────────────────────────────────────────
// check
// ──────────────────────────────────────────────

#[test]
fn check_lists_rules() {
    let home = TempDir::new().unwrap();
    formkit(&home)
        .arg("check")
        .arg("--config")
        .arg(signup_config())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "password: required, has-uppercase-letter, has-digit, min",
        ))
        .stdout(predicate::str::contains(
            "3 fields, 7 rules, validate on change: true",
        ));
}

#[test]
fn check_json_output() {
    let home = TempDir::new().unwrap();
    let output = formkit(&home)
        .args(["check", "--output", "json", "--config"])
        .arg(signup_config())
        .output()
        .unwrap();
    assert!(output.status.success());

    let summary: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(summary["rules"], 7);
    assert_eq!(summary["validate_on_change"], true);
    assert_eq!(
        summary["fields"]["email"],
        serde_json::json!(["required", "email-format"])
    );
}

#[test]
fn check_misspelled_rule_exits_2() {
    let home = TempDir::new().unwrap();
    let config = write(
        &home,
        "typo.json",
        r#"{"rules": {"email": {"requried": {"message": "Email is required"}}}}"#,
    );
    formkit(&home)
        .arg("check")
        .arg("--config")
        .arg(&config)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Unknown rule kind 'requried' on field 'email'"));
}

#[test]
fn check_misspelled_rule_lenient_succeeds() {
    let home = TempDir::new().unwrap();
    let config = write(
        &home,
        "typo.json",
        r#"{"rules": {"email": {"requried": {"message": "Email is required"}}}}"#,
    );
    formkit(&home)
        .args(["check", "--lenient", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("1 fields, 0 rules"));
}

#[test]
fn check_without_config_file_exits_2() {
    let home = TempDir::new().unwrap();
    formkit(&home)
        .arg("check")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Failed to read configuration"));
}

// ──────────────────────────────────────────────
// validate
// ──────────────────────────────────────────────

#[test]
fn validate_valid_record_exits_0() {
    let home = TempDir::new().unwrap();
    let record = write(
        &home,
        "record.json",
        r#"{"email": "a@b.com", "password": "Abcdefg1", "terms": true}"#,
    );
    formkit(&home)
        .arg("validate")
        .arg("--config")
        .arg(signup_config())
        .arg("--record")
        .arg(&record)
        .assert()
        .success()
        .stdout("valid\n");
}

#[test]
fn validate_invalid_record_exits_1() {
    let home = TempDir::new().unwrap();
    let record = write(
        &home,
        "record.json",
        r#"{"email": "nope", "password": "Abcdefgh", "terms": false}"#,
    );
    formkit(&home)
        .arg("validate")
        .arg("--config")
        .arg(signup_config())
        .arg("--record")
        .arg(&record)
        .assert()
        .code(1)
        .stdout("email: Invalid email\npassword: Needs a digit\nterms: Accept the terms\n");
}

#[test]
fn validate_json_output() {
    let home = TempDir::new().unwrap();
    let record = write(&home, "record.json", r#"{"email": "", "password": null}"#);
    formkit(&home)
        .args(["validate", "--output", "json", "--config"])
        .arg(signup_config())
        .arg("--record")
        .arg(&record)
        .assert()
        .code(1)
        .stdout("{\"email\":\"Email is required\",\"password\":\"Password is required\"}\n");
}

#[test]
fn validate_missing_record_exits_2() {
    let home = TempDir::new().unwrap();
    formkit(&home)
        .arg("validate")
        .arg("--config")
        .arg(signup_config())
        .arg("--record")
        .arg(home.path().join("absent.json"))
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Failed to read record"));
}

// ──────────────────────────────────────────────
// session
// ──────────────────────────────────────────────

#[test]
fn session_reports_change_then_reset() {
    let home = TempDir::new().unwrap();
    formkit(&home)
        .arg("session")
        .arg("--config")
        .arg(signup_config())
        .write_stdin("{\"name\": \"password\", \"value\": \"abc\"}\n{\"action\": \"reset\"}\n")
        .assert()
        .success()
        .stdout(concat!(
            r#"{"values":{"email":"","password":"abc","terms":false},"errors":{"password":"Needs an uppercase letter"},"valid":false}"#,
            "\n",
            r#"{"values":{"email":"","password":"","terms":false},"errors":{},"valid":true}"#,
            "\n",
        ));
}
