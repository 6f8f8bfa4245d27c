//! Tests for argument validation and CLI flags.

use crate::support::*;
use predicates::prelude::*;

#[test]
fn test_help_lists_pull() {
    let t = Test::new();

    let output = t.cmd().arg("--help").output().unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "pull");
}

#[test]
fn test_pull_help_lists_flags() {
    let t = Test::new();

    let output = t.cmd().args(["pull", "--help"]).output().unwrap();
    assert_success(&output);
    for flag in ["--awsAccessId", "--awsAccessKey", "--secret", "--region", "--output"] {
        assert_stdout_contains(&output, flag);
    }
}

#[test]
fn test_version_flag() {
    let t = Test::new();

    t.cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("envpull "));
}

#[test]
fn test_unknown_command_fails() {
    let t = Test::new();

    t.cmd()
        .arg("push")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

#[test]
fn test_pull_without_flags_fails() {
    let t = Test::new();

    let output = t.cmd().arg("pull").output().unwrap();
    assert_missing_value(&output, "--awsAccessId");
    assert_stderr_contains(&output, "envpull pull --help");
    assert!(!t.path(".env").exists());
}

#[test]
fn test_pull_without_access_key_fails() {
    let t = Test::new();

    let output = t
        .cmd()
        .args(["pull", "--awsAccessId", ACCESS_ID, "--secret", "prod/db"])
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "--awsAccessKey");
    assert_stderr_contains(&output, "AWS_SECRET_ACCESS_KEY");
    assert!(!t.path(".env").exists());
}

#[test]
fn test_pull_without_secret_fails() {
    let t = Test::new();

    let output = t.pull(&[]);
    assert_missing_value(&output, "--secret");
    assert!(!t.path(".env").exists());
}

#[test]
fn test_blank_secret_counts_as_missing() {
    let t = Test::new();

    let output = t.pull(&["--secret", "  "]);
    assert_missing_value(&output, "--secret");
}

#[test]
fn test_missing_value_does_not_touch_existing_output() {
    let t = Test::new();
    std::fs::write(t.path("out.env"), "KEEP=me\n").unwrap();

    let output = t.pull(&["--output", "out.env"]);
    assert_failure(&output);
    assert_eq!(t.read("out.env"), "KEEP=me\n");
}

#[test]
fn test_errors_do_not_echo_access_key() {
    let t = Test::new();

    let output = t.pull(&["--verbose"]);
    assert_failure(&output);
    assert_output_excludes(&output, ACCESS_KEY);
}

#[test]
fn test_help_hides_access_key_from_env() {
    let t = Test::new();

    let output = t
        .cmd()
        .env("AWS_SECRET_ACCESS_KEY", ACCESS_KEY)
        .args(["pull", "--help"])
        .output()
        .unwrap();
    assert_success(&output);
    assert_output_excludes(&output, ACCESS_KEY);
}

#[test]
fn test_invalid_log_format_rejected() {
    let t = Test::new();

    let output = t.cmd().args(["--log-format", "xml", "pull"]).output().unwrap();
    assert!(!output.status.success());
}
