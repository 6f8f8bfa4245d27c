//! Tests for `.envpull.toml` handling that fail before any fetch.

use crate::support::*;

#[test]
fn test_explicit_config_must_exist() {
    let t = Test::new();

    let output = t.pull(&["--config", "missing.toml"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "config file not found");
    assert_store_untouched(&t);
}

#[test]
fn test_config_with_credentials_rejected() {
    let t = Test::new();
    std::fs::write(
        t.path(".envpull.toml"),
        "[pull]\nsecret = \"prod/db\"\naws_access_key = \"leaked\"\n",
    )
    .unwrap();

    let output = t.pull(&[]);
    assert_failure(&output);
    assert_stderr_contains(&output, "invalid config file");
    assert_stderr_contains(&output, "only accepts secret, region and output");
    assert_store_untouched(&t);
}

#[test]
fn test_config_cannot_replace_credentials() {
    let t = Test::new();
    std::fs::write(t.path(".envpull.toml"), "[pull]\nsecret = \"prod/db\"\n").unwrap();

    let output = t.cmd().arg("pull").output().unwrap();
    assert_missing_value(&output, "--awsAccessId");
    assert_store_untouched(&t);
}
