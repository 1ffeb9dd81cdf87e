// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Config command tests.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::common::*;

#[test]
fn show_without_config_reports_missing() {
    let home = empty_home();
    roadmap(&home)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No configuration found"));
}

#[test]
fn init_then_show_masks_token() {
    let home = empty_home();
    roadmap(&home)
        .args([
            "config",
            "init",
            "--url",
            "https://acme.atlassian.net",
            "--email",
            "me@acme.com",
            "--token",
            "abcdefgh1234",
            "--start-field",
            "customfield_10015",
            "--end-field",
            "customfield_10016",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote configuration to"));

    assert!(home.path().join(".jira-roadmap/config.toml").exists());

    roadmap(&home)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("https://acme.atlassian.net"))
        .stdout(predicate::str::contains("********1234"))
        .stdout(predicate::str::contains("abcdefgh1234").not());
}

#[test]
fn init_rejects_invalid_values() {
    let home = empty_home();
    roadmap(&home)
        .args(["config", "init", "--url", "acme.atlassian.net", "--email", "me", "--token", "t"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error: invalid configuration"))
        .stderr(predicate::str::contains("JIRA URL must start with http:// or https://"))
        .stderr(predicate::str::contains("JIRA email must be a valid email address"));

    assert!(!home.path().join(".jira-roadmap/config.toml").exists());
}

#[test]
fn show_invalid_config_fails() {
    let home = empty_home();
    write_config(&home, "[jira]\nurl = \"https://acme.atlassian.net\"\n");
    roadmap(&home)
        .args(["config", "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("JIRA email is required; JIRA API token is required"));
}
