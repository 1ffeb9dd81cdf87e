// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Demo command tests.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::common::*;

#[test]
fn demo_needs_no_config() {
    let home = empty_home();
    roadmap(&home)
        .arg("demo")
        .assert()
        .success()
        .stdout(predicate::str::contains("PLAT-1: Self-service onboarding"))
        .stdout(predicate::str::contains("Initiative dependencies:"));
}

#[test]
fn demo_json_has_transport_shape() {
    let home = empty_home();
    let output = roadmap(&home).args(["demo", "-o", "json"]).output().unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    for key in [
        "initiatives",
        "jql_query",
        "timeline_start",
        "timeline_end",
        "jira_url",
        "initiative_deps",
        "epic_deps",
        "project_names",
    ] {
        assert!(value.get(key).is_some(), "missing key {}", key);
    }
    assert_eq!(value["initiatives"].as_array().unwrap().len(), 3);

    let start = value["timeline_start"].as_str().unwrap();
    let end = value["timeline_end"].as_str().unwrap();
    assert!(start.ends_with("-01"));
    assert!(end.ends_with("-01"));
    assert!(start < end);
}

#[test]
fn verbose_logs_go_to_stderr() {
    let home = empty_home();
    roadmap(&home)
        .args(["demo", "-o", "json", "--verbose"])
        .assert()
        .success()
        .stderr(predicate::str::contains("DEBUG"))
        .stdout(predicate::str::starts_with("{"));
}
