// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Fetch and link-types command tests.
//!
//! These never reach a real server: they cover configuration failures and
//! the connection error path against an address nothing listens on.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::common::*;

#[test]
fn fetch_without_config_points_at_init() {
    let home = empty_home();
    roadmap(&home)
        .args(["fetch", "project = INIT"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error: configuration not found"))
        .stderr(predicate::str::contains("roadmap config init"));
}

#[test]
fn fetch_requires_date_fields() {
    let home = empty_home();
    write_config(
        &home,
        "[jira]\nurl = \"https://acme.atlassian.net\"\nemail = \"me@acme.com\"\napi_token = \"t\"\n",
    );
    roadmap(&home)
        .args(["fetch", "project = INIT"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("roadmap settings incomplete"));
}

#[test]
fn fetch_unreachable_server_is_connection_error() {
    let home = home_with_config(UNREACHABLE_URL);
    roadmap(&home)
        .args(["fetch", "project = INIT", "-o", "json"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("error: cannot connect to tracker"));
}

#[test]
fn fetch_rejects_blank_query() {
    let home = home_with_config(UNREACHABLE_URL);
    roadmap(&home).args(["fetch", "  "]).assert().failure();
}

#[test]
fn link_types_unreachable_server_fails() {
    let home = home_with_config(UNREACHABLE_URL);
    roadmap(&home)
        .arg("link-types")
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot connect to tracker"));
}
