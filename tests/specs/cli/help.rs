// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Help output tests.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::common::*;
use yare::parameterized;

#[test]
fn help_lists_commands() {
    let home = empty_home();
    roadmap(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"))
        .stdout(predicate::str::contains("fetch"))
        .stdout(predicate::str::contains("link-types"))
        .stdout(predicate::str::contains("config"))
        .stdout(predicate::str::contains("demo"));
}

#[test]
fn no_arguments_fails_with_usage() {
    let home = empty_home();
    roadmap(&home)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[parameterized(
    fetch = { "fetch" },
    link_types = { "link-types" },
    config = { "config" },
    demo = { "demo" },
)]
fn command_supports_help_flag(cmd: &str) {
    let home = empty_home();
    roadmap(&home)
        .args([cmd, "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn fetch_help_shows_examples() {
    let home = empty_home();
    roadmap(&home)
        .args(["fetch", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--link-types"))
        .stdout(predicate::str::contains("Examples:"));
}

#[test]
fn unknown_command_fails() {
    let home = empty_home();
    roadmap(&home)
        .arg("frobnicate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}
