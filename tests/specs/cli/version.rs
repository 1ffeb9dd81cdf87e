// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Version flag tests.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::common::*;
use yare::parameterized;

#[parameterized(
    long_version = { "--version" },
    short_version = { "-V" },
)]
fn version_flag_outputs_version(flag: &str) {
    let home = empty_home();
    roadmap(&home)
        .arg(flag)
        .assert()
        .success()
        .stdout(predicate::str::contains("roadmap"))
        .stdout(predicate::str::is_match(r"[0-9]+\.[0-9]+\.[0-9]+").unwrap());
}

#[test]
fn short_v_is_verbose_not_version() {
    let home = empty_home();
    roadmap(&home)
        .args(["-v", "demo", "-o", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"initiatives\""));
}
