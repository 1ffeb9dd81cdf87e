// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test files,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]
#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use assert_cmd::Command;

pub use predicates::prelude::*;
pub use tempfile::TempDir;

/// Nothing listens here, so every request fails fast at the transport layer.
pub const UNREACHABLE_URL: &str = "http://127.0.0.1:1";

/// The binary with HOME isolated to `home` and logging env cleared.
pub fn roadmap(home: &TempDir) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("roadmap").unwrap();
    cmd.env("HOME", home.path()).env_remove("RUST_LOG");
    cmd
}

/// Helper to create an empty home directory (no configuration)
pub fn empty_home() -> TempDir {
    TempDir::new().unwrap()
}

/// Write `content` as the config file under `home`.
pub fn write_config(home: &TempDir, content: &str) {
    let dir = home.path().join(".jira-roadmap");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("config.toml"), content).unwrap();
}

/// Helper to create a home directory with a complete config for `url`
pub fn home_with_config(url: &str) -> TempDir {
    let home = empty_home();
    write_config(
        &home,
        &format!(
            r#"[jira]
url = "{url}"
email = "me@example.com"
api_token = "abcdefgh1234"

[roadmap]
start_date_field = "customfield_10015"
end_date_field = "customfield_10016"
"#
        ),
    );
    home
}
