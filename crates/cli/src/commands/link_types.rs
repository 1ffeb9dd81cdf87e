// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::{self, Write};

use crate::config::Config;
use crate::error::Result;
use crate::jira::JiraClient;

/// Print the link types defined on the configured Jira server.
pub fn run() -> Result<()> {
    let config = Config::load()?;
    let names = JiraClient::new(&config.jira).link_type_names()?;
    write_names(&mut io::stdout().lock(), &names)
}

pub(crate) fn write_names(out: &mut impl Write, names: &[String]) -> Result<()> {
    if names.is_empty() {
        writeln!(out, "No link types found.")?;
        return Ok(());
    }
    for name in names {
        writeln!(out, "{}", name)?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "link_types_tests.rs"]
mod tests;
