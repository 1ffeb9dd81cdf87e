// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::{self, Write};
use std::path::Path;

use crate::cli::ConfigCommand;
use crate::config::{config_path, Config};
use crate::error::Result;

/// Execute a config subcommand.
pub fn run(cmd: ConfigCommand) -> Result<()> {
    let path = config_path();
    let mut out = io::stdout().lock();
    match cmd {
        ConfigCommand::Show => show(&path, &mut out),
        ConfigCommand::Init { url, email, token, start_field, end_field } => {
            let config = Config::new(url, email, token).with_date_fields(start_field, end_field);
            init(&path, &config, &mut out)
        }
    }
}

/// Print the configuration at `path` with the token masked.
pub(crate) fn show(path: &Path, out: &mut impl Write) -> Result<()> {
    if !path.exists() {
        writeln!(out, "No configuration found at {}", path.display())?;
        writeln!(out, "Run 'roadmap config init' to create one.")?;
        return Ok(());
    }
    let config = Config::load_from(path)?;
    writeln!(out, "# {}", path.display())?;
    write!(out, "{}", toml::to_string_pretty(&config.masked())?)?;
    Ok(())
}

/// Validate `config` and write it to `path`.
pub(crate) fn init(path: &Path, config: &Config, out: &mut impl Write) -> Result<()> {
    config.check()?;
    config.save_to(path)?;
    writeln!(out, "Wrote configuration to {}", path.display())?;
    if let Err(e) = config.date_fields() {
        writeln!(out, "note: {}", e)?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
