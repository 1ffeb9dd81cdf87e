// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! roadmap - build timeline roadmaps from Jira.
//!
//! This crate provides the `roadmap` CLI on top of [`rm_core`]: it loads the
//! user configuration, talks to Jira Cloud through [`JiraClient`], runs the
//! roadmap pipeline and prints the result as text or JSON.
//!
//! # Main Components
//!
//! - [`Config`] - connection settings and date field mapping from `~/.jira-roadmap/config.toml`
//! - [`JiraClient`] - blocking REST client implementing [`rm_core::IssueSource`]
//! - [`Error`] - error types for all operations

mod cli;
mod commands;
mod display;
mod logging;

pub mod config;
pub mod error;
pub mod jira;

pub use cli::{Cli, Command, ConfigCommand, OutputFormat};
pub use config::Config;
pub use error::{Error, Result};
pub use jira::JiraClient;
pub use logging::init_logging;

/// Execute a CLI command. This is the main entry point for library users
/// and provides a testable way to run commands without process execution.
pub fn run(command: Command) -> Result<()> {
    match command {
        Command::Fetch { jql, link_types, output } => commands::fetch::run(jql, link_types, output),
        Command::LinkTypes => commands::link_types::run(),
        Command::Config(cmd) => commands::config::run(cmd),
        Command::Demo { output } => commands::demo::run(output),
    }
}
