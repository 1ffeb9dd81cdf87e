// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use clap::{Parser, Subcommand, ValueEnum};

/// Parse a string that must not be empty or whitespace-only.
fn non_empty_string(s: &str) -> Result<String, String> {
    if s.trim().is_empty() {
        Err("cannot be empty".to_string())
    } else {
        Ok(s.to_string())
    }
}

/// Output format for commands that print a roadmap.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser)]
#[command(name = "roadmap")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Build timeline roadmaps from Jira initiatives, epics and their work items")]
#[command(
    long_about = "Build timeline roadmaps from Jira initiatives, epics and their work items.\n\n\
    Select initiatives with JQL; epics are discovered through issue links, subtasks and\n\
    parent fields, then rolled up into a dated roadmap with progress and dependencies."
)]
pub struct Cli {
    /// Enable debug logging on stderr (otherwise RUST_LOG applies)
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Build a roadmap from the initiatives matching a JQL query
    #[command(after_help = "\
Examples:
  roadmap fetch 'project = INIT'                       Text outline
  roadmap fetch 'project = INIT' -o json               JSON for visualization
  roadmap fetch 'type = Initiative' --link-types Relates,Contains")]
    Fetch {
        /// JQL selecting the initiatives
        #[arg(value_parser = non_empty_string)]
        jql: String,

        /// Link types allowed to contribute epics (comma-separated or repeated)
        #[arg(long, value_delimiter = ',', value_name = "TYPES")]
        link_types: Vec<String>,

        /// Output format
        #[arg(long, short, value_enum, default_value_t = OutputFormat::Text)]
        output: OutputFormat,
    },

    /// List the issue link types defined on the server
    LinkTypes,

    /// Show or create the configuration file
    #[command(subcommand)]
    Config(ConfigCommand),

    /// Print a sample roadmap built from in-memory data
    Demo {
        /// Output format
        #[arg(long, short, value_enum, default_value_t = OutputFormat::Text)]
        output: OutputFormat,
    },
}

/// Configuration management commands.
#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Print the current configuration with the API token masked
    Show,

    /// Write a new configuration file
    #[command(after_help = "\
Examples:
  roadmap config init --url https://acme.atlassian.net --email me@acme.com --token XXXX \\
      --start-field customfield_10015 --end-field customfield_10016")]
    Init {
        /// Jira base URL (https://...)
        #[arg(long)]
        url: String,

        /// Account email
        #[arg(long)]
        email: String,

        /// API token
        #[arg(long)]
        token: String,

        /// Custom field id holding epic start dates
        #[arg(long, value_name = "FIELD")]
        start_field: Option<String>,

        /// Custom field id holding epic end dates
        #[arg(long, value_name = "FIELD")]
        end_field: Option<String>,
    },
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
