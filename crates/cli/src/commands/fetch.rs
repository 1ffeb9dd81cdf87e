// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::{self, Write};

use rm_core::{build_roadmap, DateSource, IssueSource, RoadmapRequest, SystemDate};

use crate::cli::OutputFormat;
use crate::config::Config;
use crate::error::Result;
use crate::jira::JiraClient;

use super::print_roadmap;

/// Build and print the roadmap for `jql` from the configured Jira server.
pub fn run(jql: String, link_types: Vec<String>, output: OutputFormat) -> Result<()> {
    let config = Config::load()?;
    let request = build_request(&config, jql, link_types)?;
    let client = JiraClient::new(&config.jira);
    run_impl(&client, &request, &SystemDate, output, &mut io::stdout().lock())
}

/// Assemble a request from config and command-line overrides.
pub(crate) fn build_request(config: &Config, jql: String, link_types: Vec<String>) -> Result<RoadmapRequest> {
    let date_fields = config.date_fields()?;
    let request = RoadmapRequest::new(jql, config.jira.url.as_str(), date_fields);
    let link_types = effective_link_types(&link_types, &config.roadmap.link_types);
    if link_types.is_empty() {
        Ok(request)
    } else {
        Ok(request.with_link_types(link_types))
    }
}

/// Command-line link types win over the configured default. Blank entries
/// are dropped from both.
pub(crate) fn effective_link_types(requested: &[String], configured: &[String]) -> Vec<String> {
    let clean = |types: &[String]| -> Vec<String> {
        types.iter().map(|t| t.trim()).filter(|t| !t.is_empty()).map(String::from).collect()
    };
    let requested = clean(requested);
    if requested.is_empty() {
        clean(configured)
    } else {
        requested
    }
}

pub(crate) fn run_impl<S: IssueSource>(
    source: &S,
    request: &RoadmapRequest,
    dates: &dyn DateSource,
    output: OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    match build_roadmap(source, request, dates) {
        Ok(roadmap) => {
            tracing::info!(
                "built roadmap: {} initiatives, {} epics",
                roadmap.initiatives.len(),
                roadmap.epic_count()
            );
            print_roadmap(out, &roadmap, output)
        }
        Err(rm_core::Error::NoIssuesFound) => {
            eprintln!("warning: {}", rm_core::Error::NoIssuesFound);
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
#[path = "fetch_tests.rs"]
mod tests;
