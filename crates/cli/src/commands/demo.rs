// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Sample roadmap for trying the tool without a Jira server.
//!
//! The sample runs the real pipeline over an in-memory source whose dates
//! are laid out around today, so the timeline always looks current.

use std::io::{self, Write};

use chrono::{NaiveDate, TimeDelta};
use rm_core::{
    build_roadmap, DateFields, DateSource, Direction, FixedDate, IssueRef, MemorySource, RawIssue,
    RoadmapRequest, SystemDate, EPIC_TYPE,
};
use serde_json::{json, Value};

use crate::cli::OutputFormat;
use crate::error::Result;

use super::print_roadmap;

const DEMO_URL: &str = "https://demo.atlassian.net";
const DEMO_JQL: &str = "issuetype = Initiative AND project = PLAT";
const START_FIELD: &str = "customfield_10015";
const END_FIELD: &str = "customfield_10016";
const INITIATIVE: &str = "Initiative";

/// Print the sample roadmap.
pub fn run(output: OutputFormat) -> Result<()> {
    run_impl(SystemDate.today(), output, &mut io::stdout().lock())
}

pub(crate) fn run_impl(today: NaiveDate, output: OutputFormat, out: &mut impl Write) -> Result<()> {
    let source = sample_source(today);
    let request = RoadmapRequest::new(DEMO_JQL, DEMO_URL, DateFields::new(START_FIELD, END_FIELD));
    let roadmap = build_roadmap(&source, &request, &FixedDate(today))?;
    print_roadmap(out, &roadmap, output)
}

fn day(today: NaiveDate, offset: i64) -> Value {
    let date = today.checked_add_signed(TimeDelta::days(offset)).unwrap_or(today);
    json!(date.format("%Y-%m-%d").to_string())
}

fn epic(key: &str, title: &str, (status, category): (&str, &str), dates: (Value, Value)) -> RawIssue {
    RawIssue::new(key, EPIC_TYPE)
        .with_summary(title)
        .with_status(status, category, status)
        .with_field(START_FIELD, dates.0)
        .with_field(END_FIELD, dates.1)
}

fn story(key: &str, parent: &str, (status, category): (&str, &str)) -> RawIssue {
    RawIssue::new(key, "Story").with_parent(parent).with_status(status, category, status)
}

const TODO: (&str, &str) = ("To Do", "new");
const DOING: (&str, &str) = ("In Progress", "indeterminate");
const DONE: (&str, &str) = ("Done", "done");
const CANCELLED: (&str, &str) = ("Cancelled", "done");

/// Three initiatives exercising every epic discovery channel.
pub(crate) fn sample_source(today: NaiveDate) -> MemorySource {
    let d = |offset| day(today, offset);

    let initiatives = vec![
        RawIssue::new("PLAT-1", INITIATIVE)
            .with_summary("Self-service onboarding")
            .with_status("In Progress", "indeterminate", "In Progress")
            .with_link("Relates", Direction::Outward, IssueRef::new("WEB-10", EPIC_TYPE))
            .with_link("Relates", Direction::Outward, IssueRef::new("API-20", EPIC_TYPE))
            .with_link("Blocks", Direction::Outward, IssueRef::new("PLAT-2", INITIATIVE)),
        RawIssue::new("PLAT-2", INITIATIVE)
            .with_summary("Usage-based billing")
            .with_status("To Do", "new", "To Do")
            .with_link("Relates", Direction::Inward, IssueRef::new("WEB-11", EPIC_TYPE))
            .with_link("Blocks", Direction::Inward, IssueRef::new("PLAT-1", INITIATIVE)),
        RawIssue::new("PLAT-3", INITIATIVE)
            .with_summary("Observability overhaul")
            .with_status("In Progress", "indeterminate", "In Progress")
            .with_subtask(IssueRef::new("OPS-30", EPIC_TYPE)),
    ];

    let issues = vec![
        epic("WEB-10", "Signup flow redesign", DONE, (d(-75), d(-20)))
            .with_link("Blocks", Direction::Outward, IssueRef::new("WEB-11", EPIC_TYPE)),
        epic("API-20", "Account provisioning API", DOING, (d(-40), d(30))),
        epic("WEB-11", "Billing settings page", TODO, (d(35), d(120))),
        epic("API-21", "Metering pipeline", TODO, (d(20), d(150))).with_parent("PLAT-2"),
        epic("OPS-30", "Tracing rollout", DOING, (d(-10), json!(null))),
        story("WEB-101", "WEB-10", DONE),
        story("WEB-102", "WEB-10", DONE),
        story("WEB-103", "WEB-10", CANCELLED),
        story("API-201", "API-20", DONE),
        story("API-202", "API-20", DOING),
        story("API-203", "API-20", TODO),
        story("API-211", "API-21", TODO),
        story("OPS-301", "OPS-30", DOING),
    ];

    MemorySource::new(initiatives, issues)
        .with_project_name("PLAT", "Platform")
        .with_project_name("WEB", "Web App")
        .with_project_name("API", "Public API")
}

#[cfg(test)]
#[path = "demo_tests.rs"]
mod tests;
