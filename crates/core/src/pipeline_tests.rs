// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::date::FixedDate;
use crate::issue::{Direction, IssueRef, RawIssue, EPIC_TYPE};
use crate::progress::ChildProgress;
use crate::source::{FetchError, MemorySource, QueryKind};
use crate::status::StatusCategory;
use chrono::NaiveDate;
use serde_json::json;
use yare::parameterized;

const BASE: &str = "https://jira.example.com";

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn today() -> FixedDate {
    FixedDate(ymd(2026, 1, 15))
}

fn request() -> RoadmapRequest {
    RoadmapRequest::new("project = INIT", BASE, DateFields::new("cf_start", "cf_end"))
}

fn epic(key: &str, start: &str, end: &str) -> RawIssue {
    RawIssue::new(key, EPIC_TYPE)
        .with_summary(format!("Epic {}", key))
        .with_status("To Do", "new", "To Do")
        .with_field("cf_start", json!(start))
        .with_field("cf_end", json!(end))
}

fn story(key: &str, parent: &str, status: &str, category: &str) -> RawIssue {
    RawIssue::new(key, "Story").with_parent(parent).with_status(status, category, status)
}

fn initiative(key: &str) -> RawIssue {
    RawIssue::new(key, "Initiative").with_summary(format!("Initiative {}", key))
}

fn two_epic_source() -> MemorySource {
    let init = initiative("INIT-1")
        .with_link("Relates", Direction::Outward, IssueRef::new("EPIC-1", EPIC_TYPE))
        .with_link("Relates", Direction::Outward, IssueRef::new("EPIC-2", EPIC_TYPE));
    MemorySource::new(
        vec![init],
        vec![epic("EPIC-1", "2026-01-01", "2026-03-31"), epic("EPIC-2", "2026-02-15", "2026-06-30")],
    )
}

#[test]
fn initiative_spans_its_epics() {
    let result = build_roadmap(&two_epic_source(), &request(), &today()).unwrap();

    assert_eq!(result.initiatives.len(), 1);
    let init = &result.initiatives[0];
    let keys: Vec<&str> = init.epics.iter().map(|e| e.key.as_str()).collect();
    assert_eq!(keys, ["EPIC-1", "EPIC-2"]);
    assert_eq!(init.start_date, Some(ymd(2026, 1, 1)));
    assert_eq!(init.end_date, Some(ymd(2026, 6, 30)));
    assert_eq!(init.url, "https://jira.example.com/browse/INIT-1");
}

#[test]
fn timeline_is_padded_and_reaches_nine_months_out() {
    let result = build_roadmap(&two_epic_source(), &request(), &today()).unwrap();

    // Latest date is 2026-06-30 but nine months from January 2026 is October.
    assert_eq!(result.timeline_start, ymd(2025, 12, 1));
    assert_eq!(result.timeline_end, ymd(2026, 11, 1));
}

#[test]
fn empty_date_pool_uses_current_year() {
    let source = MemorySource::new(vec![initiative("INIT-1")], vec![]);
    let result = build_roadmap(&source, &request(), &FixedDate(ymd(2026, 1, 15))).unwrap();

    assert_eq!(result.timeline_start, ymd(2025, 12, 1));
    assert_eq!(result.timeline_end, ymd(2027, 1, 1));
    assert!(result.initiatives[0].epics.is_empty());
    assert_eq!(result.initiatives[0].start_date, None);
}

#[test]
fn link_type_allow_list_filters_epics() {
    let init = initiative("INIT-1")
        .with_link("Relates", Direction::Outward, IssueRef::new("EPIC-1", EPIC_TYPE))
        .with_link("Blocks", Direction::Outward, IssueRef::new("EPIC-2", EPIC_TYPE));
    let source = MemorySource::new(
        vec![init],
        vec![epic("EPIC-1", "2026-01-01", "2026-03-31"), epic("EPIC-2", "2026-02-15", "2026-06-30")],
    );
    let request = request().with_link_types(vec!["Relates".to_string()]);

    let result = build_roadmap(&source, &request, &today()).unwrap();
    let keys: Vec<&str> = result.initiatives[0].epics.iter().map(|e| e.key.as_str()).collect();
    assert_eq!(keys, ["EPIC-1"]);
    assert_eq!(result.initiatives[0].end_date, Some(ymd(2026, 3, 31)));
}

#[test]
fn failed_epic_fetch_degrades_to_no_epics() {
    let source = two_epic_source().failing(QueryKind::Keys, FetchError::Connection("reset".into()));

    let result = build_roadmap(&source, &request(), &today()).unwrap();
    assert_eq!(result.epic_count(), 0);
    assert_eq!(result.initiatives[0].start_date, None);
    assert_eq!(result.initiatives[0].end_date, None);
}

#[test]
fn missing_epic_record_is_dropped() {
    let init = initiative("INIT-1")
        .with_link("Relates", Direction::Outward, IssueRef::new("EPIC-1", EPIC_TYPE))
        .with_link("Relates", Direction::Outward, IssueRef::new("EPIC-2", EPIC_TYPE));
    let source = MemorySource::new(vec![init], vec![epic("EPIC-2", "2026-02-15", "2026-06-30")]);

    let result = build_roadmap(&source, &request(), &today()).unwrap();
    let init = &result.initiatives[0];
    let keys: Vec<&str> = init.epics.iter().map(|e| e.key.as_str()).collect();
    assert_eq!(keys, ["EPIC-2"]);
    assert_eq!(init.start_date, Some(ymd(2026, 2, 15)));
    assert_eq!(init.end_date, Some(ymd(2026, 6, 30)));
}

#[test]
fn failed_parent_query_keeps_link_epics() {
    let source = two_epic_source().failing(QueryKind::EpicsUnder, FetchError::RateLimited);

    let result = build_roadmap(&source, &request(), &today()).unwrap();
    assert_eq!(result.epic_count(), 2);
}

#[test]
fn failed_child_fetch_zeroes_progress() {
    let source = MemorySource::new(
        vec![initiative("INIT-1").with_link("Relates", Direction::Outward, IssueRef::new("EPIC-1", EPIC_TYPE))],
        vec![epic("EPIC-1", "2026-01-01", "2026-03-31"), story("S-1", "EPIC-1", "Done", "done")],
    )
    .failing(QueryKind::ChildrenOf, FetchError::Auth);

    let result = build_roadmap(&source, &request(), &today()).unwrap();
    assert_eq!(result.initiatives[0].epics[0].progress, ChildProgress::default());
}

#[parameterized(
    auth = { FetchError::Auth },
    rate_limited = { FetchError::RateLimited },
    connection = { FetchError::Connection("refused".into()) },
    invalid_query = { FetchError::InvalidQuery("bad jql".into()) },
)]
fn primary_failure_is_fatal(err: FetchError) {
    let source = two_epic_source().failing(QueryKind::Jql, err.clone());

    let result = build_roadmap(&source, &request(), &today());
    let got = result.unwrap_err();
    assert_eq!(got.to_string(), Error::from(err).to_string());
    assert_eq!(source.queries().len(), 1);
}

#[test]
fn empty_primary_result_is_no_issues_found() {
    let source = MemorySource::default();

    let result = build_roadmap(&source, &request(), &today());
    assert!(matches!(result, Err(Error::NoIssuesFound)));
}

#[test]
fn epic_progress_counts_children() {
    let source = MemorySource::new(
        vec![initiative("INIT-1").with_link("Relates", Direction::Outward, IssueRef::new("EPIC-1", EPIC_TYPE))],
        vec![
            epic("EPIC-1", "2026-01-01", "2026-03-31"),
            story("S-1", "EPIC-1", "Done", "done"),
            story("S-2", "EPIC-1", "Done", "done"),
            story("S-3", "EPIC-1", "In Progress", "indeterminate"),
            story("S-4", "EPIC-1", "Cancelled", "done"),
            story("S-5", "EPIC-1", "To Do", "new"),
        ],
    );

    let result = build_roadmap(&source, &request(), &today()).unwrap();
    let progress = result.initiatives[0].epics[0].progress;
    assert_eq!(progress, ChildProgress { done: 2, cancelled: 1, in_progress: 1, total: 5 });
}

#[test]
fn parent_channel_discovers_unlinked_epics() {
    let source = MemorySource::new(
        vec![initiative("INIT-1")],
        vec![epic("EPIC-9", "2026-03-01", "2026-04-30").with_parent("INIT-1")],
    );

    let result = build_roadmap(&source, &request(), &today()).unwrap();
    let epics = &result.initiatives[0].epics;
    assert_eq!(epics.len(), 1);
    assert_eq!(epics[0].key, "EPIC-9");
    assert_eq!(epics[0].status_category, StatusCategory::New);
}

#[test]
fn dependencies_between_initiatives_and_epics() {
    let init1 = initiative("INIT-1")
        .with_link("Relates", Direction::Outward, IssueRef::new("EPIC-1", EPIC_TYPE))
        .with_link("Blocks", Direction::Outward, IssueRef::new("INIT-2", "Initiative"));
    let init2 = initiative("INIT-2")
        .with_link("Relates", Direction::Outward, IssueRef::new("EPIC-2", EPIC_TYPE))
        .with_link("Blocks", Direction::Inward, IssueRef::new("INIT-1", "Initiative"));
    let source = MemorySource::new(
        vec![init1, init2],
        vec![
            epic("EPIC-1", "2026-01-01", "2026-03-31")
                .with_link("Blocks", Direction::Outward, IssueRef::new("EPIC-2", EPIC_TYPE)),
            epic("EPIC-2", "2026-04-01", "2026-06-30"),
        ],
    );

    let result = build_roadmap(&source, &request(), &today()).unwrap();
    assert_eq!(result.initiative_deps.len(), 1);
    assert!(result.initiative_deps.contains("INIT-1", "INIT-2"));
    assert_eq!(result.epic_deps.len(), 1);
    assert!(result.epic_deps.contains("EPIC-1", "EPIC-2"));
}

#[test]
fn project_names_cover_every_prefix() {
    let source = two_epic_source().with_project_name("INIT", "Initiatives");

    let result = build_roadmap(&source, &request(), &today()).unwrap();
    assert_eq!(result.project_names.len(), 2);
    assert_eq!(result.project_names["INIT"], "Initiatives");
    assert_eq!(result.project_names["EPIC"], "EPIC");
}

#[test]
fn base_url_trailing_slash_is_trimmed() {
    let request = RoadmapRequest::new("project = INIT", "https://jira.example.com/", DateFields::new("cf_start", "cf_end"));

    let result = build_roadmap(&two_epic_source(), &request, &today()).unwrap();
    assert_eq!(result.base_url, BASE);
    assert_eq!(result.initiatives[0].epics[0].url, "https://jira.example.com/browse/EPIC-1");
}

#[test]
fn issues_one_query_per_stage() {
    let source = two_epic_source();

    build_roadmap(&source, &request(), &today()).unwrap();
    let kinds: Vec<QueryKind> = source.queries().iter().map(|q| q.kind()).collect();
    assert_eq!(kinds, [QueryKind::Jql, QueryKind::EpicsUnder, QueryKind::Keys, QueryKind::ChildrenOf]);
}

#[test]
fn serialized_result_has_transport_keys() {
    let result = build_roadmap(&two_epic_source(), &request(), &today()).unwrap();
    let value = result.to_json().unwrap();

    assert_eq!(value["jql_query"], "project = INIT");
    assert_eq!(value["jira_url"], BASE);
    assert_eq!(value["timeline_start"], "2025-12-01");
    assert_eq!(value["initiatives"][0]["epics"][1]["end_date"], "2026-06-30");
    assert_eq!(value["initiatives"][0]["epics"][0]["total_stories"], 0);
}
