// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The assembled roadmap model and its flat serialization.
//!
//! Serializing a [`RoadmapResult`] with serde yields the transport shape
//! consumed by presentation layers: dates as `YYYY-MM-DD` or `null`,
//! dependency edges as `[from, to]` pairs.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use serde::Serialize;

use crate::dependency::EdgeSet;
use crate::date::parse_date_field;
use crate::issue::RawIssue;
use crate::progress::ChildProgress;
use crate::source::IssueSource;
use crate::status::StatusCategory;
use crate::timeline::DateRange;

/// Custom field ids holding the start and end dates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateFields {
    pub start: String,
    pub end: String,
}

impl DateFields {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        DateFields { start: start.into(), end: end.into() }
    }

    /// Both ids, for requesting them from the tracker.
    pub fn to_vec(&self) -> Vec<String> {
        vec![self.start.clone(), self.end.clone()]
    }

    /// Reads both dates off an issue.
    pub fn range_of(&self, issue: &RawIssue) -> DateRange {
        DateRange::new(
            parse_date_field(&issue.fields.extra, &self.start),
            parse_date_field(&issue.fields.extra, &self.end),
        )
    }
}

/// An epic on the roadmap timeline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Epic {
    pub key: String,
    pub title: String,
    pub status: String,
    pub status_category: StatusCategory,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub url: String,
    #[serde(flatten)]
    pub progress: ChildProgress,
}

impl Epic {
    /// Builds an epic from its full tracker record.
    pub fn from_record(
        record: &RawIssue,
        date_fields: &DateFields,
        progress: ChildProgress,
        base_url: &str,
    ) -> Self {
        let range = date_fields.range_of(record);
        Epic {
            key: record.key.clone(),
            title: record.fields.summary.clone(),
            status: record.fields.status.name.clone(),
            status_category: StatusCategory::from_status(&record.fields.status),
            start_date: range.start,
            end_date: range.end,
            url: browse_url(base_url, &record.key),
            progress,
        }
    }

    pub fn range(&self) -> DateRange {
        DateRange::new(self.start_date, self.end_date)
    }
}

/// An initiative on the roadmap, owning its epics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Initiative {
    pub key: String,
    pub title: String,
    pub status: String,
    pub status_category: StatusCategory,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub epics: Vec<Epic>,
    pub url: String,
}

impl Initiative {
    /// Builds an initiative whose dates are derived from `epics`.
    pub fn from_record(record: &RawIssue, epics: Vec<Epic>, base_url: &str) -> Self {
        let range = DateRange::covering(epics.iter().map(Epic::range));
        Initiative {
            key: record.key.clone(),
            title: record.fields.summary.clone(),
            status: record.fields.status.name.clone(),
            status_category: StatusCategory::from_status(&record.fields.status),
            start_date: range.start,
            end_date: range.end,
            epics,
            url: browse_url(base_url, &record.key),
        }
    }

    pub fn range(&self) -> DateRange {
        DateRange::new(self.start_date, self.end_date)
    }
}

/// Complete result of a roadmap build.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoadmapResult {
    pub initiatives: Vec<Initiative>,
    #[serde(rename = "jql_query")]
    pub query: String,
    pub timeline_start: NaiveDate,
    pub timeline_end: NaiveDate,
    #[serde(rename = "jira_url")]
    pub base_url: String,
    pub initiative_deps: EdgeSet,
    pub epic_deps: EdgeSet,
    pub project_names: BTreeMap<String, String>,
}

impl RoadmapResult {
    /// Renders the result as plain nested JSON values.
    pub fn to_json(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }

    /// Total number of epics across all initiatives.
    pub fn epic_count(&self) -> usize {
        self.initiatives.iter().map(|i| i.epics.len()).sum()
    }
}

/// Tracker page for an issue.
pub fn browse_url(base_url: &str, key: &str) -> String {
    format!("{}/browse/{}", base_url.trim_end_matches('/'), key)
}

/// Project part of an issue key: everything before a trailing `-<digits>`.
///
/// Keys without a numeric suffix are returned whole.
pub fn project_prefix(key: &str) -> &str {
    match key.rsplit_once('-') {
        Some((prefix, number))
            if !prefix.is_empty()
                && !number.is_empty()
                && number.bytes().all(|b| b.is_ascii_digit()) =>
        {
            prefix
        }
        _ => key,
    }
}

/// Resolves a display name for every project prefix in the roadmap.
///
/// Prefixes the source cannot name map to themselves.
pub fn resolve_project_names<S: IssueSource>(
    source: &S,
    initiatives: &[Initiative],
) -> BTreeMap<String, String> {
    let prefixes: BTreeSet<String> = initiatives
        .iter()
        .flat_map(|i| std::iter::once(i.key.as_str()).chain(i.epics.iter().map(|e| e.key.as_str())))
        .map(|key| project_prefix(key).to_string())
        .collect();
    let prefixes: Vec<String> = prefixes.into_iter().collect();

    let mut names = source.project_names(&prefixes);
    for prefix in prefixes {
        names.entry(prefix.clone()).or_insert(prefix);
    }
    names
}

#[cfg(test)]
#[path = "roadmap_tests.rs"]
mod tests;
