// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Roll-up of child work item statuses per epic.

use std::collections::{BTreeSet, HashMap};

use serde::Serialize;

use crate::issue::RawIssue;
use crate::source::{IssueSource, Query};
use crate::status::StatusCategory;

/// Child item counts for one epic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ChildProgress {
    #[serde(rename = "done_stories")]
    pub done: u32,
    #[serde(rename = "cancelled_stories")]
    pub cancelled: u32,
    #[serde(rename = "inprogress_stories")]
    pub in_progress: u32,
    #[serde(rename = "total_stories")]
    pub total: u32,
}

impl ChildProgress {
    /// Counts one child in the given category. `New` only counts toward total.
    pub fn record(&mut self, category: StatusCategory) {
        self.total += 1;
        match category {
            StatusCategory::Done => self.done += 1,
            StatusCategory::Cancelled => self.cancelled += 1,
            StatusCategory::Indeterminate => self.in_progress += 1,
            StatusCategory::New => {}
        }
    }
}

/// Tallies children into their parent epic's counters.
///
/// Children whose parent is not in `epic_keys` are ignored.
pub fn tally_children(children: &[RawIssue], epic_keys: &BTreeSet<String>) -> HashMap<String, ChildProgress> {
    let mut counts: HashMap<String, ChildProgress> = HashMap::new();
    for child in children {
        let Some(parent) = child.parent_key().filter(|p| epic_keys.contains(*p)) else {
            continue;
        };
        counts
            .entry(parent.to_string())
            .or_default()
            .record(StatusCategory::from_status(&child.fields.status));
    }
    counts
}

/// Loads every child of the given epics with one query and tallies them.
///
/// A failed fetch degrades to no counts (every epic reads as all zero).
pub fn child_progress<S: IssueSource>(
    source: &S,
    epic_keys: &BTreeSet<String>,
) -> HashMap<String, ChildProgress> {
    if epic_keys.is_empty() {
        return HashMap::new();
    }

    let query = Query::ChildrenOf(epic_keys.iter().cloned().collect());
    match source.search_issues(&query, &[]) {
        Ok(children) => {
            tracing::debug!("fetched {} child items", children.len());
            tally_children(&children, epic_keys)
        }
        Err(e) => {
            tracing::warn!("child item fetch failed, progress counts will be zero: {}", e);
            HashMap::new()
        }
    }
}

#[cfg(test)]
#[path = "progress_tests.rs"]
mod tests;
