// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Bulk loading of epic records and epic-to-epic dependencies.

use std::collections::{BTreeSet, HashMap};

use crate::dependency::EdgeSet;
use crate::issue::RawIssue;
use crate::source::{IssueSource, Query};

/// Full epic records keyed by epic key, plus their dependency edges.
#[derive(Debug, Clone, Default)]
pub struct EnrichedEpics {
    pub records: HashMap<String, RawIssue>,
    pub epic_deps: EdgeSet,
}

/// Fetches every epic in `epic_keys` with one query.
///
/// A failed fetch degrades to no records at all; callers omit epics whose
/// record is missing.
pub fn enrich_epics<S: IssueSource>(
    source: &S,
    epic_keys: &BTreeSet<String>,
    date_fields: &[String],
) -> EnrichedEpics {
    if epic_keys.is_empty() {
        return EnrichedEpics::default();
    }

    let query = Query::Keys(epic_keys.iter().cloned().collect());
    let fetched = match source.search_issues(&query, date_fields) {
        Ok(epics) => epics,
        Err(e) => {
            tracing::warn!("bulk epic fetch failed, continuing without epic details: {}", e);
            Vec::new()
        }
    };
    tracing::debug!("fetched {} of {} epics", fetched.len(), epic_keys.len());

    let epic_deps = epic_dependencies(&fetched, epic_keys);
    let records = fetched.into_iter().map(|epic| (epic.key.clone(), epic)).collect();
    EnrichedEpics { records, epic_deps }
}

/// Extracts epic-to-epic edges from the epics' own outward links.
///
/// Only targets inside `epic_keys` count.
pub fn epic_dependencies(epics: &[RawIssue], epic_keys: &BTreeSet<String>) -> EdgeSet {
    let mut edges = EdgeSet::new();
    for epic in epics {
        for target in epic.outward_targets() {
            if epic_keys.contains(&target.key) {
                edges.insert(&epic.key, &target.key);
            }
        }
    }
    edges
}

#[cfg(test)]
#[path = "enrich_tests.rs"]
mod tests;
