// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! End-to-end roadmap build.
//!
//! Stages run strictly in order, each consuming the complete output of the
//! one before:
//!
//! 1. primary search for initiatives (fatal on failure or empty result)
//! 2. hierarchy discovery ([`crate::hierarchy`])
//! 3. epic enrichment ([`crate::enrich`])
//! 4. child progress ([`crate::progress`])
//! 5. epic and initiative construction, timeline bounds, project names

use crate::date::DateSource;
use crate::enrich::enrich_epics;
use crate::error::{Error, Result};
use crate::hierarchy::resolve_hierarchy;
use crate::progress::child_progress;
use crate::roadmap::{resolve_project_names, DateFields, Epic, Initiative, RoadmapResult};
use crate::source::{IssueSource, Query};
use crate::timeline::DatePool;

/// Everything the caller decides about a roadmap build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoadmapRequest {
    /// JQL selecting the initiatives.
    pub jql: String,
    /// Tracker base URL, used for browse links.
    pub base_url: String,
    pub date_fields: DateFields,
    /// Link type names allowed to contribute epics; `None` admits all.
    pub link_types: Option<Vec<String>>,
}

impl RoadmapRequest {
    pub fn new(jql: impl Into<String>, base_url: impl Into<String>, date_fields: DateFields) -> Self {
        RoadmapRequest { jql: jql.into(), base_url: base_url.into(), date_fields, link_types: None }
    }

    /// Restricts epic discovery to these link types (builder pattern).
    pub fn with_link_types(mut self, link_types: Vec<String>) -> Self {
        self.link_types = Some(link_types);
        self
    }
}

/// Builds a roadmap from the tracker behind `source`.
///
/// Only the primary search can fail the build. Every later query degrades
/// to partial information instead.
pub fn build_roadmap<S, D>(source: &S, request: &RoadmapRequest, dates: &D) -> Result<RoadmapResult>
where
    S: IssueSource,
    D: DateSource + ?Sized,
{
    let date_fields = request.date_fields.to_vec();
    let base_url = request.base_url.trim_end_matches('/');

    let initiatives = source.search_issues(&Query::Jql(request.jql.clone()), &date_fields)?;
    if initiatives.is_empty() {
        return Err(Error::NoIssuesFound);
    }
    tracing::debug!("primary query returned {} initiatives", initiatives.len());

    let hierarchy = resolve_hierarchy(source, &initiatives, request.link_types.as_deref());
    let epic_keys = hierarchy.epic_links.epic_keys();
    tracing::debug!(
        "discovered {} epics, {} initiative dependencies",
        epic_keys.len(),
        hierarchy.initiative_deps.len()
    );

    let enriched = enrich_epics(source, epic_keys, &date_fields);
    let progress = child_progress(source, epic_keys);

    let mut pool = DatePool::new();
    let mut built = Vec::with_capacity(initiatives.len());
    for record in &initiatives {
        let epics: Vec<Epic> = hierarchy
            .epic_links
            .epics_of(&record.key)
            .iter()
            .filter_map(|key| enriched.records.get(key))
            .map(|epic| {
                let counts = progress.get(&epic.key).copied().unwrap_or_default();
                Epic::from_record(epic, &request.date_fields, counts, base_url)
            })
            .collect();
        for epic in &epics {
            pool.add_range(epic.range());
        }

        let initiative = Initiative::from_record(record, epics, base_url);
        pool.add_range(initiative.range());
        built.push(initiative);
    }

    let bounds = pool.bounds(dates.today());
    let project_names = resolve_project_names(source, &built);

    Ok(RoadmapResult {
        initiatives: built,
        query: request.jql.clone(),
        timeline_start: bounds.start,
        timeline_end: bounds.end,
        base_url: base_url.to_string(),
        initiative_deps: hierarchy.initiative_deps,
        epic_deps: enriched.epic_deps,
        project_names,
    })
}

#[cfg(test)]
#[path = "pipeline_tests.rs"]
mod tests;
