// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Discovery of the epics that belong to each initiative.
//!
//! Epics reach an initiative through three independent channels:
//! 1. issue links (optionally filtered by link type name)
//! 2. subtask entries
//! 3. the tracker's native parent field, which needs an extra query
//!
//! Channels 1 and 2 are read straight off the initiative records by
//! [`resolve_links`]. Channel 3 is computed as a delta by
//! [`parent_child_delta`] and merged into the result by the caller.
//! [`resolve_hierarchy`] runs all three against an [`IssueSource`].

use std::collections::BTreeSet;

use indexmap::IndexMap;

use crate::dependency::EdgeSet;
use crate::issue::RawIssue;
use crate::source::{IssueSource, Query};

/// Ordered, per-initiative epic lists plus the set of every epic seen.
///
/// Each list keeps discovery order and holds a key at most once. The same
/// epic may still appear under two different initiatives.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EpicLinks {
    by_initiative: IndexMap<String, Vec<String>>,
    all: BTreeSet<String>,
}

/// One epic newly attached to one initiative.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EpicAssignment {
    pub initiative: String,
    pub epic: String,
}

impl EpicLinks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an initiative with an empty epic list, if not yet known.
    pub fn add_initiative(&mut self, initiative: &str) {
        if !self.by_initiative.contains_key(initiative) {
            self.by_initiative.insert(initiative.to_string(), Vec::new());
        }
    }

    /// Appends `epic` to `initiative`'s list.
    ///
    /// Returns false when the initiative is unknown, the key is empty, or
    /// the epic is already listed under that initiative.
    pub fn push(&mut self, initiative: &str, epic: &str) -> bool {
        if epic.is_empty() {
            return false;
        }
        let Some(epics) = self.by_initiative.get_mut(initiative) else {
            return false;
        };
        if epics.iter().any(|e| e == epic) {
            return false;
        }
        epics.push(epic.to_string());
        self.all.insert(epic.to_string());
        true
    }

    /// Applies a delta of assignments, returning how many were new.
    pub fn merge(&mut self, delta: &[EpicAssignment]) -> usize {
        delta.iter().filter(|a| self.push(&a.initiative, &a.epic)).count()
    }

    /// Returns true if the initiative has been registered.
    pub fn has_initiative(&self, initiative: &str) -> bool {
        self.by_initiative.contains_key(initiative)
    }

    /// Returns true if `epic` is already listed under `initiative`.
    pub fn is_listed(&self, initiative: &str, epic: &str) -> bool {
        self.by_initiative.get(initiative).is_some_and(|epics| epics.iter().any(|e| e == epic))
    }

    /// Epic keys of an initiative in discovery order (empty if unknown).
    pub fn epics_of(&self, initiative: &str) -> &[String] {
        self.by_initiative.get(initiative).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Every discovered epic key, sorted.
    pub fn epic_keys(&self) -> &BTreeSet<String> {
        &self.all
    }
}

/// Output of hierarchy discovery.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Hierarchy {
    pub epic_links: EpicLinks,
    pub initiative_deps: EdgeSet,
}

/// Returns true if a link of this type may contribute epics.
///
/// An absent or empty allow-list admits every link type.
fn link_type_allowed(link_types: Option<&[String]>, name: &str) -> bool {
    match link_types {
        Some(allowed) if !allowed.is_empty() => allowed.iter().any(|t| t == name),
        _ => true,
    }
}

/// Runs the link and subtask channels over the initiative records.
pub fn resolve_links(initiatives: &[RawIssue], link_types: Option<&[String]>) -> Hierarchy {
    let initiative_keys: BTreeSet<&str> = initiatives.iter().map(|i| i.key.as_str()).collect();
    let mut hierarchy = Hierarchy::default();

    for initiative in initiatives {
        let key = initiative.key.as_str();
        hierarchy.epic_links.add_initiative(key);

        for link in &initiative.fields.issue_links {
            // Outward side only: an inward link mirrors another issue's outward link.
            if let Some(target) = &link.outward {
                if initiative_keys.contains(target.key.as_str()) {
                    hierarchy.initiative_deps.insert(key, &target.key);
                }
            }

            if !link_type_allowed(link_types, link.type_name()) {
                continue;
            }
            for target in link.targets().filter(|t| t.is_epic()) {
                hierarchy.epic_links.push(key, &target.key);
            }
        }

        for subtask in initiative.fields.subtasks.iter().filter(|s| s.is_epic()) {
            hierarchy.epic_links.push(key, &subtask.key);
        }
    }

    hierarchy
}

/// Computes which epics returned by the parent-field query are new.
///
/// Children whose parent is not a known initiative, or which are already
/// listed under their parent, are ignored.
pub fn parent_child_delta(links: &EpicLinks, children: &[RawIssue]) -> Vec<EpicAssignment> {
    let mut delta: Vec<EpicAssignment> = Vec::new();
    for child in children {
        let Some(parent) = child.parent_key() else {
            continue;
        };
        if !links.has_initiative(parent) || links.is_listed(parent, &child.key) {
            continue;
        }
        if delta.iter().any(|a| a.initiative == parent && a.epic == child.key) {
            continue;
        }
        delta.push(EpicAssignment { initiative: parent.to_string(), epic: child.key.clone() });
    }
    delta
}

/// Discovers epics through all three channels.
///
/// A failure of the parent-field query is logged and otherwise ignored:
/// the result then holds only what links and subtasks revealed.
pub fn resolve_hierarchy<S: IssueSource>(
    source: &S,
    initiatives: &[RawIssue],
    link_types: Option<&[String]>,
) -> Hierarchy {
    let mut hierarchy = resolve_links(initiatives, link_types);
    if initiatives.is_empty() {
        return hierarchy;
    }

    let keys: Vec<String> = initiatives.iter().map(|i| i.key.clone()).collect();
    match source.search_issues(&Query::EpicsUnder(keys), &[]) {
        Ok(children) => {
            let delta = parent_child_delta(&hierarchy.epic_links, &children);
            let added = hierarchy.epic_links.merge(&delta);
            tracing::debug!("parent field query added {} epics", added);
        }
        Err(e) => {
            tracing::warn!("parent field epic discovery failed, continuing without it: {}", e);
        }
    }

    hierarchy
}

#[cfg(test)]
#[path = "hierarchy_tests.rs"]
mod tests;
