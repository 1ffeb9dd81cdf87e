// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Typed snapshot of an issue as returned by the tracker.
//!
//! The tracker hands back a deeply nested, partially populated JSON document.
//! [`RawIssue`] parses it once at the boundary: every nested record is
//! optional, explicit `null`s collapse to empty values, and unknown fields
//! (custom date fields included) land in [`IssueFields::extra`].

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// Issue type name the tracker uses for epics.
pub const EPIC_TYPE: &str = "Epic";

fn null_to_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// An issue record exactly as far as the roadmap cares about it.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawIssue {
    /// Unique issue key (e.g., "PROJ-123").
    pub key: String,
    #[serde(default, deserialize_with = "null_to_default")]
    pub fields: IssueFields,
}

/// The field bag of an issue.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct IssueFields {
    #[serde(default, deserialize_with = "null_to_default")]
    pub summary: String,
    #[serde(rename = "issuetype", default, deserialize_with = "null_to_default")]
    pub issue_type: IssueTypeRef,
    #[serde(default, deserialize_with = "null_to_default")]
    pub status: StatusRecord,
    #[serde(rename = "issuelinks", default, deserialize_with = "null_to_default")]
    pub issue_links: Vec<IssueLink>,
    #[serde(default, deserialize_with = "null_to_default")]
    pub subtasks: Vec<IssueRef>,
    #[serde(default)]
    pub parent: Option<IssueRef>,
    /// Every other field, keyed by field id (custom date fields live here).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct IssueTypeRef {
    #[serde(default, deserialize_with = "null_to_default")]
    pub name: String,
}

/// Workflow status with the tracker's own category record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct StatusRecord {
    #[serde(default, deserialize_with = "null_to_default")]
    pub name: String,
    #[serde(rename = "statusCategory", default, deserialize_with = "null_to_default")]
    pub category: CategoryRecord,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CategoryRecord {
    #[serde(default, deserialize_with = "null_to_default")]
    pub key: String,
    #[serde(default, deserialize_with = "null_to_default")]
    pub name: String,
}

/// A typed link between two issues.
///
/// The tracker reports each link from the point of view of the issue that
/// carries it: exactly one of `inward` / `outward` is normally set.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct IssueLink {
    #[serde(rename = "type", default, deserialize_with = "null_to_default")]
    pub link_type: LinkTypeRef,
    #[serde(rename = "inwardIssue", default)]
    pub inward: Option<IssueRef>,
    #[serde(rename = "outwardIssue", default)]
    pub outward: Option<IssueRef>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LinkTypeRef {
    #[serde(default, deserialize_with = "null_to_default")]
    pub name: String,
}

/// A reference to another issue (link target, subtask or parent).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct IssueRef {
    #[serde(default, deserialize_with = "null_to_default")]
    pub key: String,
    #[serde(default, deserialize_with = "null_to_default")]
    pub fields: RefFields,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RefFields {
    #[serde(rename = "issuetype", default, deserialize_with = "null_to_default")]
    pub issue_type: IssueTypeRef,
}

/// Which side of a link the target sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Inward,
    Outward,
}

impl IssueRef {
    /// Creates a reference with the given key and declared type.
    pub fn new(key: impl Into<String>, type_name: impl Into<String>) -> Self {
        IssueRef {
            key: key.into(),
            fields: RefFields { issue_type: IssueTypeRef { name: type_name.into() } },
        }
    }

    /// Declared issue type name, empty when unknown.
    pub fn type_name(&self) -> &str {
        &self.fields.issue_type.name
    }

    /// Returns true if the referenced issue is declared as an epic.
    pub fn is_epic(&self) -> bool {
        self.type_name() == EPIC_TYPE
    }
}

impl IssueLink {
    /// Link type name (e.g., "Relates", "Blocks").
    pub fn type_name(&self) -> &str {
        &self.link_type.name
    }

    /// Inward then outward target, skipping the absent side.
    pub fn targets(&self) -> impl Iterator<Item = &IssueRef> {
        self.inward.iter().chain(self.outward.iter())
    }
}

impl RawIssue {
    /// Creates an issue with the given key and type and no other fields.
    pub fn new(key: impl Into<String>, type_name: impl Into<String>) -> Self {
        let mut issue = RawIssue { key: key.into(), fields: IssueFields::default() };
        issue.fields.issue_type.name = type_name.into();
        issue
    }

    /// Sets the summary (builder pattern).
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.fields.summary = summary.into();
        self
    }

    /// Sets the status name and its category key/name (builder pattern).
    pub fn with_status(
        mut self,
        name: impl Into<String>,
        category_key: impl Into<String>,
        category_name: impl Into<String>,
    ) -> Self {
        self.fields.status = StatusRecord {
            name: name.into(),
            category: CategoryRecord { key: category_key.into(), name: category_name.into() },
        };
        self
    }

    /// Adds an issue link pointing at `target` on the given side (builder pattern).
    pub fn with_link(mut self, link_type: &str, direction: Direction, target: IssueRef) -> Self {
        let mut link =
            IssueLink { link_type: LinkTypeRef { name: link_type.to_string() }, ..Default::default() };
        match direction {
            Direction::Inward => link.inward = Some(target),
            Direction::Outward => link.outward = Some(target),
        }
        self.fields.issue_links.push(link);
        self
    }

    /// Adds a subtask entry (builder pattern).
    pub fn with_subtask(mut self, subtask: IssueRef) -> Self {
        self.fields.subtasks.push(subtask);
        self
    }

    /// Sets the parent reference (builder pattern).
    pub fn with_parent(mut self, parent_key: impl Into<String>) -> Self {
        self.fields.parent = Some(IssueRef { key: parent_key.into(), ..Default::default() });
        self
    }

    /// Sets an arbitrary field by id (builder pattern).
    pub fn with_field(mut self, field_id: impl Into<String>, value: Value) -> Self {
        self.fields.extra.insert(field_id.into(), value);
        self
    }

    /// Declared issue type name.
    pub fn type_name(&self) -> &str {
        &self.fields.issue_type.name
    }

    /// Parent key, or `None` when the issue has no (or an empty) parent.
    pub fn parent_key(&self) -> Option<&str> {
        self.fields.parent.as_ref().map(|p| p.key.as_str()).filter(|k| !k.is_empty())
    }

    /// Targets of this issue's outward links.
    pub fn outward_targets(&self) -> impl Iterator<Item = &IssueRef> {
        self.fields.issue_links.iter().filter_map(|link| link.outward.as_ref())
    }
}

#[cfg(test)]
#[path = "issue_tests.rs"]
mod tests;
