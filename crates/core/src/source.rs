// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The tracker collaborator seam.
//!
//! The pipeline never talks to the network itself. It describes what it
//! needs as a [`Query`] and hands it to an [`IssueSource`]; the Jira client
//! renders queries to JQL, while [`MemorySource`] answers them from a fixed
//! issue set for tests and demos.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;

use crate::issue::{RawIssue, EPIC_TYPE};

/// Errors a tracker search can report.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    #[error("authentication failed")]
    Auth,

    #[error("rate limited")]
    RateLimited,

    #[error("connection failed: {0}")]
    Connection(String),

    #[error("invalid query: {0}")]
    InvalidQuery(String),
}

/// Result type for collaborator calls.
pub type FetchResult<T> = std::result::Result<T, FetchError>;

/// The searches the pipeline issues.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    /// Caller-supplied JQL selecting the initiatives.
    Jql(String),
    /// Epics whose parent field is one of these keys.
    EpicsUnder(Vec<String>),
    /// Issues with exactly these keys.
    Keys(Vec<String>),
    /// Any issue whose parent field is one of these keys.
    ChildrenOf(Vec<String>),
}

/// Discriminant of [`Query`], used to target failures in [`MemorySource`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryKind {
    Jql,
    EpicsUnder,
    Keys,
    ChildrenOf,
}

impl Query {
    pub fn kind(&self) -> QueryKind {
        match self {
            Query::Jql(_) => QueryKind::Jql,
            Query::EpicsUnder(_) => QueryKind::EpicsUnder,
            Query::Keys(_) => QueryKind::Keys,
            Query::ChildrenOf(_) => QueryKind::ChildrenOf,
        }
    }

    /// Renders the query as JQL.
    pub fn to_jql(&self) -> String {
        match self {
            Query::Jql(jql) => jql.clone(),
            Query::EpicsUnder(keys) => format!("issueType = Epic AND parent in ({})", keys.join(", ")),
            Query::Keys(keys) => format!("key in ({})", keys.join(", ")),
            Query::ChildrenOf(keys) => format!("parent in ({})", keys.join(", ")),
        }
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_jql())
    }
}

/// Read access to the tracker.
pub trait IssueSource {
    /// Runs a search, requesting `extra_fields` in addition to the standard
    /// roadmap fields.
    fn search_issues(&self, query: &Query, extra_fields: &[String]) -> FetchResult<Vec<RawIssue>>;

    /// Resolves project prefixes to display names. Never fails; prefixes it
    /// cannot resolve may be missing from the result or map to themselves.
    fn project_names(&self, prefixes: &[String]) -> BTreeMap<String, String>;
}

impl<S: IssueSource + ?Sized> IssueSource for &S {
    fn search_issues(&self, query: &Query, extra_fields: &[String]) -> FetchResult<Vec<RawIssue>> {
        (**self).search_issues(query, extra_fields)
    }

    fn project_names(&self, prefixes: &[String]) -> BTreeMap<String, String> {
        (**self).project_names(prefixes)
    }
}

/// In-memory issue source.
///
/// `initiatives` answer every [`Query::Jql`]; the structured queries are
/// answered from `issues`. Failures can be injected per query kind, and every
/// query received is recorded.
#[derive(Debug, Default)]
pub struct MemorySource {
    initiatives: Vec<RawIssue>,
    issues: Vec<RawIssue>,
    project_names: BTreeMap<String, String>,
    failures: Vec<(QueryKind, FetchError)>,
    queries: RefCell<Vec<Query>>,
}

impl MemorySource {
    pub fn new(initiatives: Vec<RawIssue>, issues: Vec<RawIssue>) -> Self {
        MemorySource { initiatives, issues, ..Default::default() }
    }

    /// Registers a project display name (builder pattern).
    pub fn with_project_name(mut self, prefix: &str, name: &str) -> Self {
        self.project_names.insert(prefix.to_string(), name.to_string());
        self
    }

    /// Makes every query of `kind` fail with `error` (builder pattern).
    pub fn failing(mut self, kind: QueryKind, error: FetchError) -> Self {
        self.failures.push((kind, error));
        self
    }

    /// Queries received so far, in order.
    pub fn queries(&self) -> Vec<Query> {
        self.queries.borrow().clone()
    }

    fn with_parent_in<'a>(
        &'a self,
        parents: &'a [String],
    ) -> impl Iterator<Item = &'a RawIssue> + 'a {
        self.issues
            .iter()
            .filter(move |i| i.parent_key().is_some_and(|p| parents.iter().any(|k| k == p)))
    }
}

impl IssueSource for MemorySource {
    fn search_issues(&self, query: &Query, _extra_fields: &[String]) -> FetchResult<Vec<RawIssue>> {
        self.queries.borrow_mut().push(query.clone());
        if let Some((_, err)) = self.failures.iter().find(|(kind, _)| *kind == query.kind()) {
            return Err(err.clone());
        }
        let found = match query {
            Query::Jql(_) => self.initiatives.clone(),
            Query::EpicsUnder(parents) => {
                self.with_parent_in(parents).filter(|i| i.type_name() == EPIC_TYPE).cloned().collect()
            }
            Query::Keys(keys) => {
                self.issues.iter().filter(|i| keys.contains(&i.key)).cloned().collect()
            }
            Query::ChildrenOf(parents) => self.with_parent_in(parents).cloned().collect(),
        };
        Ok(found)
    }

    fn project_names(&self, prefixes: &[String]) -> BTreeMap<String, String> {
        prefixes
            .iter()
            .filter_map(|p| self.project_names.get(p).map(|name| (p.clone(), name.clone())))
            .collect()
    }
}

#[cfg(test)]
#[path = "source_tests.rs"]
mod tests;
