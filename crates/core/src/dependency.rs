// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Dependency edges between roadmap items of the same level.

use indexmap::IndexSet;
use serde::{Serialize, Serializer};

/// Directed edge: `from` blocks or precedes `to`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DependencyEdge {
    pub from: String,
    pub to: String,
}

impl DependencyEdge {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        DependencyEdge { from: from.into(), to: to.into() }
    }
}

/// Serialized as a `[from, to]` pair.
impl Serialize for DependencyEdge {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        (&self.from, &self.to).serialize(serializer)
    }
}

/// Insertion-ordered set of edges with no duplicates and no self-edges.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct EdgeSet(IndexSet<DependencyEdge>);

impl EdgeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `from -> to`. Returns false if the edge is a self-edge or
    /// already present.
    pub fn insert(&mut self, from: &str, to: &str) -> bool {
        if from == to {
            return false;
        }
        self.0.insert(DependencyEdge::new(from, to))
    }

    pub fn contains(&self, from: &str, to: &str) -> bool {
        self.0.contains(&DependencyEdge::new(from, to))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DependencyEdge> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a EdgeSet {
    type Item = &'a DependencyEdge;
    type IntoIter = indexmap::set::Iter<'a, DependencyEdge>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
#[path = "dependency_tests.rs"]
mod tests;
