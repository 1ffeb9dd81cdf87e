// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Normalization of tracker statuses into a fixed set of categories.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::issue::StatusRecord;

/// Normalized workflow bucket for any tracker status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusCategory {
    /// Not started ("To Do" and anything unrecognized).
    #[default]
    New,
    /// Work in progress.
    Indeterminate,
    /// Completed.
    Done,
    /// Closed without completion.
    Cancelled,
}

impl StatusCategory {
    /// Returns the string representation used in serialized output.
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusCategory::New => "new",
            StatusCategory::Indeterminate => "indeterminate",
            StatusCategory::Done => "done",
            StatusCategory::Cancelled => "cancelled",
        }
    }

    /// Categorizes a tracker status record. Never fails.
    ///
    /// Cancelled statuses are filed under the "done" category key by the
    /// tracker, so the status name is checked before the category.
    pub fn from_status(status: &StatusRecord) -> Self {
        if status.name.to_lowercase().contains("cancel") {
            return StatusCategory::Cancelled;
        }
        match status.category.key.to_lowercase().as_str() {
            "new" => return StatusCategory::New,
            "indeterminate" => return StatusCategory::Indeterminate,
            "done" => return StatusCategory::Done,
            _ => {}
        }
        let name = status.category.name.to_lowercase();
        if name.contains("done") {
            StatusCategory::Done
        } else if name.contains("progress") || name.contains("indeterminate") {
            StatusCategory::Indeterminate
        } else {
            StatusCategory::New
        }
    }
}

impl fmt::Display for StatusCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
#[path = "status_tests.rs"]
mod tests;
