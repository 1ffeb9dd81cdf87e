// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! rm-core: roadmap aggregation for hierarchical tracker data
//!
//! This crate turns initiatives, epics and their child work items fetched
//! from an issue tracker into a normalized roadmap for timeline
//! visualization. All tracker access goes through [`IssueSource`]; the
//! crate itself performs no I/O.

pub mod date;
pub mod dependency;
pub mod enrich;
pub mod error;
pub mod hierarchy;
pub mod issue;
pub mod pipeline;
pub mod progress;
pub mod roadmap;
pub mod source;
pub mod status;
pub mod timeline;

pub use date::{DateSource, FixedDate, SystemDate};
pub use dependency::{DependencyEdge, EdgeSet};
pub use error::{Error, Result};
pub use issue::{Direction, IssueRef, RawIssue, EPIC_TYPE};
pub use pipeline::{build_roadmap, RoadmapRequest};
pub use progress::ChildProgress;
pub use roadmap::{DateFields, Epic, Initiative, RoadmapResult};
pub use source::{FetchError, IssueSource, MemorySource, Query, QueryKind};
pub use status::StatusCategory;
pub use timeline::{DateRange, TimelineBounds};
