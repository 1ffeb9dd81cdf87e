// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// All errors the roadmap CLI can report.
///
/// Errors provide user-friendly messages with hints for common issues.
#[derive(Debug, Error)]
pub enum Error {
    #[error("configuration not found at {0}\n  hint: run 'roadmap config init' to create one")]
    ConfigNotFound(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("roadmap settings incomplete: {0}\n  hint: set start_date_field and end_date_field under [roadmap]")]
    RoadmapConfig(String),

    #[error(transparent)]
    Roadmap(#[from] rm_core::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config error: {0}")]
    Toml(#[from] toml::ser::Error),
}

/// A specialized Result type for roadmap CLI operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
