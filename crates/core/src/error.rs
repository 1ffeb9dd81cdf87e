// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for rm-core operations.

use thiserror::Error;

use crate::source::FetchError;

/// Fatal errors that abort a roadmap build.
///
/// Only the primary initiative search can produce these. Failures of the
/// auxiliary enrichment queries are absorbed by the pipeline and never
/// surface here.
#[derive(Debug, Error)]
pub enum Error {
    #[error("tracker authentication failed\n  hint: check the email and API token in your config")]
    Auth,

    #[error("tracker rate limit exceeded\n  hint: wait a moment and try again")]
    RateLimited,

    #[error("cannot connect to tracker: {0}")]
    Connection(String),

    #[error("invalid query: {0}\n  hint: check your JQL syntax")]
    InvalidQuery(String),

    #[error("no issues found matching your query")]
    NoIssuesFound,
}

/// A specialized Result type for rm-core operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<FetchError> for Error {
    fn from(e: FetchError) -> Self {
        match e {
            FetchError::Auth => Error::Auth,
            FetchError::RateLimited => Error::RateLimited,
            FetchError::Connection(msg) => Error::Connection(msg),
            FetchError::InvalidQuery(msg) => Error::InvalidQuery(msg),
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
