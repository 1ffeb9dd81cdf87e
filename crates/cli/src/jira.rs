// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Jira Cloud REST client.
//!
//! Implements [`IssueSource`] over the v3 REST API using blocking `ureq`
//! requests with basic auth. Rate-limited requests are retried with
//! exponential backoff; every other failure is classified into a
//! [`FetchError`] and left for the pipeline to handle.

use std::collections::BTreeMap;
use std::thread;
use std::time::Duration;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use rm_core::source::FetchResult;
use rm_core::{FetchError, IssueSource, Query, RawIssue};

use crate::config::JiraConfig;
use crate::error::{Error, Result};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);
const PAGE_SIZE: &str = "100";
const USER_AGENT: &str = concat!("roadmap/", env!("CARGO_PKG_VERSION"));

const SEARCH_PATH: &str = "/rest/api/3/search/jql";
const PROJECT_PATH: &str = "/rest/api/3/project";
const LINK_TYPE_PATH: &str = "/rest/api/3/issueLinkType";

/// Fields every roadmap search requests.
pub const STANDARD_FIELDS: [&str; 6] = ["summary", "issuetype", "status", "issuelinks", "subtasks", "parent"];

/// Backoff schedule for rate-limited requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, including the first.
    pub max_attempts: u32,
    pub multiplier: Duration,
    pub min_delay: Duration,
    pub max_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        RetryPolicy {
            max_attempts: 3,
            multiplier: Duration::from_secs(1),
            min_delay: Duration::from_secs(4),
            max_delay: Duration::from_secs(60),
        }
    }
}

impl RetryPolicy {
    /// Wait after the given failed attempt (1-based): `multiplier * 2^(attempt-1)`,
    /// clamped to `[min_delay, max_delay]`.
    pub fn delay(&self, attempt: u32) -> Duration {
        let factor = 2u32.saturating_pow(attempt.saturating_sub(1));
        self.multiplier.saturating_mul(factor).clamp(self.min_delay, self.max_delay)
    }

    /// Runs `op`, retrying only [`FetchError::RateLimited`] until attempts run out.
    pub fn run<T>(
        &self,
        mut sleep: impl FnMut(Duration),
        mut op: impl FnMut() -> FetchResult<T>,
    ) -> FetchResult<T> {
        let mut attempt = 1;
        loop {
            match op() {
                Err(FetchError::RateLimited) if attempt < self.max_attempts => {
                    let delay = self.delay(attempt);
                    tracing::warn!(
                        "rate limited by jira, retrying in {}s (attempt {}/{})",
                        delay.as_secs(),
                        attempt,
                        self.max_attempts
                    );
                    sleep(delay);
                    attempt += 1;
                }
                result => return result,
            }
        }
    }
}

/// Maps a non-success HTTP status to a fetch error.
pub fn classify_status(code: u16, body: String) -> FetchError {
    match code {
        401 => FetchError::Auth,
        429 => FetchError::RateLimited,
        400 => FetchError::InvalidQuery(body),
        _ => FetchError::Connection(format!("HTTP {}: {}", code, body)),
    }
}

/// Comma-separated field list for a search.
pub fn search_fields(extra_fields: &[String]) -> String {
    STANDARD_FIELDS
        .iter()
        .copied()
        .chain(extra_fields.iter().map(String::as_str))
        .collect::<Vec<_>>()
        .join(",")
}

#[derive(Debug, Deserialize)]
struct SearchPage {
    #[serde(default)]
    issues: Vec<RawIssue>,
    #[serde(rename = "nextPageToken", default)]
    next_page_token: Option<String>,
    #[serde(rename = "isLast", default)]
    is_last: bool,
}

impl SearchPage {
    fn into_parts(self) -> (Vec<RawIssue>, Option<String>) {
        let next = if self.is_last { None } else { self.next_page_token };
        (self.issues, next)
    }
}

/// Follows `nextPageToken` until the last page.
///
/// Stops early if the server hands back the token it was just given.
fn collect_pages<F>(mut fetch: F) -> FetchResult<Vec<RawIssue>>
where
    F: FnMut(Option<&str>) -> FetchResult<SearchPage>,
{
    let mut issues = Vec::new();
    let mut token: Option<String> = None;
    loop {
        let (page, next) = fetch(token.as_deref())?.into_parts();
        issues.extend(page);
        match next {
            Some(next) if token.as_deref() != Some(next.as_str()) => token = Some(next),
            Some(next) => {
                tracing::warn!("jira repeated page token {}, stopping", next);
                break;
            }
            None => break,
        }
    }
    Ok(issues)
}

#[derive(Debug, Deserialize)]
struct ProjectRecord {
    name: String,
}

#[derive(Debug, Deserialize)]
struct LinkTypeList {
    #[serde(rename = "issueLinkTypes", default)]
    issue_link_types: Vec<LinkTypeRecord>,
}

#[derive(Debug, Deserialize)]
struct LinkTypeRecord {
    name: String,
}

/// Blocking Jira Cloud client.
pub struct JiraClient {
    base_url: String,
    authorization: String,
    agent: ureq::Agent,
    retry: RetryPolicy,
}

impl JiraClient {
    pub fn new(config: &JiraConfig) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(REQUEST_TIMEOUT).user_agent(USER_AGENT).build();
        let credentials = STANDARD.encode(format!("{}:{}", config.email, config.api_token));
        JiraClient {
            base_url: config.url.trim_end_matches('/').to_string(),
            authorization: format!("Basic {}", credentials),
            agent,
            retry: RetryPolicy::default(),
        }
    }

    /// Overrides the rate-limit backoff (builder pattern).
    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Lists the names of every issue link type defined on the server.
    pub fn link_type_names(&self) -> Result<Vec<String>> {
        let list: LinkTypeList = self
            .retry
            .run(thread::sleep, || self.get_json(LINK_TYPE_PATH, &[]))
            .map_err(|e| Error::Roadmap(e.into()))?;
        Ok(list.issue_link_types.into_iter().map(|t| t.name).collect())
    }

    fn get_json<T: DeserializeOwned>(&self, path: &str, params: &[(&str, &str)]) -> FetchResult<T> {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self
            .agent
            .get(&url)
            .set("Authorization", &self.authorization)
            .set("Accept", "application/json");
        for (name, value) in params {
            request = request.query(name, value);
        }

        match request.call() {
            Ok(resp) => resp
                .into_json::<T>()
                .map_err(|e| FetchError::Connection(format!("unreadable response from {}: {}", path, e))),
            Err(ureq::Error::Status(code, resp)) => {
                let body = resp.into_string().unwrap_or_default();
                Err(classify_status(code, body))
            }
            Err(e) => Err(FetchError::Connection(format!("cannot reach {}: {}", self.base_url, e))),
        }
    }

    fn search_page(&self, jql: &str, fields: &str, token: Option<&str>) -> FetchResult<SearchPage> {
        let mut params = vec![("jql", jql), ("fields", fields), ("maxResults", PAGE_SIZE)];
        if let Some(token) = token {
            params.push(("nextPageToken", token));
        }
        self.retry.run(thread::sleep, || self.get_json(SEARCH_PATH, &params))
    }
}

impl IssueSource for JiraClient {
    fn search_issues(&self, query: &Query, extra_fields: &[String]) -> FetchResult<Vec<RawIssue>> {
        let jql = query.to_jql();
        let fields = search_fields(extra_fields);
        tracing::debug!("jira search: {}", jql);

        let issues = collect_pages(|token| self.search_page(&jql, &fields, token))?;
        tracing::debug!("jira search returned {} issues", issues.len());
        Ok(issues)
    }

    fn project_names(&self, prefixes: &[String]) -> BTreeMap<String, String> {
        prefixes
            .iter()
            .map(|prefix| {
                let path = format!("{}/{}", PROJECT_PATH, prefix);
                let name = match self.get_json::<ProjectRecord>(&path, &[]) {
                    Ok(project) => project.name,
                    Err(e) => {
                        tracing::debug!("no project name for {}: {}", prefix, e);
                        prefix.clone()
                    }
                };
                (prefix.clone(), name)
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "jira_tests.rs"]
mod tests;
