// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! User configuration management.
//!
//! Configuration is stored in `~/.jira-roadmap/config.toml` and includes:
//! - `[jira]`: tracker URL and basic-auth credentials
//! - `[roadmap]`: the custom field ids holding epic start and end dates,
//!   plus an optional default link-type allow-list

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use rm_core::DateFields;

use crate::error::{Error, Result};

const CONFIG_DIR_NAME: &str = ".jira-roadmap";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Visible suffix length when masking the API token.
const TOKEN_VISIBLE_CHARS: usize = 4;

/// Configuration stored in `~/.jira-roadmap/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub jira: JiraConfig,
    #[serde(default, skip_serializing_if = "RoadmapSettings::is_empty")]
    pub roadmap: RoadmapSettings,
}

/// Tracker connection settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JiraConfig {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub api_token: String,
}

/// Roadmap field mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoadmapSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date_field: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date_field: Option<String>,
    /// Default link types allowed to contribute epics. Empty admits all.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub link_types: Vec<String>,
}

impl RoadmapSettings {
    fn is_empty(&self) -> bool {
        self.start_date_field.is_none() && self.end_date_field.is_none() && self.link_types.is_empty()
    }
}

/// Returns the configuration directory, `~/.jira-roadmap`.
pub fn config_dir() -> PathBuf {
    dirs::home_dir()
        .map(|h| h.join(CONFIG_DIR_NAME))
        .unwrap_or_else(|| PathBuf::from(CONFIG_DIR_NAME))
}

/// Returns the configuration file path.
pub fn config_path() -> PathBuf {
    config_dir().join(CONFIG_FILE_NAME)
}

impl Config {
    /// Creates a config with connection settings only.
    pub fn new(url: impl Into<String>, email: impl Into<String>, api_token: impl Into<String>) -> Self {
        Config {
            jira: JiraConfig { url: url.into(), email: email.into(), api_token: api_token.into() },
            roadmap: RoadmapSettings::default(),
        }
    }

    /// Sets the date field ids (builder pattern).
    pub fn with_date_fields(mut self, start: Option<String>, end: Option<String>) -> Self {
        self.roadmap.start_date_field = start;
        self.roadmap.end_date_field = end;
        self
    }

    /// Loads and validates the configuration from the default location.
    pub fn load() -> Result<Self> {
        Self::load_from(&config_path())
    }

    /// Loads and validates the configuration at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigNotFound`] if the file does not exist and
    /// [`Error::InvalidConfig`] if it cannot be parsed or fails validation.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::ConfigNotFound(path.display().to_string()));
        }
        let content = fs::read_to_string(path)?;
        let config: Config =
            toml::from_str(&content).map_err(|e| Error::InvalidConfig(e.to_string().trim().to_string()))?;
        config.check()?;
        tracing::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Writes the configuration to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Returns every validation problem, in field order.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        let jira = &self.jira;

        if jira.url.is_empty() {
            errors.push("JIRA URL is required".to_string());
        } else {
            let (scheme, host) = split_url(&jira.url);
            if !matches!(scheme.map(str::to_ascii_lowercase).as_deref(), Some("http" | "https")) {
                errors.push("JIRA URL must start with http:// or https://".to_string());
            }
            if host.is_empty() {
                errors.push("JIRA URL must include a domain".to_string());
            }
        }

        if jira.email.is_empty() {
            errors.push("JIRA email is required".to_string());
        } else if !jira.email.contains('@') {
            errors.push("JIRA email must be a valid email address".to_string());
        }

        if jira.api_token.is_empty() {
            errors.push("JIRA API token is required".to_string());
        }

        errors
    }

    /// Fails with every validation problem joined by `; `.
    pub fn check(&self) -> Result<()> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(Error::InvalidConfig(errors.join("; ")))
        }
    }

    /// Returns the date field mapping, which a roadmap build requires.
    pub fn date_fields(&self) -> Result<DateFields> {
        match (&self.roadmap.start_date_field, &self.roadmap.end_date_field) {
            (Some(start), Some(end)) if !start.is_empty() && !end.is_empty() => {
                Ok(DateFields::new(start.as_str(), end.as_str()))
            }
            (start, end) => {
                let missing: Vec<&str> = [("start_date_field", start), ("end_date_field", end)]
                    .into_iter()
                    .filter(|(_, v)| v.as_deref().is_none_or(str::is_empty))
                    .map(|(name, _)| name)
                    .collect();
                Err(Error::RoadmapConfig(format!("{} not set", missing.join(" and "))))
            }
        }
    }

    /// Returns a copy safe to print, with the API token masked.
    pub fn masked(&self) -> Config {
        let mut copy = self.clone();
        copy.jira.api_token = mask_token(&self.jira.api_token);
        copy
    }
}

/// Masks all but the last few characters of a token.
pub fn mask_token(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    if chars.len() <= TOKEN_VISIBLE_CHARS {
        return "*".repeat(chars.len());
    }
    let visible: String = chars[chars.len() - TOKEN_VISIBLE_CHARS..].iter().collect();
    format!("{}{}", "*".repeat(chars.len() - TOKEN_VISIBLE_CHARS), visible)
}

/// Splits a URL into its scheme (if any) and host.
fn split_url(url: &str) -> (Option<&str>, &str) {
    match url.split_once("://") {
        Some((scheme, rest)) => {
            let host = rest.split(['/', '?', '#']).next().unwrap_or_default();
            (Some(scheme), host)
        }
        None => (None, ""),
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
