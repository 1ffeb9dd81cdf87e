// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod config;
pub mod demo;
pub mod fetch;
pub mod link_types;

use std::io::Write;

use rm_core::RoadmapResult;

use crate::cli::OutputFormat;
use crate::display::render_roadmap;
use crate::error::Result;

/// Write a roadmap in the requested format.
pub fn print_roadmap(out: &mut impl Write, roadmap: &RoadmapResult, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => write!(out, "{}", render_roadmap(roadmap))?,
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(roadmap)?)?,
    }
    Ok(())
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
