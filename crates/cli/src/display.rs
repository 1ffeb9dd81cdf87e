// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::fmt::Write;

use chrono::NaiveDate;
use rm_core::{ChildProgress, EdgeSet, RoadmapResult};

/// Format a date range, using `?` for an unknown boundary.
pub fn format_range(start: Option<NaiveDate>, end: Option<NaiveDate>) -> String {
    match (start, end) {
        (None, None) => "unscheduled".to_string(),
        (start, end) => format!("{} .. {}", format_date(start), format_date(end)),
    }
}

fn format_date(date: Option<NaiveDate>) -> String {
    date.map_or_else(|| "?".to_string(), |d| d.format("%Y-%m-%d").to_string())
}

/// Summarize child item progress for an epic.
pub fn format_progress(progress: &ChildProgress) -> String {
    if progress.total == 0 {
        return "no items".to_string();
    }
    let mut out = format!("{}/{} done", progress.done, progress.total);
    if progress.in_progress > 0 {
        let _ = write!(out, ", {} in progress", progress.in_progress);
    }
    if progress.cancelled > 0 {
        let _ = write!(out, ", {} cancelled", progress.cancelled);
    }
    out
}

fn write_edges(out: &mut String, title: &str, edges: &EdgeSet) {
    if edges.is_empty() {
        return;
    }
    let _ = writeln!(out, "\n{}:", title);
    for edge in edges {
        let _ = writeln!(out, "  {} -> {}", edge.from, edge.to);
    }
}

/// Render a roadmap as an indented text outline.
pub fn render_roadmap(roadmap: &RoadmapResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Query:    {}", roadmap.query);
    let _ = writeln!(
        out,
        "Timeline: {} .. {}",
        roadmap.timeline_start.format("%Y-%m-%d"),
        roadmap.timeline_end.format("%Y-%m-%d")
    );

    for initiative in &roadmap.initiatives {
        let _ = writeln!(
            out,
            "\n{}: {} [{}]  {}",
            initiative.key,
            initiative.title,
            initiative.status,
            format_range(initiative.start_date, initiative.end_date)
        );
        if initiative.epics.is_empty() {
            let _ = writeln!(out, "  (no epics)");
        }
        for epic in &initiative.epics {
            let _ = writeln!(
                out,
                "  {}: {} [{}]  {}  ({})",
                epic.key,
                epic.title,
                epic.status,
                format_range(epic.start_date, epic.end_date),
                format_progress(&epic.progress)
            );
        }
    }

    write_edges(&mut out, "Initiative dependencies", &roadmap.initiative_deps);
    write_edges(&mut out, "Epic dependencies", &roadmap.epic_deps);

    if !roadmap.project_names.is_empty() {
        let _ = writeln!(out, "\nProjects:");
        for (prefix, name) in &roadmap.project_names {
            let _ = writeln!(out, "  {}: {}", prefix, name);
        }
    }
    out
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
