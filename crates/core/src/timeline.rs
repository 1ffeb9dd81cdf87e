// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Date ranges for initiatives and the overall visualization window.

use chrono::{Datelike, Days, Months, NaiveDate};

/// Months the timeline must reach past today.
const LOOKAHEAD_MONTHS: u32 = 9;

/// An optional start/end pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        DateRange { start, end }
    }

    /// Derives an initiative's range from its epics' ranges.
    ///
    /// A boundary is known only when every epic has it: a single
    /// unscheduled epic makes the initiative's boundary unknown. No epics
    /// means no range at all.
    pub fn covering<I>(epics: I) -> Self
    where
        I: IntoIterator<Item = DateRange>,
    {
        let ranges: Vec<DateRange> = epics.into_iter().collect();
        if ranges.is_empty() {
            return DateRange::default();
        }
        let start = ranges.iter().map(|r| r.start).collect::<Option<Vec<_>>>().and_then(|s| s.into_iter().min());
        let end = ranges.iter().map(|r| r.end).collect::<Option<Vec<_>>>().and_then(|e| e.into_iter().max());
        DateRange { start, end }
    }
}

/// The [start, end] window used to scale the visualization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelineBounds {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// Every known date seen while building the roadmap.
#[derive(Debug, Clone, Default)]
pub struct DatePool(Vec<NaiveDate>);

impl DatePool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the known boundaries of a range.
    pub fn add_range(&mut self, range: DateRange) {
        self.0.extend(range.start);
        self.0.extend(range.end);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Computes the padded timeline window relative to `today`.
    ///
    /// Falls back to the current calendar year when no dates were seen,
    /// extends the end to at least nine months out, then pads both ends
    /// outward to whole months.
    pub fn bounds(&self, today: NaiveDate) -> TimelineBounds {
        let (start, end) = match (self.0.iter().min(), self.0.iter().max()) {
            (Some(min), Some(max)) => (*min, *max),
            _ => (
                NaiveDate::from_ymd_opt(today.year(), 1, 1).unwrap_or(today),
                NaiveDate::from_ymd_opt(today.year(), 12, 31).unwrap_or(today),
            ),
        };
        let end = end.max(months_out(today, LOOKAHEAD_MONTHS));
        TimelineBounds { start: first_of_previous_month(start), end: first_of_next_month(end) }
    }
}

/// First day of the month containing `date`.
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date - Days::new(u64::from(date.day0()))
}

/// Day 1 of the month `months` after today's month.
pub fn months_out(today: NaiveDate, months: u32) -> NaiveDate {
    let first = first_of_month(today);
    first.checked_add_months(Months::new(months)).unwrap_or(first)
}

/// Day 1 of the month before the one containing `date`.
pub fn first_of_previous_month(date: NaiveDate) -> NaiveDate {
    first_of_month(first_of_month(date) - Days::new(1))
}

/// Day 1 of the month after the one containing `date`.
///
/// Day 28 exists in every month and day 28 + 5 always lands in the next one.
pub fn first_of_next_month(date: NaiveDate) -> NaiveDate {
    let day_28 = first_of_month(date) + Days::new(27);
    first_of_month(day_28 + Days::new(5))
}

#[cfg(test)]
#[path = "timeline_tests.rs"]
mod tests;
