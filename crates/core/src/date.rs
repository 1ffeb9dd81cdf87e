// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Resolution of loosely-typed tracker date values.
//!
//! Date fields are untrusted input: anything that is not a well-formed
//! calendar date resolves to `None` instead of an error.

use chrono::{Local, NaiveDate};
use serde_json::{Map, Value};

const ISO_DATE_LEN: usize = 10;

/// Source of "today" for timeline calculations.
pub trait DateSource {
    /// Returns the current calendar date.
    fn today(&self) -> NaiveDate;
}

/// Local system calendar.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemDate;

impl DateSource for SystemDate {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A fixed date, for reproducible builds of the timeline.
#[derive(Debug, Clone, Copy)]
pub struct FixedDate(pub NaiveDate);

impl DateSource for FixedDate {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Resolves the field `field_id` of a field bag to a calendar date.
pub fn parse_date_field(fields: &Map<String, Value>, field_id: &str) -> Option<NaiveDate> {
    fields.get(field_id).and_then(parse_date_value)
}

/// Resolves a single JSON value to a calendar date.
///
/// Timestamps are accepted by looking only at their leading `YYYY-MM-DD`.
pub fn parse_date_value(value: &Value) -> Option<NaiveDate> {
    let text = match value {
        Value::Null | Value::Bool(false) => return None,
        Value::String(s) if s.is_empty() => return None,
        Value::Number(n) if n.as_f64() == Some(0.0) => return None,
        Value::Array(a) if a.is_empty() => return None,
        Value::Object(o) if o.is_empty() => return None,
        Value::String(s) => s.clone(),
        other => other.to_string(),
    };
    let head: String = text.chars().take(ISO_DATE_LEN).collect();
    parse_iso_date(&head)
}

/// Strict `YYYY-MM-DD` parse: exactly four, two and two ASCII digits.
pub fn parse_iso_date(s: &str) -> Option<NaiveDate> {
    let bytes = s.as_bytes();
    if bytes.len() != ISO_DATE_LEN || bytes[4] != b'-' || bytes[7] != b'-' {
        return None;
    }
    let digits_ok = bytes
        .iter()
        .enumerate()
        .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());
    if !digits_ok {
        return None;
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

#[cfg(test)]
#[path = "date_tests.rs"]
mod tests;
