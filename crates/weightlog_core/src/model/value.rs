//! Numeric and calendar-date validity predicates.
//!
//! Every derivation reads record text through these helpers so "is this a
//! value" has exactly one definition.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];
const DATE_TIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f"];

/// Returns trimmed text when it carries any content.
pub fn non_empty(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|value| !value.is_empty())
}

/// Parses a numeric field.
///
/// Returns `Some` only when the trimmed text is non-empty and parses to a
/// finite `f64`. `"abc"`, `""`, `"NaN"` and `"inf"` are all `None`.
pub fn parse_numeric(raw: Option<&str>) -> Option<f64> {
    non_empty(raw)?
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Parses a calendar date.
///
/// Accepts `YYYY-MM-DD`, `YYYY/MM/DD`, `MM/DD/YYYY` and timestamps whose date
/// part is ISO-8601 (RFC 3339 or naive `YYYY-MM-DDTHH:MM:SS`). The date is
/// taken as written; no timezone shifting is applied.
pub fn parse_calendar_date(raw: Option<&str>) -> Option<NaiveDate> {
    let text = non_empty(raw)?;

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(text, format) {
            return Some(date);
        }
    }
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(text) {
        return Some(timestamp.date_naive());
    }
    DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
        .map(|timestamp| timestamp.date())
}
