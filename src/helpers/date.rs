//! Date helper functions

use chrono::{NaiveDate, NaiveDateTime};

/// Normalize a raw date string for display as `YYYY-MM-DD`.
///
/// A value that does not parse as a date falls back to its first ten
/// characters verbatim, never to an "invalid date" stand-in. Empty input
/// stays empty.
pub fn display_date(raw: &str) -> String {
    let raw = raw.trim();
    if raw.is_empty() {
        return String::new();
    }

    match parse_date_string(raw) {
        Some(date) => date.format("%Y-%m-%d").to_string(),
        None => raw.chars().take(10).collect(),
    }
}

/// Parse a date string in the formats content authors actually use
fn parse_date_string(s: &str) -> Option<NaiveDate> {
    let formats = [
        "%Y-%m-%d %H:%M:%S",
        "%Y/%m/%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y/%m/%d %H:%M",
        "%Y-%m-%d",
        "%Y/%m/%d",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
    ];

    for fmt in formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.date());
        }
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Some(d);
        }
    }

    // Try RFC 3339 / ISO 8601 with an offset
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }

    None
}
