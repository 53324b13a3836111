//! Date display for work-experience ranges: `D/M/YYYY`, no zero padding.
//!
//! Values are calendar dates, not instants. `YYYY-MM-DD` is shown as written,
//! RFC 3339 timestamps in their own offset, so no value shifts across a
//! midnight boundary depending on where the server runs. Bare epoch
//! milliseconds are the one instant form and are read in UTC.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use tracing::warn;

/// Formats a raw date value as `D/M/YYYY`. Absent, empty or unparseable input yields "".
pub fn format_date(value: Option<&str>) -> String {
    let Some(raw) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        return String::new();
    };

    match parse_date(raw) {
        Some(date) => format!("{}/{}/{}", date.day(), date.month(), date.year()),
        None => {
            warn!("Unparseable date value '{raw}', rendering empty");
            String::new()
        }
    }
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(dt.date());
        }
    }
    // Month and year precision default to the first day.
    if let Ok(date) = NaiveDate::parse_from_str(&format!("{raw}-01"), "%Y-%m-%d") {
        return Some(date);
    }
    if !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    match raw.len() {
        4 => raw
            .parse::<i32>()
            .ok()
            .and_then(|year| NaiveDate::from_ymd_opt(year, 1, 1)),
        // Longer digit runs are epoch milliseconds, read on the UTC calendar.
        len if len > 4 => raw
            .parse::<i64>()
            .ok()
            .and_then(DateTime::from_timestamp_millis)
            .map(|dt| dt.date_naive()),
        _ => None,
    }
}
