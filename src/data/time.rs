//! Timestamp parsing and relative time labels.

use chrono::{DateTime, Local, NaiveDateTime, TimeDelta, Utc};

/// Naive formats the backend has been seen to emit (Python `isoformat()`).
const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S%.f"];

/// Parse an ISO-8601 timestamp.
///
/// Values carrying an offset are converted to UTC; values without one are
/// taken to already be UTC. Returns `None` for anything unparseable.
pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }

    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .map(|naive| naive.and_utc())
}

/// Human-friendly age of `timestamp` relative to `now`.
///
/// `"just now"` under a minute, then minutes, hours and days up to a week,
/// after which the local calendar date is shown.
pub fn relative_time(timestamp: Option<DateTime<Utc>>, now: DateTime<Utc>) -> String {
    let Some(ts) = timestamp else {
        return "Unknown".to_string();
    };

    let age = now.signed_duration_since(ts);
    if age < TimeDelta::minutes(1) {
        "just now".to_string()
    } else if age < TimeDelta::hours(1) {
        format!("{}m ago", age.num_minutes())
    } else if age < TimeDelta::days(1) {
        format!("{}h ago", age.num_hours())
    } else if age < TimeDelta::days(7) {
        format!("{}d ago", age.num_days())
    } else {
        calendar_date(ts)
    }
}

/// Local calendar date, e.g. `2024-05-01`.
pub fn calendar_date(ts: DateTime<Utc>) -> String {
    ts.with_timezone(&Local).format("%Y-%m-%d").to_string()
}

/// Full local timestamp, shown as the detail of a relative label.
pub fn full_timestamp(timestamp: Option<DateTime<Utc>>) -> String {
    match timestamp {
        Some(ts) => ts.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S").to_string(),
        None => "Unknown".to_string(),
    }
}
