//! Relative time formatting ("3 days ago")

use chrono::{DateTime, NaiveDateTime, Utc};

const MINUTE: u64 = 60;
const HOUR: u64 = MINUTE * 60;
const DAY: u64 = HOUR * 24;
const WEEK: u64 = DAY * 7;
const MONTH: u64 = DAY * 30;
const YEAR: u64 = DAY * 365;

/// Format `then` relative to `now`, e.g. `2 hours ago` or `1 week from now`
pub fn time_ago(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let delta = now.signed_duration_since(then).num_seconds();
    let suffix = if delta >= 0 { "ago" } else { "from now" };
    let seconds = delta.unsigned_abs();

    let (value, unit) = if seconds < MINUTE {
        (seconds, "second")
    } else if seconds < HOUR {
        (rounded(seconds, MINUTE), "minute")
    } else if seconds < DAY {
        (rounded(seconds, HOUR), "hour")
    } else if seconds < WEEK {
        (rounded(seconds, DAY), "day")
    } else if seconds < MONTH {
        (rounded(seconds, WEEK), "week")
    } else if seconds < YEAR {
        (rounded(seconds, MONTH), "month")
    } else {
        (rounded(seconds, YEAR), "year")
    };

    let plural = if value == 1 { "" } else { "s" };
    format!("{} {}{} {}", value, unit, plural, suffix)
}

/// Parse an ISO-8601 timestamp and format it relative to `now`
///
/// Timestamps without an offset are read as UTC. Returns `None` when the
/// timestamp does not parse.
pub fn time_ago_str(timestamp: &str, now: DateTime<Utc>) -> Option<String> {
    parse_timestamp(timestamp).map(|then| time_ago(then, now))
}

fn parse_timestamp(timestamp: &str) -> Option<DateTime<Utc>> {
    let timestamp = timestamp.trim();
    if let Ok(then) = DateTime::parse_from_rfc3339(timestamp) {
        return Some(then.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}

// Half-up rounding
fn rounded(seconds: u64, unit: u64) -> u64 {
    (seconds + unit / 2) / unit
}
