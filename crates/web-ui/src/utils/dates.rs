//! Date parsing and French display formatting

use chrono::{DateTime, Datelike, NaiveDate, Utc};

/// Placeholder rendered when a date cannot be interpreted
pub const UNKNOWN_DATE: &str = "Date inconnue";

/// French month names, indexed by zero-based month number
const MONTH_NAMES: [&str; 12] = [
    "janvier",
    "février",
    "mars",
    "avril",
    "mai",
    "juin",
    "juillet",
    "août",
    "septembre",
    "octobre",
    "novembre",
    "décembre",
];

/// Parse an ISO calendar date (`YYYY-MM-DD`; single-digit day and month are
/// accepted, the moderation fixtures use them)
pub fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

/// Format an ISO date as a French long date, e.g. "9 mai 2025".
///
/// Fails closed: empty or malformed input renders the placeholder rather
/// than an invalid-date artifact.
pub fn format_long_date(value: &str) -> String {
    match parse_iso_date(value) {
        Some(date) => {
            let month = MONTH_NAMES[date.month0() as usize];
            format!("{} {} {}", date.day(), month, date.year())
        }
        None => UNKNOWN_DATE.to_string(),
    }
}

/// Whole days between the given date and now, rounded up, never negative.
/// Unparseable input counts as zero days.
pub fn days_since(value: &str) -> u32 {
    days_since_at(value, Utc::now())
}

/// `days_since` against an explicit reference instant
pub fn days_since_at(value: &str, now: DateTime<Utc>) -> u32 {
    let Some(date) = parse_iso_date(value) else {
        return 0;
    };
    let Some(midnight) = date.and_hms_opt(0, 0, 0) else {
        return 0;
    };
    let seconds = (now - midnight.and_utc()).num_seconds().unsigned_abs();
    seconds.div_ceil(86_400) as u32
}
