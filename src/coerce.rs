//! Value coercions shared by elements and objects

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, SecondsFormat};

const TRUTHY: &[&str] = &["1", "true", "yes", "on"];

const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Parse a boolean string. `1`, `true`, `yes` and `on` (any case) are true,
/// everything else is false.
pub fn parse_bool(value: &str) -> bool {
    let value = value.trim();
    TRUTHY.iter().any(|t| t.eq_ignore_ascii_case(value))
}

/// Parse an unsigned pixel dimension. Returns `None` if unparseable.
pub fn parse_dimension(value: &str) -> Option<u32> {
    value.trim().parse().ok()
}

/// Parse an ISO-8601 style timestamp.
///
/// Values without an offset are taken as UTC, a bare date as midnight UTC.
/// Anything else yields `None`.
pub fn parse_datetime(value: &str) -> Option<DateTime<FixedOffset>> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt);
    }

    // Offsets without a colon, e.g. +0200
    if let Ok(dt) = DateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f%z") {
        return Some(dt);
    }

    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Some(naive.and_utc().fixed_offset());
        }
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc().fixed_offset())
}

/// Format a timestamp as ISO-8601 with a numeric offset (`2014-07-21T20:14:00+02:00`).
pub fn format_datetime(dt: &DateTime<FixedOffset>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Secs, false)
}
