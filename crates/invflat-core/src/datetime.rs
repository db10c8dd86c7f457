//! Tolerant parsing for invoice creation timestamps.
//!
//! The export carries creation timestamps as strings in a handful of
//! shapes. Anything unparseable maps to the missing sentinel (`None`)
//! rather than failing the record.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Date-time formats accepted before falling back to a bare date.
const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Parse a creation timestamp, substituting the missing sentinel on
/// failure.
///
/// Accepted shapes: RFC 3339 (offset normalized to UTC), `T`- or
/// space-separated date-times with optional fractional seconds, and bare
/// `YYYY-MM-DD` dates (midnight).
///
/// # Examples
///
/// ```
/// use invflat_core::datetime::parse_created_on;
///
/// assert!(parse_created_on("2023-01-01").is_some());
/// assert!(parse_created_on("2023-01-01T10:30:00").is_some());
/// assert!(parse_created_on("not a date").is_none());
/// ```
pub fn parse_created_on(value: &str) -> Option<NaiveDateTime> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(parsed.naive_utc());
    }
    for format in DATETIME_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(parsed);
        }
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}
