use chrono::{DateTime, Datelike, NaiveDateTime, TimeZone};

use crate::error::{Error, Result};

/// Naive calendar date-time. Timezone effects enter only through the
/// longitude terms of [`crate::angles::solar_time`].
pub type Instant = NaiveDateTime;

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];

/// 1-based day of year (Jan 1 = 1).
pub fn day_of_year(instant: Instant) -> i32 {
    instant.ordinal() as i32
}

/// Whole days elapsed since Jan 1 00:00 of the same year (Jan 1 = 0).
pub fn days_since_new_year(instant: Instant) -> i32 {
    instant.ordinal0() as i32
}

/// Reads a calendar instant from text.
///
/// Accepts `YYYY-MM-DD HH:MM:SS`, the `T`-separated form, and RFC 3339 with
/// an offset. An offset is dropped and the wall-clock reading kept.
pub fn parse_instant(text: &str) -> Result<Instant> {
    let trimmed = text.trim();
    for format in NAIVE_FORMATS {
        if let Ok(instant) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(instant);
        }
    }
    DateTime::parse_from_rfc3339(trimmed)
        .map(|dt| dt.naive_local())
        .map_err(|_| Error::TypeMismatch {
            input: text.to_string(),
        })
}

/// Wall-clock reading of a zone-aware date-time.
pub fn from_zoned<Tz: TimeZone>(dt: &DateTime<Tz>) -> Instant {
    dt.naive_local()
}
