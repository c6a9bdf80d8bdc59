//! Instant parsing and day/hour geometry helpers.
//!
//! Every helper here works on UTC calendar days: a day runs from
//! `00:00:00.000` to `23:59:59.999` UTC.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, SecondsFormat, TimeDelta, Utc};

use crate::error::{LayoutError, Result};

const MS_PER_HOUR: f64 = 3_600_000.0;
const MS_PER_DAY: i64 = 86_400_000;

/// Naive formats accepted after RFC 3339 fails, interpreted as UTC.
const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S%.f"];

/// Parse an ISO 8601 datetime string into `DateTime<Utc>`.
///
/// Accepts RFC 3339 with any offset (e.g. "2024-01-01T22:00:00+02:00"), which is
/// normalized to UTC, and naive datetimes (e.g. "2024-01-01T22:00" or
/// "2024-01-01T22:00:00.500"), which are taken to be UTC already.
pub fn parse_instant(s: &str) -> Result<DateTime<Utc>> {
    let trimmed = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.with_timezone(&Utc));
    }

    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
        .map(|ndt| ndt.and_utc())
        .ok_or_else(|| LayoutError::InvalidInstant {
            value: s.to_string(),
            reason: "expected RFC 3339 or YYYY-MM-DDTHH:MM[:SS[.fff]]".to_string(),
        })
}

/// Parse a calendar date in `YYYY-MM-DD` form.
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| LayoutError::InvalidDate(s.to_string()))
}

/// Format an instant as RFC 3339 with millisecond precision and a `Z` suffix.
pub fn format_instant(dt: DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// `00:00:00.000` UTC on `date`.
pub fn start_of_day(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

/// `23:59:59.999` UTC on `date`.
pub fn end_of_day(date: NaiveDate) -> DateTime<Utc> {
    start_of_day(date) + TimeDelta::milliseconds(MS_PER_DAY - 1)
}

/// Fractional hours elapsed since UTC midnight of the instant's own day.
pub fn hours_since_midnight(dt: DateTime<Utc>) -> f64 {
    hours_between(start_of_day(dt.date_naive()), dt)
}

/// Fractional hours from `start` to `end`, at millisecond resolution.
pub fn hours_between(start: DateTime<Utc>, end: DateTime<Utc>) -> f64 {
    (end - start).num_milliseconds() as f64 / MS_PER_HOUR
}

/// Serde adapter for `startTime`/`endTime` fields.
///
/// Deserializes with [`parse_instant`] and serializes with [`format_instant`].
pub mod serde_instant {
    use chrono::{DateTime, Utc};
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        dt: &DateTime<Utc>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_instant(*dt))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_instant(&raw).map_err(de::Error::custom)
    }
}
