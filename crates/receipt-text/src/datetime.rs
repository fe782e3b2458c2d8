//! Date/time parsing and receipt-style formatting
//!
//! Parsing never consults the host time zone: inputs carrying an offset keep
//! their own wall-clock time, epoch timestamps are read as UTC.

use crate::{Result, TextError};
use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Layouts tried (in order) for inputs without an offset
const NAIVE_PATTERNS: [&str; 3] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
];

/// Output style for a parsed date/time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateTimeStyle {
    /// `1/22/2025, 2:30:00 PM`
    DateTime,
    /// `1/22/2025`
    Date,
    /// `2:30:00 PM`
    Time,
}

impl DateTimeStyle {
    /// Look up a style by its template name (`datetime`, `date`, `time`)
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "datetime" => Some(DateTimeStyle::DateTime),
            "date" => Some(DateTimeStyle::Date),
            "time" => Some(DateTimeStyle::Time),
            _ => None,
        }
    }

    fn pattern(self) -> &'static str {
        match self {
            DateTimeStyle::DateTime => "%-m/%-d/%Y, %-I:%M:%S %p",
            DateTimeStyle::Date => "%-m/%-d/%Y",
            DateTimeStyle::Time => "%-I:%M:%S %p",
        }
    }
}

/// Parse a date/time string
///
/// Accepts RFC 3339 (`2025-01-22T14:30:00+07:00`), `YYYY-MM-DD HH:MM:SS`,
/// `YYYY-MM-DDTHH:MM:SS` (both with optional fractional seconds),
/// `YYYY-MM-DDTHH:MM` and a bare `YYYY-MM-DD` (midnight).
pub fn parse_datetime(input: &str) -> Result<NaiveDateTime> {
    let input = input.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Ok(dt.naive_local());
    }

    for pattern in NAIVE_PATTERNS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(input, pattern) {
            return Ok(dt);
        }
    }

    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .ok_or_else(|| TextError::InvalidDateTime(input.to_string()))
}

/// Convert milliseconds since the Unix epoch to a UTC date/time
pub fn from_epoch_millis(millis: i64) -> Result<NaiveDateTime> {
    DateTime::from_timestamp_millis(millis)
        .map(|dt| dt.naive_utc())
        .ok_or_else(|| TextError::InvalidDateTime(millis.to_string()))
}

/// Format a date/time in the given style
pub fn format_datetime(dt: &NaiveDateTime, style: DateTimeStyle) -> String {
    dt.format(style.pattern()).to_string()
}
