//! Timestamp normalization and UTC calendar extraction.
//!
//! Every public formatter accepts anything convertible into a
//! [`TimestampInput`] and funnels it through [`normalize_timestamp`], so the
//! formatting algorithms only ever see plain Unix seconds. Calendar math is
//! UTC-only: [`CalendarParts`] never consults a local time zone.

use std::time::SystemTime;

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, TimeZone, Utc};
use tracing::debug;

use crate::error::{Result, WhenwordsError};

/// A timestamp-like value accepted at the public boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum TimestampInput {
    /// Unix seconds. Fractional values are carried through unchanged.
    Seconds(f64),
    /// ISO 8601 text, e.g. `"2024-03-15T12:00:00Z"` or `"2024-03-15"`.
    Text(String),
    /// A date/time value.
    DateTime(DateTime<Utc>),
}

impl From<i64> for TimestampInput {
    fn from(secs: i64) -> Self {
        TimestampInput::Seconds(secs as f64)
    }
}

impl From<i32> for TimestampInput {
    fn from(secs: i32) -> Self {
        TimestampInput::Seconds(f64::from(secs))
    }
}

impl From<u32> for TimestampInput {
    fn from(secs: u32) -> Self {
        TimestampInput::Seconds(f64::from(secs))
    }
}

impl From<f64> for TimestampInput {
    fn from(secs: f64) -> Self {
        TimestampInput::Seconds(secs)
    }
}

impl From<&str> for TimestampInput {
    fn from(text: &str) -> Self {
        TimestampInput::Text(text.to_string())
    }
}

impl From<String> for TimestampInput {
    fn from(text: String) -> Self {
        TimestampInput::Text(text)
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for TimestampInput {
    fn from(dt: DateTime<Tz>) -> Self {
        TimestampInput::DateTime(dt.with_timezone(&Utc))
    }
}

impl From<SystemTime> for TimestampInput {
    fn from(t: SystemTime) -> Self {
        TimestampInput::DateTime(DateTime::<Utc>::from(t))
    }
}

/// Coerce a timestamp-like input into Unix seconds.
///
/// Numeric input passes through unchanged. Text is parsed as ISO 8601 and
/// date/time values are converted; both yield whole seconds, floored.
///
/// # Errors
///
/// Returns [`WhenwordsError::InvalidTimestamp`] for unparseable text, for an
/// impossible calendar date (`"2024-02-30"`), or for a non-finite number.
///
/// # Examples
///
/// ```
/// use whenwords::normalize_timestamp;
///
/// assert_eq!(normalize_timestamp(1_700_000_000).unwrap(), 1_700_000_000.0);
/// assert_eq!(normalize_timestamp("1970-01-02").unwrap(), 86_400.0);
/// ```
pub fn normalize_timestamp(input: impl Into<TimestampInput>) -> Result<f64> {
    match input.into() {
        TimestampInput::Seconds(secs) if secs.is_finite() => Ok(secs),
        TimestampInput::Seconds(secs) => {
            debug!(input = secs, "rejecting non-finite timestamp");
            Err(WhenwordsError::InvalidTimestamp(secs.to_string()))
        }
        TimestampInput::Text(text) => parse_iso8601(&text).map(epoch_seconds),
        TimestampInput::DateTime(dt) => Ok(epoch_seconds(dt)),
    }
}

/// Whole Unix seconds for an instant (floor of the millisecond value).
fn epoch_seconds(dt: DateTime<Utc>) -> f64 {
    dt.timestamp_millis().div_euclid(1000) as f64
}

/// Date-time layouts without an offset; read as UTC.
const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Date-time layouts carrying a numeric offset, extended (`+02:00`) or
/// basic (`+0200`, `+02`).
const OFFSET_FORMATS: [&str; 6] = [
    "%Y-%m-%dT%H:%M:%S%.f%:z",
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%dT%H:%M:%S%.f%#z",
    "%Y-%m-%dT%H:%M%:z",
    "%Y-%m-%dT%H:%M%z",
    "%Y-%m-%dT%H:%M%#z",
];

/// Parse the ISO 8601 shapes we accept. Offset-less forms are read as UTC.
fn parse_iso8601(text: &str) -> Result<DateTime<Utc>> {
    let s = text.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }

    for fmt in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(s, fmt) {
            return Ok(dt.with_timezone(&Utc));
        }
    }

    // A trailing `Z` is UTC; otherwise there is no offset at all.
    let body = s.strip_suffix(['Z', 'z']).unwrap_or(s);
    for fmt in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(body, fmt) {
            return Ok(naive.and_utc());
        }
    }

    if let Some(midnight) = parse_calendar_date(s).and_then(|d| d.and_hms_opt(0, 0, 0)) {
        return Ok(midnight.and_utc());
    }

    debug!(input = text, "rejecting unparseable timestamp text");
    Err(WhenwordsError::InvalidTimestamp(text.to_string()))
}

/// `YYYY-MM-DD`, or the reduced `YYYY-MM` (first of the month) and `YYYY`
/// (January 1).
fn parse_calendar_date(s: &str) -> Option<NaiveDate> {
    let bytes = s.as_bytes();
    let full = match bytes.len() {
        10 => s.to_string(),
        7 if bytes[4] == b'-' => format!("{s}-01"),
        4 if bytes.iter().all(u8::is_ascii_digit) => format!("{s}-01-01"),
        _ => return None,
    };
    NaiveDate::parse_from_str(&full, "%Y-%m-%d").ok()
}

/// Normalize a timestamp and an optional reference; the reference defaults
/// to the timestamp itself.
pub(crate) fn normalize_pair(
    timestamp: TimestampInput,
    reference: Option<TimestampInput>,
) -> Result<(f64, f64)> {
    let ts = normalize_timestamp(timestamp)?;
    let reference = match reference {
        Some(r) => normalize_timestamp(r)?,
        None => ts,
    };
    Ok((ts, reference))
}

// ── Calendar parts ──────────────────────────────────────────────────────────

/// The UTC calendar fields of a timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarParts {
    pub year: i32,
    /// 0 = January.
    pub month: u32,
    /// Day of month, 1-based.
    pub day: u32,
    /// 0 = Sunday.
    pub weekday: u32,
}

impl CalendarParts {
    /// Extract UTC calendar fields from Unix seconds. Sub-second precision is
    /// floored away.
    ///
    /// # Errors
    ///
    /// Returns [`WhenwordsError::InvalidTimestamp`] when the instant is outside
    /// the range chrono can represent.
    pub fn from_timestamp(secs: f64) -> Result<Self> {
        let whole = secs.floor();
        let dt = if whole >= i64::MIN as f64 && whole < i64::MAX as f64 {
            DateTime::<Utc>::from_timestamp(whole as i64, 0)
        } else {
            None
        };
        let dt = dt.ok_or_else(|| {
            debug!(input = secs, "timestamp outside representable calendar range");
            WhenwordsError::InvalidTimestamp(secs.to_string())
        })?;

        Ok(Self {
            year: dt.year(),
            month: dt.month0(),
            day: dt.day(),
            weekday: dt.weekday().num_days_from_sunday(),
        })
    }

    /// True when both fall on the same UTC calendar day.
    pub fn same_day(&self, other: &Self) -> bool {
        self.year == other.year && self.month == other.month && self.day == other.day
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
