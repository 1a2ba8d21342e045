//! Relative time phrasing: "3 hours ago", "in 2 days", "just now".

use crate::error::Result;
use crate::timestamp::{normalize_pair, TimestampInput};

const MINUTE: f64 = 60.0;
const HOUR: f64 = 3_600.0;
const DAY: f64 = 86_400.0;
const MONTH: f64 = 30.0 * DAY;
const YEAR: f64 = 365.0 * DAY;

/// What a threshold bucket renders as.
#[derive(Debug, Clone, Copy)]
enum Phrase {
    JustNow,
    /// A fixed count of one unit.
    Single(&'static str),
    /// `round_half_up(diff / divisor)` of the unit.
    Rounded(&'static str, f64),
}

/// Ordered `(exclusive upper bound, phrase)` buckets; first match wins.
const THRESHOLDS: [(f64, Phrase); 11] = [
    (45.0, Phrase::JustNow),
    (90.0, Phrase::Single("minute")),
    (45.0 * MINUTE, Phrase::Rounded("minute", MINUTE)),
    (90.0 * MINUTE, Phrase::Single("hour")),
    (22.0 * HOUR, Phrase::Rounded("hour", HOUR)),
    (36.0 * HOUR, Phrase::Single("day")),
    (26.0 * DAY, Phrase::Rounded("day", DAY)),
    (46.0 * DAY, Phrase::Single("month")),
    (320.0 * DAY, Phrase::Rounded("month", MONTH)),
    (548.0 * DAY, Phrase::Single("year")),
    (f64::INFINITY, Phrase::Rounded("year", YEAR)),
];

/// Describe `timestamp` relative to `reference`.
///
/// # Examples
///
/// ```
/// use whenwords::timeago;
///
/// assert_eq!(timeago(0, 10_800).unwrap(), "3 hours ago");
/// assert_eq!(timeago(10_800, 0).unwrap(), "in 3 hours");
/// assert_eq!(timeago(100, 120).unwrap(), "just now");
/// ```
///
/// # Errors
///
/// Returns [`WhenwordsError::InvalidTimestamp`](crate::WhenwordsError::InvalidTimestamp)
/// if either input cannot be normalized.
pub fn timeago(
    timestamp: impl Into<TimestampInput>,
    reference: impl Into<TimestampInput>,
) -> Result<String> {
    let (ts, reference) = normalize_pair(timestamp.into(), Some(reference.into()))?;
    Ok(describe(ts, reference))
}

/// [`timeago`] with the reference omitted: the timestamp is compared with
/// itself, so any valid input yields `"just now"`.
pub fn timeago_unanchored(timestamp: impl Into<TimestampInput>) -> Result<String> {
    let (ts, reference) = normalize_pair(timestamp.into(), None)?;
    Ok(describe(ts, reference))
}

fn describe(ts: f64, reference: f64) -> String {
    let diff = (reference - ts).abs();
    let is_future = ts > reference;

    let phrase = THRESHOLDS
        .iter()
        .find(|(upper, _)| diff < *upper)
        .map(|(_, phrase)| *phrase)
        .unwrap_or(Phrase::Rounded("year", YEAR));

    let (count, unit) = match phrase {
        Phrase::JustNow => return "just now".to_string(),
        Phrase::Single(unit) => (1, unit),
        Phrase::Rounded(unit, divisor) => (round_half_up(diff / divisor), unit),
    };

    let plural = if count == 1 { "" } else { "s" };
    if is_future {
        format!("in {count} {unit}{plural}")
    } else {
        format!("{count} {unit}{plural} ago")
    }
}

/// Half-up rounding: 2.5 → 3.
pub(crate) fn round_half_up(n: f64) -> i64 {
    (n + 0.5).floor() as i64
}

// ── Tests ───────────────────────────────────────────────────────────────────
