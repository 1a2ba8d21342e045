//! Contextual date phrasing ("Yesterday", "Last Friday", "March 5, 2024")
//! and date ranges with smart abbreviation. All calendar math is UTC.

use crate::error::Result;
use crate::timestamp::{normalize_pair, normalize_timestamp, CalendarParts, TimestampInput};

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Range separator between two dates (en dash).
const EN_DASH: char = '\u{2013}';

const WEEKDAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Describe `timestamp` as a date in the context of `reference`.
///
/// In order of precedence: `"Today"`, `"Yesterday"` / `"Tomorrow"`,
/// `"Last <Weekday>"` for 2–6 days back, `"This <Weekday>"` for 2–6 days
/// ahead, `"<Month> <Day>"` within the same year, else
/// `"<Month> <Day>, <Year>"`.
///
/// # Examples
///
/// ```
/// use whenwords::human_date;
///
/// // 2024-03-15 (Friday) relative to 2024-03-18 (Monday)
/// assert_eq!(human_date("2024-03-15", "2024-03-18").unwrap(), "Last Friday");
/// assert_eq!(human_date("2024-03-17", "2024-03-18").unwrap(), "Yesterday");
/// assert_eq!(human_date("2023-12-25", "2024-03-18").unwrap(), "December 25, 2023");
/// ```
///
/// # Errors
///
/// Returns [`WhenwordsError::InvalidTimestamp`](crate::WhenwordsError::InvalidTimestamp)
/// if either input cannot be normalized.
pub fn human_date(
    timestamp: impl Into<TimestampInput>,
    reference: impl Into<TimestampInput>,
) -> Result<String> {
    let (ts, reference) = normalize_pair(timestamp.into(), Some(reference.into()))?;
    describe(ts, reference)
}

/// [`human_date`] with the reference omitted; any valid input is `"Today"`.
pub fn human_date_unanchored(timestamp: impl Into<TimestampInput>) -> Result<String> {
    let (ts, reference) = normalize_pair(timestamp.into(), None)?;
    describe(ts, reference)
}

fn describe(ts: f64, reference: f64) -> Result<String> {
    let target = CalendarParts::from_timestamp(ts)?;
    let anchor = CalendarParts::from_timestamp(reference)?;
    let days_diff = ((reference - ts) / SECONDS_PER_DAY).floor() as i64;
    let same_month = target.year == anchor.year && target.month == anchor.month;

    if target.same_day(&anchor) {
        return Ok("Today".to_string());
    }
    if days_diff == 1 && same_month && target.day + 1 == anchor.day {
        return Ok("Yesterday".to_string());
    }
    if days_diff == -1 && same_month && target.day == anchor.day + 1 {
        return Ok("Tomorrow".to_string());
    }
    if (2..7).contains(&days_diff) {
        return Ok(format!("Last {}", weekday_back(anchor.weekday, days_diff)));
    }
    if (-6..=-2).contains(&days_diff) {
        return Ok(format!("This {}", weekday_back(anchor.weekday, days_diff)));
    }
    if target.year == anchor.year {
        return Ok(month_day(&target));
    }
    Ok(full_date(&target))
}

/// Format a date range, abbreviating shared month and year.
///
/// Endpoints are swapped if given in reverse order.
///
/// # Examples
///
/// ```
/// use whenwords::date_range;
///
/// assert_eq!(date_range("2024-03-15", "2024-03-20").unwrap(), "March 15–20, 2024");
/// assert_eq!(date_range("2024-03-28", "2024-04-02").unwrap(), "March 28 – April 2, 2024");
/// assert_eq!(
///     date_range("2023-12-28", "2024-01-02").unwrap(),
///     "December 28, 2023 – January 2, 2024"
/// );
/// ```
///
/// # Errors
///
/// Returns [`WhenwordsError::InvalidTimestamp`](crate::WhenwordsError::InvalidTimestamp)
/// if either endpoint cannot be normalized.
pub fn date_range(
    start: impl Into<TimestampInput>,
    end: impl Into<TimestampInput>,
) -> Result<String> {
    let mut start = normalize_timestamp(start)?;
    let mut end = normalize_timestamp(end)?;
    if start > end {
        std::mem::swap(&mut start, &mut end);
    }

    let first = CalendarParts::from_timestamp(start)?;
    let last = CalendarParts::from_timestamp(end)?;

    let formatted = if first.same_day(&last) {
        full_date(&first)
    } else if first.year == last.year && first.month == last.month {
        format!("{}{EN_DASH}{}, {}", month_day(&first), last.day, last.year)
    } else if first.year == last.year {
        format!(
            "{} {EN_DASH} {}, {}",
            month_day(&first),
            month_day(&last),
            last.year
        )
    } else {
        format!("{} {EN_DASH} {}", full_date(&first), full_date(&last))
    };
    Ok(formatted)
}

// ── Formatting helpers ──────────────────────────────────────────────────────

/// Name of the weekday `days_back` days before `weekday` (0 = Sunday).
/// Negative `days_back` walks forward.
fn weekday_back(weekday: u32, days_back: i64) -> &'static str {
    WEEKDAY_NAMES[(i64::from(weekday) - days_back).rem_euclid(7) as usize]
}

fn month_name(parts: &CalendarParts) -> &'static str {
    MONTH_NAMES[parts.month as usize]
}

/// "March 5"
fn month_day(parts: &CalendarParts) -> String {
    format!("{} {}", month_name(parts), parts.day)
}

/// "March 5, 2024"
fn full_date(parts: &CalendarParts) -> String {
    format!("{}, {}", month_day(parts), parts.year)
}

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // 2024-03-15T12:00:00Z, a Friday
    const FRI_NOON: i64 = 1_710_504_000;
    const DAY: i64 = 86_400;

    // ── human_date tests ────────────────────────────────────────────────

    #[test]
    fn test_same_day_is_today() {
        assert_eq!(human_date(FRI_NOON, FRI_NOON).unwrap(), "Today");
        assert_eq!(human_date_unanchored(FRI_NOON).unwrap(), "Today");
        // start and end of the same UTC day
        assert_eq!(
            human_date("2024-03-15T00:00:00Z", "2024-03-15T23:59:59Z").unwrap(),
            "Today"
        );
    }

    #[test]
    fn test_yesterday_and_tomorrow() {
        assert_eq!(human_date(FRI_NOON - DAY, FRI_NOON).unwrap(), "Yesterday");
        assert_eq!(human_date(FRI_NOON + DAY, FRI_NOON).unwrap(), "Tomorrow");
    }

    #[test]
    fn test_yesterday_needs_full_day_diff() {
        // Thu 23:00 vs Fri 01:00 is the previous calendar day, but less than
        // a whole day apart.
        assert_eq!(
            human_date("2024-03-14T23:00:00Z", "2024-03-15T01:00:00Z").unwrap(),
            "March 14"
        );
    }

    #[test]
    fn test_yesterday_across_month_boundary_falls_through() {
        assert_eq!(
            human_date("2024-02-29T12:00:00Z", "2024-03-01T12:00:00Z").unwrap(),
            "February 29"
        );
    }

    #[test]
    fn test_last_weekday() {
        assert_eq!(human_date(FRI_NOON - 2 * DAY, FRI_NOON).unwrap(), "Last Wednesday");
        assert_eq!(human_date(FRI_NOON - 5 * DAY, FRI_NOON).unwrap(), "Last Sunday");
        assert_eq!(human_date(FRI_NOON - 6 * DAY, FRI_NOON).unwrap(), "Last Saturday");
    }

    #[test]
    fn test_this_weekday() {
        assert_eq!(human_date(FRI_NOON + 2 * DAY, FRI_NOON).unwrap(), "This Sunday");
        assert_eq!(human_date(FRI_NOON + 6 * DAY, FRI_NOON).unwrap(), "This Thursday");
    }

    #[test]
    fn test_weekday_back_wraps() {
        // Friday = 5
        assert_eq!(weekday_back(5, 2), "Wednesday");
        assert_eq!(weekday_back(1, 3), "Friday");
        assert_eq!(weekday_back(5, -3), "Monday");
        assert_eq!(weekday_back(0, -6), "Saturday");
    }

    #[test]
    fn test_week_or_more_uses_month_day() {
        assert_eq!(human_date(FRI_NOON - 7 * DAY, FRI_NOON).unwrap(), "March 8");
        assert_eq!(human_date(FRI_NOON + 7 * DAY, FRI_NOON).unwrap(), "March 22");
    }

    #[test]
    fn test_other_year_is_full_date() {
        assert_eq!(
            human_date("2023-12-25", "2024-03-15").unwrap(),
            "December 25, 2023"
        );
        assert_eq!(human_date(0, FRI_NOON).unwrap(), "January 1, 1970");
    }

    #[test]
    fn test_pre_epoch_dates() {
        assert_eq!(
            human_date(-DAY, FRI_NOON).unwrap(),
            "December 31, 1969"
        );
    }

    #[test]
    fn test_human_date_invalid_input() {
        assert!(human_date("garbage", FRI_NOON).is_err());
    }

    // ── date_range tests ────────────────────────────────────────────────

    #[test]
    fn test_range_same_day() {
        assert_eq!(
            date_range("2024-03-15T08:00:00Z", "2024-03-15T17:00:00Z").unwrap(),
            "March 15, 2024"
        );
    }

    #[test]
    fn test_range_same_month() {
        assert_eq!(
            date_range("2024-03-15", "2024-03-20").unwrap(),
            "March 15\u{2013}20, 2024"
        );
    }

    #[test]
    fn test_range_same_year() {
        assert_eq!(
            date_range("2024-03-28", "2024-04-02").unwrap(),
            "March 28 \u{2013} April 2, 2024"
        );
    }

    #[test]
    fn test_range_across_years() {
        assert_eq!(
            date_range("2023-12-28", "2024-01-02").unwrap(),
            "December 28, 2023 \u{2013} January 2, 2024"
        );
    }

    #[test]
    fn test_range_is_swap_invariant() {
        assert_eq!(
            date_range("2024-03-20", "2024-03-15").unwrap(),
            date_range("2024-03-15", "2024-03-20").unwrap()
        );
    }

    #[test]
    fn test_range_invalid_endpoint() {
        assert!(date_range("2024-03-15", "nope").is_err());
    }
}
