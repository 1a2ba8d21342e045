//! Parse human-written durations into seconds.
//!
//! Two grammars are accepted:
//!
//! - **Colon notation**: `H:MM` or `H:MM:SS` (the whole input).
//! - **Token notation**: `<number><unit>` pairs, e.g. `"2h 30m"`,
//!   `"1 day, 3 hours and 5 minutes"`, `"1.5 hours"`.
//!
//! Months are deliberately absent from the token vocabulary: a calendar
//! month has no fixed length, so `"3mo"` is not a unit.

use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, trace};

use crate::error::{Result, WhenwordsError};

const SECONDS_PER_MINUTE: f64 = 60.0;
const SECONDS_PER_HOUR: f64 = 3_600.0;
const SECONDS_PER_DAY: f64 = 86_400.0;
const SECONDS_PER_WEEK: f64 = 7.0 * SECONDS_PER_DAY;
const SECONDS_PER_YEAR: f64 = 365.0 * SECONDS_PER_DAY;

static COLON: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]+):([0-9]{1,2})(?::([0-9]{1,2}))?$").expect("colon pattern is valid")
});

static NEGATIVE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-\s*[0-9]").expect("negative pattern is valid"));

static CONNECTORS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r",\s*and\s*|\s+and\s+|,").expect("connector pattern is valid")
});

static LONG_UNITS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"([0-9.]+)\s*(years?|weeks?|wks?|days?|hours?|hrs?|minutes?|mins?|seconds?|secs?)",
    )
    .expect("long unit pattern is valid")
});

/// Single-letter units. A match followed by another lowercase letter is
/// discarded afterwards (`m` must not fire inside `min` or `mo`).
static SHORT_UNITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9.]+)\s*([ywdhms])").expect("short unit pattern is valid"));

/// A number+unit occurrence in the working string.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Candidate {
    start: usize,
    end: usize,
    value: f64,
    seconds_per_unit: f64,
}

impl Candidate {
    fn overlaps(&self, other: &Candidate) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// Parse a duration string into seconds.
///
/// Connector words (`and`, commas) are ignored and unit names are
/// case-insensitive. The result may be fractional (`"1.5 hours"` → 5400.0).
///
/// # Examples
///
/// ```
/// use whenwords::parse_duration;
///
/// assert_eq!(parse_duration("2h 30m").unwrap(), 9000.0);
/// assert_eq!(parse_duration("1:30:15").unwrap(), 5415.0);
/// assert_eq!(parse_duration("1 day, 2 hours and 30 minutes").unwrap(), 95_400.0);
/// ```
///
/// # Errors
///
/// - [`WhenwordsError::EmptyInput`] if the input is blank.
/// - [`WhenwordsError::NegativeDuration`] if a minus sign precedes a number.
/// - [`WhenwordsError::NoUnitsFound`] if no number+unit pair is present.
pub fn parse_duration(input: &str) -> Result<f64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        debug!("rejecting blank duration input");
        return Err(WhenwordsError::EmptyInput);
    }

    let lowered = trimmed.to_lowercase();
    if NEGATIVE.is_match(&lowered) {
        debug!(input = trimmed, "rejecting negative duration input");
        return Err(WhenwordsError::NegativeDuration);
    }

    if let Some(total) = parse_colon(trimmed) {
        return Ok(total);
    }

    let working = CONNECTORS.replace_all(&lowered, " ");
    let committed = select_non_overlapping(scan_candidates(&working));

    if committed.is_empty() {
        debug!(input = trimmed, "no duration units found");
        return Err(WhenwordsError::NoUnitsFound(trimmed.to_string()));
    }

    Ok(committed
        .iter()
        .map(|c| c.value * c.seconds_per_unit)
        .sum())
}

/// `H:MM` / `H:MM:SS` over the whole input. ASCII digits only.
fn parse_colon(s: &str) -> Option<f64> {
    let caps = COLON.captures(s)?;
    let field = |i: usize| caps.get(i).map(|m| m.as_str().parse::<f64>());

    let hours = field(1)?.ok()?;
    let minutes = field(2)?.ok()?;
    let seconds = match field(3) {
        Some(parsed) => parsed.ok()?,
        None => 0.0,
    };
    Some(hours * SECONDS_PER_HOUR + minutes * SECONDS_PER_MINUTE + seconds)
}

/// Every number+unit occurrence from both vocabularies, long forms first.
fn scan_candidates(working: &str) -> Vec<Candidate> {
    let mut candidates = Vec::new();

    for caps in LONG_UNITS.captures_iter(working) {
        push_candidate(&mut candidates, &caps);
    }

    for caps in SHORT_UNITS.captures_iter(working) {
        let Some(whole) = caps.get(0) else { continue };
        let followed_by_letter = working[whole.end()..]
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_lowercase());
        if followed_by_letter {
            trace!(span = whole.as_str(), "skipping single-letter unit inside a word");
            continue;
        }
        push_candidate(&mut candidates, &caps);
    }

    candidates
}

fn push_candidate(candidates: &mut Vec<Candidate>, caps: &regex::Captures<'_>) {
    let (Some(whole), Some(number), Some(unit)) = (caps.get(0), caps.get(1), caps.get(2)) else {
        return;
    };
    let Some(value) = leading_number(number.as_str()) else {
        trace!(span = whole.as_str(), "skipping unit with no digits");
        return;
    };
    let Some(seconds_per_unit) = unit_seconds(unit.as_str()) else {
        return;
    };
    candidates.push(Candidate {
        start: whole.start(),
        end: whole.end(),
        value,
        seconds_per_unit,
    });
}

/// Sort by start offset and keep each candidate that does not overlap one
/// already kept. The sort is stable, so long forms win ties.
fn select_non_overlapping(mut candidates: Vec<Candidate>) -> Vec<Candidate> {
    candidates.sort_by_key(|c| c.start);

    let mut committed: Vec<Candidate> = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        if committed.iter().any(|kept| kept.overlaps(&candidate)) {
            trace!(start = candidate.start, end = candidate.end, "skipping overlapping unit");
            continue;
        }
        trace!(
            start = candidate.start,
            end = candidate.end,
            value = candidate.value,
            "accepted unit"
        );
        committed.push(candidate);
    }
    committed
}

/// The longest `digits[.digits]` prefix of a `[0-9.]+` token, so `"1.2.3"`
/// reads as 1.2. `None` when the token starts with no digit and no fraction.
fn leading_number(token: &str) -> Option<f64> {
    let mut end = 0;
    let mut seen_dot = false;
    for (i, c) in token.char_indices() {
        match c {
            '0'..='9' => end = i + 1,
            '.' if !seen_dot => seen_dot = true,
            _ => break,
        }
    }
    if end == 0 {
        return None;
    }
    token[..end].parse().ok()
}

fn unit_seconds(unit: &str) -> Option<f64> {
    let seconds = match unit {
        "years" | "year" | "y" => SECONDS_PER_YEAR,
        "weeks" | "week" | "wks" | "wk" | "w" => SECONDS_PER_WEEK,
        "days" | "day" | "d" => SECONDS_PER_DAY,
        "hours" | "hour" | "hrs" | "hr" | "h" => SECONDS_PER_HOUR,
        "minutes" | "minute" | "mins" | "min" | "m" => SECONDS_PER_MINUTE,
        "seconds" | "second" | "secs" | "sec" | "s" => 1.0,
        _ => return None,
    };
    Some(seconds)
}

// ── Tests ───────────────────────────────────────────────────────────────────
