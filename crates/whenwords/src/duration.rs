//! Duration formatting: `"2 hours, 30 minutes"` or compact `"2h 30m"`.
//!
//! Units are calendar-naive: a month is 30 days and a year is 365 days.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, WhenwordsError};

/// One row of the fixed unit table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitSpec {
    pub name: &'static str,
    pub plural: &'static str,
    pub short: &'static str,
    pub seconds: u64,
}

/// Largest unit first.
pub const UNITS: [UnitSpec; 6] = [
    UnitSpec {
        name: "year",
        plural: "years",
        short: "y",
        seconds: 31_536_000,
    },
    UnitSpec {
        name: "month",
        plural: "months",
        short: "mo",
        seconds: 2_592_000,
    },
    UnitSpec {
        name: "day",
        plural: "days",
        short: "d",
        seconds: 86_400,
    },
    UnitSpec {
        name: "hour",
        plural: "hours",
        short: "h",
        seconds: 3_600,
    },
    UnitSpec {
        name: "minute",
        plural: "minutes",
        short: "m",
        seconds: 60,
    },
    UnitSpec {
        name: "second",
        plural: "seconds",
        short: "s",
        seconds: 1,
    },
];

/// Options for [`duration`].
///
/// Deserializes with per-field defaults, so `{"compact": true}` is a complete
/// configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DurationOptions {
    /// Short suffixes joined by spaces (`"2h 30m"`) instead of words joined
    /// by commas.
    pub compact: bool,
    /// Maximum number of unit terms to emit.
    pub max_units: usize,
}

impl Default for DurationOptions {
    fn default() -> Self {
        Self {
            compact: false,
            max_units: 2,
        }
    }
}

impl DurationOptions {
    pub fn compact() -> Self {
        Self {
            compact: true,
            ..Self::default()
        }
    }

    pub fn with_max_units(mut self, max_units: usize) -> Self {
        self.max_units = max_units;
        self
    }
}

/// A unit term pending rendering.
#[derive(Debug, Clone, Copy)]
struct Term {
    count: u64,
    unit: usize,
}

impl Term {
    fn render(&self, compact: bool) -> String {
        let unit = &UNITS[self.unit];
        if compact {
            format!("{}{}", self.count, unit.short)
        } else if self.count == 1 {
            format!("1 {}", unit.name)
        } else {
            format!("{} {}", self.count, unit.plural)
        }
    }
}

/// Format a number of seconds as a human-readable duration.
///
/// Units are taken greedily from largest to smallest, emitting only nonzero
/// counts, until `max_units` terms have been produced. If the term budget
/// cuts off a remainder worth at least half of the last displayed unit, that
/// unit is rounded up (no carry into larger units).
///
/// # Examples
///
/// ```
/// use whenwords::{duration, DurationOptions};
///
/// assert_eq!(duration(9000.0, &DurationOptions::default()).unwrap(), "2 hours, 30 minutes");
/// assert_eq!(duration(9000.0, &DurationOptions::compact()).unwrap(), "2h 30m");
/// assert_eq!(
///     duration(6000.0, &DurationOptions::default().with_max_units(1)).unwrap(),
///     "2 hours"
/// );
/// ```
///
/// # Errors
///
/// Returns [`WhenwordsError::NegativeDuration`] if `seconds < 0`, or
/// [`WhenwordsError::InvalidDuration`] if it is NaN or infinite.
pub fn duration(seconds: f64, options: &DurationOptions) -> Result<String> {
    if !seconds.is_finite() {
        debug!(seconds, "rejecting non-finite duration");
        return Err(WhenwordsError::InvalidDuration(seconds.to_string()));
    }
    if seconds < 0.0 {
        debug!(seconds, "rejecting negative duration");
        return Err(WhenwordsError::NegativeDuration);
    }

    let mut terms: Vec<Term> = Vec::with_capacity(options.max_units.min(UNITS.len()));
    let mut remaining = seconds;

    for (idx, unit) in UNITS.iter().enumerate() {
        if terms.len() >= options.max_units {
            break;
        }
        let divisor = unit.seconds as f64;
        let count = (remaining / divisor).floor();
        if count > 0.0 {
            terms.push(Term {
                count: count as u64,
                unit: idx,
            });
            remaining -= count * divisor;
        }
    }

    // Round the least-significant displayed unit. Seconds are never rounded.
    if terms.len() == options.max_units && remaining > 0.0 {
        if let Some(last) = terms.last_mut() {
            if last.unit < UNITS.len() - 1 {
                let fraction = remaining / UNITS[last.unit].seconds as f64;
                if fraction >= 0.5 {
                    last.count += 1;
                }
            }
        }
    }

    if terms.is_empty() {
        let zero = if options.compact { "0s" } else { "0 seconds" };
        return Ok(zero.to_string());
    }

    let rendered: Vec<String> = terms.iter().map(|t| t.render(options.compact)).collect();
    let separator = if options.compact { " " } else { ", " };
    Ok(rendered.join(separator))
}

// ── Tests ───────────────────────────────────────────────────────────────────
