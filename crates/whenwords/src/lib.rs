//! # whenwords
//!
//! Human-friendly time phrasing.
//!
//! Pure functions that turn timestamps and durations into readable text and
//! parse human-written durations back into seconds. Nothing here reads the
//! system clock: callers always pass the reference instant, which keeps every
//! function deterministic and trivially testable.
//!
//! ## Modules
//!
//! - [`timestamp`] — Normalize integers, ISO 8601 text, and date/time values to Unix seconds
//! - [`relative`] — "3 hours ago", "in 2 days", "just now"
//! - [`duration`] — "2 hours, 30 minutes" / "2h 30m"
//! - [`parse`] — "2h 30m", "1:30:15", "1 day and 3 hours" → seconds
//! - [`calendar`] — "Yesterday", "Last Friday", "March 15–20, 2024"
//! - [`error`] — Error types
//!
//! ## Example
//!
//! ```
//! use whenwords::{date_range, duration, human_date, parse_duration, timeago, DurationOptions};
//!
//! assert_eq!(timeago(1_704_067_200 - 10_800, 1_704_067_200).unwrap(), "3 hours ago");
//! assert_eq!(duration(3_661.0, &DurationOptions::default()).unwrap(), "1 hour, 1 minute");
//! assert_eq!(parse_duration("2h 30m").unwrap(), 9_000.0);
//! assert_eq!(human_date("2024-03-14", "2024-03-15").unwrap(), "Yesterday");
//! assert_eq!(date_range("2024-03-15", "2024-03-20").unwrap(), "March 15–20, 2024");
//! ```
//!
//! All calendar computation is UTC. Months are 30 days and years 365 days
//! wherever a fixed-length unit is needed.

pub mod calendar;
pub mod duration;
pub mod error;
pub mod parse;
pub mod relative;
pub mod timestamp;

pub use calendar::{date_range, human_date, human_date_unanchored};
pub use duration::{duration, DurationOptions, UnitSpec, UNITS};
pub use error::{Result, WhenwordsError};
pub use parse::parse_duration;
pub use relative::{timeago, timeago_unanchored};
pub use timestamp::{normalize_timestamp, CalendarParts, TimestampInput};
