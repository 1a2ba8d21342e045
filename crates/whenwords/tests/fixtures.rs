//! Table-driven cases for every public formatter and the parser.

use serde::Deserialize;
use whenwords::{
    date_range, duration, human_date, parse_duration, timeago, DurationOptions, TimestampInput,
};

const CASES: &str = include_str!("fixtures/cases.json");

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Stamp {
    Seconds(i64),
    Text(String),
}

impl From<Stamp> for TimestampInput {
    fn from(stamp: Stamp) -> Self {
        match stamp {
            Stamp::Seconds(secs) => secs.into(),
            Stamp::Text(text) => text.into(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct PairCase {
    name: String,
    timestamp: Stamp,
    reference: Stamp,
    output: String,
}

#[derive(Debug, Deserialize)]
struct DurationCase {
    name: String,
    seconds: f64,
    #[serde(default)]
    options: DurationOptions,
    #[serde(default)]
    output: Option<String>,
    #[serde(default)]
    error: bool,
}

#[derive(Debug, Deserialize)]
struct ParseCase {
    name: String,
    input: String,
    #[serde(default)]
    output: Option<f64>,
    #[serde(default)]
    error: bool,
}

#[derive(Debug, Deserialize)]
struct RangeCase {
    name: String,
    start: Stamp,
    end: Stamp,
    output: String,
}

#[derive(Debug, Deserialize)]
struct Suite {
    timeago: Vec<PairCase>,
    duration: Vec<DurationCase>,
    parse_duration: Vec<ParseCase>,
    human_date: Vec<PairCase>,
    date_range: Vec<RangeCase>,
}

fn suite() -> Suite {
    serde_json::from_str(CASES).expect("fixture file is valid JSON")
}

#[test]
fn test_timeago_cases() {
    for case in suite().timeago {
        let got = timeago(case.timestamp, case.reference)
            .unwrap_or_else(|e| panic!("{}: {e}", case.name));
        assert_eq!(got, case.output, "{}", case.name);
    }
}

#[test]
fn test_duration_cases() {
    for case in suite().duration {
        let result = duration(case.seconds, &case.options);
        if case.error {
            assert!(result.is_err(), "{}: expected error, got {result:?}", case.name);
            continue;
        }
        let got = result.unwrap_or_else(|e| panic!("{}: {e}", case.name));
        assert_eq!(Some(got), case.output, "{}", case.name);
    }
}

#[test]
fn test_parse_duration_cases() {
    for case in suite().parse_duration {
        let result = parse_duration(&case.input);
        if case.error {
            assert!(result.is_err(), "{}: expected error, got {result:?}", case.name);
            continue;
        }
        let got = result.unwrap_or_else(|e| panic!("{}: {e}", case.name));
        assert_eq!(Some(got), case.output, "{}", case.name);
    }
}

#[test]
fn test_human_date_cases() {
    for case in suite().human_date {
        let got = human_date(case.timestamp, case.reference)
            .unwrap_or_else(|e| panic!("{}: {e}", case.name));
        assert_eq!(got, case.output, "{}", case.name);
    }
}

#[test]
fn test_date_range_cases() {
    for case in suite().date_range {
        let got =
            date_range(case.start, case.end).unwrap_or_else(|e| panic!("{}: {e}", case.name));
        assert_eq!(got, case.output, "{}", case.name);
    }
}

#[test]
fn test_options_deserialize_with_defaults() {
    let opts: DurationOptions = serde_json::from_str(r#"{"compact": true}"#).unwrap();
    assert_eq!(opts, DurationOptions::compact());

    let opts: DurationOptions = serde_json::from_str("{}").unwrap();
    assert_eq!(opts, DurationOptions::default());
}
