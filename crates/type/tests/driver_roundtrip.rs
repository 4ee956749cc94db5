// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! End-to-end tests for the driver boundary: scan the engine's interval
//! output, render the engine's interval input, and bridge to durations.

use pginterval_type::{Duration, Error, Interval, SqlValue, format_interval};

#[test]
fn test_interval_scan_then_render() {
	let interval = Interval::scan(SqlValue::Text("3 years 182 days 01:22:33.456789")).unwrap();

	assert_eq!(
		interval.to_sql(),
		"3 years 182 days 1 hours 22 minutes 33 seconds 456 milliseconds 789 microseconds"
	);
}

#[test]
fn test_duration_scan_then_render() {
	let duration = Duration::scan(SqlValue::Text("3 years 182 days 01:22:33.456789")).unwrap();

	// the duration path decomposes through the fixed 30-day month, so
	// 182 days come back as months plus days
	assert_eq!(
		duration.to_sql(),
		"3 years 6 months 2 days 1 hours 22 minutes 33 seconds 456 milliseconds 789 microseconds"
	);

	// and the rendering reads back as the same duration
	let reparsed: Duration = duration.to_sql().parse().unwrap();
	assert_eq!(reparsed, duration);
}

#[test]
fn test_format_then_parse_round_trip() {
	let original = Interval::new(2, 7, 9, 44, 18, 472719).unwrap();

	let text = original.to_sql();
	let reparsed: Interval = text.parse().unwrap();

	assert_eq!(reparsed.years(), original.years());
	assert_eq!(reparsed.hours(), original.hours());
	assert_eq!(reparsed.microseconds(), original.microseconds());
}

#[test]
fn test_months_fold_into_hours_on_round_trip() {
	let interval = Interval::scan(SqlValue::Text("6 mons")).unwrap();

	assert_eq!(interval.hours(), 6 * 30 * 24);
	// no months clause survives a reformat
	assert_eq!(interval.to_sql(), "180 days");
}

#[test]
fn test_sign_independence() {
	let interval = Interval::scan(SqlValue::Text("-7 years 4 mons -2 days 11:22:33.456789")).unwrap();

	assert_eq!(interval.years(), -7);
	assert_eq!(interval.hours(), 4 * 30 * 24 - 2 * 24 + 11);
	assert!(interval.microseconds() > 0);
}

#[test]
fn test_zero_handling() {
	assert_eq!(Interval::default().to_sql(), "0 microseconds");
	assert_eq!(
		Interval::scan(SqlValue::Text("00:00:00")).unwrap(),
		Interval::default()
	);
	assert_eq!(Duration::default().to_sql(), "0 microseconds");
}

#[test]
fn test_duration_scan_overflow_is_too_large() {
	assert_eq!(
		Duration::scan(SqlValue::Text("100000000 years")),
		Err(Error::TooLarge)
	);
	assert_eq!(
		Duration::scan(SqlValue::Text("-100000000 years")),
		Err(Error::TooLarge)
	);
}

#[test]
fn test_formatter_is_usable_standalone() {
	assert_eq!(format_interval(0, 0, 0, 0, 30, 0, 0, 0), "30 minutes");
}

#[test]
fn test_duration_from_str_matches_scan() {
	let from_str: Duration = "1 days 01:00:00".parse().unwrap();
	let scanned = Duration::scan(SqlValue::Text("1 days 01:00:00")).unwrap();

	assert_eq!(from_str, scanned);
	assert_eq!(from_str.as_nanos(), 25 * 3_600_000_000_000);
}
