// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

/// Renders eight ordered signed counts as the clause sequence PostgreSQL
/// accepts for interval input, e.g. `"3 years 182 days 1 hours"`.
///
/// Zero components are omitted, except that an all-zero value renders as
/// exactly `"0 microseconds"` because the engine's grammar requires at
/// least one unit. Unit names are always plural; the engine accepts
/// pluralized singular counts.
pub fn format_interval(
	years: i64,
	months: i64,
	days: i64,
	hours: i64,
	minutes: i64,
	seconds: i64,
	milliseconds: i64,
	microseconds: i64,
) -> String {
	let mut clauses: Vec<String> = Vec::with_capacity(8);

	if years != 0 {
		clauses.push(format!("{years} years"));
	}
	if months != 0 {
		clauses.push(format!("{months} months"));
	}
	if days != 0 {
		clauses.push(format!("{days} days"));
	}
	if hours != 0 {
		clauses.push(format!("{hours} hours"));
	}
	if minutes != 0 {
		clauses.push(format!("{minutes} minutes"));
	}
	if seconds != 0 {
		clauses.push(format!("{seconds} seconds"));
	}
	if milliseconds != 0 {
		clauses.push(format!("{milliseconds} milliseconds"));
	}
	if microseconds != 0 || clauses.is_empty() {
		clauses.push(format!("{microseconds} microseconds"));
	}

	clauses.join(" ")
}
