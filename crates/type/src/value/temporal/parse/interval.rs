// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::{
	error::Error,
	value::{
		interval::{DAYS_PER_MONTH, Interval, MAX_YEAR, MIN_YEAR, US_PER_HOUR, US_PER_MIN, US_PER_SEC},
		temporal::parse::time::{TimeOfDay, parse_count, parse_time_of_day},
	},
};

/// Parses PostgreSQL's canonical interval output together with the unit
/// clauses its input grammar accepts: space-separated `"<count> <unit>"`
/// pairs with units `year(s)`, `mon(s)`/`month(s)`, `day(s)`, `hour(s)`, `minute(s)`,
/// `second(s)`, `millisecond(s)`, `microsecond(s)`, optionally followed by
/// one `[sign]HH:MM:SS[.ffffff]` field, e.g. `"3 years 2 days 04:15:47"`.
///
/// Tokens are split on single spaces with no whitespace tolerance. An odd
/// token count means the trailing token is the time field. Pairs accumulate
/// in input order: a repeated unit simply adds again, months contribute 30
/// days each, and a negative year count signs only the year component. The
/// time field's sign applies only to the time component. Whole hours in the
/// accumulated sub-hour units fold into the hour count, so everything
/// [`Interval::to_sql`] renders reads back with equal accessors.
pub fn parse_interval(input: &str) -> Result<Interval, Error> {
	let mut tokens: Vec<&str> = input.split(' ').collect();

	let mut time = TimeOfDay {
		hours: 0,
		microseconds: 0,
	};
	if tokens.len() % 2 == 1 {
		if let Some(field) = tokens.pop() {
			time = parse_time_of_day(field, input)?;
		}
	}

	let mut years: i32 = 0;
	let mut hours: i64 = time.hours as i64;
	let mut micros: i64 = time.microseconds;

	for pair in tokens.chunks_exact(2) {
		let count = parse_count(pair[0], input)?;

		match pair[1] {
			"year" | "years" => {
				if count < MIN_YEAR as i64 || count > MAX_YEAR as i64 {
					return Err(Error::parse(input));
				}
				// overwrites rather than accumulates, like the
				// engine's own output never repeats years
				years = count as i32;
			}
			"mon" | "mons" | "month" | "months" => {
				hours = accumulate(hours, count.checked_mul(24 * DAYS_PER_MONTH), input)?;
			}
			"day" | "days" => {
				hours = accumulate(hours, count.checked_mul(24), input)?;
			}
			"hour" | "hours" => {
				hours = accumulate(hours, Some(count), input)?;
			}
			"minute" | "minutes" => {
				micros = accumulate(micros, count.checked_mul(US_PER_MIN), input)?;
			}
			"second" | "seconds" => {
				micros = accumulate(micros, count.checked_mul(US_PER_SEC), input)?;
			}
			"millisecond" | "milliseconds" => {
				micros = accumulate(micros, count.checked_mul(1_000), input)?;
			}
			"microsecond" | "microseconds" => {
				micros = accumulate(micros, Some(count), input)?;
			}
			_ => return Err(Error::parse(input)),
		}
	}

	let hours = hours
		.checked_add(micros / US_PER_HOUR)
		.and_then(|total| i32::try_from(total).ok())
		.ok_or_else(|| Error::parse(input))?;

	Ok(Interval::from_parts(years, hours, micros % US_PER_HOUR))
}

fn accumulate(total: i64, extra: Option<i64>, input: &str) -> Result<i64, Error> {
	extra.and_then(|extra| total.checked_add(extra))
		.ok_or_else(|| Error::parse(input))
}
