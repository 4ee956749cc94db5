// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::{
	error::Error,
	value::interval::{US_PER_HOUR, US_PER_MIN, US_PER_SEC},
};

/// The parsed time-of-day field of an interval: a signed hour count plus a
/// signed sub-hour microsecond remainder. The field's leading sign applies
/// to the whole quantity, so both carry the same sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct TimeOfDay {
	pub hours: i32,
	pub microseconds: i64,
}

/// Parses the `[sign]HH:MM:SS[.ffffff]` field.
///
/// Hours, minutes, and seconds are two-digit decimal integers with `:`
/// separators fixed at positions 2 and 5. A fractional part needs `.` at
/// position 8 and one to six digits, right-padded with zeros to microsecond
/// precision. Minutes and seconds past one hour in aggregate fold into the
/// hour count so the remainder stays below one hour. `input` is the full
/// interval text, carried into errors.
pub(crate) fn parse_time_of_day(field: &str, input: &str) -> Result<TimeOfDay, Error> {
	let (negative, rest) = match field.as_bytes().first() {
		Some(b'-') => (true, &field[1..]),
		Some(b'+') => (false, &field[1..]),
		_ => (false, field),
	};

	let bytes = rest.as_bytes();
	if bytes.len() < 8 || bytes[2] != b':' || bytes[5] != b':' {
		return Err(Error::parse(input));
	}
	if bytes.len() > 8 && (bytes[8] != b'.' || bytes.len() == 9) {
		return Err(Error::parse(input));
	}
	// the two-digit components carry no sign of their own, and i64's
	// parser would accept one ("00:-1:00")
	if [bytes[0], bytes[3], bytes[6]].iter().any(|&b| b == b'+' || b == b'-') {
		return Err(Error::parse(input));
	}

	let hours = parse_count(&rest[0..2], input)?;
	let minutes = parse_count(&rest[3..5], input)?;
	let seconds = parse_count(&rest[6..8], input)?;

	let fraction = if rest.len() > 8 {
		&rest[9..]
	} else {
		""
	};
	let fraction_micros = if fraction.is_empty() {
		0
	} else {
		if fraction.len() > 6 || !fraction.bytes().all(|b| b.is_ascii_digit()) {
			return Err(Error::parse(input));
		}
		// right-pad to microsecond precision: ".3456" is 345600 µs
		parse_count(&format!("{fraction:0<6}"), input)?
	};

	let micros = minutes * US_PER_MIN + seconds * US_PER_SEC + fraction_micros;
	// two-digit minutes/seconds can add up past an hour ("00:99:00")
	let hours = hours + micros / US_PER_HOUR;
	let micros = micros % US_PER_HOUR;

	if negative {
		Ok(TimeOfDay {
			hours: -(hours as i32),
			microseconds: -micros,
		})
	} else {
		Ok(TimeOfDay {
			hours: hours as i32,
			microseconds: micros,
		})
	}
}

pub(crate) fn parse_count(text: &str, input: &str) -> Result<i64, Error> {
	text.parse::<i64>().map_err(|cause| Error::parse_int(input, cause))
}

#[cfg(test)]
mod tests {
	use super::*;

	fn parse(field: &str) -> Result<TimeOfDay, Error> {
		parse_time_of_day(field, field)
	}

	#[test]
	fn test_hours_minutes_seconds() {
		let time = parse("04:15:47").unwrap();
		assert_eq!(time.hours, 4);
		assert_eq!(time.microseconds, 15 * US_PER_MIN + 47 * US_PER_SEC);
	}

	#[test]
	fn test_leading_sign_applies_to_the_whole_field() {
		let time = parse("-11:22:33.456789").unwrap();
		assert_eq!(time.hours, -11);
		assert_eq!(time.microseconds, -(22 * US_PER_MIN + 33 * US_PER_SEC + 456789));

		let time = parse("+01:02:03").unwrap();
		assert_eq!(time.hours, 1);
		assert_eq!(time.microseconds, 2 * US_PER_MIN + 3 * US_PER_SEC);
	}

	#[test]
	fn test_fraction_is_right_padded() {
		assert_eq!(parse("00:00:00.3456").unwrap().microseconds, 345600);
		assert_eq!(parse("00:00:00.003456").unwrap().microseconds, 3456);
		assert_eq!(parse("00:00:00.5").unwrap().microseconds, 500000);
	}

	#[test]
	fn test_overlong_minutes_fold_into_hours() {
		let time = parse("00:99:00").unwrap();
		assert_eq!(time.hours, 1);
		assert_eq!(time.microseconds, 39 * US_PER_MIN);
	}

	#[test]
	fn test_structural_violations() {
		for field in [
			"",
			"0",
			"00:00",
			"0:00:00",
			"00-00-00",
			"00:00:0",
			"00:00:00.",
			"00:00:00.1234567",
			"00:00:00x1",
			"00:00:00.-1234",
			"00:00:00.+1",
			"00:-1:00",
			"+-1:00:00",
		] {
			assert!(parse(field).is_err(), "{field:?} should not parse");
		}
	}

	#[test]
	fn test_non_numeric_component_carries_cause() {
		let err = parse("0x:00:00").unwrap_err();
		assert!(matches!(
			err,
			Error::Parse {
				cause: Some(_),
				..
			}
		));
	}
}
