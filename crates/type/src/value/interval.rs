// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{Display, Formatter},
	hash::{Hash, Hasher},
	str::FromStr,
};

use serde::{
	Deserialize, Deserializer, Serialize, Serializer,
	de::{self, Visitor},
};

use crate::{
	error::Error,
	value::{
		duration::{Duration, NANOS_PER_HOUR, NANOS_PER_MICRO, NANOS_PER_YEAR},
		temporal::{format::format_interval, parse::parse_interval},
	},
};

/// The year range PostgreSQL accepts in an interval.
pub const MAX_YEAR: i32 = 0x0AAA_AAAA;
pub const MIN_YEAR: i32 = -0x0AAA_AAAA;

pub(crate) const US_PER_SEC: i64 = 1_000_000;
pub(crate) const US_PER_MIN: i64 = 60 * US_PER_SEC;
pub(crate) const US_PER_HOUR: i64 = 60 * US_PER_MIN;

/// The fixed calendar ratios `EXTRACT(EPOCH FROM interval)` assumes.
pub(crate) const DAYS_PER_MONTH: i64 = 30;
pub(crate) const HOURS_PER_YEAR: i64 = 8766; // 365.25 * 24

const YR_SIGN_BIT: u32 = 0x1000_0000;
const US_SIGN_BIT: u32 = 0x8000_0000;

/// An interval value covering the full range of PostgreSQL's `interval`
/// type: a signed year count, a signed hour count (days pre-folded,
/// 1 day = 24 hours), and a signed sub-hour microsecond remainder.
///
/// The three signs are independent, mirroring PostgreSQL's non-normalized
/// interval storage: negative years can coexist with positive hours and
/// negative microseconds. The year magnitude needs only 29 bits, so the
/// spare top bit of `yrs` carries the microseconds' sign, which has no room
/// of its own in `us`.
#[derive(Copy, Clone, Debug, Default)]
pub struct Interval {
	// bottom 28 bits: year magnitude, bit 28: year sign,
	// bit 31: sign of `us`
	yrs: u32,
	hrs: i32,
	// sub-hour microsecond magnitude, always < one hour
	us: u32,
}

impl Interval {
	/// Creates an interval from calendar components.
	///
	/// Days are folded into hours and all sub-hour units are collapsed
	/// into a signed microsecond count; whole hours of that count are
	/// folded back into the hour component so the remainder stays below
	/// one hour. Years outside the PostgreSQL range or hours outside
	/// `i32` are rejected as caller errors, never clamped or wrapped.
	pub fn new(
		years: i64,
		days: i64,
		hours: i64,
		minutes: i64,
		seconds: i64,
		microseconds: i64,
	) -> Result<Self, Error> {
		if years < MIN_YEAR as i64 || years > MAX_YEAR as i64 {
			return Err(Error::out_of_range("years", years));
		}

		let micros = minutes
			.checked_mul(US_PER_MIN)
			.ok_or_else(|| Error::out_of_range("minutes", minutes))?;
		let micros = seconds
			.checked_mul(US_PER_SEC)
			.and_then(|us| micros.checked_add(us))
			.ok_or_else(|| Error::out_of_range("seconds", seconds))?;
		let micros = micros
			.checked_add(microseconds)
			.ok_or_else(|| Error::out_of_range("microseconds", microseconds))?;

		let hrs = days
			.checked_mul(24)
			.and_then(|h| h.checked_add(hours))
			.and_then(|h| h.checked_add(micros / US_PER_HOUR))
			.ok_or_else(|| Error::out_of_range("hours", hours))?;
		if hrs < i32::MIN as i64 || hrs > i32::MAX as i64 {
			return Err(Error::out_of_range("hours", hrs));
		}

		Ok(Self::from_parts(years as i32, hrs as i32, micros % US_PER_HOUR))
	}

	pub fn from_years(years: i64) -> Result<Self, Error> {
		Self::new(years, 0, 0, 0, 0, 0)
	}

	pub fn from_days(days: i64) -> Result<Self, Error> {
		Self::new(0, days, 0, 0, 0, 0)
	}

	pub fn from_hours(hours: i64) -> Result<Self, Error> {
		Self::new(0, 0, hours, 0, 0, 0)
	}

	pub fn from_microseconds(microseconds: i64) -> Result<Self, Error> {
		Self::new(0, 0, 0, 0, 0, microseconds)
	}

	/// Packs pre-normalized components. Callers guarantee the year bound
	/// and `|microseconds| < US_PER_HOUR`.
	pub(crate) fn from_parts(years: i32, hours: i32, microseconds: i64) -> Self {
		debug_assert!(years >= MIN_YEAR && years <= MAX_YEAR);
		debug_assert!(microseconds.abs() < US_PER_HOUR);

		let mut yrs = years.unsigned_abs();
		if years < 0 {
			yrs |= YR_SIGN_BIT;
		}
		if microseconds < 0 {
			yrs |= US_SIGN_BIT;
		}

		Self {
			yrs,
			hrs: hours,
			us: microseconds.unsigned_abs() as u32,
		}
	}

	/// The number of years in the interval.
	pub fn years(&self) -> i32 {
		let magnitude = (self.yrs & (YR_SIGN_BIT - 1)) as i32;
		if self.yrs & YR_SIGN_BIT != 0 {
			-magnitude
		} else {
			magnitude
		}
	}

	/// The number of hours in the interval, days already folded in.
	pub fn hours(&self) -> i32 {
		self.hrs
	}

	/// The sub-hour microsecond remainder, with its own independent sign.
	pub fn microseconds(&self) -> i64 {
		let magnitude = self.us as i64;
		if self.yrs & US_SIGN_BIT != 0 {
			-magnitude
		} else {
			magnitude
		}
	}

	/// Collapses the interval into elapsed nanoseconds with the same
	/// semantics as `EXTRACT(EPOCH FROM interval)`: 1 year = 8766 hours,
	/// hours and microseconds added as elapsed time. Fails with
	/// [`Error::TooLarge`] instead of wrapping when any stage would leave
	/// the signed 64-bit range.
	pub fn duration(&self) -> Result<Duration, Error> {
		let years = self.years() as i64;
		if years > i64::MAX / NANOS_PER_YEAR || years < i64::MIN / NANOS_PER_YEAR {
			return Err(Error::TooLarge);
		}

		// after the guard |years| <= 292, so the hour total fits easily
		let hours = years * HOURS_PER_YEAR + self.hrs as i64;
		let nanos = hours
			.checked_mul(NANOS_PER_HOUR)
			.and_then(|ns| ns.checked_add(self.microseconds() * NANOS_PER_MICRO))
			.ok_or(Error::TooLarge)?;

		Ok(Duration::from_nanos(nanos))
	}

	/// Renders the interval in the form PostgreSQL accepts as interval
	/// input, e.g. `"3 years 182 days 1 hours 22 minutes"`. The zero
	/// interval renders as `"0 microseconds"`.
	pub fn to_sql(&self) -> String {
		let hours = self.hrs as i64;
		let micros = self.microseconds();

		let (days, hours) = (hours / 24, hours % 24);
		let (minutes, micros) = (micros / US_PER_MIN, micros % US_PER_MIN);
		let (seconds, micros) = (micros / US_PER_SEC, micros % US_PER_SEC);
		let (millis, micros) = (micros / 1_000, micros % 1_000);

		format_interval(self.years() as i64, 0, days, hours, minutes, seconds, millis, micros)
	}
}

impl PartialEq for Interval {
	fn eq(&self, other: &Self) -> bool {
		// compare logical components so a zero magnitude with a set
		// sign bit equals plain zero
		self.years() == other.years()
			&& self.hrs == other.hrs
			&& self.microseconds() == other.microseconds()
	}
}

impl Eq for Interval {}

impl Hash for Interval {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.years().hash(state);
		self.hrs.hash(state);
		self.microseconds().hash(state);
	}
}

impl Display for Interval {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(&self.to_sql())
	}
}

impl FromStr for Interval {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		parse_interval(s)
	}
}

impl Serialize for Interval {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		serializer.serialize_str(&self.to_sql())
	}
}

struct IntervalVisitor;

impl<'de> Visitor<'de> for IntervalVisitor {
	type Value = Interval;

	fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
		formatter.write_str("a PostgreSQL interval string")
	}

	fn visit_str<E>(self, value: &str) -> Result<Interval, E>
	where
		E: de::Error,
	{
		parse_interval(value).map_err(E::custom)
	}
}

impl<'de> Deserialize<'de> for Interval {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		deserializer.deserialize_str(IntervalVisitor)
	}
}
