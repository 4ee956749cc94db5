// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{Display, Formatter},
	str::FromStr,
};

use serde::{
	Deserialize, Deserializer, Serialize, Serializer,
	de::{self, Visitor},
};

use crate::{
	error::Error,
	value::{
		interval::{HOURS_PER_YEAR, Interval},
		temporal::{format::format_interval, parse::parse_interval},
	},
};

pub(crate) const NANOS_PER_MICRO: i64 = 1_000;
pub(crate) const NANOS_PER_MILLI: i64 = 1_000_000;
pub(crate) const NANOS_PER_SEC: i64 = 1_000_000_000;
pub(crate) const NANOS_PER_MIN: i64 = 60 * NANOS_PER_SEC;
pub(crate) const NANOS_PER_HOUR: i64 = 60 * NANOS_PER_MIN;
pub(crate) const NANOS_PER_DAY: i64 = 24 * NANOS_PER_HOUR;
pub(crate) const NANOS_PER_MONTH: i64 = 30 * NANOS_PER_DAY;
pub(crate) const NANOS_PER_YEAR: i64 = HOURS_PER_YEAR * NANOS_PER_HOUR;

/// A signed count of elapsed nanoseconds, the bridge between an
/// [`Interval`] and `EXTRACT(EPOCH FROM interval)` semantics.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Duration {
	nanos: i64,
}

impl Duration {
	pub const fn from_nanos(nanos: i64) -> Self {
		Self {
			nanos,
		}
	}

	pub const fn as_nanos(&self) -> i64 {
		self.nanos
	}

	/// Decomposes the duration greedily, most-significant unit first,
	/// with the fixed ratios 1 year = 365.25 × 24 hours, 1 month =
	/// 30 days, 1 day = 24 hours. Division truncates toward zero, so a
	/// negative duration yields non-positive components throughout. The
	/// final remainder stays in [`Components::nanoseconds`].
	pub fn components(&self) -> Components {
		let mut rem = self.nanos;

		let years = rem / NANOS_PER_YEAR;
		rem %= NANOS_PER_YEAR;
		let months = rem / NANOS_PER_MONTH;
		rem %= NANOS_PER_MONTH;
		let days = rem / NANOS_PER_DAY;
		rem %= NANOS_PER_DAY;
		let hours = rem / NANOS_PER_HOUR;
		rem %= NANOS_PER_HOUR;
		let minutes = rem / NANOS_PER_MIN;
		rem %= NANOS_PER_MIN;
		let seconds = rem / NANOS_PER_SEC;
		rem %= NANOS_PER_SEC;
		let milliseconds = rem / NANOS_PER_MILLI;
		rem %= NANOS_PER_MILLI;
		let microseconds = rem / NANOS_PER_MICRO;
		rem %= NANOS_PER_MICRO;

		Components {
			years,
			months,
			days,
			hours,
			minutes,
			seconds,
			milliseconds,
			microseconds,
			nanoseconds: rem,
		}
	}

	/// Renders the duration in the form PostgreSQL accepts as interval
	/// input. The sub-microsecond remainder is below the engine's
	/// resolution and is not rendered; it remains observable through
	/// [`Duration::components`].
	pub fn to_sql(&self) -> String {
		self.components().to_sql()
	}
}

impl From<i64> for Duration {
	fn from(nanos: i64) -> Self {
		Self::from_nanos(nanos)
	}
}

impl From<Duration> for i64 {
	fn from(duration: Duration) -> Self {
		duration.nanos
	}
}

impl TryFrom<Interval> for Duration {
	type Error = Error;

	fn try_from(interval: Interval) -> Result<Self, Self::Error> {
		interval.duration()
	}
}

impl Display for Duration {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(&self.to_sql())
	}
}

impl FromStr for Duration {
	type Err = Error;

	// scanning a duration from text is parse-as-interval, then project
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		parse_interval(s)?.duration()
	}
}

impl Serialize for Duration {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		serializer.serialize_i64(self.nanos)
	}
}

struct DurationVisitor;

impl<'de> Visitor<'de> for DurationVisitor {
	type Value = Duration;

	fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
		formatter.write_str("a signed 64-bit nanosecond count")
	}

	fn visit_i64<E>(self, value: i64) -> Result<Duration, E>
	where
		E: de::Error,
	{
		Ok(Duration::from_nanos(value))
	}

	fn visit_u64<E>(self, value: u64) -> Result<Duration, E>
	where
		E: de::Error,
	{
		i64::try_from(value)
			.map(Duration::from_nanos)
			.map_err(|_| E::custom("nanosecond count overflows i64"))
	}
}

impl<'de> Deserialize<'de> for Duration {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		deserializer.deserialize_i64(DurationVisitor)
	}
}

/// The named decomposition of a [`Duration`]: nine signed counts from years
/// down to the nanosecond remainder, all sharing the duration's sign.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Components {
	pub years: i64,
	pub months: i64,
	pub days: i64,
	pub hours: i64,
	pub minutes: i64,
	pub seconds: i64,
	pub milliseconds: i64,
	pub microseconds: i64,
	pub nanoseconds: i64,
}

impl Components {
	/// Reassembles the duration through the same fixed ratios the
	/// decomposition used. Exact for any value produced by
	/// [`Duration::components`]; hand-built components that exceed the
	/// signed 64-bit nanosecond range fail with [`Error::TooLarge`].
	pub fn duration(&self) -> Result<Duration, Error> {
		let nanos = self
			.years
			.checked_mul(NANOS_PER_YEAR)
			.and_then(|ns| ns.checked_add(self.months.checked_mul(NANOS_PER_MONTH)?))
			.and_then(|ns| ns.checked_add(self.days.checked_mul(NANOS_PER_DAY)?))
			.and_then(|ns| ns.checked_add(self.hours.checked_mul(NANOS_PER_HOUR)?))
			.and_then(|ns| ns.checked_add(self.minutes.checked_mul(NANOS_PER_MIN)?))
			.and_then(|ns| ns.checked_add(self.seconds.checked_mul(NANOS_PER_SEC)?))
			.and_then(|ns| ns.checked_add(self.milliseconds.checked_mul(NANOS_PER_MILLI)?))
			.and_then(|ns| ns.checked_add(self.microseconds.checked_mul(NANOS_PER_MICRO)?))
			.and_then(|ns| ns.checked_add(self.nanoseconds))
			.ok_or(Error::TooLarge)?;

		Ok(Duration::from_nanos(nanos))
	}

	/// Renders the components as PostgreSQL interval input, dropping the
	/// sub-microsecond remainder.
	pub fn to_sql(&self) -> String {
		format_interval(
			self.years,
			self.months,
			self.days,
			self.hours,
			self.minutes,
			self.seconds,
			self.milliseconds,
			self.microseconds,
		)
	}
}

#[cfg(test)]
pub mod tests {
	use super::*;

	#[test]
	fn test_components_ladder() {
		let duration = Duration::from_nanos(
			NANOS_PER_YEAR
				+ 2 * NANOS_PER_MONTH
				+ 3 * NANOS_PER_DAY
				+ 4 * NANOS_PER_HOUR
				+ 5 * NANOS_PER_MIN
				+ 6 * NANOS_PER_SEC
				+ 7 * NANOS_PER_MILLI
				+ 8 * NANOS_PER_MICRO
				+ 9,
		);
		let parts = duration.components();

		assert_eq!(parts.years, 1);
		assert_eq!(parts.months, 2);
		assert_eq!(parts.days, 3);
		assert_eq!(parts.hours, 4);
		assert_eq!(parts.minutes, 5);
		assert_eq!(parts.seconds, 6);
		assert_eq!(parts.milliseconds, 7);
		assert_eq!(parts.microseconds, 8);
		assert_eq!(parts.nanoseconds, 9);
	}

	#[test]
	fn test_components_round_trip_exactly() {
		for nanos in [
			0,
			1,
			-1,
			999,
			1_234_567_891_234,
			-1_234_567_891_234,
			i64::MAX,
			i64::MIN,
		] {
			let duration = Duration::from_nanos(nanos);
			assert_eq!(duration.components().duration().unwrap(), duration);
		}
	}

	#[test]
	fn test_negative_duration_components_share_the_sign() {
		let parts = Duration::from_nanos(-(NANOS_PER_DAY + NANOS_PER_HOUR)).components();

		assert_eq!(parts.days, -1);
		assert_eq!(parts.hours, -1);
		assert_eq!(parts.minutes, 0);
	}

	#[test]
	fn test_to_sql_thirty_minutes() {
		let duration = Duration::from_nanos(30 * NANOS_PER_MIN);
		assert_eq!(duration.to_sql(), "30 minutes");
	}

	#[test]
	fn test_zero_duration_to_sql() {
		assert_eq!(Duration::default().to_sql(), "0 microseconds");
	}

	#[test]
	fn test_hand_built_components_overflow() {
		let parts = Components {
			years: i64::MAX / NANOS_PER_YEAR + 1,
			..Components::default()
		};
		assert_eq!(parts.duration(), Err(Error::TooLarge));
	}

	#[test]
	fn test_projection_overflow_both_directions() {
		assert_eq!(
			Interval::from_years(300).unwrap().duration(),
			Err(Error::TooLarge)
		);
		assert_eq!(
			Interval::from_years(-300).unwrap().duration(),
			Err(Error::TooLarge)
		);

		// the largest year counts that still project
		assert!(Interval::from_years(292).unwrap().duration().is_ok());
		assert!(Interval::from_years(-292).unwrap().duration().is_ok());
	}

	#[test]
	fn test_projection_matches_epoch_ratios() {
		let interval = Interval::new(1, 1, 1, 0, 0, 1).unwrap();
		let duration = interval.duration().unwrap();

		assert_eq!(
			duration.as_nanos(),
			NANOS_PER_YEAR + 25 * NANOS_PER_HOUR + NANOS_PER_MICRO
		);
	}

	#[test]
	fn test_serde_round_trip() {
		let duration = Duration::from_nanos(-42_000_000_123);
		let json = serde_json::to_string(&duration).unwrap();
		let back: Duration = serde_json::from_str(&json).unwrap();
		assert_eq!(back, duration);
	}
}
