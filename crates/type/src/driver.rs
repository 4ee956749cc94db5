// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::{
	error::Error,
	value::{Duration, Interval, temporal::parse::parse_interval},
};

/// An interval value as a database driver delivers it: the engine's text
/// form, the same bytes unencoded, or SQL NULL. The driver adapter owns
/// everything else about the exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SqlValue<'a> {
	Text(&'a str),
	Bytes(&'a [u8]),
	Null,
}

impl<'a> SqlValue<'a> {
	fn text(&self) -> Result<Option<&'a str>, Error> {
		match self {
			SqlValue::Text(text) => Ok(Some(text)),
			SqlValue::Bytes(bytes) => match std::str::from_utf8(bytes) {
				Ok(text) => Ok(Some(text)),
				Err(_) => Err(Error::parse(String::from_utf8_lossy(bytes))),
			},
			SqlValue::Null => Ok(None),
		}
	}
}

impl Interval {
	/// Scans a driver-delivered value. NULL maps to the zero interval;
	/// text and UTF-8 bytes go through the interval parser. Unlike a
	/// mutate-in-place scan, failure leaves nothing half-built behind.
	pub fn scan(src: SqlValue<'_>) -> Result<Self, Error> {
		match src.text()? {
			Some(text) => parse_interval(text),
			None => Ok(Interval::default()),
		}
	}
}

impl Duration {
	/// Scans a driver-delivered value as an interval, then collapses it
	/// with `EXTRACT(EPOCH FROM interval)` semantics. Fails like
	/// [`Interval::scan`] on bad text and with [`Error::TooLarge`] when
	/// the interval does not fit 64-bit nanoseconds.
	pub fn scan(src: SqlValue<'_>) -> Result<Self, Error> {
		Interval::scan(src)?.duration()
	}
}
