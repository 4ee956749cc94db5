// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::num::ParseIntError;

/// Errors surfaced by interval construction, parsing, and projection.
///
/// Parse failures are grammar problems and carry the offending input;
/// [`Error::TooLarge`] is a magnitude problem on syntactically valid data;
/// [`Error::OutOfRange`] signals constructor misuse by the caller.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
	#[error("cannot parse {input:?} as an interval")]
	Parse {
		input: String,
		#[source]
		cause: Option<ParseIntError>,
	},

	#[error("interval overflows a signed 64-bit nanosecond duration")]
	TooLarge,

	#[error("interval {component} out of range: {value}")]
	OutOfRange {
		component: &'static str,
		value: i64,
	},
}

impl Error {
	pub(crate) fn parse(input: impl Into<String>) -> Self {
		Error::Parse {
			input: input.into(),
			cause: None,
		}
	}

	pub(crate) fn parse_int(input: impl Into<String>, cause: ParseIntError) -> Self {
		Error::Parse {
			input: input.into(),
			cause: Some(cause),
		}
	}

	pub(crate) fn out_of_range(component: &'static str, value: i64) -> Self {
		Error::OutOfRange {
			component,
			value,
		}
	}
}
