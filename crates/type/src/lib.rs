// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! PostgreSQL `interval` values for driver adapters.
//!
//! [`Interval`] is a compact, sign-independent rendition of the engine's
//! non-normalized interval storage; [`parse_interval`] reads the engine's
//! canonical interval output, [`format_interval`] writes the input form the
//! engine accepts back, and [`Duration`] bridges to a signed 64-bit
//! nanosecond count with `EXTRACT(EPOCH FROM interval)` semantics.
//!
//! Everything here is a pure value-in/value-out transformation with no I/O
//! and no shared state. Failures surface synchronously as [`Error`].

pub mod driver;
pub mod error;
pub mod value;

pub use driver::SqlValue;
pub use error::Error;
pub use value::{
	Components, Duration, Interval, MAX_YEAR, MIN_YEAR,
	temporal::{format::format_interval, parse::parse_interval},
};
