// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

mod duration;
mod interval;
pub mod temporal;

pub use duration::{Components, Duration};
pub use interval::{Interval, MAX_YEAR, MIN_YEAR};
