// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

mod interval;
mod time;

pub use interval::parse_interval;
