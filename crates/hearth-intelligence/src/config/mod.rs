// ABOUTME: Configuration module for hearth-intelligence crate
// ABOUTME: Re-exports engine configuration types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Hearth Household Intelligence

/// Engine configuration (horizons, windows, limits) with validation
pub mod intelligence;

pub use intelligence::{ConfigError, EngineConfig};
