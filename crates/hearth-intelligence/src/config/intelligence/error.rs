// ABOUTME: Configuration error types for engine configuration validation
// ABOUTME: Defines error variants for invalid ranges, parse failures, and out-of-range values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Hearth Household Intelligence

//! Configuration error types for engine configuration validation.

use hearth_core::errors::{AppError, ErrorCode};
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Two related values are inconsistent (e.g., trend window longer than lookback)
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// Failed to parse configuration value
    #[error("Parse error: {0}")]
    Parse(String),

    /// Numeric value outside valid range for parameter
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        let app_error = match error {
            ConfigError::ValueOutOfRange(_) => {
                Self::new(ErrorCode::ValueOutOfRange, error.to_string())
            }
            ConfigError::InvalidRange(_) | ConfigError::Parse(_) => Self::config(error.to_string()),
        };
        app_error.with_source(error)
    }
}
