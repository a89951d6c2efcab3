// ABOUTME: Popularity scorer configuration
// ABOUTME: Lookback and trend windows used for frequency, trend, and recency terms
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Hearth Household Intelligence

use super::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Default lookback window (days)
pub const DEFAULT_POPULARITY_WINDOW_DAYS: i64 = 90;

/// Default recent-trend window (days)
pub const DEFAULT_TREND_WINDOW_DAYS: i64 = 30;

/// Popularity scorer configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PopularityConfig {
    /// Preparations within this many days feed the frequency term
    pub window_days: i64,
    /// Preparations within this many days feed the recent-trend term
    pub trend_window_days: i64,
}

impl Default for PopularityConfig {
    fn default() -> Self {
        Self {
            window_days: DEFAULT_POPULARITY_WINDOW_DAYS,
            trend_window_days: DEFAULT_TREND_WINDOW_DAYS,
        }
    }
}

impl PopularityConfig {
    /// Validate this section
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window_days <= 0 {
            return Err(ConfigError::ValueOutOfRange(
                "popularity.window_days must be positive",
            ));
        }
        if self.trend_window_days <= 0 {
            return Err(ConfigError::ValueOutOfRange(
                "popularity.trend_window_days must be positive",
            ));
        }
        if self.trend_window_days > self.window_days {
            return Err(ConfigError::InvalidRange(
                "popularity.trend_window_days must be <= popularity.window_days",
            ));
        }
        Ok(())
    }
}
