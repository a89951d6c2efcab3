// ABOUTME: Recurrence detector configuration
// ABOUTME: Lookback window, minimum sample count, and the upcoming-purchase horizon
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Hearth Household Intelligence

use super::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Default purchase-history lookback (days)
pub const DEFAULT_RECURRENCE_LOOKBACK_DAYS: i64 = 90;

/// Default minimum number of purchases before a cycle is inferred
pub const DEFAULT_MIN_SAMPLES: usize = 3;

/// Default horizon for "upcoming" repurchases (days)
pub const DEFAULT_UPCOMING_HORIZON_DAYS: i64 = 7;

/// Recurrence detector configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecurrenceConfig {
    /// Purchases older than this many days are ignored
    pub lookback_days: i64,
    /// Minimum purchases in the lookback window to attempt detection
    pub min_samples: usize,
    /// Items expected within this many days are listed as upcoming
    pub upcoming_horizon_days: i64,
}

impl Default for RecurrenceConfig {
    fn default() -> Self {
        Self {
            lookback_days: DEFAULT_RECURRENCE_LOOKBACK_DAYS,
            min_samples: DEFAULT_MIN_SAMPLES,
            upcoming_horizon_days: DEFAULT_UPCOMING_HORIZON_DAYS,
        }
    }
}

impl RecurrenceConfig {
    /// Validate this section
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.lookback_days <= 0 {
            return Err(ConfigError::ValueOutOfRange(
                "recurrence.lookback_days must be positive",
            ));
        }
        // A cycle needs at least one interval
        if self.min_samples < 2 {
            return Err(ConfigError::ValueOutOfRange(
                "recurrence.min_samples must be at least 2",
            ));
        }
        if self.upcoming_horizon_days < 0 {
            return Err(ConfigError::ValueOutOfRange(
                "recurrence.upcoming_horizon_days must not be negative",
            ));
        }
        Ok(())
    }
}
