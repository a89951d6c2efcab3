// ABOUTME: Anti-waste scorer configuration
// ABOUTME: Sets the expiry horizon that puts inventory items in the urgent set
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Hearth Household Intelligence

use super::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Default urgency horizon (days)
pub const DEFAULT_ANTI_WASTE_HORIZON_DAYS: i64 = 7;

/// Anti-waste scorer configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AntiWasteConfig {
    /// Items expiring within this many days (or already expired) are urgent
    pub horizon_days: i64,
}

impl Default for AntiWasteConfig {
    fn default() -> Self {
        Self {
            horizon_days: DEFAULT_ANTI_WASTE_HORIZON_DAYS,
        }
    }
}

impl AntiWasteConfig {
    /// Validate this section
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.horizon_days < 0 {
            return Err(ConfigError::ValueOutOfRange(
                "anti_waste.horizon_days must not be negative",
            ));
        }
        Ok(())
    }
}
