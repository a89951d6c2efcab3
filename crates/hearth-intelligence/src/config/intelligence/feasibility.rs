// ABOUTME: Feasibility scorer configuration
// ABOUTME: Controls which available ingredients are flagged as close to expiry
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Hearth Household Intelligence

use super::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Default near-expiry horizon for feasibility evidence (days)
pub const DEFAULT_NEAR_EXPIRY_HORIZON_DAYS: i64 = 7;

/// Feasibility scorer configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeasibilityConfig {
    /// Available items expiring within this many days are reported as near expiry
    pub near_expiry_horizon_days: i64,
}

impl Default for FeasibilityConfig {
    fn default() -> Self {
        Self {
            near_expiry_horizon_days: DEFAULT_NEAR_EXPIRY_HORIZON_DAYS,
        }
    }
}

impl FeasibilityConfig {
    /// Validate this section
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.near_expiry_horizon_days < 0 {
            return Err(ConfigError::ValueOutOfRange(
                "feasibility.near_expiry_horizon_days must not be negative",
            ));
        }
        Ok(())
    }
}
