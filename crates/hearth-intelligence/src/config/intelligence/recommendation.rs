// ABOUTME: Recommendation facade configuration
// ABOUTME: Limits applied when composing scorer outputs into suggestion lists
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Hearth Household Intelligence

use super::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Limits on suggestion list sizes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationConfig {
    /// Number of trending recipes returned
    pub trending_limit: usize,
    /// Number of anti-waste recipes returned
    pub anti_waste_limit: usize,
}

impl Default for RecommendationConfig {
    fn default() -> Self {
        Self {
            trending_limit: 5,
            anti_waste_limit: 10,
        }
    }
}

impl RecommendationConfig {
    /// Validate this section
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.trending_limit == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "recommendation.trending_limit must be positive",
            ));
        }
        if self.anti_waste_limit == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "recommendation.anti_waste_limit must be positive",
            ));
        }
        Ok(())
    }
}
