// ABOUTME: Engine configuration aggregating per-scorer sections with validation
// ABOUTME: Loads defaults, applies HEARTH_* environment overrides, and rejects caller misuse
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Hearth Household Intelligence

//! # Engine Configuration
//!
//! Every knob has a default; `EngineConfig::load()` layers environment
//! overrides on top and validates the result. There is no global instance:
//! callers build a config and hand it to the scorers they construct.

mod anti_waste;
mod error;
mod feasibility;
mod popularity;
mod recommendation;
mod recurrence;

pub use anti_waste::{AntiWasteConfig, DEFAULT_ANTI_WASTE_HORIZON_DAYS};
pub use error::ConfigError;
pub use feasibility::{FeasibilityConfig, DEFAULT_NEAR_EXPIRY_HORIZON_DAYS};
pub use popularity::{
    PopularityConfig, DEFAULT_POPULARITY_WINDOW_DAYS, DEFAULT_TREND_WINDOW_DAYS,
};
pub use recommendation::RecommendationConfig;
pub use recurrence::{
    RecurrenceConfig, DEFAULT_MIN_SAMPLES, DEFAULT_RECURRENCE_LOOKBACK_DAYS,
    DEFAULT_UPCOMING_HORIZON_DAYS,
};

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use tracing::debug;

/// Complete engine configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Feasibility scorer settings
    #[serde(default)]
    pub feasibility: FeasibilityConfig,
    /// Anti-waste scorer settings
    #[serde(default)]
    pub anti_waste: AntiWasteConfig,
    /// Popularity scorer settings
    #[serde(default)]
    pub popularity: PopularityConfig,
    /// Recurrence detector settings
    #[serde(default)]
    pub recurrence: RecurrenceConfig,
    /// Facade list limits
    #[serde(default)]
    pub recommendation: RecommendationConfig,
}

impl EngineConfig {
    /// Load configuration from defaults and `HEARTH_*` environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if an environment variable holds an unparseable value
    /// or the resulting configuration fails validation
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(|key| env::var(key).ok())
    }

    /// Load configuration using an arbitrary variable lookup
    ///
    /// # Errors
    ///
    /// Returns an error if a value cannot be parsed or validation fails
    pub fn load_from(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let config = Self::default().apply_overrides(&lookup)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate every section
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.feasibility.validate()?;
        self.anti_waste.validate()?;
        self.popularity.validate()?;
        self.recurrence.validate()?;
        self.recommendation.validate()
    }

    fn apply_overrides(
        mut self,
        lookup: &impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        override_value(
            lookup,
            "HEARTH_FEASIBILITY_NEAR_EXPIRY_DAYS",
            &mut self.feasibility.near_expiry_horizon_days,
        )?;
        override_value(
            lookup,
            "HEARTH_ANTI_WASTE_HORIZON_DAYS",
            &mut self.anti_waste.horizon_days,
        )?;
        override_value(
            lookup,
            "HEARTH_POPULARITY_WINDOW_DAYS",
            &mut self.popularity.window_days,
        )?;
        override_value(
            lookup,
            "HEARTH_POPULARITY_TREND_WINDOW_DAYS",
            &mut self.popularity.trend_window_days,
        )?;
        override_value(
            lookup,
            "HEARTH_RECURRENCE_LOOKBACK_DAYS",
            &mut self.recurrence.lookback_days,
        )?;
        override_value(
            lookup,
            "HEARTH_RECURRENCE_MIN_SAMPLES",
            &mut self.recurrence.min_samples,
        )?;
        override_value(
            lookup,
            "HEARTH_RECURRENCE_UPCOMING_DAYS",
            &mut self.recurrence.upcoming_horizon_days,
        )?;
        override_value(
            lookup,
            "HEARTH_TRENDING_LIMIT",
            &mut self.recommendation.trending_limit,
        )?;
        override_value(
            lookup,
            "HEARTH_ANTI_WASTE_LIMIT",
            &mut self.recommendation.anti_waste_limit,
        )?;
        Ok(self)
    }
}

fn override_value<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    target: &mut T,
) -> Result<(), ConfigError> {
    let Some(raw) = lookup(key) else {
        return Ok(());
    };
    *target = raw
        .trim()
        .parse()
        .map_err(|_| ConfigError::Parse(format!("Invalid {key}: {raw:?}")))?;
    debug!(key, value = %raw.trim(), "engine config override applied");
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_are_valid() {
        let config = EngineConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.popularity.window_days, 90);
        assert_eq!(config.recurrence.min_samples, 3);
    }

    #[test]
    fn test_override_applied() {
        let config =
            EngineConfig::load_from(lookup(&[("HEARTH_ANTI_WASTE_HORIZON_DAYS", "3")])).unwrap();
        assert_eq!(config.anti_waste.horizon_days, 3);
    }

    #[test]
    fn test_negative_lookback_rejected() {
        let err = EngineConfig::load_from(lookup(&[("HEARTH_RECURRENCE_LOOKBACK_DAYS", "-30")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::ValueOutOfRange(_)));
    }

    #[test]
    fn test_negative_sample_count_is_parse_error() {
        let err = EngineConfig::load_from(lookup(&[("HEARTH_RECURRENCE_MIN_SAMPLES", "-1")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_trend_window_longer_than_lookback_rejected() {
        let mut config = EngineConfig::default();
        config.popularity.trend_window_days = 120;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidRange(_))
        ));
    }
}
