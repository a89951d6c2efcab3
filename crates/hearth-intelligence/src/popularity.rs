// ABOUTME: Popularity scoring from preparation history and household ratings
// ABOUTME: Two-pass composite of frequency, recent trend, rating, and recency with trend labels
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Hearth Household Intelligence

//! # Popularity Scorer
//!
//! The composite score (0-100) weighs four normalized terms:
//!
//! | Term | Weight | Ratio |
//! |------|--------|-------|
//! | frequency | 40 | preparations in window / catalog maximum |
//! | trend | 30 | preparations in trend window / catalog maximum |
//! | rating | 20 | rating / 5 |
//! | recency | 10 | `1 - days_since_last / window_days`, floored at 0 |
//!
//! Catalog maxima form a [`PopularityBaseline`]. [`PopularityScorer::score_catalog`]
//! computes it in a first pass so every recipe is normalized against the same
//! values; [`PopularityScorer::score_with_baseline`] accepts a fixed one.

use crate::config::intelligence::{ConfigError, PopularityConfig};
use crate::score::{descending, ScoreResult};
use chrono::NaiveDate;
use hearth_core::models::{PreparationRecord, Recipe, RecipeId, RecipeRating, MAX_RATING};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, warn};

/// Weight of the frequency term
pub const FREQUENCY_WEIGHT: f64 = 40.0;

/// Weight of the recent-trend term
pub const TREND_WEIGHT: f64 = 30.0;

/// Weight of the rating term
pub const RATING_WEIGHT: f64 = 20.0;

/// Weight of the recency term
pub const RECENCY_WEIGHT: f64 = 10.0;

/// Recent rate above this multiple of the window rate is rising
pub const RISING_RATIO: f64 = 1.3;

/// Recent rate below this multiple of the window rate is falling
pub const FALLING_RATIO: f64 = 0.7;

const DAYS_PER_MONTH: f64 = 30.0;

/// Direction of a recipe's recent preparation rate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PopularityTrend {
    /// Never prepared
    #[serde(rename = "nouveau")]
    New,
    /// Prepared more often lately
    #[serde(rename = "hausse")]
    Rising,
    /// Prepared less often lately
    #[serde(rename = "baisse")]
    Falling,
    /// Steady rate
    #[serde(rename = "stable")]
    Stable,
}

impl PopularityTrend {
    /// Display label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::New => "nouveau",
            Self::Rising => "hausse",
            Self::Falling => "baisse",
            Self::Stable => "stable",
        }
    }
}

/// Normalization maxima for one scoring pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PopularityBaseline {
    /// Highest preparation count in the lookback window
    pub max_count_window: u32,
    /// Highest preparation count in the trend window
    pub max_count_recent: u32,
}

/// Popularity of one recipe with its sub-metrics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PopularityResult {
    /// Scored recipe
    pub recipe_id: RecipeId,
    /// Recipe display name
    pub recipe_name: String,
    /// Preparations in the lookback window
    pub count_window: u32,
    /// Preparations in the trend window
    pub count_recent: u32,
    /// Mean household rating on the 0-5 scale, 0 when unrated
    pub rating: f64,
    /// Most recent preparation up to today
    pub last_prepared_on: Option<NaiveDate>,
    /// Days since `last_prepared_on`
    pub days_since_last: Option<i64>,
    /// Frequency term (0-40)
    pub frequency_term: f64,
    /// Trend term (0-30)
    pub trend_term: f64,
    /// Rating term (0-20)
    pub rating_term: f64,
    /// Recency term (0-10)
    pub recency_term: f64,
    /// Sum of the four terms (0-100)
    pub composite: f64,
    /// Trend label
    pub trend: PopularityTrend,
}

impl ScoreResult for PopularityResult {
    fn subject_id(&self) -> &str {
        self.recipe_id.as_str()
    }

    fn subject_name(&self) -> &str {
        &self.recipe_name
    }

    fn score(&self) -> f64 {
        self.composite
    }

    fn label(&self) -> &'static str {
        self.trend.label()
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct Activity {
    count_window: u32,
    count_recent: u32,
    last_prepared_on: Option<NaiveDate>,
}

/// Ranks recipes by how much the household cooks and likes them
#[derive(Debug, Clone, Default)]
pub struct PopularityScorer {
    config: PopularityConfig,
}

impl PopularityScorer {
    /// Create a scorer
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid
    pub fn new(config: PopularityConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Catalog maxima for a pass at `today`
    #[must_use]
    pub fn baseline(
        &self,
        recipes: &[Recipe],
        preparations: &[PreparationRecord],
        today: NaiveDate,
    ) -> PopularityBaseline {
        let activity = self.activity(preparations, today);
        Self::baseline_of(recipes, &activity)
    }

    /// Score the catalog, computing the baseline first
    #[must_use]
    pub fn score_catalog(
        &self,
        recipes: &[Recipe],
        preparations: &[PreparationRecord],
        ratings: &[RecipeRating],
        today: NaiveDate,
    ) -> Vec<PopularityResult> {
        let activity = self.activity(preparations, today);
        let baseline = Self::baseline_of(recipes, &activity);
        self.score_pass(recipes, &activity, ratings, baseline, today)
    }

    /// Score the catalog against a caller-supplied baseline
    ///
    /// Ratios are clamped to 1, so counts above the baseline cannot push the
    /// composite past 100.
    #[must_use]
    pub fn score_with_baseline(
        &self,
        recipes: &[Recipe],
        preparations: &[PreparationRecord],
        ratings: &[RecipeRating],
        baseline: PopularityBaseline,
        today: NaiveDate,
    ) -> Vec<PopularityResult> {
        let activity = self.activity(preparations, today);
        self.score_pass(recipes, &activity, ratings, baseline, today)
    }

    fn score_pass(
        &self,
        recipes: &[Recipe],
        activity: &HashMap<&RecipeId, Activity>,
        ratings: &[RecipeRating],
        baseline: PopularityBaseline,
        today: NaiveDate,
    ) -> Vec<PopularityResult> {
        let ratings = mean_ratings(ratings);

        let mut results: Vec<PopularityResult> = recipes
            .par_iter()
            .map(|recipe| {
                let stats = activity.get(&recipe.id).copied().unwrap_or_default();
                let rating = ratings.get(&recipe.id).copied().unwrap_or(0.0);
                self.score_recipe(recipe, stats, rating, baseline, today)
            })
            .collect();
        results.sort_by(|a, b| {
            descending(a.composite, b.composite).then_with(|| a.recipe_id.cmp(&b.recipe_id))
        });

        debug!(
            recipes = results.len(),
            max_count_window = baseline.max_count_window,
            max_count_recent = baseline.max_count_recent,
            "popularity pass complete"
        );
        results
    }

    fn score_recipe(
        &self,
        recipe: &Recipe,
        stats: Activity,
        rating: f64,
        baseline: PopularityBaseline,
        today: NaiveDate,
    ) -> PopularityResult {
        let window_days = self.config.window_days;
        let days_since_last = stats
            .last_prepared_on
            .map(|date| today.signed_duration_since(date).num_days());

        let frequency_term =
            ratio(stats.count_window, baseline.max_count_window) * FREQUENCY_WEIGHT;
        let trend_term = ratio(stats.count_recent, baseline.max_count_recent) * TREND_WEIGHT;
        let rating_term = (rating / MAX_RATING).clamp(0.0, 1.0) * RATING_WEIGHT;
        let recency_term = days_since_last.map_or(0.0, |days| {
            (1.0 - days as f64 / window_days as f64).max(0.0) * RECENCY_WEIGHT
        });

        PopularityResult {
            recipe_id: recipe.id.clone(),
            recipe_name: recipe.name.clone(),
            count_window: stats.count_window,
            count_recent: stats.count_recent,
            rating,
            last_prepared_on: stats.last_prepared_on,
            days_since_last,
            frequency_term,
            trend_term,
            rating_term,
            recency_term,
            composite: frequency_term + trend_term + rating_term + recency_term,
            trend: self.trend(stats),
        }
    }

    fn trend(&self, stats: Activity) -> PopularityTrend {
        if stats.last_prepared_on.is_none() {
            return PopularityTrend::New;
        }
        let recent_rate = f64::from(stats.count_recent) * DAYS_PER_MONTH
            / self.config.trend_window_days as f64;
        let window_rate =
            f64::from(stats.count_window) * DAYS_PER_MONTH / self.config.window_days as f64;

        if recent_rate > window_rate * RISING_RATIO {
            PopularityTrend::Rising
        } else if recent_rate < window_rate * FALLING_RATIO {
            PopularityTrend::Falling
        } else {
            PopularityTrend::Stable
        }
    }

    fn activity<'a>(
        &self,
        preparations: &'a [PreparationRecord],
        today: NaiveDate,
    ) -> HashMap<&'a RecipeId, Activity> {
        let mut activity: HashMap<&RecipeId, Activity> = HashMap::new();
        for preparation in preparations {
            let days_ago = today.signed_duration_since(preparation.prepared_on).num_days();
            if days_ago < 0 {
                continue;
            }
            let entry = activity.entry(&preparation.recipe_id).or_default();
            if days_ago < self.config.window_days {
                entry.count_window = entry.count_window.saturating_add(1);
            }
            if days_ago < self.config.trend_window_days {
                entry.count_recent = entry.count_recent.saturating_add(1);
            }
            entry.last_prepared_on = entry.last_prepared_on.max(Some(preparation.prepared_on));
        }
        activity
    }

    fn baseline_of(
        recipes: &[Recipe],
        activity: &HashMap<&RecipeId, Activity>,
    ) -> PopularityBaseline {
        recipes
            .iter()
            .filter_map(|recipe| activity.get(&recipe.id))
            .fold(PopularityBaseline::default(), |baseline, stats| {
                PopularityBaseline {
                    max_count_window: baseline.max_count_window.max(stats.count_window),
                    max_count_recent: baseline.max_count_recent.max(stats.count_recent),
                }
            })
    }
}

fn ratio(count: u32, max: u32) -> f64 {
    if max == 0 {
        return 0.0;
    }
    (f64::from(count) / f64::from(max)).min(1.0)
}

fn mean_ratings(ratings: &[RecipeRating]) -> HashMap<&RecipeId, f64> {
    let mut sums: HashMap<&RecipeId, (f64, u32)> = HashMap::new();
    for rating in ratings {
        let clamped = rating.clamped();
        if (clamped - rating.rating).abs() > f64::EPSILON || !rating.rating.is_finite() {
            warn!(
                recipe_id = %rating.recipe_id,
                rating = rating.rating,
                clamped,
                "rating outside 0-5 scale clamped"
            );
        }
        let entry = sums.entry(&rating.recipe_id).or_insert((0.0, 0));
        entry.0 += clamped;
        entry.1 += 1;
    }
    sums.into_iter()
        .map(|(id, (sum, count))| (id, sum / f64::from(count)))
        .collect()
}
