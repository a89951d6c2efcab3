// ABOUTME: Facade composing the four scorers into household-facing recommendation lists
// ABOUTME: Feasible-tonight, anti-waste, trending, shopping-due, and the one-call report pipeline
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Hearth Household Intelligence

//! # Recommendation Engine
//!
//! The compose methods take scorer outputs the caller already holds and never
//! touch storage. [`RecommendationEngine::run`] is the convenience pipeline:
//! it reads one snapshot through a [`CatalogReader`], runs every scorer, and
//! assembles a [`RecommendationReport`].

use crate::anti_waste::{AntiWasteResult, AntiWasteScorer, MonthPeriod, RescueSummary};
use crate::config::intelligence::{ConfigError, EngineConfig};
use crate::feasibility::{
    FeasibilityResult, FeasibilityScorer, FeasibilityTier, MissingIngredient,
    NearExpiryIngredient,
};
use crate::popularity::{PopularityResult, PopularityScorer};
use crate::recurrence::{DueItem, RecurrenceDetector, ShoppingDueList};
use crate::score::{descending, ScoreResult};
use chrono::NaiveDate;
use hearth_core::catalog::CatalogReader;
use hearth_core::models::{InventoryIndex, RecipeId};
use rayon::join;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Instant;
use tracing::info;

/// Scale applied to the feasibility score before adding the waste score
const FEASIBILITY_SCALE: f64 = 100.0;

/// Recipe suggested for tonight's dinner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TonightSuggestion {
    /// Suggested recipe
    pub recipe_id: RecipeId,
    /// Recipe display name
    pub recipe_name: String,
    /// Preparation plus cooking time
    pub total_time_minutes: u32,
    /// Feasibility score in `[0, 1]`
    pub feasibility: f64,
    /// Feasibility tier, complete or near-complete
    pub tier: FeasibilityTier,
    /// Anti-waste score, 0 when the recipe rescues nothing
    pub waste_score: u32,
    /// `feasibility * 100 + waste_score`
    pub combined_score: f64,
    /// Requirements still missing
    pub missing: Vec<MissingIngredient>,
    /// Covered requirements close to expiry
    pub near_expiry: Vec<NearExpiryIngredient>,
}

impl ScoreResult for TonightSuggestion {
    fn subject_id(&self) -> &str {
        self.recipe_id.as_str()
    }

    fn subject_name(&self) -> &str {
        &self.recipe_name
    }

    fn score(&self) -> f64 {
        self.combined_score
    }

    fn label(&self) -> &'static str {
        self.tier.label()
    }
}

/// Everything the household dashboard shows, computed for one day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationReport {
    /// Reference day of the computation
    pub generated_for: NaiveDate,
    /// Cookable recipes, best first
    pub feasible_tonight: Vec<TonightSuggestion>,
    /// Recipes rescuing expiring food, best first
    pub anti_waste: Vec<AntiWasteResult>,
    /// Most popular recipes
    pub trending: Vec<PopularityResult>,
    /// Staples to buy, overdue first
    pub shopping_due: Vec<DueItem>,
    /// Rescue rate for the month of `generated_for`
    pub rescue: RescueSummary,
}

/// Composes scorer outputs into recommendation lists
#[derive(Debug, Clone, Default)]
pub struct RecommendationEngine {
    config: EngineConfig,
    feasibility: FeasibilityScorer,
    anti_waste: AntiWasteScorer,
    popularity: PopularityScorer,
    recurrence: RecurrenceDetector,
}

impl RecommendationEngine {
    /// Build an engine and its scorers from an explicit configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration section is invalid
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            feasibility: FeasibilityScorer::new(config.feasibility.clone())?,
            anti_waste: AntiWasteScorer::new(config.anti_waste.clone())?,
            popularity: PopularityScorer::new(config.popularity.clone())?,
            recurrence: RecurrenceDetector::new(config.recurrence.clone())?,
            config,
        })
    }

    /// Build an engine from defaults and `HEARTH_*` environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if an override cannot be parsed or fails validation
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::new(EngineConfig::load()?)
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Feasibility scorer
    #[must_use]
    pub const fn feasibility_scorer(&self) -> &FeasibilityScorer {
        &self.feasibility
    }

    /// Anti-waste scorer
    #[must_use]
    pub const fn anti_waste_scorer(&self) -> &AntiWasteScorer {
        &self.anti_waste
    }

    /// Popularity scorer
    #[must_use]
    pub const fn popularity_scorer(&self) -> &PopularityScorer {
        &self.popularity
    }

    /// Recurrence detector
    #[must_use]
    pub const fn recurrence_detector(&self) -> &RecurrenceDetector {
        &self.recurrence
    }

    /// Complete and near-complete recipes ranked by `feasibility * 100 + waste_score`
    ///
    /// Ties break on shorter total time, then identity.
    #[must_use]
    pub fn feasible_tonight(
        &self,
        feasibility: &[FeasibilityResult],
        anti_waste: &[AntiWasteResult],
    ) -> Vec<TonightSuggestion> {
        let waste_scores: HashMap<&RecipeId, u32> = anti_waste
            .iter()
            .map(|result| (&result.recipe_id, result.waste_score))
            .collect();

        let mut suggestions: Vec<TonightSuggestion> = feasibility
            .iter()
            .filter(|result| result.tier.is_cookable())
            .map(|result| {
                let waste_score = waste_scores.get(&result.recipe_id).copied().unwrap_or(0);
                TonightSuggestion {
                    recipe_id: result.recipe_id.clone(),
                    recipe_name: result.recipe_name.clone(),
                    total_time_minutes: result.total_time_minutes,
                    feasibility: result.score,
                    tier: result.tier,
                    waste_score,
                    combined_score: result.score.mul_add(FEASIBILITY_SCALE, f64::from(waste_score)),
                    missing: result.missing.clone(),
                    near_expiry: result.near_expiry.clone(),
                }
            })
            .collect();
        suggestions.sort_by(|a, b| {
            descending(a.combined_score, b.combined_score)
                .then_with(|| a.total_time_minutes.cmp(&b.total_time_minutes))
                .then_with(|| a.recipe_id.cmp(&b.recipe_id))
        });
        suggestions
    }

    /// Anti-waste ranking truncated to the configured limit
    #[must_use]
    pub fn anti_waste(&self, ranked: &[AntiWasteResult]) -> Vec<AntiWasteResult> {
        ranked
            .iter()
            .filter(|result| result.waste_score > 0)
            .take(self.config.recommendation.anti_waste_limit)
            .cloned()
            .collect()
    }

    /// Top popularity results, composite descending
    #[must_use]
    pub fn trending(&self, popularity: &[PopularityResult]) -> Vec<PopularityResult> {
        let mut ranked: Vec<&PopularityResult> = popularity.iter().collect();
        ranked.sort_by(|a, b| {
            descending(a.composite, b.composite).then_with(|| a.recipe_id.cmp(&b.recipe_id))
        });
        ranked
            .into_iter()
            .take(self.config.recommendation.trending_limit)
            .cloned()
            .collect()
    }

    /// Overdue and upcoming staples, one entry per ingredient, overdue first
    #[must_use]
    pub fn shopping_due(&self, due: &ShoppingDueList) -> Vec<DueItem> {
        due.merged()
    }

    /// Run every scorer over one snapshot and assemble the report
    #[must_use]
    pub fn run<R>(&self, catalog: &R, today: NaiveDate) -> RecommendationReport
    where
        R: CatalogReader + Sync + ?Sized,
    {
        let started = Instant::now();
        let recipes = catalog.recipes();
        let inventory = InventoryIndex::new(catalog.inventory());

        let ((feasibility, ranked_waste), (popularity, due)) = join(
            || {
                (
                    self.feasibility.score_catalog(recipes, &inventory, today),
                    self.anti_waste.rank(recipes, &inventory, today),
                )
            },
            || {
                let patterns = self.recurrence.detect_all(catalog.purchases(), today);
                (
                    self.popularity.score_catalog(
                        recipes,
                        catalog.preparations(),
                        catalog.ratings(),
                        today,
                    ),
                    self.recurrence.due_list(&patterns, today),
                )
            },
        );

        let report = RecommendationReport {
            generated_for: today,
            feasible_tonight: self.feasible_tonight(&feasibility, &ranked_waste),
            anti_waste: self.anti_waste(&ranked_waste),
            trending: self.trending(&popularity),
            shopping_due: self.shopping_due(&due),
            rescue: AntiWasteScorer::rescue_summary(
                catalog.waste_events(),
                MonthPeriod::containing(today),
            ),
        };

        info!(
            today = %today,
            recipes = recipes.len(),
            feasible_tonight = report.feasible_tonight.len(),
            anti_waste = report.anti_waste.len(),
            trending = report.trending.len(),
            shopping_due = report.shopping_due.len(),
            rescue_badge = report.rescue.badge.label(),
            elapsed_ms = started.elapsed().as_millis(),
            "recommendation report generated"
        );
        report
    }
}
