// ABOUTME: Anti-waste scoring: recipes that consume inventory close to expiry
// ABOUTME: Urgency levels, capped waste scores, and the monthly rescue-rate badge
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Hearth Household Intelligence

//! # Anti-Waste Scorer
//!
//! Items expiring within the horizon (or already expired) form the urgent set.
//! Each urgent item gets an urgency level `min(5, max(1, 8 - days_remaining))`,
//! forced to 5 once expired. A recipe's waste score sums
//! `max(0, 8 - days_remaining)` over the distinct urgent ingredients it uses,
//! scaled by 10 and capped at 100. Expired items weigh as if expiring today.

use crate::config::intelligence::{AntiWasteConfig, ConfigError};
use crate::score::ScoreResult;
use chrono::{Datelike, NaiveDate};
use hearth_core::errors::{AppError, AppResult};
use hearth_core::models::{
    IngredientId, IngredientUnit, InventoryIndex, Recipe, RecipeId, WasteEvent, WasteOutcome,
};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};
use std::fmt;
use tracing::debug;

/// Days-remaining pivot of the urgency and weight formulas
const URGENCY_PIVOT_DAYS: i64 = 8;

/// Lowest urgency level
pub const MIN_URGENCY: u8 = 1;

/// Highest urgency level, always used for expired items
pub const MAX_URGENCY: u8 = 5;

/// Multiplier applied to the summed item weights
pub const WASTE_SCORE_SCALE: u32 = 10;

/// Upper bound of a waste score
pub const MAX_WASTE_SCORE: u32 = 100;

/// Rescue rate (percent) for the gold badge
pub const GOLD_RESCUE_RATE: f64 = 90.0;

/// Rescue rate (percent) for the silver badge
pub const SILVER_RESCUE_RATE: f64 = 75.0;

/// Rescue rate (percent) for the bronze badge
pub const BRONZE_RESCUE_RATE: f64 = 50.0;

/// Urgency level (1-5) for days remaining before expiry
#[must_use]
pub fn urgency_level(days_remaining: i64) -> u8 {
    if days_remaining < 0 {
        return MAX_URGENCY;
    }
    let level = (URGENCY_PIVOT_DAYS - days_remaining)
        .clamp(i64::from(MIN_URGENCY), i64::from(MAX_URGENCY));
    u8::try_from(level).unwrap_or(MAX_URGENCY)
}

/// Rescue weight `max(0, 8 - days_remaining)`, expired items counting as due today
#[must_use]
pub fn rescue_weight(days_remaining: i64) -> u32 {
    let weight = (URGENCY_PIVOT_DAYS - days_remaining.max(0)).max(0);
    u32::try_from(weight).unwrap_or(0)
}

/// Inventory item inside the urgency horizon
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UrgentItem {
    /// Ingredient concerned
    pub ingredient_id: IngredientId,
    /// Quantity on hand
    pub quantity: f64,
    /// Unit of `quantity`
    pub unit: IngredientUnit,
    /// Expiry date
    pub expires_on: NaiveDate,
    /// Days until expiry, negative once expired
    pub days_remaining: i64,
    /// Urgency level 1-5
    pub urgency: u8,
}

impl UrgentItem {
    /// Whether the item is already past its expiry date
    #[must_use]
    pub const fn is_expired(&self) -> bool {
        self.days_remaining < 0
    }
}

/// Urgent ingredient a recipe would consume
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RescuedItem {
    /// Ingredient concerned
    pub ingredient_id: IngredientId,
    /// Days until expiry, negative once expired
    pub days_remaining: i64,
    /// Urgency level 1-5
    pub urgency: u8,
    /// Contribution to the unscaled waste score
    pub weight: u32,
}

/// How much food a recipe rescues
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AntiWasteResult {
    /// Scored recipe
    pub recipe_id: RecipeId,
    /// Recipe display name
    pub recipe_name: String,
    /// Preparation plus cooking time, used for tie-breaks
    pub total_time_minutes: u32,
    /// Scaled, capped waste score in `[0, 100]`
    pub waste_score: u32,
    /// Urgent ingredients the recipe uses, most urgent first
    pub rescued: Vec<RescuedItem>,
}

impl AntiWasteResult {
    /// Highest urgency among rescued items
    #[must_use]
    pub fn max_urgency(&self) -> Option<u8> {
        self.rescued.iter().map(|item| item.urgency).max()
    }
}

impl ScoreResult for AntiWasteResult {
    fn subject_id(&self) -> &str {
        self.recipe_id.as_str()
    }

    fn subject_name(&self) -> &str {
        &self.recipe_name
    }

    fn score(&self) -> f64 {
        f64::from(self.waste_score)
    }

    fn label(&self) -> &'static str {
        match self.max_urgency() {
            Some(MAX_URGENCY) => "critical",
            Some(level) if level >= 3 => "urgent",
            Some(_) => "soon",
            None => "none",
        }
    }
}

/// Calendar month used for rescue-rate roll-ups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MonthPeriod {
    /// Calendar year
    pub year: i32,
    /// Month 1-12
    pub month: u32,
}

impl MonthPeriod {
    /// Create a period
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` if `month` is not within 1-12
    pub fn new(year: i32, month: u32) -> AppResult<Self> {
        if !(1..=12).contains(&month) {
            return Err(AppError::out_of_range(
                "month",
                format!("month must be within 1-12, got {month}"),
            ));
        }
        Ok(Self { year, month })
    }

    /// Month containing `date`
    #[must_use]
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Whether `date` falls in this month
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

impl fmt::Display for MonthPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Monthly anti-waste badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RescueBadge {
    /// At least 90% of expiring food rescued
    Gold,
    /// At least 75%
    Silver,
    /// At least 50%
    Bronze,
    /// Anything lower, including no data
    InProgress,
}

impl RescueBadge {
    /// Badge for a rescue rate in percent
    #[must_use]
    pub fn from_rate(rate_percent: Option<f64>) -> Self {
        match rate_percent {
            Some(rate) if rate >= GOLD_RESCUE_RATE => Self::Gold,
            Some(rate) if rate >= SILVER_RESCUE_RATE => Self::Silver,
            Some(rate) if rate >= BRONZE_RESCUE_RATE => Self::Bronze,
            _ => Self::InProgress,
        }
    }

    /// Display label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Gold => "gold",
            Self::Silver => "silver",
            Self::Bronze => "bronze",
            Self::InProgress => "in_progress",
        }
    }
}

/// Rescue-rate roll-up for one month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RescueSummary {
    /// Month covered
    pub period: MonthPeriod,
    /// Items consumed before expiry
    pub consumed_before_expiry: u32,
    /// Items discarded after expiry
    pub expired_discarded: u32,
    /// Percentage rescued, `None` without events
    pub rescue_rate: Option<f64>,
    /// Badge earned
    pub badge: RescueBadge,
}

/// Scores recipes by how much expiring stock they use up
#[derive(Debug, Clone, Default)]
pub struct AntiWasteScorer {
    config: AntiWasteConfig,
}

impl AntiWasteScorer {
    /// Create a scorer
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid
    pub fn new(config: AntiWasteConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Items inside the urgency horizon, soonest expiry first
    #[must_use]
    pub fn urgent_items(
        &self,
        inventory: &InventoryIndex<'_>,
        today: NaiveDate,
    ) -> Vec<UrgentItem> {
        let mut urgent: Vec<UrgentItem> = inventory
            .iter()
            .filter_map(|item| {
                let expires_on = item.expires_on?;
                let days_remaining = expires_on.signed_duration_since(today).num_days();
                (days_remaining <= self.config.horizon_days).then(|| UrgentItem {
                    ingredient_id: item.ingredient_id.clone(),
                    quantity: item.quantity,
                    unit: item.unit,
                    expires_on,
                    days_remaining,
                    urgency: urgency_level(days_remaining),
                })
            })
            .collect();
        urgent.sort_by(|a, b| {
            a.days_remaining
                .cmp(&b.days_remaining)
                .then_with(|| a.ingredient_id.cmp(&b.ingredient_id))
        });
        urgent
    }

    /// Waste score of one recipe against a precomputed urgent set
    #[must_use]
    pub fn score_recipe(&self, recipe: &Recipe, urgent: &[UrgentItem]) -> AntiWasteResult {
        let by_id: HashMap<&IngredientId, &UrgentItem> = urgent
            .iter()
            .map(|item| (&item.ingredient_id, item))
            .collect();
        Self::score_with_lookup(recipe, &by_id)
    }

    /// Recipes that rescue at least one urgent item, highest waste score first
    ///
    /// Ties break on more rescued items, then shorter total time, then identity.
    #[must_use]
    pub fn rank(
        &self,
        recipes: &[Recipe],
        inventory: &InventoryIndex<'_>,
        today: NaiveDate,
    ) -> Vec<AntiWasteResult> {
        let urgent = self.urgent_items(inventory, today);
        if urgent.is_empty() {
            debug!(recipes = recipes.len(), "no urgent inventory, anti-waste ranking empty");
            return Vec::new();
        }

        let by_id: HashMap<&IngredientId, &UrgentItem> = urgent
            .iter()
            .map(|item| (&item.ingredient_id, item))
            .collect();

        let mut ranked: Vec<AntiWasteResult> = recipes
            .par_iter()
            .map(|recipe| Self::score_with_lookup(recipe, &by_id))
            .filter(|result| result.waste_score > 0)
            .collect();
        ranked.sort_by(compare_results);

        debug!(
            recipes = recipes.len(),
            urgent_items = urgent.len(),
            rescuing_recipes = ranked.len(),
            "anti-waste ranking complete"
        );
        ranked
    }

    /// Rescue-rate roll-up for one month
    #[must_use]
    pub fn rescue_summary(events: &[WasteEvent], period: MonthPeriod) -> RescueSummary {
        let (consumed, discarded) = events
            .iter()
            .filter(|event| period.contains(event.occurred_on))
            .fold((0_u32, 0_u32), |(consumed, discarded), event| {
                match event.outcome {
                    WasteOutcome::ConsumedBeforeExpiry => (consumed.saturating_add(1), discarded),
                    WasteOutcome::ExpiredDiscarded => (consumed, discarded.saturating_add(1)),
                }
            });

        let total = consumed.saturating_add(discarded);
        let rescue_rate =
            (total > 0).then(|| f64::from(consumed) / f64::from(total) * 100.0);

        RescueSummary {
            period,
            consumed_before_expiry: consumed,
            expired_discarded: discarded,
            rescue_rate,
            badge: RescueBadge::from_rate(rescue_rate),
        }
    }

    fn score_with_lookup(
        recipe: &Recipe,
        urgent: &HashMap<&IngredientId, &UrgentItem>,
    ) -> AntiWasteResult {
        let mut seen: HashSet<&IngredientId> = HashSet::new();
        let mut rescued: Vec<RescuedItem> = recipe
            .requirements
            .iter()
            .filter(|requirement| seen.insert(&requirement.ingredient_id))
            .filter_map(|requirement| urgent.get(&requirement.ingredient_id))
            .filter_map(|item| {
                let weight = rescue_weight(item.days_remaining);
                (weight > 0).then(|| RescuedItem {
                    ingredient_id: item.ingredient_id.clone(),
                    days_remaining: item.days_remaining,
                    urgency: item.urgency,
                    weight,
                })
            })
            .collect();
        rescued.sort_by(|a, b| {
            a.days_remaining
                .cmp(&b.days_remaining)
                .then_with(|| a.ingredient_id.cmp(&b.ingredient_id))
        });

        let raw: u32 = rescued.iter().map(|item| item.weight).sum();
        let waste_score = raw.saturating_mul(WASTE_SCORE_SCALE).min(MAX_WASTE_SCORE);

        AntiWasteResult {
            recipe_id: recipe.id.clone(),
            recipe_name: recipe.name.clone(),
            total_time_minutes: recipe.total_time_minutes,
            waste_score,
            rescued,
        }
    }
}

fn compare_results(a: &AntiWasteResult, b: &AntiWasteResult) -> Ordering {
    b.waste_score
        .cmp(&a.waste_score)
        .then_with(|| b.rescued.len().cmp(&a.rescued.len()))
        .then_with(|| a.total_time_minutes.cmp(&b.total_time_minutes))
        .then_with(|| a.recipe_id.cmp(&b.recipe_id))
}
