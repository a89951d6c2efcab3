// ABOUTME: Feasibility scoring: which recipes can be cooked from current stock
// ABOUTME: Weighted availability per recipe with tiers, missing list, and near-expiry evidence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Hearth Household Intelligence

//! # Feasibility Scorer
//!
//! Score = weighted available requirements / weighted requirements, where a
//! mandatory requirement weighs 1.0 and an optional one 0.5. A requirement is
//! available when the stocked quantity, converted to the requirement's unit,
//! covers the required quantity, within a relative tolerance that absorbs
//! unit conversion rounding. Unknown ingredients and incomparable units count
//! as missing; they never fail the pass. Negative or non-finite required
//! quantities are read as zero.

use crate::config::intelligence::{ConfigError, FeasibilityConfig};
use crate::score::{descending, ScoreResult};
use chrono::NaiveDate;
use hearth_core::models::{
    IngredientId, IngredientRequirement, IngredientUnit, InventoryIndex, Recipe, RecipeId,
};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use tracing::{debug, warn};

/// Minimum score for the `complete` tier
pub const COMPLETE_THRESHOLD: f64 = 1.0;

/// Minimum score for the `near_complete` tier
pub const NEAR_COMPLETE_THRESHOLD: f64 = 0.8;

/// Minimum score for the `partial` tier
pub const PARTIAL_THRESHOLD: f64 = 0.5;

/// Relative slack when comparing stocked and required quantities
const QUANTITY_TOLERANCE: f64 = 1e-9;

/// Coarse feasibility bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeasibilityTier {
    /// Every requirement is covered
    Complete,
    /// At least 80% of the weighted requirements are covered
    NearComplete,
    /// At least half of the weighted requirements are covered
    Partial,
    /// Less than half is covered
    Insufficient,
}

impl FeasibilityTier {
    /// Bucket a score
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score >= COMPLETE_THRESHOLD {
            Self::Complete
        } else if score >= NEAR_COMPLETE_THRESHOLD {
            Self::NearComplete
        } else if score >= PARTIAL_THRESHOLD {
            Self::Partial
        } else {
            Self::Insufficient
        }
    }

    /// Whether the recipe is worth suggesting for tonight
    #[must_use]
    pub const fn is_cookable(&self) -> bool {
        matches!(self, Self::Complete | Self::NearComplete)
    }

    /// Display label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Complete => "complete",
            Self::NearComplete => "near_complete",
            Self::Partial => "partial",
            Self::Insufficient => "insufficient",
        }
    }
}

/// Why a requirement is not covered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingReason {
    /// No inventory entry for the ingredient
    NotStocked,
    /// Stocked in a unit that cannot be compared (e.g., pieces vs grams)
    UnitMismatch,
    /// Stocked, but not enough
    Insufficient,
}

/// A requirement the inventory cannot cover
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissingIngredient {
    /// Ingredient concerned
    pub ingredient_id: IngredientId,
    /// Quantity the recipe needs
    pub required_quantity: f64,
    /// Quantity on hand in the requirement's unit (0 when unknown)
    pub on_hand_quantity: f64,
    /// Unit of both quantities
    pub unit: IngredientUnit,
    /// Whether the requirement was optional
    pub optional: bool,
    /// Reason it is missing
    pub reason: MissingReason,
}

/// A covered requirement whose stock expires soon
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NearExpiryIngredient {
    /// Ingredient concerned
    pub ingredient_id: IngredientId,
    /// Expiry date of the stocked item
    pub expires_on: NaiveDate,
    /// Days until expiry, negative once expired
    pub days_remaining: i64,
}

/// Feasibility of one recipe against one inventory snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeasibilityResult {
    /// Scored recipe
    pub recipe_id: RecipeId,
    /// Recipe display name
    pub recipe_name: String,
    /// Preparation plus cooking time, used for tie-breaks
    pub total_time_minutes: u32,
    /// Weighted availability in `[0, 1]`
    pub score: f64,
    /// Tier derived from `score`
    pub tier: FeasibilityTier,
    /// Requirements covered by stock
    pub available: Vec<IngredientId>,
    /// Requirements not covered
    pub missing: Vec<MissingIngredient>,
    /// Covered requirements whose stock is close to expiry
    pub near_expiry: Vec<NearExpiryIngredient>,
}

impl ScoreResult for FeasibilityResult {
    fn subject_id(&self) -> &str {
        self.recipe_id.as_str()
    }

    fn subject_name(&self) -> &str {
        &self.recipe_name
    }

    fn score(&self) -> f64 {
        self.score
    }

    fn label(&self) -> &'static str {
        self.tier.label()
    }
}

enum Coverage {
    Available(Option<NearExpiryIngredient>),
    Missing(MissingIngredient),
}

/// Scores recipes by how much of their ingredient list is in stock
#[derive(Debug, Clone, Default)]
pub struct FeasibilityScorer {
    config: FeasibilityConfig,
}

impl FeasibilityScorer {
    /// Create a scorer
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid
    pub fn new(config: FeasibilityConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Score one recipe
    #[must_use]
    pub fn score_recipe(
        &self,
        recipe: &Recipe,
        inventory: &InventoryIndex<'_>,
        today: NaiveDate,
    ) -> FeasibilityResult {
        let mut available = Vec::new();
        let mut missing = Vec::new();
        let mut near_expiry = Vec::new();
        let mut available_weight = 0.0;

        for requirement in &recipe.requirements {
            match self.coverage(requirement, inventory, today) {
                Coverage::Available(expiring) => {
                    available_weight += requirement.weight();
                    available.push(requirement.ingredient_id.clone());
                    near_expiry.extend(expiring);
                }
                Coverage::Missing(entry) => missing.push(entry),
            }
        }

        let total_weight = recipe.total_weight();
        let score = if total_weight > 0.0 {
            (available_weight / total_weight).clamp(0.0, 1.0)
        } else {
            1.0
        };

        FeasibilityResult {
            recipe_id: recipe.id.clone(),
            recipe_name: recipe.name.clone(),
            total_time_minutes: recipe.total_time_minutes,
            score,
            tier: FeasibilityTier::from_score(score),
            available,
            missing,
            near_expiry,
        }
    }

    /// Score every recipe in the catalog, best first
    ///
    /// Recipes are scored independently in parallel; the result is ordered by
    /// score descending, then shorter total time, then identity.
    #[must_use]
    pub fn score_catalog(
        &self,
        recipes: &[Recipe],
        inventory: &InventoryIndex<'_>,
        today: NaiveDate,
    ) -> Vec<FeasibilityResult> {
        let mut results: Vec<FeasibilityResult> = recipes
            .par_iter()
            .map(|recipe| self.score_recipe(recipe, inventory, today))
            .collect();
        results.sort_by(compare_results);

        debug!(
            recipes = results.len(),
            inventory_items = inventory.len(),
            complete = results
                .iter()
                .filter(|r| r.tier == FeasibilityTier::Complete)
                .count(),
            "feasibility pass complete"
        );
        results
    }

    fn coverage(
        &self,
        requirement: &IngredientRequirement,
        inventory: &InventoryIndex<'_>,
        today: NaiveDate,
    ) -> Coverage {
        let required = required_quantity(requirement);
        let missing = |on_hand: f64, reason: MissingReason| {
            Coverage::Missing(MissingIngredient {
                ingredient_id: requirement.ingredient_id.clone(),
                required_quantity: required,
                on_hand_quantity: on_hand,
                unit: requirement.unit,
                optional: requirement.optional,
                reason,
            })
        };

        let Some(item) = inventory.get(&requirement.ingredient_id) else {
            return missing(0.0, MissingReason::NotStocked);
        };
        let Some(on_hand) = item.quantity_in(requirement.unit) else {
            return missing(0.0, MissingReason::UnitMismatch);
        };
        if !covers(on_hand, required) {
            return missing(on_hand, MissingReason::Insufficient);
        }

        let expiring = item.expires_on.and_then(|expires_on| {
            let days_remaining = expires_on.signed_duration_since(today).num_days();
            (days_remaining <= self.config.near_expiry_horizon_days).then(|| {
                NearExpiryIngredient {
                    ingredient_id: requirement.ingredient_id.clone(),
                    expires_on,
                    days_remaining,
                }
            })
        });
        Coverage::Available(expiring)
    }
}

/// Required quantity, with invalid values read as zero
fn required_quantity(requirement: &IngredientRequirement) -> f64 {
    if requirement.quantity.is_finite() && requirement.quantity >= 0.0 {
        requirement.quantity
    } else {
        warn!(
            ingredient_id = %requirement.ingredient_id,
            quantity = requirement.quantity,
            "invalid required quantity treated as zero"
        );
        0.0
    }
}

/// Whether `on_hand` covers `required`; a NaN stock level never does
fn covers(on_hand: f64, required: f64) -> bool {
    let slack = QUANTITY_TOLERANCE * on_hand.abs().max(required.abs());
    on_hand + slack >= required
}

/// Ordering used for feasibility rankings
pub(crate) fn compare_results(a: &FeasibilityResult, b: &FeasibilityResult) -> Ordering {
    descending(a.score, b.score)
        .then_with(|| a.total_time_minutes.cmp(&b.total_time_minutes))
        .then_with(|| a.recipe_id.cmp(&b.recipe_id))
}
