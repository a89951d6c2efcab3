// ABOUTME: Historical records consumed by the scorers: purchases, preparations, ratings, waste
// ABOUTME: Records are point-in-time facts supplied by the storage layer in one snapshot
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Hearth Household Intelligence

use super::ids::{IngredientId, RecipeId};
use super::unit::IngredientUnit;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Highest rating a household member can give a recipe
pub const MAX_RATING: f64 = 5.0;

/// An item bought off (or consumed from) a shopping list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseRecord {
    /// Purchased ingredient
    pub ingredient_id: IngredientId,
    /// Purchased quantity, expressed in `unit`
    pub quantity: f64,
    /// Unit of `quantity`
    #[serde(default)]
    pub unit: IngredientUnit,
    /// When the purchase was ticked off
    pub purchased_at: DateTime<Utc>,
}

impl PurchaseRecord {
    /// Create a purchase record
    #[must_use]
    pub const fn new(
        ingredient_id: IngredientId,
        quantity: f64,
        unit: IngredientUnit,
        purchased_at: DateTime<Utc>,
    ) -> Self {
        Self {
            ingredient_id,
            quantity,
            unit,
            purchased_at,
        }
    }

    /// Calendar day of the purchase (UTC)
    #[must_use]
    pub fn purchased_on(&self) -> NaiveDate {
        self.purchased_at.date_naive()
    }
}

/// A recipe cooked on a given day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreparationRecord {
    /// Cooked recipe
    pub recipe_id: RecipeId,
    /// Day it was cooked
    pub prepared_on: NaiveDate,
}

impl PreparationRecord {
    /// Create a preparation record
    #[must_use]
    pub const fn new(recipe_id: RecipeId, prepared_on: NaiveDate) -> Self {
        Self {
            recipe_id,
            prepared_on,
        }
    }
}

/// Household rating for a recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeRating {
    /// Rated recipe
    pub recipe_id: RecipeId,
    /// Rating on a 0-5 scale
    pub rating: f64,
}

impl RecipeRating {
    /// Create a rating
    #[must_use]
    pub const fn new(recipe_id: RecipeId, rating: f64) -> Self {
        Self { recipe_id, rating }
    }

    /// Rating clamped to the 0-5 scale; non-finite values count as 0
    #[must_use]
    pub fn clamped(&self) -> f64 {
        if self.rating.is_finite() {
            self.rating.clamp(0.0, MAX_RATING)
        } else {
            0.0
        }
    }
}

/// What happened to a stocked item at the end of its life
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WasteOutcome {
    /// Eaten or cooked before its expiry date
    ConsumedBeforeExpiry,
    /// Thrown away after expiring
    ExpiredDiscarded,
}

/// End-of-life event for an inventory item, input to the rescue rate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WasteEvent {
    /// Ingredient concerned
    pub ingredient_id: IngredientId,
    /// Day of the event
    pub occurred_on: NaiveDate,
    /// Outcome
    pub outcome: WasteOutcome,
}

impl WasteEvent {
    /// Create a waste event
    #[must_use]
    pub const fn new(
        ingredient_id: IngredientId,
        occurred_on: NaiveDate,
        outcome: WasteOutcome,
    ) -> Self {
        Self {
            ingredient_id,
            occurred_on,
            outcome,
        }
    }
}
