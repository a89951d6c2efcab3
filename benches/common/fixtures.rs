// ABOUTME: Benchmark fixtures generating synthetic household catalogs
// ABOUTME: Deterministic recipes, inventory, and histories for reproducible measurements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Hearth Household Intelligence

//! Benchmark fixtures generating synthetic household catalogs.
//!
//! Every value derives from the element index, so two runs measure the
//! same data.

use chrono::{Days, NaiveDate};
use hearth::hearth_core::models::{
    IngredientId, IngredientRequirement, IngredientUnit, InventoryItem, PreparationRecord,
    PurchaseRecord, Recipe, RecipeId, RecipeRating, WasteEvent, WasteOutcome,
};
use hearth::CatalogSnapshot;

/// Predefined catalog sizes for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum CatalogSize {
    /// Small household (50 recipes)
    Small,
    /// Typical household (500 recipes)
    Medium,
    /// Stress test (5000 recipes)
    Large,
}

impl CatalogSize {
    #[must_use]
    pub const fn recipe_count(self) -> usize {
        match self {
            Self::Small => 50,
            Self::Medium => 500,
            Self::Large => 5000,
        }
    }

    /// Distinct ingredients referenced by the catalog
    #[must_use]
    pub const fn ingredient_count(self) -> usize {
        match self {
            Self::Small => 40,
            Self::Medium => 200,
            Self::Large => 800,
        }
    }
}

/// Reference day of every generated catalog
#[must_use]
pub fn reference_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 10).unwrap_or_default()
}

fn days_before(days: usize) -> NaiveDate {
    let today = reference_day();
    today
        .checked_sub_days(Days::new(days as u64))
        .unwrap_or(today)
}

fn ingredient(index: usize) -> IngredientId {
    IngredientId::new(format!("ingredient-{index:04}")).unwrap()
}

fn recipe_id(index: usize) -> RecipeId {
    RecipeId::new(format!("recipe-{index:05}")).unwrap()
}

const fn unit_for(ingredient_index: usize) -> IngredientUnit {
    match ingredient_index % 3 {
        0 => IngredientUnit::Grams,
        1 => IngredientUnit::Milliliters,
        _ => IngredientUnit::Pieces,
    }
}

/// Recipes with 3 to 8 requirements each, every fourth one optional
#[must_use]
pub fn generate_recipes(size: CatalogSize) -> Vec<Recipe> {
    let ingredients = size.ingredient_count();
    (0..size.recipe_count())
        .map(|index| {
            let requirement_count = 3 + index % 6;
            (0..requirement_count).fold(
                Recipe::new(recipe_id(index), format!("Recipe {index}"))
                    .with_total_time(10 + (index * 7 % 80) as u32),
                |recipe, slot| {
                    let ingredient_index = (index * 31 + slot * 17) % ingredients;
                    let requirement = IngredientRequirement::new(
                        ingredient(ingredient_index),
                        (50 + (index * 13 + slot * 29) % 400) as f64,
                        unit_for(ingredient_index),
                    );
                    let requirement = if slot % 4 == 3 {
                        requirement.optional()
                    } else {
                        requirement
                    };
                    recipe.with_requirement(requirement)
                },
            )
        })
        .collect()
}

/// Stock for two thirds of the ingredients, some of it expiring within days
#[must_use]
pub fn generate_inventory(size: CatalogSize) -> Vec<InventoryItem> {
    (0..size.ingredient_count())
        .filter(|index| index % 3 != 2)
        .map(|index| {
            let item = InventoryItem::new(
                ingredient(index),
                (index * 37 % 600) as f64,
                unit_for(index),
            );
            match index % 5 {
                0 => item,
                offset => item.expiring_on(
                    reference_day()
                        .checked_add_days(Days::new((offset * 3) as u64))
                        .unwrap_or_else(reference_day),
                ),
            }
        })
        .collect()
}

/// A year of purchases on per-ingredient cycles of 5 to 19 days
#[must_use]
pub fn generate_purchases(size: CatalogSize) -> Vec<PurchaseRecord> {
    (0..size.ingredient_count())
        .flat_map(|index| {
            let cycle = 5 + index % 15;
            (0..365 / cycle).map(move |n| {
                PurchaseRecord::new(
                    ingredient(index),
                    (1 + n % 3) as f64,
                    unit_for(index),
                    days_before(n * cycle + index % 3)
                        .and_hms_opt(10, 0, 0)
                        .unwrap_or_default()
                        .and_utc(),
                )
            })
        })
        .collect()
}

/// Preparations spread over 120 days, weighted toward low recipe indices
#[must_use]
pub fn generate_preparations(size: CatalogSize) -> Vec<PreparationRecord> {
    let recipes = size.recipe_count();
    (0..recipes * 4)
        .map(|n| {
            let recipe = (n * n + 7 * n) % recipes.max(1);
            PreparationRecord::new(recipe_id(recipe), days_before(n % 120))
        })
        .collect()
}

/// One rating for every other recipe
#[must_use]
pub fn generate_ratings(size: CatalogSize) -> Vec<RecipeRating> {
    (0..size.recipe_count())
        .step_by(2)
        .map(|index| RecipeRating::new(recipe_id(index), (index % 11) as f64 / 2.0))
        .collect()
}

/// Waste outcomes over the last 60 days
#[must_use]
pub fn generate_waste_events(size: CatalogSize) -> Vec<WasteEvent> {
    (0..size.ingredient_count())
        .map(|index| {
            let outcome = if index % 4 == 0 {
                WasteOutcome::ExpiredDiscarded
            } else {
                WasteOutcome::ConsumedBeforeExpiry
            };
            WasteEvent::new(ingredient(index), days_before(index % 60), outcome)
        })
        .collect()
}

/// Complete snapshot of the given size
#[must_use]
pub fn generate_snapshot(size: CatalogSize) -> CatalogSnapshot {
    CatalogSnapshot {
        recipes: generate_recipes(size),
        inventory: generate_inventory(size),
        purchases: generate_purchases(size),
        preparations: generate_preparations(size),
        ratings: generate_ratings(size),
        waste_events: generate_waste_events(size),
    }
}
