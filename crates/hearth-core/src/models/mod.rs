// ABOUTME: Core data models consumed by the recommendation engine
// ABOUTME: Re-exports identities, units, recipes, inventory, and history records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Hearth Household Intelligence

//! # Data Models
//!
//! Typed records for everything the scorers read. Entity fields are explicit
//! struct fields, never string-keyed maps, so the invariants below hold by
//! construction:
//!
//! - identities are never empty
//! - quantities carry a unit, and cross-unit comparison goes through
//!   [`IngredientUnit::convert`]
//! - ratings are clamped to the 0-5 scale when read

mod history;
mod ids;
mod inventory;
mod recipe;
mod unit;

pub use history::{
    PreparationRecord, PurchaseRecord, RecipeRating, WasteEvent, WasteOutcome, MAX_RATING,
};
pub use ids::{IngredientId, RecipeId};
pub use inventory::{InventoryIndex, InventoryItem};
pub use recipe::{IngredientRequirement, Recipe, MANDATORY_WEIGHT, OPTIONAL_WEIGHT};
pub use unit::{Dimension, IngredientUnit};
