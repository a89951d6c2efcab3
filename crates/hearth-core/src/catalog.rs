// ABOUTME: Read-only catalog accessor trait and its in-memory snapshot implementation
// ABOUTME: The storage layer loads everything once; scorers only borrow slices from it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Hearth Household Intelligence

//! # Catalog Access
//!
//! [`CatalogReader`] is the seam between the engine and whatever persists the
//! household data. Implementations hand out borrowed slices of an already
//! loaded snapshot: reading happens once, before scoring begins, and nothing
//! in the engine blocks or performs I/O afterwards.

use crate::errors::AppResult;
use crate::models::{
    InventoryItem, PreparationRecord, PurchaseRecord, Recipe, RecipeRating, WasteEvent,
};
use serde::{Deserialize, Serialize};
use std::io::Read;

/// Read-only accessor over a point-in-time view of household data
pub trait CatalogReader {
    /// Recipe catalog
    fn recipes(&self) -> &[Recipe];

    /// Inventory snapshot, at most one entry per ingredient
    fn inventory(&self) -> &[InventoryItem];

    /// Purchase history, any order
    fn purchases(&self) -> &[PurchaseRecord];

    /// Preparation history, any order
    fn preparations(&self) -> &[PreparationRecord];

    /// Household recipe ratings
    fn ratings(&self) -> &[RecipeRating];

    /// End-of-life events for inventory items
    fn waste_events(&self) -> &[WasteEvent];
}

/// In-memory catalog snapshot, loadable from JSON
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogSnapshot {
    /// Recipe catalog
    #[serde(default)]
    pub recipes: Vec<Recipe>,
    /// Inventory snapshot
    #[serde(default)]
    pub inventory: Vec<InventoryItem>,
    /// Purchase history
    #[serde(default)]
    pub purchases: Vec<PurchaseRecord>,
    /// Preparation history
    #[serde(default)]
    pub preparations: Vec<PreparationRecord>,
    /// Recipe ratings
    #[serde(default)]
    pub ratings: Vec<RecipeRating>,
    /// Waste events
    #[serde(default)]
    pub waste_events: Vec<WasteEvent>,
}

impl CatalogSnapshot {
    /// Create an empty snapshot
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a snapshot from a JSON document
    ///
    /// # Errors
    ///
    /// Returns `SerializationError` for malformed JSON or empty identities
    pub fn from_json_str(json: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse a snapshot from any reader
    ///
    /// # Errors
    ///
    /// Returns `SerializationError` if the document cannot be read or parsed
    pub fn from_reader(reader: impl Read) -> AppResult<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Add a recipe
    #[must_use]
    pub fn with_recipe(mut self, recipe: Recipe) -> Self {
        self.recipes.push(recipe);
        self
    }

    /// Add an inventory item
    #[must_use]
    pub fn with_inventory_item(mut self, item: InventoryItem) -> Self {
        self.inventory.push(item);
        self
    }

    /// Add a purchase
    #[must_use]
    pub fn with_purchase(mut self, purchase: PurchaseRecord) -> Self {
        self.purchases.push(purchase);
        self
    }

    /// Add a preparation
    #[must_use]
    pub fn with_preparation(mut self, preparation: PreparationRecord) -> Self {
        self.preparations.push(preparation);
        self
    }

    /// Add a rating
    #[must_use]
    pub fn with_rating(mut self, rating: RecipeRating) -> Self {
        self.ratings.push(rating);
        self
    }

    /// Add a waste event
    #[must_use]
    pub fn with_waste_event(mut self, event: WasteEvent) -> Self {
        self.waste_events.push(event);
        self
    }
}

impl CatalogReader for CatalogSnapshot {
    fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    fn inventory(&self) -> &[InventoryItem] {
        &self.inventory
    }

    fn purchases(&self) -> &[PurchaseRecord] {
        &self.purchases
    }

    fn preparations(&self) -> &[PreparationRecord] {
        &self.preparations
    }

    fn ratings(&self) -> &[RecipeRating] {
        &self.ratings
    }

    fn waste_events(&self) -> &[WasteEvent] {
        &self.waste_events
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    #[test]
    fn test_parse_minimal_snapshot() {
        let json = r#"{
            "recipes": [{
                "id": "omelette",
                "name": "Omelette",
                "total_time_minutes": 10,
                "requirements": [
                    {"ingredient_id": "oeufs", "quantity": 3, "unit": "pc"},
                    {"ingredient_id": "ciboulette", "quantity": 5, "unit": "g", "optional": true}
                ]
            }],
            "inventory": [
                {"ingredient_id": "oeufs", "quantity": 6, "unit": "pc", "expires_on": "2025-03-12"}
            ]
        }"#;

        let snapshot = CatalogSnapshot::from_json_str(json).unwrap();
        assert_eq!(snapshot.recipes().len(), 1);
        assert_eq!(snapshot.recipes()[0].servings, 1);
        assert!(snapshot.recipes()[0].requirements[1].optional);
        assert!(snapshot.purchases().is_empty());
    }

    #[test]
    fn test_empty_identity_fails_fast() {
        let json = r#"{"recipes": [{"id": "", "name": "Sans nom"}]}"#;
        let err = CatalogSnapshot::from_json_str(json).unwrap_err();
        assert_eq!(err.code, ErrorCode::SerializationError);
        assert!(err.message.contains("recipe_id must not be empty"));
    }
}
