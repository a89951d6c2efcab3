// ABOUTME: Inventory snapshot entries and an identity-keyed lookup index over them
// ABOUTME: The engine reads quantities and expiry dates but never mutates them
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Hearth Household Intelligence

use super::ids::IngredientId;
use super::unit::IngredientUnit;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::warn;

/// One stocked ingredient
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    /// Ingredient identity
    pub ingredient_id: IngredientId,
    /// Quantity on hand, expressed in `unit`
    pub quantity: f64,
    /// Unit of `quantity`
    #[serde(default)]
    pub unit: IngredientUnit,
    /// Best-before or use-by date, if tracked
    #[serde(default)]
    pub expires_on: Option<NaiveDate>,
}

impl InventoryItem {
    /// Create an item without expiry tracking
    #[must_use]
    pub const fn new(ingredient_id: IngredientId, quantity: f64, unit: IngredientUnit) -> Self {
        Self {
            ingredient_id,
            quantity,
            unit,
            expires_on: None,
        }
    }

    /// Set the expiry date
    #[must_use]
    pub const fn expiring_on(mut self, date: NaiveDate) -> Self {
        self.expires_on = Some(date);
        self
    }

    /// Days from `today` until expiry; negative once expired
    #[must_use]
    pub fn days_until_expiry(&self, today: NaiveDate) -> Option<i64> {
        self.expires_on
            .map(|expiry| expiry.signed_duration_since(today).num_days())
    }

    /// Quantity on hand converted into `unit`, when the units are comparable
    ///
    /// Negative stock counts as empty.
    #[must_use]
    pub fn quantity_in(&self, unit: IngredientUnit) -> Option<f64> {
        self.unit.convert(self.quantity.max(0.0), unit)
    }
}

/// Identity-keyed view over an inventory slice
#[derive(Debug, Clone, Default)]
pub struct InventoryIndex<'a> {
    items: HashMap<&'a IngredientId, &'a InventoryItem>,
}

impl<'a> InventoryIndex<'a> {
    /// Index an inventory snapshot
    ///
    /// The caller guarantees one entry per identity; should a duplicate slip
    /// through, the first entry wins.
    #[must_use]
    pub fn new(items: &'a [InventoryItem]) -> Self {
        let mut index = HashMap::with_capacity(items.len());
        for item in items {
            if index.contains_key(&item.ingredient_id) {
                warn!(
                    ingredient_id = %item.ingredient_id,
                    "duplicate inventory entry ignored"
                );
                continue;
            }
            index.insert(&item.ingredient_id, item);
        }
        Self { items: index }
    }

    /// Look up the stocked item for an ingredient
    #[must_use]
    pub fn get(&self, ingredient_id: &IngredientId) -> Option<&'a InventoryItem> {
        self.items.get(ingredient_id).copied()
    }

    /// Iterate indexed items in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = &'a InventoryItem> + '_ {
        self.items.values().copied()
    }

    /// Number of distinct ingredients
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the snapshot is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
