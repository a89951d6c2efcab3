// ABOUTME: Recipe catalog entries and their ingredient requirements
// ABOUTME: Recipes are immutable for the duration of a scoring pass
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Hearth Household Intelligence

use super::ids::{IngredientId, RecipeId};
use super::unit::IngredientUnit;
use serde::{Deserialize, Serialize};

/// Weight of a mandatory requirement in feasibility scoring
pub const MANDATORY_WEIGHT: f64 = 1.0;

/// Weight of an optional requirement in feasibility scoring
pub const OPTIONAL_WEIGHT: f64 = 0.5;

/// One ingredient a recipe needs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientRequirement {
    /// Ingredient referenced by this requirement
    pub ingredient_id: IngredientId,
    /// Quantity needed, expressed in `unit`
    pub quantity: f64,
    /// Unit of `quantity`
    #[serde(default)]
    pub unit: IngredientUnit,
    /// Optional requirements count at half weight
    #[serde(default)]
    pub optional: bool,
}

impl IngredientRequirement {
    /// Create a mandatory requirement
    #[must_use]
    pub const fn new(ingredient_id: IngredientId, quantity: f64, unit: IngredientUnit) -> Self {
        Self {
            ingredient_id,
            quantity,
            unit,
            optional: false,
        }
    }

    /// Mark the requirement optional
    #[must_use]
    pub const fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Feasibility weight of this requirement
    #[must_use]
    pub const fn weight(&self) -> f64 {
        if self.optional {
            OPTIONAL_WEIGHT
        } else {
            MANDATORY_WEIGHT
        }
    }
}

/// A recipe from the household catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    /// Catalog identity
    pub id: RecipeId,
    /// Display name
    pub name: String,
    /// Preparation plus cooking time in minutes
    #[serde(default)]
    pub total_time_minutes: u32,
    /// Declared number of portions
    #[serde(default = "default_servings")]
    pub servings: u32,
    /// Ordered ingredient requirements
    #[serde(default)]
    pub requirements: Vec<IngredientRequirement>,
}

const fn default_servings() -> u32 {
    1
}

impl Recipe {
    /// Create a recipe with no requirements
    #[must_use]
    pub fn new(id: RecipeId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            total_time_minutes: 0,
            servings: default_servings(),
            requirements: Vec::new(),
        }
    }

    /// Set total preparation plus cooking time
    #[must_use]
    pub const fn with_total_time(mut self, minutes: u32) -> Self {
        self.total_time_minutes = minutes;
        self
    }

    /// Set declared portion count
    #[must_use]
    pub const fn with_servings(mut self, servings: u32) -> Self {
        self.servings = servings;
        self
    }

    /// Append a requirement
    #[must_use]
    pub fn with_requirement(mut self, requirement: IngredientRequirement) -> Self {
        self.requirements.push(requirement);
        self
    }

    /// Sum of requirement weights
    #[must_use]
    pub fn total_weight(&self) -> f64 {
        self.requirements
            .iter()
            .map(IngredientRequirement::weight)
            .sum()
    }
}
