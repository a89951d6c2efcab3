// ABOUTME: Measurement units for requirements and inventory with base-unit conversion
// ABOUTME: Quantities are comparable only when their units share a dimension
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Hearth Household Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;

/// Physical dimension a unit measures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    /// Weight, base unit grams
    Mass,
    /// Volume, base unit millilitres
    Volume,
    /// Whole items, base unit pieces
    Count,
}

/// Ingredient measurement unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum IngredientUnit {
    /// Weight in grams (base unit)
    #[default]
    #[serde(rename = "g")]
    Grams,
    /// Weight in kilograms (1000g)
    #[serde(rename = "kg")]
    Kilograms,
    /// Volume in millilitres (base unit)
    #[serde(rename = "ml")]
    Milliliters,
    /// Volume in centilitres (10ml)
    #[serde(rename = "cl")]
    Centiliters,
    /// Volume in litres (1000ml)
    #[serde(rename = "l")]
    Liters,
    /// Teaspoons (5ml)
    #[serde(rename = "tsp")]
    Teaspoons,
    /// Tablespoons (15ml)
    #[serde(rename = "tbsp")]
    Tablespoons,
    /// Count of whole items (eggs, lemons, ...)
    #[serde(rename = "pc")]
    Pieces,
}

impl IngredientUnit {
    /// Dimension measured by this unit
    #[must_use]
    pub const fn dimension(&self) -> Dimension {
        match self {
            Self::Grams | Self::Kilograms => Dimension::Mass,
            Self::Milliliters
            | Self::Centiliters
            | Self::Liters
            | Self::Teaspoons
            | Self::Tablespoons => Dimension::Volume,
            Self::Pieces => Dimension::Count,
        }
    }

    /// Multiplier from this unit to its dimension's base unit
    #[must_use]
    pub const fn base_factor(&self) -> f64 {
        match self {
            Self::Grams | Self::Milliliters | Self::Pieces => 1.0,
            Self::Kilograms | Self::Liters => 1000.0,
            Self::Centiliters => 10.0,
            Self::Teaspoons => 5.0,
            Self::Tablespoons => 15.0,
        }
    }

    /// Get the abbreviation for display
    #[must_use]
    pub const fn abbreviation(&self) -> &'static str {
        match self {
            Self::Grams => "g",
            Self::Kilograms => "kg",
            Self::Milliliters => "ml",
            Self::Centiliters => "cl",
            Self::Liters => "l",
            Self::Teaspoons => "tsp",
            Self::Tablespoons => "tbsp",
            Self::Pieces => "pc",
        }
    }

    /// Whether quantities in both units can be compared
    #[must_use]
    pub fn is_comparable(&self, other: Self) -> bool {
        self.dimension() == other.dimension()
    }

    /// Convert a quantity expressed in this unit into the base unit
    #[must_use]
    pub fn to_base(&self, quantity: f64) -> f64 {
        quantity * self.base_factor()
    }

    /// Convert `quantity` from this unit into `target`
    ///
    /// Returns `None` when the units measure different dimensions.
    #[must_use]
    pub fn convert(&self, quantity: f64, target: Self) -> Option<f64> {
        self.is_comparable(target)
            .then(|| self.to_base(quantity) / target.base_factor())
    }
}

impl fmt::Display for IngredientUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbreviation())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_kilograms_to_grams() {
        let grams = IngredientUnit::Kilograms
            .convert(0.5, IngredientUnit::Grams)
            .unwrap();
        assert!((grams - 500.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_spoons_share_volume_dimension() {
        let ml = IngredientUnit::Tablespoons
            .convert(2.0, IngredientUnit::Teaspoons)
            .unwrap();
        assert!((ml - 6.0).abs() < 1e-9);
    }

    #[test]
    fn test_mass_and_count_not_comparable() {
        assert!(IngredientUnit::Grams
            .convert(100.0, IngredientUnit::Pieces)
            .is_none());
    }
}
