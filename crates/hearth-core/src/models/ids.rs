// ABOUTME: Typed identities for recipes and ingredients with non-empty validation
// ABOUTME: Construction rejects blank identities so scorers never see an empty key
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Hearth Household Intelligence

use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

macro_rules! identity {
    ($(#[$meta:meta])* $name:ident, $field:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Create an identity, trimming whitespace
            ///
            /// # Errors
            ///
            /// Returns `MissingRequiredField` if the identity is empty after trimming
            pub fn new(value: impl AsRef<str>) -> AppResult<Self> {
                let trimmed = value.as_ref().trim();
                if trimmed.is_empty() {
                    return Err(AppError::missing_field($field));
                }
                Ok(Self(trimmed.to_owned()))
            }

            /// Borrow the identity as a string slice
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.pad(&self.0)
            }
        }

        impl FromStr for $name {
            type Err = AppError;

            fn from_str(s: &str) -> AppResult<Self> {
                Self::new(s)
            }
        }

        impl TryFrom<String> for $name {
            type Error = AppError;

            fn try_from(value: String) -> AppResult<Self> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }
    };
}

identity!(
    /// Identity of a recipe in the catalog
    RecipeId,
    "recipe_id"
);

identity!(
    /// Identity of an ingredient, shared by requirements, inventory, and history
    IngredientId,
    "ingredient_id"
);
