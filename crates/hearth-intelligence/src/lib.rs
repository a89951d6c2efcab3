// ABOUTME: Stock-aware recommendation algorithms for the Hearth household assistant
// ABOUTME: Feasibility, anti-waste, popularity, and recurrence scorers composed by one facade
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Hearth Household Intelligence

#![deny(unsafe_code)]

//! # Hearth Intelligence
//!
//! Pure, synchronous scoring over an immutable household snapshot. Every
//! scorer is a `Send + Sync` value built from an explicit configuration;
//! batch passes fan out over rayon and sort deterministically afterwards.
//!
//! ## Modules
//!
//! - **config**: `EngineConfig` sections, `HEARTH_*` overrides, validation
//! - **feasibility**: which recipes can be cooked from current stock
//! - **anti_waste**: which recipes rescue food close to expiry, rescue rate
//! - **popularity**: which recipes the household actually cooks and likes
//! - **recurrence**: which staples are bought on a cycle and due again
//! - **recommendation_engine**: the facade composing all of the above

/// Engine configuration and validation
pub mod config;

/// Shared read-only view over scorer results
pub mod score;

/// Recipe feasibility against the inventory
pub mod feasibility;

/// Expiry urgency, waste scores, and the monthly rescue rate
pub mod anti_waste;

/// Preparation-history popularity and trend labels
pub mod popularity;

/// Purchase-cycle detection and the shopping due list
pub mod recurrence;

/// Facade over the four scorers
pub mod recommendation_engine;

pub use anti_waste::{
    AntiWasteResult, AntiWasteScorer, MonthPeriod, RescueBadge, RescueSummary, RescuedItem,
    UrgentItem,
};
pub use config::{ConfigError, EngineConfig};
pub use feasibility::{
    FeasibilityResult, FeasibilityScorer, FeasibilityTier, MissingIngredient, MissingReason,
    NearExpiryIngredient,
};
pub use popularity::{PopularityBaseline, PopularityResult, PopularityScorer, PopularityTrend};
pub use recommendation_engine::{RecommendationEngine, RecommendationReport, TonightSuggestion};
pub use recurrence::{DueItem, DueStatus, RecurrenceDetector, RecurrencePattern, ShoppingDueList};
pub use score::ScoreResult;
