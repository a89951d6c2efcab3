// ABOUTME: Main library entry point for the Hearth household recommendation engine
// ABOUTME: Re-exports the core model and scorers and provides structured logging setup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Hearth Household Intelligence

#![deny(unsafe_code)]

//! # Hearth
//!
//! Stock-aware recommendations for a household: which recipes can be cooked
//! tonight, which ones rescue food about to expire, which ones the household
//! actually likes, and which staples are due on the shopping list.
//!
//! ## Architecture
//!
//! - **`hearth_core`**: typed identities, recipes, inventory, history records,
//!   the `CatalogReader` seam, and `AppError`
//! - **`hearth_intelligence`**: engine configuration, the four scorers, and the
//!   `RecommendationEngine` facade
//! - **logging**: subscriber setup for binaries
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use chrono::NaiveDate;
//! use hearth::hearth_core::CatalogSnapshot;
//! use hearth::hearth_intelligence::{EngineConfig, RecommendationEngine};
//!
//! fn main() -> anyhow::Result<()> {
//!     let snapshot = CatalogSnapshot::from_json_str(r#"{"recipes": []}"#)?;
//!     let engine = RecommendationEngine::new(EngineConfig::load()?)?;
//!     let today = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap_or_default();
//!     let report = engine.run(&snapshot, today);
//!     println!("{} recipes for tonight", report.feasible_tonight.len());
//!     Ok(())
//! }
//! ```

/// Core model, catalog access, and error types
pub use hearth_core;

/// Scorers, configuration, and the recommendation facade
pub use hearth_intelligence;

/// Structured logging configuration for binaries
pub mod logging;

pub use hearth_core::{AppError, AppResult, CatalogReader, CatalogSnapshot, ErrorCode};
pub use hearth_intelligence::{
    EngineConfig, RecommendationEngine, RecommendationReport, ScoreResult,
};
