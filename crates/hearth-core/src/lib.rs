// ABOUTME: Core types for the Hearth household recommendation engine
// ABOUTME: Foundation crate with error handling, typed identities, data model, and catalog access
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Hearth Household Intelligence

#![deny(unsafe_code)]

//! # Hearth Core
//!
//! Foundation crate providing the shared vocabulary of the stock-aware
//! recommendation engine. It changes rarely so the scoring crate and the
//! application crate recompile independently.
//!
//! ## Modules
//!
//! - **errors**: `AppError`, `ErrorCode`, and the `AppResult` alias
//! - **models**: recipes, inventory, units, and history records
//! - **catalog**: the `CatalogReader` seam and the in-memory `CatalogSnapshot`

/// Unified error handling for caller misuse
pub mod errors;

/// Typed records read by the scorers
pub mod models;

/// Read-only catalog access
pub mod catalog;

pub use catalog::{CatalogReader, CatalogSnapshot};
pub use errors::{AppError, AppResult, ErrorCode};
