// ABOUTME: Shared view over every scorer's output for rendering and logging
// ABOUTME: Exposes subject identity, numeric score, and the tier or badge label
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Hearth Household Intelligence

use std::cmp::Ordering;

/// Common read-only view of a scorer result
///
/// Results are transient: recomputed on every call and never persisted by the
/// engine. Each concrete result type also carries its own evidence.
pub trait ScoreResult {
    /// Identity of the scored recipe or ingredient
    fn subject_id(&self) -> &str;

    /// Human-readable subject name
    fn subject_name(&self) -> &str {
        self.subject_id()
    }

    /// Numeric score on the scorer's own scale
    fn score(&self) -> f64;

    /// Tier, badge, or status label shown to the household
    fn label(&self) -> &'static str;
}

/// Total order on scores, descending, treating NaN as lowest
pub(crate) fn descending(a: f64, b: f64) -> Ordering {
    b.partial_cmp(&a).unwrap_or_else(|| a.is_nan().cmp(&b.is_nan()))
}
