// ABOUTME: Purchase-cycle detection for staple ingredients from shopping history
// ABOUTME: Mean interval, reliability from dispersion, next expected date, and the due list
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Hearth Household Intelligence

//! # Recurrence Detector
//!
//! For each ingredient, purchases inside the lookback window are ordered and
//! reduced to whole-day intervals. The mean interval is the cycle length and
//! `1 - σ/μ` (population standard deviation) its reliability. A lone interval
//! is trusted at [`SINGLE_INTERVAL_RELIABILITY`].

use crate::config::intelligence::{ConfigError, RecurrenceConfig};
use crate::score::{descending, ScoreResult};
use chrono::{Days, NaiveDate};
use hearth_core::models::{IngredientId, IngredientUnit, PurchaseRecord};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use tracing::debug;

/// Reliability given to a cycle estimated from a single interval
pub const SINGLE_INTERVAL_RELIABILITY: f64 = 0.4;

/// Detected (or absent) purchase cycle for one ingredient
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecurrencePattern {
    /// Ingredient concerned
    pub ingredient_id: IngredientId,
    /// Purchases considered
    pub sample_count: usize,
    /// Mean days between purchases, `None` without a pattern
    pub frequency_days: Option<f64>,
    /// Confidence in the cycle, 0 without a pattern
    pub reliability: f64,
    /// Most recent purchase considered
    pub last_purchase_on: Option<NaiveDate>,
    /// Last purchase plus the rounded cycle length
    pub next_expected_on: Option<NaiveDate>,
    /// Mean purchased quantity, expressed in `unit`
    pub suggested_quantity: Option<f64>,
    /// Unit of the latest purchase
    pub unit: IngredientUnit,
}

impl RecurrencePattern {
    fn none(
        ingredient_id: IngredientId,
        sample_count: usize,
        last_purchase_on: Option<NaiveDate>,
        unit: IngredientUnit,
    ) -> Self {
        Self {
            ingredient_id,
            sample_count,
            frequency_days: None,
            reliability: 0.0,
            last_purchase_on,
            next_expected_on: None,
            suggested_quantity: None,
            unit,
        }
    }

    /// Whether a cycle was detected
    #[must_use]
    pub const fn has_pattern(&self) -> bool {
        self.next_expected_on.is_some()
    }
}

impl ScoreResult for RecurrencePattern {
    fn subject_id(&self) -> &str {
        self.ingredient_id.as_str()
    }

    fn score(&self) -> f64 {
        self.reliability
    }

    fn label(&self) -> &'static str {
        if self.has_pattern() {
            "recurring"
        } else {
            "no_pattern"
        }
    }
}

/// Position of a due item relative to today
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DueStatus {
    /// Expected date already passed
    Overdue,
    /// Expected within the upcoming horizon
    Upcoming,
}

impl DueStatus {
    /// Display label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Overdue => "overdue",
            Self::Upcoming => "upcoming",
        }
    }
}

/// Ingredient expected to be bought again soon
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DueItem {
    /// Ingredient concerned
    pub ingredient_id: IngredientId,
    /// Overdue or upcoming
    pub status: DueStatus,
    /// Days from today to the expected date, negative when overdue
    pub days_offset: i64,
    /// Expected purchase date
    pub next_expected_on: NaiveDate,
    /// Cycle length in days
    pub frequency_days: f64,
    /// Cycle reliability
    pub reliability: f64,
    /// Suggested quantity to buy
    pub suggested_quantity: Option<f64>,
    /// Unit of `suggested_quantity`
    pub unit: IngredientUnit,
}

impl ScoreResult for DueItem {
    fn subject_id(&self) -> &str {
        self.ingredient_id.as_str()
    }

    fn score(&self) -> f64 {
        self.reliability
    }

    fn label(&self) -> &'static str {
        self.status.label()
    }
}

/// Due items split by status
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShoppingDueList {
    /// Most overdue first
    pub overdue: Vec<DueItem>,
    /// Soonest first
    pub upcoming: Vec<DueItem>,
}

impl ShoppingDueList {
    /// Overdue and upcoming items merged, one per ingredient, overdue first
    #[must_use]
    pub fn merged(&self) -> Vec<DueItem> {
        let mut seen: HashSet<&IngredientId> = HashSet::new();
        self.overdue
            .iter()
            .chain(&self.upcoming)
            .filter(|item| seen.insert(&item.ingredient_id))
            .cloned()
            .collect()
    }

    /// Whether nothing is due
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.overdue.is_empty() && self.upcoming.is_empty()
    }
}

/// Detects purchase cycles and what is due again
#[derive(Debug, Clone, Default)]
pub struct RecurrenceDetector {
    config: RecurrenceConfig,
}

impl RecurrenceDetector {
    /// Create a detector
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid
    pub fn new(config: RecurrenceConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Detect the cycle of one ingredient
    ///
    /// Records for other ingredients are ignored, so a mixed history may be
    /// passed as-is.
    #[must_use]
    pub fn detect(
        &self,
        ingredient_id: &IngredientId,
        purchases: &[PurchaseRecord],
        today: NaiveDate,
    ) -> RecurrencePattern {
        let records: Vec<&PurchaseRecord> = purchases
            .iter()
            .filter(|record| &record.ingredient_id == ingredient_id)
            .collect();
        self.detect_records(ingredient_id, records, today)
    }

    /// Detect cycles for every ingredient in a mixed history, by identity
    #[must_use]
    pub fn detect_all(
        &self,
        purchases: &[PurchaseRecord],
        today: NaiveDate,
    ) -> Vec<RecurrencePattern> {
        let mut groups: BTreeMap<&IngredientId, Vec<&PurchaseRecord>> = BTreeMap::new();
        for record in purchases {
            groups.entry(&record.ingredient_id).or_default().push(record);
        }

        let groups: Vec<(&IngredientId, Vec<&PurchaseRecord>)> = groups.into_iter().collect();
        let patterns: Vec<RecurrencePattern> = groups
            .into_par_iter()
            .map(|(ingredient_id, records)| self.detect_records(ingredient_id, records, today))
            .collect();

        debug!(
            ingredients = patterns.len(),
            purchases = purchases.len(),
            recurring = patterns.iter().filter(|p| p.has_pattern()).count(),
            "recurrence detection complete"
        );
        patterns
    }

    /// Split detected patterns into overdue and upcoming items
    #[must_use]
    pub fn due_list(&self, patterns: &[RecurrencePattern], today: NaiveDate) -> ShoppingDueList {
        let mut list = ShoppingDueList::default();

        for pattern in patterns {
            let (Some(next_expected_on), Some(frequency_days)) =
                (pattern.next_expected_on, pattern.frequency_days)
            else {
                continue;
            };
            let days_offset = next_expected_on.signed_duration_since(today).num_days();
            let status = if days_offset < 0 {
                DueStatus::Overdue
            } else if days_offset <= self.config.upcoming_horizon_days {
                DueStatus::Upcoming
            } else {
                continue;
            };

            let item = DueItem {
                ingredient_id: pattern.ingredient_id.clone(),
                status,
                days_offset,
                next_expected_on,
                frequency_days,
                reliability: pattern.reliability,
                suggested_quantity: pattern.suggested_quantity,
                unit: pattern.unit,
            };
            match status {
                DueStatus::Overdue => list.overdue.push(item),
                DueStatus::Upcoming => list.upcoming.push(item),
            }
        }

        let by_date = |a: &DueItem, b: &DueItem| {
            a.days_offset
                .cmp(&b.days_offset)
                .then_with(|| descending(a.reliability, b.reliability))
                .then_with(|| a.ingredient_id.cmp(&b.ingredient_id))
        };
        list.overdue.sort_by(by_date);
        list.upcoming.sort_by(by_date);
        list
    }

    fn detect_records(
        &self,
        ingredient_id: &IngredientId,
        mut records: Vec<&PurchaseRecord>,
        today: NaiveDate,
    ) -> RecurrencePattern {
        records.retain(|record| {
            let days_ago = today.signed_duration_since(record.purchased_on()).num_days();
            (0..=self.config.lookback_days).contains(&days_ago)
        });
        records.sort_by_key(|record| record.purchased_at);

        let last = records.last().copied();
        let last_purchase_on = last.map(PurchaseRecord::purchased_on);
        let unit = last.map_or_else(IngredientUnit::default, |record| record.unit);

        if records.len() < self.config.min_samples {
            return RecurrencePattern::none(
                ingredient_id.clone(),
                records.len(),
                last_purchase_on,
                unit,
            );
        }

        let intervals: Vec<f64> = records
            .windows(2)
            .map(|pair| {
                pair[1]
                    .purchased_on()
                    .signed_duration_since(pair[0].purchased_on())
                    .num_days() as f64
            })
            .collect();
        let Some((mean, reliability)) = cycle_statistics(&intervals) else {
            return RecurrencePattern::none(
                ingredient_id.clone(),
                records.len(),
                last_purchase_on,
                unit,
            );
        };

        let next_expected_on = last_purchase_on
            .and_then(|date| date.checked_add_days(Days::new(mean.round() as u64)));

        RecurrencePattern {
            ingredient_id: ingredient_id.clone(),
            sample_count: records.len(),
            frequency_days: Some(mean),
            reliability,
            last_purchase_on,
            next_expected_on,
            suggested_quantity: mean_quantity(&records, unit),
            unit,
        }
    }
}

/// Mean interval and reliability, `None` when no cycle can be inferred
fn cycle_statistics(intervals: &[f64]) -> Option<(f64, f64)> {
    if intervals.is_empty() {
        return None;
    }
    let count = intervals.len() as f64;
    let mean = intervals.iter().sum::<f64>() / count;
    if mean <= 0.0 {
        return None;
    }
    if intervals.len() == 1 {
        return Some((mean, SINGLE_INTERVAL_RELIABILITY));
    }
    let variance = intervals
        .iter()
        .map(|interval| (interval - mean).powi(2))
        .sum::<f64>()
        / count;
    let reliability = (1.0 - variance.sqrt() / mean).clamp(0.0, 1.0);
    Some((mean, reliability))
}

/// Mean quantity of the records expressible in `unit`
fn mean_quantity(records: &[&PurchaseRecord], unit: IngredientUnit) -> Option<f64> {
    let quantities: Vec<f64> = records
        .iter()
        .filter_map(|record| record.unit.convert(record.quantity, unit))
        .filter(|quantity| quantity.is_finite() && *quantity > 0.0)
        .collect();
    if quantities.is_empty() {
        return None;
    }
    Some(quantities.iter().sum::<f64>() / quantities.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regular_intervals_are_fully_reliable() {
        let (mean, reliability) = cycle_statistics(&[7.0, 7.0, 7.0]).unwrap_or_default();
        assert!((mean - 7.0).abs() < f64::EPSILON);
        assert!((reliability - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_single_interval_uses_fixed_reliability() {
        let (_, reliability) = cycle_statistics(&[10.0]).unwrap_or_default();
        assert!((reliability - SINGLE_INTERVAL_RELIABILITY).abs() < f64::EPSILON);
    }

    #[test]
    fn test_zero_mean_is_no_cycle() {
        assert!(cycle_statistics(&[0.0, 0.0]).is_none());
    }

    #[test]
    fn test_erratic_intervals_lower_reliability() {
        let (_, reliability) = cycle_statistics(&[2.0, 12.0, 4.0]).unwrap_or_default();
        assert!(reliability < 0.5);
    }
}
