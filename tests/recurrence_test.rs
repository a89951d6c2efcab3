// ABOUTME: Integration tests for purchase-cycle detection and the shopping due list
// ABOUTME: Covers cycle statistics, sample thresholds, lookback filtering, and due classification
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Hearth Household Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use chrono::{Days, Duration, NaiveDate};
use common::{date, ingredient, init_test_logging, purchase, purchases, today};
use hearth::hearth_core::models::{IngredientUnit, PurchaseRecord};
use hearth::hearth_intelligence::config::intelligence::RecurrenceConfig;
use hearth::hearth_intelligence::recurrence::{
    DueItem, DueStatus, RecurrenceDetector, ShoppingDueList,
};
use hearth::ScoreResult;

fn detector() -> RecurrenceDetector {
    init_test_logging();
    RecurrenceDetector::new(RecurrenceConfig::default()).unwrap()
}

/// Milk bought every week starting 2025-03-01
fn weekly_milk() -> Vec<PurchaseRecord> {
    let start = date(2025, 3, 1);
    [0, 7, 14, 21]
        .into_iter()
        .map(|offset| {
            purchase(
                "lait",
                start.checked_add_days(Days::new(offset)).unwrap(),
                1.0,
                IngredientUnit::Liters,
            )
        })
        .collect()
}

fn day_after_start(days: u64) -> NaiveDate {
    date(2025, 3, 1).checked_add_days(Days::new(days)).unwrap()
}

#[test]
fn test_weekly_cycle_detected() {
    let pattern = detector().detect(&ingredient("lait"), &weekly_milk(), day_after_start(27));

    assert!(pattern.has_pattern());
    assert_eq!(pattern.sample_count, 4);
    assert!((pattern.frequency_days.unwrap() - 7.0).abs() < 1e-9);
    assert!((pattern.reliability - 1.0).abs() < 1e-9);
    assert_eq!(pattern.last_purchase_on, Some(date(2025, 3, 22)));
    assert_eq!(pattern.next_expected_on, Some(date(2025, 3, 29)));
    assert_eq!(pattern.label(), "recurring");
}

#[test]
fn test_cycle_due_tomorrow_is_upcoming() {
    let detector = detector();
    let today = day_after_start(27);
    let pattern = detector.detect(&ingredient("lait"), &weekly_milk(), today);

    let due = detector.due_list(&[pattern], today);

    assert!(due.overdue.is_empty());
    assert_eq!(due.upcoming.len(), 1);
    assert_eq!(due.upcoming[0].status, DueStatus::Upcoming);
    assert_eq!(due.upcoming[0].days_offset, 1);
}

#[test]
fn test_cycle_missed_yesterday_is_overdue() {
    let detector = detector();
    let today = day_after_start(29);
    let pattern = detector.detect(&ingredient("lait"), &weekly_milk(), today);

    let due = detector.due_list(&[pattern], today);

    assert!(due.upcoming.is_empty());
    assert_eq!(due.overdue.len(), 1);
    assert_eq!(due.overdue[0].days_offset, -1);
    assert_eq!(due.overdue[0].label(), "overdue");
}

#[test]
fn test_too_few_samples_means_no_pattern() {
    let pattern = detector().detect(&ingredient("cafe"), &purchases(), today());

    assert!(!pattern.has_pattern());
    assert_eq!(pattern.sample_count, 2);
    assert!(pattern.frequency_days.is_none());
    assert!(pattern.reliability.abs() < f64::EPSILON);
    assert_eq!(pattern.last_purchase_on, Some(date(2025, 3, 5)));
    assert_eq!(pattern.label(), "no_pattern");
}

#[test]
fn test_single_interval_allowed_with_lower_minimum() {
    let detector = RecurrenceDetector::new(RecurrenceConfig {
        min_samples: 2,
        ..RecurrenceConfig::default()
    })
    .unwrap();

    let pattern = detector.detect(&ingredient("cafe"), &purchases(), today());

    assert!((pattern.frequency_days.unwrap() - 13.0).abs() < 1e-9);
    assert!((pattern.reliability - 0.4).abs() < 1e-9);
    assert_eq!(pattern.next_expected_on, Some(date(2025, 3, 18)));

    // Eight days away: outside the upcoming horizon
    assert!(detector.due_list(&[pattern], today()).is_empty());
}

#[test]
fn test_irregular_intervals_lower_reliability() {
    let history = vec![
        purchase("oeufs", date(2025, 1, 1), 12.0, IngredientUnit::Pieces),
        purchase("oeufs", date(2025, 1, 3), 6.0, IngredientUnit::Pieces),
        purchase("oeufs", date(2025, 1, 15), 6.0, IngredientUnit::Pieces),
        purchase("oeufs", date(2025, 1, 19), 12.0, IngredientUnit::Pieces),
    ];

    let pattern = detector().detect(&ingredient("oeufs"), &history, date(2025, 1, 20));

    // Intervals 2, 12, 4: mean 6
    assert!((pattern.frequency_days.unwrap() - 6.0).abs() < 1e-9);
    assert!(pattern.reliability > 0.0 && pattern.reliability < 0.5);
    assert!((pattern.suggested_quantity.unwrap() - 9.0).abs() < 1e-9);
}

#[test]
fn test_purchases_outside_lookback_or_in_future_ignored() {
    let history = vec![
        purchase("riz", date(2024, 11, 1), 1.0, IngredientUnit::Kilograms),
        purchase("riz", date(2025, 2, 1), 1.0, IngredientUnit::Kilograms),
        purchase("riz", date(2025, 3, 1), 1.0, IngredientUnit::Kilograms),
        purchase("riz", date(2025, 3, 20), 1.0, IngredientUnit::Kilograms),
    ];

    let pattern = detector().detect(&ingredient("riz"), &history, today());

    assert_eq!(pattern.sample_count, 2);
    assert!(!pattern.has_pattern());
}

#[test]
fn test_same_day_purchases_have_no_cycle() {
    let history = vec![
        purchase("sel", today(), 1.0, IngredientUnit::Kilograms),
        purchase("sel", today(), 1.0, IngredientUnit::Kilograms),
        purchase("sel", today(), 1.0, IngredientUnit::Kilograms),
    ];

    let pattern = detector().detect(&ingredient("sel"), &history, today());

    assert!(!pattern.has_pattern());
}

#[test]
fn test_suggested_quantity_uses_latest_unit() {
    let history = vec![
        purchase("lait", date(2025, 2, 17), 1.0, IngredientUnit::Liters),
        purchase("lait", date(2025, 2, 24), 500.0, IngredientUnit::Milliliters),
        purchase("lait", date(2025, 3, 3), 1.0, IngredientUnit::Liters),
    ];

    let pattern = detector().detect(&ingredient("lait"), &history, today());

    assert_eq!(pattern.unit, IngredientUnit::Liters);
    assert!((pattern.suggested_quantity.unwrap() - 2.5 / 3.0).abs() < 1e-9);
}

#[test]
fn test_detect_all_groups_by_ingredient() {
    let patterns = detector().detect_all(&purchases(), today());

    let ids: Vec<&str> = patterns.iter().map(|p| p.ingredient_id.as_str()).collect();
    assert_eq!(ids, vec!["cafe", "lait", "pain"]);

    let lait = &patterns[1];
    assert!((lait.frequency_days.unwrap() - 7.0).abs() < 1e-9);
    assert!((lait.suggested_quantity.unwrap() - 1.5).abs() < 1e-9);
}

#[test]
fn test_household_due_list() {
    let detector = detector();
    let patterns = detector.detect_all(&purchases(), today());

    let due = detector.due_list(&patterns, today());

    assert_eq!(due.overdue.len(), 1);
    assert_eq!(due.overdue[0].ingredient_id, ingredient("pain"));
    assert_eq!(due.overdue[0].days_offset, -7);
    assert_eq!(due.upcoming.len(), 1);
    assert_eq!(due.upcoming[0].ingredient_id, ingredient("lait"));
    assert_eq!(due.upcoming[0].days_offset, 0);

    let merged: Vec<String> = due
        .merged()
        .iter()
        .map(|item| item.ingredient_id.to_string())
        .collect();
    assert_eq!(merged, vec!["pain", "lait"]);
}

fn due_item(id: &str, status: DueStatus, days_offset: i64) -> DueItem {
    DueItem {
        ingredient_id: ingredient(id),
        status,
        days_offset,
        next_expected_on: today()
            .checked_add_signed(Duration::days(days_offset))
            .unwrap(),
        frequency_days: 7.0,
        reliability: 0.9,
        suggested_quantity: Some(1.0),
        unit: IngredientUnit::Pieces,
    }
}

#[test]
fn test_merged_list_keeps_overdue_entry_on_conflict() {
    let due = ShoppingDueList {
        overdue: vec![
            due_item("pain", DueStatus::Overdue, -3),
            due_item("lait", DueStatus::Overdue, -1),
        ],
        upcoming: vec![
            due_item("lait", DueStatus::Upcoming, 1),
            due_item("beurre", DueStatus::Upcoming, 2),
        ],
    };

    let merged = due.merged();

    let order: Vec<(&str, DueStatus)> = merged
        .iter()
        .map(|item| (item.ingredient_id.as_str(), item.status))
        .collect();
    assert_eq!(
        order,
        vec![
            ("pain", DueStatus::Overdue),
            ("lait", DueStatus::Overdue),
            ("beurre", DueStatus::Upcoming),
        ]
    );
    let lait = merged
        .iter()
        .find(|item| item.ingredient_id.as_str() == "lait")
        .unwrap();
    assert_eq!(lait.days_offset, -1);
}

#[test]
fn test_due_items_sorted_by_offset_then_reliability() {
    let detector = detector();
    let history = vec![
        // Regular weekly cycle, expected 2025-03-12
        purchase("beurre", date(2025, 2, 19), 1.0, IngredientUnit::Pieces),
        purchase("beurre", date(2025, 2, 26), 1.0, IngredientUnit::Pieces),
        purchase("beurre", date(2025, 3, 5), 1.0, IngredientUnit::Pieces),
        // Irregular weekly cycle, also expected 2025-03-12
        purchase("yaourt", date(2025, 2, 12), 4.0, IngredientUnit::Pieces),
        purchase("yaourt", date(2025, 2, 16), 4.0, IngredientUnit::Pieces),
        purchase("yaourt", date(2025, 2, 26), 4.0, IngredientUnit::Pieces),
        purchase("yaourt", date(2025, 3, 5), 4.0, IngredientUnit::Pieces),
        // Every four days, expected tomorrow
        purchase("pain", date(2025, 2, 27), 1.0, IngredientUnit::Pieces),
        purchase("pain", date(2025, 3, 3), 1.0, IngredientUnit::Pieces),
        purchase("pain", date(2025, 3, 7), 1.0, IngredientUnit::Pieces),
    ];
    let patterns = detector.detect_all(&history, today());

    let due = detector.due_list(&patterns, today());

    let order: Vec<(&str, i64)> = due
        .upcoming
        .iter()
        .map(|item| (item.ingredient_id.as_str(), item.days_offset))
        .collect();
    assert_eq!(order, vec![("pain", 1), ("beurre", 2), ("yaourt", 2)]);
}

#[test]
fn test_invalid_configuration_rejected() {
    let too_few = RecurrenceConfig {
        min_samples: 1,
        ..RecurrenceConfig::default()
    };
    assert!(RecurrenceDetector::new(too_few).is_err());

    let no_lookback = RecurrenceConfig {
        lookback_days: 0,
        ..RecurrenceConfig::default()
    };
    assert!(RecurrenceDetector::new(no_lookback).is_err());
}
