// ABOUTME: Shared test utilities and household fixtures for integration tests
// ABOUTME: Provides quiet logging setup, identity helpers, and a complete catalog snapshot
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Hearth Household Intelligence
#![allow(
    dead_code,
    clippy::wildcard_in_or_patterns,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `hearth`
//!
//! The household fixture is evaluated on [`today`] (2025-03-10):
//!
//! | Recipe | Feasibility | Waste score |
//! |--------|-------------|-------------|
//! | gratin-courgettes | 1.0 complete | 100 (capped) |
//! | omelette | 1.0 complete | 90 |
//! | pates-carbonara | 0.6 partial | 60 |
//! | salade-tomates | 0.0 insufficient | 50 |

use chrono::{DateTime, NaiveDate, Utc};
use hearth::hearth_core::models::{
    IngredientId, IngredientRequirement, IngredientUnit, InventoryItem, PreparationRecord,
    PurchaseRecord, Recipe, RecipeId, RecipeRating, WasteEvent, WasteOutcome,
};
use hearth::CatalogSnapshot;
use std::env;
use std::sync::Once;
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // Check for TEST_LOG environment variable to control test logging level
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            Ok("WARN" | "ERROR") | _ => Level::WARN, // Default to WARN for quiet tests
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Reference day of the household fixture
pub fn today() -> NaiveDate {
    date(2025, 3, 10)
}

/// Evening timestamp of a calendar day
pub fn at_evening(day: NaiveDate) -> DateTime<Utc> {
    day.and_hms_opt(18, 30, 0).unwrap().and_utc()
}

pub fn ingredient(id: &str) -> IngredientId {
    IngredientId::new(id).unwrap()
}

pub fn recipe_id(id: &str) -> RecipeId {
    RecipeId::new(id).unwrap()
}

pub fn need(id: &str, quantity: f64, unit: IngredientUnit) -> IngredientRequirement {
    IngredientRequirement::new(ingredient(id), quantity, unit)
}

pub fn stock(id: &str, quantity: f64, unit: IngredientUnit) -> InventoryItem {
    InventoryItem::new(ingredient(id), quantity, unit)
}

pub fn purchase(id: &str, day: NaiveDate, quantity: f64, unit: IngredientUnit) -> PurchaseRecord {
    PurchaseRecord::new(ingredient(id), quantity, unit, at_evening(day))
}

pub fn prepared(id: &str, day: NaiveDate) -> PreparationRecord {
    PreparationRecord::new(recipe_id(id), day)
}

/// "Pâtes Carbonara": 400 g pasta, 200 g lardons, 2 optional eggs
pub fn carbonara() -> Recipe {
    Recipe::new(recipe_id("pates-carbonara"), "Pâtes Carbonara")
        .with_total_time(25)
        .with_servings(4)
        .with_requirement(need("pates", 400.0, IngredientUnit::Grams))
        .with_requirement(need("lardons", 200.0, IngredientUnit::Grams))
        .with_requirement(need("oeufs", 2.0, IngredientUnit::Pieces).optional())
}

pub fn omelette() -> Recipe {
    Recipe::new(recipe_id("omelette"), "Omelette")
        .with_total_time(10)
        .with_servings(2)
        .with_requirement(need("oeufs", 3.0, IngredientUnit::Pieces))
        .with_requirement(need("ciboulette", 5.0, IngredientUnit::Grams).optional())
}

pub fn gratin() -> Recipe {
    Recipe::new(recipe_id("gratin-courgettes"), "Gratin de courgettes")
        .with_total_time(45)
        .with_servings(4)
        .with_requirement(need("courgettes", 500.0, IngredientUnit::Grams))
        .with_requirement(need("creme", 20.0, IngredientUnit::Centiliters))
        .with_requirement(need("gruyere", 100.0, IngredientUnit::Grams))
}

pub fn salade() -> Recipe {
    Recipe::new(recipe_id("salade-tomates"), "Salade de tomates")
        .with_total_time(10)
        .with_requirement(need("tomates", 4.0, IngredientUnit::Pieces))
        .with_requirement(need("basilic", 10.0, IngredientUnit::Grams).optional())
}

pub fn recipes() -> Vec<Recipe> {
    vec![carbonara(), omelette(), gratin(), salade()]
}

/// Inventory on [`today`]
pub fn inventory() -> Vec<InventoryItem> {
    vec![
        stock("oeufs", 6.0, IngredientUnit::Pieces).expiring_on(date(2025, 3, 12)),
        stock("pates", 500.0, IngredientUnit::Grams),
        stock("lardons", 0.0, IngredientUnit::Grams),
        stock("courgettes", 600.0, IngredientUnit::Grams).expiring_on(date(2025, 3, 11)),
        stock("creme", 250.0, IngredientUnit::Milliliters).expiring_on(date(2025, 3, 9)),
        stock("gruyere", 150.0, IngredientUnit::Grams).expiring_on(date(2025, 3, 30)),
        stock("tomates", 2.0, IngredientUnit::Pieces).expiring_on(date(2025, 3, 13)),
        stock("ciboulette", 20.0, IngredientUnit::Grams).expiring_on(date(2025, 3, 15)),
    ]
}

pub fn preparations() -> Vec<PreparationRecord> {
    vec![
        prepared("omelette", date(2025, 3, 8)),
        prepared("omelette", date(2025, 3, 1)),
        prepared("omelette", date(2025, 2, 20)),
        prepared("omelette", date(2025, 2, 1)),
        prepared("omelette", date(2025, 1, 15)),
        prepared("pates-carbonara", date(2025, 1, 5)),
        prepared("pates-carbonara", date(2024, 12, 20)),
        prepared("pates-carbonara", date(2024, 12, 1)),
        prepared("gratin-courgettes", date(2025, 3, 9)),
    ]
}

pub fn ratings() -> Vec<RecipeRating> {
    vec![
        RecipeRating::new(recipe_id("omelette"), 4.0),
        RecipeRating::new(recipe_id("pates-carbonara"), 5.0),
        RecipeRating::new(recipe_id("gratin-courgettes"), 3.0),
        RecipeRating::new(recipe_id("salade-tomates"), 4.5),
    ]
}

/// Milk weekly (due today), bread every 10 days (7 days overdue), coffee twice
pub fn purchases() -> Vec<PurchaseRecord> {
    vec![
        purchase("lait", date(2025, 2, 10), 2.0, IngredientUnit::Liters),
        purchase("lait", date(2025, 2, 17), 2.0, IngredientUnit::Liters),
        purchase("lait", date(2025, 2, 24), 1.0, IngredientUnit::Liters),
        purchase("lait", date(2025, 3, 3), 1.0, IngredientUnit::Liters),
        purchase("pain", date(2025, 2, 1), 1.0, IngredientUnit::Pieces),
        purchase("pain", date(2025, 2, 11), 1.0, IngredientUnit::Pieces),
        purchase("pain", date(2025, 2, 21), 1.0, IngredientUnit::Pieces),
        purchase("cafe", date(2025, 2, 20), 250.0, IngredientUnit::Grams),
        purchase("cafe", date(2025, 3, 5), 250.0, IngredientUnit::Grams),
    ]
}

/// Three rescues and one discard in March, one discard in February
pub fn waste_events() -> Vec<WasteEvent> {
    vec![
        WasteEvent::new(ingredient("yaourt"), date(2025, 3, 2), WasteOutcome::ConsumedBeforeExpiry),
        WasteEvent::new(ingredient("jambon"), date(2025, 3, 4), WasteOutcome::ConsumedBeforeExpiry),
        WasteEvent::new(ingredient("salade"), date(2025, 3, 6), WasteOutcome::ExpiredDiscarded),
        WasteEvent::new(ingredient("lait"), date(2025, 3, 8), WasteOutcome::ConsumedBeforeExpiry),
        WasteEvent::new(ingredient("fraises"), date(2025, 2, 26), WasteOutcome::ExpiredDiscarded),
    ]
}

/// Complete household snapshot
pub fn household_snapshot() -> CatalogSnapshot {
    CatalogSnapshot {
        recipes: recipes(),
        inventory: inventory(),
        purchases: purchases(),
        preparations: preparations(),
        ratings: ratings(),
        waste_events: waste_events(),
    }
}

/// Household snapshot serialized as JSON
pub fn household_snapshot_json() -> String {
    serde_json::to_string_pretty(&household_snapshot()).unwrap()
}
