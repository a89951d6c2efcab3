// ABOUTME: Recommendation commands for hearth-cli
// ABOUTME: Runs the scorers over the loaded snapshot and renders each list
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Hearth Household Intelligence

use hearth::hearth_core::models::InventoryIndex;
use hearth::hearth_intelligence::anti_waste::{AntiWasteScorer, MonthPeriod};
use hearth::{AppError, AppResult, CatalogReader};
use tracing::info;

use super::CommandContext;
use crate::helpers::display::{
    display_anti_waste, display_feasibility, display_report, display_rescue, display_shopping,
    display_trending,
};
use crate::helpers::output::emit;

type Result<T> = AppResult<T>;

/// Full recommendation report
pub fn report(context: &CommandContext) -> Result<()> {
    let report = context.engine.run(&context.snapshot, context.today);
    emit(context.format, &report, display_report)
}

/// Feasibility of every recipe, best first
pub fn feasibility(context: &CommandContext) -> Result<()> {
    let inventory = InventoryIndex::new(context.snapshot.inventory());
    let results = context.engine.feasibility_scorer().score_catalog(
        context.snapshot.recipes(),
        &inventory,
        context.today,
    );
    info!(recipes = results.len(), "feasibility computed");
    emit(context.format, &context.limited(results), |results| {
        display_feasibility(results);
    })
}

/// Recipes rescuing food close to expiry
pub fn anti_waste(context: &CommandContext) -> Result<()> {
    let inventory = InventoryIndex::new(context.snapshot.inventory());
    let scorer = context.engine.anti_waste_scorer();
    let ranked = scorer.rank(context.snapshot.recipes(), &inventory, context.today);
    let urgent = scorer.urgent_items(&inventory, context.today);
    let results = context.engine.anti_waste(&ranked);
    emit(context.format, &results, |results| {
        display_anti_waste(results, &urgent);
    })
}

/// Most popular recipes
pub fn trending(context: &CommandContext) -> Result<()> {
    let results = context.engine.popularity_scorer().score_catalog(
        context.snapshot.recipes(),
        context.snapshot.preparations(),
        context.snapshot.ratings(),
        context.today,
    );
    let trending = context.engine.trending(&results);
    emit(context.format, &trending, |results| display_trending(results))
}

/// Staples overdue or due soon
pub fn shopping(context: &CommandContext) -> Result<()> {
    let detector = context.engine.recurrence_detector();
    let patterns = detector.detect_all(context.snapshot.purchases(), context.today);
    let due = detector.due_list(&patterns, context.today);
    let items = context.limited(context.engine.shopping_due(&due));
    emit(context.format, &items, |items| display_shopping(items))
}

/// Rescue rate and badge for one month
pub fn rescue(context: &CommandContext, month: Option<&str>) -> Result<()> {
    let period = match month {
        Some(raw) => parse_month(raw)?,
        None => MonthPeriod::containing(context.today),
    };
    let summary = AntiWasteScorer::rescue_summary(context.snapshot.waste_events(), period);
    emit(context.format, &summary, display_rescue)
}

/// Parse `YYYY-MM`
fn parse_month(raw: &str) -> Result<MonthPeriod> {
    let invalid = || AppError::invalid_input(format!("Invalid month {raw:?}, expected YYYY-MM"));
    let (year, month) = raw.trim().split_once('-').ok_or_else(invalid)?;
    let year: i32 = year.parse().map_err(|_| invalid())?;
    let month: u32 = month.parse().map_err(|_| invalid())?;
    MonthPeriod::new(year, month)
}
