// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Hearth Household Intelligence
// ABOUTME: Text rendering helpers for hearth-cli
// ABOUTME: Consistent tables for feasibility, anti-waste, trending, shopping, and rescue output

use hearth::hearth_intelligence::anti_waste::{AntiWasteResult, RescueSummary, UrgentItem};
use hearth::hearth_intelligence::feasibility::FeasibilityResult;
use hearth::hearth_intelligence::popularity::PopularityResult;
use hearth::hearth_intelligence::recommendation_engine::TonightSuggestion;
use hearth::hearth_intelligence::recurrence::DueItem;
use hearth::{RecommendationReport, ScoreResult};

const RULE_WIDTH: usize = 72;

fn header(title: &str) {
    println!("\n{title}");
    println!("{}", "=".repeat(RULE_WIDTH));
}

fn empty(message: &str) {
    println!("   ({message})");
}

/// Display the full report
pub fn display_report(report: &RecommendationReport) {
    println!("Hearth recommendations for {}", report.generated_for);
    display_tonight(&report.feasible_tonight);
    display_anti_waste(&report.anti_waste, &[]);
    display_trending(&report.trending);
    display_shopping(&report.shopping_due);
    display_rescue(&report.rescue);
}

/// Display recipes cookable tonight
pub fn display_tonight(suggestions: &[TonightSuggestion]) {
    header("TONIGHT");
    if suggestions.is_empty() {
        empty("nothing cookable from current stock");
        return;
    }
    for (rank, suggestion) in suggestions.iter().enumerate() {
        println!(
            "{:>3}. {:<32} {:>6.1}  {:<13} {:>3} min  waste {:>3}",
            rank + 1,
            suggestion.subject_name(),
            suggestion.combined_score,
            suggestion.label(),
            suggestion.total_time_minutes,
            suggestion.waste_score,
        );
        for missing in &suggestion.missing {
            println!("       missing: {} ({:?})", missing.ingredient_id, missing.reason);
        }
    }
}

/// Display feasibility of every recipe
pub fn display_feasibility(results: &[FeasibilityResult]) {
    header("FEASIBILITY");
    if results.is_empty() {
        empty("empty recipe catalog");
        return;
    }
    for result in results {
        println!(
            "   {:<32} {:>5.0}%  {:<13} {:>3} min",
            result.subject_name(),
            result.score * 100.0,
            result.label(),
            result.total_time_minutes,
        );
        if !result.missing.is_empty() {
            let missing: Vec<&str> = result
                .missing
                .iter()
                .map(|entry| entry.ingredient_id.as_str())
                .collect();
            println!("       missing: {}", missing.join(", "));
        }
        for expiring in &result.near_expiry {
            println!(
                "       expires {}: {} ({} d)",
                expiring.expires_on, expiring.ingredient_id, expiring.days_remaining
            );
        }
    }
}

/// Display the anti-waste ranking, with the urgent items when known
pub fn display_anti_waste(results: &[AntiWasteResult], urgent: &[UrgentItem]) {
    header("ANTI-WASTE");
    if !urgent.is_empty() {
        println!("   Urgent stock:");
        for item in urgent {
            println!(
                "     [{}] {:<24} {} ({} d){}",
                item.urgency,
                item.ingredient_id,
                item.expires_on,
                item.days_remaining,
                if item.is_expired() { "  EXPIRED" } else { "" },
            );
        }
    }
    if results.is_empty() {
        empty("no recipe uses expiring stock");
        return;
    }
    for (rank, result) in results.iter().enumerate() {
        let rescued: Vec<&str> = result
            .rescued
            .iter()
            .map(|item| item.ingredient_id.as_str())
            .collect();
        println!(
            "{:>3}. {:<32} {:>3}/100  {:<8} uses {}",
            rank + 1,
            result.subject_name(),
            result.waste_score,
            result.label(),
            rescued.join(", "),
        );
    }
}

/// Display the most popular recipes
pub fn display_trending(results: &[PopularityResult]) {
    header("TRENDING");
    if results.is_empty() {
        empty("empty recipe catalog");
        return;
    }
    for (rank, result) in results.iter().enumerate() {
        println!(
            "{:>3}. {:<32} {:>5.1}  {:<8} {:>2}x/{}d  rating {:.1}",
            rank + 1,
            result.subject_name(),
            result.composite,
            result.label(),
            result.count_window,
            result.days_since_last.map_or_else(|| "-".to_owned(), |d| d.to_string()),
            result.rating,
        );
    }
}

/// Display staples due on the shopping list
pub fn display_shopping(items: &[DueItem]) {
    header("SHOPPING");
    if items.is_empty() {
        empty("nothing due");
        return;
    }
    for item in items {
        let quantity = item
            .suggested_quantity
            .map_or_else(String::new, |q| format!("{q:.0} {}", item.unit));
        println!(
            "   {:<9} {:<24} {} ({:+} d)  every {:.1} d  reliability {:.0}%  {quantity}",
            item.label(),
            item.subject_id(),
            item.next_expected_on,
            item.days_offset,
            item.frequency_days,
            item.reliability * 100.0,
        );
    }
}

/// Display the monthly rescue rate
pub fn display_rescue(summary: &RescueSummary) {
    header("RESCUE RATE");
    println!("   Month:     {}", summary.period);
    println!("   Rescued:   {}", summary.consumed_before_expiry);
    println!("   Discarded: {}", summary.expired_discarded);
    match summary.rescue_rate {
        Some(rate) => println!("   Rate:      {rate:.0}%"),
        None => println!("   Rate:      no data"),
    }
    println!("   Badge:     {}", summary.badge.label());
}
