// ABOUTME: Hearth CLI - batch runner computing recommendations from a catalog snapshot file
// ABOUTME: Report, feasibility, anti-waste, trending, shopping, and rescue-rate commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Hearth Household Intelligence
//!
//! Usage:
//! ```bash
//! # Full dashboard report for today
//! hearth-cli report --snapshot household.json
//!
//! # What can be cooked tonight, as JSON, for a fixed day
//! hearth-cli feasibility --snapshot household.json --today 2025-03-10 --format json
//!
//! # Five recipes rescuing expiring food
//! hearth-cli anti-waste --snapshot household.json --limit 5
//!
//! # Most popular recipes
//! hearth-cli trending --snapshot household.json
//!
//! # Staples due on the shopping list
//! hearth-cli shopping --snapshot household.json
//!
//! # Rescue rate and badge for a given month
//! hearth-cli rescue --snapshot household.json --month 2025-02
//! ```

mod commands;
mod helpers;

use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use hearth::logging::LoggingConfig;
use hearth::{EngineConfig, RecommendationEngine};
use std::path::PathBuf;
use tracing::debug;

use commands::CommandContext;
use helpers::output::OutputFormat;
use helpers::snapshot::load_snapshot;

#[derive(Parser)]
#[command(
    name = "hearth-cli",
    about = "Hearth household recommendation CLI",
    long_about = "Batch runner for the Hearth stock-aware recommendation engine. Reads a \
                  catalog snapshot (recipes, inventory, history) and prints recommendations."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Catalog snapshot JSON file
    #[arg(long, global = true, env = "HEARTH_SNAPSHOT")]
    snapshot: Option<PathBuf>,

    /// Reference day (YYYY-MM-DD), defaults to the local date
    #[arg(long, global = true)]
    today: Option<NaiveDate>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Maximum number of entries per list
    #[arg(long, global = true)]
    limit: Option<usize>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Full report: tonight, anti-waste, trending, shopping, rescue rate
    Report,

    /// Feasibility of every recipe against the inventory
    Feasibility,

    /// Recipes rescuing food close to expiry
    AntiWaste,

    /// Most popular recipes with trend labels
    Trending,

    /// Staples overdue or due soon
    Shopping,

    /// Monthly rescue rate and badge
    Rescue {
        /// Month (YYYY-MM), defaults to the month of the reference day
        #[arg(long)]
        month: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let logging = LoggingConfig::from_env();
    let logging = if cli.verbose {
        logging.with_level("debug")
    } else {
        logging
    };
    logging.init()?;

    let mut config = EngineConfig::load()?;
    if let Some(limit) = cli.limit {
        config.recommendation.trending_limit = limit;
        config.recommendation.anti_waste_limit = limit;
    }
    let engine = RecommendationEngine::new(config)?;

    let snapshot = load_snapshot(cli.snapshot.as_deref())?;
    let today = cli.today.unwrap_or_else(|| Local::now().date_naive());
    debug!(today = %today, recipes = snapshot.recipes.len(), "snapshot loaded");

    let context = CommandContext {
        engine,
        snapshot,
        today,
        format: cli.format,
        limit: cli.limit,
    };

    match cli.command {
        Command::Report => commands::recommend::report(&context)?,
        Command::Feasibility => commands::recommend::feasibility(&context)?,
        Command::AntiWaste => commands::recommend::anti_waste(&context)?,
        Command::Trending => commands::recommend::trending(&context)?,
        Command::Shopping => commands::recommend::shopping(&context)?,
        Command::Rescue { month } => commands::recommend::rescue(&context, month.as_deref())?,
    }

    Ok(())
}
