// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Hearth Household Intelligence
// ABOUTME: Command modules for hearth-cli and the context they share
// ABOUTME: Every command reads one loaded snapshot through one configured engine

use chrono::NaiveDate;
use hearth::{CatalogSnapshot, RecommendationEngine};

use crate::helpers::output::OutputFormat;

pub mod recommend;

/// Inputs shared by every command
pub struct CommandContext {
    pub engine: RecommendationEngine,
    pub snapshot: CatalogSnapshot,
    pub today: NaiveDate,
    pub format: OutputFormat,
    pub limit: Option<usize>,
}

impl CommandContext {
    /// Truncate a list to `--limit` when given
    pub fn limited<T>(&self, mut items: Vec<T>) -> Vec<T> {
        if let Some(limit) = self.limit {
            items.truncate(limit);
        }
        items
    }
}
