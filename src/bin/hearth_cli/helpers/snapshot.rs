// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Hearth Household Intelligence
// ABOUTME: Catalog snapshot loading for hearth-cli
// ABOUTME: Opens the --snapshot file and parses it into a CatalogSnapshot

use hearth::{AppError, AppResult, CatalogSnapshot, ErrorCode};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::info;

/// Load the snapshot named by `--snapshot` / `HEARTH_SNAPSHOT`
pub fn load_snapshot(path: Option<&Path>) -> AppResult<CatalogSnapshot> {
    let path = path.ok_or_else(|| {
        AppError::new(
            ErrorCode::MissingRequiredField,
            "No catalog snapshot given: pass --snapshot or set HEARTH_SNAPSHOT",
        )
        .with_field("snapshot")
    })?;

    let file = File::open(path).map_err(|e| {
        AppError::invalid_input(format!("Cannot open snapshot {}: {e}", path.display()))
            .with_source(e)
    })?;
    let snapshot = CatalogSnapshot::from_reader(BufReader::new(file))?;

    info!(
        path = %path.display(),
        recipes = snapshot.recipes.len(),
        inventory = snapshot.inventory.len(),
        purchases = snapshot.purchases.len(),
        "catalog snapshot loaded"
    );
    Ok(snapshot)
}
