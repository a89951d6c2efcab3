// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Hearth Household Intelligence
// ABOUTME: Output format selection for hearth-cli
// ABOUTME: Pretty JSON on stdout or a human-readable text rendering

use clap::ValueEnum;
use hearth::{AppError, AppResult};
use serde::Serialize;
use std::io::{self, Write};

/// How command results are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON
    Json,
    /// Human-readable text
    Text,
}

/// Print `value` as JSON, or hand it to `render` for text output
pub fn emit<T, F>(format: OutputFormat, value: &T, render: F) -> AppResult<()>
where
    T: Serialize + ?Sized,
    F: FnOnce(&T),
{
    match format {
        OutputFormat::Json => {
            let mut stdout = io::stdout().lock();
            serde_json::to_writer_pretty(&mut stdout, value)?;
            writeln!(stdout).map_err(|e| {
                AppError::internal(format!("Failed to write output: {e}")).with_source(e)
            })?;
        }
        OutputFormat::Text => render(value),
    }
    Ok(())
}
