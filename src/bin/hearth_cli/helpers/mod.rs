// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Hearth Household Intelligence
// ABOUTME: Helper modules for hearth-cli
// ABOUTME: Snapshot loading, output format selection, and text rendering

pub mod display;
pub mod output;
pub mod snapshot;
