// ABOUTME: Validate command for nutrilab-cli
// ABOUTME: Reports counts for reference data that loaded and passed integrity checks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriLab

use nutrilab::catalog::ReferenceData;
use nutrilab::errors::AppResult;

use crate::helpers::display::{display_summary, print_json, OutputFormat};

/// Print the summary of already-validated data
pub fn run(data: &ReferenceData, format: OutputFormat) -> AppResult<()> {
    let summary = data.summary();
    match format {
        OutputFormat::Json => print_json(&summary),
        OutputFormat::Pretty => {
            display_summary(&summary);
            Ok(())
        }
    }
}
