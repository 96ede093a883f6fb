// ABOUTME: Catalog commands for nutrilab-cli
// ABOUTME: Lists supplements by category or diet and shows a single supplement
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriLab

use nutrilab::catalog::ReferenceData;
use nutrilab::errors::{AppError, AppResult};
use nutrilab::models::Supplement;

use crate::helpers::display::{display_supplement, display_supplements, print_json, OutputFormat};

/// List supplements, optionally filtered
pub fn list(
    data: &ReferenceData,
    category: Option<&str>,
    vegan_only: bool,
    format: OutputFormat,
) -> AppResult<()> {
    let catalog = data.catalog();
    let supplements: Vec<&Supplement> = catalog
        .iter()
        .filter(|s| category.is_none_or(|tag| s.has_category(tag)))
        .filter(|s| !vegan_only || s.is_vegan())
        .collect();

    match format {
        OutputFormat::Json => print_json(&supplements),
        OutputFormat::Pretty => {
            display_supplements(&supplements);
            Ok(())
        }
    }
}

/// Show one supplement
pub fn show(data: &ReferenceData, id: &str, format: OutputFormat) -> AppResult<()> {
    let supplement = data
        .catalog()
        .get(id)
        .ok_or_else(|| AppError::not_found(format!("Supplement {id}")).with_resource_id(id))?;

    match format {
        OutputFormat::Json => print_json(supplement),
        OutputFormat::Pretty => {
            display_supplement(supplement);
            Ok(())
        }
    }
}
