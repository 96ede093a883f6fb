// ABOUTME: Symptom commands for nutrilab-cli
// ABOUTME: Searches and lists symptom categories
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriLab

use nutrilab::catalog::ReferenceData;
use nutrilab::errors::AppResult;
use nutrilab::models::SymptomCategory;

use crate::helpers::display::{display_symptoms, print_json, OutputFormat};

fn emit(categories: &[&SymptomCategory], format: OutputFormat) -> AppResult<()> {
    match format {
        OutputFormat::Json => print_json(&categories),
        OutputFormat::Pretty => {
            display_symptoms(categories);
            Ok(())
        }
    }
}

/// Search categories by id, name, or keyword
pub fn search(data: &ReferenceData, query: &str, format: OutputFormat) -> AppResult<()> {
    emit(&data.symptoms().search(query), format)
}

/// List every category, highest priority first
pub fn list(data: &ReferenceData, format: OutputFormat) -> AppResult<()> {
    let categories: Vec<&SymptomCategory> = data.symptoms().iter().collect();
    emit(&categories, format)
}
