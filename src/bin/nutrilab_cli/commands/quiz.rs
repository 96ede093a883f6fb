// ABOUTME: Quiz command for nutrilab-cli
// ABOUTME: Walks saved quiz answers through the wizard and prints the resulting report
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriLab

use nutrilab::errors::{AppError, AppResult};
use nutrilab::intelligence::SupplementRecommendationEngine;
use nutrilab::quiz::{QuizResponses, QuizWizard};
use std::fs;
use std::path::Path;

use crate::helpers::display::{display_report, print_json, OutputFormat};

/// Convert the answers in `answers` and score them
pub fn run(
    engine: &SupplementRecommendationEngine,
    answers: &Path,
    top: Option<usize>,
    format: OutputFormat,
) -> AppResult<()> {
    let text = fs::read_to_string(answers).map_err(|error| {
        AppError::from(error).with_resource_id(answers.display().to_string())
    })?;
    let responses: QuizResponses = serde_json::from_str(&text)?;

    let mut wizard = QuizWizard::new();
    wizard.start()?;
    let report = wizard.complete(responses, engine, top)?;

    match format {
        OutputFormat::Json => print_json(report),
        OutputFormat::Pretty => {
            display_report(report);
            Ok(())
        }
    }
}
