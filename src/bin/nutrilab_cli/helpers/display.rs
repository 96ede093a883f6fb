// ABOUTME: Output formatting helpers for nutrilab-cli
// ABOUTME: JSON or human-readable rendering of reports, supplements, symptoms, and errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriLab

use clap::ValueEnum;
use nutrilab::catalog::DataSummary;
use nutrilab::errors::{AppError, AppResult, ErrorResponse};
use nutrilab::intelligence::RecommendationReport;
use nutrilab::models::{Supplement, SymptomCategory};
use serde::Serialize;

/// Output style selected with `--format`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Indented JSON on stdout
    Json,
    /// Human-readable text
    Pretty,
}

/// Print any serializable value as indented JSON
pub fn print_json<T: Serialize>(value: &T) -> AppResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print an error as a JSON `ErrorResponse` on stderr
pub fn print_error(error: AppError) {
    let response = ErrorResponse::from(error);
    match serde_json::to_string_pretty(&response) {
        Ok(json) => eprintln!("{json}"),
        Err(_) => eprintln!("{}: {}", response.error.code.description(), response.error.message),
    }
}

/// Display a recommendation report
pub fn display_report(report: &RecommendationReport) {
    println!("\nRecommendations (data version {})", report.data_version);
    println!("{}", "=".repeat(72));
    if report.is_empty() {
        println!("No supplement matched the selected symptoms, goals, or lifestyle.");
        return;
    }
    for (rank, rec) in report.recommendations.iter().enumerate() {
        println!(
            "{:>2}. {:<32} score {:>6.2}  (base {})",
            rank + 1,
            rec.name,
            rec.final_score,
            rec.base_priority
        );
        println!("    Dose: {}", rec.dose);
        println!("    Because: {}", rec.reason_keys().join(", "));
        println!(
            "    Factors: age x{:.2}, gender x{:.2}, priority x{:.2}",
            rec.factors.age, rec.factors.gender, rec.factors.priority
        );
    }
    println!("{}", "=".repeat(72));
    println!("Report {} generated {}", report.id, report.generated_at.format("%Y-%m-%d %H:%M UTC"));
}

/// Display a list of supplements
pub fn display_supplements(supplements: &[&Supplement]) {
    println!("\n{} supplement(s)", supplements.len());
    println!("{}", "=".repeat(72));
    for supplement in supplements {
        let diet = if supplement.is_vegan() {
            "vegan"
        } else if supplement.is_vegetarian() {
            "vegetarian"
        } else {
            "-"
        };
        println!("{:<24} {:<36} {diet}", supplement.id.as_str(), supplement.name);
    }
}

/// Display one supplement in full
pub fn display_supplement(supplement: &Supplement) {
    println!("\n{} ({})", supplement.name, supplement.id);
    println!("{}", "=".repeat(72));
    println!("   {}", supplement.description);
    println!("   Standard dose: {}", supplement.standard_dose);
    println!(
        "   Vegetarian dose: {}",
        supplement.vegetarian_dose.as_deref().unwrap_or("not suitable")
    );
    println!("   Vegan: {}", if supplement.is_vegan() { "yes" } else { "no" });
    println!("   Categories: {}", supplement.categories.join(", "));
    let contraindications = supplement.contraindications();
    if !contraindications.is_empty() {
        println!("   Contraindications:");
        for item in contraindications {
            println!("   - {item}");
        }
    }
}

/// Display symptom categories
pub fn display_symptoms(categories: &[&SymptomCategory]) {
    println!("\n{} symptom categor(ies)", categories.len());
    println!("{}", "=".repeat(72));
    for category in categories {
        println!(
            "{:<22} p{:<3} {}",
            category.id, category.priority, category.name
        );
        if !category.keywords.is_empty() {
            println!("{:<27}{}", "", category.keywords.join(", "));
        }
    }
}

/// Display reference data counts
pub fn display_summary(summary: &DataSummary) {
    println!("\nReference data valid (version {})", summary.version);
    println!("{}", "=".repeat(50));
    println!("   Supplements:        {}", summary.supplements);
    println!("   Symptom categories: {}", summary.symptom_categories);
    println!("   Symptom keys:       {}", summary.symptom_keys);
    println!("   Goal keys:          {}", summary.goal_keys);
    println!("   Lifestyle keys:     {}", summary.lifestyle_keys);
    println!("   Mapping entries:    {}", summary.entries);
}
