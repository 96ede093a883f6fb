// ABOUTME: Recommend command for nutrilab-cli
// ABOUTME: Builds a profile from flags or a profile file and prints the scored report
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriLab

use clap::Args;
use nutrilab::errors::{AppError, AppResult};
use nutrilab::intelligence::{RecommendationEngineTrait, SupplementRecommendationEngine};
use nutrilab::models::{AgeBracket, DietaryConstraint, Gender, UserProfile};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::helpers::display::{display_report, print_json, OutputFormat};

/// Profile selection flags
#[derive(Args)]
pub struct RecommendArgs {
    /// Symptom key (repeatable)
    #[arg(long = "symptom")]
    symptoms: Vec<String>,

    /// Goal key (repeatable)
    #[arg(long = "goal")]
    goals: Vec<String>,

    /// Lifestyle key (repeatable)
    #[arg(long = "lifestyle")]
    lifestyle: Vec<String>,

    /// Age bracket (18-30, 31-45, 46-60, 60+) or age in years
    #[arg(long)]
    age: Option<String>,

    /// Gender (femme, homme, non_binaire)
    #[arg(long)]
    gender: Option<String>,

    /// Dietary constraint (omnivore, vegetarian, vegan)
    #[arg(long)]
    diet: Option<String>,

    /// Number of recommendations
    #[arg(long)]
    top: Option<usize>,

    /// JSON profile file; flags add to it
    #[arg(long)]
    profile: Option<PathBuf>,
}

fn read_profile(path: &Path) -> AppResult<UserProfile> {
    let text = fs::read_to_string(path).map_err(|error| {
        AppError::from(error).with_resource_id(path.display().to_string())
    })?;
    Ok(serde_json::from_str(&text)?)
}

impl RecommendArgs {
    fn into_profile(self) -> AppResult<UserProfile> {
        let mut profile = match &self.profile {
            Some(path) => read_profile(path)?,
            None => UserProfile::new(),
        };
        profile.symptoms.extend(self.symptoms);
        profile.goals.extend(self.goals);
        profile.lifestyle.extend(self.lifestyle);
        if let Some(age) = self.age {
            profile.age = Some(age.parse::<AgeBracket>()?);
        }
        if let Some(gender) = self.gender {
            profile.gender = Some(gender.parse::<Gender>()?);
        }
        if let Some(diet) = self.diet {
            profile.diet = diet.parse::<DietaryConstraint>()?;
        }
        Ok(profile)
    }
}

/// Score the profile described by `args`
pub fn run(
    engine: &SupplementRecommendationEngine,
    args: RecommendArgs,
    format: OutputFormat,
) -> AppResult<()> {
    let top = args.top;
    let profile = args.into_profile()?;
    info!(
        symptoms = profile.symptoms.len(),
        goals = profile.goals.len(),
        lifestyle = profile.lifestyle.len(),
        "Scoring profile"
    );

    let report = engine.report(profile, top)?;
    match format {
        OutputFormat::Json => print_json(&report),
        OutputFormat::Pretty => {
            display_report(&report);
            Ok(())
        }
    }
}
