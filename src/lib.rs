// ABOUTME: Main library entry point for the NutriLab supplement recommendation engine
// ABOUTME: Exposes reference data loading, the scorer, the quiz wizard, config, and logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriLab

#![deny(unsafe_code)]

//! # `NutriLab`
//!
//! Ranks dietary supplements for a user from the symptoms, goals, and
//! lifestyle factors they select, adjusted for age bracket, gender, and
//! dietary constraint.
//!
//! ## Architecture
//!
//! - **Catalog**: Supplement definitions, symptom categories, mapping tables,
//!   and adjustment factors, validated once at load
//! - **Intelligence**: The deterministic scorer that turns a profile into a
//!   ranked list of recommendations
//! - **Quiz**: The intro, quiz, and results wizard that converts answers into
//!   a profile
//! - **Config**: Scorer limits and weights with environment overrides
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use nutrilab::errors::AppResult;
//! use nutrilab::intelligence::{RecommendationEngineTrait, SupplementRecommendationEngine};
//! use nutrilab::models::{AgeBracket, Gender, UserProfile};
//!
//! fn main() -> AppResult<()> {
//!     let engine = SupplementRecommendationEngine::new()?;
//!     let profile = UserProfile::new()
//!         .with_symptom("fatigue")
//!         .with_age(AgeBracket::From46To60)
//!         .with_gender(Gender::Femme);
//!
//!     for rec in engine.score(&profile, Some(5))? {
//!         println!("{} {:.2}", rec.supplement_id, rec.final_score);
//!     }
//!     Ok(())
//! }
//! ```

/// Supplement catalog, symptom registry, mapping tables, and adjustment factors
pub mod catalog;

/// Scorer limits, weights, and environment overrides
pub mod config;

/// Application constants
pub mod constants;

/// Unified error handling
pub mod errors;

/// Supplement scoring
pub mod intelligence;

/// Structured logging setup
pub mod logging;

/// Core domain types
pub mod models;

/// Quiz wizard and answer conversion
pub mod quiz;
