// ABOUTME: Core data models for the NutriLab recommendation engine
// ABOUTME: Re-exports supplement, symptom, mapping, profile, and recommendation types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriLab

//! # Data Models
//!
//! Reference data (supplements, symptom categories, mapping entries) is
//! immutable once loaded. `UserProfile` is the scorer's only input and
//! `ScoredRecommendation` its only output.

// Domain modules
mod mapping;
mod profile;
mod recommendation;
mod supplement;
mod symptom;

// Reference data
pub use mapping::{RecommendationEntry, TableKind, VegetarianAlternative};
pub use supplement::{SafetyInfo, Supplement, SupplementId};
pub use symptom::{IntensityLevel, IntensityThresholds, SymptomCategory};

// Scoring input and output
pub use profile::{AgeBracket, DietaryConstraint, Gender, UserProfile};
pub use recommendation::{AppliedFactors, RecommendationReason, ScoredRecommendation};
