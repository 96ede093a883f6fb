// ABOUTME: Core data models re-exported from nutrilab-core
// ABOUTME: Supplements, symptom categories, mapping entries, profiles, and scored results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriLab

//! # Data Models
//!
//! - `Supplement`: A catalog entry with doses and dietary flags
//! - `SymptomCategory`: A searchable symptom grouping
//! - `RecommendationEntry`: One supplement suggestion for one selection key
//! - `UserProfile`: The selections and demographics a score is computed for
//! - `ScoredRecommendation`: One ranked result with its reasons and factors

pub use nutrilab_core::models::*;
