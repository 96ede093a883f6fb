// ABOUTME: Supplement scoring built on the validated reference data
// ABOUTME: Dose resolution per dietary constraint and the recommendation engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriLab

//! # Intelligence Module
//!
//! - `dose_resolver` - picks the supplement and dose an entry yields for a diet
//! - `recommendation_engine` - aggregates, adjusts, and ranks supplements

/// Dietary resolution of mapping entries
pub mod dose_resolver;
/// Supplement recommendation scorer
pub mod recommendation_engine;

pub use dose_resolver::{resolve_entry, ResolvedEntry};
pub use recommendation_engine::{
    RecommendationEngineTrait, RecommendationReport, SupplementRecommendationEngine,
};
