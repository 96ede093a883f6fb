// ABOUTME: Configuration management module for recommendation engine settings
// ABOUTME: Re-exports intelligence configuration, validation, and environment overrides
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriLab
//! Configuration module for the `NutriLab` recommendation engine
//!
//! - **Intelligence**: Scorer limits, factor weights, and entry filters

/// Intelligence module configuration
pub mod intelligence;

// Re-export intelligence configuration types
pub use intelligence::{
    ConfigError, IntelligenceConfig, RecommendationEngineConfig, RecommendationFilters,
    RecommendationLimits, RecommendationWeights,
};
