// ABOUTME: Intelligence configuration for supplement recommendation scoring
// ABOUTME: Provides defaults, environment overrides, validation, and a global singleton
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriLab

//! Intelligence Configuration Module
//!
//! Type-safe configuration for the recommendation engine. Values start from
//! compiled defaults, are overridden from `NUTRILAB_RECOMMENDATION_*`
//! environment variables, and are validated before use.
//!
//! # Module Structure
//!
//! - `recommendation` - Result limits, factor weights, and entry filters
//! - `error` - Configuration error types

pub mod error;
pub mod recommendation;

pub use error::ConfigError;
pub use recommendation::{
    RecommendationEngineConfig, RecommendationFilters, RecommendationLimits,
    RecommendationWeights,
};

use crate::constants::env_config;
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Global configuration singleton
static INTELLIGENCE_CONFIG: OnceLock<IntelligenceConfig> = OnceLock::new();

/// Main intelligence configuration container
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IntelligenceConfig {
    /// Configuration for the supplement recommendation engine
    pub recommendation_engine: RecommendationEngineConfig,
}

impl IntelligenceConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        INTELLIGENCE_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load intelligence config: {e}, using defaults");
                Self::default()
            })
        })
    }

    /// Load configuration from environment
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error naming the first rule the configuration breaks
    pub fn validate(&self) -> Result<(), ConfigError> {
        let limits = &self.recommendation_engine.limits;
        if limits.default_top_n == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "default_top_n must be at least 1",
            ));
        }
        if limits.default_top_n > limits.max_top_n {
            return Err(ConfigError::InvalidRange(
                "default_top_n must not exceed max_top_n",
            ));
        }

        let weights = &self.recommendation_engine.weights;
        if !weights.default_multiplier.is_finite() || weights.default_multiplier <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "default_multiplier must be a positive number",
            ));
        }
        if !weights.max_priority_factor.is_finite() || weights.max_priority_factor < 1.0 {
            return Err(ConfigError::ValueOutOfRange(
                "max_priority_factor must be at least 1.0",
            ));
        }

        Ok(())
    }

    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply `NUTRILAB_RECOMMENDATION_*` overrides on top of the current values
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` if a present variable does not parse
    pub fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        let engine = &mut self.recommendation_engine;

        Self::apply_env_var(
            env_config::RECOMMENDATION_TOP_N,
            &mut engine.limits.default_top_n,
        )?;
        Self::apply_env_var(
            env_config::RECOMMENDATION_MAX_TOP_N,
            &mut engine.limits.max_top_n,
        )?;
        Self::apply_env_var(
            env_config::RECOMMENDATION_DEFAULT_MULTIPLIER,
            &mut engine.weights.default_multiplier,
        )?;
        Self::apply_env_var(
            env_config::RECOMMENDATION_MAX_PRIORITY_FACTOR,
            &mut engine.weights.max_priority_factor,
        )?;
        Self::apply_env_var(
            env_config::RECOMMENDATION_INCLUDE_DETAILED,
            &mut engine.filters.include_detailed,
        )?;

        Ok(self)
    }
}
