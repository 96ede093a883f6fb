// ABOUTME: Recommendation engine configuration for supplement scoring
// ABOUTME: Configures result limits, factor weights, and which table entries are scored
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriLab

//! Recommendation Engine Configuration
//!
//! Provides configuration for the supplement scorer including how many
//! recommendations to return, the multiplier used when a factor table has
//! no entry, and whether entries from the detailed tables are considered.

use crate::constants::{factors, limits};
use serde::{Deserialize, Serialize};

/// Recommendation Engine Configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecommendationEngineConfig {
    /// Limits on recommendation list length
    pub limits: RecommendationLimits,
    /// Multiplier defaults and clamps
    pub weights: RecommendationWeights,
    /// Entry filters applied before aggregation
    pub filters: RecommendationFilters,
}

/// Limits on recommendation generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationLimits {
    /// Recommendations returned when the caller gives no limit
    pub default_top_n: usize,
    /// Ceiling on any caller-supplied limit
    pub max_top_n: usize,
}

/// Weights for adjustment factors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationWeights {
    /// Multiplier used when an age or gender table has no entry for a supplement
    pub default_multiplier: f64,
    /// Upper clamp on the per-key priority factor
    pub max_priority_factor: f64,
}

/// Filters applied to mapping entries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationFilters {
    /// Score entries that come from the detailed tables
    pub include_detailed: bool,
}

impl Default for RecommendationLimits {
    fn default() -> Self {
        Self {
            default_top_n: limits::DEFAULT_TOP_N,
            max_top_n: limits::MAX_TOP_N,
        }
    }
}

impl Default for RecommendationWeights {
    fn default() -> Self {
        Self {
            default_multiplier: factors::DEFAULT_MULTIPLIER,
            max_priority_factor: factors::MAX_PRIORITY_FACTOR,
        }
    }
}

impl Default for RecommendationFilters {
    fn default() -> Self {
        Self {
            include_detailed: true,
        }
    }
}

impl RecommendationEngineConfig {
    /// Configuration that ignores entries from the detailed tables
    #[must_use]
    pub fn primary_only() -> Self {
        Self {
            filters: RecommendationFilters {
                include_detailed: false,
            },
            ..Self::default()
        }
    }

    /// Resolve a caller-supplied limit, falling back to the default and clamping to the maximum
    #[must_use]
    pub fn effective_top_n(&self, requested: Option<usize>) -> usize {
        requested
            .unwrap_or(self.limits.default_top_n)
            .min(self.limits.max_top_n)
    }
}
