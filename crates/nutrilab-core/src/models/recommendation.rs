// ABOUTME: Scored recommendation models produced by the recommendation scorer
// ABOUTME: ScoredRecommendation, RecommendationReason, and AppliedFactors definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriLab

use super::{SupplementId, TableKind};
use crate::constants::factors::DEFAULT_MULTIPLIER;
use serde::{Deserialize, Serialize};

/// A selected key that contributed a supplement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationReason {
    /// Table the key came from
    pub table: TableKind,
    /// Symptom, goal, or lifestyle key
    pub key: String,
    /// Priority of the entry under that key
    pub priority: u8,
}

/// Multipliers applied on top of the base priority
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AppliedFactors {
    /// Age bracket factor
    pub age: f64,
    /// Gender factor
    pub gender: f64,
    /// Largest per-key priority factor among the reasons
    pub priority: f64,
}

impl Default for AppliedFactors {
    fn default() -> Self {
        Self {
            age: DEFAULT_MULTIPLIER,
            gender: DEFAULT_MULTIPLIER,
            priority: DEFAULT_MULTIPLIER,
        }
    }
}

impl AppliedFactors {
    /// Combined multiplier
    #[must_use]
    pub fn product(&self) -> f64 {
        self.age * self.gender * self.priority
    }
}

/// A ranked supplement suggestion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredRecommendation {
    /// Recommended supplement
    pub supplement_id: SupplementId,
    /// Display name from the catalog
    pub name: String,
    /// Base priority after adjustment
    pub final_score: f64,
    /// Strongest priority across the contributing keys
    pub base_priority: u8,
    /// Dose taken from the strongest contributing entry
    pub dose: String,
    /// Contributing keys in profile order
    pub reasons: Vec<RecommendationReason>,
    /// Multipliers that produced `final_score`
    pub factors: AppliedFactors,
}

impl ScoredRecommendation {
    /// Contributing keys in profile order
    #[must_use]
    pub fn reason_keys(&self) -> Vec<&str> {
        self.reasons.iter().map(|reason| reason.key.as_str()).collect()
    }

    /// Whether `key` contributed to this recommendation
    #[must_use]
    pub fn has_reason(&self, key: &str) -> bool {
        self.reasons.iter().any(|reason| reason.key == key)
    }
}
