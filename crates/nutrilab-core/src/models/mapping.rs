// ABOUTME: Mapping table entry models linking a symptom, goal, or lifestyle key to supplements
// ABOUTME: TableKind, RecommendationEntry, and VegetarianAlternative definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriLab

use super::SupplementId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which mapping table a key belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TableKind {
    /// Reported health concern
    Symptom,
    /// Stated health objective
    Goal,
    /// Dietary or activity pattern
    Lifestyle,
}

impl TableKind {
    /// All table kinds in scoring order
    pub const ALL: [Self; 3] = [Self::Symptom, Self::Goal, Self::Lifestyle];

    /// Lower-case name used in data files and logs
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Symptom => "symptom",
            Self::Goal => "goal",
            Self::Lifestyle => "lifestyle",
        }
    }
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Vegetarian-compatible substitute carried on an entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VegetarianAlternative {
    /// Substitute supplement
    pub supplement_id: SupplementId,
    /// Priority of the substitute under the same key
    pub priority: u8,
    /// Dose of the substitute
    pub dose: String,
}

/// One prioritized suggestion under a mapping key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationEntry {
    /// Suggested supplement
    pub supplement_id: SupplementId,
    /// Author-assigned relevance (1-10)
    pub priority: u8,
    /// Dose for users without dietary restrictions
    pub dose_standard: String,
    /// Dose for vegetarian users; `None` when the supplement is not vegetarian
    pub dose_vegetarian: Option<String>,
    /// Substitute used when `dose_vegetarian` is `None`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vegetarian_alternative: Option<VegetarianAlternative>,
    /// Entry originates from the detailed tables
    #[serde(default, skip_serializing_if = "is_false")]
    pub detailed: bool,
}

#[allow(clippy::trivially_copy_pass_by_ref)] // serde skip_serializing_if passes a reference
const fn is_false(value: &bool) -> bool {
    !*value
}

impl RecommendationEntry {
    /// Create a primary-table entry
    #[must_use]
    pub fn new(
        supplement_id: impl Into<SupplementId>,
        priority: u8,
        dose_standard: impl Into<String>,
        dose_vegetarian: Option<String>,
    ) -> Self {
        Self {
            supplement_id: supplement_id.into(),
            priority,
            dose_standard: dose_standard.into(),
            dose_vegetarian,
            vegetarian_alternative: None,
            detailed: false,
        }
    }

    /// Attach a vegetarian substitute
    #[must_use]
    pub fn with_alternative(mut self, alternative: VegetarianAlternative) -> Self {
        self.vegetarian_alternative = Some(alternative);
        self
    }

    /// Mark the entry as coming from the detailed tables
    #[must_use]
    pub fn mark_detailed(mut self) -> Self {
        self.detailed = true;
        self
    }
}
