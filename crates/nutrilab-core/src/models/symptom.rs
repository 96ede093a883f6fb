// ABOUTME: Symptom category models used for categorization and keyword search
// ABOUTME: SymptomCategory, IntensityThresholds, and IntensityLevel definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriLab

use crate::constants::intensity;
use serde::{Deserialize, Serialize};

/// A user-facing symptom category
///
/// Categories feed search and quiz navigation only. Their `priority` is
/// never used by the scorer; mapping entries carry their own priorities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymptomCategory {
    /// Canonical symptom key, shared with the symptom mapping table
    pub id: String,
    /// Display name
    pub name: String,
    /// Short description
    pub description: String,
    /// Base priority (1-10)
    pub priority: u8,
    /// Search keywords
    #[serde(default)]
    pub keywords: Vec<String>,
    /// Quiz question ids that surface this category
    #[serde(default)]
    pub related_questions: Vec<String>,
}

impl SymptomCategory {
    /// Whether a lower-cased query matches the id, name, or any keyword
    #[must_use]
    pub fn matches(&self, query: &str) -> bool {
        self.id.to_lowercase().contains(query)
            || self.name.to_lowercase().contains(query)
            || self
                .keywords
                .iter()
                .any(|keyword| keyword.to_lowercase().contains(query))
    }
}

/// Severity of a self-reported symptom
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntensityLevel {
    /// Noticeable but not limiting
    Mild,
    /// Regularly limiting
    Moderate,
    /// Dominant complaint
    Severe,
}

/// Lower bounds of each intensity level on a 0-10 scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntensityThresholds {
    /// Lowest mild score
    pub mild: u8,
    /// Lowest moderate score
    pub moderate: u8,
    /// Lowest severe score
    pub severe: u8,
}

impl Default for IntensityThresholds {
    fn default() -> Self {
        Self {
            mild: intensity::MILD,
            moderate: intensity::MODERATE,
            severe: intensity::SEVERE,
        }
    }
}

impl IntensityThresholds {
    /// Whether the thresholds are strictly increasing
    #[must_use]
    pub const fn is_ordered(&self) -> bool {
        self.mild < self.moderate && self.moderate < self.severe
    }

    /// Classify a score, `None` below the mild threshold
    #[must_use]
    pub const fn classify(&self, score: u8) -> Option<IntensityLevel> {
        if score >= self.severe {
            Some(IntensityLevel::Severe)
        } else if score >= self.moderate {
            Some(IntensityLevel::Moderate)
        } else if score >= self.mild {
            Some(IntensityLevel::Mild)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_thresholds_classify() {
        let thresholds = IntensityThresholds::default();
        assert_eq!(thresholds.classify(2), None);
        assert_eq!(thresholds.classify(3), Some(IntensityLevel::Mild));
        assert_eq!(thresholds.classify(7), Some(IntensityLevel::Moderate));
        assert_eq!(thresholds.classify(10), Some(IntensityLevel::Severe));
    }

    #[test]
    fn test_unordered_thresholds_detected() {
        let thresholds = IntensityThresholds {
            mild: 5,
            moderate: 5,
            severe: 8,
        };
        assert!(!thresholds.is_ordered());
    }

    #[test]
    fn test_matches_ignores_id_case() {
        let category = SymptomCategory {
            id: "Brain_Fog".to_owned(),
            name: "Mental clarity".to_owned(),
            description: "Difficulty concentrating".to_owned(),
            priority: 6,
            keywords: vec!["Focus".to_owned()],
            related_questions: Vec::new(),
        };
        assert!(category.matches("brain_fog"));
        assert!(category.matches("focus"));
        assert!(!category.matches("sleep"));
    }
}
