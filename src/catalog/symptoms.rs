// ABOUTME: Symptom category registry with keyword search and intensity classification
// ABOUTME: Groups categories for quiz navigation; never consulted by the scoring math
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriLab

use crate::models::{IntensityLevel, IntensityThresholds, SymptomCategory};
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::collections::HashMap;

/// On-disk shape of `symptoms.json`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SymptomDocument {
    /// Intensity thresholds
    #[serde(default)]
    pub intensity: IntensityThresholds,
    /// Symptom categories
    pub categories: Vec<SymptomCategory>,
}

/// Searchable set of symptom categories
#[derive(Debug, Clone, Default)]
pub struct SymptomRegistry {
    intensity: IntensityThresholds,
    // Sorted by priority descending, then id
    categories: Vec<SymptomCategory>,
    index: HashMap<String, usize>,
}

impl SymptomRegistry {
    /// Build a registry from a validated document
    #[must_use]
    pub fn from_document(document: SymptomDocument) -> Self {
        let mut categories = document.categories;
        categories.sort_by(|a, b| {
            Reverse(a.priority)
                .cmp(&Reverse(b.priority))
                .then_with(|| a.id.cmp(&b.id))
        });
        let index = categories
            .iter()
            .enumerate()
            .map(|(position, category)| (category.id.clone(), position))
            .collect();
        Self {
            intensity: document.intensity,
            categories,
            index,
        }
    }

    /// Look up a category by id
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&SymptomCategory> {
        self.index
            .get(id)
            .and_then(|&position| self.categories.get(position))
    }

    /// All categories, highest priority first
    pub fn iter(&self) -> impl Iterator<Item = &SymptomCategory> {
        self.categories.iter()
    }

    /// Number of categories
    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Whether the registry is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Categories whose id, name, or keywords contain `query`, ignoring case
    ///
    /// A blank query matches nothing.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&SymptomCategory> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        self.categories
            .iter()
            .filter(|category| category.matches(&needle))
            .collect()
    }

    /// Categories surfaced by a quiz question
    #[must_use]
    pub fn for_question(&self, question_id: &str) -> Vec<&SymptomCategory> {
        self.categories
            .iter()
            .filter(|category| category.related_questions.iter().any(|q| q == question_id))
            .collect()
    }

    /// Intensity thresholds in effect
    #[must_use]
    pub const fn thresholds(&self) -> &IntensityThresholds {
        &self.intensity
    }

    /// Classify a 0-10 self-reported score
    #[must_use]
    pub const fn intensity(&self, score: u8) -> Option<IntensityLevel> {
        self.intensity.classify(score)
    }
}
