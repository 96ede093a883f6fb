// ABOUTME: Supplement catalog models with dosing variants and safety metadata
// ABOUTME: SupplementId, Supplement, and SafetyInfo definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriLab

use super::DietaryConstraint;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Stable catalog key for a supplement (e.g. `omega3_vegan`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SupplementId(String);

impl SupplementId {
    /// Wrap an id string
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the id as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SupplementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for SupplementId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SupplementId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for SupplementId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Safety metadata shown alongside a recommendation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SafetyInfo {
    /// Conditions or medications that rule the supplement out
    #[serde(default)]
    pub contraindications: Vec<String>,
}

/// A supplement definition from the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Supplement {
    /// Stable key
    pub id: SupplementId,
    /// Display name
    pub name: String,
    /// Dose for users without dietary restrictions
    pub standard_dose: String,
    /// Dose of the vegetarian form; `None` when no vegetarian form exists
    pub vegetarian_dose: Option<String>,
    /// Whether the vegetarian form is also vegan
    #[serde(default)]
    pub vegan: bool,
    /// Short description
    pub description: String,
    /// Category tags (sleep, cognition, ...)
    #[serde(default)]
    pub categories: Vec<String>,
    /// Optional safety metadata
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub safety: Option<SafetyInfo>,
}

impl Supplement {
    /// Whether a vegetarian form exists
    #[must_use]
    pub const fn is_vegetarian(&self) -> bool {
        self.vegetarian_dose.is_some()
    }

    /// Whether the supplement is suitable for vegans
    #[must_use]
    pub const fn is_vegan(&self) -> bool {
        self.vegan && self.vegetarian_dose.is_some()
    }

    /// Whether the supplement satisfies a dietary constraint
    #[must_use]
    pub const fn suits(&self, diet: DietaryConstraint) -> bool {
        match diet {
            DietaryConstraint::Omnivore => true,
            DietaryConstraint::Vegetarian => self.is_vegetarian(),
            DietaryConstraint::Vegan => self.is_vegan(),
        }
    }

    /// Whether the supplement carries a category tag, ignoring case
    #[must_use]
    pub fn has_category(&self, tag: &str) -> bool {
        self.categories
            .iter()
            .any(|category| category.eq_ignore_ascii_case(tag))
    }

    /// Contraindications, empty when no safety metadata is present
    #[must_use]
    pub fn contraindications(&self) -> &[String] {
        self.safety
            .as_ref()
            .map_or(&[], |safety| safety.contraindications.as_slice())
    }
}
