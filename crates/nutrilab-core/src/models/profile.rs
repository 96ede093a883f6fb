// ABOUTME: User profile models consumed by the recommendation scorer
// ABOUTME: UserProfile, AgeBracket, Gender, and DietaryConstraint definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriLab

use super::TableKind;
use crate::constants::age;
use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Demographic age bracket keyed by the age adjustment table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AgeBracket {
    /// 18 to 30 years
    #[serde(rename = "18-30")]
    From18To30,
    /// 31 to 45 years
    #[serde(rename = "31-45")]
    From31To45,
    /// 46 to 60 years
    #[serde(rename = "46-60")]
    From46To60,
    /// Over 60 years
    #[serde(rename = "60+")]
    Over60,
}

impl AgeBracket {
    /// All brackets, youngest first
    pub const ALL: [Self; 4] = [
        Self::From18To30,
        Self::From31To45,
        Self::From46To60,
        Self::Over60,
    ];

    /// Bracket for an age in years, `None` for minors
    #[must_use]
    pub const fn from_age(years: u8) -> Option<Self> {
        if years < age::MIN_ADULT_AGE {
            None
        } else if years < age::BRACKET_31_45 {
            Some(Self::From18To30)
        } else if years < age::BRACKET_46_60 {
            Some(Self::From31To45)
        } else if years < age::BRACKET_60_PLUS {
            Some(Self::From46To60)
        } else {
            Some(Self::Over60)
        }
    }

    /// Key used in the age adjustment table
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::From18To30 => "18-30",
            Self::From31To45 => "31-45",
            Self::From46To60 => "46-60",
            Self::Over60 => "60+",
        }
    }
}

impl fmt::Display for AgeBracket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AgeBracket {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Some(bracket) = Self::ALL.into_iter().find(|b| b.as_str() == trimmed) {
            return Ok(bracket);
        }
        // A bare number is treated as an age in years
        trimmed
            .parse::<u8>()
            .ok()
            .and_then(Self::from_age)
            .ok_or_else(|| {
                AppError::invalid_input(format!(
                    "Unknown age bracket '{s}', expected 18-30, 31-45, 46-60, 60+ or an adult age"
                ))
            })
    }
}

/// Gender keyed by the gender adjustment table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Gender {
    /// Female
    #[serde(rename = "femme", alias = "female")]
    Femme,
    /// Male
    #[serde(rename = "homme", alias = "male")]
    Homme,
    /// Non-binary
    #[serde(rename = "non_binaire", alias = "non_binary", alias = "non-binary")]
    NonBinaire,
}

impl Gender {
    /// Key used in the gender adjustment table
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Femme => "femme",
            Self::Homme => "homme",
            Self::NonBinaire => "non_binaire",
        }
    }

    /// Parse gender leniently, `None` for unrecognized or undisclosed values
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "femme" | "female" | "woman" | "f" => Some(Self::Femme),
            "homme" | "male" | "man" | "m" => Some(Self::Homme),
            "non_binaire" | "non_binary" | "nonbinary" => Some(Self::NonBinaire),
            _ => None,
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_lossy(s).ok_or_else(|| {
            AppError::invalid_input(format!(
                "Unknown gender '{s}', expected femme, homme or non_binaire"
            ))
        })
    }
}

/// Dietary constraint restricting which supplement forms are acceptable
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum DietaryConstraint {
    /// No restriction
    #[default]
    Omnivore,
    /// No animal flesh or fish-derived products
    Vegetarian,
    /// No animal-derived products at all
    Vegan,
}

impl DietaryConstraint {
    /// Whether a vegetarian form is required
    #[must_use]
    pub const fn requires_vegetarian(&self) -> bool {
        matches!(self, Self::Vegetarian | Self::Vegan)
    }

    /// Lower-case name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Omnivore => "omnivore",
            Self::Vegetarian => "vegetarian",
            Self::Vegan => "vegan",
        }
    }
}

impl fmt::Display for DietaryConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DietaryConstraint {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "omnivore" | "none" | "standard" => Ok(Self::Omnivore),
            "vegetarian" => Ok(Self::Vegetarian),
            "vegan" => Ok(Self::Vegan),
            _ => Err(AppError::invalid_input(format!(
                "Unknown diet '{s}', expected omnivore, vegetarian or vegan"
            ))),
        }
    }
}

/// Scorer input collected by the quiz
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Selected symptom keys
    #[serde(default)]
    pub symptoms: Vec<String>,
    /// Selected goal keys
    #[serde(default)]
    pub goals: Vec<String>,
    /// Selected lifestyle keys
    #[serde(default)]
    pub lifestyle: Vec<String>,
    /// Age bracket, no age factor applied when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<AgeBracket>,
    /// Gender, no gender factor applied when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    /// Dietary constraint
    #[serde(default)]
    pub diet: DietaryConstraint,
}

impl UserProfile {
    /// Create an empty omnivore profile
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a symptom key
    #[must_use]
    pub fn with_symptom(mut self, key: impl Into<String>) -> Self {
        self.symptoms.push(key.into());
        self
    }

    /// Add a goal key
    #[must_use]
    pub fn with_goal(mut self, key: impl Into<String>) -> Self {
        self.goals.push(key.into());
        self
    }

    /// Add a lifestyle key
    #[must_use]
    pub fn with_lifestyle(mut self, key: impl Into<String>) -> Self {
        self.lifestyle.push(key.into());
        self
    }

    /// Set the age bracket
    #[must_use]
    pub fn with_age(mut self, age: AgeBracket) -> Self {
        self.age = Some(age);
        self
    }

    /// Set the gender
    #[must_use]
    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = Some(gender);
        self
    }

    /// Set the dietary constraint
    #[must_use]
    pub fn with_diet(mut self, diet: DietaryConstraint) -> Self {
        self.diet = diet;
        self
    }

    /// Whether no key of any kind is selected
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symptoms.is_empty() && self.goals.is_empty() && self.lifestyle.is_empty()
    }

    /// Keys selected for one table kind
    #[must_use]
    pub fn keys(&self, kind: TableKind) -> &[String] {
        match kind {
            TableKind::Symptom => &self.symptoms,
            TableKind::Goal => &self.goals,
            TableKind::Lifestyle => &self.lifestyle,
        }
    }

    /// Every selected key tagged with its table, symptoms first
    pub fn selected_keys(&self) -> impl Iterator<Item = (TableKind, &str)> {
        TableKind::ALL.into_iter().flat_map(move |kind| {
            self.keys(kind)
                .iter()
                .map(move |key| (kind, key.as_str()))
        })
    }
}
