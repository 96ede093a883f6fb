// ABOUTME: Raw quiz answers and their conversion into a scorer profile
// ABOUTME: Normalises keys and derives symptoms, lifestyle tags, diet, age bracket, and gender
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriLab

use crate::models::{AgeBracket, DietaryConstraint, Gender, UserProfile};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::debug;

/// Answers collected by the quiz front end
///
/// Field names accept both `snake_case` and the `camelCase` the web quiz posts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuizResponses {
    /// Contact name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Contact email
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Selected symptoms
    pub symptoms: Vec<String>,
    /// Selected goals
    pub objectives: Vec<String>,
    /// Free-form lifestyle tags
    pub lifestyle: Vec<String>,
    /// Diet pattern, e.g. "omnivore", "vegetarian", "vegan"
    #[serde(alias = "dietaryHabits", skip_serializing_if = "Option::is_none")]
    pub dietary_habits: Option<String>,
    /// Meat intake frequency
    #[serde(alias = "meatConsumption", skip_serializing_if = "Option::is_none")]
    pub meat_consumption: Option<String>,
    /// Fish intake frequency
    #[serde(alias = "fishConsumption", skip_serializing_if = "Option::is_none")]
    pub fish_consumption: Option<String>,
    /// Fruit and vegetable intake frequency
    #[serde(alias = "fruitVegConsumption", skip_serializing_if = "Option::is_none")]
    pub fruit_veg_consumption: Option<String>,
    /// Protein intake
    #[serde(alias = "proteinConsumption", skip_serializing_if = "Option::is_none")]
    pub protein_consumption: Option<String>,
    /// Exercise frequency, e.g. "rarely", "weekly", "daily", "intense"
    #[serde(alias = "exerciseFrequency", skip_serializing_if = "Option::is_none")]
    pub exercise_frequency: Option<String>,
    /// Sleep quality, e.g. "good", "poor", "very_poor"
    #[serde(alias = "sleepQuality", skip_serializing_if = "Option::is_none")]
    pub sleep_quality: Option<String>,
    /// Stress level, e.g. "low", "moderate", "high", "very_high"
    #[serde(alias = "stressLevel", skip_serializing_if = "Option::is_none")]
    pub stress_level: Option<String>,
    /// Age in years, posted as a number or a numeric string
    #[serde(
        deserialize_with = "deserialize_lenient_age",
        skip_serializing_if = "Option::is_none"
    )]
    pub age: Option<u8>,
    /// Gender as typed or selected
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
}

/// Accepts `42`, `"42"` or `" 42 "`; anything unparseable is treated as unanswered
fn deserialize_lenient_age<'de, D>(deserializer: D) -> Result<Option<u8>, D::Error>
where
    D: Deserializer<'de>,
{
    let age = match Value::deserialize(deserializer)? {
        Value::Number(number) => number.as_u64().and_then(|years| u8::try_from(years).ok()),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    };
    Ok(age)
}

/// Lower-case `snake_case` form of a free-form answer
#[must_use]
pub fn normalize_key(raw: &str) -> String {
    let mut key = String::with_capacity(raw.len());
    for ch in raw.trim().chars() {
        if ch.is_alphanumeric() {
            key.extend(ch.to_lowercase());
        } else if !key.is_empty() && !key.ends_with('_') {
            key.push('_');
        }
    }
    while key.ends_with('_') {
        key.pop();
    }
    key
}

fn answer_is(answer: Option<&String>, accepted: &[&str]) -> bool {
    answer.is_some_and(|value| accepted.contains(&normalize_key(value).as_str()))
}

fn push_unique(keys: &mut Vec<String>, key: String) {
    if !key.is_empty() && !keys.contains(&key) {
        keys.push(key);
    }
}

impl QuizResponses {
    /// Set contact details
    pub fn set_contact(&mut self, name: impl Into<String>, email: impl Into<String>) {
        self.name = Some(name.into());
        self.email = Some(email.into());
    }

    /// Dietary constraint implied by `dietary_habits`, in English or French
    #[must_use]
    pub fn diet(&self) -> DietaryConstraint {
        let habits = self
            .dietary_habits
            .as_deref()
            .map(|raw| normalize_key(raw).replace(['\u{e8}', '\u{e9}'], "e"));
        match habits.as_deref() {
            Some("vegan" | "vegane" | "vegetalien" | "vegetalienne") => DietaryConstraint::Vegan,
            Some("vegetarian" | "vegetarien" | "vegetarienne") => DietaryConstraint::Vegetarian,
            _ => DietaryConstraint::Omnivore,
        }
    }

    /// Convert the answers into a scorer profile
    #[must_use]
    pub fn to_profile(&self) -> UserProfile {
        let mut profile = UserProfile::new();

        for symptom in &self.symptoms {
            push_unique(&mut profile.symptoms, normalize_key(symptom));
        }
        if answer_is(self.stress_level.as_ref(), &["high", "very_high"]) {
            push_unique(&mut profile.symptoms, "stress".to_owned());
        }
        if answer_is(self.sleep_quality.as_ref(), &["poor", "very_poor"]) {
            push_unique(&mut profile.symptoms, "sleep_quality".to_owned());
        }

        for objective in &self.objectives {
            push_unique(&mut profile.goals, normalize_key(objective));
        }

        let diet = self.diet();
        if diet.requires_vegetarian() {
            push_unique(&mut profile.lifestyle, diet.as_str().to_owned());
        }
        if answer_is(self.exercise_frequency.as_ref(), &["daily", "intense"]) {
            push_unique(&mut profile.lifestyle, "intense_training".to_owned());
        }
        for tag in &self.lifestyle {
            push_unique(&mut profile.lifestyle, normalize_key(tag));
        }

        profile.diet = diet;
        profile.age = self.age.and_then(AgeBracket::from_age);
        profile.gender = self.gender.as_deref().and_then(Gender::from_str_lossy);

        debug!(
            symptoms = profile.symptoms.len(),
            goals = profile.goals.len(),
            lifestyle = profile.lifestyle.len(),
            diet = %profile.diet,
            "Converted quiz answers to profile"
        );
        profile
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_key() {
        assert_eq!(normalize_key("Brain Fog"), "brain_fog");
        assert_eq!(normalize_key("  heart-health "), "heart_health");
        assert_eq!(normalize_key("very_high"), "very_high");
        assert_eq!(normalize_key("--"), "");
    }

    #[test]
    fn test_derived_symptoms_and_lifestyle() {
        let responses = QuizResponses {
            stress_level: Some("Very High".to_owned()),
            sleep_quality: Some("poor".to_owned()),
            exercise_frequency: Some("daily".to_owned()),
            dietary_habits: Some("vegan".to_owned()),
            ..QuizResponses::default()
        };
        let profile = responses.to_profile();
        assert_eq!(profile.symptoms, vec!["stress", "sleep_quality"]);
        assert_eq!(profile.lifestyle, vec!["vegan", "intense_training"]);
        assert_eq!(profile.diet, DietaryConstraint::Vegan);
    }

    #[test]
    fn test_moderate_answers_add_nothing() {
        let responses = QuizResponses {
            stress_level: Some("moderate".to_owned()),
            sleep_quality: Some("good".to_owned()),
            exercise_frequency: Some("weekly".to_owned()),
            ..QuizResponses::default()
        };
        let profile = responses.to_profile();
        assert!(profile.is_empty());
        assert_eq!(profile.diet, DietaryConstraint::Omnivore);
    }

    #[test]
    fn test_age_and_gender() {
        let responses = QuizResponses {
            age: Some(52),
            gender: Some("female".to_owned()),
            ..QuizResponses::default()
        };
        let profile = responses.to_profile();
        assert_eq!(profile.age, Some(AgeBracket::From46To60));
        assert_eq!(profile.gender, Some(Gender::Femme));

        let minor = QuizResponses {
            age: Some(16),
            gender: Some("prefer not to say".to_owned()),
            ..QuizResponses::default()
        };
        let profile = minor.to_profile();
        assert_eq!(profile.age, None);
        assert_eq!(profile.gender, None);
    }

    #[test]
    fn test_french_diet_answers() {
        for (answer, diet) in [
            ("vegetarien", DietaryConstraint::Vegetarian),
            ("V\u{e9}g\u{e9}tarienne", DietaryConstraint::Vegetarian),
            ("vegetalien", DietaryConstraint::Vegan),
            ("omnivore", DietaryConstraint::Omnivore),
        ] {
            let responses = QuizResponses {
                dietary_habits: Some(answer.to_owned()),
                ..QuizResponses::default()
            };
            assert_eq!(responses.diet(), diet, "{answer}");
        }
    }

    #[test]
    fn test_age_accepts_number_or_string() {
        let parse = |payload: &str| serde_json::from_str::<QuizResponses>(payload).unwrap().age;
        assert_eq!(parse(r#"{"age":42}"#), Some(42));
        assert_eq!(parse(r#"{"age":"42"}"#), Some(42));
        assert_eq!(parse(r#"{"age":" 35 "}"#), Some(35));
        assert_eq!(parse(r#"{"age":""}"#), None);
        assert_eq!(parse(r#"{"age":"forty"}"#), None);
        assert_eq!(parse(r#"{"age":null}"#), None);
        assert_eq!(parse(r#"{"age":300}"#), None);
        assert_eq!(parse("{}"), None);
    }

    #[test]
    fn test_camel_case_payload() {
        let responses: QuizResponses = serde_json::from_str(
            r#"{"dietaryHabits":"vegetarian","stressLevel":"high","objectives":["Energy Boost"]}"#,
        )
        .unwrap();
        let profile = responses.to_profile();
        assert_eq!(profile.diet, DietaryConstraint::Vegetarian);
        assert_eq!(profile.goals, vec!["energy_boost"]);
        assert!(profile.symptoms.contains(&"stress".to_owned()));
        assert!(profile.lifestyle.contains(&"vegetarian".to_owned()));
    }
}
