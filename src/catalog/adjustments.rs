// ABOUTME: Demographic adjustment factors and per-key priority factors for scoring
// ABOUTME: Age bracket and gender multiplier tables keyed by supplement id
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriLab

use crate::models::{AgeBracket, Gender, SupplementId, TableKind};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Supplement id to multiplier
pub type FactorTable = BTreeMap<SupplementId, f64>;

/// On-disk shape of `adjustments.json`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AdjustmentFactors {
    /// Multipliers per age bracket
    #[serde(default)]
    pub age: BTreeMap<AgeBracket, FactorTable>,
    /// Multipliers per gender
    #[serde(default)]
    pub gender: BTreeMap<Gender, FactorTable>,
    /// Global weights per mapping key, applied as the maximum over a recommendation's reasons
    #[serde(default)]
    pub priority_factors: BTreeMap<TableKind, BTreeMap<String, f64>>,
}

impl AdjustmentFactors {
    /// Age multiplier for a supplement, `None` when the table has no entry
    #[must_use]
    pub fn age_factor(&self, bracket: AgeBracket, id: &str) -> Option<f64> {
        self.age.get(&bracket).and_then(|table| table.get(id)).copied()
    }

    /// Gender multiplier for a supplement, `None` when the table has no entry
    #[must_use]
    pub fn gender_factor(&self, gender: Gender, id: &str) -> Option<f64> {
        self.gender.get(&gender).and_then(|table| table.get(id)).copied()
    }

    /// Priority factor for a mapping key, `None` when the key carries none
    #[must_use]
    pub fn priority_factor(&self, kind: TableKind, key: &str) -> Option<f64> {
        self.priority_factors
            .get(&kind)
            .and_then(|table| table.get(key))
            .copied()
    }

    /// Every demographic factor with a label naming its table
    pub fn demographic_factors(&self) -> impl Iterator<Item = (String, &SupplementId, f64)> {
        let age = self.age.iter().flat_map(|(bracket, table)| {
            table
                .iter()
                .map(move |(id, value)| (format!("age {bracket}"), id, *value))
        });
        let gender = self.gender.iter().flat_map(|(gender, table)| {
            table
                .iter()
                .map(move |(id, value)| (format!("gender {gender}"), id, *value))
        });
        age.chain(gender)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn factors() -> AdjustmentFactors {
        serde_json::from_str(
            r#"{
                "age": { "46-60": { "coq10": 1.2 } },
                "gender": { "femme": { "iron": 1.3 } },
                "priority_factors": { "symptom": { "stress": 1.5 } }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_lookup_returns_none_when_absent() {
        let factors = factors();
        assert_eq!(factors.age_factor(AgeBracket::From46To60, "coq10"), Some(1.2));
        assert_eq!(factors.age_factor(AgeBracket::From18To30, "coq10"), None);
        assert_eq!(factors.gender_factor(Gender::Femme, "iron"), Some(1.3));
        assert_eq!(factors.gender_factor(Gender::Homme, "iron"), None);
        assert_eq!(factors.priority_factor(TableKind::Symptom, "stress"), Some(1.5));
        assert_eq!(factors.priority_factor(TableKind::Goal, "stress"), None);
    }

    #[test]
    fn test_demographic_factors_are_labelled() {
        let labels: Vec<_> = factors()
            .demographic_factors()
            .map(|(label, id, _)| format!("{label}:{id}"))
            .collect();
        assert_eq!(labels, vec!["age 46-60:coq10", "gender femme:iron"]);
    }
}
