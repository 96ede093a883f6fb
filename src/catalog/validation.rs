// ABOUTME: Load-time referential integrity checks across catalog, tables, and factors
// ABOUTME: Collects every violation so a single run reports all broken references
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriLab

use super::adjustments::AdjustmentFactors;
use super::supplements::SupplementDocument;
use super::symptoms::SymptomDocument;
use super::tables::MappingDocument;
use crate::constants::priority;
use crate::errors::IntegrityViolation;
use crate::models::{DietaryConstraint, RecommendationEntry, Supplement, TableKind};
use std::collections::{HashMap, HashSet};
use tracing::warn;

/// Parsed reference documents awaiting validation
#[derive(Debug, Clone, Copy)]
pub struct DocumentSet<'a> {
    /// Supplement catalog
    pub supplements: &'a SupplementDocument,
    /// Symptom registry
    pub symptoms: &'a SymptomDocument,
    /// Mapping tables
    pub mappings: &'a MappingDocument,
    /// Adjustment factors
    pub adjustments: &'a AdjustmentFactors,
}

/// Check every integrity rule and return the violations found
#[must_use]
pub fn validate(documents: DocumentSet<'_>) -> Vec<IntegrityViolation> {
    let mut violations = Vec::new();
    let catalog = check_supplements(documents.supplements, &mut violations);
    check_symptoms(documents.symptoms, &mut violations);
    check_mappings(documents.mappings, &catalog, &mut violations);
    check_factors(documents.adjustments, documents.mappings, &catalog, &mut violations);
    violations
}

fn check_supplements<'a>(
    document: &'a SupplementDocument,
    violations: &mut Vec<IntegrityViolation>,
) -> HashMap<&'a str, &'a Supplement> {
    let mut catalog = HashMap::with_capacity(document.supplements.len());
    for supplement in &document.supplements {
        if catalog.insert(supplement.id.as_str(), supplement).is_some() {
            violations.push(IntegrityViolation::DuplicateSupplement {
                supplement_id: supplement.id.to_string(),
            });
        }
    }
    catalog
}

fn check_symptoms(document: &SymptomDocument, violations: &mut Vec<IntegrityViolation>) {
    if !document.intensity.is_ordered() {
        violations.push(IntegrityViolation::UnorderedIntensityThresholds);
    }
    let mut seen = HashSet::with_capacity(document.categories.len());
    for category in &document.categories {
        if !seen.insert(category.id.as_str()) {
            violations.push(IntegrityViolation::DuplicateSymptomCategory {
                category_id: category.id.clone(),
            });
        }
        if !priority::is_valid(category.priority) {
            violations.push(IntegrityViolation::CategoryPriorityOutOfRange {
                category_id: category.id.clone(),
                priority: category.priority,
            });
        }
    }
}

fn check_mappings(
    document: &MappingDocument,
    catalog: &HashMap<&str, &Supplement>,
    violations: &mut Vec<IntegrityViolation>,
) {
    for kind in TableKind::ALL {
        for (key, entries) in document.table(kind) {
            if entries.is_empty() {
                warn!(table = %kind, key = %key, "Mapping key has no entries");
            }
            check_key_duplicates(kind, key, entries, violations);
        }
    }

    for (kind, key, entry) in document.entries() {
        let supplement_id = entry.supplement_id.as_str();
        match catalog.get(supplement_id) {
            None => violations.push(IntegrityViolation::DanglingSupplement {
                table: kind.to_string(),
                key: key.to_owned(),
                supplement_id: supplement_id.to_owned(),
            }),
            Some(supplement) if entry.dose_vegetarian.is_some() && !supplement.is_vegetarian() => {
                violations.push(IntegrityViolation::VegetarianDoseOnNonVegetarian {
                    table: kind.to_string(),
                    key: key.to_owned(),
                    supplement_id: supplement_id.to_owned(),
                });
            }
            Some(_) => {}
        }
        if !priority::is_valid(entry.priority) {
            violations.push(IntegrityViolation::PriorityOutOfRange {
                table: kind.to_string(),
                key: key.to_owned(),
                supplement_id: supplement_id.to_owned(),
                priority: entry.priority,
            });
        }

        let Some(alternative) = &entry.vegetarian_alternative else {
            continue;
        };
        let alternative_id = alternative.supplement_id.as_str();
        match catalog.get(alternative_id) {
            None => violations.push(IntegrityViolation::DanglingAlternative {
                table: kind.to_string(),
                key: key.to_owned(),
                supplement_id: supplement_id.to_owned(),
                alternative_id: alternative_id.to_owned(),
            }),
            Some(supplement) if !supplement.is_vegetarian() => {
                violations.push(IntegrityViolation::NonVegetarianAlternative {
                    table: kind.to_string(),
                    key: key.to_owned(),
                    alternative_id: alternative_id.to_owned(),
                });
            }
            Some(_) => {}
        }
        if !priority::is_valid(alternative.priority) {
            violations.push(IntegrityViolation::PriorityOutOfRange {
                table: kind.to_string(),
                key: key.to_owned(),
                supplement_id: alternative_id.to_owned(),
                priority: alternative.priority,
            });
        }
    }
}

/// Entries under one key must resolve to distinct supplements for every diet
fn check_key_duplicates(
    kind: TableKind,
    key: &str,
    entries: &[RecommendationEntry],
    violations: &mut Vec<IntegrityViolation>,
) {
    let duplicate = |supplement_id: &str, diet: DietaryConstraint| {
        IntegrityViolation::DuplicateKeyEntry {
            table: kind.to_string(),
            key: key.to_owned(),
            supplement_id: supplement_id.to_owned(),
            diet: diet.to_string(),
        }
    };

    let mut standard = HashSet::with_capacity(entries.len());
    let mut vegetarian = HashSet::with_capacity(entries.len());
    for entry in entries {
        let direct = entry.supplement_id.as_str();
        if !standard.insert(direct) {
            violations.push(duplicate(direct, DietaryConstraint::Omnivore));
            continue;
        }
        let resolved = if entry.dose_vegetarian.is_some() {
            Some(direct)
        } else {
            entry
                .vegetarian_alternative
                .as_ref()
                .map(|alternative| alternative.supplement_id.as_str())
        };
        if let Some(id) = resolved {
            if !vegetarian.insert(id) {
                violations.push(duplicate(id, DietaryConstraint::Vegetarian));
            }
        }
    }
}

fn check_factors(
    adjustments: &AdjustmentFactors,
    mappings: &MappingDocument,
    catalog: &HashMap<&str, &Supplement>,
    violations: &mut Vec<IntegrityViolation>,
) {
    for (table, supplement_id, value) in adjustments.demographic_factors() {
        if !catalog.contains_key(supplement_id.as_str()) {
            violations.push(IntegrityViolation::DanglingFactor {
                table: table.clone(),
                supplement_id: supplement_id.to_string(),
            });
        }
        if !is_valid_multiplier(value) {
            violations.push(IntegrityViolation::InvalidMultiplier {
                table,
                supplement_id: supplement_id.to_string(),
                value,
            });
        }
    }

    for (kind, factors) in &adjustments.priority_factors {
        for (key, &value) in factors {
            if !mappings.table(*kind).contains_key(key) {
                violations.push(IntegrityViolation::UnknownPriorityFactorKey {
                    table: kind.to_string(),
                    key: key.clone(),
                });
            }
            if !is_valid_multiplier(value) {
                violations.push(IntegrityViolation::InvalidMultiplier {
                    table: format!("priority {kind}"),
                    supplement_id: key.clone(),
                    value,
                });
            }
        }
    }
}

fn is_valid_multiplier(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Gender, IntensityThresholds, SupplementId, VegetarianAlternative};

    fn supplement(id: &str, vegetarian: bool) -> Supplement {
        Supplement {
            id: SupplementId::new(id),
            name: id.to_owned(),
            standard_dose: "1 capsule".to_owned(),
            vegetarian_dose: vegetarian.then(|| "1 capsule".to_owned()),
            vegan: vegetarian,
            description: String::new(),
            categories: Vec::new(),
            safety: None,
        }
    }

    fn documents() -> (SupplementDocument, SymptomDocument, MappingDocument, AdjustmentFactors) {
        let supplements = SupplementDocument {
            version: "test".to_owned(),
            supplements: vec![supplement("omega3", false), supplement("omega3_vegan", true)],
        };
        let symptoms = SymptomDocument {
            intensity: IntensityThresholds::default(),
            categories: Vec::new(),
        };
        let mut mappings = MappingDocument::default();
        mappings.goal.insert(
            "heart_health".to_owned(),
            vec![RecommendationEntry::new("omega3", 10, "1000mg", None).with_alternative(
                VegetarianAlternative {
                    supplement_id: SupplementId::new("omega3_vegan"),
                    priority: 10,
                    dose: "500mg".to_owned(),
                },
            )],
        );
        (supplements, symptoms, mappings, AdjustmentFactors::default())
    }

    fn run(
        documents: &(SupplementDocument, SymptomDocument, MappingDocument, AdjustmentFactors),
    ) -> Vec<IntegrityViolation> {
        validate(DocumentSet {
            supplements: &documents.0,
            symptoms: &documents.1,
            mappings: &documents.2,
            adjustments: &documents.3,
        })
    }

    #[test]
    fn test_clean_documents_pass() {
        assert!(run(&documents()).is_empty());
    }

    #[test]
    fn test_non_vegetarian_alternative_rejected() {
        let mut docs = documents();
        docs.0.supplements[1].vegetarian_dose = None;
        let violations = run(&docs);
        assert!(matches!(
            violations.as_slice(),
            [IntegrityViolation::NonVegetarianAlternative { alternative_id, .. }]
                if alternative_id == "omega3_vegan"
        ));
    }

    #[test]
    fn test_priority_factor_must_name_known_key() {
        let mut docs = documents();
        docs.3
            .priority_factors
            .entry(TableKind::Goal)
            .or_default()
            .insert("heart_healht".to_owned(), 1.3);
        let violations = run(&docs);
        assert_eq!(violations.len(), 1);
        assert!(violations[0].to_string().contains("heart_healht"));
    }

    #[test]
    fn test_multiplier_must_be_positive() {
        let mut docs = documents();
        docs.3
            .gender
            .entry(Gender::Homme)
            .or_default()
            .insert(SupplementId::new("omega3"), 0.0);
        let violations = run(&docs);
        assert!(matches!(
            violations.as_slice(),
            [IntegrityViolation::InvalidMultiplier { .. }]
        ));
    }

    #[test]
    fn test_vegetarian_dose_on_non_vegetarian_rejected() {
        let mut docs = documents();
        docs.2.goal.insert(
            "cognitive_performance".to_owned(),
            vec![RecommendationEntry::new("omega3", 6, "1000mg", Some("1000mg".to_owned()))],
        );
        let violations = run(&docs);
        assert!(matches!(
            violations.as_slice(),
            [IntegrityViolation::VegetarianDoseOnNonVegetarian { key, supplement_id, .. }]
                if key == "cognitive_performance" && supplement_id == "omega3"
        ));
    }

    #[test]
    fn test_alternative_colliding_with_direct_entry_rejected() {
        let mut docs = documents();
        docs.2
            .goal
            .get_mut("heart_health")
            .unwrap()
            .push(RecommendationEntry::new(
                "omega3_vegan",
                7,
                "500mg",
                Some("500mg".to_owned()),
            ));
        let violations = run(&docs);
        assert!(matches!(
            violations.as_slice(),
            [IntegrityViolation::DuplicateKeyEntry { supplement_id, diet, .. }]
                if supplement_id == "omega3_vegan" && diet == "vegetarian"
        ));
    }

    #[test]
    fn test_repeated_direct_entry_reported_once() {
        let mut docs = documents();
        let entries = docs.2.goal.get_mut("heart_health").unwrap();
        let first = entries[0].clone();
        entries.push(first);
        let violations = run(&docs);
        assert!(matches!(
            violations.as_slice(),
            [IntegrityViolation::DuplicateKeyEntry { supplement_id, diet, .. }]
                if supplement_id == "omega3" && diet == "omnivore"
        ));
    }
}
