// ABOUTME: Supplement catalog registry keyed by stable supplement id
// ABOUTME: Lookup, category filtering, and dietary suitability queries over immutable definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriLab

use crate::models::{DietaryConstraint, Supplement, SupplementId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// On-disk shape of `supplements.json`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupplementDocument {
    /// Data version
    pub version: String,
    /// Supplement definitions
    pub supplements: Vec<Supplement>,
}

/// Registry of supplement definitions
#[derive(Debug, Clone, Default)]
pub struct SupplementCatalog {
    version: String,
    supplements: BTreeMap<SupplementId, Supplement>,
}

impl SupplementCatalog {
    /// Build a catalog from a validated document
    ///
    /// Duplicate ids must already have been rejected; the last definition wins here.
    #[must_use]
    pub fn from_document(document: SupplementDocument) -> Self {
        let supplements = document
            .supplements
            .into_iter()
            .map(|supplement| (supplement.id.clone(), supplement))
            .collect();
        Self {
            version: document.version,
            supplements,
        }
    }

    /// Data version of the catalog
    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Look up a supplement by id
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Supplement> {
        self.supplements.get(id)
    }

    /// Whether the catalog defines `id`
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.supplements.contains_key(id)
    }

    /// All supplements in id order
    pub fn iter(&self) -> impl Iterator<Item = &Supplement> {
        self.supplements.values()
    }

    /// Number of supplements
    #[must_use]
    pub fn len(&self) -> usize {
        self.supplements.len()
    }

    /// Whether the catalog is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.supplements.is_empty()
    }

    /// Supplements tagged with `category`, in id order
    #[must_use]
    pub fn by_category(&self, category: &str) -> Vec<&Supplement> {
        self.iter()
            .filter(|supplement| supplement.has_category(category))
            .collect()
    }

    /// Supplements suitable for a dietary constraint, in id order
    #[must_use]
    pub fn compatible_with(&self, diet: DietaryConstraint) -> Vec<&Supplement> {
        self.iter().filter(|supplement| supplement.suits(diet)).collect()
    }

    /// Supplements suitable for vegans, in id order
    #[must_use]
    pub fn vegan_compatible(&self) -> Vec<&Supplement> {
        self.compatible_with(DietaryConstraint::Vegan)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn supplement(id: &str, vegetarian: bool, vegan: bool) -> Supplement {
        Supplement {
            id: SupplementId::new(id),
            name: id.to_owned(),
            standard_dose: "1 capsule".to_owned(),
            vegetarian_dose: vegetarian.then(|| "1 capsule".to_owned()),
            vegan,
            description: String::new(),
            categories: vec!["cardio".to_owned()],
            safety: None,
        }
    }

    fn catalog() -> SupplementCatalog {
        SupplementCatalog::from_document(SupplementDocument {
            version: "test".to_owned(),
            supplements: vec![
                supplement("omega3", false, false),
                supplement("omega3_vegan", true, true),
                supplement("whey_protein", true, false),
            ],
        })
    }

    #[test]
    fn test_lookup_and_order() {
        let catalog = catalog();
        assert_eq!(catalog.len(), 3);
        assert!(catalog.contains("omega3"));
        assert!(catalog.get("omega9").is_none());
        let ids: Vec<_> = catalog.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["omega3", "omega3_vegan", "whey_protein"]);
    }

    #[test]
    fn test_dietary_filters() {
        let catalog = catalog();
        let vegan: Vec<_> = catalog
            .vegan_compatible()
            .into_iter()
            .map(|s| s.id.as_str())
            .collect();
        assert_eq!(vegan, vec!["omega3_vegan"]);
        assert_eq!(
            catalog.compatible_with(DietaryConstraint::Vegetarian).len(),
            2
        );
        assert_eq!(catalog.by_category("CARDIO").len(), 3);
    }
}
