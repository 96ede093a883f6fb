// ABOUTME: Resolves a mapping entry to the supplement and dose suited to a dietary constraint
// ABOUTME: Applies the vegetarian alternative and the catalog diet flags before aggregation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriLab

use crate::catalog::SupplementCatalog;
use crate::models::{DietaryConstraint, RecommendationEntry, SupplementId};

/// A mapping entry after dietary resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedEntry<'a> {
    /// Supplement that will be recommended
    pub supplement_id: &'a SupplementId,
    /// Priority carried into aggregation
    pub priority: u8,
    /// Dose shown to the user
    pub dose: &'a str,
}

/// Resolve `entry` for `diet`
///
/// Omnivores always get the entry as written. Vegetarian and vegan users get
/// the vegetarian dose when the entry has one, otherwise the entry's
/// vegetarian alternative. The resolved supplement must also suit the diet
/// according to the catalog.
///
/// Returns `None` when nothing suitable remains.
#[must_use]
pub fn resolve_entry<'a>(
    entry: &'a RecommendationEntry,
    diet: DietaryConstraint,
    catalog: &SupplementCatalog,
) -> Option<ResolvedEntry<'a>> {
    let resolved = match diet {
        DietaryConstraint::Omnivore => {
            return Some(ResolvedEntry {
                supplement_id: &entry.supplement_id,
                priority: entry.priority,
                dose: &entry.dose_standard,
            });
        }
        DietaryConstraint::Vegetarian | DietaryConstraint::Vegan => vegetarian_form(entry)?,
    };

    if !catalog
        .get(resolved.supplement_id.as_str())
        .is_some_and(|supplement| supplement.suits(diet))
    {
        return None;
    }

    Some(resolved)
}

fn vegetarian_form(entry: &RecommendationEntry) -> Option<ResolvedEntry<'_>> {
    if let Some(dose) = entry.dose_vegetarian.as_deref() {
        return Some(ResolvedEntry {
            supplement_id: &entry.supplement_id,
            priority: entry.priority,
            dose,
        });
    }
    entry
        .vegetarian_alternative
        .as_ref()
        .map(|alternative| ResolvedEntry {
            supplement_id: &alternative.supplement_id,
            priority: alternative.priority,
            dose: &alternative.dose,
        })
}
