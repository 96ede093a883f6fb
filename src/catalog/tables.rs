// ABOUTME: Unified symptom, goal, and lifestyle mapping tables with a detailed-entry tag
// ABOUTME: Keyed lookup that degrades to an empty slice for unknown keys
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriLab

use crate::models::{RecommendationEntry, TableKind};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Entries of one table, keyed by symptom, goal, or lifestyle id
pub type KeyedEntries = BTreeMap<String, Vec<RecommendationEntry>>;

/// On-disk shape of `mappings.json`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MappingDocument {
    /// Data version
    pub version: String,
    /// Symptom table
    #[serde(default)]
    pub symptom: KeyedEntries,
    /// Goal table
    #[serde(default)]
    pub goal: KeyedEntries,
    /// Lifestyle table
    #[serde(default)]
    pub lifestyle: KeyedEntries,
}

impl MappingDocument {
    /// Table for one kind
    #[must_use]
    pub const fn table(&self, kind: TableKind) -> &KeyedEntries {
        match kind {
            TableKind::Symptom => &self.symptom,
            TableKind::Goal => &self.goal,
            TableKind::Lifestyle => &self.lifestyle,
        }
    }

    /// Every entry with its table kind and key
    pub fn entries(&self) -> impl Iterator<Item = (TableKind, &str, &RecommendationEntry)> {
        TableKind::ALL.into_iter().flat_map(move |kind| {
            self.table(kind).iter().flat_map(move |(key, entries)| {
                entries.iter().map(move |entry| (kind, key.as_str(), entry))
            })
        })
    }
}

/// Read-only mapping tables
#[derive(Debug, Clone, Default)]
pub struct MappingTables {
    document: MappingDocument,
}

impl MappingTables {
    /// Wrap a validated document
    #[must_use]
    pub const fn from_document(document: MappingDocument) -> Self {
        Self { document }
    }

    /// Data version of the tables
    #[must_use]
    pub fn version(&self) -> &str {
        &self.document.version
    }

    /// Entries under `key`, empty when the key is unknown
    #[must_use]
    pub fn entries(&self, kind: TableKind, key: &str) -> &[RecommendationEntry] {
        self.document
            .table(kind)
            .get(key)
            .map_or(&[], Vec::as_slice)
    }

    /// Whether `key` exists in the table for `kind`
    #[must_use]
    pub fn contains_key(&self, kind: TableKind, key: &str) -> bool {
        self.document.table(kind).contains_key(key)
    }

    /// Known keys for `kind`, sorted
    pub fn keys(&self, kind: TableKind) -> impl Iterator<Item = &str> {
        self.document.table(kind).keys().map(String::as_str)
    }

    /// Number of keys for `kind`
    #[must_use]
    pub fn key_count(&self, kind: TableKind) -> usize {
        self.document.table(kind).len()
    }

    /// Total number of entries across all tables
    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.document.entries().count()
    }

    /// Every entry with its table kind and key
    pub fn iter(&self) -> impl Iterator<Item = (TableKind, &str, &RecommendationEntry)> {
        self.document.entries()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tables() -> MappingTables {
        let mut document = MappingDocument {
            version: "test".to_owned(),
            ..MappingDocument::default()
        };
        document.symptom.insert(
            "stress".to_owned(),
            vec![
                RecommendationEntry::new("ashwagandha", 10, "600mg", Some("600mg".to_owned())),
                RecommendationEntry::new("holy_basil", 7, "300mg", Some("300mg".to_owned()))
                    .mark_detailed(),
            ],
        );
        document.goal.insert("energy_boost".to_owned(), Vec::new());
        MappingTables::from_document(document)
    }

    #[test]
    fn test_unknown_key_is_empty() {
        let tables = tables();
        assert!(tables.entries(TableKind::Symptom, "hiccups").is_empty());
        assert!(tables.entries(TableKind::Goal, "stress").is_empty());
        assert_eq!(tables.entries(TableKind::Symptom, "stress").len(), 2);
    }

    #[test]
    fn test_keys_and_counts() {
        let tables = tables();
        assert_eq!(tables.keys(TableKind::Symptom).collect::<Vec<_>>(), vec!["stress"]);
        assert_eq!(tables.key_count(TableKind::Goal), 1);
        assert_eq!(tables.entry_count(), 2);
        assert!(tables.iter().any(|(_, _, entry)| entry.detailed));
    }
}
