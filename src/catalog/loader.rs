// ABOUTME: Reference data loading from bundled JSON or an override directory
// ABOUTME: Parses, validates, and freezes the catalog, symptom registry, tables, and factors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriLab

use super::adjustments::AdjustmentFactors;
use super::supplements::{SupplementCatalog, SupplementDocument};
use super::symptoms::{SymptomDocument, SymptomRegistry};
use super::tables::{MappingDocument, MappingTables};
use super::validation::{validate, DocumentSet};
use crate::constants::data_files;
use crate::errors::{AppResult, CatalogError};
use crate::models::TableKind;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::borrow::Cow;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use std::sync::{Arc, OnceLock};
use tracing::{debug, info, warn};

const BUNDLED_SUPPLEMENTS_JSON: &str = include_str!("data/supplements.json");
const BUNDLED_SYMPTOMS_JSON: &str = include_str!("data/symptoms.json");
const BUNDLED_MAPPINGS_JSON: &str = include_str!("data/mappings.json");
const BUNDLED_ADJUSTMENTS_JSON: &str = include_str!("data/adjustments.json");

/// Parsed and validated bundled data, shared process-wide
static BUNDLED: OnceLock<Arc<ReferenceData>> = OnceLock::new();

/// Raw JSON text of the four reference documents
#[derive(Debug, Clone)]
pub struct DataSources<'a> {
    /// `supplements.json`
    pub supplements: Cow<'a, str>,
    /// `symptoms.json`
    pub symptoms: Cow<'a, str>,
    /// `mappings.json`
    pub mappings: Cow<'a, str>,
    /// `adjustments.json`
    pub adjustments: Cow<'a, str>,
}

impl DataSources<'static> {
    /// Documents compiled into the binary
    #[must_use]
    pub const fn bundled() -> Self {
        Self {
            supplements: Cow::Borrowed(BUNDLED_SUPPLEMENTS_JSON),
            symptoms: Cow::Borrowed(BUNDLED_SYMPTOMS_JSON),
            mappings: Cow::Borrowed(BUNDLED_MAPPINGS_JSON),
            adjustments: Cow::Borrowed(BUNDLED_ADJUSTMENTS_JSON),
        }
    }

    /// Documents from `dir`, falling back to the bundled copy for any file not present
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Io` if a present file cannot be read or `dir` is not a directory
    pub fn from_dir(dir: &Path) -> Result<Self, CatalogError> {
        if !dir.is_dir() {
            return Err(CatalogError::Io {
                path: dir.display().to_string(),
                source: ErrorKind::NotFound.into(),
            });
        }
        let bundled = Self::bundled();
        Ok(Self {
            supplements: read_or(dir, data_files::SUPPLEMENTS, bundled.supplements)?,
            symptoms: read_or(dir, data_files::SYMPTOMS, bundled.symptoms)?,
            mappings: read_or(dir, data_files::MAPPINGS, bundled.mappings)?,
            adjustments: read_or(dir, data_files::ADJUSTMENTS, bundled.adjustments)?,
        })
    }
}

fn read_or(
    dir: &Path,
    file: &str,
    fallback: Cow<'static, str>,
) -> Result<Cow<'static, str>, CatalogError> {
    let path = dir.join(file);
    match fs::read_to_string(&path) {
        Ok(text) => {
            debug!(path = %path.display(), "Loaded reference document override");
            Ok(Cow::Owned(text))
        }
        Err(error) if error.kind() == ErrorKind::NotFound => Ok(fallback),
        Err(source) => Err(CatalogError::Io {
            path: path.display().to_string(),
            source,
        }),
    }
}

fn parse<T: DeserializeOwned>(file: &str, text: &str) -> Result<T, CatalogError> {
    serde_json::from_str(text).map_err(|source| CatalogError::Parse {
        file: file.to_owned(),
        source,
    })
}

/// Counts describing loaded reference data
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DataSummary {
    /// Data version
    pub version: String,
    /// Supplements in the catalog
    pub supplements: usize,
    /// Symptom categories in the registry
    pub symptom_categories: usize,
    /// Keys in the symptom table
    pub symptom_keys: usize,
    /// Keys in the goal table
    pub goal_keys: usize,
    /// Keys in the lifestyle table
    pub lifestyle_keys: usize,
    /// Entries across all tables
    pub entries: usize,
}

/// Frozen, validated reference data
///
/// Nothing here is mutated after construction, so a single instance can be
/// shared across threads behind an `Arc`.
#[derive(Debug, Clone)]
pub struct ReferenceData {
    catalog: SupplementCatalog,
    symptoms: SymptomRegistry,
    tables: MappingTables,
    adjustments: AdjustmentFactors,
}

impl ReferenceData {
    /// Bundled reference data, parsed and validated once per process
    ///
    /// # Errors
    ///
    /// Returns an error if the bundled documents fail to parse or validate
    pub fn bundled() -> AppResult<Arc<Self>> {
        if let Some(data) = BUNDLED.get() {
            return Ok(Arc::clone(data));
        }
        let data = Arc::new(Self::from_sources(&DataSources::bundled())?);
        Ok(Arc::clone(BUNDLED.get_or_init(|| data)))
    }

    /// Load from an override directory
    ///
    /// # Errors
    ///
    /// Returns an error if a document cannot be read, parsed, or validated
    pub fn load_dir(dir: impl AsRef<Path>) -> AppResult<Self> {
        let dir = dir.as_ref();
        info!(dir = %dir.display(), "Loading reference data");
        let sources = DataSources::from_dir(dir)?;
        Ok(Self::from_sources(&sources)?)
    }

    /// Parse and validate raw documents
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Parse` for malformed JSON and `CatalogError::Integrity`
    /// listing every broken reference
    pub fn from_sources(sources: &DataSources<'_>) -> Result<Self, CatalogError> {
        let supplements: SupplementDocument = parse(data_files::SUPPLEMENTS, &sources.supplements)?;
        let symptoms: SymptomDocument = parse(data_files::SYMPTOMS, &sources.symptoms)?;
        let mappings: MappingDocument = parse(data_files::MAPPINGS, &sources.mappings)?;
        let adjustments: AdjustmentFactors =
            parse(data_files::ADJUSTMENTS, &sources.adjustments)?;
        Self::from_documents(supplements, symptoms, mappings, adjustments)
    }

    /// Validate parsed documents and freeze them
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Integrity` listing every broken reference
    pub fn from_documents(
        supplements: SupplementDocument,
        symptoms: SymptomDocument,
        mappings: MappingDocument,
        adjustments: AdjustmentFactors,
    ) -> Result<Self, CatalogError> {
        let violations = validate(DocumentSet {
            supplements: &supplements,
            symptoms: &symptoms,
            mappings: &mappings,
            adjustments: &adjustments,
        });
        if !violations.is_empty() {
            for violation in &violations {
                warn!(%violation, "Reference data integrity violation");
            }
            return Err(CatalogError::Integrity(violations));
        }
        if supplements.version != mappings.version {
            warn!(
                catalog_version = %supplements.version,
                mappings_version = %mappings.version,
                "Catalog and mapping table versions differ"
            );
        }

        let data = Self {
            catalog: SupplementCatalog::from_document(supplements),
            symptoms: SymptomRegistry::from_document(symptoms),
            tables: MappingTables::from_document(mappings),
            adjustments,
        };
        let summary = data.summary();
        info!(
            version = %summary.version,
            supplements = summary.supplements,
            symptom_categories = summary.symptom_categories,
            entries = summary.entries,
            "Reference data loaded"
        );
        Ok(data)
    }

    /// Supplement catalog
    #[must_use]
    pub const fn catalog(&self) -> &SupplementCatalog {
        &self.catalog
    }

    /// Symptom registry
    #[must_use]
    pub const fn symptoms(&self) -> &SymptomRegistry {
        &self.symptoms
    }

    /// Mapping tables
    #[must_use]
    pub const fn tables(&self) -> &MappingTables {
        &self.tables
    }

    /// Adjustment factors
    #[must_use]
    pub const fn adjustments(&self) -> &AdjustmentFactors {
        &self.adjustments
    }

    /// Data version, taken from the mapping tables
    #[must_use]
    pub fn version(&self) -> &str {
        self.tables.version()
    }

    /// Counts describing the loaded data
    #[must_use]
    pub fn summary(&self) -> DataSummary {
        DataSummary {
            version: self.version().to_owned(),
            supplements: self.catalog.len(),
            symptom_categories: self.symptoms.len(),
            symptom_keys: self.tables.key_count(TableKind::Symptom),
            goal_keys: self.tables.key_count(TableKind::Goal),
            lifestyle_keys: self.tables.key_count(TableKind::Lifestyle),
            entries: self.tables.entry_count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_data_is_valid() {
        let data = ReferenceData::bundled().unwrap();
        let summary = data.summary();
        assert_eq!(summary.symptom_keys, 36);
        assert_eq!(summary.goal_keys, 23);
        assert_eq!(summary.lifestyle_keys, 13);
        assert_eq!(summary.symptom_categories, 36);
        assert!(summary.supplements > 60);
    }

    #[test]
    fn test_bundled_is_shared() {
        let first = ReferenceData::bundled().unwrap();
        let second = ReferenceData::bundled().unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_parse_error_names_file() {
        let sources = DataSources {
            mappings: Cow::Borrowed("{ not json"),
            ..DataSources::bundled()
        };
        let error = ReferenceData::from_sources(&sources).unwrap_err();
        assert!(matches!(error, CatalogError::Parse { ref file, .. } if file == "mappings.json"));
    }
}
