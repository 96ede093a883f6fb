// ABOUTME: Reference data error types for catalog loading and integrity validation
// ABOUTME: Collects dangling references and out-of-range values and converts them to AppError
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriLab

//! # Catalog Error Types
//!
//! - `IntegrityViolation` - one broken rule found while validating reference data
//! - `CatalogError` - load failure (parse, I/O, or a batch of violations)
//! - Conversion to `AppError` for uniform reporting

use super::{AppError, ErrorCode};
use serde::Serialize;
use serde_json::{json, Value};
use std::io;
use thiserror::Error;

/// A single integrity rule broken by the reference data
#[derive(Debug, Clone, PartialEq, Serialize, Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[non_exhaustive]
pub enum IntegrityViolation {
    /// Mapping entry points at a supplement missing from the catalog
    #[error("{table} table key '{key}' references unknown supplement '{supplement_id}'")]
    DanglingSupplement {
        /// Table kind (symptom, goal, lifestyle)
        table: String,
        /// Mapping key holding the entry
        key: String,
        /// Unresolved supplement id
        supplement_id: String,
    },
    /// Vegetarian alternative points at a supplement missing from the catalog
    #[error(
        "{table} table key '{key}' entry '{supplement_id}' has unknown alternative '{alternative_id}'"
    )]
    DanglingAlternative {
        /// Table kind
        table: String,
        /// Mapping key holding the entry
        key: String,
        /// Supplement carrying the alternative
        supplement_id: String,
        /// Unresolved alternative id
        alternative_id: String,
    },
    /// Vegetarian alternative is itself unsuitable for vegetarians
    #[error("alternative '{alternative_id}' under {table} key '{key}' is not vegetarian")]
    NonVegetarianAlternative {
        /// Table kind
        table: String,
        /// Mapping key holding the entry
        key: String,
        /// Offending alternative id
        alternative_id: String,
    },
    /// Entry gives a vegetarian dose for a supplement the catalog marks non-vegetarian
    #[error(
        "{table} table key '{key}' gives a vegetarian dose for '{supplement_id}', which is not vegetarian"
    )]
    VegetarianDoseOnNonVegetarian {
        /// Table kind
        table: String,
        /// Mapping key holding the entry
        key: String,
        /// Offending supplement id
        supplement_id: String,
    },
    /// Two entries under one key resolve to the same supplement
    #[error("{table} table key '{key}' resolves to '{supplement_id}' more than once for {diet} users")]
    DuplicateKeyEntry {
        /// Table kind
        table: String,
        /// Mapping key holding the entries
        key: String,
        /// Repeated supplement id
        supplement_id: String,
        /// Dietary constraint under which the ids collide
        diet: String,
    },
    /// Adjustment factor names a supplement missing from the catalog
    #[error("{table} factor references unknown supplement '{supplement_id}'")]
    DanglingFactor {
        /// Factor table (e.g. "age 46-60", "gender femme")
        table: String,
        /// Unresolved supplement id
        supplement_id: String,
    },
    /// Priority factor keyed on a mapping key that does not exist
    #[error("priority factor for unknown {table} key '{key}'")]
    UnknownPriorityFactorKey {
        /// Table kind
        table: String,
        /// Unknown mapping key
        key: String,
    },
    /// Authored priority outside 1-10
    #[error("{table} table key '{key}' gives '{supplement_id}' priority {priority} outside 1-10")]
    PriorityOutOfRange {
        /// Table kind
        table: String,
        /// Mapping key holding the entry
        key: String,
        /// Supplement id on the entry
        supplement_id: String,
        /// Offending priority
        priority: u8,
    },
    /// Symptom category priority outside 1-10
    #[error("symptom category '{category_id}' has priority {priority} outside 1-10")]
    CategoryPriorityOutOfRange {
        /// Category id
        category_id: String,
        /// Offending priority
        priority: u8,
    },
    /// Multiplier that is zero, negative, or not finite
    #[error("{table} factor for '{supplement_id}' is {value}, expected a positive finite number")]
    InvalidMultiplier {
        /// Factor table
        table: String,
        /// Supplement or key the multiplier applies to
        supplement_id: String,
        /// Offending value
        value: f64,
    },
    /// Supplement id declared twice
    #[error("supplement '{supplement_id}' is declared more than once")]
    DuplicateSupplement {
        /// Repeated id
        supplement_id: String,
    },
    /// Symptom category id declared twice
    #[error("symptom category '{category_id}' is declared more than once")]
    DuplicateSymptomCategory {
        /// Repeated id
        category_id: String,
    },
    /// Intensity thresholds are not strictly increasing
    #[error("intensity thresholds must satisfy mild < moderate < severe")]
    UnorderedIntensityThresholds,
}

/// Failure to load or validate reference data
#[derive(Debug, Error)]
pub enum CatalogError {
    /// One or more integrity rules were broken
    #[error("reference data failed validation with {} violation(s)", .0.len())]
    Integrity(Vec<IntegrityViolation>),

    /// A data document was not valid JSON for its schema
    #[error("failed to parse {file}: {source}")]
    Parse {
        /// Document name
        file: String,
        /// Underlying parse error
        #[source]
        source: serde_json::Error,
    },

    /// A data document could not be read
    #[error("failed to read {path}: {source}")]
    Io {
        /// Path that failed
        path: String,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },
}

impl CatalogError {
    /// Violations carried by an integrity failure, empty for other variants
    #[must_use]
    pub fn violations(&self) -> &[IntegrityViolation] {
        match self {
            Self::Integrity(violations) => violations,
            Self::Parse { .. } | Self::Io { .. } => &[],
        }
    }
}

impl From<CatalogError> for AppError {
    fn from(error: CatalogError) -> Self {
        match error {
            CatalogError::Integrity(violations) => {
                let summary = violations
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join("; ");
                let details = json!({
                    "violations": serde_json::to_value(&violations).unwrap_or(Value::Null),
                });
                Self::data_integrity(format!(
                    "{} violation(s): {summary}",
                    violations.len()
                ))
                .with_details(details)
            }
            CatalogError::Parse { file, source } => {
                Self::new(ErrorCode::SerializationError, format!("{file}: {source}"))
                    .with_resource_id(file)
                    .with_source(source)
            }
            CatalogError::Io { path, source } => {
                Self::new(ErrorCode::StorageError, format!("{path}: {source}"))
                    .with_resource_id(path)
                    .with_source(source)
            }
        }
    }
}
