// ABOUTME: Static reference data for supplement recommendations
// ABOUTME: Supplement catalog, symptom registry, mapping tables, adjustment factors, and loading
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriLab

//! # Reference Data
//!
//! Everything the scorer reads is loaded once, validated against the
//! catalog, and then treated as immutable:
//!
//! - `supplements` - supplement definitions keyed by id
//! - `symptoms` - symptom categories for search and quiz navigation
//! - `tables` - symptom, goal, and lifestyle mapping tables
//! - `adjustments` - age, gender, and per-key priority factors
//! - `loader` - bundled or directory-based loading into [`ReferenceData`]
//!
//! Loading fails fast: a mapping entry, alternative, or factor that names an
//! unknown supplement rejects the whole data set.

/// Age, gender, and priority factor tables
pub mod adjustments;
/// Bundled and directory-based loading
pub mod loader;
/// Supplement catalog
pub mod supplements;
/// Symptom category registry
pub mod symptoms;
/// Unified mapping tables
pub mod tables;
/// Referential integrity checks
pub mod validation;

pub use adjustments::AdjustmentFactors;
pub use loader::{DataSources, DataSummary, ReferenceData};
pub use supplements::{SupplementCatalog, SupplementDocument};
pub use symptoms::{SymptomDocument, SymptomRegistry};
pub use tables::{MappingDocument, MappingTables};
