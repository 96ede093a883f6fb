// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides logging, engine construction, and temporary data directory helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriLab
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `nutrilab`
//!
//! This module provides common setup functions to reduce duplication
//! across integration tests.

use nutrilab::catalog::{DataSources, ReferenceData};
use nutrilab::config::RecommendationEngineConfig;
use nutrilab::constants::data_files;
use nutrilab::intelligence::SupplementRecommendationEngine;
use nutrilab::models::ScoredRecommendation;
use serde_json::Value;
use std::env;
use std::fs;
use std::sync::{Arc, Once};
use tempfile::TempDir;
use tracing::Level;
use tracing_subscriber::fmt;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // TEST_LOG controls the level, quiet by default
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        let _ = fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Bundled reference data
pub fn bundled_data() -> Arc<ReferenceData> {
    init_test_logging();
    ReferenceData::bundled().expect("bundled data must validate")
}

/// Engine over the bundled data with default configuration, independent of the environment
pub fn default_engine() -> SupplementRecommendationEngine {
    SupplementRecommendationEngine::with_config(
        bundled_data(),
        RecommendationEngineConfig::default(),
    )
}

/// Find a recommendation by supplement id
pub fn find<'a>(results: &'a [ScoredRecommendation], id: &str) -> Option<&'a ScoredRecommendation> {
    results.iter().find(|rec| rec.supplement_id.as_str() == id)
}

/// Bundled document parsed as loose JSON for editing
pub fn bundled_json(file: &str) -> Value {
    let sources = DataSources::bundled();
    let text = match file {
        data_files::SUPPLEMENTS => sources.supplements,
        data_files::SYMPTOMS => sources.symptoms,
        data_files::MAPPINGS => sources.mappings,
        data_files::ADJUSTMENTS => sources.adjustments,
        other => panic!("unknown data file {other}"),
    };
    serde_json::from_str(&text).unwrap()
}

/// Temporary data directory holding `value` as `file`; other files fall back to bundled
pub fn data_dir_with(file: &str, value: &Value) -> TempDir {
    init_test_logging();
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(file), serde_json::to_string_pretty(value).unwrap()).unwrap();
    dir
}
