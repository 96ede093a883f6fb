// ABOUTME: Integration tests for recommendation engine configuration
// ABOUTME: Covers defaults, environment overrides, validation rules, and error code mapping
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriLab
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{bundled_data, find};
use nutrilab::config::{ConfigError, IntelligenceConfig, RecommendationEngineConfig};
use nutrilab::constants::{env_config, limits};
use nutrilab::errors::{AppError, ErrorCode};
use nutrilab::intelligence::{RecommendationEngineTrait, SupplementRecommendationEngine};
use nutrilab::models::UserProfile;
use serial_test::serial;
use std::env;

const ALL_VARS: [&str; 5] = [
    env_config::RECOMMENDATION_TOP_N,
    env_config::RECOMMENDATION_MAX_TOP_N,
    env_config::RECOMMENDATION_DEFAULT_MULTIPLIER,
    env_config::RECOMMENDATION_MAX_PRIORITY_FACTOR,
    env_config::RECOMMENDATION_INCLUDE_DETAILED,
];

/// Clears every override before and after the wrapped test body
struct EnvGuard;

impl EnvGuard {
    fn new() -> Self {
        clear_vars();
        Self
    }

    fn set(&self, name: &str, value: &str) -> &Self {
        env::set_var(name, value);
        self
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        clear_vars();
    }
}

fn clear_vars() {
    for name in ALL_VARS {
        env::remove_var(name);
    }
}

// ============================================================================
// Default Configuration Tests
// ============================================================================

#[test]
#[serial]
fn test_load_without_overrides_matches_default() {
    let _guard = EnvGuard::new();
    let config = IntelligenceConfig::load().unwrap();
    assert_eq!(config, IntelligenceConfig::default());

    let engine = &config.recommendation_engine;
    assert_eq!(engine.limits.default_top_n, limits::DEFAULT_TOP_N);
    assert_eq!(engine.limits.max_top_n, limits::MAX_TOP_N);
    assert!(engine.filters.include_detailed);
}

#[test]
fn test_default_config_validates() {
    assert!(IntelligenceConfig::default().validate().is_ok());
}

// ============================================================================
// Environment Override Tests
// ============================================================================

#[test]
#[serial]
fn test_top_n_override_is_honoured() {
    let guard = EnvGuard::new();
    guard.set(env_config::RECOMMENDATION_TOP_N, "3");

    let config = IntelligenceConfig::load().unwrap();
    assert_eq!(config.recommendation_engine.limits.default_top_n, 3);

    let engine =
        SupplementRecommendationEngine::with_config(bundled_data(), config.recommendation_engine);
    let profile = UserProfile {
        symptoms: vec!["stress".to_owned(), "fatigue".to_owned()],
        ..UserProfile::new()
    };
    assert_eq!(engine.score(&profile, None).unwrap().len(), 3);
}

#[test]
#[serial]
fn test_override_values_are_trimmed() {
    let guard = EnvGuard::new();
    guard
        .set(env_config::RECOMMENDATION_TOP_N, " 4 ")
        .set(env_config::RECOMMENDATION_MAX_PRIORITY_FACTOR, "1.25");

    let config = IntelligenceConfig::load().unwrap();
    assert_eq!(config.recommendation_engine.limits.default_top_n, 4);
    assert!((config.recommendation_engine.weights.max_priority_factor - 1.25).abs() < f64::EPSILON);
}

#[test]
#[serial]
fn test_invalid_override_is_parse_error() {
    let guard = EnvGuard::new();
    guard.set(env_config::RECOMMENDATION_TOP_N, "many");

    let error = IntelligenceConfig::load().unwrap_err();
    assert!(matches!(error, ConfigError::Parse(ref message) if message.contains("NUTRILAB_RECOMMENDATION_TOP_N")));
    assert_eq!(AppError::from(error).code, ErrorCode::ConfigInvalid);
}

#[test]
#[serial]
fn test_include_detailed_override_drops_detailed_entries() {
    let guard = EnvGuard::new();
    guard.set(env_config::RECOMMENDATION_INCLUDE_DETAILED, "false");

    let config = IntelligenceConfig::load().unwrap();
    assert!(!config.recommendation_engine.filters.include_detailed);

    let engine =
        SupplementRecommendationEngine::with_config(bundled_data(), config.recommendation_engine);
    let profile = UserProfile {
        symptoms: vec!["stress".to_owned()],
        ..UserProfile::new()
    };
    let results = engine.score(&profile, Some(limits::MAX_TOP_N)).unwrap();
    assert!(find(&results, "holy_basil").is_none());
    assert!(find(&results, "ashwagandha").is_some());
}

#[test]
#[serial]
fn test_override_breaking_validation_is_rejected() {
    let guard = EnvGuard::new();
    guard
        .set(env_config::RECOMMENDATION_TOP_N, "30")
        .set(env_config::RECOMMENDATION_MAX_TOP_N, "10");

    let error = IntelligenceConfig::load().unwrap_err();
    assert!(matches!(error, ConfigError::InvalidRange(_)));
}

// ============================================================================
// Validation Rule Tests
// ============================================================================

fn config_with(edit: impl FnOnce(&mut RecommendationEngineConfig)) -> IntelligenceConfig {
    let mut config = IntelligenceConfig::default();
    edit(&mut config.recommendation_engine);
    config
}

#[test]
fn test_zero_default_top_n_rejected() {
    let config = config_with(|engine| engine.limits.default_top_n = 0);
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValueOutOfRange(_))
    ));
}

#[test]
fn test_non_positive_multiplier_rejected() {
    for value in [0.0, -1.0, f64::NAN, f64::INFINITY] {
        let config = config_with(|engine| engine.weights.default_multiplier = value);
        assert!(config.validate().is_err(), "{value} accepted");
    }
}

#[test]
fn test_priority_clamp_below_one_rejected() {
    let config = config_with(|engine| engine.weights.max_priority_factor = 0.9);
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValueOutOfRange(_))
    ));

    let config = config_with(|engine| engine.weights.max_priority_factor = 1.0);
    assert!(config.validate().is_ok());
}

// ============================================================================
// Error Conversion Tests
// ============================================================================

#[test]
fn test_config_errors_map_to_config_invalid() {
    let cases = [
        ConfigError::InvalidRange("top_n"),
        ConfigError::ValueOutOfRange("weights"),
        ConfigError::Parse("bad".to_owned()),
    ];
    for error in cases {
        let message = error.to_string();
        let app_error = AppError::from(error);
        assert_eq!(app_error.code, ErrorCode::ConfigInvalid);
        assert_eq!(app_error.message, message);
        assert!(app_error.source.is_some());
    }
}
