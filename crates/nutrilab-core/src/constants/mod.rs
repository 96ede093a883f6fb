// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Priority bounds, factor defaults, recommendation limits, and environment variable names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriLab

//! Constants module
//!
//! Constants are grouped into small domain modules rather than a single flat list.

/// Authoring bounds for mapping priorities
pub mod priority {
    /// Lowest priority an entry may carry
    pub const MIN_PRIORITY: u8 = 1;
    /// Highest priority an entry may carry
    pub const MAX_PRIORITY: u8 = 10;

    /// Whether `priority` lies within the authoring bounds
    #[must_use]
    pub const fn is_valid(priority: u8) -> bool {
        priority >= MIN_PRIORITY && priority <= MAX_PRIORITY
    }
}

/// Adjustment factor defaults
pub mod factors {
    /// Multiplier applied when a supplement is absent from a factor table
    pub const DEFAULT_MULTIPLIER: f64 = 1.0;
    /// Upper clamp on a per-key priority factor
    pub const MAX_PRIORITY_FACTOR: f64 = 2.0;
}

/// Recommendation list limits
pub mod limits {
    /// Number of recommendations returned when the caller gives no limit
    pub const DEFAULT_TOP_N: usize = 8;
    /// Hard ceiling on the number of recommendations per profile
    pub const MAX_TOP_N: usize = 25;
}

/// Symptom intensity thresholds on a 0-10 self-report scale
pub mod intensity {
    /// Lowest score considered a mild symptom
    pub const MILD: u8 = 3;
    /// Lowest score considered a moderate symptom
    pub const MODERATE: u8 = 6;
    /// Lowest score considered a severe symptom
    pub const SEVERE: u8 = 8;
}

/// Age bracket boundaries (inclusive lower bounds)
pub mod age {
    /// Youngest age accepted by the quiz
    pub const MIN_ADULT_AGE: u8 = 18;
    /// First age of the 31-45 bracket
    pub const BRACKET_31_45: u8 = 31;
    /// First age of the 46-60 bracket
    pub const BRACKET_46_60: u8 = 46;
    /// First age of the 60+ bracket
    pub const BRACKET_60_PLUS: u8 = 61;
}

/// Environment variable names
pub mod env_config {
    /// Default number of recommendations
    pub const RECOMMENDATION_TOP_N: &str = "NUTRILAB_RECOMMENDATION_TOP_N";
    /// Ceiling on the number of recommendations
    pub const RECOMMENDATION_MAX_TOP_N: &str = "NUTRILAB_RECOMMENDATION_MAX_TOP_N";
    /// Whether entries from the detailed tables are scored
    pub const RECOMMENDATION_INCLUDE_DETAILED: &str = "NUTRILAB_RECOMMENDATION_INCLUDE_DETAILED";
    /// Multiplier used for absent adjustment factors
    pub const RECOMMENDATION_DEFAULT_MULTIPLIER: &str =
        "NUTRILAB_RECOMMENDATION_DEFAULT_MULTIPLIER";
    /// Clamp on per-key priority factors
    pub const RECOMMENDATION_MAX_PRIORITY_FACTOR: &str =
        "NUTRILAB_RECOMMENDATION_MAX_PRIORITY_FACTOR";
    /// Directory overriding the bundled reference data
    pub const DATA_DIR: &str = "NUTRILAB_DATA_DIR";
}

/// Service identifiers used in structured logs
pub mod service_names {
    /// CLI service name
    pub const NUTRILAB_CLI: &str = "nutrilab-cli";
    /// Library service name
    pub const NUTRILAB: &str = "nutrilab";
}

/// File names inside a reference data directory
pub mod data_files {
    /// Supplement catalog document
    pub const SUPPLEMENTS: &str = "supplements.json";
    /// Symptom registry document
    pub const SYMPTOMS: &str = "symptoms.json";
    /// Mapping tables document
    pub const MAPPINGS: &str = "mappings.json";
    /// Adjustment factors document
    pub const ADJUSTMENTS: &str = "adjustments.json";
}
