// ABOUTME: Supplement recommendation scorer turning a user profile into a ranked list
// ABOUTME: Resolves doses per diet, aggregates by supplement, applies factors, sorts, and truncates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriLab

//! Supplement recommendation engine
//!
//! Scoring is a pure function of the reference data, the engine
//! configuration, and the profile. It performs no I/O and holds no mutable
//! state, so one engine can serve any number of threads.

use super::dose_resolver::{resolve_entry, ResolvedEntry};
use crate::catalog::ReferenceData;
use crate::config::intelligence::{IntelligenceConfig, RecommendationEngineConfig};
use crate::constants::factors;
use crate::errors::{AppError, AppResult};
use crate::logging::AppLogger;
use crate::models::{
    AppliedFactors, RecommendationReason, ScoredRecommendation, SupplementId, TableKind,
    UserProfile,
};
use chrono::{DateTime, Utc};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, debug_span};
use uuid::Uuid;

/// Trait for producing supplement recommendations
pub trait RecommendationEngineTrait {
    /// Rank supplements for one profile
    ///
    /// `top_n` of `None` uses the configured default. Values above the
    /// configured maximum are clamped.
    ///
    /// # Errors
    ///
    /// Returns `invalid_input` when the effective limit is zero
    fn score(
        &self,
        profile: &UserProfile,
        top_n: Option<usize>,
    ) -> AppResult<Vec<ScoredRecommendation>>;

    /// Rank supplements for many profiles, preserving input order
    ///
    /// # Errors
    ///
    /// Returns the first error any profile produced
    fn score_many(
        &self,
        profiles: &[UserProfile],
        top_n: Option<usize>,
    ) -> AppResult<Vec<Vec<ScoredRecommendation>>>;

    /// Score one profile and wrap the result with an id, timestamp, and data version
    ///
    /// # Errors
    ///
    /// Returns `invalid_input` when the effective limit is zero
    fn report(&self, profile: UserProfile, top_n: Option<usize>) -> AppResult<RecommendationReport>;
}

/// Scored output for one profile, ready for display or storage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationReport {
    /// Report identifier
    pub id: Uuid,
    /// When the report was generated
    pub generated_at: DateTime<Utc>,
    /// Reference data version the scores were computed against
    pub data_version: String,
    /// Profile the report was computed for
    pub profile: UserProfile,
    /// Ranked recommendations, best first
    pub recommendations: Vec<ScoredRecommendation>,
}

impl RecommendationReport {
    /// Whether the report has no recommendations
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.recommendations.is_empty()
    }

    /// Recommended supplement ids in rank order
    #[must_use]
    pub fn supplement_ids(&self) -> Vec<&str> {
        self.recommendations
            .iter()
            .map(|rec| rec.supplement_id.as_str())
            .collect()
    }
}

/// One supplement's contributions before adjustment
struct Aggregate<'a> {
    supplement_id: &'a SupplementId,
    base_priority: u8,
    dose: &'a str,
    reasons: Vec<RecommendationReason>,
}

impl<'a> Aggregate<'a> {
    fn new(resolved: ResolvedEntry<'a>) -> Self {
        Self {
            supplement_id: resolved.supplement_id,
            base_priority: resolved.priority,
            dose: resolved.dose,
            reasons: Vec::new(),
        }
    }

    /// Keep the strongest priority; the first entry at that priority supplies the dose
    fn absorb(&mut self, resolved: ResolvedEntry<'a>) {
        if resolved.priority > self.base_priority {
            self.base_priority = resolved.priority;
            self.dose = resolved.dose;
        }
    }
}

/// Table-driven supplement scorer
#[derive(Debug, Clone)]
pub struct SupplementRecommendationEngine {
    data: Arc<ReferenceData>,
    config: RecommendationEngineConfig,
}

impl SupplementRecommendationEngine {
    /// Create an engine over the bundled data with the global configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the bundled data fails validation
    pub fn new() -> AppResult<Self> {
        let data = ReferenceData::bundled()?;
        Ok(Self::with_data(data))
    }

    /// Create an engine over `data` with the global configuration
    #[must_use]
    pub fn with_data(data: Arc<ReferenceData>) -> Self {
        let global_config = IntelligenceConfig::global();
        Self::with_config(data, global_config.recommendation_engine.clone())
    }

    /// Create with custom configuration
    #[must_use]
    pub const fn with_config(data: Arc<ReferenceData>, config: RecommendationEngineConfig) -> Self {
        Self { data, config }
    }

    /// Reference data the engine scores against
    #[must_use]
    pub fn data(&self) -> &ReferenceData {
        &self.data
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &RecommendationEngineConfig {
        &self.config
    }

    /// Resolve and group every selected entry by supplement
    fn aggregate<'a>(&'a self, profile: &'a UserProfile) -> Vec<Aggregate<'a>> {
        let tables = self.data.tables();
        let catalog = self.data.catalog();
        let include_detailed = self.config.filters.include_detailed;

        let mut seen: HashSet<(TableKind, &str)> = HashSet::new();
        let mut index: HashMap<&str, usize> = HashMap::new();
        let mut aggregates: Vec<Aggregate<'a>> = Vec::new();

        for (kind, key) in profile.selected_keys() {
            if !seen.insert((kind, key)) {
                continue;
            }
            let entries = tables.entries(kind, key);
            if entries.is_empty() {
                debug!(table = %kind, key, "Ignoring unknown key");
                continue;
            }

            for entry in entries {
                if entry.detailed && !include_detailed {
                    continue;
                }
                let Some(resolved) = resolve_entry(entry, profile.diet, catalog) else {
                    debug!(
                        table = %kind,
                        key,
                        supplement_id = %entry.supplement_id,
                        diet = %profile.diet,
                        "Entry dropped by dietary constraint"
                    );
                    continue;
                };

                let reason = RecommendationReason {
                    table: kind,
                    key: key.to_owned(),
                    priority: resolved.priority,
                };
                let slot = *index
                    .entry(resolved.supplement_id.as_str())
                    .or_insert_with(|| {
                        aggregates.push(Aggregate::new(resolved));
                        aggregates.len() - 1
                    });
                if let Some(aggregate) = aggregates.get_mut(slot) {
                    aggregate.absorb(resolved);
                    match aggregate
                        .reasons
                        .iter_mut()
                        .find(|r| r.table == kind && r.key == key)
                    {
                        Some(existing) => existing.priority = existing.priority.max(reason.priority),
                        None => aggregate.reasons.push(reason),
                    }
                }
            }
        }

        aggregates
    }

    /// Apply age, gender, and priority factors to one aggregate
    fn adjust(&self, profile: &UserProfile, aggregate: Aggregate<'_>) -> ScoredRecommendation {
        let adjustments = self.data.adjustments();
        let weights = &self.config.weights;
        let id = aggregate.supplement_id.as_str();

        let age = profile
            .age
            .and_then(|bracket| adjustments.age_factor(bracket, id))
            .unwrap_or(weights.default_multiplier);
        let gender = profile
            .gender
            .and_then(|gender| adjustments.gender_factor(gender, id))
            .unwrap_or(weights.default_multiplier);
        let priority = aggregate
            .reasons
            .iter()
            .filter_map(|reason| adjustments.priority_factor(reason.table, &reason.key))
            .max_by(f64::total_cmp)
            .map_or(factors::DEFAULT_MULTIPLIER, |factor| {
                factor.min(weights.max_priority_factor)
            });

        let applied = AppliedFactors {
            age,
            gender,
            priority,
        };
        let name = self
            .data
            .catalog()
            .get(id)
            .map_or_else(|| id.to_owned(), |supplement| supplement.name.clone());

        ScoredRecommendation {
            supplement_id: aggregate.supplement_id.clone(),
            name,
            final_score: f64::from(aggregate.base_priority) * applied.product(),
            base_priority: aggregate.base_priority,
            dose: aggregate.dose.to_owned(),
            reasons: aggregate.reasons,
            factors: applied,
        }
    }
}

/// Highest score first, ties broken by ascending supplement id
fn rank(a: &ScoredRecommendation, b: &ScoredRecommendation) -> Ordering {
    b.final_score
        .total_cmp(&a.final_score)
        .then_with(|| a.supplement_id.cmp(&b.supplement_id))
}

impl RecommendationEngineTrait for SupplementRecommendationEngine {
    fn score(
        &self,
        profile: &UserProfile,
        top_n: Option<usize>,
    ) -> AppResult<Vec<ScoredRecommendation>> {
        let top_n = self.config.effective_top_n(top_n);
        if top_n == 0 {
            return Err(AppError::invalid_input("top_n must be at least 1"));
        }

        let _span = debug_span!(
            "score",
            symptoms = profile.symptoms.len(),
            goals = profile.goals.len(),
            lifestyle = profile.lifestyle.len(),
            diet = %profile.diet
        )
        .entered();
        let started = Instant::now();

        let mut scored: Vec<ScoredRecommendation> = self
            .aggregate(profile)
            .into_iter()
            .map(|aggregate| self.adjust(profile, aggregate))
            .collect();
        scored.sort_by(rank);
        scored.truncate(top_n);

        AppLogger::log_scoring_run(
            profile.selected_keys().count(),
            scored.len(),
            top_n,
            started.elapsed().as_micros(),
        );
        Ok(scored)
    }

    fn score_many(
        &self,
        profiles: &[UserProfile],
        top_n: Option<usize>,
    ) -> AppResult<Vec<Vec<ScoredRecommendation>>> {
        profiles
            .par_iter()
            .map(|profile| self.score(profile, top_n))
            .collect()
    }

    fn report(&self, profile: UserProfile, top_n: Option<usize>) -> AppResult<RecommendationReport> {
        let recommendations = self.score(&profile, top_n)?;
        Ok(RecommendationReport {
            id: Uuid::new_v4(),
            generated_at: Utc::now(),
            data_version: self.data.version().to_owned(),
            profile,
            recommendations,
        })
    }
}
