// ABOUTME: Criterion benchmarks for supplement recommendation scoring
// ABOUTME: Measures single-profile scoring, diet resolution cost, and parallel batch scoring
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriLab

//! Criterion benchmarks for the recommendation engine.
//!
//! Measures scoring a single profile of growing size and scoring batches of
//! profiles through the parallel `score_many` path.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use nutrilab::catalog::ReferenceData;
use nutrilab::config::RecommendationEngineConfig;
use nutrilab::intelligence::{RecommendationEngineTrait, SupplementRecommendationEngine};
use nutrilab::models::{AgeBracket, DietaryConstraint, Gender, TableKind, UserProfile};
use std::process;

/// Batch sizes for `score_many`
const BATCH_SIZES: [usize; 3] = [10, 100, 1000];

fn engine() -> SupplementRecommendationEngine {
    let Ok(data) = ReferenceData::bundled() else {
        eprintln!("bundled reference data failed to load");
        process::exit(1);
    };
    SupplementRecommendationEngine::with_config(data, RecommendationEngineConfig::default())
}

fn keys(data: &ReferenceData, kind: TableKind) -> Vec<String> {
    data.tables().keys(kind).map(str::to_owned).collect()
}

/// Profile selecting `width` keys from each table, rotated by `seed`
fn generate_profile(data: &ReferenceData, width: usize, seed: usize) -> UserProfile {
    let pick = |kind: TableKind| -> Vec<String> {
        let all = keys(data, kind);
        (0..width.min(all.len()))
            .map(|offset| all[(seed + offset * 7) % all.len()].clone())
            .collect()
    };
    let diet = match seed % 3 {
        0 => DietaryConstraint::Omnivore,
        1 => DietaryConstraint::Vegetarian,
        _ => DietaryConstraint::Vegan,
    };
    let age = match seed % 4 {
        0 => AgeBracket::From18To30,
        1 => AgeBracket::From31To45,
        2 => AgeBracket::From46To60,
        _ => AgeBracket::Over60,
    };
    let gender = match seed % 2 {
        0 => Gender::Femme,
        _ => Gender::Homme,
    };
    UserProfile {
        symptoms: pick(TableKind::Symptom),
        goals: pick(TableKind::Goal),
        lifestyle: pick(TableKind::Lifestyle),
        age: Some(age),
        gender: Some(gender),
        diet,
    }
}

/// Benchmark one profile as the number of selected keys grows
fn bench_score_profile(c: &mut Criterion) {
    let engine = engine();
    let mut group = c.benchmark_group("score_profile");

    for width in [1, 3, 8] {
        let profile = generate_profile(engine.data(), width, width);
        group.bench_with_input(BenchmarkId::new("keys_per_table", width), &profile, |b, profile| {
            b.iter(|| engine.score(black_box(profile), black_box(None)));
        });
    }

    group.finish();
}

/// Benchmark the same selection under each dietary constraint
fn bench_diet_resolution(c: &mut Criterion) {
    let engine = engine();
    let mut group = c.benchmark_group("diet_resolution");
    let base = generate_profile(engine.data(), 5, 0);

    for diet in [
        DietaryConstraint::Omnivore,
        DietaryConstraint::Vegetarian,
        DietaryConstraint::Vegan,
    ] {
        let profile = UserProfile {
            diet,
            ..base.clone()
        };
        group.bench_with_input(BenchmarkId::new("diet", diet), &profile, |b, profile| {
            b.iter(|| engine.score(black_box(profile), black_box(Some(10))));
        });
    }

    group.finish();
}

/// Benchmark parallel batch scoring
fn bench_score_many(c: &mut Criterion) {
    let engine = engine();
    let mut group = c.benchmark_group("score_many");

    for size in BATCH_SIZES {
        let profiles: Vec<UserProfile> = (0..size)
            .map(|seed| generate_profile(engine.data(), 1 + seed % 5, seed))
            .collect();
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("profiles", size), &profiles, |b, profiles| {
            b.iter(|| engine.score_many(black_box(profiles), black_box(None)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_score_profile,
    bench_diet_resolution,
    bench_score_many,
);
criterion_main!(benches);
