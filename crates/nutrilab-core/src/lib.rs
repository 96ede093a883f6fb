// ABOUTME: Core types and constants for the NutriLab supplement recommendation engine
// ABOUTME: Foundation crate with error handling, reference data models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriLab

#![deny(unsafe_code)]

//! # `NutriLab` Core
//!
//! Foundation crate providing shared types and constants for the `NutriLab`
//! recommendation engine. It has no knowledge of where reference data comes
//! from or how it is scored; it only defines the shapes that flow between
//! the catalog, the scorer and the front ends.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and catalog integrity errors
//! - **constants**: Priority bounds, factor defaults, and environment variable names
//! - **models**: Supplements, mapping entries, user profiles, and scored recommendations

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (Supplement, `RecommendationEntry`, `UserProfile`, etc.)
pub mod models;
