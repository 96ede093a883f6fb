// ABOUTME: Unified error handling re-exported from nutrilab-core
// ABOUTME: Keeps crate::errors paths stable for the scorer, catalog loader, and CLI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriLab

//! # Unified Error Handling System
//!
//! Error types live in `nutrilab-core` so the data model and the engine share
//! one `AppError`. This module re-exports them under the main crate.

pub use nutrilab_core::errors::*;
