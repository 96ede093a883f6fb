// ABOUTME: Application constants re-exported from nutrilab-core
// ABOUTME: Priority bounds, factor defaults, limits, env var names, and data file names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriLab

//! # Constants Module

pub use nutrilab_core::constants::*;
