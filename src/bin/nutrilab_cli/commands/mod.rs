// ABOUTME: Re-exports command modules for nutrilab-cli
// ABOUTME: Provides access to recommend, quiz, catalog, symptoms, and validate commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriLab

pub mod catalog;
pub mod quiz;
pub mod recommend;
pub mod symptoms;
pub mod validate;
