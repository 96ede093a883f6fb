// ABOUTME: Quiz session module for collecting answers and producing recommendations
// ABOUTME: Re-exports answer conversion and the intro, quiz, and results wizard
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriLab

//! # Quiz
//!
//! - `responses` - raw answers and their conversion to a `UserProfile`
//! - `wizard` - the session state machine

/// Raw quiz answers
pub mod responses;
/// Session state machine
pub mod wizard;

pub use responses::{normalize_key, QuizResponses};
pub use wizard::{QuizWizard, WizardState};
