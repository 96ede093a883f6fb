// ABOUTME: Intro, quiz, and results wizard driving a quiz session to a recommendation report
// ABOUTME: Enforces legal transitions and leaves state untouched when a transition is rejected
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriLab

use super::responses::QuizResponses;
use crate::errors::{AppError, AppResult};
use crate::intelligence::{RecommendationEngineTrait, RecommendationReport};
use crate::logging::AppLogger;
use serde::Serialize;
use std::fmt;
use std::mem;

/// Where a quiz session currently is
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum WizardState {
    /// Landing screen, nothing answered yet
    #[default]
    Intro,
    /// Answers being collected
    Quiz {
        /// Answers so far
        responses: QuizResponses,
    },
    /// Answers submitted and scored
    Results {
        /// Submitted answers
        responses: QuizResponses,
        /// Scored report
        report: Box<RecommendationReport>,
    },
}

impl WizardState {
    /// Step name used in logs and errors
    #[must_use]
    pub const fn step(&self) -> &'static str {
        match self {
            Self::Intro => "intro",
            Self::Quiz { .. } => "quiz",
            Self::Results { .. } => "results",
        }
    }
}

impl fmt::Display for WizardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.step())
    }
}

/// A single quiz session
#[derive(Debug, Clone, Default)]
pub struct QuizWizard {
    state: WizardState,
}

fn illegal(action: &str, state: &WizardState) -> AppError {
    AppError::invalid_input(format!("Cannot {action} from the {state} step"))
}

impl QuizWizard {
    /// New session at the intro step
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state
    #[must_use]
    pub const fn state(&self) -> &WizardState {
        &self.state
    }

    /// In-progress or submitted answers
    #[must_use]
    pub fn responses(&self) -> Option<&QuizResponses> {
        match &self.state {
            WizardState::Intro => None,
            WizardState::Quiz { responses } | WizardState::Results { responses, .. } => {
                Some(responses)
            }
        }
    }

    /// Report, once the quiz is complete
    #[must_use]
    pub fn report(&self) -> Option<&RecommendationReport> {
        match &self.state {
            WizardState::Results { report, .. } => Some(report.as_ref()),
            _ => None,
        }
    }

    fn transition(&mut self, next: WizardState) {
        AppLogger::log_wizard_transition(self.state.step(), next.step());
        self.state = next;
    }

    /// Intro to quiz with empty answers
    ///
    /// # Errors
    ///
    /// Returns `invalid_input` outside the intro step
    pub fn start(&mut self) -> AppResult<()> {
        if self.state != WizardState::Intro {
            return Err(illegal("start", &self.state));
        }
        self.transition(WizardState::Quiz {
            responses: QuizResponses::default(),
        });
        Ok(())
    }

    /// Record contact details on the in-progress answers
    ///
    /// # Errors
    ///
    /// Returns `invalid_input` outside the quiz step
    pub fn update_contact(
        &mut self,
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> AppResult<()> {
        match &mut self.state {
            WizardState::Quiz { responses } => {
                responses.set_contact(name, email);
                Ok(())
            }
            state => Err(illegal("update contact details", state)),
        }
    }

    /// Submit answers, score them, and move to results
    ///
    /// Contact details recorded earlier survive when `responses` has none.
    ///
    /// # Errors
    ///
    /// Returns `invalid_input` outside the quiz step, or any scoring error. The
    /// state is unchanged on error.
    pub fn complete<E: RecommendationEngineTrait>(
        &mut self,
        mut responses: QuizResponses,
        engine: &E,
        top_n: Option<usize>,
    ) -> AppResult<&RecommendationReport> {
        let WizardState::Quiz { responses: current } = &self.state else {
            return Err(illegal("complete the quiz", &self.state));
        };
        if responses.name.is_none() {
            responses.name.clone_from(&current.name);
        }
        if responses.email.is_none() {
            responses.email.clone_from(&current.email);
        }

        let report = engine.report(responses.to_profile(), top_n)?;
        self.transition(WizardState::Results {
            responses,
            report: Box::new(report),
        });
        self.report()
            .ok_or_else(|| AppError::internal("Wizard lost its report after completing"))
    }

    /// Return to the intro step, discarding any answers
    pub fn restart(&mut self) {
        let previous = mem::take(&mut self.state);
        AppLogger::log_wizard_transition(previous.step(), self.state.step());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intelligence::SupplementRecommendationEngine;

    #[test]
    fn test_start_only_from_intro() {
        let mut wizard = QuizWizard::new();
        wizard.start().unwrap();
        assert_eq!(wizard.state().step(), "quiz");
        assert!(wizard.start().is_err());
        assert_eq!(wizard.state().step(), "quiz");
    }

    #[test]
    fn test_update_contact_only_in_quiz() {
        let mut wizard = QuizWizard::new();
        assert!(wizard.update_contact("Ada", "ada@example.com").is_err());
        wizard.start().unwrap();
        wizard.update_contact("Ada", "ada@example.com").unwrap();
        assert_eq!(
            wizard.responses().and_then(|r| r.email.as_deref()),
            Some("ada@example.com")
        );
    }

    #[test]
    fn test_contact_survives_completion() {
        let engine = SupplementRecommendationEngine::new().unwrap();
        let mut wizard = QuizWizard::new();
        wizard.start().unwrap();
        wizard.update_contact("Ada", "ada@example.com").unwrap();
        let responses = QuizResponses {
            symptoms: vec!["fatigue".to_owned()],
            ..QuizResponses::default()
        };
        wizard.complete(responses, &engine, Some(5)).unwrap();
        assert_eq!(
            wizard.responses().and_then(|r| r.name.as_deref()),
            Some("Ada")
        );
        assert!(wizard.report().is_some());
    }

    #[test]
    fn test_restart_clears() {
        let mut wizard = QuizWizard::new();
        wizard.start().unwrap();
        wizard.restart();
        assert_eq!(wizard.state(), &WizardState::Intro);
        assert!(wizard.responses().is_none());
    }
}
