//! Domain layer for equacao-pro
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## The Procrastination Equation
//!
//! Procrastinação = Impulsividade ÷ [Expectativa × Valor × (1 ÷ Tempo)]
//!
//! - **Questionnaire**: five fixed questions, one per input of the equation
//!   (plus the task itself)
//! - **Wizard**: the linear collect → submit → result/error state machine
//! - **Diagnosis**: the model's four-section answer, as markdown and HTML

pub mod core;
pub mod diagnosis;
pub mod equation;
pub mod prompt;
pub mod questionnaire;

// Re-export commonly used types
pub use core::{error::DomainError, model::Model};
pub use diagnosis::{
    report::{Diagnosis, ResponseSection},
    wizard::{Advance, USER_FAILURE_MESSAGE, Wizard, WizardPhase},
};
pub use equation::{EQUATION_FORMULA, Effect, EquationVariable};
pub use prompt::DiagnosticPromptTemplate;
pub use questionnaire::{
    answers::AnswerSet,
    question::{LAST_STEP, QUESTIONS, Question, QuestionKey},
};
