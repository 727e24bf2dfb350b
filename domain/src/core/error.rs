//! Domain error types

use crate::questionnaire::question::QuestionKey;
use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Question '{0}' has not been answered")]
    MissingAnswer(QuestionKey),
}
