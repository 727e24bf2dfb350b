//! Submit Diagnosis use case
//!
//! Turns a completed questionnaire into a rendered diagnosis with exactly
//! one completion call.

use crate::ports::llm_gateway::{GatewayError, LlmGateway};
use crate::ports::markdown::MarkdownRenderer;
use equacao_domain::{
    AnswerSet, Diagnosis, DiagnosticPromptTemplate, DomainError, USER_FAILURE_MESSAGE,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur while producing a diagnosis
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitDiagnosisError {
    #[error("Incomplete questionnaire: {0}")]
    Incomplete(#[from] DomainError),

    #[error("Gateway error: {0}")]
    Gateway(#[from] GatewayError),
}

impl SubmitDiagnosisError {
    /// The message shown to the user; causes are not distinguished.
    pub fn user_message(&self) -> &'static str {
        USER_FAILURE_MESSAGE
    }
}

/// Use case for producing a diagnosis from five answers
pub struct SubmitDiagnosisUseCase<G: LlmGateway + 'static, R: MarkdownRenderer + 'static> {
    gateway: Arc<G>,
    renderer: Arc<R>,
}

impl<G: LlmGateway + 'static, R: MarkdownRenderer + 'static> SubmitDiagnosisUseCase<G, R> {
    pub fn new(gateway: Arc<G>, renderer: Arc<R>) -> Self {
        Self { gateway, renderer }
    }

    /// Execute the use case
    pub async fn execute(&self, answers: &AnswerSet) -> Result<Diagnosis, SubmitDiagnosisError> {
        if let Some(key) = answers.first_unanswered() {
            return Err(DomainError::MissingAnswer(key).into());
        }

        let prompt = DiagnosticPromptTemplate::diagnostic_prompt(answers);
        debug!(prompt_len = prompt.len(), "Composed diagnostic prompt");

        info!("Requesting diagnosis");
        let markdown = self
            .gateway
            .generate(&prompt, DiagnosticPromptTemplate::system_instruction())
            .await?;

        let html = self.renderer.render(&markdown);
        let diagnosis = Diagnosis::new(markdown, html);

        let missing = diagnosis.missing_sections();
        if !missing.is_empty() {
            warn!(
                "Diagnosis is missing sections: {}",
                missing
                    .iter()
                    .map(|s| s.marker())
                    .collect::<Vec<_>>()
                    .join(", ")
            );
        }

        info!(
            markdown_len = diagnosis.markdown().len(),
            "Diagnosis received"
        );
        Ok(diagnosis)
    }
}
