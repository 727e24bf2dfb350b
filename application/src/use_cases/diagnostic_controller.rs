//! DiagnosticController: runs submissions on behalf of the UI
//!
//! The presentation layer owns the wizard and decides *when* to submit; the
//! controller does the submitting and reports back through [`UiEvent`]s,
//! so the UI loop never blocks on the network.

use super::submit_diagnosis::{SubmitDiagnosisError, SubmitDiagnosisUseCase};
use crate::ports::llm_gateway::{GatewayError, LlmGateway};
use crate::ports::markdown::MarkdownRenderer;
use crate::ports::ui_event::UiEvent;
use equacao_domain::AnswerSet;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{error, warn};

pub struct DiagnosticController<G: LlmGateway + 'static, R: MarkdownRenderer + 'static> {
    use_case: SubmitDiagnosisUseCase<G, R>,
    ui_tx: mpsc::UnboundedSender<UiEvent>,
}

impl<G: LlmGateway + 'static, R: MarkdownRenderer + 'static> DiagnosticController<G, R> {
    pub fn new(
        gateway: Arc<G>,
        renderer: Arc<R>,
        ui_tx: mpsc::UnboundedSender<UiEvent>,
    ) -> Self {
        Self {
            use_case: SubmitDiagnosisUseCase::new(gateway, renderer),
            ui_tx,
        }
    }

    /// Run one submission to completion, emitting start and outcome events
    pub async fn submit(&self, answers: &AnswerSet) {
        self.emit(UiEvent::DiagnosisStarted);

        let event = match self.use_case.execute(answers).await {
            Ok(diagnosis) => UiEvent::DiagnosisReady(diagnosis),
            Err(e) => {
                Self::log_failure(&e);
                UiEvent::DiagnosisFailed {
                    message: e.user_message().to_string(),
                }
            }
        };
        self.emit(event);
    }

    /// The user sees one message for every failure; the log keeps the cause.
    fn log_failure(e: &SubmitDiagnosisError) {
        match e {
            SubmitDiagnosisError::Gateway(GatewayError::Configuration(reason)) => {
                error!("Diagnosis not attempted, missing configuration: {}", reason);
            }
            SubmitDiagnosisError::Gateway(GatewayError::Request(reason)) => {
                warn!("Diagnosis request failed: {}", reason);
            }
            SubmitDiagnosisError::Incomplete(reason) => {
                warn!("Diagnosis rejected: {}", reason);
            }
        }
    }

    fn emit(&self, event: UiEvent) {
        // Receiver gone means the UI is shutting down
        let _ = self.ui_tx.send(event);
    }
}
