//! UI event types emitted by DiagnosticController for presentation layer rendering
//!
//! These events form the output port from the application layer to the presentation layer.

use equacao_domain::Diagnosis;

/// Events emitted by DiagnosticController for the presentation layer to render
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// The completion call has been issued
    DiagnosisStarted,
    /// The call succeeded and the answer was rendered
    DiagnosisReady(Diagnosis),
    /// The call failed; carries the user-facing message
    DiagnosisFailed { message: String },
}
