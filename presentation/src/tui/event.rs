//! TUI event types
//!
//! Defines the commands sent TO the controller task. Events coming FROM it
//! are the application layer's [`UiEvent`](equacao_application::UiEvent).

use equacao_domain::AnswerSet;

/// Commands sent from the TUI event loop to the controller task (Actor inbox)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuiCommand {
    /// Submit the completed questionnaire (exactly one per submission)
    Submit(AnswerSet),
    /// Graceful shutdown
    Quit,
}
