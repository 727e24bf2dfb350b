//! Application layer for equacao-pro
//!
//! This crate contains use cases and port definitions.
//! It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    llm_gateway::{GatewayError, LlmGateway},
    markdown::MarkdownRenderer,
    ui_event::UiEvent,
};
pub use use_cases::diagnostic_controller::DiagnosticController;
pub use use_cases::submit_diagnosis::{SubmitDiagnosisError, SubmitDiagnosisUseCase};
