//! Infrastructure layer for equacao-pro
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod markdown;
pub mod providers;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileGeminiConfig, FileLoggingConfig,
    FileTuiConfig,
};
pub use markdown::PulldownMarkdownRenderer;
pub use providers::gemini::{GeminiGateway, GeminiSettings};
