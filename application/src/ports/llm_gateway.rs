//! LLM Gateway port
//!
//! Defines the interface for the single completion call the diagnosis needs.

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur during a completion call
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    /// No credential available; detected before any network attempt
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Transport failure, non-success status, or malformed response
    #[error("Request failed: {0}")]
    Request(String),
}

impl GatewayError {
    pub fn is_configuration(&self) -> bool {
        matches!(self, GatewayError::Configuration(_))
    }
}

/// Gateway for text generation
///
/// One call is one attempt: implementations must not retry.
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Generate a response to `prompt` under `system_instruction`
    async fn generate(
        &self,
        prompt: &str,
        system_instruction: &str,
    ) -> Result<String, GatewayError>;
}
