//! LLM provider adapters
//!
//! Each provider implements the [`LlmGateway`](equacao_application::LlmGateway) port.

pub mod gemini;
