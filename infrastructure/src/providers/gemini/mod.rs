//! Google Gemini provider (Generative Language API, `generateContent`)
//!
//! One request per diagnosis: no streaming, no retries, no tools.

mod gateway;
mod types;

pub use gateway::{GeminiGateway, GeminiSettings};
pub use types::{
    ApiErrorEnvelope, GenerateContentRequest, GenerateContentResponse, describe_http_error,
};
