//! Gemini adapter for the [`LlmGateway`] port

use super::types::{GenerateContentRequest, GenerateContentResponse, describe_http_error};
use crate::config::FileGeminiConfig;
use async_trait::async_trait;
use equacao_application::{GatewayError, LlmGateway};
use equacao_domain::Model;
use std::time::Duration;
use tracing::{debug, info, warn};

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Resolved settings for [`GeminiGateway`].
#[derive(Clone)]
pub struct GeminiSettings {
    pub model: Model,
    pub base_url: String,
    pub api_key_env: String,
    pub api_key: Option<String>,
    pub timeout: Option<Duration>,
}

impl From<&FileGeminiConfig> for GeminiSettings {
    fn from(config: &FileGeminiConfig) -> Self {
        Self {
            model: config.model.clone(),
            base_url: config.base_url.clone(),
            api_key_env: config.api_key_env.clone(),
            api_key: config.api_key.clone(),
            timeout: config.timeout_seconds.map(Duration::from_secs),
        }
    }
}

impl GeminiSettings {
    pub fn with_model(mut self, model: Model) -> Self {
        self.model = model;
        self
    }

    /// Credential lookup: configured key first, then the environment variable.
    /// Blank values count as absent.
    fn resolve_api_key(&self) -> Result<String, GatewayError> {
        if let Some(key) = self.api_key.as_deref().filter(|k| !k.trim().is_empty()) {
            return Ok(key.to_string());
        }
        std::env::var(&self.api_key_env)
            .ok()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| {
                GatewayError::Configuration(format!(
                    "No Gemini API key: set {} or gemini.api_key",
                    self.api_key_env
                ))
            })
    }
}

/// Calls `POST {base_url}/v1beta/models/{model}:generateContent` once per diagnosis.
pub struct GeminiGateway {
    client: reqwest::Client,
    settings: GeminiSettings,
}

impl GeminiGateway {
    pub fn new(settings: GeminiSettings) -> Result<Self, GatewayError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = settings.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| GatewayError::Configuration(format!("HTTP client: {}", e)))?;

        if !settings.model.is_gemini() {
            warn!("Model '{}' does not look like a Gemini model id", settings.model);
        }

        Ok(Self { client, settings })
    }

    pub fn model(&self) -> &Model {
        &self.settings.model
    }

    pub fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.settings.base_url.trim_end_matches('/'),
            self.settings.model
        )
    }
}

#[async_trait]
impl LlmGateway for GeminiGateway {
    async fn generate(
        &self,
        prompt: &str,
        system_instruction: &str,
    ) -> Result<String, GatewayError> {
        // Checked on every call so a key exported after startup is picked up.
        let api_key = self.settings.resolve_api_key()?;

        let endpoint = self.endpoint();
        let body = GenerateContentRequest::new(prompt, system_instruction);
        debug!(endpoint = %endpoint, prompt_len = prompt.len(), "Sending generateContent request");

        let response = self
            .client
            .post(&endpoint)
            .header(API_KEY_HEADER, api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| GatewayError::Request(format!("Failed to reach Gemini: {}", e)))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| GatewayError::Request(format!("Failed to read response body: {}", e)))?;

        if !status.is_success() {
            return Err(GatewayError::Request(describe_http_error(
                status.as_u16(),
                status.canonical_reason(),
                &text,
            )));
        }

        let generated = GenerateContentResponse::parse_text(&text)?;
        info!(model = %self.settings.model, chars = generated.chars().count(), "Gemini response received");
        Ok(generated)
    }
}
