//! Gemini provider configuration from TOML (`[gemini]` section)

use super::ConfigValidationError;
use equacao_domain::Model;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Gemini API configuration.
///
/// # Example
///
/// ```toml
/// [gemini]
/// model = "gemini-2.5-flash"
/// api_key_env = "GEMINI_API_KEY"
/// timeout_seconds = 60
/// ```
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGeminiConfig {
    /// Model identifier sent in the request path.
    pub model: Model,
    /// Base URL for the Generative Language API.
    pub base_url: String,
    /// Environment variable name holding the API key.
    pub api_key_env: String,
    /// Direct API key (not recommended, use env var instead).
    pub api_key: Option<String>,
    /// Request timeout in seconds. No timeout when unset.
    pub timeout_seconds: Option<u64>,
}

impl Default for FileGeminiConfig {
    fn default() -> Self {
        Self {
            model: Model::default(),
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            api_key_env: "GEMINI_API_KEY".to_string(),
            api_key: None,
            timeout_seconds: None,
        }
    }
}

// Keeps the key out of debug logs.
impl fmt::Debug for FileGeminiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileGeminiConfig")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("api_key_env", &self.api_key_env)
            .field("api_key", &self.api_key.as_ref().map(|_| "********"))
            .field("timeout_seconds", &self.timeout_seconds)
            .finish()
    }
}

impl FileGeminiConfig {
    pub(super) fn validate(&self) -> Vec<ConfigValidationError> {
        let mut issues = Vec::new();
        if self.model.as_str().trim().is_empty() {
            issues.push(ConfigValidationError::EmptyModelName);
        }
        if self.timeout_seconds == Some(0) {
            issues.push(ConfigValidationError::InvalidTimeout);
        }
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            issues.push(ConfigValidationError::InvalidBaseUrl(self.base_url.clone()));
        }
        if self.api_key_env.trim().is_empty() {
            issues.push(ConfigValidationError::EmptyApiKeyEnv);
        }
        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_api_key() {
        let config = FileGeminiConfig {
            api_key: Some("super-secret".to_string()),
            ..Default::default()
        };
        let debug = format!("{:?}", config);
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("GEMINI_API_KEY"));
    }

    #[test]
    fn test_invalid_base_url() {
        let config = FileGeminiConfig {
            base_url: "generativelanguage.googleapis.com".to_string(),
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            vec![ConfigValidationError::InvalidBaseUrl(
                "generativelanguage.googleapis.com".to_string()
            )]
        );
    }

    #[test]
    fn test_custom_model_is_accepted() {
        let config: FileGeminiConfig = toml::from_str("model = \"gemini-exp-1206\"").unwrap();
        assert_eq!(config.model, Model::Custom("gemini-exp-1206".to_string()));
        assert!(config.validate().is_empty());
    }
}
