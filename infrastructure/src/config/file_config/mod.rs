//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod gemini;
mod logging;
mod tui;

pub use gemini::FileGeminiConfig;
pub use logging::FileLoggingConfig;
pub use tui::FileTuiConfig;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigValidationError {
    #[error("gemini.timeout_seconds cannot be 0")]
    InvalidTimeout,

    #[error("gemini.model cannot be empty")]
    EmptyModelName,

    #[error("gemini.base_url must start with http:// or https:// (got '{0}')")]
    InvalidBaseUrl(String),

    #[error("gemini.api_key_env cannot be empty")]
    EmptyApiKeyEnv,

    #[error("tui.tick_rate_ms must be between 16 and 5000 (got {0})")]
    InvalidTickRate(u64),

    #[error("logging.file_prefix cannot be empty")]
    EmptyLogPrefix,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Gemini API settings
    pub gemini: FileGeminiConfig,
    /// TUI settings
    pub tui: FileTuiConfig,
    /// Log file settings
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning every detected issue.
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut issues = Vec::new();
        issues.extend(self.gemini.validate());
        issues.extend(self.tui.validate());
        issues.extend(self.logging.validate());
        issues
    }

    /// Copy of this configuration that is safe to print.
    pub fn redacted(&self) -> Self {
        let mut config = self.clone();
        if config.gemini.api_key.is_some() {
            config.gemini.api_key = Some("********".to_string());
        }
        config
    }

    /// Render the configuration as TOML (used by `--show-config`).
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use equacao_domain::Model;

    #[test]
    fn test_default_config_is_valid() {
        assert!(FileConfig::default().validate().is_empty());
    }

    #[test]
    fn test_parse_full_config() {
        let toml_str = r#"
[gemini]
model = "gemini-2.5-pro"
base_url = "http://localhost:8080"
api_key_env = "MY_GEMINI_KEY"
timeout_seconds = 30

[tui]
tick_rate_ms = 100
show_hints = false

[logging]
directory = "/tmp/equacao-logs"
file_prefix = "wizard.log"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.gemini.model, Model::Gemini25Pro);
        assert_eq!(config.gemini.base_url, "http://localhost:8080");
        assert_eq!(config.gemini.api_key_env, "MY_GEMINI_KEY");
        assert_eq!(config.gemini.timeout_seconds, Some(30));
        assert_eq!(config.tui.tick_rate_ms, 100);
        assert!(!config.tui.show_hints);
        assert_eq!(
            config.logging.directory.as_deref(),
            Some("/tmp/equacao-logs")
        );
        assert_eq!(config.logging.file_prefix, "wizard.log");
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config: FileConfig = toml::from_str("[tui]\nshow_hints = false\n").unwrap();
        assert!(!config.tui.show_hints);
        assert_eq!(config.gemini.model, Model::Gemini25Flash);
        assert_eq!(config.gemini.api_key_env, "GEMINI_API_KEY");
    }

    #[test]
    fn test_validate_collects_all_issues() {
        let toml_str = r#"
[gemini]
model = ""
timeout_seconds = 0

[tui]
tick_rate_ms = 1
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        let issues = config.validate();
        assert!(issues.contains(&ConfigValidationError::EmptyModelName));
        assert!(issues.contains(&ConfigValidationError::InvalidTimeout));
        assert!(issues.contains(&ConfigValidationError::InvalidTickRate(1)));
        assert_eq!(issues.len(), 3);
    }

    #[test]
    fn test_redacted_hides_api_key() {
        let mut config = FileConfig::default();
        config.gemini.api_key = Some("secret-key".to_string());

        let printed = config.redacted().to_toml_string().unwrap();
        assert!(!printed.contains("secret-key"));
        assert!(printed.contains("********"));
    }

    #[test]
    fn test_toml_output_roundtrips() {
        let printed = FileConfig::default().to_toml_string().unwrap();
        let parsed: FileConfig = toml::from_str(&printed).unwrap();
        assert_eq!(parsed.gemini.model, Model::Gemini25Flash);
        assert_eq!(parsed.tui.tick_rate_ms, FileTuiConfig::default().tick_rate_ms);
    }
}
