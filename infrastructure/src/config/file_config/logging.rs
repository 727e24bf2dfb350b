//! Log file configuration from TOML (`[logging]` section)

use super::ConfigValidationError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where the log file goes. The TUI owns the terminal, so logs never go to stderr.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// Log directory. Defaults to the platform data dir.
    pub directory: Option<String>,
    /// File name prefix; the daily appender adds the date suffix.
    pub file_prefix: String,
}

impl Default for FileLoggingConfig {
    fn default() -> Self {
        Self {
            directory: None,
            file_prefix: "equacao-pro.log".to_string(),
        }
    }
}

impl FileLoggingConfig {
    /// Resolved log directory: configured value, else `<data_dir>/equacao-pro/logs`,
    /// else `./logs`.
    pub fn resolved_directory(&self) -> PathBuf {
        match &self.directory {
            Some(dir) => PathBuf::from(dir),
            None => dirs::data_dir()
                .map(|d| d.join("equacao-pro").join("logs"))
                .unwrap_or_else(|| PathBuf::from("logs")),
        }
    }

    pub(super) fn validate(&self) -> Option<ConfigValidationError> {
        self.file_prefix
            .trim()
            .is_empty()
            .then_some(ConfigValidationError::EmptyLogPrefix)
    }
}
