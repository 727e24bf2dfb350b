//! Configuration file loading for equacao-pro
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `EQUACAO_*` environment variables (`__` separates sections)
//! 2. `--config <path>` specified file
//! 3. Project root: `./equacao.toml` or `./.equacao.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/equacao-pro/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileGeminiConfig, FileLoggingConfig, FileTuiConfig,
};
pub use loader::ConfigLoader;
