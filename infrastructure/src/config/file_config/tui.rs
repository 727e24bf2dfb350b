//! TUI configuration from TOML (`[tui]` section)

use super::ConfigValidationError;
use serde::{Deserialize, Serialize};

/// TUI configuration
///
/// # Example
///
/// ```toml
/// [tui]
/// tick_rate_ms = 250
/// show_hints = true
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileTuiConfig {
    /// Interval of the redraw tick that drives the loading spinner
    pub tick_rate_ms: u64,
    /// Show key hints in the status bar
    pub show_hints: bool,
}

impl Default for FileTuiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: 250,
            show_hints: true,
        }
    }
}

impl FileTuiConfig {
    pub(super) fn validate(&self) -> Option<ConfigValidationError> {
        (!(16..=5000).contains(&self.tick_rate_ms))
            .then_some(ConfigValidationError::InvalidTickRate(self.tick_rate_ms))
    }
}
