//! Presentation-level configuration
//!
//! Configuration for TUI behavior.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// TUI configuration for the presentation layer
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TuiConfig {
    /// Redraw tick in milliseconds (drives the spinner and flash expiry)
    pub tick_rate_ms: u64,
    /// Show key hints in the status bar
    pub show_hints: bool,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: 250,
            show_hints: true,
        }
    }
}

impl TuiConfig {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(1))
    }
}
