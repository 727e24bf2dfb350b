//! Presentation layer for equacao-pro
//!
//! This crate contains the CLI definition, console output helpers
//! and the terminal UI (landing page + diagnostic wizard).

pub mod cli;
pub mod config;
pub mod output;
pub mod tui;

// Re-export commonly used types
pub use cli::commands::Cli;
pub use config::TuiConfig;
pub use output::console::ConsoleFormatter;
pub use tui::TuiApp;
