//! Console formatting for `--show-config` and startup diagnostics

use colored::Colorize;

/// Formats non-TUI console output
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Header plus one line per configuration source; `[FOUND]` entries are highlighted.
    pub fn config_sources(lines: &[String]) -> String {
        let mut output = format!(
            "{}\n",
            "Configuration sources (in priority order):".cyan().bold()
        );
        for line in lines {
            if line.contains("[FOUND]") {
                output.push_str(&format!("{}\n", line.green()));
            } else {
                output.push_str(&format!("{}\n", line.dimmed()));
            }
        }
        output
    }

    /// The effective configuration, already serialized as TOML
    pub fn effective_config(toml: &str) -> String {
        format!(
            "\n{}\n{}\n{}",
            "Effective configuration:".cyan().bold(),
            "-".repeat(40),
            toml
        )
    }

    pub fn warning(message: &str) -> String {
        format!("{} {}", "warning:".yellow().bold(), message)
    }

    pub fn error(message: &str) -> String {
        format!("{} {}", "error:".red().bold(), message)
    }
}
