//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for equacao-pro
#[derive(Parser, Debug)]
#[command(name = "equacao-pro")]
#[command(author, version, about = "Diagnóstico científico de procrastinação no terminal")]
#[command(long_about = r#"
EquaçãoPro asks five questions about the task you are putting off and sends
your answers to Gemini, which explains the problem through the Procrastination
Equation and proposes one concrete next action:

  Procrastinação = Impulsividade ÷ [Expectativa × Valor × (1 ÷ Tempo)]

The API key is read from GEMINI_API_KEY (see [gemini].api_key_env).

Configuration files are loaded from (in priority order):
1. EQUACAO_* environment variables (e.g. EQUACAO_GEMINI__MODEL)
2. --config <path>      Explicit config file
3. ./equacao.toml       Project-level config
4. ~/.config/equacao-pro/config.toml   Global config

Logs are written to a file (the terminal belongs to the UI); use -v to raise
the level or RUST_LOG for fine-grained filters.

Example:
  equacao-pro
  equacao-pro --model gemini-2.5-pro -vv
"#)]
pub struct Cli {
    /// Gemini model id (overrides [gemini].model)
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration sources and the effective configuration, then exit
    #[arg(long)]
    pub show_config: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_flags() {
        let cli = Cli::parse_from([
            "equacao-pro",
            "--model",
            "gemini-2.5-pro",
            "-vv",
            "--config",
            "custom.toml",
        ]);
        assert_eq!(cli.model.as_deref(), Some("gemini-2.5-pro"));
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
        assert!(!cli.no_config);
        assert!(!cli.show_config);
    }
}
