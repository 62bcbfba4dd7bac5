//! `gradebook config` - inspect configuration values.

use crate::{
    cli::ConfigCommands,
    config::{AppConfig, ReportFormat},
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Keys understood by `config get`.
pub const KEYS: [&str; 4] = [
    "input.max_attempts",
    "input.done_keyword",
    "output.no_color",
    "output.format",
];

/// Dispatch to the correct config subcommand.
pub fn execute(cmd: ConfigCommands, config: AppConfig, output: OutputManager) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_config_value(&config, &key)?;
            output.emit(&value)?;
        }

        ConfigCommands::List => {
            output.header("Current Configuration:")?;
            let serialised =
                toml::to_string_pretty(&config).map_err(|e| CliError::ConfigError {
                    message: format!("Failed to serialise config: {e}"),
                    source: Some(Box::new(e)),
                })?;
            output.emit(serialised.trim_end())?;
        }

        ConfigCommands::Path => {
            output.emit(&AppConfig::config_path().display().to_string())?;
        }
    }

    Ok(())
}

fn get_config_value(config: &AppConfig, key: &str) -> CliResult<String> {
    match key {
        "input.max_attempts" => Ok(config.input.max_attempts.to_string()),
        "input.done_keyword" => Ok(config.input.done_keyword.clone()),
        "output.no_color" => Ok(config.output.no_color.to_string()),
        "output.format" => Ok(match config.output.format {
            ReportFormat::Human => "human".into(),
            ReportFormat::Json => "json".into(),
        }),
        _ => Err(CliError::ConfigError {
            message: format!("Unknown config key: '{key}' (known: {})", KEYS.join(", ")),
            source: None,
        }),
    }
}
