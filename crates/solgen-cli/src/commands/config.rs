//! `solgen config`: inspect application settings.

use crate::{
    cli::ConfigCommands,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

pub fn execute(cmd: ConfigCommands, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    match cmd {
        ConfigCommands::Show => {
            output.data(&render(config)?)?;
        }
        ConfigCommands::Path => {
            output.data(&AppConfig::config_path().display().to_string())?;
        }
    }
    Ok(())
}

fn render(config: &AppConfig) -> CliResult<String> {
    toml::to_string_pretty(config).map_err(|e| CliError::Config {
        message: format!("Failed to serialise settings: {e}"),
        source: Some(Box::new(e)),
    })
}
