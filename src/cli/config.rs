use clap::Subcommand;

use super::{CliError, CommandResult};
use crate::config::Config;

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Print the effective configuration as TOML.
    Show,

    /// Print the JSON schema of the configuration file.
    Schema,
}

impl ConfigCommand {
    /// Execute against the loaded `config`.
    ///
    /// # Errors
    /// Returns `CliError::ConfigError` if serialization fails.
    pub fn execute(self, config: &Config) -> CommandResult {
        match self {
            Self::Show => toml::to_string_pretty(config)
                .map_err(|e| CliError::ConfigError(format!("Failed to serialize config: {e}"))),
            Self::Schema => {
                let schema = schemars::schema_for!(Config);
                serde_json::to_string_pretty(&schema)
                    .map_err(|e| CliError::ConfigError(format!("Failed to serialize schema: {e}")))
            }
        }
    }
}
