//! Command-line interface.
//!
//! `run` starts the headless overlay; `position` and `config` are one-shot
//! commands over the placement store and configuration file.

mod config;
pub mod formatting;
mod position;
mod run;
mod types;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use config::ConfigCommand;
pub use position::PositionCommand;
pub use run::{ConsoleDisplay, run_overlay};
pub use types::{CliError, CommandResult};

use crate::{
    config::Config,
    services::placement::PositionStore,
};

/// Desktop "now playing" overlay engine.
#[derive(Debug, Parser)]
#[command(name = "nowplaying-overlay", version, about)]
pub struct Cli {
    /// Use this config file instead of the default location.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Use this placement file instead of the default location.
    #[arg(long, global = true, value_name = "PATH")]
    pub placement_file: Option<PathBuf>,

    /// Command to run; defaults to `run`.
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Top-level commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Poll playback and print display updates; reads hotkey names from stdin.
    Run,

    /// Inspect or change the persisted window placement.
    #[command(subcommand)]
    Position(PositionCommand),

    /// Inspect the configuration.
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Cli {
    /// Whether this invocation starts the long-running overlay.
    pub fn is_long_running(&self) -> bool {
        matches!(self.command, None | Some(Command::Run))
    }

    /// Load the config from `--config` or the default location.
    ///
    /// # Errors
    /// Returns `CliError::ConfigError` if the file is unreadable or invalid.
    pub fn load_config(&self) -> Result<Config, CliError> {
        let loaded = match &self.config {
            Some(path) => Config::load_from(path),
            None => Config::load(),
        };
        loaded.map_err(|e| CliError::ConfigError(e.to_string()))
    }
}

/// Execute a one-shot command and return its output.
///
/// `run` is handled by [`run_overlay`] since it needs the async runtime
/// for its whole lifetime.
///
/// # Errors
/// Returns the command's `CliError`.
pub fn execute(cli: Cli, config: &Config) -> CommandResult {
    match cli.command {
        None | Some(Command::Run) => Err(CliError::InvalidArguments(
            "run is not a one-shot command".to_string(),
        )),
        Some(Command::Position(command)) => {
            let store = match cli.placement_file {
                Some(path) => PositionStore::new(path),
                None => PositionStore::at_default_location()?,
            };
            command.execute(&config.window, store)
        }
        Some(Command::Config(command)) => command.execute(config),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::placement::WorkArea;

    #[test]
    fn no_subcommand_runs_the_overlay() {
        let cli = Cli::try_parse_from(["nowplaying-overlay"]).unwrap();

        assert!(cli.is_long_running());
    }

    #[test]
    fn parses_move_with_negative_coordinates() {
        let cli = Cli::try_parse_from([
            "nowplaying-overlay",
            "position",
            "move",
            "-100",
            "20",
            "--area",
            "-1920,0,1920,1080",
        ])
        .unwrap();

        match cli.command {
            Some(Command::Position(PositionCommand::Move { x, y, area })) => {
                assert_eq!((x, y), (-100, 20));
                assert_eq!(area, WorkArea::new(-1920, 0, 1920, 1080));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn rejects_malformed_area() {
        let parsed = Cli::try_parse_from([
            "nowplaying-overlay",
            "position",
            "reset",
            "--area",
            "0,0,wide,tall",
        ]);

        assert!(parsed.is_err());
    }

    #[test]
    fn one_shot_commands_use_the_given_placement_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let file = dir.path().join("placement.json");
        let cli = Cli::try_parse_from([
            "nowplaying-overlay",
            "--placement-file",
            file.to_str().unwrap(),
            "position",
            "lock",
        ])
        .unwrap();

        let output = execute(cli, &Config::default()).unwrap();

        assert_eq!(output, "Position locked");
        assert_eq!(PositionStore::new(&file).load().pos_locked, Some(true));
    }
}
