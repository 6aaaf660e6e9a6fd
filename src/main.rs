//! nowplaying-overlay entry point.

use std::{error::Error, process};

use clap::Parser;
use nowplaying_overlay::{
    cli::{self, Cli, formatting::format_error},
    tracing_config,
};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    let loaded = cli.load_config();
    let log_level = loaded
        .as_ref()
        .map(|config| config.general.log_level)
        .unwrap_or_default();

    let _guard = if cli.is_long_running() {
        let guard = tracing_config::init_with_file(log_level)?;
        info!("Starting nowplaying-overlay");
        Some(guard)
    } else {
        tracing_config::init_cli_mode(log_level)?;
        None
    };

    let config = match loaded {
        Ok(config) => config,
        Err(e) => exit_with(&e),
    };

    if cli.is_long_running() {
        if let Err(e) = cli::run_overlay(config).await {
            exit_with(&e);
        }
        return Ok(());
    }

    match cli::execute(cli, &config) {
        Ok(output) => {
            if !output.trim().is_empty() {
                println!("{output}");
            }
            Ok(())
        }
        Err(e) => exit_with(&e),
    }
}

fn exit_with(error: &cli::CliError) -> ! {
    eprintln!("{}", format_error(&error.to_string()));
    process::exit(1);
}
