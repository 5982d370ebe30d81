//! Tic Tac Toe - terminal game and headless replay.

use anyhow::{Context, Result};
use clap::Parser;
use std::sync::Arc;
use tic_tac_toe::{AppConfig, Cli, Command};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref())?.with_log_file(cli.log_file);

    match cli.command.unwrap_or(Command::Tui) {
        Command::Tui => {
            init_file_logging(&config)?;
            tic_tac_toe::tui::run_tui()
        }
        Command::Play { moves, json } => {
            init_stderr_logging(&config);
            info!(moves = moves.len(), json, "Replaying moves");
            println!("{}", tic_tac_toe::play(&moves, json)?);
            Ok(())
        }
    }
}

fn env_filter(config: &AppConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_filter()))
}

/// Logs go to a file so they never draw over the TUI.
fn init_file_logging(config: &AppConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file()).with_context(|| {
        format!("Failed to create log file {}", config.log_file().display())
    })?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn init_stderr_logging(config: &AppConfig) {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(std::io::stderr)
        .init();
}
