//! Command-line interface for tic_tac_toe.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tic Tac Toe - two players, one terminal
#[derive(Parser, Debug)]
#[command(name = "tic_tac_toe")]
#[command(about = "Play tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Write logs to this file (overrides the config file)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Play interactively (the default)
    Tui,

    /// Replay moves and print the resulting game
    Play {
        /// Squares in play order: indices 0-8 or labels such as "center"
        moves: Vec<String>,

        /// Print the game as JSON
        #[arg(long)]
        json: bool,
    },
}
