//! Tic-tac-toe game state with a terminal front end.
//!
//! # Architecture
//!
//! - **Games**: the board, the rules derived from it, and the [`Game`]
//!   state manager that applies moves and restarts
//! - **TUI**: a thin terminal view that renders a [`Game`] and forwards
//!   key presses to it
//! - **Play**: headless replay of a move list
//!
//! # Example
//!
//! ```
//! use tic_tac_toe::{Game, GameStatus, Player};
//!
//! let mut game = Game::new();
//! for index in [0, 3, 1, 4, 2] {
//!     game.select_square(index);
//! }
//! assert_eq!(game.status(), GameStatus::Won(Player::X));
//! assert_eq!(game.status().to_string(), "Winner: X");
//!
//! // Occupied squares and moves after a win are ignored.
//! let before = game.clone();
//! game.select_square(8);
//! assert_eq!(game, before);
//!
//! game.restart();
//! assert_eq!(game.status().to_string(), "Next player: X");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod play;

pub mod games;
pub mod tui;

// Crate-level exports - Command line
pub use cli::{Cli, Command};

// Crate-level exports - Configuration
pub use config::{AppConfig, ConfigError, DEFAULT_CONFIG_FILE};

// Crate-level exports - Headless play
pub use play::{parse_moves, play};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, BoardParseError, Direction, Game, GameSnapshot, GameStatus, Move, MoveError, Player,
    Position, Square,
};
