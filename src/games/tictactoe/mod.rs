//! Tic-tac-toe game state and rules.

pub mod action;
pub mod game;
pub mod invariants;
pub mod position;
pub mod rules;
pub mod snapshot;
pub mod types;

pub use action::{Move, MoveError};
pub use game::Game;
pub use position::{Direction, Position};
pub use snapshot::GameSnapshot;
pub use types::{Board, BoardParseError, GameStatus, Player, Square};
