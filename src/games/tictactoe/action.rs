//! Move records and move rejection reasons.

use super::{Player, Position};
use serde::{Deserialize, Serialize};

/// An accepted move: a player's mark placed at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player who moved.
    pub player: Player,
    /// Where the mark was placed.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())
    }
}

/// Why a move was not applied.
///
/// Clicking a square never fails from the player's point of view; these
/// reasons exist for callers that want to know why nothing happened.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The index does not name a square.
    #[display("Position {} is out of bounds (must be 0-8)", _0)]
    OutOfBounds(usize),

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// A player has already completed a line.
    #[display("Game is already over: {} won", _0)]
    GameOver(Player),
}

impl std::error::Error for MoveError {}
