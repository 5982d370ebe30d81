//! Serializable read model of a game.

use super::{Game, Player, Position};
use serde::{Deserialize, Serialize};

/// Everything a presentation layer reads from a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Marks in row-major order, `None` for empty squares.
    pub squares: [Option<Player>; 9],
    /// The player to move next.
    pub next_player: Player,
    /// The player owning a completed line, if any.
    pub winner: Option<Player>,
    /// The completed line, if any.
    pub winning_line: Option<[Position; 3]>,
    /// The status line, e.g. `"Next player: X"`.
    pub status: String,
}

impl From<&Game> for GameSnapshot {
    fn from(game: &Game) -> Self {
        let status = game.status();
        Self {
            squares: game.board().squares().map(|sq| sq.player()),
            next_player: game.next_player(),
            winner: status.winner(),
            winning_line: game.winning_line(),
            status: status.to_string(),
        }
    }
}
