//! History invariant: replaying accepted moves rebuilds the board.

use super::super::{Board, Game, Player, Square};
use super::Invariant;

/// Invariant: history replays onto an empty board to give the current board.
///
/// Each recorded move must land on an empty square, players must alternate
/// starting with X, and the result must equal the board the game holds.
/// This covers squares never being overwritten.
pub struct HistoryMatchesBoardInvariant;

impl Invariant<Game> for HistoryMatchesBoardInvariant {
    fn holds(game: &Game) -> bool {
        let mut rebuilt = Board::new();
        let mut expected = Player::X;

        for mov in game.history() {
            if mov.player != expected || rebuilt.get(mov.position) != Square::Empty {
                return false;
            }
            rebuilt = rebuilt.with_mark(mov.position, mov.player);
            expected = expected.opponent();
        }

        rebuilt == *game.board()
    }

    fn description() -> &'static str {
        "Replaying move history reproduces the board"
    }
}
