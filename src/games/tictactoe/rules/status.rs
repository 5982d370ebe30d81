//! Game status derived from the board.

use super::super::{Board, GameStatus};
use super::{check_winner, is_full, next_player};
use tracing::instrument;

/// Derives the status of `board`.
///
/// A completed line takes precedence over a full board, so a ninth move
/// that completes a line is a win, not a draw.
#[instrument]
pub fn status(board: &Board) -> GameStatus {
    if let Some(winner) = check_winner(board) {
        GameStatus::Won(winner)
    } else if is_full(board) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress(next_player(board))
    }
}
