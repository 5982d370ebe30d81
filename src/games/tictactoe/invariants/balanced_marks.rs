//! Balanced marks invariant: X is never behind O, and never two ahead.

use super::super::{Board, Player};
use super::Invariant;

/// Invariant: `count(X) == count(O)` or `count(X) == count(O) + 1`.
///
/// Follows from X moving first and turns alternating.
pub struct BalancedMarksInvariant;

impl Invariant<Board> for BalancedMarksInvariant {
    fn holds(board: &Board) -> bool {
        let x = board.count(Player::X);
        let o = board.count(Player::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "X has as many marks as O, or one more"
    }
}
