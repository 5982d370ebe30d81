//! Single winner invariant: at most one player owns a completed line.

use super::super::rules::LINES;
use super::super::{Board, Square};
use super::Invariant;

/// Invariant: lines completed by both players never coexist.
pub struct SingleWinnerInvariant;

impl Invariant<Board> for SingleWinnerInvariant {
    fn holds(board: &Board) -> bool {
        let mut owners = LINES.iter().filter_map(|[a, b, c]| match board.get(*a) {
            sq @ Square::Occupied(player) if sq == board.get(*b) && sq == board.get(*c) => {
                Some(player)
            }
            _ => None,
        });

        match owners.next() {
            Some(first) => owners.all(|p| p == first),
            None => true,
        }
    }

    fn description() -> &'static str {
        "At most one player has three in a row"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn holds(board: &str) -> bool {
        <SingleWinnerInvariant as Invariant<Board>>::holds(&board.parse().expect("valid board"))
    }

    #[test]
    fn test_one_winner_holds() {
        assert!(holds("XXX/OO./..."));
        // Two lines, same owner.
        assert!(holds("XXX/XOO/XOO"));
    }

    #[test]
    fn test_two_winners_violate() {
        assert!(!holds("XXX/OOO/..."));
    }
}
