//! Turn order.

use super::super::{Board, Player};

/// Returns the player whose mark the next accepted move places.
///
/// X moves whenever an even number of squares is filled, so X always
/// opens the game.
pub fn next_player(board: &Board) -> Player {
    if board.move_count() % 2 == 0 {
        Player::X
    } else {
        Player::O
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_x_opens() {
        assert_eq!(next_player(&Board::new()), Player::X);
    }

    #[test]
    fn test_parity_of_filled_squares() {
        let board: Board = "X........".parse().expect("valid board");
        assert_eq!(next_player(&board), Player::O);

        let board: Board = "X...O....".parse().expect("valid board");
        assert_eq!(next_player(&board), Player::X);
    }

    #[test]
    fn test_counts_marks_not_owners() {
        // Only the number of filled squares matters.
        let board: Board = "OO.......".parse().expect("valid board");
        assert_eq!(next_player(&board), Player::X);
    }
}
