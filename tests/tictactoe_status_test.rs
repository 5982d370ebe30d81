//! Status properties checked over every possible board.

use tic_tac_toe::games::tictactoe::rules::{check_winner, is_full, next_player, status};
use tic_tac_toe::{Board, GameStatus, Player, Position, Square};

/// All 3^9 assignments of empty/X/O to the nine squares.
fn all_boards() -> impl Iterator<Item = Board> {
    (0..3usize.pow(9)).map(|mut n| {
        let mut board = Board::new();
        for pos in Position::ALL {
            let square = match n % 3 {
                0 => Square::Empty,
                1 => Square::Occupied(Player::X),
                _ => Square::Occupied(Player::O),
            };
            board.set(pos, square);
            n /= 3;
        }
        board
    })
}

#[test]
fn test_exactly_one_status_holds_for_every_board() {
    for board in all_boards() {
        let text = status(&board).to_string();
        let won = text.starts_with("Winner: ");
        let draw = text == "Game Draw!!";
        let next = text.starts_with("Next player: ");
        assert_eq!(
            [won, draw, next].iter().filter(|b| **b).count(),
            1,
            "{}",
            board.display()
        );
    }
}

#[test]
fn test_status_agrees_with_derived_queries() {
    for board in all_boards() {
        let expected = match check_winner(&board) {
            Some(player) => GameStatus::Won(player),
            None if is_full(&board) => GameStatus::Draw,
            None => GameStatus::InProgress(next_player(&board)),
        };
        assert_eq!(status(&board), expected, "{}", board.display());
    }
}

#[test]
fn test_next_player_follows_filled_count() {
    for board in all_boards() {
        let expected = if board.move_count() % 2 == 0 {
            Player::X
        } else {
            Player::O
        };
        assert_eq!(next_player(&board), expected);
    }
}
