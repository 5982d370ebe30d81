//! Core domain types for tic-tac-toe.

use super::position::Position;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the player occupying this square, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }

    /// Returns true if no mark has been placed here.
    pub fn is_empty(self) -> bool {
        self == Square::Empty
    }
}

/// 3x3 tic-tac-toe board.
///
/// Boards are small `Copy` values. Placing a mark yields a new board
/// rather than mutating a shared one, so every derived query works on
/// an immutable snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Sets the square at the given position.
    pub fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Returns a copy of this board with `player`'s mark at `pos`.
    #[must_use]
    pub fn with_mark(mut self, pos: Position, player: Player) -> Self {
        self.set(pos, Square::Occupied(player));
        self
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos).is_empty()
    }

    /// Returns all squares.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Number of occupied squares.
    pub fn move_count(&self) -> usize {
        self.squares.iter().filter(|s| !s.is_empty()).count()
    }

    /// Number of squares holding `player`'s mark.
    pub fn count(&self, player: Player) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(player))
            .count()
    }

    /// Formats the board as a human-readable grid.
    ///
    /// Empty squares show their 1-based number, matching the keys used
    /// to select them.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = match self.squares[pos] {
                    Square::Empty => (pos + 1).to_string(),
                    Square::Occupied(player) => player.to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

/// Error parsing a board from its compact text form.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum BoardParseError {
    /// The input did not contain exactly nine cells.
    #[display("Expected 9 cells, found {}", _0)]
    WrongLength(usize),
    /// A cell character was not one of `X`, `O`, `.`, `-` or space.
    #[display("Unknown cell character {:?}", _0)]
    UnknownCell(char),
}

impl std::error::Error for BoardParseError {}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Parses nine cells in row-major order, e.g. `"XO.X....O"`.
    ///
    /// `/` and newlines are ignored so rows may be separated.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells: Vec<char> = s.chars().filter(|c| !matches!(c, '/' | '\n')).collect();
        if cells.len() != 9 {
            return Err(BoardParseError::WrongLength(cells.len()));
        }

        let mut board = Board::new();
        for (pos, c) in Position::ALL.into_iter().zip(cells) {
            let square = match c {
                'X' | 'x' => Square::Occupied(Player::X),
                'O' | 'o' => Square::Occupied(Player::O),
                '.' | '-' | ' ' => Square::Empty,
                other => return Err(BoardParseError::UnknownCell(other)),
            };
            board.set(pos, square);
        }
        Ok(board)
    }
}

/// Current status of the game, derived from the board.
///
/// The `Display` form is the status line shown to players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum GameStatus {
    /// Game is ongoing; holds the player to move.
    #[display("Next player: {}", _0)]
    InProgress(Player),
    /// Game ended in a win.
    #[display("Winner: {}", _0)]
    Won(Player),
    /// Game ended in a draw.
    #[display("Game Draw!!")]
    Draw,
}

impl GameStatus {
    /// Returns true once the game is won or drawn.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress(_))
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameStatus::Won(player) => Some(*player),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_mark_leaves_original_untouched() {
        let board = Board::new();
        let next = board.with_mark(Position::Center, Player::X);
        assert!(board.is_empty(Position::Center));
        assert_eq!(next.get(Position::Center), Square::Occupied(Player::X));
    }

    #[test]
    fn test_parse_board() {
        let board: Board = "XO./.X./..O".parse().expect("valid board");
        assert_eq!(board.get(Position::TopLeft), Square::Occupied(Player::X));
        assert_eq!(board.get(Position::TopCenter), Square::Occupied(Player::O));
        assert_eq!(board.get(Position::BottomRight), Square::Occupied(Player::O));
        assert_eq!(board.move_count(), 4);
        assert_eq!(board.count(Player::X), 2);
    }

    #[test]
    fn test_parse_board_rejects_bad_input() {
        assert_eq!("XO".parse::<Board>(), Err(BoardParseError::WrongLength(2)));
        assert_eq!("XOZ......".parse::<Board>(), Err(BoardParseError::UnknownCell('Z')));
    }

    #[test]
    fn test_display_grid() {
        let board: Board = "X...O....".parse().expect("valid board");
        assert_eq!(board.display(), "X|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|9");
    }

    #[test]
    fn test_status_text() {
        assert_eq!(GameStatus::InProgress(Player::X).to_string(), "Next player: X");
        assert_eq!(GameStatus::Won(Player::O).to_string(), "Winner: O");
        assert_eq!(GameStatus::Draw.to_string(), "Game Draw!!");
    }

    #[test]
    fn test_status_is_over_and_winner() {
        let in_progress = GameStatus::InProgress(Player::O);
        assert!(!in_progress.is_over());
        assert_eq!(in_progress.winner(), None);

        let won = GameStatus::Won(Player::X);
        assert!(won.is_over());
        assert_eq!(won.winner(), Some(Player::X));

        assert!(GameStatus::Draw.is_over());
        assert_eq!(GameStatus::Draw.winner(), None);
    }
}
