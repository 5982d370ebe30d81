//! Game state manager for tic-tac-toe.

use super::action::{Move, MoveError};
use super::position::Position;
use super::rules;
use super::snapshot::GameSnapshot;
use super::types::{Board, GameStatus, Player, Square};
use tracing::{debug, info, instrument};

/// A single tic-tac-toe game.
///
/// The board is the only source of truth. Turn order, winner and status
/// are recomputed from it on every query, so they can never drift out of
/// sync with the squares. The game is an owned value; whoever presents
/// it holds it and mutates it through [`Game::select_square`] and
/// [`Game::restart`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Game {
    pub(crate) board: Board,
    pub(crate) history: Vec<Move>,
}

impl Game {
    /// Creates a new game with an empty board.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Plays `indices` in order from an empty board.
    ///
    /// Entries that would be rejected are skipped, exactly as clicks on
    /// occupied squares or a finished game are.
    #[instrument]
    pub fn replay(indices: &[usize]) -> Self {
        let mut game = Self::new();
        for &index in indices {
            game.select_square(index);
        }
        game
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Accepted moves since the last restart, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// The player whose mark the next accepted move places.
    pub fn next_player(&self) -> Player {
        rules::next_player(&self.board)
    }

    /// The player owning a completed line, if any.
    pub fn winner(&self) -> Option<Player> {
        rules::check_winner(&self.board)
    }

    /// The completed line, if any.
    pub fn winning_line(&self) -> Option<[Position; 3]> {
        rules::winning_line(&self.board).map(|(_, line)| line)
    }

    /// Current status, derived from the board.
    pub fn status(&self) -> GameStatus {
        rules::status(&self.board)
    }

    /// Positions that would accept a move right now.
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.winner().is_some() {
            Vec::new()
        } else {
            Position::valid_moves(&self.board)
        }
    }

    /// Marks the square at `index` for the next player.
    ///
    /// Out-of-range indices, occupied squares and moves after a win are
    /// ignored: the game is left untouched and nothing is reported.
    #[instrument(skip(self), fields(next = %self.next_player()))]
    pub fn select_square(&mut self, index: usize) {
        let result = Position::try_from(index).and_then(|pos| self.place(pos));
        if let Err(reason) = result {
            debug!(index, %reason, "Ignoring square selection");
        }
    }

    /// Marks `pos` for the next player, explaining any rejection.
    ///
    /// On success returns the player who moved.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] if a line is already complete.
    /// - [`MoveError::SquareOccupied`] if `pos` already holds a mark.
    #[instrument(skip(self))]
    pub fn place(&mut self, pos: Position) -> Result<Player, MoveError> {
        if let Some(winner) = self.winner() {
            return Err(MoveError::GameOver(winner));
        }
        if let Square::Occupied(_) = self.board.get(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }

        let player = self.next_player();
        self.board = self.board.with_mark(pos, player);
        self.history.push(Move::new(player, pos));
        debug!(%player, position = %pos, status = %self.status(), "Move accepted");

        #[cfg(debug_assertions)]
        super::invariants::assert_invariants(self);

        Ok(player)
    }

    /// Clears the board. Always succeeds.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        info!(moves = self.history.len(), "Restarting game");
        self.board = Board::new();
        self.history.clear();
    }

    /// Read model of the current game for presentation.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::from(self)
    }
}
