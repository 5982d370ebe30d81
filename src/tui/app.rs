//! Application state and key handling.

use super::input::{action_for, Action};
use crate::games::tictactoe::{Game, Position};
use crossterm::event::KeyCode;
use tracing::{debug, instrument};

/// Main application state.
///
/// Owns the one game being played. Everything shown on screen is read
/// from it; key presses only ever reach it through
/// [`Game::select_square`] and [`Game::restart`].
#[derive(Debug, Default)]
pub struct App {
    game: Game,
    cursor: Position,
    should_quit: bool,
}

impl App {
    /// Creates a new application with an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Square under the cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// True once the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Status line for the current board.
    pub fn status_line(&self) -> String {
        self.game.status().to_string()
    }

    /// Applies one key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) {
        let Some(action) = action_for(key) else {
            return;
        };
        debug!(?action, "Handling key");

        match action {
            Action::Select(index) => {
                if let Some(pos) = Position::from_index(index) {
                    self.cursor = pos;
                }
                self.game.select_square(index);
            }
            Action::Cursor(direction) => self.cursor = self.cursor.step(direction),
            Action::Activate => self.game.select_square(self.cursor.to_index()),
            Action::Restart => {
                self.game.restart();
                self.cursor = Position::default();
            }
            Action::Quit => self.should_quit = true,
        }
    }
}
