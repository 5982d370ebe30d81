//! Key bindings.

use crate::games::tictactoe::Direction;
use crossterm::event::KeyCode;

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Select the square at a board index (0-8).
    Select(usize),
    /// Move the cursor.
    Cursor(Direction),
    /// Select the square under the cursor.
    Activate,
    /// Clear the board.
    Restart,
    /// Leave the app.
    Quit,
}

/// Maps a key to an action; unbound keys map to `None`.
///
/// Digits 1-9 address squares in reading order.
pub fn action_for(key: KeyCode) -> Option<Action> {
    match key {
        KeyCode::Char(c @ '1'..='9') => c.to_digit(10).map(|d| Action::Select(d as usize - 1)),
        KeyCode::Up | KeyCode::Char('k') => Some(Action::Cursor(Direction::Up)),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::Cursor(Direction::Down)),
        KeyCode::Left | KeyCode::Char('h') => Some(Action::Cursor(Direction::Left)),
        KeyCode::Right | KeyCode::Char('l') => Some(Action::Cursor(Direction::Right)),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::Activate),
        KeyCode::Char('r') => Some(Action::Restart),
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        _ => None,
    }
}
