//! Headless replay of a list of moves.

use crate::games::tictactoe::{Game, Position};
use anyhow::{Context, Result, bail};
use tracing::{debug, instrument};

/// Parses moves given as board indices (0-8) or position labels.
pub fn parse_moves(moves: &[String]) -> Result<Vec<Position>> {
    moves
        .iter()
        .map(|s| match Position::from_label_or_number(s) {
            Some(pos) => Ok(pos),
            None => bail!("Unknown square {s:?}: expected 0-8 or a label such as \"center\""),
        })
        .collect()
}

/// Plays `moves` from an empty board and renders the result.
///
/// Moves on occupied squares or after a win are skipped, as in the TUI.
/// Text output is the board grid followed by the status line; JSON output
/// is the game snapshot.
#[instrument]
pub fn play(moves: &[String], json: bool) -> Result<String> {
    let indices: Vec<usize> = parse_moves(moves)?
        .into_iter()
        .map(Position::to_index)
        .collect();
    let game = Game::replay(&indices);
    debug!(
        requested = indices.len(),
        accepted = game.history().len(),
        "Replayed moves"
    );

    if json {
        serde_json::to_string_pretty(&game.snapshot()).context("Failed to serialize game")
    } else {
        Ok(format!("{}\n\n{}", game.board().display(), game.status()))
    }
}
