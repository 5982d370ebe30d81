//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](super::Board) snapshot. Turn order,
//! winner and status are always derived from the squares on the board,
//! never stored alongside them.

pub mod draw;
pub mod status;
pub mod turn;
pub mod win;

pub use draw::{is_draw, is_full};
pub use status::status;
pub use turn::next_player;
pub use win::{check_winner, winning_line, LINES};
