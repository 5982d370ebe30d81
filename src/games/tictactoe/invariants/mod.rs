//! First-class invariants for tic-tac-toe.
//!
//! Invariants are logical properties that must hold throughout game execution.
//! They are testable independently and checked after every accepted move in
//! debug builds.

pub mod balanced_marks;
pub mod history_matches_board;
pub mod single_winner;

pub use balanced_marks::BalancedMarksInvariant;
pub use history_matches_board::HistoryMatchesBoardInvariant;
pub use single_winner::SingleWinnerInvariant;

use super::{Board, Game};
use tracing::error;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Invariant violated: {}", description)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of invariants over the same state.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns every violation, not just the first.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

type Check<S> = (fn(&S) -> bool, &'static str);

fn collect<S>(checks: &[Check<S>], state: &S) -> Result<(), Vec<InvariantViolation>> {
    let violations: Vec<_> = checks
        .iter()
        .filter(|(holds, _)| !holds(state))
        .map(|(_, description)| InvariantViolation::new(*description))
        .collect();

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let checks: [Check<S>; 2] = [
            (<I1 as Invariant<S>>::holds, <I1 as Invariant<S>>::description()),
            (<I2 as Invariant<S>>::holds, <I2 as Invariant<S>>::description()),
        ];
        collect(&checks, state)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let checks: [Check<S>; 3] = [
            (<I1 as Invariant<S>>::holds, <I1 as Invariant<S>>::description()),
            (<I2 as Invariant<S>>::holds, <I2 as Invariant<S>>::description()),
            (<I3 as Invariant<S>>::holds, <I3 as Invariant<S>>::description()),
        ];
        collect(&checks, state)
    }
}

/// Invariants every reachable board satisfies.
pub type BoardInvariants = (BalancedMarksInvariant, SingleWinnerInvariant);

/// All game invariants as a composable set.
pub type GameInvariants = (
    BalancedMarksInvariant,
    SingleWinnerInvariant,
    HistoryMatchesBoardInvariant,
);

/// Panics if `game` breaks any invariant.
///
/// Only a bug in move handling can trigger this.
#[cfg_attr(not(debug_assertions), allow(dead_code))]
pub(crate) fn assert_invariants(game: &Game) {
    if let Err(violations) = GameInvariants::check_all(game) {
        for violation in &violations {
            error!(%violation, board = ?game.board(), "Game invariant broken");
        }
        panic!("game invariants violated: {violations:?}");
    }
}

/// Board invariants also apply to the board inside a game.
impl Invariant<Game> for BalancedMarksInvariant {
    fn holds(game: &Game) -> bool {
        <Self as Invariant<Board>>::holds(game.board())
    }

    fn description() -> &'static str {
        <Self as Invariant<Board>>::description()
    }
}

impl Invariant<Game> for SingleWinnerInvariant {
    fn holds(game: &Game) -> bool {
        <Self as Invariant<Board>>::holds(game.board())
    }

    fn description() -> &'static str {
        <Self as Invariant<Board>>::description()
    }
}
