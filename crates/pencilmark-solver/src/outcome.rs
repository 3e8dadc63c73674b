//! The result of running the solver to quiescence.

use derive_more::{Display, IsVariant};
use pencilmark_core::{DigitSet, Position};

/// What the solver concluded about a puzzle.
///
/// The three cases are mutually exclusive: a grid is either fully determined,
/// stuck with at least one ambiguous cell, or logically impossible. Getting
/// stuck is not an error; it means the configured strategies cannot decide
/// the puzzle, not that no solution exists.
#[derive(Debug, Display, IsVariant, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Every cell is definite and no constraint is violated.
    #[display("solved")]
    Solved,
    /// Propagation stalled; the remaining ambiguous cells are listed with
    /// their candidates, in row-major order.
    #[display("stuck with {} ambiguous cells", _0.len())]
    Partial(Vec<(Position, DigitSet)>),
    /// The grid is logically impossible; the position is the cell where the
    /// contradiction surfaced.
    #[display("contradiction at {_0}")]
    Contradiction(Position),
}
