//! Constraint-propagation Sudoku solving.
//!
//! The solver narrows per-cell candidate sets by applying elimination
//! strategies until none of them makes progress. There is no guessing and no
//! backtracking: every deduction follows logically from the current
//! candidates, so a puzzle either solves completely, gets stuck with some
//! cells still ambiguous, or exposes a contradiction in its givens.
//!
//! # Examples
//!
//! ```
//! use pencilmark_core::Givens;
//! use pencilmark_solver::Solver;
//!
//! let givens: Givens = "53..7....
//!                       6..195...
//!                       .98....6.
//!                       8...6...3
//!                       4..8.3..1
//!                       7...2...6
//!                       .6....28.
//!                       ...419..5
//!                       ....8..79"
//!     .parse()?;
//!
//! let solver = Solver::with_all_strategies();
//! let (grid, outcome) = solver.solve(&givens);
//! assert!(outcome.is_solved());
//! println!("{grid}");
//! # Ok::<(), pencilmark_core::InputError>(())
//! ```

pub mod outcome;
pub mod solver;
pub mod strategy;
pub mod testing;

pub use self::{
    outcome::Outcome,
    solver::Solver,
    strategy::{BoxedStrategy, Strategy, all_strategies},
};
