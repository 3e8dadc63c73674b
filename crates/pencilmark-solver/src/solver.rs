//! The fixpoint driver that alternates strategies with recalculation.

use log::{debug, trace};
use pencilmark_core::{DigitSet, Givens, Grid, Position, peers};

use crate::{
    Outcome,
    strategy::{BoxedStrategy, all_strategies},
};

/// Runs elimination strategies over a grid until nothing changes.
///
/// One round tries each strategy in order and stops at the first that makes
/// progress, so cheap deductions are always exhausted before expensive ones
/// are attempted. When a whole round stalls, the candidate sets are
/// recalculated from the definite cells; if that uncovers nothing new
/// either, the solver is done.
///
/// # Examples
///
/// ```
/// use pencilmark_core::Givens;
/// use pencilmark_solver::Solver;
///
/// let solver = Solver::with_all_strategies();
/// let (_grid, outcome) = solver.solve(&Givens::new());
/// assert!(outcome.is_partial());
/// ```
#[derive(Debug)]
pub struct Solver {
    strategies: Vec<BoxedStrategy>,
}

impl Default for Solver {
    fn default() -> Self {
        Self::with_all_strategies()
    }
}

impl Solver {
    /// Creates a solver with a custom strategy list, tried in the given
    /// order.
    #[must_use]
    pub fn new(strategies: Vec<BoxedStrategy>) -> Self {
        Self { strategies }
    }

    /// Creates a solver with the full strategy set.
    #[must_use]
    pub fn with_all_strategies() -> Self {
        Self::new(all_strategies())
    }

    /// Returns the configured strategies in application order.
    #[must_use]
    pub fn strategies(&self) -> &[BoxedStrategy] {
        &self.strategies
    }

    /// Runs one round: applies the first strategy that makes progress.
    ///
    /// Returns `false` when no strategy changed the grid.
    pub fn step(&self, grid: &mut Grid) -> bool {
        for strategy in &self.strategies {
            if strategy.apply(grid) {
                debug!("{} made progress", strategy.name());
                return true;
            }
        }
        false
    }

    /// Recomputes every undecided cell's candidates as the nine digits minus
    /// its peers' definite values, keeping the result only when it is
    /// strictly smaller than what is stored.
    ///
    /// Narrowing a cell to a single digit makes it definite for its peers,
    /// so the sweep repeats until it stabilizes. Returns `true` if any cell
    /// changed.
    pub fn recalculate(grid: &mut Grid) -> bool {
        let mut changed = false;
        loop {
            let mut pass_changed = false;
            for pos in Position::ALL {
                if grid.definite(pos).is_some() {
                    continue;
                }
                let mut candidates = DigitSet::FULL;
                for peer in peers(pos) {
                    if let Some(digit) = grid.definite(peer) {
                        candidates.remove(digit);
                    }
                }
                if grid.refine(pos, candidates) {
                    trace!("recalculated {pos}: {candidates:?}");
                    pass_changed = true;
                }
            }
            if !pass_changed {
                break;
            }
            changed = true;
        }
        changed
    }

    /// Solves a puzzle from its givens, returning the final grid together
    /// with the outcome.
    #[must_use]
    pub fn solve(&self, givens: &Givens) -> (Grid, Outcome) {
        let mut grid = Grid::from_givens(givens);
        let outcome = self.solve_grid(&mut grid);
        (grid, outcome)
    }

    /// Drives `grid` to quiescence and classifies the result.
    ///
    /// The grid is checked for contradictions before and after every
    /// mutation phase, so conflicting givens surface as
    /// [`Outcome::Contradiction`] rather than corrupting the propagation.
    pub fn solve_grid(&self, grid: &mut Grid) -> Outcome {
        if let Some(pos) = grid.find_contradiction() {
            return Outcome::Contradiction(pos);
        }
        Self::recalculate(grid);
        loop {
            if let Some(pos) = grid.find_contradiction() {
                return Outcome::Contradiction(pos);
            }
            while self.step(grid) {
                if let Some(pos) = grid.find_contradiction() {
                    return Outcome::Contradiction(pos);
                }
            }
            if !Self::recalculate(grid) {
                break;
            }
            debug!("recalculated candidates, retrying strategies");
        }
        if grid.is_complete() {
            Outcome::Solved
        } else {
            Outcome::Partial(grid.ambiguous())
        }
    }
}
