//! Test utilities for strategy implementations.
//!
//! [`StrategyTester`] snapshots a grid, applies strategies, and offers
//! assertions that compare the result against the snapshot. All assertions
//! use `#[track_caller]` so failures point at the test, and return `self`
//! for chaining.
//!
//! # Examples
//!
//! ```
//! use pencilmark_core::{Digit, Position};
//! use pencilmark_solver::{strategy::OnlyOption, testing::StrategyTester};
//!
//! let mut grid = StrategyTester::unconstrained_grid();
//! for x in 1..9 {
//!     grid.remove_candidate(Position::new(x, 0), Digit::D5);
//! }
//!
//! StrategyTester::new(grid)
//!     .apply_once(&OnlyOption::new())
//!     .assert_placed(Position::new(0, 0), Digit::D5);
//! ```

use pencilmark_core::{Digit, DigitSet, Givens, Grid, Position};

use crate::{Solver, Strategy};

/// A harness for verifying what a strategy changed.
#[derive(Debug)]
pub struct StrategyTester {
    initial: Grid,
    current: Grid,
}

impl StrategyTester {
    /// Creates a tester around an initial grid state.
    #[must_use]
    pub fn new(initial: Grid) -> Self {
        let current = initial.clone();
        Self { initial, current }
    }

    /// Creates a tester from puzzle text, with candidates already
    /// recalculated from the givens.
    ///
    /// The text format matches [`Givens::from_str`](std::str::FromStr).
    ///
    /// # Panics
    ///
    /// Panics if the text cannot be parsed.
    #[track_caller]
    #[must_use]
    pub fn from_givens(text: &str) -> Self {
        let givens: Givens = text.parse().unwrap();
        let mut grid = Grid::from_givens(&givens);
        Solver::recalculate(&mut grid);
        Self::new(grid)
    }

    /// Returns a grid where every cell has all nine candidates.
    ///
    /// Useful as a neutral starting point that strategies can then be fed
    /// hand-crafted patterns on.
    #[must_use]
    pub fn unconstrained_grid() -> Grid {
        let mut grid = Grid::new();
        for pos in Position::ALL {
            grid.set(pos, DigitSet::FULL);
        }
        grid
    }

    /// Returns the grid in its current state.
    #[must_use]
    pub fn current(&self) -> &Grid {
        &self.current
    }

    /// Applies the strategy once.
    pub fn apply_once<S: Strategy>(mut self, strategy: &S) -> Self {
        let _ = strategy.apply(&mut self.current);
        self
    }

    /// Applies the strategy repeatedly until it stops making progress.
    pub fn apply_until_stuck<S: Strategy>(mut self, strategy: &S) -> Self {
        while strategy.apply(&mut self.current) {}
        self
    }

    /// Asserts that a previously undecided cell is now fixed to `digit`.
    ///
    /// # Panics
    ///
    /// Panics if the cell was already decided, is still undecided, or holds
    /// a different digit.
    #[track_caller]
    pub fn assert_placed(self, pos: Position, digit: Digit) -> Self {
        let initial = self.initial.candidates(pos);
        let current = self.current.candidates(pos);
        assert!(
            initial.len() > 1,
            "expected {pos} to start undecided, but candidates were {initial:?}"
        );
        assert_eq!(
            current.as_single(),
            Some(digit),
            "expected {pos} to be fixed to {digit}, but candidates are {current:?}"
        );
        self
    }

    /// Asserts that all of `digits` were present initially and have been
    /// removed. Other candidates may have been removed too.
    ///
    /// # Panics
    ///
    /// Panics if a digit was missing initially or is still present.
    #[track_caller]
    pub fn assert_removed_includes<C>(self, pos: Position, digits: C) -> Self
    where
        C: IntoIterator<Item = Digit>,
    {
        let digits = DigitSet::from_iter(digits);
        let initial = self.initial.candidates(pos);
        let current = self.current.candidates(pos);
        assert!(
            digits.is_subset(initial),
            "expected initial candidates at {pos} to include {digits:?}, but they were {initial:?}"
        );
        assert!(
            !current.intersects(digits),
            "expected {digits:?} to be gone from {pos}, but candidates are {current:?}"
        );
        self
    }

    /// Asserts that exactly `digits` were removed from the cell, no more and
    /// no less.
    ///
    /// # Panics
    ///
    /// Panics if the removed set differs from `digits`.
    #[track_caller]
    pub fn assert_removed_exact<C>(self, pos: Position, digits: C) -> Self
    where
        C: IntoIterator<Item = Digit>,
    {
        let digits = DigitSet::from_iter(digits);
        let initial = self.initial.candidates(pos);
        let current = self.current.candidates(pos);
        let removed = initial - current;
        assert_eq!(
            removed, digits,
            "expected exactly {digits:?} removed at {pos}, but {removed:?} were \
             (initial {initial:?}, current {current:?})"
        );
        self
    }

    /// Asserts that the cell's candidates are untouched.
    ///
    /// # Panics
    ///
    /// Panics if the candidates changed.
    #[track_caller]
    pub fn assert_no_change(self, pos: Position) -> Self {
        let initial = self.initial.candidates(pos);
        let current = self.current.candidates(pos);
        assert_eq!(
            initial, current,
            "expected no change at {pos}, but candidates went from {initial:?} to {current:?}"
        );
        self
    }
}
