//! Elimination strategies that shrink candidate sets.
//!
//! Each strategy scans the grid for one kind of logical pattern and applies
//! every instance it finds. Strategies never guess: they only remove
//! candidates (or fix a cell to its last remaining candidate), so applying
//! them in any order is sound.

mod naked_subset;
mod only_option;

use std::fmt::Debug;

use pencilmark_core::Grid;

pub use self::{naked_subset::NakedSubset, only_option::OnlyOption};

/// A single propagation rule.
///
/// Implementations must be pure eliminations: `apply` may shrink candidate
/// sets and fix cells, but must never add a candidate back.
pub trait Strategy: Debug {
    /// Returns the human-readable name of the strategy, used in logs.
    fn name(&self) -> &'static str;

    /// Applies the strategy everywhere it matches, returning `true` if any
    /// candidate set changed.
    fn apply(&self, grid: &mut Grid) -> bool;
}

/// An owned, type-erased [`Strategy`].
pub type BoxedStrategy = Box<dyn Strategy>;

/// Returns the full strategy set in application order, cheapest first.
#[must_use]
pub fn all_strategies() -> Vec<BoxedStrategy> {
    vec![
        Box::new(OnlyOption::new()),
        Box::new(NakedSubset::pair()),
        Box::new(NakedSubset::triple()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strategies_are_ordered_cheapest_first() {
        let names: Vec<_> = all_strategies()
            .iter()
            .map(|strategy| strategy.name())
            .collect();
        assert_eq!(names, ["only option", "naked pair", "naked triple"]);
    }
}
