use log::debug;
use pencilmark_core::{DigitSet, Grid, House};
use tinyvec::ArrayVec;

use crate::Strategy;

/// Finds `n` cells of a house that together cover at most `n` digits.
///
/// When such a subset exists, those digits must occupy exactly those cells,
/// so they are removed from every other cell of the house. Sizes 2 and 3
/// give the classic naked pair and naked triple patterns; the search is a
/// bounded combination walk over the house's undecided cells, pruned as soon
/// as a partial union grows past `n`.
///
/// # Examples
///
/// ```
/// use pencilmark_core::{Digit, DigitSet, Grid, Position};
/// use pencilmark_solver::strategy::{NakedSubset, Strategy};
///
/// let mut grid = Grid::new();
/// for pos in Position::ALL {
///     grid.set(pos, DigitSet::FULL);
/// }
/// let pair = DigitSet::from_iter([Digit::D1, Digit::D2]);
/// grid.set(Position::new(0, 0), pair);
/// grid.set(Position::new(1, 0), pair);
///
/// assert!(NakedSubset::pair().apply(&mut grid));
/// assert!(!grid.contains(Position::new(5, 0), Digit::D1));
/// assert!(!grid.contains(Position::new(5, 0), Digit::D2));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct NakedSubset {
    size: u8,
}

impl NakedSubset {
    /// Creates the strategy for subsets of `size` cells.
    ///
    /// # Panics
    ///
    /// Panics if `size` is not 2 or 3.
    #[must_use]
    pub const fn new(size: u8) -> Self {
        assert!(size == 2 || size == 3);
        Self { size }
    }

    /// The naked pair strategy.
    #[must_use]
    pub const fn pair() -> Self {
        Self::new(2)
    }

    /// The naked triple strategy.
    #[must_use]
    pub const fn triple() -> Self {
        Self::new(3)
    }

    fn scan_house(self, grid: &mut Grid, house: House) -> bool {
        let n = usize::from(self.size);
        let mut ambiguous = 0usize;
        let mut eligible: ArrayVec<[u8; 9]> = ArrayVec::new();
        for i in 0..9 {
            let candidates = grid.candidates(house.position_at(i));
            if candidates.len() == 1 {
                continue;
            }
            ambiguous += 1;
            if (2..=n).contains(&candidates.len()) {
                eligible.push(i);
            }
        }
        // A subset spanning every undecided cell has nothing to eliminate.
        if ambiguous <= n {
            return false;
        }
        let mut chosen: ArrayVec<[u8; 3]> = ArrayVec::new();
        self.search(grid, house, &eligible, 0, &mut chosen, DigitSet::EMPTY)
    }

    /// Walks `size`-combinations of the eligible cells, pruning any branch
    /// whose candidate union already exceeds `size`.
    fn search(
        self,
        grid: &mut Grid,
        house: House,
        eligible: &[u8],
        start: usize,
        chosen: &mut ArrayVec<[u8; 3]>,
        union: DigitSet,
    ) -> bool {
        if chosen.len() == usize::from(self.size) {
            // A union smaller than the subset is a contradiction in the
            // making; leave it for the driver's consistency check.
            if union.len() == usize::from(self.size) {
                return self.eliminate(grid, house, chosen, union);
            }
            return false;
        }
        let mut changed = false;
        for (k, &cell) in eligible.iter().enumerate().skip(start) {
            let merged = union | grid.candidates(house.position_at(cell));
            if merged.len() > usize::from(self.size) {
                continue;
            }
            chosen.push(cell);
            changed |= self.search(grid, house, eligible, k + 1, chosen, merged);
            chosen.pop();
        }
        changed
    }

    fn eliminate(self, grid: &mut Grid, house: House, chosen: &[u8], union: DigitSet) -> bool {
        let mut changed = false;
        for i in 0..9 {
            if chosen.contains(&i) {
                continue;
            }
            let pos = house.position_at(i);
            if grid.remove_candidates(pos, union) {
                debug!(
                    "{}: {union:?} is locked into {} cells of {house}, dropped from {pos}",
                    self.name(),
                    self.size,
                );
                changed = true;
            }
        }
        changed
    }
}

impl Strategy for NakedSubset {
    fn name(&self) -> &'static str {
        match self.size {
            2 => "naked pair",
            _ => "naked triple",
        }
    }

    fn apply(&self, grid: &mut Grid) -> bool {
        let mut changed = false;
        let houses: Vec<House> = grid.valued_houses().collect();
        for house in houses {
            changed |= self.scan_house(grid, house);
        }
        changed
    }
}
