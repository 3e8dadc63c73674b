use log::debug;
use pencilmark_core::{Digit, Grid, House, Position};
use tinyvec::ArrayVec;

use crate::Strategy;

const NAME: &str = "only option";

/// Finds digits with a unique or confined home within a house.
///
/// For every house and digit, this strategy looks at the cells whose
/// candidates still include the digit:
///
/// - If exactly one cell can hold the digit, that cell is fixed to it and
///   the digit is dropped from the cell's 20 peers (a hidden single).
/// - If several cells can hold it and they all lie in a second house as
///   well, the digit is dropped from the rest of that second house (locked
///   candidates, both the pointing and claiming forms).
///
/// # Examples
///
/// ```
/// use pencilmark_core::{Digit, DigitSet, Grid, Position};
/// use pencilmark_solver::strategy::{OnlyOption, Strategy};
///
/// let mut grid = Grid::new();
/// for pos in Position::ALL {
///     grid.set(pos, DigitSet::FULL);
/// }
/// // Digit 5 fits nowhere in row 0 except (8, 0).
/// for x in 0..8 {
///     grid.remove_candidate(Position::new(x, 0), Digit::D5);
/// }
///
/// assert!(OnlyOption::new().apply(&mut grid));
/// assert_eq!(grid.definite(Position::new(8, 0)), Some(Digit::D5));
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct OnlyOption {}

impl OnlyOption {
    /// Creates the strategy.
    #[must_use]
    pub const fn new() -> Self {
        Self {}
    }
}

impl Strategy for OnlyOption {
    fn name(&self) -> &'static str {
        NAME
    }

    fn apply(&self, grid: &mut Grid) -> bool {
        let mut changed = false;
        let houses: Vec<House> = grid.valued_houses().collect();
        for house in houses {
            for digit in Digit::ALL {
                changed |= scan_house(grid, house, digit);
            }
        }
        changed
    }
}

fn scan_house(grid: &mut Grid, house: House, digit: Digit) -> bool {
    let mut holders: ArrayVec<[u8; 9]> = ArrayVec::new();
    for i in 0..9 {
        if grid.contains(house.position_at(i), digit) {
            holders.push(i);
        }
    }
    match holders.as_slice() {
        [] => false,
        &[single] => place_single(grid, house, digit, house.position_at(single)),
        holders => eliminate_confined(grid, house, digit, holders),
    }
}

/// Fixes the sole remaining home of `digit` in `house`, unless the cell is
/// already definite.
fn place_single(grid: &mut Grid, house: House, digit: Digit, pos: Position) -> bool {
    if grid.definite(pos).is_some() {
        return false;
    }
    debug!("{NAME}: {pos} is the only cell for {digit} in {house}");
    grid.place(pos, digit);
    true
}

/// If every holder of `digit` in `house` also lies in a second house, the
/// digit cannot appear anywhere else in that second house.
fn eliminate_confined(grid: &mut Grid, house: House, digit: Digit, holders: &[u8]) -> bool {
    let first = house.position_at(holders[0]);
    let mut changed = false;
    for other in House::containing(first) {
        if other == house {
            continue;
        }
        if !holders
            .iter()
            .all(|&i| other.contains(house.position_at(i)))
        {
            continue;
        }
        // Holder cells all sit inside `house`, so skipping its cells leaves
        // exactly the cells of `other` that cannot hold the digit.
        for pos in other.positions() {
            if !house.contains(pos) && grid.remove_candidate(pos, digit) {
                debug!("{NAME}: {digit} in {house} is confined to {other}, dropped from {pos}");
                changed = true;
            }
        }
    }
    changed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::StrategyTester;

    #[test]
    fn places_hidden_single_in_row() {
        let mut grid = StrategyTester::unconstrained_grid();
        for x in 0..9 {
            if x != 3 {
                grid.remove_candidate(Position::new(x, 0), Digit::D5);
            }
        }

        StrategyTester::new(grid)
            .apply_once(&OnlyOption::new())
            .assert_placed(Position::new(3, 0), Digit::D5);
    }

    #[test]
    fn places_hidden_single_in_column() {
        let mut grid = StrategyTester::unconstrained_grid();
        for y in 0..9 {
            if y != 4 {
                grid.remove_candidate(Position::new(5, y), Digit::D7);
            }
        }

        StrategyTester::new(grid)
            .apply_once(&OnlyOption::new())
            .assert_placed(Position::new(5, 4), Digit::D7);
    }

    #[test]
    fn places_hidden_single_in_box() {
        let mut grid = StrategyTester::unconstrained_grid();
        for pos in (House::Box { index: 4 }).positions() {
            if pos != Position::new(4, 4) {
                grid.remove_candidate(pos, Digit::D9);
            }
        }

        StrategyTester::new(grid)
            .apply_once(&OnlyOption::new())
            .assert_placed(Position::new(4, 4), Digit::D9);
    }

    #[test]
    fn placing_a_single_clears_its_peers() {
        let mut grid = StrategyTester::unconstrained_grid();
        for x in 1..9 {
            grid.remove_candidate(Position::new(x, 0), Digit::D5);
        }

        StrategyTester::new(grid)
            .apply_once(&OnlyOption::new())
            .assert_placed(Position::new(0, 0), Digit::D5)
            .assert_removed_includes(Position::new(0, 8), [Digit::D5])
            .assert_removed_includes(Position::new(1, 1), [Digit::D5]);
    }

    #[test]
    fn already_definite_cell_is_left_alone() {
        let mut grid = StrategyTester::unconstrained_grid();
        for x in 0..9 {
            if x != 3 {
                grid.remove_candidate(Position::new(x, 0), Digit::D5);
            }
        }
        for digit in Digit::ALL {
            if digit != Digit::D5 {
                grid.remove_candidate(Position::new(3, 0), digit);
            }
        }

        StrategyTester::new(grid)
            .apply_once(&OnlyOption::new())
            .assert_no_change(Position::new(3, 0))
            .assert_no_change(Position::new(3, 8));
    }

    #[test]
    fn pointing_holders_clear_the_rest_of_the_box() {
        let mut grid = StrategyTester::unconstrained_grid();
        // D5 in row 0 fits only in the first three cells, all inside box 0.
        for x in 3..9 {
            grid.remove_candidate(Position::new(x, 0), Digit::D5);
        }

        StrategyTester::new(grid)
            .apply_once(&OnlyOption::new())
            .assert_removed_exact(Position::new(0, 1), [Digit::D5])
            .assert_removed_exact(Position::new(2, 2), [Digit::D5])
            .assert_no_change(Position::new(0, 0))
            .assert_no_change(Position::new(4, 4));
    }

    #[test]
    fn claiming_holders_clear_the_rest_of_the_row() {
        let mut grid = StrategyTester::unconstrained_grid();
        // D8 in box 0 fits only in its top row, so row 0 outside the box
        // cannot hold it.
        for pos in (House::Box { index: 0 }).positions() {
            if pos.y() != 0 {
                grid.remove_candidate(pos, Digit::D8);
            }
        }

        StrategyTester::new(grid)
            .apply_once(&OnlyOption::new())
            .assert_removed_exact(Position::new(3, 0), [Digit::D8])
            .assert_removed_exact(Position::new(8, 0), [Digit::D8])
            .assert_no_change(Position::new(0, 0))
            .assert_no_change(Position::new(3, 1));
    }

    #[test]
    fn no_change_on_unconstrained_grid() {
        StrategyTester::new(StrategyTester::unconstrained_grid())
            .apply_once(&OnlyOption::new())
            .assert_no_change(Position::new(0, 0))
            .assert_no_change(Position::new(4, 4));
    }
}
