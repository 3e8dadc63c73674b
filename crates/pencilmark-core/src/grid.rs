//! The candidate store mapping cells to their possible digits.

use std::fmt::{self, Display};

use crate::{Digit, DigitSet, Givens, House, Position, peers};

/// A 9×9 board of per-cell candidate sets.
///
/// Each cell is either *uncomputed* (`None`, no candidate set derived yet) or
/// holds a [`DigitSet`] of the digits it may still contain. A singleton set
/// marks a definite cell; an empty set marks a contradiction. The distinction
/// between "no set yet" and "all nine digits possible" is deliberate: the
/// solver uses it to tell fresh cells from cells whose candidates it has
/// already narrowed.
///
/// # Examples
///
/// ```
/// use pencilmark_core::{Digit, DigitSet, Grid, Position};
///
/// let mut grid = Grid::new();
/// let center = Position::new(4, 4);
/// grid.place(center, Digit::D5);
///
/// assert_eq!(grid.definite(center), Some(Digit::D5));
/// assert_eq!(grid.get(Position::new(0, 0)), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: [Option<DigitSet>; 81],
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Grid {
    /// Creates a grid with every cell uncomputed.
    #[must_use]
    pub const fn new() -> Self {
        Self { cells: [None; 81] }
    }

    /// Creates a grid with each given placed as a definite cell.
    ///
    /// Only the given cells receive candidate sets; the rest stay uncomputed
    /// until the solver derives their candidates.
    #[must_use]
    pub fn from_givens(givens: &Givens) -> Self {
        let mut grid = Self::new();
        for (pos, digit) in givens.iter() {
            grid.set(pos, DigitSet::singleton(digit));
        }
        grid
    }

    /// Returns the candidate set stored for `pos`, or `None` if the cell is
    /// uncomputed.
    #[must_use]
    pub const fn get(&self, pos: Position) -> Option<DigitSet> {
        self.cells[pos.index()]
    }

    /// Returns the candidates for `pos`, treating an uncomputed cell as if
    /// all nine digits were possible.
    #[must_use]
    pub fn candidates(&self, pos: Position) -> DigitSet {
        self.get(pos).unwrap_or(DigitSet::FULL)
    }

    /// Stores a candidate set for `pos`, replacing any previous set.
    pub const fn set(&mut self, pos: Position, set: DigitSet) {
        self.cells[pos.index()] = Some(set);
    }

    /// Stores `set` for `pos` only if the cell is uncomputed or `set` is
    /// strictly smaller than the stored set. Returns `true` if the cell
    /// changed.
    ///
    /// Candidate sets only ever shrink, so a recomputed set that is not
    /// smaller carries no new information and is discarded.
    pub fn refine(&mut self, pos: Position, set: DigitSet) -> bool {
        match self.get(pos) {
            Some(current) if set.len() >= current.len() => false,
            _ => {
                self.set(pos, set);
                true
            }
        }
    }

    /// Returns `true` if the stored candidates for `pos` include `digit`.
    ///
    /// An uncomputed cell contains nothing.
    #[must_use]
    pub fn contains(&self, pos: Position, digit: Digit) -> bool {
        self.get(pos).is_some_and(|set| set.contains(digit))
    }

    /// Returns the definite digit of `pos`, if its candidate set is a
    /// singleton.
    #[must_use]
    pub fn definite(&self, pos: Position) -> Option<Digit> {
        self.get(pos).and_then(DigitSet::as_single)
    }

    /// Fixes `pos` to `digit` and removes `digit` from the stored candidates
    /// of all 20 peers.
    pub fn place(&mut self, pos: Position, digit: Digit) {
        self.set(pos, DigitSet::singleton(digit));
        for peer in peers(pos) {
            self.remove_candidate(peer, digit);
        }
    }

    /// Removes `digit` from the stored candidates of `pos`, returning `true`
    /// if the set changed. Uncomputed cells are left untouched.
    pub fn remove_candidate(&mut self, pos: Position, digit: Digit) -> bool {
        match &mut self.cells[pos.index()] {
            Some(set) => set.remove(digit),
            None => false,
        }
    }

    /// Removes every digit of `digits` from the stored candidates of `pos`,
    /// returning `true` if the set changed.
    pub fn remove_candidates(&mut self, pos: Position, digits: DigitSet) -> bool {
        match &mut self.cells[pos.index()] {
            Some(set) => {
                let before = *set;
                *set = before - digits;
                *set != before
            }
            None => false,
        }
    }

    /// Iterates over the nine cells of `house` with their candidates, in
    /// cell-index order. Uncomputed cells report all nine digits.
    pub fn house_candidates(&self, house: House) -> impl Iterator<Item = (Position, DigitSet)> + '_ {
        house
            .positions()
            .into_iter()
            .map(|pos| (pos, self.candidates(pos)))
    }

    /// Returns `true` if every cell of `house` has a stored candidate set.
    ///
    /// Strategies only reason about houses whose candidates are fully
    /// computed; a partially computed house could make an elimination that
    /// the missing cells would forbid.
    #[must_use]
    pub fn is_valued(&self, house: House) -> bool {
        house.positions().iter().all(|&pos| self.get(pos).is_some())
    }

    /// Iterates over the houses whose nine cells all have stored candidate
    /// sets.
    pub fn valued_houses(&self) -> impl Iterator<Item = House> + '_ {
        House::ALL
            .into_iter()
            .filter(|&house| self.is_valued(house))
    }

    /// Returns `true` if all 81 cells are definite.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        Position::ALL
            .into_iter()
            .all(|pos| self.definite(pos).is_some())
    }

    /// Returns the cells that are not yet definite, paired with their
    /// candidates, in row-major order.
    ///
    /// Uncomputed cells report all nine digits.
    #[must_use]
    pub fn ambiguous(&self) -> Vec<(Position, DigitSet)> {
        Position::ALL
            .into_iter()
            .filter(|&pos| self.definite(pos).is_none())
            .map(|pos| (pos, self.candidates(pos)))
            .collect()
    }

    /// Searches for a logically impossible state, returning the offending
    /// cell if one exists.
    ///
    /// Two states are contradictory: a cell whose candidate set is empty, and
    /// two definite cells in the same house holding the same digit. The
    /// second case catches conflicting inputs directly, since propagation
    /// never removes a digit from an already definite cell's own set.
    #[must_use]
    pub fn find_contradiction(&self) -> Option<Position> {
        for pos in Position::ALL {
            if self.get(pos).is_some_and(DigitSet::is_empty) {
                return Some(pos);
            }
        }
        for house in House::ALL {
            let mut seen = DigitSet::EMPTY;
            for pos in house.positions() {
                if let Some(digit) = self.definite(pos) {
                    if !seen.insert(digit) {
                        return Some(pos);
                    }
                }
            }
        }
        None
    }
}

impl Display for Grid {
    /// Renders the grid as nine lines of nine characters, using the digit for
    /// definite cells and `.` for everything else.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..9 {
            for x in 0..9 {
                match self.definite(Position::new(x, y)) {
                    Some(digit) => write!(f, "{digit}")?,
                    None => f.write_str(".")?,
                }
            }
            if y < 8 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uncomputed_and_full_are_distinct() {
        let mut grid = Grid::new();
        let pos = Position::new(0, 0);

        assert_eq!(grid.get(pos), None);
        assert_eq!(grid.candidates(pos), DigitSet::FULL);
        assert!(!grid.contains(pos, Digit::D1));

        grid.set(pos, DigitSet::FULL);
        assert_eq!(grid.get(pos), Some(DigitSet::FULL));
        assert!(grid.contains(pos, Digit::D1));
    }

    #[test]
    fn refine_only_accepts_strictly_smaller_sets() {
        let mut grid = Grid::new();
        let pos = Position::new(3, 3);
        let pair = DigitSet::from_iter([Digit::D1, Digit::D2]);
        let other_pair = DigitSet::from_iter([Digit::D8, Digit::D9]);

        assert!(grid.refine(pos, DigitSet::FULL));
        assert!(grid.refine(pos, pair));
        assert!(!grid.refine(pos, other_pair), "same size is rejected");
        assert!(!grid.refine(pos, DigitSet::FULL), "larger is rejected");
        assert_eq!(grid.get(pos), Some(pair));
    }

    #[test]
    fn place_clears_the_digit_from_stored_peers() {
        let mut grid = Grid::new();
        let pos = Position::new(4, 4);
        let row_peer = Position::new(0, 4);
        let untouched = Position::new(0, 0);

        grid.set(row_peer, DigitSet::FULL);
        grid.place(pos, Digit::D5);

        assert_eq!(grid.definite(pos), Some(Digit::D5));
        assert!(!grid.contains(row_peer, Digit::D5));
        assert_eq!(grid.candidates(row_peer).len(), 8);
        assert_eq!(grid.get(untouched), None, "uncomputed peers stay so");
    }

    #[test]
    fn remove_candidates_strips_a_whole_set() {
        let mut grid = Grid::new();
        let pos = Position::new(5, 5);
        grid.set(pos, DigitSet::FULL);

        let pair = DigitSet::from_iter([Digit::D1, Digit::D2]);
        assert!(grid.remove_candidates(pos, pair));
        assert!(!grid.remove_candidates(pos, pair));
        assert_eq!(grid.candidates(pos), DigitSet::FULL - pair);
        assert!(!grid.remove_candidates(Position::new(0, 0), pair));
    }

    #[test]
    fn house_candidates_walks_cells_in_order() {
        let mut grid = Grid::new();
        grid.set(Position::new(0, 2), DigitSet::singleton(Digit::D4));

        let cells: Vec<_> = grid.house_candidates(House::Column { x: 0 }).collect();
        assert_eq!(cells.len(), 9);
        assert_eq!(cells[0], (Position::new(0, 0), DigitSet::FULL));
        assert_eq!(cells[2], (Position::new(0, 2), DigitSet::singleton(Digit::D4)));
    }

    #[test]
    fn valued_houses_requires_all_nine_cells() {
        let mut grid = Grid::new();
        assert_eq!(grid.valued_houses().count(), 0);

        for x in 0..9 {
            grid.set(Position::new(x, 0), DigitSet::FULL);
        }
        let valued: Vec<_> = grid.valued_houses().collect();
        assert_eq!(valued, vec![House::Row { y: 0 }]);
    }

    #[test]
    fn ambiguous_lists_non_definite_cells_in_row_major_order() {
        let mut grid = Grid::new();
        assert_eq!(grid.ambiguous().len(), 81);

        for pos in Position::ALL {
            grid.set(pos, DigitSet::FULL);
        }
        grid.place(Position::new(0, 0), Digit::D1);
        let ambiguous = grid.ambiguous();
        assert_eq!(ambiguous.len(), 80);
        assert_eq!(ambiguous[0].0, Position::new(1, 0));
        assert_eq!(ambiguous[0].1.len(), 8);
    }

    #[test]
    fn empty_candidate_set_is_a_contradiction() {
        let mut grid = Grid::new();
        assert_eq!(grid.find_contradiction(), None);

        let pos = Position::new(2, 6);
        grid.set(pos, DigitSet::EMPTY);
        assert_eq!(grid.find_contradiction(), Some(pos));
    }

    #[test]
    fn duplicate_definite_digits_in_a_house_are_a_contradiction() {
        let mut grid = Grid::new();
        grid.set(Position::new(0, 0), DigitSet::singleton(Digit::D3));
        grid.set(Position::new(8, 0), DigitSet::singleton(Digit::D3));

        assert_eq!(grid.find_contradiction(), Some(Position::new(8, 0)));
    }

    #[test]
    fn is_complete_requires_all_definite() {
        let mut grid = Grid::new();
        assert!(!grid.is_complete());

        // Fill with a valid solved pattern: value = (x + 3*y + y/3) mod 9 + 1.
        for pos in Position::ALL {
            let value = (pos.x() + 3 * pos.y() + pos.y() / 3) % 9 + 1;
            grid.set(pos, DigitSet::singleton(Digit::new(value)));
        }
        assert!(grid.is_complete());
        assert_eq!(grid.find_contradiction(), None);
    }

    #[test]
    fn displays_definite_cells_and_dots() {
        let mut grid = Grid::new();
        grid.place(Position::new(0, 0), Digit::D7);
        grid.set(Position::new(1, 0), DigitSet::FULL);

        let rendered = grid.to_string();
        let lines: Vec<_> = rendered.lines().collect();
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "7........");
        assert_eq!(lines[8], ".........");
    }
}
