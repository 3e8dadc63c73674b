//! Board position (cell coordinate) types.

use std::fmt::{self, Display};

/// An (x, y) cell coordinate on the 9×9 board, each component in 0-8.
///
/// `x` grows to the right and `y` grows downwards; `(0, 0)` is the top-left
/// cell. Positions are `Copy`, hashable, and ordered row-major, so they work
/// as map keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    x: u8,
    y: u8,
}

impl Position {
    /// All 81 positions in row-major order (left to right, top to bottom).
    pub const ALL: [Self; 81] = {
        let mut all = [Self { x: 0, y: 0 }; 81];
        let mut i = 0u8;
        while i < 81 {
            all[i as usize] = Self { x: i % 9, y: i / 9 };
            i += 1;
        }
        all
    };

    /// Creates a position.
    ///
    /// # Panics
    ///
    /// Panics if `x` or `y` is not in the range 0-8.
    #[must_use]
    pub const fn new(x: u8, y: u8) -> Self {
        assert!(x < 9 && y < 9);
        Self { x, y }
    }

    /// Returns the column index (0-8).
    #[must_use]
    pub const fn x(self) -> u8 {
        self.x
    }

    /// Returns the row index (0-8).
    #[must_use]
    pub const fn y(self) -> u8 {
        self.y
    }

    /// Returns the row-major cell index (0-80).
    #[must_use]
    pub const fn index(self) -> usize {
        self.y as usize * 9 + self.x as usize
    }

    /// Returns the index (0-8) of the 3×3 box containing this position.
    ///
    /// Boxes are numbered left to right, top to bottom.
    #[must_use]
    pub const fn box_index(self) -> u8 {
        (self.y / 3) * 3 + self.x / 3
    }

    /// Returns the position of cell `cell` (0-8, row-major within the box)
    /// inside box `box_index` (0-8).
    ///
    /// # Panics
    ///
    /// Panics if either argument is not in the range 0-8.
    #[must_use]
    pub const fn from_box(box_index: u8, cell: u8) -> Self {
        assert!(box_index < 9 && cell < 9);
        Self {
            x: (box_index % 3) * 3 + cell % 3,
            y: (box_index / 3) * 3 + cell / 3,
        }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn all_is_row_major_and_index_matches() {
        for (i, pos) in Position::ALL.iter().enumerate() {
            assert_eq!(pos.index(), i);
        }
        assert_eq!(Position::ALL[0], Position::new(0, 0));
        assert_eq!(Position::ALL[8], Position::new(8, 0));
        assert_eq!(Position::ALL[9], Position::new(0, 1));
        assert_eq!(Position::ALL[80], Position::new(8, 8));
    }

    #[test]
    fn box_index_covers_blocks() {
        assert_eq!(Position::new(0, 0).box_index(), 0);
        assert_eq!(Position::new(8, 0).box_index(), 2);
        assert_eq!(Position::new(4, 4).box_index(), 4);
        assert_eq!(Position::new(0, 8).box_index(), 6);
        assert_eq!(Position::new(8, 8).box_index(), 8);
    }

    #[test]
    fn from_box_round_trips() {
        for box_index in 0..9 {
            for cell in 0..9 {
                let pos = Position::from_box(box_index, cell);
                assert_eq!(pos.box_index(), box_index);
            }
        }
    }

    #[test]
    #[should_panic(expected = "x < 9 && y < 9")]
    fn new_rejects_out_of_range() {
        let _ = Position::new(9, 0);
    }

    #[test]
    fn displays_as_pair() {
        assert_eq!(Position::new(3, 7).to_string(), "(3, 7)");
    }

    proptest! {
        #[test]
        fn index_is_bijective(x in 0u8..9, y in 0u8..9) {
            let pos = Position::new(x, y);
            prop_assert_eq!(Position::ALL[pos.index()], pos);
        }
    }
}
