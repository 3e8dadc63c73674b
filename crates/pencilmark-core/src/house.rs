//! Houses (rows, columns, boxes) and peer queries.

use derive_more::Display;

use crate::Position;

/// A Sudoku house: a row, column, or 3×3 box.
///
/// Houses are identified by their kind and index, so equality and hashing
/// are O(1) over the tag and index rather than over member lists. Two
/// different houses never share all nine cells, so this matches structural
/// equality on membership.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum House {
    /// A row identified by its y coordinate (0-8).
    #[display("row {y}")]
    Row {
        /// Row index (0-8).
        y: u8,
    },
    /// A column identified by its x coordinate (0-8).
    #[display("column {x}")]
    Column {
        /// Column index (0-8).
        x: u8,
    },
    /// A 3×3 box identified by its index (0-8, left to right, top to bottom).
    #[display("box {index}")]
    Box {
        /// Box index (0-8).
        index: u8,
    },
}

impl House {
    /// All 27 houses, in row, column, box order.
    ///
    /// This is the scan order the solver strategies use; it matters only for
    /// which of several equally valid deductions is found first.
    pub const ALL: [Self; 27] = {
        let mut all = [Self::Row { y: 0 }; 27];
        let mut i = 0u8;
        while i < 9 {
            all[i as usize] = Self::Row { y: i };
            all[i as usize + 9] = Self::Column { x: i };
            all[i as usize + 18] = Self::Box { index: i };
            i += 1;
        }
        all
    };

    /// Converts a cell index within the house (0-8) into an absolute
    /// [`Position`].
    ///
    /// # Panics
    ///
    /// Panics if `i` is not in the range 0-8.
    #[must_use]
    pub const fn position_at(self, i: u8) -> Position {
        assert!(i < 9);
        match self {
            House::Row { y } => Position::new(i, y),
            House::Column { x } => Position::new(x, i),
            House::Box { index } => Position::from_box(index, i),
        }
    }

    /// Returns the nine member positions of this house, in cell-index order.
    #[must_use]
    pub const fn positions(self) -> [Position; 9] {
        let mut out = [Position::new(0, 0); 9];
        let mut i = 0u8;
        while i < 9 {
            out[i as usize] = self.position_at(i);
            i += 1;
        }
        out
    }

    /// Returns the row, column, and box through `pos`, in that order.
    #[must_use]
    pub const fn containing(pos: Position) -> [Self; 3] {
        [
            House::Row { y: pos.y() },
            House::Column { x: pos.x() },
            House::Box {
                index: pos.box_index(),
            },
        ]
    }

    /// Returns `true` if `pos` is one of this house's nine cells.
    #[must_use]
    pub const fn contains(self, pos: Position) -> bool {
        match self {
            House::Row { y } => pos.y() == y,
            House::Column { x } => pos.x() == x,
            House::Box { index } => pos.box_index() == index,
        }
    }
}

/// Returns the 20 peers of a cell: every position sharing a row, column, or
/// box with `pos`, excluding `pos` itself.
///
/// The count is invariant for a 9×9 grid: 8 row peers, 8 column peers, and
/// the 4 box cells in neither the same row nor the same column.
#[must_use]
pub const fn peers(pos: Position) -> [Position; 20] {
    let mut out = [pos; 20];
    let mut k = 0;

    let mut x = 0u8;
    while x < 9 {
        if x != pos.x() {
            out[k] = Position::new(x, pos.y());
            k += 1;
        }
        x += 1;
    }

    let mut y = 0u8;
    while y < 9 {
        if y != pos.y() {
            out[k] = Position::new(pos.x(), y);
            k += 1;
        }
        y += 1;
    }

    let mut cell = 0u8;
    while cell < 9 {
        let peer = Position::from_box(pos.box_index(), cell);
        if peer.x() != pos.x() && peer.y() != pos.y() {
            out[k] = peer;
            k += 1;
        }
        cell += 1;
    }

    assert!(k == 20);
    out
}
