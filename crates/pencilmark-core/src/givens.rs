//! Validated puzzle input: the set of initially known cells.

use std::fmt::{self, Display};
use std::str::FromStr;

use derive_more::{Display as DeriveDisplay, Error};

use crate::{Digit, Position};

/// An error produced while parsing puzzle input.
#[derive(Debug, DeriveDisplay, Error, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
    /// The input contained a character that is neither a digit nor a blank
    /// marker.
    #[display("unexpected character {character:?} in puzzle input")]
    UnexpectedCharacter {
        /// The offending character.
        character: char,
    },
    /// The input did not describe exactly 81 cells.
    #[display("expected 81 cells, found {count}")]
    WrongCellCount {
        /// The number of cells found.
        count: usize,
    },
}

/// The known cells of a puzzle, validated at the input boundary.
///
/// A `Givens` is an immutable map from positions to digits. It exists so the
/// solver can assume its input is structurally valid (in-range coordinates
/// and digits); whether the givens are *logically* consistent is the solver's
/// concern, reported as a contradiction outcome rather than a parse error.
///
/// # Examples
///
/// ```
/// use pencilmark_core::{Digit, Givens, Position};
///
/// let givens: Givens = "53..7....
///                       6..195...
///                       .98....6.
///                       8...6...3
///                       4..8.3..1
///                       7...2...6
///                       .6....28.
///                       ...419..5
///                       ....8..79"
///     .parse()
///     .unwrap();
///
/// assert_eq!(givens.get(Position::new(0, 0)), Some(Digit::D5));
/// assert_eq!(givens.get(Position::new(2, 0)), None);
/// assert_eq!(givens.iter().count(), 30);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Givens {
    cells: [Option<Digit>; 81],
}

impl Default for Givens {
    fn default() -> Self {
        Self::new()
    }
}

impl Givens {
    /// Creates a `Givens` with no known cells.
    #[must_use]
    pub const fn new() -> Self {
        Self { cells: [None; 81] }
    }

    /// Creates a `Givens` from (position, digit) pairs.
    ///
    /// A later pair for the same position overwrites an earlier one.
    #[must_use]
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (Position, Digit)>,
    {
        let mut givens = Self::new();
        for (pos, digit) in pairs {
            givens.cells[pos.index()] = Some(digit);
        }
        givens
    }

    /// Parses a single row-major line of exactly 81 characters, where a
    /// space, `.`, `_`, or `0` marks an unknown cell.
    ///
    /// Unlike the [`FromStr`] implementation this treats spaces as cells, so
    /// it accepts the compact one-line format where blanks are spaces.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::WrongCellCount`] if the line is not 81
    /// characters, or [`InputError::UnexpectedCharacter`] for any character
    /// that is not a digit or blank marker.
    pub fn from_row_major(line: &str) -> Result<Self, InputError> {
        let count = line.chars().count();
        if count != 81 {
            return Err(InputError::WrongCellCount { count });
        }
        let mut cells = [None; 81];
        for (cell, character) in cells.iter_mut().zip(line.chars()) {
            *cell = parse_cell(character)?;
        }
        Ok(Self { cells })
    }

    /// Returns the given digit at `pos`, if any.
    #[must_use]
    pub const fn get(&self, pos: Position) -> Option<Digit> {
        self.cells[pos.index()]
    }

    /// Iterates over the known cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, Digit)> + '_ {
        Position::ALL
            .into_iter()
            .filter_map(|pos| self.get(pos).map(|digit| (pos, digit)))
    }

    /// Returns the number of known cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.iter().flatten().count()
    }

    /// Returns `true` if no cell is known.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }
}

fn parse_cell(character: char) -> Result<Option<Digit>, InputError> {
    match character {
        ' ' | '.' | '_' | '0' => Ok(None),
        '1'..='9' => {
            #[expect(clippy::cast_possible_truncation)]
            let value = character.to_digit(10).unwrap_or(0) as u8;
            Ok(Digit::try_new(value))
        }
        _ => Err(InputError::UnexpectedCharacter { character }),
    }
}

impl FromStr for Givens {
    type Err = InputError;

    /// Parses a puzzle from text containing exactly 81 cell characters.
    ///
    /// Whitespace (including newlines) is ignored, so both a single 81
    /// character line and a nine-line block parse. `.`, `_`, and `0` mark
    /// unknown cells.
    fn from_str(s: &str) -> Result<Self, InputError> {
        let mut cells = [None; 81];
        let mut count = 0usize;
        for character in s.chars().filter(|c| !c.is_whitespace()) {
            if let Some(cell) = cells.get_mut(count) {
                *cell = parse_cell(character)?;
            } else {
                // Validate the overflow character anyway for a better error.
                parse_cell(character)?;
            }
            count += 1;
        }
        if count != 81 {
            return Err(InputError::WrongCellCount { count });
        }
        Ok(Self { cells })
    }
}

impl Display for Givens {
    /// Renders nine lines of nine characters, `.` for unknown cells.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..9 {
            for x in 0..9 {
                match self.get(Position::new(x, y)) {
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
