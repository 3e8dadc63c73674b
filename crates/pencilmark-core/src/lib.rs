//! Core data structures for candidate-based Sudoku solving.
//!
//! This crate provides the primitive model shared by the solver and any
//! front end:
//!
//! - [`Digit`]: type-safe Sudoku digits 1-9
//! - [`DigitSet`]: the set of digits still possible for one cell
//! - [`Position`]: an (x, y) cell coordinate
//! - [`House`]: a row, column, or 3×3 box, plus peer queries
//! - [`Grid`]: the coordinate → candidate-set store
//! - [`Givens`]: the validated known-cell input boundary
//!
//! # Examples
//!
//! ```
//! use pencilmark_core::{Digit, DigitSet, Grid, Position};
//!
//! let mut grid = Grid::new();
//! grid.place(Position::new(4, 4), Digit::D5);
//! grid.set(Position::new(4, 5), DigitSet::FULL);
//!
//! assert_eq!(grid.definite(Position::new(4, 4)), Some(Digit::D5));
//! assert_eq!(grid.definite(Position::new(4, 5)), None);
//! ```

pub mod digit;
pub mod digit_set;
pub mod givens;
pub mod grid;
pub mod house;
pub mod position;

pub use self::{
    digit::Digit,
    digit_set::DigitSet,
    givens::{Givens, InputError},
    grid::Grid,
    house::{House, peers},
    position::Position,
};
