//! Sudoku digit representation.

use std::fmt::{self, Display};

/// A Sudoku digit in the range 1-9.
///
/// Using an enum rules out invalid digit values at compile time; conversion
/// from untrusted input goes through [`Digit::try_new`].
///
/// # Examples
///
/// ```
/// use pencilmark_core::Digit;
///
/// assert_eq!(Digit::D7.value(), 7);
/// assert_eq!(Digit::try_new(3), Some(Digit::D3));
/// assert_eq!(Digit::try_new(0), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Digit {
    /// The digit 1.
    D1 = 1,
    /// The digit 2.
    D2 = 2,
    /// The digit 3.
    D3 = 3,
    /// The digit 4.
    D4 = 4,
    /// The digit 5.
    D5 = 5,
    /// The digit 6.
    D6 = 6,
    /// The digit 7.
    D7 = 7,
    /// The digit 8.
    D8 = 8,
    /// The digit 9.
    D9 = 9,
}

impl Digit {
    /// All nine digits in ascending order.
    pub const ALL: [Self; 9] = [
        Self::D1,
        Self::D2,
        Self::D3,
        Self::D4,
        Self::D5,
        Self::D6,
        Self::D7,
        Self::D8,
        Self::D9,
    ];

    /// Creates a digit from a value in the range 1-9.
    ///
    /// # Panics
    ///
    /// Panics if `value` is not in the range 1-9. Use [`Digit::try_new`] for
    /// untrusted input.
    #[must_use]
    pub fn new(value: u8) -> Self {
        Self::try_new(value).unwrap_or_else(|| panic!("invalid digit value: {value}"))
    }

    /// Creates a digit from a value, or `None` if it is outside 1-9.
    #[must_use]
    pub const fn try_new(value: u8) -> Option<Self> {
        match value {
            1 => Some(Self::D1),
            2 => Some(Self::D2),
            3 => Some(Self::D3),
            4 => Some(Self::D4),
            5 => Some(Self::D5),
            6 => Some(Self::D6),
            7 => Some(Self::D7),
            8 => Some(Self::D8),
            9 => Some(Self::D9),
            _ => None,
        }
    }

    /// Returns the numeric value of this digit (1-9).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }
}

impl Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.value(), f)
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> u8 {
        digit.value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_value() {
        for digit in Digit::ALL {
            assert_eq!(Digit::new(digit.value()), digit);
            assert_eq!(Digit::try_new(digit.value()), Some(digit));
        }
    }

    #[test]
    fn all_is_ascending() {
        assert_eq!(Digit::ALL.len(), 9);
        for (i, digit) in (1..).zip(Digit::ALL) {
            assert_eq!(digit.value(), i);
        }
    }

    #[test]
    fn rejects_out_of_range_values() {
        assert_eq!(Digit::try_new(0), None);
        assert_eq!(Digit::try_new(10), None);
        assert_eq!(Digit::try_new(255), None);
    }

    #[test]
    #[should_panic(expected = "invalid digit value: 0")]
    fn new_panics_on_zero() {
        let _ = Digit::new(0);
    }

    #[test]
    fn displays_as_its_value() {
        assert_eq!(Digit::D1.to_string(), "1");
        assert_eq!(Digit::D9.to_string(), "9");
    }
}
