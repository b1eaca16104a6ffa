//! A compact set of Sudoku digits.
//!
//! [`DigitSet`] packs membership of the nine digits into a single `u16`,
//! which makes the duplicate scans in the consistency checker a couple of
//! bit operations per cell.
//!
//! # Examples
//!
//! ```
//! use gridshot_core::{Digit, DigitSet};
//!
//! let mut seen = DigitSet::EMPTY;
//! assert!(seen.insert(Digit::D5));
//! assert!(!seen.insert(Digit::D5)); // second insert reports the duplicate
//! assert!(seen.contains(Digit::D5));
//! assert_eq!(seen.len(), 1);
//! ```

use crate::Digit;

/// A set of digits 1-9 backed by a 9-bit mask.
///
/// Bits 0-8 represent digits 1-9 respectively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DigitSet(u16);

impl DigitSet {
    /// The empty set.
    pub const EMPTY: Self = Self(0);

    /// The set containing every digit 1-9.
    ///
    /// A house on a solved board collects to exactly this set.
    pub const FULL: Self = Self(0x1FF);

    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    const fn bit(digit: Digit) -> u16 {
        1 << (digit.value() - 1)
    }

    /// Inserts a digit, returning `false` if it was already present.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridshot_core::{Digit, DigitSet};
    ///
    /// let mut set = DigitSet::new();
    /// assert!(set.insert(Digit::D3));
    /// assert!(!set.insert(Digit::D3));
    /// ```
    pub const fn insert(&mut self, digit: Digit) -> bool {
        let bit = Self::bit(digit);
        let newly = self.0 & bit == 0;
        self.0 |= bit;
        newly
    }

    /// Returns whether the set contains `digit`.
    #[must_use]
    pub const fn contains(self, digit: Digit) -> bool {
        self.0 & Self::bit(digit) != 0
    }

    /// Returns the number of digits in the set.
    #[must_use]
    pub const fn len(self) -> u32 {
        self.0.count_ones()
    }

    /// Returns whether the set is empty.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl FromIterator<Digit> for DigitSet {
    fn from_iter<I: IntoIterator<Item = Digit>>(iter: I) -> Self {
        let mut set = Self::new();
        for digit in iter {
            set.insert(digit);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_contains() {
        let mut set = DigitSet::new();
        assert!(set.is_empty());
        assert!(set.insert(Digit::D1));
        assert!(set.insert(Digit::D9));
        assert!(!set.insert(Digit::D1));
        assert!(set.contains(Digit::D1));
        assert!(set.contains(Digit::D9));
        assert!(!set.contains(Digit::D5));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_from_iter() {
        let set: DigitSet = [Digit::D1, Digit::D5, Digit::D9, Digit::D5]
            .into_iter()
            .collect();
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn test_constants() {
        assert_eq!(DigitSet::EMPTY.len(), 0);
        assert_eq!(DigitSet::FULL.len(), 9);
        for digit in Digit::ALL {
            assert!(DigitSet::FULL.contains(digit));
            assert!(!DigitSet::EMPTY.contains(digit));
        }
    }

    #[test]
    fn test_full_from_all_digits() {
        let set: DigitSet = Digit::ALL.into_iter().collect();
        assert_eq!(set, DigitSet::FULL);
    }
}
