//! Sudoku digit representation.

use std::fmt::{self, Display};

/// A Sudoku digit in the range 1-9.
///
/// Empty cells are represented as `Option::<Digit>::None` rather than a
/// sentinel value, so a stored digit is always valid.
///
/// # Examples
///
/// ```
/// use gridshot_core::Digit;
///
/// let digit = Digit::D5;
/// assert_eq!(digit.value(), 5);
///
/// // Create from a u8 value, rejecting anything outside 1-9
/// assert_eq!(Digit::try_from_value(7), Some(Digit::D7));
/// assert_eq!(Digit::try_from_value(0), None);
///
/// // Iterate over all digits in ascending order
/// for digit in Digit::ALL {
///     assert!((1..=9).contains(&digit.value()));
/// }
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
    /// Array containing all digits from 1 to 9, in ascending order.
    ///
    /// The solver relies on this ordering for its deterministic search.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridshot_core::Digit;
    ///
    /// assert_eq!(Digit::ALL.len(), 9);
    /// assert_eq!(Digit::ALL[0], Digit::D1);
    /// assert_eq!(Digit::ALL[8], Digit::D9);
    /// ```
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

    /// Creates a digit from a u8 value in the range 1-9.
    ///
    /// # Panics
    ///
    /// Panics if `value` is not in the range 1-9.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridshot_core::Digit;
    ///
    /// assert_eq!(Digit::from_value(5), Digit::D5);
    /// ```
    ///
    /// ```should_panic
    /// use gridshot_core::Digit;
    ///
    /// // This will panic
    /// let _ = Digit::from_value(0);
    /// ```
    #[must_use]
    pub fn from_value(value: u8) -> Self {
        Self::try_from_value(value).unwrap_or_else(|| panic!("Invalid digit value: {value}"))
    }

    /// Creates a digit from a u8 value, returning `None` outside 1-9.
    ///
    /// This is the sanitizing entry point used at the wire and input
    /// boundaries, where 0 means empty and anything else is noise.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridshot_core::Digit;
    ///
    /// assert_eq!(Digit::try_from_value(1), Some(Digit::D1));
    /// assert_eq!(Digit::try_from_value(0), None);
    /// assert_eq!(Digit::try_from_value(10), None);
    /// ```
    #[must_use]
    pub const fn try_from_value(value: u8) -> Option<Self> {
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
    ///
    /// # Examples
    ///
    /// ```
    /// use gridshot_core::Digit;
    ///
    /// assert_eq!(Digit::D1.value(), 1);
    /// assert_eq!(Digit::D9.value(), 9);
    /// ```
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Returns the digit as a static string, for rendering.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::D1 => "1",
            Self::D2 => "2",
            Self::D3 => "3",
            Self::D4 => "4",
            Self::D5 => "5",
            Self::D6 => "6",
            Self::D7 => "7",
            Self::D8 => "8",
            Self::D9 => "9",
        }
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
