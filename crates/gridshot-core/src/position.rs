//! Row/column cell coordinates on the 9×9 grid.

use std::fmt::{self, Display};

/// A cell position on the board, with row and column in the range 0-8.
///
/// Rows count from the top, columns from the left, matching the row-major
/// order in which the solver scans the board.
///
/// # Examples
///
/// ```
/// use gridshot_core::Position;
///
/// let pos = Position::new(4, 7);
/// assert_eq!(pos.row(), 4);
/// assert_eq!(pos.col(), 7);
///
/// // Top-left corner of the 3×3 box containing the cell
/// assert_eq!(pos.box_origin(), Position::new(3, 6));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// All 81 positions in row-major order (row 0 col 0 through row 8 col 8).
    ///
    /// # Examples
    ///
    /// ```
    /// use gridshot_core::Position;
    ///
    /// assert_eq!(Position::ALL.len(), 81);
    /// assert_eq!(Position::ALL[0], Position::new(0, 0));
    /// assert_eq!(Position::ALL[80], Position::new(8, 8));
    /// ```
    pub const ALL: [Self; 81] = {
        let mut all = [Self { row: 0, col: 0 }; 81];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 81 {
            all[i] = Self {
                row: (i / 9) as u8,
                col: (i % 9) as u8,
            };
            i += 1;
        }
        all
    };

    /// Creates a position from row and column indices.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not in the range 0-8.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridshot_core::Position;
    ///
    /// let pos = Position::new(0, 8);
    /// assert_eq!(pos.row(), 0);
    /// assert_eq!(pos.col(), 8);
    /// ```
    ///
    /// ```should_panic
    /// use gridshot_core::Position;
    ///
    /// // This will panic
    /// let _ = Position::new(9, 0);
    /// ```
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        assert!(row < 9, "Row index must be 0-8");
        assert!(col < 9, "Column index must be 0-8");
        Self { row, col }
    }

    /// Returns the row index (0-8).
    #[must_use]
    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Returns the column index (0-8).
    #[must_use]
    #[inline]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Returns the top-left position of the 3×3 box containing this cell.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridshot_core::Position;
    ///
    /// assert_eq!(Position::new(0, 0).box_origin(), Position::new(0, 0));
    /// assert_eq!(Position::new(5, 5).box_origin(), Position::new(3, 3));
    /// assert_eq!(Position::new(8, 2).box_origin(), Position::new(6, 0));
    /// ```
    #[must_use]
    pub const fn box_origin(self) -> Self {
        Self {
            row: (self.row / 3) * 3,
            col: (self.col / 3) * 3,
        }
    }

    /// Returns the position one row up, or `None` at the top edge.
    #[must_use]
    pub const fn up(self) -> Option<Self> {
        if self.row == 0 {
            None
        } else {
            Some(Self {
                row: self.row - 1,
                col: self.col,
            })
        }
    }

    /// Returns the position one row down, or `None` at the bottom edge.
    #[must_use]
    pub const fn down(self) -> Option<Self> {
        if self.row == 8 {
            None
        } else {
            Some(Self {
                row: self.row + 1,
                col: self.col,
            })
        }
    }

    /// Returns the position one column left, or `None` at the left edge.
    #[must_use]
    pub const fn left(self) -> Option<Self> {
        if self.col == 0 {
            None
        } else {
            Some(Self {
                row: self.row,
                col: self.col - 1,
            })
        }
    }

    /// Returns the position one column right, or `None` at the right edge.
    #[must_use]
    pub const fn right(self) -> Option<Self> {
        if self.col == 8 {
            None
        } else {
            Some(Self {
                row: self.row,
                col: self.col + 1,
            })
        }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "r{}c{}", self.row, self.col)
    }
}
