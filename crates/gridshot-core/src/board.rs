//! The 9×9 working board.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use derive_more::{Display, Error};

use crate::{Digit, Position};

/// A 9×9 Sudoku board; empty cells hold `None`.
///
/// Dimensions are fixed for the lifetime of the value and out-of-range
/// digits cannot be stored: the sanitizing constructors coerce anything
/// outside 1-9 to empty at the boundary.
///
/// # Examples
///
/// ```
/// use gridshot_core::{Board, Digit, Position};
///
/// let mut board = Board::new();
/// assert!(!board.is_full());
///
/// board.set(Position::new(2, 3), Some(Digit::D7));
/// assert_eq!(board.get(Position::new(2, 3)), Some(Digit::D7));
///
/// board.set(Position::new(2, 3), None);
/// assert_eq!(board.get(Position::new(2, 3)), None);
/// ```
///
/// Boards parse from a compact 9-line text form used throughout the tests,
/// with `.` (or `0`) for empty cells:
///
/// ```
/// use gridshot_core::Board;
///
/// let board: Board = "\
///     53..7....\n\
///     6..195...\n\
///     .98....6.\n\
///     8...6...3\n\
///     4..8.3..1\n\
///     7...2...6\n\
///     .6....28.\n\
///     ...419..5\n\
///     ....8..79"
///     .parse()
///     .unwrap();
/// assert_eq!(board.to_string().parse::<Board>().unwrap(), board);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board {
    cells: [[Option<Digit>; 9]; 9],
}

impl Board {
    /// Number of rows and columns.
    pub const SIZE: u8 = 9;

    /// Creates an empty board.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: [[None; 9]; 9],
        }
    }

    /// Builds a board from raw rows, sanitizing every value.
    ///
    /// Values 1-9 become digits; 0 and anything out of range become empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridshot_core::{Board, Digit, Position};
    ///
    /// let mut rows = [[0_u8; 9]; 9];
    /// rows[0][0] = 5;
    /// rows[1][1] = 77; // out of range, dropped
    ///
    /// let board = Board::from_rows(rows);
    /// assert_eq!(board.get(Position::new(0, 0)), Some(Digit::D5));
    /// assert_eq!(board.get(Position::new(1, 1)), None);
    /// ```
    #[must_use]
    pub fn from_rows(rows: [[u8; 9]; 9]) -> Self {
        let cells = rows.map(|row| row.map(Digit::try_from_value));
        Self { cells }
    }

    /// Returns the board as raw rows, with 0 for empty cells.
    #[must_use]
    pub fn to_rows(&self) -> [[u8; 9]; 9] {
        self.cells
            .map(|row| row.map(|cell| cell.map_or(0, Digit::value)))
    }

    /// Returns the digit at `pos`, or `None` for an empty cell.
    #[must_use]
    #[inline]
    pub fn get(&self, pos: Position) -> Option<Digit> {
        self.cells[usize::from(pos.row())][usize::from(pos.col())]
    }

    /// Sets or clears the cell at `pos`.
    #[inline]
    pub fn set(&mut self, pos: Position, digit: Option<Digit>) {
        self.cells[usize::from(pos.row())][usize::from(pos.col())] = digit;
    }

    /// Returns whether every cell holds a digit.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(Option::is_some)
    }

    /// Iterates over all cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Position, Option<Digit>)> + '_ {
        Position::ALL.into_iter().map(|pos| (pos, self.get(pos)))
    }
}

/// Error parsing a board from its 9-line text form.
#[derive(Debug, Display, Error, PartialEq, Eq)]
pub enum BoardParseError {
    /// The input did not contain exactly 9 non-empty lines.
    #[display("expected 9 rows, found {found}")]
    WrongRowCount {
        /// Number of non-empty lines found.
        found: usize,
    },
    /// A row did not contain exactly 9 cells.
    #[display("row {row} has {found} cells, expected 9")]
    WrongRowLength {
        /// Row index (0-8).
        row: usize,
        /// Number of characters found in the row.
        found: usize,
    },
    /// A cell character was not a digit, `.`, or `0`.
    #[display("invalid cell character {found:?} at row {row}, column {col}")]
    InvalidCell {
        /// Row index (0-8).
        row: usize,
        /// Column index (0-8).
        col: usize,
        /// The offending character.
        found: char,
    },
}

impl FromStr for Board {
    type Err = BoardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines: Vec<&str> = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        if lines.len() != 9 {
            return Err(BoardParseError::WrongRowCount { found: lines.len() });
        }

        let mut board = Self::new();
        for (row, line) in lines.iter().enumerate() {
            if line.chars().count() != 9 {
                return Err(BoardParseError::WrongRowLength {
                    row,
                    found: line.chars().count(),
                });
            }
            for (col, ch) in line.chars().enumerate() {
                let digit = match ch {
                    '.' | '0' => None,
                    '1'..='9' => {
                        #[expect(clippy::cast_possible_truncation)]
                        let value = ch as u8 - b'0';
                        Digit::try_from_value(value)
                    }
                    _ => {
                        return Err(BoardParseError::InvalidCell { row, col, found: ch });
                    }
                };
                #[expect(clippy::cast_possible_truncation)]
                board.set(Position::new(row as u8, col as u8), digit);
            }
        }
        Ok(board)
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (pos, cell) in self.cells() {
            match cell {
                Some(digit) => write!(f, "{digit}")?,
                None => write!(f, ".")?,
            }
            if pos.col() == 8 && pos.row() != 8 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_new_is_empty() {
        let board = Board::new();
        assert!(board.cells().all(|(_, cell)| cell.is_none()));
        assert!(!board.is_full());
    }

    #[test]
    fn test_from_rows_sanitizes() {
        let mut rows = [[0_u8; 9]; 9];
        rows[0][0] = 1;
        rows[4][4] = 9;
        rows[8][8] = 10;
        rows[3][3] = 255;

        let board = Board::from_rows(rows);
        assert_eq!(board.get(Position::new(0, 0)), Some(Digit::D1));
        assert_eq!(board.get(Position::new(4, 4)), Some(Digit::D9));
        assert_eq!(board.get(Position::new(8, 8)), None);
        assert_eq!(board.get(Position::new(3, 3)), None);
    }

    #[test]
    fn test_parse_and_display_round_trip() {
        let text = "\
            53..7....\n\
            6..195...\n\
            .98....6.\n\
            8...6...3\n\
            4..8.3..1\n\
            7...2...6\n\
            .6....28.\n\
            ...419..5\n\
            ....8..79";
        let board: Board = text.parse().unwrap();
        assert_eq!(board.get(Position::new(0, 0)), Some(Digit::D5));
        assert_eq!(board.get(Position::new(0, 2)), None);
        assert_eq!(board.to_string(), text.replace(' ', ""));
    }

    #[test]
    fn test_parse_accepts_zero_for_empty() {
        let dotted: Board = "\
            53..7....\n\
            6..195...\n\
            .98....6.\n\
            8...6...3\n\
            4..8.3..1\n\
            7...2...6\n\
            .6....28.\n\
            ...419..5\n\
            ....8..79"
            .parse()
            .unwrap();
        let zeroed: Board = "\
            530070000\n\
            600195000\n\
            098000060\n\
            800060003\n\
            400803001\n\
            700020006\n\
            060000280\n\
            000419005\n\
            000080079"
            .parse()
            .unwrap();
        assert_eq!(dotted, zeroed);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "123".parse::<Board>(),
            Err(BoardParseError::WrongRowCount { found: 1 })
        );

        let short_row = "123456789\n".repeat(8) + "12345678";
        assert_eq!(
            short_row.parse::<Board>(),
            Err(BoardParseError::WrongRowLength { row: 8, found: 8 })
        );

        let bad_cell = "12345678x\n".to_owned() + &"123456789\n".repeat(8);
        assert_eq!(
            bad_cell.parse::<Board>(),
            Err(BoardParseError::InvalidCell {
                row: 0,
                col: 8,
                found: 'x'
            })
        );
    }

    #[test]
    fn test_is_full() {
        let mut board = Board::new();
        for pos in Position::ALL {
            board.set(pos, Some(Digit::D1));
        }
        assert!(board.is_full());
        board.set(Position::new(4, 4), None);
        assert!(!board.is_full());
    }

    proptest! {
        #[test]
        fn from_rows_never_stores_out_of_range(rows in any::<[[u8; 9]; 9]>()) {
            let round_tripped = Board::from_rows(rows).to_rows();
            for row in &round_tripped {
                for &value in row {
                    prop_assert!(value <= 9);
                }
            }
        }

        #[test]
        fn from_rows_preserves_in_range_values(rows in any::<[[u8; 9]; 9]>()) {
            let round_tripped = Board::from_rows(rows).to_rows();
            for (orig_row, new_row) in rows.iter().zip(&round_tripped) {
                for (&orig, &new) in orig_row.iter().zip(new_row) {
                    if orig <= 9 {
                        prop_assert_eq!(orig, new);
                    } else {
                        prop_assert_eq!(new, 0);
                    }
                }
            }
        }
    }
}
