//! Row, column, and box constraint checks.

use gridshot_core::{Board, Digit, DigitSet, Position};

/// Returns whether `digit` may be placed at `pos` without repeating in the
/// cell's row, column, or 3×3 box.
///
/// Pure and O(9): one scan each of the row, the column, and the box. The
/// queried cell is expected to be empty; already-placed digits are checked
/// with [`is_consistent`] instead.
///
/// # Examples
///
/// ```
/// use gridshot_core::{Board, Digit, Position};
/// use gridshot_solver::is_legal;
///
/// let mut board = Board::new();
/// board.set(Position::new(0, 0), Some(Digit::D5));
///
/// // 5 repeats in row 0, column 0, and the top-left box
/// assert!(!is_legal(&board, Position::new(0, 8), Digit::D5));
/// assert!(!is_legal(&board, Position::new(8, 0), Digit::D5));
/// assert!(!is_legal(&board, Position::new(2, 2), Digit::D5));
///
/// // elsewhere it is fine
/// assert!(is_legal(&board, Position::new(4, 4), Digit::D5));
/// assert!(is_legal(&board, Position::new(0, 8), Digit::D6));
/// ```
#[must_use]
pub fn is_legal(board: &Board, pos: Position, digit: Digit) -> bool {
    for i in 0..9 {
        if board.get(Position::new(pos.row(), i)) == Some(digit)
            || board.get(Position::new(i, pos.col())) == Some(digit)
        {
            return false;
        }
    }

    let origin = pos.box_origin();
    for row in origin.row()..origin.row() + 3 {
        for col in origin.col()..origin.col() + 3 {
            if board.get(Position::new(row, col)) == Some(digit) {
                return false;
            }
        }
    }

    true
}

/// Returns whether no placed digit repeats within any row, column, or box.
///
/// Empty cells are ignored, so a consistent board is not necessarily
/// solvable. The solver runs this before searching so boards with
/// contradictory givens (say, two 5s in one row) fail without any
/// recursion.
///
/// # Examples
///
/// ```
/// use gridshot_core::{Board, Digit, Position};
/// use gridshot_solver::is_consistent;
///
/// let mut board = Board::new();
/// assert!(is_consistent(&board));
///
/// board.set(Position::new(0, 0), Some(Digit::D5));
/// board.set(Position::new(0, 1), Some(Digit::D5));
/// assert!(!is_consistent(&board));
/// ```
#[must_use]
pub fn is_consistent(board: &Board) -> bool {
    for i in 0..9 {
        let mut row_seen = DigitSet::new();
        let mut col_seen = DigitSet::new();
        for j in 0..9 {
            if let Some(digit) = board.get(Position::new(i, j))
                && !row_seen.insert(digit)
            {
                return false;
            }
            if let Some(digit) = board.get(Position::new(j, i))
                && !col_seen.insert(digit)
            {
                return false;
            }
        }
    }

    for box_row in [0, 3, 6] {
        for box_col in [0, 3, 6] {
            let mut seen = DigitSet::new();
            for row in box_row..box_row + 3 {
                for col in box_col..box_col + 3 {
                    if let Some(digit) = board.get(Position::new(row, col))
                        && !seen.insert(digit)
                    {
                        return false;
                    }
                }
            }
        }
    }

    true
}
