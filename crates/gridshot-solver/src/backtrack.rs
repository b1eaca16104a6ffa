//! Depth-first backtracking search.

use gridshot_core::{Board, Digit, Position};

use crate::check::{is_consistent, is_legal};

/// Solves `board` in place, returning whether a solution was found.
///
/// Cells are filled in row-major order and candidate digits are tried in
/// ascending order, so the result is deterministic for a given input. On
/// success the board holds the completed grid; on failure it is left
/// unchanged.
///
/// Boards whose givens already conflict are rejected up front without
/// searching.
pub fn solve(board: &mut Board) -> bool {
    if !is_consistent(board) {
        return false;
    }
    solve_from(board)
}

fn solve_from(board: &mut Board) -> bool {
    let Some(pos) = first_empty(board) else {
        return true;
    };

    for digit in Digit::ALL {
        if is_legal(board, pos, digit) {
            board.set(pos, Some(digit));
            if solve_from(board) {
                return true;
            }
            board.set(pos, None);
        }
    }

    false
}

pub(crate) fn first_empty(board: &Board) -> Option<Position> {
    Position::ALL
        .into_iter()
        .find(|&pos| board.get(pos).is_none())
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    const CLASSIC_PUZZLE: &str = "
        53..7....
        6..195...
        .98....6.
        8...6...3
        4..8.3..1
        7...2...6
        .6....28.
        ...419..5
        ....8..79";

    const CLASSIC_SOLUTION: &str = "
        534678912
        672195348
        198342567
        859761423
        426853791
        713924856
        961537284
        287419635
        345286179";

    #[test]
    fn test_solve_classic_puzzle() {
        let mut board: Board = CLASSIC_PUZZLE.parse().unwrap();
        assert!(solve(&mut board));
        assert_eq!(board, CLASSIC_SOLUTION.parse().unwrap());
    }

    #[test]
    fn test_solve_preserves_givens() {
        let givens: Board = CLASSIC_PUZZLE.parse().unwrap();
        let mut board = givens.clone();
        assert!(solve(&mut board));
        for (pos, cell) in givens.cells() {
            if cell.is_some() {
                assert_eq!(board.get(pos), cell, "given at {pos} was overwritten");
            }
        }
    }

    #[test]
    fn test_solve_empty_board_is_deterministic() {
        let mut board = Board::new();
        assert!(solve(&mut board));
        // Row-major order with ascending candidates fills the first row
        // with 1..=9.
        for col in 0..9 {
            assert_eq!(
                board.get(Position::new(0, col)),
                Some(Digit::from_value(col + 1))
            );
        }

        let mut again = Board::new();
        assert!(solve(&mut again));
        assert_eq!(board, again);
    }

    #[test]
    fn test_solve_rejects_conflicting_givens() {
        let mut board = Board::new();
        board.set(Position::new(0, 0), Some(Digit::D5));
        board.set(Position::new(0, 8), Some(Digit::D5));
        let before = board.clone();
        assert!(!solve(&mut board));
        assert_eq!(board, before);
    }

    #[test]
    fn test_solve_exhausts_consistent_but_unsolvable() {
        // Row 0 holds 1..=8 leaving only 9 for its last cell, and the 9
        // directly below it makes that placement illegal. Consistency
        // checks pass; the search must fail after exhausting candidates.
        let mut board: Board = "
            .12345678
            9........
            .........
            .........
            .........
            .........
            .........
            .........
            ........."
            .parse()
            .unwrap();
        assert!(is_consistent(&board));
        let before = board.clone();
        assert!(!solve(&mut board));
        assert_eq!(board, before);
    }

    #[test]
    fn test_solve_full_board_is_identity() {
        let mut board: Board = CLASSIC_SOLUTION.parse().unwrap();
        let before = board.clone();
        assert!(solve(&mut board));
        assert_eq!(board, before);
    }

    #[test]
    fn test_first_empty_row_major() {
        let mut board = Board::new();
        assert_eq!(first_empty(&board), Some(Position::new(0, 0)));
        board.set(Position::new(0, 0), Some(Digit::D1));
        assert_eq!(first_empty(&board), Some(Position::new(0, 1)));

        let full: Board = CLASSIC_SOLUTION.parse().unwrap();
        assert_eq!(first_empty(&full), None);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        // Masking cells out of a known solution always leaves a solvable
        // board, and the solver must fill every cell back in legally.
        #[test]
        fn masked_solution_stays_solvable(mask in proptest::collection::vec(any::<bool>(), 81)) {
            let solution: Board = CLASSIC_SOLUTION.parse().unwrap();
            let mut board = solution.clone();
            for (pos, keep) in Position::ALL.into_iter().zip(&mask) {
                if !keep {
                    board.set(pos, None);
                }
            }
            let givens = board.clone();

            prop_assert!(solve(&mut board));
            prop_assert!(board.is_full());
            prop_assert!(is_consistent(&board));
            // Kept givens survive. Freshly filled cells may differ from
            // the original solution when the mask leaves multiple
            // completions.
            for (pos, cell) in givens.cells() {
                if cell.is_some() {
                    prop_assert_eq!(board.get(pos), cell);
                }
            }
        }
    }
}
