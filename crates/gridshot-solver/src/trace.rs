//! Backtracking search that records every placement and removal.

use gridshot_core::{Board, Digit, Position};

use crate::backtrack::first_empty;
use crate::check::{is_consistent, is_legal};

/// One attempted cell mutation during the search.
///
/// `digit` is `Some` when the solver wrote a candidate into the cell and
/// `None` when it backtracked and cleared it again. Replaying every step
/// against the starting board reproduces the search exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolveStep {
    /// Cell the solver touched.
    pub pos: Position,
    /// Digit written, or `None` for a backtracking erase.
    pub digit: Option<Digit>,
}

impl SolveStep {
    /// Applies this step to `board`.
    pub fn apply(self, board: &mut Board) {
        board.set(self.pos, self.digit);
    }
}

/// Result of [`solve_with_trace`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveOutcome {
    /// Whether the search reached a complete grid.
    pub solved: bool,
    /// Every placement and removal, in the order the solver made them.
    pub steps: Vec<SolveStep>,
    /// Board state after the search ended.
    pub final_board: Board,
}

/// Runs the backtracking search on a copy of `board`, recording each step.
///
/// The input board is not modified. The recorded steps include dead ends:
/// a cell may be written and erased many times before the search settles.
/// Boards with conflicting givens fail immediately with an empty trace,
/// and `final_board` then equals the input.
#[must_use]
pub fn solve_with_trace(board: &Board) -> SolveOutcome {
    let mut work = board.clone();
    let mut steps = Vec::new();

    let solved = is_consistent(&work) && backtrack_traced(&mut work, &mut steps);
    SolveOutcome {
        solved,
        steps,
        final_board: work,
    }
}

fn backtrack_traced(board: &mut Board, steps: &mut Vec<SolveStep>) -> bool {
    let Some(pos) = first_empty(board) else {
        return true;
    };

    for digit in Digit::ALL {
        if is_legal(board, pos, digit) {
            board.set(pos, Some(digit));
            steps.push(SolveStep {
                pos,
                digit: Some(digit),
            });
            if backtrack_traced(board, steps) {
                return true;
            }
            board.set(pos, None);
            steps.push(SolveStep { pos, digit: None });
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solve;

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

    #[test]
    fn test_trace_leaves_input_untouched() {
        let board: Board = CLASSIC_PUZZLE.parse().unwrap();
        let before = board.clone();
        let outcome = solve_with_trace(&board);
        assert!(outcome.solved);
        assert_eq!(board, before);
    }

    #[test]
    fn test_trace_agrees_with_plain_solve() {
        let board: Board = CLASSIC_PUZZLE.parse().unwrap();
        let outcome = solve_with_trace(&board);

        let mut solved = board.clone();
        assert!(solve(&mut solved));
        assert_eq!(outcome.final_board, solved);
    }

    #[test]
    fn test_replaying_steps_reproduces_final_board() {
        let board: Board = CLASSIC_PUZZLE.parse().unwrap();
        let outcome = solve_with_trace(&board);
        assert!(outcome.solved);

        let mut replay = board.clone();
        for step in &outcome.steps {
            step.apply(&mut replay);
        }
        assert_eq!(replay, outcome.final_board);
    }

    #[test]
    fn test_steps_never_touch_givens() {
        let board: Board = CLASSIC_PUZZLE.parse().unwrap();
        let outcome = solve_with_trace(&board);
        for step in &outcome.steps {
            assert!(
                board.get(step.pos).is_none(),
                "step wrote to given cell {}",
                step.pos
            );
        }
    }

    #[test]
    fn test_conflicting_givens_yield_empty_trace() {
        let mut board = Board::new();
        board.set(Position::new(3, 0), Some(Digit::D5));
        board.set(Position::new(3, 8), Some(Digit::D5));

        let outcome = solve_with_trace(&board);
        assert!(!outcome.solved);
        assert!(outcome.steps.is_empty());
        assert_eq!(outcome.final_board, board);
    }

    #[test]
    fn test_exhausted_search_records_balanced_steps() {
        // Consistent givens with no completion: every placement must be
        // matched by a removal, restoring the starting board.
        let board: Board = "
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

        let outcome = solve_with_trace(&board);
        assert!(!outcome.solved);
        assert!(!outcome.steps.is_empty());
        assert_eq!(outcome.final_board, board);

        let placements = outcome.steps.iter().filter(|s| s.digit.is_some()).count();
        let removals = outcome.steps.len() - placements;
        assert_eq!(placements, removals);
    }

    #[test]
    fn test_solved_trace_has_more_placements_than_removals() {
        let board: Board = CLASSIC_PUZZLE.parse().unwrap();
        let outcome = solve_with_trace(&board);
        let placements = outcome.steps.iter().filter(|s| s.digit.is_some()).count();
        let removals = outcome.steps.len() - placements;

        let empty_cells = board.cells().filter(|(_, cell)| cell.is_none()).count();
        assert_eq!(placements - removals, empty_cells);
    }

    #[test]
    fn test_full_board_trace_is_empty() {
        let mut board: Board = CLASSIC_PUZZLE.parse().unwrap();
        assert!(solve(&mut board));

        let outcome = solve_with_trace(&board);
        assert!(outcome.solved);
        assert!(outcome.steps.is_empty());
        assert_eq!(outcome.final_board, board);
    }
}
