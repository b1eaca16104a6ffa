//! Deterministic backtracking solver for the Gridshot workflow.
//!
//! The solver scans cells in row-major order and tries digits 1-9 in
//! ascending order, with no heuristics and no randomization, so a given
//! input always explores the same search path and yields the same solution.
//! That trade keeps worst-case cost exponential on adversarial boards but
//! makes the search trivially reproducible and easy to animate.
//!
//! Two entry points:
//!
//! - [`solve`] mutates a board in place and reports success.
//! - [`solve_with_trace`] runs the same search on an internal copy and
//!   records every placement and removal as a [`SolveStep`], for playback.
//!
//! # Examples
//!
//! ```
//! use gridshot_core::Board;
//! use gridshot_solver::{is_consistent, solve};
//!
//! let mut board: Board = "
//!     53..7....
//!     6..195...
//!     .98....6.
//!     8...6...3
//!     4..8.3..1
//!     7...2...6
//!     .6....28.
//!     ...419..5
//!     ....8..79"
//!     .parse()
//!     .unwrap();
//!
//! assert!(solve(&mut board));
//! assert!(board.is_full());
//! assert!(is_consistent(&board));
//! ```

mod backtrack;
mod check;
mod trace;

pub use self::{
    backtrack::solve,
    check::{is_consistent, is_legal},
    trace::{SolveOutcome, SolveStep, solve_with_trace},
};
