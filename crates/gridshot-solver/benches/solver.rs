//! Micro-benchmarks for the backtracking solver.
//!
//! This suite measures the in-place search and the traced variant on
//! representative boards, from sparse (hard for brute force) to nearly
//! complete.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench solver
//! ```

use std::hint;

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use gridshot_core::Board;
use gridshot_solver::{solve, solve_with_trace};

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

fn classic_board() -> Board {
    CLASSIC_PUZZLE.parse().unwrap()
}

fn nearly_complete_board() -> Board {
    let mut board = classic_board();
    assert!(solve(&mut board));
    let mut sparse = classic_board();
    // Keep the solver's last row empty so the search still has work to do.
    for (pos, cell) in board.cells() {
        if pos.row() < 8 {
            sparse.set(pos, cell);
        }
    }
    sparse
}

fn bench_solve(c: &mut Criterion) {
    let boards = [
        ("classic", classic_board()),
        ("empty", Board::new()),
        ("nearly_complete", nearly_complete_board()),
    ];

    for (param, board) in boards {
        c.bench_with_input(BenchmarkId::new("solve", param), &board, |b, board| {
            b.iter_batched_ref(
                || hint::black_box(board.clone()),
                |board| {
                    let solved = solve(board);
                    hint::black_box(solved)
                },
                BatchSize::SmallInput,
            );
        });
    }
}

fn bench_solve_with_trace(c: &mut Criterion) {
    let boards = [("classic", classic_board()), ("empty", Board::new())];

    for (param, board) in boards {
        c.bench_with_input(
            BenchmarkId::new("solve_with_trace", param),
            &board,
            |b, board| {
                b.iter(|| {
                    let outcome = solve_with_trace(hint::black_box(board));
                    hint::black_box(outcome.steps.len())
                });
            },
        );
    }
}

criterion_group!(benches, bench_solve, bench_solve_with_trace);
criterion_main!(benches);
