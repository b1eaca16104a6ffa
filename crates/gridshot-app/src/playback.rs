//! Animated replay of a solver trace, one step per timer interval.

use std::time::{Duration, Instant};

use gridshot_core::Board;
use gridshot_solver::{SolveOutcome, SolveStep};

/// Replays a solve trace onto a board copy at a fixed pace.
///
/// The playback owns its own board; the confirmed puzzle in the workflow
/// stays untouched so givens can still be told apart from solver digits.
#[derive(Debug)]
pub(crate) struct SolvePlayback {
    board: Board,
    steps: std::vec::IntoIter<SolveStep>,
    solved: bool,
    interval: Duration,
    next_step_at: Option<Instant>,
}

impl SolvePlayback {
    #[must_use]
    pub(crate) fn new(initial: Board, outcome: SolveOutcome, interval: Duration) -> Self {
        Self {
            board: initial,
            steps: outcome.steps.into_iter(),
            solved: outcome.solved,
            interval,
            next_step_at: None,
        }
    }

    #[must_use]
    pub(crate) fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub(crate) fn solved(&self) -> bool {
        self.solved
    }

    #[must_use]
    pub(crate) fn is_finished(&self) -> bool {
        self.steps.len() == 0
    }

    /// Applies the next step if it is due; returns when to tick again.
    ///
    /// `None` means the trace is exhausted and no further repaint is
    /// needed. The first call applies a step immediately.
    pub(crate) fn tick(&mut self, now: Instant) -> Option<Instant> {
        if let Some(due) = self.next_step_at
            && now < due
        {
            return Some(due);
        }
        let Some(step) = self.steps.next() else {
            self.next_step_at = None;
            return None;
        };
        step.apply(&mut self.board);
        if self.is_finished() {
            self.next_step_at = None;
            None
        } else {
            let due = now + self.interval;
            self.next_step_at = Some(due);
            Some(due)
        }
    }
}
