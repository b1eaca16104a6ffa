use std::{mem, path::PathBuf};

use gridshot_core::{Corner, Digit, Point, Position};

use crate::work::WorkResponse;

pub(crate) mod handler;

#[derive(Debug, derive_more::From)]
pub(crate) enum Action {
    Workflow(WorkflowAction),
    Ui(UiAction),
    Work(WorkAction),
}

/// Actions that drive the capture-to-solution pipeline.
#[derive(Debug)]
pub(crate) enum WorkflowAction {
    AttachImage(PathBuf),
    /// The stage-dependent primary action (upload, re-detect, solve).
    Submit,
    SubmitCorners,
    RunRecognition,
    EnterDigitsManually,
    ConfirmDigits,
    InputDigit(Digit),
    ClearCell,
    PlaceCorner { corner: Corner, to: Point },
    ResetCorners,
    Restart,
}

#[derive(Debug)]
pub(crate) enum UiAction {
    SelectCell(Position),
    ClearSelection,
    MoveSelection(MoveDirection),
    OpenCornerEditor,
    CloseCornerEditor,
    BeginCornerDrag(Corner),
    ReleaseCorner,
    OpenModal(ModalKind),
    CloseModal,
}

/// Completion of a background job, fed back through the queue.
#[derive(Debug)]
pub(crate) enum WorkAction {
    Complete(WorkResponse),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ModalKind {
    RestartConfirm,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MoveDirection {
    Up,
    Down,
    Left,
    Right,
}

impl MoveDirection {
    pub(crate) fn apply_to(self, pos: Position) -> Option<Position> {
        match self {
            Self::Up => pos.up(),
            Self::Down => pos.down(),
            Self::Left => pos.left(),
            Self::Right => pos.right(),
        }
    }
}

#[derive(Debug, Default)]
pub(crate) struct ActionRequestQueue {
    actions: Vec<Action>,
}

impl ActionRequestQueue {
    pub(crate) fn request(&mut self, action: Action) {
        self.actions.push(action);
    }

    pub(crate) fn take_all(&mut self) -> Vec<Action> {
        mem::take(&mut self.actions)
    }
}
