//! The image-to-solution workflow state machine.

use gridshot_core::{Board, Corner, CornerSet, Digit, Point, Position};

use crate::{service::SessionHandle, work::Epoch};

/// The stage the workflow is in.
///
/// Stages only advance through the transition methods on
/// [`WorkflowState`]; responses that arrive out of order (or after a
/// restart) are rejected by their guards or dropped by the epoch check
/// before they get here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum WorkflowStage {
    /// Waiting for an image and its automatic grid detection.
    ImageUpload,
    /// A warped preview is shown for confirmation or manual correction.
    GridConfirm,
    /// The recognized board is shown for manual correction.
    OcrConfirm,
    /// The solver's step sequence is playing back.
    VisualSolve,
}

/// The source image attached for upload, as the workflow sees it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct AttachedMeta {
    pub(crate) file_name: String,
    /// Native pixel size, used to scale corners for the warp service.
    pub(crate) native_size: [usize; 2],
}

/// Stage, working board, corner quadrilateral, and service session.
///
/// This is the orchestrator's view of the world; anything tied to widgets,
/// textures, or status text lives in `UiState` instead.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct WorkflowState {
    stage: WorkflowStage,
    board: Board,
    corners: CornerSet,
    session: Option<SessionHandle>,
    attached: Option<AttachedMeta>,
    epoch: Epoch,
}

impl WorkflowState {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            stage: WorkflowStage::ImageUpload,
            board: Board::new(),
            corners: CornerSet::default(),
            session: None,
            attached: None,
            epoch: Epoch::default(),
        }
    }

    /// Restores a session persisted by an earlier run.
    ///
    /// The source image is not restored with it, so the workflow starts
    /// back at [`WorkflowStage::ImageUpload`] with re-detection available.
    #[must_use]
    pub(crate) fn resume_session(session: SessionHandle) -> Self {
        let mut state = Self::new();
        state.session = Some(session);
        state
    }

    #[must_use]
    pub(crate) fn stage(&self) -> WorkflowStage {
        self.stage
    }

    #[must_use]
    pub(crate) fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub(crate) fn corners(&self) -> CornerSet {
        self.corners
    }

    #[must_use]
    pub(crate) fn session(&self) -> Option<&SessionHandle> {
        self.session.as_ref()
    }

    #[must_use]
    pub(crate) fn attached(&self) -> Option<&AttachedMeta> {
        self.attached.as_ref()
    }

    #[must_use]
    pub(crate) fn epoch(&self) -> Epoch {
        self.epoch
    }

    /// A fresh image replaces everything tied to the previous one and puts
    /// the workflow back at the upload stage.
    pub(crate) fn attach_image(&mut self, meta: AttachedMeta) {
        self.stage = WorkflowStage::ImageUpload;
        self.board = Board::new();
        self.corners = CornerSet::default();
        self.session = None;
        self.attached = Some(meta);
    }

    /// Applies a successful upload + detection: records the session, seeds
    /// the corner editor from the detected corners, and advances to
    /// [`WorkflowStage::GridConfirm`].
    pub(crate) fn grid_detected(&mut self, session: SessionHandle, detected: [[f32; 2]; 4]) {
        self.session = Some(session);
        self.corners = match &self.attached {
            Some(meta) if meta.native_size[0] > 0 && meta.native_size[1] > 0 => {
                #[expect(clippy::cast_precision_loss)]
                CornerSet::from_native(
                    detected,
                    meta.native_size[0] as f32,
                    meta.native_size[1] as f32,
                )
            }
            // Without a local source image (restored session) the detected
            // corners cannot be normalized; fall back to the default quad.
            _ => CornerSet::default(),
        };
        self.stage = WorkflowStage::GridConfirm;
    }

    /// Records the session of an upload whose detection failed, staying at
    /// the upload stage so both manual paths remain reachable.
    pub(crate) fn detection_failed(&mut self, session: SessionHandle) {
        self.session = Some(session);
    }

    /// A manual re-warp produced a usable preview; enter (or stay in)
    /// [`WorkflowStage::GridConfirm`].
    pub(crate) fn preview_rewarped(&mut self) {
        self.stage = WorkflowStage::GridConfirm;
    }

    /// A recognized board becomes the working board; advance to
    /// [`WorkflowStage::OcrConfirm`].
    pub(crate) fn digits_recognized(&mut self, board: Board) {
        self.board = board;
        self.stage = WorkflowStage::OcrConfirm;
    }

    /// Skips recognition entirely: empty working board, straight to
    /// [`WorkflowStage::OcrConfirm`]. Returns whether the transition was
    /// taken.
    pub(crate) fn enter_manual_digits(&mut self) -> bool {
        if !matches!(
            self.stage,
            WorkflowStage::ImageUpload | WorkflowStage::GridConfirm
        ) {
            return false;
        }
        self.board = Board::new();
        self.stage = WorkflowStage::OcrConfirm;
        true
    }

    /// Edits a cell of the working board. Ignored outside
    /// [`WorkflowStage::OcrConfirm`], the only stage where the board is
    /// user-editable.
    pub(crate) fn set_cell(&mut self, pos: Position, digit: Option<Digit>) {
        if self.stage == WorkflowStage::OcrConfirm {
            self.board.set(pos, digit);
        }
    }

    /// Confirms the digits: returns a copy of the board for the solver and
    /// advances to [`WorkflowStage::VisualSolve`]. Returns `None` outside
    /// [`WorkflowStage::OcrConfirm`].
    #[must_use]
    pub(crate) fn begin_solve(&mut self) -> Option<Board> {
        if self.stage != WorkflowStage::OcrConfirm {
            return None;
        }
        self.stage = WorkflowStage::VisualSolve;
        Some(self.board.clone())
    }

    /// Moves one corner handle, in normalized coordinates.
    pub(crate) fn place_corner(&mut self, corner: Corner, to: Point) {
        self.corners.place(corner, to);
    }

    /// Restores the default corner quadrilateral.
    pub(crate) fn reset_corners(&mut self) {
        self.corners.reset();
    }

    /// Clears everything and bumps the epoch so in-flight work is dropped
    /// when its response arrives.
    pub(crate) fn restart(&mut self) {
        self.epoch.next();
        self.stage = WorkflowStage::ImageUpload;
        self.board = Board::new();
        self.corners = CornerSet::default();
        self.session = None;
        self.attached = None;
    }
}
