use gridshot_core::{Board, Digit, Position};
use gridshot_solver::SolveOutcome;

use crate::{
    action::{Action, ActionRequestQueue, UiAction, WorkAction, WorkflowAction},
    media::AttachedImage,
    playback::SolvePlayback,
    service::{ServiceError, SessionHandle},
    state::{
        AppState, AppStateAccess, AttachedMeta, CornerEditorState, SourceFile, StatusMessage,
        UiState, WorkflowStage,
    },
    work::{FilePayload, GridDetection, Rewarp, WorkRequest, WorkResponse},
};

#[derive(Debug)]
struct ActionContext<'a> {
    app_state: AppStateAccess<'a>,
    ui_state: &'a mut UiState,
}

pub(crate) fn handle_all(
    app_state: &mut AppState,
    ui_state: &mut UiState,
    action_queue: &mut ActionRequestQueue,
) {
    for action in action_queue.take_all() {
        handle(app_state, ui_state, action);
    }
}

pub(crate) fn handle(app_state: &mut AppState, ui_state: &mut UiState, action: Action) {
    let mut ctx = ActionContext {
        app_state: app_state.access(),
        ui_state,
    };
    ctx.handle_action(action);
}

impl ActionContext<'_> {
    fn handle_action(&mut self, action: Action) {
        match action {
            Action::Workflow(action) => self.handle_workflow(action),
            Action::Ui(action) => self.handle_ui(action),
            Action::Work(WorkAction::Complete(response)) => self.apply_work_response(response),
        }
    }

    fn handle_workflow(&mut self, action: WorkflowAction) {
        match action {
            WorkflowAction::AttachImage(path) => self.enqueue(WorkRequest::AttachImage { path }),
            WorkflowAction::Submit => self.submit(),
            WorkflowAction::SubmitCorners => self.submit_corners(),
            WorkflowAction::RunRecognition => self.run_recognition(),
            WorkflowAction::EnterDigitsManually => self.enter_digits_manually(),
            WorkflowAction::ConfirmDigits => self.confirm_digits(),
            WorkflowAction::InputDigit(digit) => self.edit_selected_cell(Some(digit)),
            WorkflowAction::ClearCell => self.edit_selected_cell(None),
            WorkflowAction::PlaceCorner { corner, to } => {
                self.app_state.as_mut().workflow.place_corner(corner, to);
            }
            WorkflowAction::ResetCorners => self.app_state.as_mut().workflow.reset_corners(),
            WorkflowAction::Restart => self.restart(),
        }
    }

    fn handle_ui(&mut self, action: UiAction) {
        const DEFAULT_POSITION: Position = Position::new(0, 0);

        match action {
            UiAction::SelectCell(pos) => self.ui_state.selected_cell = Some(pos),
            UiAction::ClearSelection => self.ui_state.selected_cell = None,
            UiAction::MoveSelection(direction) => {
                let pos = self.ui_state.selected_cell.get_or_insert(DEFAULT_POSITION);
                if let Some(new_pos) = direction.apply_to(*pos) {
                    *pos = new_pos;
                }
            }
            UiAction::OpenCornerEditor => self.open_corner_editor(),
            UiAction::CloseCornerEditor => {
                self.ui_state.corner_editor = CornerEditorState::default();
            }
            UiAction::BeginCornerDrag(corner) => {
                self.ui_state.corner_editor.dragging = Some(corner);
            }
            UiAction::ReleaseCorner => self.ui_state.corner_editor.dragging = None,
            UiAction::OpenModal(kind) => self.ui_state.active_modal = Some(kind),
            UiAction::CloseModal => self.ui_state.active_modal = None,
        }
    }

    /// Hands a request to the worker, surfacing refusals on the status line.
    fn enqueue(&mut self, request: WorkRequest) {
        let epoch = self.app_state.as_ref().workflow.epoch();
        if let Err(err) = self.ui_state.dispatcher.enqueue(epoch, request) {
            log::warn!("could not start background work: {err}");
            self.ui_state.status = StatusMessage::error(err.to_string());
        }
    }

    /// The stage-dependent primary action: upload, recognize, or solve.
    fn submit(&mut self) {
        match self.app_state.as_ref().workflow.stage() {
            WorkflowStage::ImageUpload => self.submit_image(),
            WorkflowStage::GridConfirm => self.run_recognition(),
            WorkflowStage::OcrConfirm => self.confirm_digits(),
            WorkflowStage::VisualSolve => {}
        }
    }

    fn submit_image(&mut self) {
        let payload = self.ui_state.source_file.as_ref().map(|file| FilePayload {
            file_name: file.file_name.clone(),
            bytes: file.bytes.clone(),
        });
        if let Some(payload) = payload {
            self.enqueue(WorkRequest::UploadAndDetect(payload));
            return;
        }
        // A session restored from a previous run has no local file; ask the
        // service to re-run detection on what it already holds.
        let session = self.app_state.as_ref().workflow.session().cloned();
        if let Some(session) = session {
            self.enqueue(WorkRequest::DetectGrid { session });
        } else {
            self.ui_state.status = StatusMessage::error("Please upload an image first.");
        }
    }

    fn run_recognition(&mut self) {
        let session = self.app_state.as_ref().workflow.session().cloned();
        if let Some(session) = session {
            self.enqueue(WorkRequest::RecognizeDigits { session });
        } else {
            self.ui_state.status = StatusMessage::error("Please upload an image first.");
        }
    }

    fn submit_corners(&mut self) {
        let session = self.app_state.as_ref().workflow.session().cloned();
        let Some(session) = session else {
            self.ui_state.status = StatusMessage::error("Please upload an image first.");
            return;
        };
        let Some([width, height]) = self.ui_state.source.size() else {
            self.ui_state.status = StatusMessage::error("Please upload an image first.");
            return;
        };
        #[expect(clippy::cast_precision_loss)]
        let corners = self
            .app_state
            .as_ref()
            .workflow
            .corners()
            .to_native(width as f32, height as f32);
        self.enqueue(WorkRequest::ManualWarp { session, corners });
    }

    fn enter_digits_manually(&mut self) {
        if self.app_state.as_mut().workflow.enter_manual_digits() {
            self.ui_state.corner_editor = CornerEditorState::default();
            self.ui_state.selected_cell = Some(Position::new(0, 0));
            self.ui_state.status =
                StatusMessage::info("Enter the puzzle digits, then press Submit to solve.");
        }
    }

    fn confirm_digits(&mut self) {
        let board = self.app_state.as_mut().workflow.begin_solve();
        if let Some(board) = board {
            self.ui_state.selected_cell = None;
            self.ui_state.playback = None;
            self.enqueue(WorkRequest::Solve { board });
        }
    }

    fn edit_selected_cell(&mut self, digit: Option<Digit>) {
        if let Some(pos) = self.ui_state.selected_cell {
            self.app_state.as_mut().workflow.set_cell(pos, digit);
        }
    }

    fn open_corner_editor(&mut self) {
        if self.ui_state.source.has_image() {
            self.ui_state.corner_editor = CornerEditorState {
                open: true,
                dragging: None,
            };
        } else {
            self.ui_state.status = StatusMessage::error("Please upload an image first.");
        }
    }

    fn restart(&mut self) {
        let app_state = self.app_state.as_mut();
        app_state.workflow.restart();
        log::info!("workflow restarted at epoch {}", app_state.workflow.epoch());
        self.ui_state.active_modal = None;
        self.ui_state.status = StatusMessage::initial();
        self.ui_state.selected_cell = None;
        self.ui_state.source.clear();
        self.ui_state.preview.clear();
        self.ui_state.source_file = None;
        self.ui_state.corner_editor = CornerEditorState::default();
        self.ui_state.playback = None;
    }

    fn apply_work_response(&mut self, response: WorkResponse) {
        match response {
            WorkResponse::ImageAttached(attached) => self.image_attached(*attached),
            WorkResponse::GridDetected(detection) => self.grid_detected(*detection),
            WorkResponse::GridNotFound { session, error } => self.grid_not_found(session, error),
            WorkResponse::PreviewRewarped(rewarp) => self.preview_rewarped(*rewarp),
            WorkResponse::WarpFailed { error } => {
                log::warn!("manual warp failed: {error}");
                self.ui_state.status = StatusMessage::error(error.to_string());
            }
            WorkResponse::DigitsRecognized { board } => self.digits_recognized(board),
            WorkResponse::RecognitionFailed { error } => {
                log::warn!("digit recognition failed: {error}");
                let text = match error {
                    ServiceError::Transport(_) => "Error during OCR.",
                    ServiceError::Rejected { .. } | ServiceError::Malformed { .. } => "OCR failed.",
                };
                self.ui_state.status = StatusMessage::error(text);
            }
            WorkResponse::SolveFinished(outcome) => self.solve_finished(*outcome),
            WorkResponse::Error(error) => {
                log::warn!("background work failed: {error}");
                self.ui_state.status = StatusMessage::error(error.to_string());
            }
        }
    }

    fn image_attached(&mut self, attached: AttachedImage) {
        let AttachedImage {
            file_name,
            bytes,
            color,
        } = attached;
        let native_size = color.size;
        log::info!(
            "attached image {file_name:?} ({}x{})",
            native_size[0],
            native_size[1]
        );
        self.app_state.as_mut().workflow.attach_image(AttachedMeta {
            file_name: file_name.clone(),
            native_size,
        });
        self.ui_state.source.set(color);
        self.ui_state.preview.clear();
        self.ui_state.source_file = Some(SourceFile { file_name, bytes });
        self.ui_state.selected_cell = None;
        self.ui_state.playback = None;
        self.ui_state.corner_editor = CornerEditorState::default();
        self.ui_state.status = StatusMessage::info("Image loaded. Click Submit to proceed.");
    }

    fn grid_detected(&mut self, detection: GridDetection) {
        let GridDetection {
            session,
            preview,
            corners,
        } = detection;
        log::info!("grid detected for session {session}");
        self.app_state.as_mut().workflow.grid_detected(session, corners);
        self.ui_state.preview.set(preview);
        self.ui_state.corner_editor = CornerEditorState::default();
        self.ui_state.status = StatusMessage::success(
            "Grid detected. You can run OCR, or manually select corners if needed.",
        );
        if self.app_state.as_ref().settings.auto_run_recognition {
            self.run_recognition();
        }
    }

    fn grid_not_found(&mut self, session: SessionHandle, error: ServiceError) {
        log::warn!("grid detection failed: {error}");
        self.app_state.as_mut().workflow.detection_failed(session);
        let text = match error {
            ServiceError::Rejected { .. } => {
                "Grid not found. Try setting corners manually, or upload a new image."
            }
            ServiceError::Transport(_) | ServiceError::Malformed { .. } => {
                "Error during grid detection. You can try setting corners or entering digits manually."
            }
        };
        self.ui_state.status = StatusMessage::error(text);
    }

    fn preview_rewarped(&mut self, rewarp: Rewarp) {
        let Rewarp { preview, message } = rewarp;
        self.app_state.as_mut().workflow.preview_rewarped();
        self.ui_state.preview.set(preview);
        self.ui_state.corner_editor = CornerEditorState::default();
        let text = message.unwrap_or_else(|| "Manual warp successful".to_owned());
        self.ui_state.status = StatusMessage::success(text);
    }

    fn digits_recognized(&mut self, board: Board) {
        self.app_state.as_mut().workflow.digits_recognized(board);
        self.ui_state.selected_cell = Some(Position::new(0, 0));
        self.ui_state.status = StatusMessage::info(
            "Check the recognised digits, correct any mistakes, then press Submit to solve.",
        );
    }

    fn solve_finished(&mut self, outcome: SolveOutcome) {
        log::info!(
            "solve finished: solved={}, {} steps",
            outcome.solved,
            outcome.steps.len()
        );
        let app_state = self.app_state.as_ref();
        let initial = app_state.workflow.board().clone();
        let interval = app_state.settings.step_interval;
        self.ui_state.playback = Some(SolvePlayback::new(initial, outcome, interval));
    }
}
