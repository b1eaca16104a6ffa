use eframe::egui::TextureHandle;
use gridshot_core::{Board, Position};

use crate::{
    playback::SolvePlayback,
    state::{AppState, StatusMessage, UiState, WorkflowStage, WorkflowState},
    ui::{
        board_grid::{BoardGridViewModel, CellVisualState, GridCell},
        corner_editor::CornerEditorViewModel,
        grid_confirm_view::GridConfirmViewModel,
        ocr_confirm_view::OcrConfirmViewModel,
        solve_view::SolveViewModel,
        status_line::StatusLineViewModel,
        upload_view::UploadViewModel,
        workflow_screen::{StageViewModel, WorkflowScreenViewModel},
    },
};

#[must_use]
pub(crate) fn build_workflow_screen_view_model(
    app_state: &AppState,
    ui_state: &UiState,
    source: Option<TextureHandle>,
    preview: Option<TextureHandle>,
) -> WorkflowScreenViewModel {
    let workflow = &app_state.workflow;
    let status_vm = StatusLineViewModel::new(build_status(
        workflow.stage(),
        ui_state.playback.as_ref(),
        &ui_state.status,
    ));

    let stage_vm = match workflow.stage() {
        WorkflowStage::ImageUpload => {
            let corner_editor = build_corner_editor(workflow, ui_state, source.as_ref());
            let can_submit = ui_state.source_file.is_some() || workflow.session().is_some();
            let can_adjust_corners = source.is_some();
            StageViewModel::Upload(UploadViewModel {
                source,
                file_name: ui_state
                    .source_file
                    .as_ref()
                    .map(|file| file.file_name.clone()),
                can_submit,
                can_adjust_corners,
                corner_editor,
            })
        }
        WorkflowStage::GridConfirm => {
            let corner_editor = build_corner_editor(workflow, ui_state, source.as_ref());
            StageViewModel::GridConfirm(GridConfirmViewModel {
                preview,
                can_adjust_corners: source.is_some(),
                corner_editor,
            })
        }
        WorkflowStage::OcrConfirm => StageViewModel::OcrConfirm(OcrConfirmViewModel {
            grid_vm: BoardGridViewModel::new(
                edit_grid_cells(workflow.board(), ui_state.selected_cell),
                true,
            ),
        }),
        WorkflowStage::VisualSolve => {
            let display = ui_state
                .playback
                .as_ref()
                .map_or(workflow.board(), SolvePlayback::board);
            StageViewModel::Solve(SolveViewModel {
                grid_vm: BoardGridViewModel::new(
                    solve_grid_cells(workflow.board(), display),
                    false,
                ),
            })
        }
    };

    WorkflowScreenViewModel { stage_vm, status_vm }
}

fn build_corner_editor(
    workflow: &WorkflowState,
    ui_state: &UiState,
    source: Option<&TextureHandle>,
) -> Option<CornerEditorViewModel> {
    if !ui_state.corner_editor.open {
        return None;
    }
    let source = source?;
    Some(CornerEditorViewModel {
        source: source.clone(),
        corners: workflow.corners(),
        dragging: ui_state.corner_editor.dragging,
    })
}

/// During playback the status line reflects the solve itself; everywhere
/// else it shows whatever the last action left behind.
fn build_status(
    stage: WorkflowStage,
    playback: Option<&SolvePlayback>,
    status: &StatusMessage,
) -> StatusMessage {
    if stage != WorkflowStage::VisualSolve {
        return status.clone();
    }
    match playback {
        Some(playback) if playback.is_finished() => {
            if playback.solved() {
                StatusMessage::success("Sudoku solved!")
            } else {
                StatusMessage::error(
                    "This Sudoku puzzle is unsolvable, or the digits were not recognised correctly.",
                )
            }
        }
        _ => StatusMessage::info("Solving..."),
    }
}

fn edit_grid_cells(board: &Board, selected: Option<Position>) -> [[GridCell; 9]; 9] {
    let mut cells = [[GridCell::default(); 9]; 9];
    for pos in Position::ALL {
        cells[usize::from(pos.row())][usize::from(pos.col())].digit = board.get(pos);
    }
    if let Some(pos) = selected {
        cells[usize::from(pos.row())][usize::from(pos.col())]
            .visual_state
            .insert(CellVisualState::SELECTED);
    }
    cells
}

/// `confirmed` is the board as the user submitted it; `display` includes
/// whatever the playback has placed since. Digits only present in
/// `display` are marked as solver placements.
fn solve_grid_cells(confirmed: &Board, display: &Board) -> [[GridCell; 9]; 9] {
    let mut cells = [[GridCell::default(); 9]; 9];
    for pos in Position::ALL {
        let cell = &mut cells[usize::from(pos.row())][usize::from(pos.col())];
        cell.digit = display.get(pos);
        if confirmed.get(pos).is_some() {
            cell.visual_state.insert(CellVisualState::GIVEN);
        } else if cell.digit.is_some() {
            cell.visual_state.insert(CellVisualState::SOLVED);
        }
    }
    cells
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use gridshot_core::Digit;
    use gridshot_solver::{SolveOutcome, SolveStep};

    use super::*;
    use crate::state::StatusKind;

    fn board_with(digits: &[(Position, Digit)]) -> Board {
        let mut board = Board::new();
        for &(pos, digit) in digits {
            board.set(pos, Some(digit));
        }
        board
    }

    fn playback(solved: bool, steps: Vec<SolveStep>) -> SolvePlayback {
        let board = Board::new();
        let outcome = SolveOutcome {
            solved,
            steps,
            final_board: board.clone(),
        };
        SolvePlayback::new(board, outcome, Duration::from_millis(50))
    }

    #[test]
    fn edit_cells_carry_digits_and_selection() {
        let board = board_with(&[(Position::new(0, 0), Digit::D5)]);
        let cells = edit_grid_cells(&board, Some(Position::new(1, 2)));

        assert_eq!(cells[0][0].digit, Some(Digit::D5));
        assert!(cells[0][0].visual_state.is_empty());
        assert!(cells[1][2].visual_state.contains(CellVisualState::SELECTED));
        assert_eq!(cells[1][2].digit, None);
    }

    #[test]
    fn solve_cells_separate_givens_from_solver_digits() {
        let confirmed = board_with(&[(Position::new(0, 0), Digit::D5)]);
        let display = board_with(&[
            (Position::new(0, 0), Digit::D5),
            (Position::new(0, 1), Digit::D3),
        ]);
        let cells = solve_grid_cells(&confirmed, &display);

        assert!(cells[0][0].visual_state.contains(CellVisualState::GIVEN));
        assert!(cells[0][1].visual_state.contains(CellVisualState::SOLVED));
        assert_eq!(cells[0][1].digit, Some(Digit::D3));
        assert!(cells[0][2].visual_state.is_empty());
    }

    #[test]
    fn status_outside_solve_passes_through() {
        let status = StatusMessage::error("nope");
        let built = build_status(WorkflowStage::OcrConfirm, None, &status);
        assert_eq!(built, status);
    }

    #[test]
    fn status_during_solve_tracks_playback() {
        let status = StatusMessage::initial();

        let running = playback(
            true,
            vec![SolveStep {
                pos: Position::new(0, 0),
                digit: Some(Digit::D1),
            }],
        );
        let built = build_status(WorkflowStage::VisualSolve, Some(&running), &status);
        assert_eq!(built, StatusMessage::info("Solving..."));

        let solved = playback(true, Vec::new());
        let built = build_status(WorkflowStage::VisualSolve, Some(&solved), &status);
        assert_eq!(built, StatusMessage::success("Sudoku solved!"));

        let failed = playback(false, Vec::new());
        let built = build_status(WorkflowStage::VisualSolve, Some(&failed), &status);
        assert_eq!(built.kind, StatusKind::Error);
    }
}
