use eframe::egui::Ui;

use super::board_grid::{self, BoardGridViewModel};
use crate::action::{ActionRequestQueue, ModalKind, UiAction, WorkflowAction};

#[derive(Debug, Clone)]
pub(crate) struct OcrConfirmViewModel {
    pub(crate) grid_vm: BoardGridViewModel,
}

pub(crate) fn show(ui: &mut Ui, vm: &OcrConfirmViewModel, action_queue: &mut ActionRequestQueue) {
    super::board_screen(
        ui,
        action_queue,
        |ui, cell_size, queue| board_grid::show(ui, &vm.grid_vm, cell_size, queue),
        |ui, queue| {
            ui.horizontal(|ui| {
                if ui.button("Solve").clicked() {
                    queue.request(WorkflowAction::ConfirmDigits.into());
                }
                if ui.button("Start over").clicked() {
                    queue.request(UiAction::OpenModal(ModalKind::RestartConfirm).into());
                }
            });
        },
    );
}
