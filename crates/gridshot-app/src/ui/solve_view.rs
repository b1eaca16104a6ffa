use eframe::egui::Ui;

use super::board_grid::{self, BoardGridViewModel};
use crate::action::{ActionRequestQueue, ModalKind, UiAction};

#[derive(Debug, Clone)]
pub(crate) struct SolveViewModel {
    pub(crate) grid_vm: BoardGridViewModel,
}

pub(crate) fn show(ui: &mut Ui, vm: &SolveViewModel, action_queue: &mut ActionRequestQueue) {
    super::board_screen(
        ui,
        action_queue,
        |ui, cell_size, queue| board_grid::show(ui, &vm.grid_vm, cell_size, queue),
        |ui, queue| {
            ui.horizontal(|ui| {
                if ui.button("Start over").clicked() {
                    queue.request(UiAction::OpenModal(ModalKind::RestartConfirm).into());
                }
            });
        },
    );
}
