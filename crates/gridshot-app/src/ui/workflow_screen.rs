use eframe::egui::Ui;
use egui_extras::{Size, StripBuilder};

use super::{
    grid_confirm_view::{self, GridConfirmViewModel},
    ocr_confirm_view::{self, OcrConfirmViewModel},
    solve_view::{self, SolveViewModel},
    status_line::{self, StatusLineViewModel},
    upload_view::{self, UploadViewModel},
};
use crate::action::ActionRequestQueue;

const STATUS_LINE_HEIGHT: f32 = 24.0;

/// One view model per workflow stage; exactly one is active at a time.
#[derive(Clone)]
pub(crate) enum StageViewModel {
    Upload(UploadViewModel),
    GridConfirm(GridConfirmViewModel),
    OcrConfirm(OcrConfirmViewModel),
    Solve(SolveViewModel),
}

#[derive(Clone)]
pub(crate) struct WorkflowScreenViewModel {
    pub(crate) stage_vm: StageViewModel,
    pub(crate) status_vm: StatusLineViewModel,
}

pub(crate) fn show(
    ui: &mut Ui,
    vm: &WorkflowScreenViewModel,
    action_queue: &mut ActionRequestQueue,
) {
    StripBuilder::new(ui)
        .size(Size::remainder())
        .size(Size::exact(STATUS_LINE_HEIGHT))
        .vertical(|mut strip| {
            strip.cell(|ui| match &vm.stage_vm {
                StageViewModel::Upload(stage) => upload_view::show(ui, stage, action_queue),
                StageViewModel::GridConfirm(stage) => {
                    grid_confirm_view::show(ui, stage, action_queue);
                }
                StageViewModel::OcrConfirm(stage) => {
                    ocr_confirm_view::show(ui, stage, action_queue);
                }
                StageViewModel::Solve(stage) => solve_view::show(ui, stage, action_queue),
            });
            strip.cell(|ui| {
                status_line::show(ui, &vm.status_vm);
            });
        });
}
