use eframe::egui::{Button, TextureHandle, Ui};
use egui_extras::{Size, StripBuilder};

use super::corner_editor::{self, CornerEditorViewModel};
use crate::action::{ActionRequestQueue, UiAction, WorkflowAction};

#[derive(Clone)]
pub(crate) struct GridConfirmViewModel {
    pub(crate) preview: Option<TextureHandle>,
    pub(crate) can_adjust_corners: bool,
    pub(crate) corner_editor: Option<CornerEditorViewModel>,
}

pub(crate) fn show(ui: &mut Ui, vm: &GridConfirmViewModel, action_queue: &mut ActionRequestQueue) {
    if let Some(editor) = &vm.corner_editor {
        corner_editor::show(ui, editor, action_queue);
        return;
    }

    let column_width = ui.available_width().min(super::IMAGE_MAX_SIDE);
    StripBuilder::new(ui)
        .size(Size::remainder())
        .size(Size::exact(column_width))
        .size(Size::remainder())
        .horizontal(|mut strip| {
            strip.empty();
            strip.cell(|ui| show_column(ui, vm, action_queue));
            strip.empty();
        });
}

fn show_column(ui: &mut Ui, vm: &GridConfirmViewModel, action_queue: &mut ActionRequestQueue) {
    ui.add_space(16.0);
    match &vm.preview {
        Some(texture) => super::fitted_image(ui, texture, super::IMAGE_MAX_SIDE),
        None => {
            ui.label("No grid preview available.");
        }
    }
    ui.add_space(8.0);
    ui.horizontal(|ui| {
        if ui.button("Run recognition").clicked() {
            action_queue.request(WorkflowAction::RunRecognition.into());
        }
        if ui
            .add_enabled(vm.can_adjust_corners, Button::new("Set corners manually"))
            .clicked()
        {
            action_queue.request(UiAction::OpenCornerEditor.into());
        }
        if ui.button("Enter digits manually").clicked() {
            action_queue.request(WorkflowAction::EnterDigitsManually.into());
        }
    });
}
