use eframe::egui::{Context, Id, Modal, Response, RichText, Sides, Ui};

use crate::action::{ActionRequestQueue, ModalKind, UiAction, WorkflowAction};

struct DialogResult {
    should_close: bool,
}

fn show_dialog<Heading, Body, Buttons>(
    ctx: &Context,
    id: Id,
    heading: Heading,
    body: Body,
    buttons: Buttons,
) -> DialogResult
where
    Heading: Into<RichText>,
    Body: FnOnce(&mut Ui),
    Buttons: FnOnce(&mut Ui),
{
    let modal = Modal::new(id).show(ctx, |ui| {
        ui.heading(heading);
        ui.add_space(4.0);

        body(ui);
        ui.add_space(8.0);

        Sides::new().show(ui, |_ui| {}, buttons);
    });

    DialogResult {
        should_close: modal.should_close(),
    }
}

fn request_focus_if_none(ui: &Ui, response: &Response) {
    if ui.memory(|memory| memory.focused().is_none()) {
        response.request_focus();
    }
}

fn primary_button(ui: &mut Ui, label: &str, request_focus: bool) -> Response {
    let response = ui.button(label);
    if request_focus {
        request_focus_if_none(ui, &response);
    }
    response
}

pub(crate) fn show(ctx: &Context, action_queue: &mut ActionRequestQueue, kind: ModalKind) {
    match kind {
        ModalKind::RestartConfirm => show_restart_confirm(ctx, action_queue),
    }
}

fn show_restart_confirm(ctx: &Context, action_queue: &mut ActionRequestQueue) {
    let DialogResult { should_close } = show_dialog(
        ctx,
        Id::new("restart_confirm"),
        "Start Over?",
        |ui: &mut Ui| {
            ui.label("Discard this photo and its progress, and start from a new image?");
        },
        |ui: &mut Ui| {
            let confirm = primary_button(ui, "Start Over", true);
            if confirm.clicked() {
                action_queue.request(WorkflowAction::Restart.into());
                ui.close();
            }

            if ui.button("Cancel").clicked() {
                ui.close();
            }
        },
    );

    if should_close {
        action_queue.request(UiAction::CloseModal.into());
    }
}
