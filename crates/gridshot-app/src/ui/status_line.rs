use eframe::egui::{Color32, RichText, Ui};

use crate::state::{StatusKind, StatusMessage};

#[derive(Debug, Clone)]
pub(crate) struct StatusLineViewModel {
    message: StatusMessage,
}

impl StatusLineViewModel {
    #[must_use]
    pub(crate) fn new(message: StatusMessage) -> Self {
        Self { message }
    }
}

pub(crate) fn show(ui: &mut Ui, vm: &StatusLineViewModel) {
    let color = match vm.message.kind {
        StatusKind::Info => ui.visuals().text_color(),
        StatusKind::Success if ui.visuals().dark_mode => Color32::LIGHT_GREEN,
        StatusKind::Success => Color32::DARK_GREEN,
        StatusKind::Error => ui.visuals().error_fg_color,
    };
    ui.vertical_centered(|ui| {
        ui.label(RichText::new(&vm.message.text).color(color));
    });
}
