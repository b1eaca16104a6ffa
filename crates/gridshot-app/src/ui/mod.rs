use eframe::egui::{self, TextureHandle, Ui};
use egui_extras::{Size, StripBuilder};

use crate::action::ActionRequestQueue;

pub(crate) mod board_grid;
pub(crate) mod board_theme;
pub(crate) mod corner_editor;
pub(crate) mod dialogs;
pub(crate) mod grid_confirm_view;
pub(crate) mod input;
pub(crate) mod ocr_confirm_view;
pub(crate) mod solve_view;
pub(crate) mod spinner;
pub(crate) mod status_line;
pub(crate) mod upload_view;
pub(crate) mod workflow_screen;

/// Largest edge a photo or preview is shown at.
pub(crate) const IMAGE_MAX_SIDE: f32 = 450.0;

/// Height reserved for the button row under a board or image.
pub(crate) const BUTTON_ROW_HEIGHT: f32 = 32.0;

/// Draws a texture scaled to fit `max_side`, never scaled up.
pub(crate) fn fitted_image(ui: &mut Ui, texture: &TextureHandle, max_side: f32) {
    let size = texture.size_vec2();
    let scale = (max_side / size.max_elem()).min(1.0);
    ui.image((texture.id(), size * scale));
}

/// Centers a square board with a button row underneath.
///
/// The board gets the largest square that still leaves room for the
/// buttons; `board` receives the cell size derived from that square.
pub(crate) fn board_screen(
    ui: &mut Ui,
    action_queue: &mut ActionRequestQueue,
    board: impl FnOnce(&mut Ui, f32, &mut ActionRequestQueue),
    buttons: impl FnOnce(&mut Ui, &mut ActionRequestQueue),
) {
    let spacing = ui.spacing().item_spacing;
    let spaces = spacing * egui::vec2(2.0, 3.0);
    let available = ui.available_size() - spaces;
    let board_side = available.x.min(available.y - BUTTON_ROW_HEIGHT);
    let cell_size = board_side / board_grid::side_units();

    StripBuilder::new(ui)
        .size(Size::remainder())
        .size(Size::exact(board_side))
        .size(Size::remainder())
        .horizontal(|mut strip| {
            strip.empty();
            strip.cell(|ui| {
                StripBuilder::new(ui)
                    .size(Size::remainder())
                    .size(Size::exact(board_side))
                    .size(Size::exact(spacing.y))
                    .size(Size::exact(BUTTON_ROW_HEIGHT))
                    .size(Size::remainder())
                    .vertical(|mut strip| {
                        strip.empty();
                        strip.cell(|ui| board(ui, cell_size, action_queue));
                        strip.cell(|_ui| {}); // Spacer
                        strip.cell(|ui| buttons(ui, action_queue));
                        strip.empty();
                    });
            });
            strip.empty();
        });
}
