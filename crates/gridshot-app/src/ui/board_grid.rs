use std::sync::Arc;

use eframe::egui::{
    Align2, Color32, FontId, Painter, Pos2, Rect, Sense, Stroke, StrokeKind, Ui, Vec2,
};
use gridshot_core::{Digit, Position};

use crate::{
    action::{ActionRequestQueue, UiAction},
    ui::board_theme::{BoardPalette, BoardTheme},
};

bitflags::bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub(crate) struct CellVisualState: u8 {
        const SELECTED = 0b001;
        /// Part of the confirmed puzzle, not placed by the solver.
        const GIVEN = 0b010;
        /// Placed during solve playback.
        const SOLVED = 0b100;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct GridCell {
    pub(crate) digit: Option<Digit>,
    pub(crate) visual_state: CellVisualState,
}

impl Default for GridCell {
    fn default() -> Self {
        Self {
            digit: None,
            visual_state: CellVisualState::empty(),
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct BoardGridViewModel {
    cells: [[GridCell; 9]; 9],
    interactive: bool,
}

impl BoardGridViewModel {
    #[must_use]
    pub(crate) fn new(cells: [[GridCell; 9]; 9], interactive: bool) -> Self {
        Self { cells, interactive }
    }

    #[must_use]
    pub(crate) fn cell(&self, pos: Position) -> &GridCell {
        &self.cells[usize::from(pos.row())][usize::from(pos.col())]
    }

    #[must_use]
    pub(crate) fn interactive(&self) -> bool {
        self.interactive
    }
}

pub(crate) const GRID_CELLS: f32 = 9.0;

const CELL_BORDER_WIDTH_BASE_RATIO: f32 = 0.03;
const THICK_BORDER_WIDTH_RATIO: f32 = 3.0;
const THIN_BORDER_WIDTH_RATIO: f32 = 1.0;
const SELECTED_BORDER_WIDTH_RATIO: f32 = 3.0;

/// Side length in cell units, thick borders included. Divide an available
/// pixel side by this to get a cell size that makes the grid fit exactly.
#[must_use]
pub(crate) const fn side_units() -> f32 {
    GRID_CELLS + CELL_BORDER_WIDTH_BASE_RATIO * (THICK_BORDER_WIDTH_RATIO * 4.0)
}

#[must_use]
pub(crate) fn grid_side_with_border(cell_size: f32) -> f32 {
    GRID_CELLS * cell_size + thick_border_width(cell_size) * 4.0
}

fn thick_border_width(cell_size: f32) -> f32 {
    let base_width = f32::max(cell_size * CELL_BORDER_WIDTH_BASE_RATIO, 1.0);
    base_width * THICK_BORDER_WIDTH_RATIO
}

fn fill_color(state: CellVisualState, palette: &BoardPalette) -> Color32 {
    if state.intersects(CellVisualState::SELECTED) {
        palette.cell_bg_selected
    } else {
        palette.cell_bg_default
    }
}

fn text_color(state: CellVisualState, palette: &BoardPalette) -> Color32 {
    if state.intersects(CellVisualState::GIVEN) {
        palette.text_given
    } else if state.intersects(CellVisualState::SOLVED) {
        palette.text_solver
    } else {
        palette.text_entered
    }
}

fn cell_border(state: CellVisualState, palette: &BoardPalette, cell_size: f32) -> Stroke {
    let (ratio, color) = if state.intersects(CellVisualState::SELECTED) {
        (SELECTED_BORDER_WIDTH_RATIO, palette.border_selected)
    } else {
        (THIN_BORDER_WIDTH_RATIO, palette.border_inactive)
    };
    let base_width = f32::max(cell_size * CELL_BORDER_WIDTH_BASE_RATIO, 1.0);
    Stroke::new(base_width * ratio, color)
}

pub(crate) fn show(
    ui: &mut Ui,
    vm: &BoardGridViewModel,
    cell_size: f32,
    action_queue: &mut ActionRequestQueue,
) {
    let style = Arc::clone(ui.style());
    let visuals = &style.visuals;
    let theme = BoardTheme::from_visuals(visuals);
    let palette = theme.palette_for(visuals);
    let grid_side = grid_side_with_border(cell_size);

    let (rect, _response) = ui.allocate_exact_size(Vec2::splat(grid_side), Sense::hover());

    let thick_border = Stroke::new(thick_border_width(cell_size), palette.border_inactive);
    let inner_rect = rect.shrink(thick_border.width);

    let painter = ui.painter();
    draw_outer_border(painter, rect, thick_border);

    for pos in Position::ALL {
        let cell = vm.cell(pos);
        let state = cell.visual_state;

        let xf = f32::from(pos.col());
        let yf = f32::from(pos.row());
        let cell_min = inner_rect.min
            + Vec2::new(
                cell_size * xf + (xf / 3.0).floor() * thick_border.width,
                cell_size * yf + (yf / 3.0).floor() * thick_border.width,
            );
        let cell_rect = Rect::from_min_max(cell_min, cell_min + Vec2::splat(cell_size));

        painter.rect_filled(cell_rect, 0.0, fill_color(state, palette));

        if let Some(digit) = cell.digit {
            painter.text(
                cell_rect.center(),
                Align2::CENTER_CENTER,
                digit.as_str(),
                FontId::proportional(cell_size * 0.8),
                text_color(state, palette),
            );
        }

        painter.rect_stroke(
            cell_rect,
            0.0,
            cell_border(state, palette, cell_size),
            StrokeKind::Inside,
        );

        if vm.interactive() {
            let response = ui.interact(
                cell_rect,
                ui.id().with((pos.row(), pos.col())),
                Sense::click(),
            );
            if response.clicked() {
                action_queue.request(UiAction::SelectCell(pos).into());
            }
        }
    }

    draw_box_borders(painter, inner_rect, cell_size, thick_border);
}

fn draw_outer_border(painter: &Painter, rect: Rect, stroke: Stroke) {
    let thickness = stroke.width.max(1.0);

    let left = Rect::from_min_max(
        Pos2::new(rect.left(), rect.top()),
        Pos2::new(rect.left() + thickness, rect.bottom()),
    );
    let right = Rect::from_min_max(
        Pos2::new(rect.right() - thickness, rect.top()),
        Pos2::new(rect.right(), rect.bottom()),
    );
    let top = Rect::from_min_max(
        Pos2::new(rect.left(), rect.top()),
        Pos2::new(rect.right(), rect.top() + thickness),
    );
    let bottom = Rect::from_min_max(
        Pos2::new(rect.left(), rect.bottom() - thickness),
        Pos2::new(rect.right(), rect.bottom()),
    );

    painter.rect_filled(left, 0.0, stroke.color);
    painter.rect_filled(right, 0.0, stroke.color);
    painter.rect_filled(top, 0.0, stroke.color);
    painter.rect_filled(bottom, 0.0, stroke.color);
}

fn draw_box_borders(painter: &Painter, inner_rect: Rect, cell_size: f32, stroke: Stroke) {
    let start = inner_rect.min;
    let end = inner_rect.max;
    let thickness = stroke.width.max(1.0);
    let half = thickness * 0.5;

    for i in [1.0, 2.0] {
        let offset = cell_size * 3.0 * i + thickness * (i - 0.5);
        let x = start.x + offset;
        let v_rect = Rect::from_min_max(Pos2::new(x - half, start.y), Pos2::new(x + half, end.y));
        painter.rect_filled(v_rect, 0.0, stroke.color);

        let y = start.y + offset;
        let h_rect = Rect::from_min_max(Pos2::new(start.x, y - half), Pos2::new(end.x, y + half));
        painter.rect_filled(h_rect, 0.0, stroke.color);
    }
}
