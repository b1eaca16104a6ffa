//! Draggable quadrilateral overlay for fixing a failed grid detection.
//!
//! The photo is drawn stretched onto a square canvas. Corner handles are
//! stored normalized to the canvas, so the stretch cancels out when the
//! quadrilateral is scaled back to native pixels for the warp request.

use eframe::egui::{
    Align2, Color32, FontId, Painter, Pos2, Rect, Sense, Shape, Stroke, TextureHandle, Ui, Vec2,
};
use gridshot_core::{Corner, CornerSet, Point};

use crate::action::{ActionRequestQueue, UiAction, WorkflowAction};

const OUTLINE_COLOR: Color32 = Color32::RED;
const OUTLINE_WIDTH: f32 = 2.0;
const HANDLE_RADIUS: f32 = 8.0;
const LABEL_OFFSET: Vec2 = Vec2::new(10.0, -5.0);

#[derive(Clone)]
pub(crate) struct CornerEditorViewModel {
    pub(crate) source: TextureHandle,
    pub(crate) corners: CornerSet,
    pub(crate) dragging: Option<Corner>,
}

pub(crate) fn show(
    ui: &mut Ui,
    vm: &CornerEditorViewModel,
    action_queue: &mut ActionRequestQueue,
) {
    ui.vertical_centered(|ui| {
        ui.label("Drag the corners onto the outline of the puzzle.");
        ui.add_space(4.0);

        let side = ui.available_width().min(super::IMAGE_MAX_SIDE);
        let (rect, response) = ui.allocate_exact_size(Vec2::splat(side), Sense::click_and_drag());

        let painter = ui.painter();
        painter.image(
            vm.source.id(),
            rect,
            Rect::from_min_max(Pos2::new(0.0, 0.0), Pos2::new(1.0, 1.0)),
            Color32::WHITE,
        );
        draw_quad(painter, rect, vm.corners);

        if response.drag_started()
            && let Some(pointer) = response.interact_pointer_pos()
        {
            let at = Point::new(pointer.x - rect.min.x, pointer.y - rect.min.y);
            if let Some(corner) = vm.corners.hit_test(at, side, side, CornerSet::HIT_RADIUS) {
                action_queue.request(UiAction::BeginCornerDrag(corner).into());
            }
        }
        if response.dragged()
            && let Some(corner) = vm.dragging
            && let Some(pointer) = response.interact_pointer_pos()
        {
            let to = Point::new(
                ((pointer.x - rect.min.x) / side).clamp(0.0, 1.0),
                ((pointer.y - rect.min.y) / side).clamp(0.0, 1.0),
            );
            action_queue.request(WorkflowAction::PlaceCorner { corner, to }.into());
        }
        if response.drag_stopped() {
            action_queue.request(UiAction::ReleaseCorner.into());
        }

        ui.add_space(8.0);
        ui.horizontal(|ui| {
            if ui.button("Reset corners").clicked() {
                action_queue.request(WorkflowAction::ResetCorners.into());
            }
            if ui.button("Submit corners").clicked() {
                action_queue.request(WorkflowAction::SubmitCorners.into());
            }
            if ui.button("Cancel").clicked() {
                action_queue.request(UiAction::CloseCornerEditor.into());
            }
        });
    });
}

fn draw_quad(painter: &Painter, rect: Rect, corners: CornerSet) {
    let to_canvas = |p: Point| {
        Pos2::new(
            rect.min.x + p.x * rect.width(),
            rect.min.y + p.y * rect.height(),
        )
    };

    let outline = corners.points().map(to_canvas).to_vec();
    painter.add(Shape::closed_line(
        outline,
        Stroke::new(OUTLINE_WIDTH, OUTLINE_COLOR),
    ));

    for corner in Corner::ALL {
        let center = to_canvas(corners.corner(corner));
        painter.circle_filled(center, HANDLE_RADIUS, OUTLINE_COLOR);
        painter.text(
            center + LABEL_OFFSET,
            Align2::LEFT_BOTTOM,
            corner.label(),
            FontId::proportional(12.0),
            OUTLINE_COLOR,
        );
    }
}
