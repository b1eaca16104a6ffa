use eframe::egui::{Context, Id, Modal, Spinner};

use crate::work::SpinnerKind;

pub(crate) fn show(ctx: &Context, spinner: SpinnerKind) {
    ctx.request_repaint();
    let (id, heading, label) = match spinner {
        SpinnerKind::LoadImage => ("loading_image", "Loading...", "Reading image file..."),
        SpinnerKind::DetectGrid => (
            "detecting_grid",
            "Detecting...",
            "Uploading the photo and detecting the grid...",
        ),
        SpinnerKind::ManualWarp => (
            "warping_grid",
            "Warping...",
            "Re-warping the photo with your corners...",
        ),
        SpinnerKind::RecognizeDigits => ("running_ocr", "Recognising...", "Recognising digits..."),
        SpinnerKind::Solve => ("solving", "Solving...", "Searching for a solution..."),
    };
    Modal::new(Id::new(id)).show(ctx, |ui| {
        ui.heading(heading);
        ui.add(Spinner::new());
        ui.label(label);
    });
}
