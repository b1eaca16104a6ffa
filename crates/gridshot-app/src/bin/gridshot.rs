//! Gridshot desktop application using egui/eframe.
//!
//! This is the main entry point for the desktop Gridshot application.

use std::{path::PathBuf, time::Duration};

use clap::Parser;
use gridshot_app::{GridshotApp, Settings};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Base URL of the grid-vision service.
    #[arg(long, value_name = "URL", default_value = "http://127.0.0.1:5000")]
    service_url: String,

    /// Milliseconds between animated solver steps.
    #[arg(long, value_name = "MS", default_value_t = 50)]
    step_interval_ms: u64,

    /// Run digit recognition right after a successful grid detection.
    #[arg(long)]
    auto_ocr: bool,

    /// Photo to load on startup.
    #[arg(value_name = "IMAGE")]
    image: Option<PathBuf>,
}

impl Args {
    fn settings(&self) -> Settings {
        Settings {
            service_url: self.service_url.clone(),
            step_interval: Duration::from_millis(self.step_interval_ms),
            auto_run_recognition: self.auto_ocr,
        }
    }
}

fn main() -> eframe::Result<()> {
    const APP_ID: &str = "io.github.gridshot.gridshot";

    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    let settings = args.settings();
    let image = args.image;

    log::info!(
        "starting Gridshot {}",
        gridshot_app::version::build_version()
    );

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_app_id(APP_ID)
            .with_resizable(true)
            .with_inner_size((800.0, 600.0))
            .with_min_inner_size((400.0, 300.0)),
        ..Default::default()
    };
    eframe::run_native(
        "Gridshot",
        options,
        Box::new(move |cc| {
            let app = GridshotApp::new(cc, settings, image)?;
            Ok(Box::new(app))
        }),
    )
}
