//! Gridshot desktop application UI.
//!
//! # Design Notes
//! - Single-window workflow: photo in, animated solve out.
//! - All service traffic runs on the worker thread; the UI thread only
//!   enqueues requests and polls for responses.
//! - Board edits are keyboard-driven (digits, arrows, delete/backspace)
//!   with mouse selection.

use std::{
    path::PathBuf,
    time::{Duration, Instant},
};

use eframe::{
    App, CreationContext, Frame, Storage,
    egui::{CentralPanel, Context},
};

use crate::{
    action::{self, ActionRequestQueue, WorkAction, WorkflowAction},
    persistence,
    service::HttpGridService,
    state::{AppState, Settings, UiState},
    ui, view_model_builder,
    work::{Dispatcher, WorkResponse},
};

#[derive(Debug)]
pub struct GridshotApp {
    app_state: AppState,
    ui_state: UiState,
}

impl GridshotApp {
    /// Builds the app, restoring a persisted service session if one exists.
    ///
    /// # Errors
    ///
    /// Fails when the HTTP client for the grid service cannot be built.
    pub fn new(
        cc: &CreationContext<'_>,
        settings: Settings,
        initial_image: Option<PathBuf>,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let service = HttpGridService::new(&settings.service_url)?;
        let dispatcher = Dispatcher::spawn(Box::new(service));

        let mut app_state = match cc.storage.and_then(persistence::load_session) {
            Some(session) => {
                log::info!("resuming service session {session}");
                AppState::resume(settings, session)
            }
            None => AppState::new(settings),
        };
        let mut ui_state = UiState::new(dispatcher);

        if let Some(path) = initial_image {
            let mut action_queue = ActionRequestQueue::default();
            action_queue.request(WorkflowAction::AttachImage(path).into());
            action::handler::handle_all(&mut app_state, &mut ui_state, &mut action_queue);
        }

        Ok(Self {
            app_state,
            ui_state,
        })
    }

    fn poll_background_work(&mut self, action_queue: &mut ActionRequestQueue) {
        let epoch = self.app_state.workflow.epoch();
        match self.ui_state.dispatcher.poll(epoch) {
            Ok(Some(response)) => action_queue.request(WorkAction::Complete(response).into()),
            Ok(None) => {}
            Err(err) => {
                action_queue.request(WorkAction::Complete(WorkResponse::Error(err)).into());
            }
        }
    }

    fn handle_dropped_files(ctx: &Context, action_queue: &mut ActionRequestQueue) {
        let dropped = ctx.input(|i| i.raw.dropped_files.clone());
        for file in dropped {
            if let Some(path) = file.path {
                action_queue.request(WorkflowAction::AttachImage(path).into());
            }
        }
    }

    /// Advances solve playback and schedules the repaint for the next step.
    fn tick_playback(&mut self, ctx: &Context) {
        if let Some(playback) = &mut self.ui_state.playback {
            let now = Instant::now();
            if let Some(due) = playback.tick(now) {
                ctx.request_repaint_after(due.saturating_duration_since(now));
            }
        }
    }

    fn apply_persistence(&mut self, frame: &mut Frame) {
        if self.app_state.is_dirty()
            && let Some(storage) = frame.storage_mut()
        {
            self.save(storage);
            self.app_state.clear_dirty();
        }
    }
}

impl App for GridshotApp {
    fn save(&mut self, storage: &mut dyn Storage) {
        persistence::save_session(storage, self.app_state.workflow.session());
    }

    fn auto_save_interval(&self) -> Duration {
        Duration::from_secs(30)
    }

    fn update(&mut self, ctx: &Context, frame: &mut Frame) {
        let mut action_queue = ActionRequestQueue::default();

        self.poll_background_work(&mut action_queue);
        action::handler::handle_all(&mut self.app_state, &mut self.ui_state, &mut action_queue);

        self.tick_playback(ctx);

        if self.ui_state.active_modal.is_none() && !self.ui_state.dispatcher.has_pending() {
            Self::handle_dropped_files(ctx, &mut action_queue);
            ctx.input(|i| {
                ui::input::handle_input(i, &mut action_queue);
                action::handler::handle_all(
                    &mut self.app_state,
                    &mut self.ui_state,
                    &mut action_queue,
                );
            });
        }

        let source = self.ui_state.source.texture(ctx, "gridshot_source");
        let preview = self.ui_state.preview.texture(ctx, "gridshot_preview");
        let screen_vm = view_model_builder::build_workflow_screen_view_model(
            &self.app_state,
            &self.ui_state,
            source,
            preview,
        );

        CentralPanel::default().show(ctx, |ui| {
            ui::workflow_screen::show(ui, &screen_vm, &mut action_queue);
        });

        if let Some(kind) = self.ui_state.active_modal {
            ui::dialogs::show(ctx, &mut action_queue, kind);
        }

        if let Some(spinner) = self.ui_state.dispatcher.pending_kind() {
            ui::spinner::show(ctx, spinner);
        }

        action::handler::handle_all(&mut self.app_state, &mut self.ui_state, &mut action_queue);

        self.apply_persistence(frame);
    }
}
