//! Shared library module for the Gridshot app crate.

#![allow(missing_docs, clippy::missing_errors_doc, clippy::missing_panics_doc)]

pub mod action;
pub mod app;
pub mod media;
pub mod persistence;
pub mod playback;
pub mod service;
pub mod state;
pub mod ui;
pub mod version;
pub mod view_model_builder;
pub mod work;

pub use self::{app::GridshotApp, state::Settings};
