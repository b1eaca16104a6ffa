pub use self::settings::Settings;
pub(crate) use self::{app_state::*, ui_state::*, workflow::*};

mod app_state;
mod settings;
mod ui_state;
mod workflow;
