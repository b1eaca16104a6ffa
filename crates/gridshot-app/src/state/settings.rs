use std::time::Duration;

/// Runtime settings, fixed at startup from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Base URL of the grid detection service.
    pub service_url: String,
    /// Delay between solver steps during playback.
    pub step_interval: Duration,
    /// Run digit recognition immediately after a successful detection.
    pub auto_run_recognition: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            service_url: "http://127.0.0.1:5000".to_owned(),
            step_interval: Duration::from_millis(50),
            auto_run_recognition: false,
        }
    }
}
