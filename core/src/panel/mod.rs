mod refresh;
mod view;

pub use refresh::{RefreshExit, RefreshTask};
pub use view::LogView;

use std::sync::Arc;
use std::time::Duration;

use crate::capture::LogCapture;
use crate::config::PanelConfig;

/// One read-only log tab: seeded text at creation, a manual refresh action,
/// and a periodic refresh once a host text field is attached.
pub struct LogPanel {
    capture: Arc<LogCapture>,
    cfg: PanelConfig,
    initial: String,
}

impl LogPanel {
    pub fn new(capture: Arc<LogCapture>, cfg: PanelConfig) -> Self {
        let initial = capture.snapshot();
        Self {
            capture,
            cfg,
            initial,
        }
    }

    /// Value the host seeds the text field with.
    pub fn initial_text(&self) -> &str {
        &self.initial
    }

    /// Manual refresh action: returns a fresh snapshot.
    pub fn refresh(&self) -> String {
        self.capture.snapshot()
    }

    pub fn config(&self) -> &PanelConfig {
        &self.cfg
    }

    /// Start the periodic refresh against the host's text field.
    pub fn attach(&self, view: Arc<dyn LogView>) -> RefreshTask {
        RefreshTask::spawn(
            self.capture.clone(),
            view,
            Duration::from_millis(self.cfg.refresh_interval_ms),
        )
    }
}
