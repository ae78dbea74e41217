use std::sync::Arc;

use loglive_core::capture::LogCapture;
use loglive_core::config::PanelConfig;
use loglive_core::panel::LogPanel;

use crate::register::{TabFactory, TabSpec};

/// Build the factory the host calls when it assembles its tab bar. Each
/// invocation produces a fresh panel seeded with the current snapshot.
pub fn tab_factory(capture: Arc<LogCapture>, cfg: PanelConfig) -> TabFactory {
    Box::new(move || {
        let panel = LogPanel::new(capture.clone(), cfg.clone());
        tracing::debug!(tab = %cfg.tab_id, "live log tab created");
        Ok(vec![TabSpec {
            panel,
            title: cfg.title.clone(),
            id: cfg.tab_id.clone(),
        }])
    })
}
