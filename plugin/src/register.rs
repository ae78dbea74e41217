use std::io::Write;
use std::sync::Arc;

use anyhow::Result;

use loglive_core::capture::LogCapture;
use loglive_core::config::AppConfig;
use loglive_core::error::PluginError;
use loglive_core::panel::LogPanel;

use crate::tabs;

/// Fixed tag on boundary messages. When registration fails the host console
/// is the only channel left.
pub const LOG_TAG: &str = "[Live Logs]";

/// (panel, display title, identifier) triple handed to the host.
pub struct TabSpec {
    pub panel: LogPanel,
    pub title: String,
    pub id: String,
}

pub type TabFactory = Box<dyn Fn() -> Result<Vec<TabSpec>> + Send + Sync>;

/// The host's plugin registration surface.
pub trait UiTabsHost {
    fn on_ui_tabs(&mut self, factory: TabFactory) -> Result<()>;
}

/// Install the capture and register the live-log tab with the host.
///
/// Never panics and never propagates: on any registration failure the
/// plugin reports once to stderr and stays inert. Both boundary messages go
/// through the tee, so they land in the panel like any other console
/// output. Returns whether the tab was registered.
pub fn register(host: &mut dyn UiTabsHost, cfg: &AppConfig) -> bool {
    let capture = LogCapture::install(cfg);
    match try_register(host, &capture, cfg) {
        Ok(()) => {
            let mut out = capture.tee_stdout();
            let _ = writeln!(
                out,
                "{LOG_TAG} extension active, console output available under the '{}' tab",
                cfg.panel.title
            );
            true
        }
        Err(e) => {
            let mut err = capture.tee_stderr();
            let _ = writeln!(err, "{LOG_TAG} initialization error: {e}");
            false
        }
    }
}

fn try_register(
    host: &mut dyn UiTabsHost,
    capture: &Arc<LogCapture>,
    cfg: &AppConfig,
) -> Result<(), PluginError> {
    let factory = tabs::tab_factory(capture.clone(), cfg.panel.clone());
    host.on_ui_tabs(factory).map_err(PluginError::Register)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[derive(Default)]
    struct MockHost {
        factory: Option<TabFactory>,
        reject: bool,
    }

    impl UiTabsHost for MockHost {
        fn on_ui_tabs(&mut self, factory: TabFactory) -> Result<()> {
            if self.reject {
                anyhow::bail!("script_callbacks api missing");
            }
            self.factory = Some(factory);
            Ok(())
        }
    }

    #[test]
    fn registers_one_tab_and_captures_its_own_activation_line() {
        let mut host = MockHost::default();
        assert!(register(&mut host, &AppConfig::default()));

        // The activation line goes through the tee, so the panel shows it
        // instead of escaping to the bare console.
        let snapshot = LogCapture::installed().expect("capture installed").snapshot();
        assert!(snapshot.contains("extension active"));

        let tabs = host.factory.expect("factory registered")().unwrap();
        assert_eq!(tabs.len(), 1);
        assert_eq!(tabs[0].title, "Live Logs");
        assert_eq!(tabs[0].id, "live_logs_tab");
        assert!(tabs[0].panel.initial_text().contains("extension active"));
    }

    #[test]
    fn rejected_registration_leaves_the_plugin_inert() {
        let mut host = MockHost {
            reject: true,
            ..Default::default()
        };
        assert!(!register(&mut host, &AppConfig::default()));
        assert!(host.factory.is_none());

        // The failure report is mirrored too.
        let snapshot = LogCapture::installed().expect("capture installed").snapshot();
        assert!(snapshot.contains("initialization error"));
    }
}
