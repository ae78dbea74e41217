use std::sync::Arc;

use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use loglive_core::capture::{ConsoleStream, LogCapture};
use loglive_core::config::LoggingConfig;

/// `MakeWriter` handing out tee'd stderr writers, so host logging routed
/// through the plugin lands in the capture like any other console output.
pub struct TeeMakeWriter {
    capture: Arc<LogCapture>,
}

impl TeeMakeWriter {
    pub fn new(capture: Arc<LogCapture>) -> Self {
        Self { capture }
    }
}

impl<'a> MakeWriter<'a> for TeeMakeWriter {
    type Writer = Box<dyn ConsoleStream>;

    fn make_writer(&'a self) -> Self::Writer {
        self.capture.tee_stderr()
    }
}

/// Set up the host's `tracing` output through the tee. ANSI follows the
/// wrapped stream's interactivity probe, exactly as it would unwrapped.
pub fn init_host_logging(capture: &Arc<LogCapture>, cfg: &LoggingConfig) -> Result<(), String> {
    if !cfg.enabled {
        return Ok(());
    }

    let filter = match std::env::var("RUST_LOG") {
        Ok(v) if !v.trim().is_empty() => EnvFilter::from_default_env(),
        _ => EnvFilter::try_new(cfg.level.clone()).map_err(|e| e.to_string())?,
    };

    let ansi = capture.tee_stderr().is_terminal();
    let layer = tracing_subscriber::fmt::layer()
        .with_writer(TeeMakeWriter::new(capture.clone()))
        .with_ansi(ansi);

    // try_init: the host may already own a subscriber, and the plugin must
    // not crash it over that.
    tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init()
        .map_err(|e| e.to_string())
}
