use std::io;
use std::sync::{Arc, OnceLock};

use crate::config::AppConfig;
use crate::util::RingText;

use super::stream::ConsoleStream;
use super::tee::StreamTee;

static CAPTURE: OnceLock<Arc<LogCapture>> = OnceLock::new();

/// Owner of the bounded log ring. Constructed once per process via
/// [`LogCapture::install`] and handed around as an `Arc`; `new` exists for
/// tests and hosts that manage their own lifetime.
pub struct LogCapture {
    ring: RingText,
    placeholder: String,
}

impl LogCapture {
    pub fn new(cfg: &AppConfig) -> Arc<Self> {
        Arc::new(Self {
            ring: RingText::new(cfg.capture.max_chars),
            placeholder: cfg.panel.placeholder.clone(),
        })
    }

    /// Process-wide init-once accessor. The first call builds the capture
    /// from `cfg`; later calls return the existing instance and ignore
    /// their argument, so a plugin reload cannot re-wrap the streams.
    pub fn install(cfg: &AppConfig) -> Arc<Self> {
        CAPTURE.get_or_init(|| Self::new(cfg)).clone()
    }

    /// The installed capture, if any.
    pub fn installed() -> Option<Arc<Self>> {
        CAPTURE.get().cloned()
    }

    pub fn ring(&self) -> RingText {
        self.ring.clone()
    }

    /// Current buffer contents, or the configured placeholder while the
    /// buffer is still empty. The copy never aliases the live buffer.
    pub fn snapshot(&self) -> String {
        let s = self.ring.snapshot();
        if s.is_empty() {
            self.placeholder.clone()
        } else {
            s
        }
    }

    /// Wrap an arbitrary destination. Idempotent per [`StreamTee::wrap`].
    pub fn tee(&self, stream: Box<dyn ConsoleStream>) -> Box<dyn ConsoleStream> {
        StreamTee::wrap(stream, self.ring.clone())
    }

    pub fn tee_stdout(&self) -> Box<dyn ConsoleStream> {
        self.tee(Box::new(io::stdout()))
    }

    pub fn tee_stderr(&self) -> Box<dyn ConsoleStream> {
        self.tee(Box::new(io::stderr()))
    }
}
