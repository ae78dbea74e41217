use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use loglive_core::capture::ConsoleStream;
use loglive_core::error::ViewClosed;
use loglive_core::panel::LogView;

/// Console stand-in that records everything forwarded to it.
#[derive(Clone, Default)]
pub struct SharedSink {
    written: Arc<Mutex<Vec<u8>>>,
}

impl SharedSink {
    pub fn contents(&self) -> Vec<u8> {
        self.written.lock().unwrap().clone()
    }
}

impl Write for SharedSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.written.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl ConsoleStream for SharedSink {}

/// Host text field stand-in for the refresh task.
#[derive(Default)]
pub struct RecordingView {
    pub updates: AtomicUsize,
    pub last: Mutex<String>,
    pub closed: AtomicBool,
}

impl LogView for RecordingView {
    fn set_text(&self, text: &str) -> Result<(), ViewClosed> {
        if self.closed.load(Ordering::SeqCst) {
            return Err(ViewClosed);
        }
        self.updates.fetch_add(1, Ordering::SeqCst);
        *self.last.lock().unwrap() = text.to_string();
        Ok(())
    }
}
