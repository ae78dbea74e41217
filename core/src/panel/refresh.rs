use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::capture::LogCapture;

use super::view::LogView;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshExit {
    /// Explicit shutdown through the handle.
    Stopped,
    /// The host destroyed the text field; the task ended itself.
    ViewClosed,
}

/// Periodic snapshot-to-view pump with an explicit stop handle.
pub struct RefreshTask {
    stop_tx: watch::Sender<bool>,
    handle: JoinHandle<RefreshExit>,
}

impl RefreshTask {
    pub fn spawn(capture: Arc<LogCapture>, view: Arc<dyn LogView>, interval: Duration) -> Self {
        let (stop_tx, mut stop_rx) = watch::channel(false);
        let handle = tokio::spawn(async move {
            let mut tick = tokio::time::interval(interval.max(Duration::from_millis(16)));
            loop {
                tokio::select! {
                    _ = tick.tick() => {
                        if view.set_text(&capture.snapshot()).is_err() {
                            tracing::debug!("log view closed, refresh task exiting");
                            return RefreshExit::ViewClosed;
                        }
                    }
                    res = stop_rx.changed() => {
                        if res.is_err() || *stop_rx.borrow() {
                            return RefreshExit::Stopped;
                        }
                    }
                }
            }
        });
        Self { stop_tx, handle }
    }

    /// Stop the task and wait for it. Safe to call after the task already
    /// ended on its own.
    pub async fn shutdown(self) -> RefreshExit {
        let _ = self.stop_tx.send(true);
        self.handle.await.unwrap_or(RefreshExit::Stopped)
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}
