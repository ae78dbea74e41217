use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Character-capped text accumulator. The cap counts characters, not bytes,
/// so multibyte input can never split a code point at the truncation edge.
#[derive(Clone)]
pub struct RingText {
    inner: Arc<Mutex<VecDeque<char>>>,
    cap: usize,
}

impl RingText {
    pub fn new(cap: usize) -> Self {
        Self {
            inner: Arc::new(Mutex::new(VecDeque::with_capacity(cap.min(16 * 1024)))),
            cap,
        }
    }

    pub fn cap(&self) -> usize {
        self.cap
    }

    /// Append `data`, keeping only the trailing `cap` characters once the
    /// buffer overflows. A single lock covers the append and the truncation,
    /// so snapshots never observe an intermediate state.
    pub fn push(&self, data: &str) {
        let mut g = self.inner.lock().unwrap();
        let incoming = data.chars().count();
        // Anything beyond the cap in a single push would be evicted
        // immediately, so skip it up front.
        let skip = incoming.saturating_sub(self.cap);
        let kept = incoming - skip;
        let overflow = g.len().saturating_add(kept).saturating_sub(self.cap);
        if overflow > 0 {
            g.drain(..overflow);
        }
        g.extend(data.chars().skip(skip));
    }

    /// Owned copy of the current contents. Later pushes cannot mutate the
    /// returned string.
    pub fn snapshot(&self) -> String {
        let g = self.inner.lock().unwrap();
        g.iter().collect()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().unwrap().is_empty()
    }
}
