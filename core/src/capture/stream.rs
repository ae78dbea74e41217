use std::io::{self, Write};

/// A console destination as seen by the tee: a writer plus the capability
/// probes downstream consumers rely on.
pub trait ConsoleStream: Write + Send {
    /// Interactivity probe. Loggers use this to decide whether to emit
    /// color codes, so a wrapper must answer for the real destination.
    fn is_terminal(&self) -> bool {
        false
    }

    /// True only for tee wrappers. Guards against nesting on plugin reload.
    fn is_captured(&self) -> bool {
        false
    }
}

impl ConsoleStream for io::Stdout {
    fn is_terminal(&self) -> bool {
        atty::is(atty::Stream::Stdout)
    }
}

impl ConsoleStream for io::Stderr {
    fn is_terminal(&self) -> bool {
        atty::is(atty::Stream::Stderr)
    }
}
