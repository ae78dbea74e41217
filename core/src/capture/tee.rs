use std::io::{self, Write};

use crate::util::RingText;

use super::stream::ConsoleStream;

/// Decorator around a console destination: every write is forwarded
/// unchanged, then mirrored into the shared ring.
pub struct StreamTee {
    inner: Box<dyn ConsoleStream>,
    ring: RingText,
    // Trailing bytes of an incomplete UTF-8 sequence, carried to the next
    // write so the mirror never splits a code point.
    carry: Vec<u8>,
}

impl StreamTee {
    /// Wrap `inner`, mirroring into `ring`. An already-wrapped stream is
    /// returned unchanged so a reload cannot stack tees and double every
    /// line.
    pub fn wrap(inner: Box<dyn ConsoleStream>, ring: RingText) -> Box<dyn ConsoleStream> {
        if inner.is_captured() {
            return inner;
        }
        Box::new(Self {
            inner,
            ring,
            carry: Vec::new(),
        })
    }

    fn mirror(&mut self, buf: &[u8]) {
        let mut bytes = std::mem::take(&mut self.carry);
        bytes.extend_from_slice(buf);
        match std::str::from_utf8(&bytes) {
            Ok(s) => self.ring.push(s),
            Err(e) if e.error_len().is_none() => {
                // Incomplete trailing sequence: mirror the valid prefix and
                // hold the rest for the next write.
                let valid = e.valid_up_to();
                self.ring
                    .push(std::str::from_utf8(&bytes[..valid]).unwrap_or(""));
                self.carry = bytes[valid..].to_vec();
            }
            Err(_) => self.ring.push(&String::from_utf8_lossy(&bytes)),
        }
    }
}

impl Write for StreamTee {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        // Forwarding is best-effort: an unavailable console must not cost
        // the mirrored copy, and the caller never sees the failure.
        if self.inner.write_all(buf).is_ok() {
            let _ = self.inner.flush();
        }
        self.mirror(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        let _ = self.inner.flush();
        Ok(())
    }
}

impl ConsoleStream for StreamTee {
    fn is_terminal(&self) -> bool {
        self.inner.is_terminal()
    }

    fn is_captured(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::sync::{Arc, Mutex};

    /// Sink that records forwarded bytes and can be told to fail.
    #[derive(Clone, Default)]
    struct SharedSink {
        written: Arc<Mutex<Vec<u8>>>,
        fail: Arc<Mutex<bool>>,
    }

    impl Write for SharedSink {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if *self.fail.lock().unwrap() {
                return Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink gone"));
            }
            self.written.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl ConsoleStream for SharedSink {
        fn is_terminal(&self) -> bool {
            true
        }
    }

    #[test]
    fn forwards_bytes_unchanged() {
        let sink = SharedSink::default();
        let ring = RingText::new(8);
        let mut tee = StreamTee::wrap(Box::new(sink.clone()), ring.clone());

        tee.write_all(b"0123456789").unwrap();
        tee.write_all(b"ab").unwrap();

        // The ring truncates, the forwarded stream never does.
        assert_eq!(&*sink.written.lock().unwrap(), b"0123456789ab");
        assert_eq!(ring.snapshot(), "456789ab");
    }

    #[test]
    fn mirror_survives_forwarding_failure() {
        let sink = SharedSink::default();
        *sink.fail.lock().unwrap() = true;
        let ring = RingText::new(64);
        let mut tee = StreamTee::wrap(Box::new(sink.clone()), ring.clone());

        assert!(tee.write_all(b"lost console").is_ok());
        assert!(tee.flush().is_ok());

        assert!(sink.written.lock().unwrap().is_empty());
        assert_eq!(ring.snapshot(), "lost console");
    }

    #[test]
    fn double_wrap_is_a_noop() {
        let sink = SharedSink::default();
        let ring = RingText::new(64);
        let once = StreamTee::wrap(Box::new(sink.clone()), ring.clone());
        let mut twice = StreamTee::wrap(once, ring.clone());

        twice.write_all(b"once only").unwrap();

        assert_eq!(ring.snapshot(), "once only");
        assert_eq!(&*sink.written.lock().unwrap(), b"once only");
    }

    #[test]
    fn delegates_interactivity_probe() {
        let sink = SharedSink::default();
        let ring = RingText::new(8);
        let tee = StreamTee::wrap(Box::new(sink), ring);
        assert!(tee.is_terminal());
        assert!(tee.is_captured());
    }

    #[test]
    fn split_utf8_sequence_is_not_mangled() {
        let ring = RingText::new(64);
        let mut tee = StreamTee::wrap(Box::new(SharedSink::default()), ring.clone());

        let bytes = "héllo".as_bytes();
        tee.write_all(&bytes[..2]).unwrap();
        tee.write_all(&bytes[2..]).unwrap();

        assert_eq!(ring.snapshot(), "héllo");
    }
}
