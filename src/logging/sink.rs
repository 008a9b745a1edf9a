//! Output sinks.
//!
//! A sink is a writer behind a mutex. Each record is written with a single
//! `write_all` while the lock is held, so concurrent emitters never interleave
//! within a line.

use std::fmt;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

/// Shareable destination for encoded records.
#[derive(Clone)]
pub struct Sink {
    inner: Arc<Mutex<Box<dyn Write + Send>>>,
    name: &'static str,
}

impl Sink {
    /// Wrap an arbitrary writer.
    pub fn new<W: Write + Send + 'static>(writer: W) -> Self {
        Self::named(writer, "writer")
    }

    fn named<W: Write + Send + 'static>(writer: W, name: &'static str) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Box::new(writer))),
            name,
        }
    }

    pub fn stdout() -> Self {
        Self::named(io::stdout(), "stdout")
    }

    pub fn stderr() -> Self {
        Self::named(io::stderr(), "stderr")
    }

    /// Write one encoded record and flush.
    pub fn write_record(&self, record: &[u8]) -> io::Result<()> {
        // Poisoned locks are recovered.
        let mut writer = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        writer.write_all(record)?;
        writer.flush()
    }
}

impl Default for Sink {
    fn default() -> Self {
        Self::stdout()
    }
}

impl fmt::Debug for Sink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sink").field("name", &self.name).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Default)]
    struct Shared(Arc<Mutex<Vec<u8>>>);

    impl Write for Shared {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    struct Broken;

    impl Write for Broken {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_record() {
        let shared = Shared::default();
        let sink = Sink::new(shared.clone());
        sink.write_record(b"one\n").unwrap();
        sink.clone().write_record(b"two\n").unwrap();
        assert_eq!(&*shared.0.lock().unwrap(), b"one\ntwo\n");
    }

    #[test]
    fn test_write_error_returned() {
        let sink = Sink::new(Broken);
        assert!(sink.write_record(b"x\n").is_err());
    }

    #[test]
    fn test_debug_name() {
        assert_eq!(format!("{:?}", Sink::stderr()), r#"Sink { name: "stderr" }"#);
    }
}
