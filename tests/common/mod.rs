//! Shared utilities for integration tests.

use std::io::{self, Write};
use std::sync::{Arc, Mutex, MutexGuard};

use logshim::Sink;
use serde_json::Value;

/// An in-memory writer whose contents can be inspected after logging.
#[derive(Clone, Default)]
pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

#[allow(dead_code)]
impl SharedBuffer {
    pub fn sink(&self) -> Sink {
        Sink::new(self.clone())
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }

    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_owned).collect()
    }

    /// Parse every line as JSON; panics on a malformed line.
    pub fn json_lines(&self) -> Vec<Value> {
        self.lines()
            .iter()
            .map(|l| {
                serde_json::from_str(l).unwrap_or_else(|e| panic!("bad JSON line {:?}: {}", l, e))
            })
            .collect()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Serialize tests that reconfigure the process-wide logger.
#[allow(dead_code)]
pub fn serial() -> MutexGuard<'static, ()> {
    static LOCK: Mutex<()> = Mutex::new(());
    LOCK.lock().unwrap_or_else(|e| e.into_inner())
}

/// Remove the timestamp so records from different calls compare equal.
#[allow(dead_code)]
pub fn without_time(mut record: Value) -> Value {
    if let Some(obj) = record.as_object_mut() {
        obj.remove("time");
    }
    record
}
