//! Log records and the shaping policy applied before serialization.
//!
//! # Shaping
//! - Timestamps render as `YYYY-MM-DD HH:MM:SS.mmm` in local time
//! - Source files keep only their last two path segments
//! - Function names keep only their last qualifier-separated component

use chrono::{DateTime, Local};

use crate::logging::attr::Attr;
use crate::logging::level::Level;

/// Timestamp layout used for every record.
pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Raw call-site location, as captured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Source {
    pub file: &'static str,
    pub line: u32,
    /// Fully qualified function path, or "" when unknown.
    pub function: &'static str,
}

impl Source {
    pub fn new(file: &'static str, line: u32, function: &'static str) -> Self {
        Self { file, line, function }
    }

    /// Location of the caller of a `#[track_caller]` function.
    /// The function name is not available this way.
    #[track_caller]
    pub fn caller() -> Self {
        let location = std::panic::Location::caller();
        Self::new(location.file(), location.line(), "")
    }
}

/// A single log event. Built per emission and dropped after writing.
#[derive(Debug)]
pub struct Record<'a> {
    pub time: DateTime<Local>,
    pub level: Level,
    pub message: &'a str,
    /// Attributes bound through `with`, emitted first.
    pub bound: &'a [Attr],
    /// Attributes passed at the call site.
    pub attrs: &'a [Attr],
    pub source: Option<Source>,
}

impl<'a> Record<'a> {
    /// Bound attributes followed by call-site attributes. No de-duplication.
    pub fn attrs(&self) -> impl Iterator<Item = &'a Attr> {
        self.bound.iter().chain(self.attrs.iter())
    }
}

/// Source location after shaping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortSource<'a> {
    pub function: &'a str,
    pub file: String,
    pub line: u32,
}

/// Record-shaping policy owned by a handler.
#[derive(Debug, Clone, Copy)]
pub struct Shaping {
    pub time_format: &'static str,
    pub add_source: bool,
}

impl Shaping {
    pub fn new(add_source: bool) -> Self {
        Self {
            time_format: TIME_FORMAT,
            add_source,
        }
    }

    pub fn time(&self, time: &DateTime<Local>) -> String {
        time.format(self.time_format).to_string()
    }

    /// `None` when source attachment is disabled or nothing was captured.
    pub fn source(&self, source: Option<&Source>) -> Option<ShortSource<'static>> {
        if !self.add_source {
            return None;
        }
        source.map(|s| ShortSource {
            function: shorten_function(s.function),
            file: shorten_file(s.file),
            line: s.line,
        })
    }
}

/// Keep the last two segments of a path, joined with `/`.
pub fn shorten_file(path: &str) -> String {
    let parts: Vec<&str> = path.split(|c| c == '/' || c == '\\').collect();
    if parts.len() > 2 {
        parts[parts.len() - 2..].join("/")
    } else {
        path.to_string()
    }
}

/// Strip module, type and closure qualification from a function path.
pub fn shorten_function(name: &str) -> &str {
    name.rsplit("::")
        .find(|segment| !segment.is_empty() && *segment != "{{closure}}")
        .map(|segment| segment.rsplit('.').next().unwrap_or(segment))
        .unwrap_or("")
}
