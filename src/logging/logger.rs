//! Handlers and loggers.
//!
//! # Responsibilities
//! - `Handler`: severity filter, shaping policy, encoder and sink, built once per config
//! - `Logger`: a handler plus bound attributes; the emission surface
//!
//! # Design Decisions
//! - Filtering happens before a record is built
//! - One buffer per record, written with a single call
//! - Encode and write failures are dropped; emission never reports errors

use std::sync::Arc;

use chrono::Local;

use crate::config::schema::{env_level_override, Config};
use crate::logging::attr::Attr;
use crate::logging::context::Context;
use crate::logging::encoder::Encoder;
use crate::logging::level::{Format, Level};
use crate::logging::record::{Record, Shaping, Source};
use crate::logging::sink::Sink;

/// Filter, shaping, encoder and sink for one applied configuration.
#[derive(Debug)]
pub struct Handler {
    level: Level,
    format: Format,
    shaping: Shaping,
    encoder: Box<dyn Encoder>,
    sink: Sink,
}

impl Handler {
    pub fn new(level: Level, format: Format, add_source: bool, sink: Sink) -> Self {
        Self {
            level,
            format,
            shaping: Shaping::new(add_source),
            encoder: format.encoder(),
            sink,
        }
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn format(&self) -> Format {
        self.format
    }

    pub fn add_source(&self) -> bool {
        self.shaping.add_source
    }

    pub fn enabled(&self, level: Level) -> bool {
        level >= self.level
    }

    /// Encode and write one record. The context is passed through unchanged.
    pub fn handle(&self, _ctx: &Context, record: &Record<'_>) {
        let mut buf = Vec::with_capacity(256);
        if self.encoder.encode(record, &self.shaping, &mut buf).is_err() {
            return;
        }
        buf.push(b'\n');
        let _ = self.sink.write_record(&buf);
    }
}

/// A configured logger, optionally carrying bound attributes.
///
/// Cloning is cheap. A logger keeps the handler it was built with, so
/// loggers derived through [`Logger::with`] do not follow later `init` calls.
#[derive(Debug, Clone)]
pub struct Logger {
    handler: Arc<Handler>,
    attrs: Vec<Attr>,
}

impl Default for Logger {
    fn default() -> Self {
        Self::from_config(Config::default())
    }
}

impl Logger {
    /// Build from a config, applying the `SLOG_LEVEL` override if set.
    pub fn from_config(config: Config) -> Self {
        let level_override = env_level_override();
        Self::build(config, level_override.as_deref())
    }

    /// Build from a config with an explicit level override.
    pub fn build(config: Config, level_override: Option<&str>) -> Self {
        let level = config.resolve_level(level_override);
        let format = config.resolve_format();
        let sink = config.writer.unwrap_or_default();
        Self::new(Handler::new(level, format, config.add_source, sink))
    }

    pub fn new(handler: Handler) -> Self {
        Self {
            handler: Arc::new(handler),
            attrs: Vec::new(),
        }
    }

    pub fn handler(&self) -> &Handler {
        &self.handler
    }

    pub fn attrs(&self) -> &[Attr] {
        &self.attrs
    }

    pub fn enabled(&self, level: Level) -> bool {
        self.handler.enabled(level)
    }

    /// Derive a logger that adds `attrs` to every record, after any
    /// attributes already bound.
    pub fn with(&self, attrs: &[Attr]) -> Logger {
        let mut bound = Vec::with_capacity(self.attrs.len() + attrs.len());
        bound.extend_from_slice(&self.attrs);
        bound.extend_from_slice(attrs);
        Logger {
            handler: Arc::clone(&self.handler),
            attrs: bound,
        }
    }

    /// Emit a record with an explicit context and source.
    pub fn emit(
        &self,
        ctx: &Context,
        level: Level,
        msg: &str,
        attrs: &[Attr],
        source: Option<Source>,
    ) {
        if !self.enabled(level) {
            return;
        }
        let record = Record {
            time: Local::now(),
            level,
            message: msg,
            bound: &self.attrs,
            attrs,
            source,
        };
        self.handler.handle(ctx, &record);
    }

    #[track_caller]
    pub fn log(&self, level: Level, msg: &str, attrs: &[Attr]) {
        self.emit(&Context::background(), level, msg, attrs, Some(Source::caller()));
    }

    #[track_caller]
    pub fn log_ctx(&self, ctx: &Context, level: Level, msg: &str, attrs: &[Attr]) {
        self.emit(ctx, level, msg, attrs, Some(Source::caller()));
    }

    #[track_caller]
    pub fn debug(&self, msg: &str, attrs: &[Attr]) {
        self.log(Level::Debug, msg, attrs);
    }

    #[track_caller]
    pub fn info(&self, msg: &str, attrs: &[Attr]) {
        self.log(Level::Info, msg, attrs);
    }

    #[track_caller]
    pub fn warn(&self, msg: &str, attrs: &[Attr]) {
        self.log(Level::Warn, msg, attrs);
    }

    #[track_caller]
    pub fn error(&self, msg: &str, attrs: &[Attr]) {
        self.log(Level::Error, msg, attrs);
    }

    #[track_caller]
    pub fn debug_ctx(&self, ctx: &Context, msg: &str, attrs: &[Attr]) {
        self.log_ctx(ctx, Level::Debug, msg, attrs);
    }

    #[track_caller]
    pub fn info_ctx(&self, ctx: &Context, msg: &str, attrs: &[Attr]) {
        self.log_ctx(ctx, Level::Info, msg, attrs);
    }

    #[track_caller]
    pub fn warn_ctx(&self, ctx: &Context, msg: &str, attrs: &[Attr]) {
        self.log_ctx(ctx, Level::Warn, msg, attrs);
    }

    #[track_caller]
    pub fn error_ctx(&self, ctx: &Context, msg: &str, attrs: &[Attr]) {
        self.log_ctx(ctx, Level::Error, msg, attrs);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Write};
    use std::sync::Mutex;

    #[derive(Clone, Default)]
    struct Buffer(Arc<Mutex<Vec<u8>>>);

    impl Buffer {
        fn lines(&self) -> Vec<serde_json::Value> {
            let text = String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned();
            text.lines().map(|l| serde_json::from_str(l).unwrap()).collect()
        }
    }

    impl Write for Buffer {
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
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
    }

    fn logger(level: &str, add_source: bool) -> (Logger, Buffer) {
        let buffer = Buffer::default();
        let config = Config {
            level: level.into(),
            add_source,
            ..Config::default()
        }
        .with_writer(Sink::new(buffer.clone()));
        (Logger::build(config, None), buffer)
    }

    #[test]
    fn test_filtering() {
        let (logger, buffer) = logger("warn", false);
        logger.debug("d", &[]);
        logger.info("i", &[]);
        logger.warn("w", &[]);
        logger.error("e", &[]);

        let lines = buffer.lines();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["level"], "WARN");
        assert_eq!(lines[1]["msg"], "e");
    }

    #[test]
    fn test_with_does_not_touch_parent() {
        let (logger, buffer) = logger("info", false);
        let bound = logger.with(&[Attr::new("topic", "tunnel")]);
        bound.info("bound", &[Attr::new("n", 1)]);
        logger.info("plain", &[]);

        let lines = buffer.lines();
        assert_eq!(lines[0]["topic"], "tunnel");
        assert_eq!(lines[0]["n"], 1);
        assert!(lines[1].get("topic").is_none());
    }

    #[test]
    fn test_with_accumulates() {
        let (logger, _) = logger("info", false);
        let bound = logger
            .with(&[Attr::new("a", 1)])
            .with(&[Attr::new("b", 2), Attr::new("a", 3)]);
        let keys: Vec<&str> = bound.attrs().iter().map(|a| a.key.as_ref()).collect();
        assert_eq!(keys, vec!["a", "b", "a"]);
    }

    #[test]
    fn test_source_from_track_caller() {
        let (logger, buffer) = logger("info", true);
        logger.info("here", &[]);

        let lines = buffer.lines();
        assert_eq!(lines[0]["source"]["file"], "logging/logger.rs");
        assert!(lines[0]["source"].get("function").is_none());
    }

    #[test]
    fn test_cancelled_context_still_emits() {
        let (logger, buffer) = logger("info", false);
        let ctx = Context::background();
        ctx.cancel();
        logger.info_ctx(&ctx, "still here", &[]);
        assert_eq!(buffer.lines().len(), 1);
    }

    #[test]
    fn test_write_failures_are_swallowed() {
        let config = Config {
            level: "debug".into(),
            ..Config::default()
        }
        .with_writer(Sink::new(Broken));
        let broken = Logger::build(config, None);
        let ctx = Context::background();

        broken.debug("d", &[]);
        broken.info("i", &[Attr::new("n", 1)]);
        broken.warn("w", &[]);
        broken.error("e", &[]);
        broken.debug_ctx(&ctx, "d", &[]);
        broken.info_ctx(&ctx, "i", &[]);
        broken.warn_ctx(&ctx, "w", &[]);
        broken.error_ctx(&ctx, "e", &[]);
        broken.log(Level::Error, "again", &[]);
        broken.with(&[Attr::new("topic", "tunnel")]).error("bound", &[]);

        let (logger, buffer) = logger("info", false);
        logger.info("after", &[]);
        let lines = buffer.lines();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0]["msg"], "after");
    }

    #[test]
    fn test_handler_reports_config() {
        let config = Config {
            level: "DEBUG".into(),
            format: "text".into(),
            add_source: true,
            ..Config::default()
        };
        let logger = Logger::build(config, Some("error"));
        assert_eq!(logger.handler().level(), Level::Error);
        assert_eq!(logger.handler().format(), Format::Text);
        assert!(logger.handler().add_source());
    }
}
