//! Replaceable logger state.
//!
//! `init` builds a complete new `Logger` and swaps it in. Emissions that
//! already loaded the previous logger finish on it; there is no cutover
//! guarantee for calls racing a swap.

use std::sync::Arc;

use arc_swap::ArcSwap;

use crate::config::schema::Config;
use crate::logging::attr::Attr;
use crate::logging::context::Context;
use crate::logging::level::Level;
use crate::logging::logger::Logger;

/// An atomically swappable handle to the active logger.
#[derive(Debug)]
pub struct LoggerHandle {
    current: ArcSwap<Logger>,
}

impl Default for LoggerHandle {
    /// JSON to stdout at info, no source, subject to `SLOG_LEVEL`.
    fn default() -> Self {
        Self::new(Logger::default())
    }
}

impl LoggerHandle {
    pub fn new(logger: Logger) -> Self {
        Self {
            current: ArcSwap::from_pointee(logger),
        }
    }

    /// Apply a config, honoring `SLOG_LEVEL`. Never fails.
    pub fn init(&self, config: Config) {
        self.replace(Logger::from_config(config));
    }

    /// Apply a config with an explicit level override instead of the environment.
    pub fn init_with_level_override(&self, config: Config, level_override: Option<&str>) {
        self.replace(Logger::build(config, level_override));
    }

    pub fn replace(&self, logger: Logger) {
        self.current.store(Arc::new(logger));
    }

    /// Snapshot of the active logger.
    pub fn current(&self) -> Arc<Logger> {
        self.current.load_full()
    }

    pub fn enabled(&self, level: Level) -> bool {
        self.current.load().enabled(level)
    }

    /// A logger bound to `attrs` over the active configuration.
    pub fn with(&self, attrs: &[Attr]) -> Logger {
        self.current.load().with(attrs)
    }

    #[track_caller]
    pub fn log(&self, level: Level, msg: &str, attrs: &[Attr]) {
        self.current.load().log(level, msg, attrs);
    }

    #[track_caller]
    pub fn log_ctx(&self, ctx: &Context, level: Level, msg: &str, attrs: &[Attr]) {
        self.current.load().log_ctx(ctx, level, msg, attrs);
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
