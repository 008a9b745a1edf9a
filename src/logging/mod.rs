//! Logging facade.
//!
//! # Data Flow
//! ```text
//! init(Config)
//!     → level (SLOG_LEVEL override, lenient parse)
//!     → Handler { filter, shaping, encoder, sink }
//!     → swapped into the global LoggerHandle
//!
//! info("msg", &[attrs]) / info!("msg", "k" => v)
//!     → global().current()
//!     → filter → Record → Encoder → Sink (one write)
//! ```
//!
//! # Design Decisions
//! - The global handle is created on first use with the default config
//! - Nothing here returns an error or panics on bad input
//! - Loggers can also be owned directly (`Logger`, `LoggerHandle`) instead of the global

use std::sync::{Arc, OnceLock};

pub mod attr;
pub mod bridge;
pub mod context;
pub mod encoder;
pub mod handle;
pub mod level;
pub mod logger;
pub mod record;
pub mod sink;

pub use attr::Attr;
pub use bridge::{install_tracing_bridge, FacadeLayer};
pub use context::Context;
pub use handle::LoggerHandle;
pub use level::{Format, Level};
pub use logger::{Handler, Logger};
pub use record::{Record, Source};
pub use sink::Sink;

use crate::config::Config;

static GLOBAL: OnceLock<LoggerHandle> = OnceLock::new();

/// The process-wide handle, default-initialized on first access.
pub fn global() -> &'static LoggerHandle {
    GLOBAL.get_or_init(LoggerHandle::default)
}

/// Replace the process-wide logger. Never fails.
pub fn init(config: Config) {
    global().init(config);
}

/// Snapshot of the process-wide logger.
pub fn current() -> Arc<Logger> {
    global().current()
}

/// A logger bound to `attrs` over the current process-wide configuration.
pub fn with(attrs: &[Attr]) -> Logger {
    global().with(attrs)
}

pub fn enabled(level: Level) -> bool {
    global().enabled(level)
}

#[track_caller]
pub fn log(level: Level, msg: &str, attrs: &[Attr]) {
    global().log(level, msg, attrs);
}

#[track_caller]
pub fn debug(msg: &str, attrs: &[Attr]) {
    global().debug(msg, attrs);
}

#[track_caller]
pub fn info(msg: &str, attrs: &[Attr]) {
    global().info(msg, attrs);
}

#[track_caller]
pub fn warn(msg: &str, attrs: &[Attr]) {
    global().warn(msg, attrs);
}

#[track_caller]
pub fn error(msg: &str, attrs: &[Attr]) {
    global().error(msg, attrs);
}

#[track_caller]
pub fn debug_ctx(ctx: &Context, msg: &str, attrs: &[Attr]) {
    global().debug_ctx(ctx, msg, attrs);
}

#[track_caller]
pub fn info_ctx(ctx: &Context, msg: &str, attrs: &[Attr]) {
    global().info_ctx(ctx, msg, attrs);
}

#[track_caller]
pub fn warn_ctx(ctx: &Context, msg: &str, attrs: &[Attr]) {
    global().warn_ctx(ctx, msg, attrs);
}

#[track_caller]
pub fn error_ctx(ctx: &Context, msg: &str, attrs: &[Attr]) {
    global().error_ctx(ctx, msg, attrs);
}
