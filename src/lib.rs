//! Configurable structured logging facade.
//!
//! Picks an output format (text or JSON), a minimum level and optional
//! source annotation, then exposes process-wide emission functions.
//!
//! ```ignore
//! logshim::init(logshim::Config {
//!     level: "debug".into(),
//!     format: "text".into(),
//!     ..Default::default()
//! });
//! logshim::info("listening", &logshim::attrs!["port" => 8080]);
//! let log = logshim::with(&logshim::attrs!["topic" => "tunnel"]);
//! logshim::warn!(logger: log, "slow handshake", "rtt_ms" => 420);
//! ```
//!
//! With `add_source` on, prefer the macros (`info!`, `warn!`, ...). They
//! record the enclosing function as `source.function`; the plain functions
//! only know the caller's file and line.

#[macro_use]
mod macros;

pub mod config;
pub mod error;
pub mod logging;

pub use config::Config;
pub use error::{LogError, LogResult};
pub use logging::{
    current, debug, debug_ctx, enabled, error, error_ctx, global, info, info_ctx, init,
    install_tracing_bridge, log, warn, warn_ctx, with, Attr, Context, FacadeLayer, Format, Level,
    Logger, LoggerHandle, Sink, Source,
};
