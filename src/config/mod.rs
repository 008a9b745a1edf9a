//! Logger configuration.
//!
//! # Data Flow
//! ```text
//! config file (TOML) or Config literal
//!     → loader.rs (parse, resolve output → Sink)
//!     → validation.rs (optional strict checks)
//!     → Config (immutable)
//!     → logging::init (normalize, build Logger, swap into global handle)
//! ```
//!
//! # Design Decisions
//! - Level and format stay strings; normalization happens at `init`
//! - All fields have defaults so an empty file is a valid config
//! - Applying a config never fails; only loading from disk can

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, load_config_strict, ConfigError};
pub use schema::{Config, LEVEL_ENV};
pub use validation::{validate_config, ValidationError};
