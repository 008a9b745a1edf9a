//! Error types for the fallible helper surfaces.
//!
//! The facade itself never returns these: `init` and the emission functions
//! normalize or swallow every failure. Only strict parsing and flat attribute
//! pairing report errors.

use thiserror::Error;

/// Errors produced by strict parsing and attribute validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LogError {
    /// Level name outside debug|info|warn|error.
    #[error("unknown log level: {0:?}")]
    UnknownLevel(String),

    /// Format name outside text|json.
    #[error("unknown log format: {0:?}")]
    UnknownFormat(String),

    /// A flat key/value list had an odd number of entries.
    #[error("attribute list has odd length {len}; expected alternating keys and values")]
    OddAttributeList { len: usize },

    /// A key position in a flat key/value list did not hold a string.
    #[error("attribute key at index {index} is not a string")]
    NonStringKey { index: usize },
}

/// Result type for fallible logging helpers.
pub type LogResult<T> = Result<T, LogError>;
