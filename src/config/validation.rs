//! Configuration validation.
//!
//! # Responsibilities
//! - Report level and format names that `init` would silently replace
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Advisory only: `init` applies any config without calling this

use thiserror::Error;

use crate::config::schema::Config;
use crate::logging::level::{Format, Level};

/// A configuration value that would fall back to a default.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("unknown level {0:?} (falls back to info)")]
    UnknownLevel(String),

    #[error("unknown format {0:?} (falls back to json)")]
    UnknownFormat(String),
}

pub fn validate_config(config: &Config) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.level.parse::<Level>().is_err() {
        errors.push(ValidationError::UnknownLevel(config.level.clone()));
    }
    if config.format.parse::<Format>().is_err() {
        errors.push(ValidationError::UnknownFormat(config.format.clone()));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
