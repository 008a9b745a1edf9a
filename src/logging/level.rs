//! Severity ranks and output format selection.
//!
//! # Design Decisions
//! - Names are matched case-insensitively, surrounding whitespace ignored
//! - `from_name` never fails: unknown levels become `Info`, unknown formats `Json`
//! - `FromStr` is the strict counterpart, used by validation

use std::fmt;
use std::str::FromStr;

use crate::error::LogError;
use crate::logging::encoder::{Encoder, JsonEncoder, TextEncoder};

/// Ordered severity rank: `Debug < Info < Warn < Error`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Level {
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl Level {
    /// Wire name of the level.
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
        }
    }

    /// Lenient lookup. Anything unrecognized, including "", resolves to `Info`.
    pub fn from_name(name: &str) -> Self {
        name.parse().unwrap_or_default()
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "debug" => Ok(Level::Debug),
            "info" => Ok(Level::Info),
            "warn" => Ok(Level::Warn),
            "error" => Ok(Level::Error),
            _ => Err(LogError::UnknownLevel(s.to_string())),
        }
    }
}

impl From<tracing::Level> for Level {
    fn from(level: tracing::Level) -> Self {
        match level {
            tracing::Level::TRACE | tracing::Level::DEBUG => Level::Debug,
            tracing::Level::INFO => Level::Info,
            tracing::Level::WARN => Level::Warn,
            tracing::Level::ERROR => Level::Error,
        }
    }
}

/// Record serializer selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    /// Space-separated `key=value` tokens.
    Text,
    /// One JSON object per line.
    #[default]
    Json,
}

impl Format {
    /// Lenient lookup. Anything other than "text" selects JSON.
    pub fn from_name(name: &str) -> Self {
        name.parse().unwrap_or_default()
    }

    pub(crate) fn encoder(&self) -> Box<dyn Encoder> {
        match self {
            Format::Text => Box::new(TextEncoder),
            Format::Json => Box::new(JsonEncoder),
        }
    }
}

impl FromStr for Format {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Format::Text),
            "json" => Ok(Format::Json),
            _ => Err(LogError::UnknownFormat(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_ordering() {
        assert!(Level::Debug < Level::Info);
        assert!(Level::Info < Level::Warn);
        assert!(Level::Warn < Level::Error);
    }

    #[test]
    fn test_level_from_name() {
        assert_eq!(Level::from_name("debug"), Level::Debug);
        assert_eq!(Level::from_name("WARN"), Level::Warn);
        assert_eq!(Level::from_name(" Error "), Level::Error);
        assert_eq!(Level::from_name("verbose"), Level::Info);
        assert_eq!(Level::from_name(""), Level::Info);
    }

    #[test]
    fn test_level_strict_parse() {
        assert_eq!("info".parse::<Level>(), Ok(Level::Info));
        assert_eq!(
            "verbose".parse::<Level>(),
            Err(LogError::UnknownLevel("verbose".into()))
        );
    }

    #[test]
    fn test_tracing_level_mapping() {
        assert_eq!(Level::from(tracing::Level::TRACE), Level::Debug);
        assert_eq!(Level::from(tracing::Level::WARN), Level::Warn);
    }

    #[test]
    fn test_format_from_name() {
        assert_eq!(Format::from_name("text"), Format::Text);
        assert_eq!(Format::from_name("TEXT"), Format::Text);
        assert_eq!(Format::from_name("json"), Format::Json);
        assert_eq!(Format::from_name("yaml"), Format::Json);
        assert_eq!(Format::from_name(""), Format::Json);
        assert!("yaml".parse::<Format>().is_err());
    }
}
