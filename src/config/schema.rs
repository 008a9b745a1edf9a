//! Configuration schema.

use serde::{Deserialize, Serialize};

use crate::logging::level::{Format, Level};
use crate::logging::sink::Sink;

/// Environment variable that overrides the configured level when non-empty.
pub const LEVEL_ENV: &str = "SLOG_LEVEL";

/// Logger configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// "debug", "info", "warn" or "error". Anything else means info.
    pub level: String,

    /// "text" or "json". Anything else means json.
    pub format: String,

    /// Attach call-site file, line and function to each record.
    #[serde(alias = "addSource")]
    pub add_source: bool,

    /// Destination for records. Stdout when unset.
    #[serde(skip)]
    pub writer: Option<Sink>,

    /// File-config form of `writer`: "stdout", "stderr" or a file path.
    /// Resolved by the loader; an explicit `writer` takes precedence.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "json".to_string(),
            add_source: false,
            writer: None,
            output: None,
        }
    }
}

impl Config {
    pub fn with_writer(mut self, writer: Sink) -> Self {
        self.writer = Some(writer);
        self
    }

    /// Effective level. A non-empty override replaces the configured name.
    pub fn resolve_level(&self, level_override: Option<&str>) -> Level {
        match level_override {
            Some(name) if !name.is_empty() => Level::from_name(name),
            _ => Level::from_name(&self.level),
        }
    }

    pub fn resolve_format(&self) -> Format {
        Format::from_name(&self.format)
    }
}

/// Current value of [`LEVEL_ENV`], lower-cased, if set and non-empty.
pub fn env_level_override() -> Option<String> {
    std::env::var(LEVEL_ENV)
        .ok()
        .filter(|v| !v.is_empty())
        .map(|v| v.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.resolve_level(None), Level::Info);
        assert_eq!(config.resolve_format(), Format::Json);
        assert!(!config.add_source);
        assert!(config.writer.is_none());
    }

    #[test]
    fn test_level_override_wins() {
        let config = Config {
            level: "error".into(),
            ..Config::default()
        };
        assert_eq!(config.resolve_level(Some("debug")), Level::Debug);
        assert_eq!(config.resolve_level(Some("")), Level::Error);
        assert_eq!(config.resolve_level(Some("bogus")), Level::Info);
    }

    #[test]
    fn test_unknown_values_normalize() {
        let config = Config {
            level: "verbose".into(),
            format: "xml".into(),
            ..Config::default()
        };
        assert_eq!(config.resolve_level(None), Level::Info);
        assert_eq!(config.resolve_format(), Format::Json);
    }

    #[test]
    fn test_deserialize_partial() {
        let config: Config = toml::from_str("addSource = true\nformat = \"text\"").unwrap();
        assert!(config.add_source);
        assert_eq!(config.format, "text");
        assert_eq!(config.level, "info");
    }
}
