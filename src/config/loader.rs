//! Configuration loading from disk.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::schema::Config;
use crate::config::validation::{validate_config, ValidationError};
use crate::logging::sink::Sink;

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load configuration from a TOML file and open its output.
///
/// Unrecognized level or format values are kept as written and normalized
/// later by `init`.
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut config: Config = toml::from_str(&content)?;

    if config.writer.is_none() {
        if let Some(output) = config.output.as_deref() {
            config.writer = Some(open_output(output)?);
        }
    }

    Ok(config)
}

/// Like [`load_config`], but rejects unrecognized level or format values.
pub fn load_config_strict(path: &Path) -> Result<Config, ConfigError> {
    let config = load_config(path)?;
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

/// Resolve an `output` setting into a sink. Files are opened for append.
pub fn open_output(output: &str) -> Result<Sink, ConfigError> {
    match output {
        "" | "stdout" => Ok(Sink::stdout()),
        "stderr" => Ok(Sink::stderr()),
        path => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|source| ConfigError::Io {
                    path: PathBuf::from(path),
                    source,
                })?;
            Ok(Sink::new(file))
        }
    }
}
