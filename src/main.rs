//! logshim demo
//!
//! Applies a logger configuration from flags and/or a TOML file, then either
//! emits one record or runs a short demonstration.
//!
//! ```text
//! $ logshim --format text --level debug
//! $ logshim --config log.toml "user login" user alice attempts 3
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use serde_json::Value;

use logshim::config::{load_config, load_config_strict, validate_config};
use logshim::{Attr, Config};

#[derive(Parser)]
#[command(name = "logshim")]
#[command(about = "Emit log records through a configured logging facade", long_about = None)]
struct Cli {
    /// TOML config file (level, format, add_source, output)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Reject unknown level or format values instead of falling back
    #[arg(long)]
    strict: bool,

    /// Minimum level: debug, info, warn, error
    #[arg(short, long)]
    level: Option<String>,

    /// Output format: text or json
    #[arg(short, long)]
    format: Option<String>,

    /// Attach file, line and function to each record
    #[arg(long)]
    add_source: bool,

    /// Message to emit at info level; runs the demo when omitted
    message: Option<String>,

    /// Alternating attribute keys and values
    attrs: Vec<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) if cli.strict => load_config_strict(path),
        Some(path) => load_config(path),
        None => Ok(Config::default()),
    }
    .unwrap_or_else(|e| {
        eprintln!("logshim: {}", e);
        std::process::exit(2);
    });

    if let Some(level) = cli.level {
        config.level = level;
    }
    if let Some(format) = cli.format {
        config.format = format;
    }
    config.add_source |= cli.add_source;

    if cli.strict {
        if let Err(errors) = validate_config(&config) {
            for error in errors {
                eprintln!("logshim: {}", error);
            }
            return ExitCode::from(2);
        }
    }

    logshim::init(config);

    match cli.message {
        Some(message) => emit_one(&message, cli.attrs),
        None => {
            run_demo();
            ExitCode::SUCCESS
        }
    }
}

fn emit_one(message: &str, args: Vec<String>) -> ExitCode {
    let values = args.into_iter().enumerate().map(|(i, arg)| {
        if i % 2 == 0 {
            Value::String(arg)
        } else {
            serde_json::from_str(&arg).unwrap_or(Value::String(arg))
        }
    });

    match Attr::pairs(values) {
        Ok(attrs) => {
            logshim::info(message, &attrs);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("logshim: {}", e);
            ExitCode::from(2)
        }
    }
}

fn run_demo() {
    logshim::debug("debug", &[]);
    logshim::info("info", &[]);
    logshim::warn("warn", &[]);
    logshim::error("error", &[]);

    let logger = logshim::with(&logshim::attrs!["topic" => "tunnel"]);
    logshim::info!(logger: logger, "info with key");
    logshim::debug!(logger: logger, "debug with key");
    logshim::warn!(logger: logger, "warn with key");
    logshim::error!(logger: logger, "error with key");

    if logshim::install_tracing_bridge().is_ok() {
        tracing::info!(origin = "tracing", "event through bridge");
    }
}
