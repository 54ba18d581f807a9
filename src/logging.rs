//! Logging bootstrap
//!
//! Installs the global `tracing` subscriber for the CLI. Output goes to
//! stderr (stdout carries command results) or to the configured file.
//! `RUST_LOG` takes precedence over the configured level.

use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::config::{ConfigError, LoggingConfig};

/// Build the filter directive for a configured level
pub fn filter_directive(level: &str) -> String {
    format!("penwise={}", level.trim().to_ascii_lowercase())
}

/// Initialize logging from configuration
pub fn init_logging(config: &LoggingConfig) -> Result<(), ConfigError> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(filter_directive(&config.level)))
        .map_err(|e| ConfigError::Logging(format!("invalid level {:?}: {}", config.level, e)))?;

    let json = match config.format.as_str() {
        "json" => true,
        "pretty" => false,
        other => {
            return Err(ConfigError::Logging(format!(
                "unknown log format {:?} (expected pretty or json)",
                other
            )))
        }
    };

    let layer = match &config.file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| ConfigError::Logging(format!("cannot open {}: {}", path, e)))?;
            let layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file));
            if json {
                layer.json().boxed()
            } else {
                layer.boxed()
            }
        }
        None => {
            let layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);
            if json {
                layer.json().boxed()
            } else {
                layer.boxed()
            }
        }
    };

    tracing_subscriber::registry()
        .with(layer)
        .with(filter)
        .try_init()
        .map_err(|e| ConfigError::Logging(e.to_string()))
}
