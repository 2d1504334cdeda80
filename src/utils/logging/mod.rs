//! Logging setup
//!
//! Installs a global `tracing` subscriber honouring `RUST_LOG` first and the
//! configured level otherwise.

use crate::config::models::{Format, LoggingSettings};
use crate::utils::error::{PreflightError, Result};
use tracing_subscriber::EnvFilter;

/// Build the filter for the configured level; `RUST_LOG` takes precedence
pub fn env_filter(settings: &LoggingSettings) -> Result<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(settings.level.to_ascii_lowercase())
            .map_err(|e| PreflightError::config(format!("Invalid log level: {}", e))),
    }
}

/// Install the global subscriber. Logs go to stderr so reports on stdout
/// stay machine readable.
pub fn init_logging(settings: &LoggingSettings) -> Result<()> {
    let filter = env_filter(settings)?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_writer(std::io::stderr);

    let installed = match settings.format {
        Format::Json => builder.json().try_init(),
        Format::Text => builder.try_init(),
    };
    installed.map_err(|e| PreflightError::config(format!("Failed to initialize logging: {}", e)))
}
