//! Configuration data models
//!
//! Declared infrastructure inputs and the validator's own settings.

pub mod network;
pub mod settings;

pub use network::*;
pub use settings::*;

/// Default probe timeout in seconds
pub fn default_probe_timeout() -> u64 {
    30
}

/// Default log level
pub fn default_log_level() -> String {
    "info".to_string()
}
