//! Validators for probe and logging settings

use super::trait_def::Validate;
use crate::config::models::*;
use tracing::debug;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

impl Validate for ProbeSettings {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating probe settings");

        if self.timeout_secs == 0 {
            return Err("Probe timeout must be greater than 0".to_string());
        }

        if self.timeout_secs > 3600 {
            return Err("Probe timeout should not exceed 1 hour".to_string());
        }

        Ok(())
    }
}

impl Validate for LoggingSettings {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating logging settings");

        let level = self.level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(format!(
                "Unsupported log level: {}. Supported levels: {}",
                self.level,
                LOG_LEVELS.join(", ")
            ));
        }

        Ok(())
    }
}
