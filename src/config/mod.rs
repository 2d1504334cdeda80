//! Configuration management for the validator
//!
//! This module handles loading, environment overrides and validation of the
//! validator settings, plus the declared network configuration models.

pub mod models;
pub mod validation;

pub use models::*;
pub use validation::Validate;

use crate::utils::error::{PreflightError, Result};
use std::env;
use std::path::Path;
use tracing::{debug, info};

/// Main settings struct for the validator
#[derive(Debug, Clone, Default)]
pub struct Settings {
    pub preflight: PreflightSettings,
}

impl Settings {
    /// Load settings from a YAML file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading settings from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| PreflightError::config(format!("Failed to read settings file: {}", e)))?;

        let preflight: PreflightSettings = serde_yaml::from_str(&content)
            .map_err(|e| PreflightError::config(format!("Failed to parse settings: {}", e)))?;

        let settings = Self { preflight };
        settings.validate()?;

        debug!("Settings loaded successfully");
        Ok(settings)
    }

    /// Defaults with environment overrides applied
    pub fn from_env() -> Result<Self> {
        let settings = Self::default().with_env_overrides()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Apply `PREFLIGHT_*` environment variables on top of these settings
    pub fn with_env_overrides(mut self) -> Result<Self> {
        if let Ok(timeout) = env::var("PREFLIGHT_PROBE_TIMEOUT") {
            self.preflight.probe.timeout_secs = timeout
                .parse()
                .map_err(|e| PreflightError::config(format!("Invalid probe timeout: {}", e)))?;
        }
        if let Ok(level) = env::var("PREFLIGHT_LOG_LEVEL") {
            self.preflight.logging.level = level;
        }
        if let Ok(format) = env::var("PREFLIGHT_LOG_FORMAT") {
            self.preflight.logging.format = format.parse().map_err(PreflightError::Config)?;
        }
        if let Ok(format) = env::var("PREFLIGHT_OUTPUT_FORMAT") {
            self.preflight.output.format = format.parse().map_err(PreflightError::Config)?;
        }
        Ok(self)
    }

    pub fn probe(&self) -> &ProbeSettings {
        &self.preflight.probe
    }

    pub fn logging(&self) -> &LoggingSettings {
        &self.preflight.logging
    }

    pub fn output(&self) -> &OutputSettings {
        &self.preflight.output
    }

    /// Validate the entire settings tree
    pub fn validate(&self) -> Result<()> {
        debug!("Validating settings");

        self.preflight
            .probe
            .validate()
            .map_err(|e| PreflightError::config(format!("Probe settings error: {}", e)))?;

        self.preflight
            .logging
            .validate()
            .map_err(|e| PreflightError::config(format!("Logging settings error: {}", e)))?;

        Ok(())
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(&self.preflight).map_err(|e| {
            PreflightError::config(format!("Failed to serialize settings to YAML: {}", e))
        })
    }
}
