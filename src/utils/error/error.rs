//! Error types for the preflight validator

use crate::core::types::ProbeError;
use thiserror::Error;

/// Result type alias for the crate
pub type Result<T> = std::result::Result<T, PreflightError>;

/// Main error type for everything outside the validation result itself.
///
/// Validation findings are never reported through this type; they are
/// returned as an [`ErrorList`](crate::core::validation::ErrorList).
#[derive(Error, Debug)]
pub enum PreflightError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Cloud probe errors
    #[error("Probe error: {0}")]
    Probe(#[from] ProbeError),

    /// Route table errors
    #[error("Route error: {0}")]
    Route(String),
}

impl PreflightError {
    /// Create configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create route error
    pub fn route(message: impl Into<String>) -> Self {
        Self::Route(message.into())
    }

    /// Whether the error came from the caller's inputs rather than the cloud
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::Config(_) | Self::Serialization(_) | Self::Yaml(_) | Self::Io(_)
        )
    }
}
