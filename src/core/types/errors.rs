//! Errors raised at the cloud probe boundary

use thiserror::Error;

/// Failure of a single probe call.
///
/// Checkers branch on the variant, never on the message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProbeError {
    /// The referenced resource does not exist
    #[error("{resource} {id} not found")]
    NotFound { resource: &'static str, id: String },

    /// Transport, authentication or throttling failure
    #[error("{0}")]
    Transport(String),

    /// The caller cancelled the call or its deadline passed
    #[error("probe call cancelled: {0}")]
    Cancelled(String),
}

impl ProbeError {
    /// Create not found error
    pub fn not_found(resource: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            resource,
            id: id.into(),
        }
    }

    /// Create transport error
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }

    /// Create cancellation error
    pub fn cancelled(reason: impl Into<String>) -> Self {
        Self::Cancelled(reason.into())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
