//! Utility modules for the validator
//!
//! - **error**: crate-wide error type and result alias
//! - **logging**: tracing subscriber setup

pub mod error;
pub mod logging;

pub use error::{PreflightError, Result};
pub use logging::init_logging;
