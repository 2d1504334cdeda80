//! Core functionality
//!
//! Probe boundary traits and types, the validation checkers, and probe
//! implementations.

pub mod probes;
pub mod routes;
pub mod traits;
pub mod types;
pub mod validation;
