//! Core traits module
//!
//! Contains the read-only cloud probe and the route table client.

pub mod probe;
pub mod routes;

pub use probe::*;
pub use routes::*;
