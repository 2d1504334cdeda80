//! Shared types at the cloud probe boundary

pub mod attribute;
pub mod errors;

pub use attribute::VpcAttribute;
pub use errors::ProbeError;
