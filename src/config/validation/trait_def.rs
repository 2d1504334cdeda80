//! Validation trait definition

/// Validation trait for settings structures
pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}
