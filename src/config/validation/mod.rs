//! Settings validation
//!
//! - `trait_def`: Core Validate trait definition
//! - `settings_validators`: validators for probe and logging settings
//! - `tests`: Test suite for all validators

mod settings_validators;
mod trait_def;

pub use trait_def::Validate;
