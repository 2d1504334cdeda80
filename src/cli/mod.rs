//! Command line interface
//!
//! - `args`: clap argument definitions
//! - `report`: rendering of validation findings

pub mod args;
pub mod report;

pub use args::{AddRouteArgs, Args, Command, ValidateArgs};
pub use report::render_report;
