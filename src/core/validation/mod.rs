//! Network configuration validation
//!
//! The [`ConfigValidator`] runs the [`NetworkConsistencyChecker`] and then,
//! unless the VPC check aborted, the [`AddressAllocationChecker`]. Findings
//! are collected in an [`ErrorList`] in the order checks were performed.

pub mod addresses;
pub mod context;
pub mod field;
pub mod network;
pub mod validator;


pub use addresses::AddressAllocationChecker;
pub use context::ValidationContext;
pub use field::{ErrorKind, ErrorList, FieldPath, ValidationError};
pub use network::NetworkConsistencyChecker;
pub use validator::ConfigValidator;
