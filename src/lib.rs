//! # infra-preflight
//!
//! Validates a declared VPC network configuration against live cloud state
//! before any provisioning happens.
//!
//! ## Features
//!
//! - **VPC consistency**: the referenced VPC exists, has DNS support and
//!   hostnames enabled and an internet gateway attached
//! - **Elastic IP allocations**: declared allocations exist and are free or
//!   already attached to the cluster's own NAT gateways
//! - **Field-scoped findings**: an ordered list of `NotFound` / `Invalid` /
//!   `Internal` errors, empty when the configuration is acceptable
//! - **Read-only**: the cloud is only queried through [`CloudStateProbe`]
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use infra_preflight::{ConfigValidator, NetworkConfig, SnapshotProbe, ValidationContext, ZoneConfig};
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let probe = SnapshotProbe::from_file("cloud-state.yaml").await?;
//!     let validator = ConfigValidator::new(Arc::new(probe));
//!
//!     let config = NetworkConfig::new("shoot--foo--bar")
//!         .with_vpc("vpc-123456")
//!         .with_zone(ZoneConfig::with_allocation("eipalloc-0e2669d4b46150ee4"));
//!
//!     let ctx = ValidationContext::with_timeout(Duration::from_secs(30));
//!     for error in &validator.validate(&ctx, &config).await {
//!         println!("{}", error);
//!     }
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]

pub mod cli;
pub mod config;
pub mod core;
pub mod utils;

// Re-export main types
pub use crate::config::models::{InfrastructureConfig, NetworkConfig, ZoneConfig};
pub use crate::config::Settings;
pub use crate::core::probes::{CloudSnapshot, SnapshotProbe};
pub use crate::core::routes::add_default_route;
pub use crate::core::traits::{CloudStateProbe, Route, RouteTable, RouteTableClient};
pub use crate::core::types::{ProbeError, VpcAttribute};
pub use crate::core::validation::{
    ConfigValidator, ErrorKind, ErrorList, FieldPath, ValidationContext, ValidationError,
};
pub use crate::utils::error::{PreflightError, Result};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
/// One-line summary, used as the CLI about text
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Metadata exported by the build script
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildInfo {
    pub version: &'static str,
    /// Seconds since epoch
    pub build_time: &'static str,
    pub git_hash: &'static str,
    pub rust_version: &'static str,
}

impl std::fmt::Display for BuildInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} ({}, {})",
            NAME, self.version, self.git_hash, self.rust_version
        )
    }
}

pub fn build_info() -> BuildInfo {
    BuildInfo {
        version: VERSION,
        build_time: option_env!("BUILD_TIME").unwrap_or("unknown"),
        git_hash: option_env!("GIT_HASH").unwrap_or("unknown"),
        rust_version: option_env!("RUST_VERSION").unwrap_or("unknown"),
    }
}
