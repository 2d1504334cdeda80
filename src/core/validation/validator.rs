//! Root validator orchestrating the VPC and address allocation checks

use std::sync::Arc;
use tracing::{debug, info};

use super::addresses::AddressAllocationChecker;
use super::context::ValidationContext;
use super::field::ErrorList;
use super::network::NetworkConsistencyChecker;
use crate::config::models::NetworkConfig;
use crate::core::traits::CloudStateProbe;

/// Validates a declared network configuration against live cloud state.
///
/// Read-only: the probe is only queried, never mutated. All state is
/// scoped to a single [`validate`](Self::validate) call.
#[derive(Clone)]
pub struct ConfigValidator {
    probe: Arc<dyn CloudStateProbe>,
}

impl ConfigValidator {
    pub fn new(probe: Arc<dyn CloudStateProbe>) -> Self {
        Self { probe }
    }

    /// Run all checks and return the findings in check order.
    ///
    /// VPC findings precede address allocation findings. The address
    /// allocation checker is skipped when the VPC check aborted with a
    /// `NotFound` or `Internal` entry. An empty list means the
    /// configuration is acceptable.
    pub async fn validate(&self, ctx: &ValidationContext, config: &NetworkConfig) -> ErrorList {
        info!(cluster = %config.cluster_name, "Validating network configuration");
        let mut errors = ErrorList::new();

        if let Some(vpc_id) = config.vpc_id() {
            let vpc_errors = NetworkConsistencyChecker::new(self.probe.as_ref(), ctx)
                .check(vpc_id)
                .await;
            let aborted = vpc_errors.has_fatal();
            errors.extend(vpc_errors);
            if aborted {
                debug!(vpc_id, "VPC check aborted, skipping address allocation checks");
                return errors;
            }
        }

        errors.extend(
            AddressAllocationChecker::new(self.probe.as_ref(), ctx)
                .check(&config.cluster_name, &config.zones)
                .await,
        );

        info!(errors = errors.len(), "Network configuration validation completed");
        errors
    }
}

impl std::fmt::Debug for ConfigValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigValidator").finish_non_exhaustive()
    }
}
