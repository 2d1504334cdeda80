//! Elastic IP allocation checks

use tracing::{debug, info, warn};

use super::context::ValidationContext;
use super::field::{ErrorList, FieldPath};
use crate::config::models::{ZoneConfig, allocation_ids};
use crate::core::traits::CloudStateProbe;

/// Verifies that pre-existing address allocations declared on zones exist
/// and are either free or already attached to the cluster's own NAT gateways.
///
/// Existence is resolved with one batched lookup. Ownership is resolved
/// with at most one lookup, issued only when some allocation is associated.
pub struct AddressAllocationChecker<'a> {
    probe: &'a dyn CloudStateProbe,
    ctx: &'a ValidationContext,
    zones_path: FieldPath,
    allocation_path: FieldPath,
}

impl<'a> AddressAllocationChecker<'a> {
    pub fn new(probe: &'a dyn CloudStateProbe, ctx: &'a ValidationContext) -> Self {
        let zones_path = FieldPath::new("networks").child("zones");
        let allocation_path = zones_path.each().child("elasticIPAllocationID");
        Self {
            probe,
            ctx,
            zones_path,
            allocation_path,
        }
    }

    pub async fn check(&self, cluster_name: &str, zones: &[ZoneConfig]) -> ErrorList {
        let mut errors = ErrorList::new();

        let allocation_ids: Vec<String> = allocation_ids(zones)
            .into_iter()
            .map(str::to_string)
            .collect();
        if allocation_ids.is_empty() {
            return errors;
        }
        info!(
            count = allocation_ids.len(),
            "Validating infrastructure networks.zones[].elasticIPAllocationID"
        );

        let associations = match self
            .ctx
            .run(self.probe.get_address_associations(&allocation_ids))
            .await
        {
            Ok(associations) => associations,
            Err(e) => {
                warn!(error = %e, "Failed to get Elastic IP addresses");
                errors.internal(
                    &self.zones_path,
                    format!("failed to get Elastic IP addresses: {}", e),
                );
                return errors;
            }
        };

        let mut associated = Vec::new();
        for allocation_id in &allocation_ids {
            match associations.get(allocation_id) {
                None => errors.invalid(
                    &self.allocation_path,
                    allocation_id.as_str(),
                    "cannot be used as it does not exist",
                ),
                Some(None) => debug!(allocation_id = %allocation_id, "Allocation is unassociated"),
                Some(Some(association_id)) => {
                    debug!(
                        allocation_id = %allocation_id,
                        association_id = %association_id,
                        "Allocation is associated, ownership check required"
                    );
                    associated.push(allocation_id);
                }
            }
        }

        if associated.is_empty() {
            return errors;
        }

        let owned = match self
            .ctx
            .run(self.probe.get_owned_address_allocations(cluster_name))
            .await
        {
            Ok(owned) => owned,
            Err(e) => {
                warn!(cluster_name, error = %e, "Failed to get NAT Gateway address allocations");
                errors.internal(
                    &self.zones_path,
                    format!("failed to get NAT Gateway address allocations: {}", e),
                );
                return errors;
            }
        };

        for allocation_id in associated {
            if !owned.contains(allocation_id) {
                errors.invalid(
                    &self.allocation_path,
                    allocation_id.as_str(),
                    "cannot be attached to the cluster's NAT Gateway(s) as it is already associated",
                );
            }
        }

        errors
    }
}
