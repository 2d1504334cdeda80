//! VPC consistency checks

use tracing::{debug, info, warn};

use super::context::ValidationContext;
use super::field::{ErrorList, FieldPath};
use crate::core::traits::CloudStateProbe;
use crate::core::types::VpcAttribute;

/// Verifies that a referenced VPC exists, has DNS support and hostnames
/// enabled, and has an internet gateway attached.
///
/// A missing VPC or a failed probe call aborts with a single entry.
/// Misconfigurations are accumulated so they can be fixed in one pass.
pub struct NetworkConsistencyChecker<'a> {
    probe: &'a dyn CloudStateProbe,
    ctx: &'a ValidationContext,
    path: FieldPath,
}

impl<'a> NetworkConsistencyChecker<'a> {
    pub fn new(probe: &'a dyn CloudStateProbe, ctx: &'a ValidationContext) -> Self {
        Self {
            probe,
            ctx,
            path: FieldPath::new("networks").child("vpc").child("id"),
        }
    }

    pub async fn check(&self, vpc_id: &str) -> ErrorList {
        info!(vpc_id, "Validating infrastructure networks.vpc.id");
        let mut errors = ErrorList::new();

        for attribute in VpcAttribute::REQUIRED {
            let result = self
                .ctx
                .run(self.probe.get_vpc_attribute(vpc_id, attribute))
                .await;

            match result {
                Ok(true) => debug!(vpc_id, %attribute, "VPC attribute enabled"),
                Ok(false) => errors.invalid(
                    &self.path,
                    vpc_id,
                    format!("VPC attribute {} must be set to true", attribute),
                ),
                Err(e) if e.is_not_found() => {
                    warn!(vpc_id, "VPC does not exist");
                    errors.not_found(&self.path, vpc_id, "VPC does not exist");
                    return errors;
                }
                Err(e) => {
                    warn!(vpc_id, %attribute, error = %e, "Failed to get VPC attribute");
                    errors.internal(
                        &self.path,
                        format!(
                            "could not get VPC attribute {} for VPC {}: {}",
                            attribute, vpc_id, e
                        ),
                    );
                    return errors;
                }
            }
        }

        match self.ctx.run(self.probe.get_internet_gateway(vpc_id)).await {
            Ok(Some(gateway_id)) if !gateway_id.is_empty() => {
                debug!(vpc_id, gateway_id = %gateway_id, "Internet gateway attached");
            }
            Ok(_) => errors.invalid(&self.path, vpc_id, "no attached internet gateway found"),
            Err(e) => {
                warn!(vpc_id, error = %e, "Failed to get internet gateway");
                errors.internal(
                    &self.path,
                    format!("could not get internet gateway for VPC {}: {}", vpc_id, e),
                );
            }
        }

        errors
    }
}
