//! Cloud state probe trait definition
//!
//! Narrow read-only view over the cloud network API used by the validator

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};

use crate::core::types::{ProbeError, VpcAttribute};

/// Read-only capability set over the cloud network API
///
/// Implementations own transport concerns (SDK calls, pagination, retries).
/// The validator only relies on the value and error contracts below and
/// receives an already authenticated handle.
///
/// # Example
///
/// ```rust,ignore
/// use async_trait::async_trait;
///
/// #[async_trait]
/// impl CloudStateProbe for Ec2Probe {
///     async fn get_vpc_attribute(&self, vpc_id: &str, attribute: VpcAttribute)
///         -> Result<bool, ProbeError> {
///         // DescribeVpcAttribute ...
///     }
///     // implement other required methods...
/// }
/// ```
#[async_trait]
pub trait CloudStateProbe: Send + Sync {
    /// Get a boolean VPC attribute
    ///
    /// # Errors
    /// [`ProbeError::NotFound`] when the VPC itself does not exist, any
    /// other variant for transport failures
    async fn get_vpc_attribute(
        &self,
        vpc_id: &str,
        attribute: VpcAttribute,
    ) -> Result<bool, ProbeError>;

    /// Get the internet gateway attached to a VPC
    ///
    /// # Returns
    /// `None` (or an empty id) when no gateway is attached
    async fn get_internet_gateway(&self, vpc_id: &str) -> Result<Option<String>, ProbeError>;

    /// Batched association lookup for address allocations
    ///
    /// # Returns
    /// One entry per allocation that exists: `None` when unassociated, the
    /// association id otherwise. Allocations that do not exist are absent.
    async fn get_address_associations(
        &self,
        allocation_ids: &[String],
    ) -> Result<HashMap<String, Option<String>>, ProbeError>;

    /// Allocation ids attached to NAT gateways owned by the cluster
    ///
    /// # Note
    /// Potentially expensive; the validator calls it at most once per run
    async fn get_owned_address_allocations(
        &self,
        cluster_name: &str,
    ) -> Result<HashSet<String>, ProbeError>;
}
