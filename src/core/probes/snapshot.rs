//! In-memory cloud state loaded from a YAML snapshot

use async_trait::async_trait;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap, HashSet};
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, info};

use crate::core::traits::{CloudStateProbe, Route, RouteTable, RouteTableClient};
use crate::core::types::{ProbeError, VpcAttribute};
use crate::utils::error::{PreflightError, Result};

/// Tag prefix marking a resource as owned by a cluster
pub const CLUSTER_TAG_PREFIX: &str = "kubernetes.io/cluster/";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VpcState {
    pub id: String,
    #[serde(default)]
    pub enable_dns_support: bool,
    #[serde(default)]
    pub enable_dns_hostnames: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub internet_gateway_id: Option<String>,
    #[serde(default)]
    pub route_tables: Vec<RouteTable>,
}

impl VpcState {
    fn attribute(&self, attribute: VpcAttribute) -> bool {
        match attribute {
            VpcAttribute::EnableDnsSupport => self.enable_dns_support,
            VpcAttribute::EnableDnsHostnames => self.enable_dns_hostnames,
        }
    }
}

/// Elastic IP address allocation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressState {
    pub allocation_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub association_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NatGatewayState {
    pub id: String,
    #[serde(default)]
    pub tags: BTreeMap<String, String>,
    #[serde(default)]
    pub allocation_ids: Vec<String>,
}

impl NatGatewayState {
    /// Owned when tagged `kubernetes.io/cluster/<cluster>` = `1`
    pub fn is_owned_by(&self, cluster_name: &str) -> bool {
        self.tags
            .get(&format!("{}{}", CLUSTER_TAG_PREFIX, cluster_name))
            .is_some_and(|value| value == "1")
    }
}

/// Point-in-time view of a cloud network
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CloudSnapshot {
    #[serde(default)]
    pub vpcs: Vec<VpcState>,
    #[serde(default)]
    pub addresses: Vec<AddressState>,
    #[serde(default)]
    pub nat_gateways: Vec<NatGatewayState>,
}

impl CloudSnapshot {
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    fn vpc(&self, vpc_id: &str) -> Option<&VpcState> {
        self.vpcs.iter().find(|vpc| vpc.id == vpc_id)
    }
}

/// Number of calls made per probe operation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProbeCallCounts {
    pub vpc_attribute: u64,
    pub internet_gateway: u64,
    pub address_associations: u64,
    pub owned_address_allocations: u64,
}

#[derive(Debug, Default)]
struct Counters {
    vpc_attribute: AtomicU64,
    internet_gateway: AtomicU64,
    address_associations: AtomicU64,
    owned_address_allocations: AtomicU64,
}

/// [`CloudStateProbe`] and [`RouteTableClient`] backed by a [`CloudSnapshot`]
#[derive(Debug, Default)]
pub struct SnapshotProbe {
    state: RwLock<CloudSnapshot>,
    counters: Counters,
}

impl SnapshotProbe {
    pub fn new(snapshot: CloudSnapshot) -> Self {
        Self {
            state: RwLock::new(snapshot),
            counters: Counters::default(),
        }
    }

    /// Load a snapshot from a YAML file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading cloud snapshot from: {:?}", path);

        let content = tokio::fs::read_to_string(path).await.map_err(|e| {
            PreflightError::config(format!(
                "Failed to read cloud snapshot {}: {}",
                path.display(),
                e
            ))
        })?;
        Ok(Self::new(CloudSnapshot::from_yaml_str(&content)?))
    }

    /// Write the current state back as YAML
    pub async fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = self.snapshot().to_yaml()?;
        tokio::fs::write(path.as_ref(), content).await?;
        debug!("Cloud snapshot saved to: {:?}", path.as_ref());
        Ok(())
    }

    /// Copy of the current state
    pub fn snapshot(&self) -> CloudSnapshot {
        self.state.read().clone()
    }

    pub fn call_counts(&self) -> ProbeCallCounts {
        ProbeCallCounts {
            vpc_attribute: self.counters.vpc_attribute.load(Ordering::Relaxed),
            internet_gateway: self.counters.internet_gateway.load(Ordering::Relaxed),
            address_associations: self.counters.address_associations.load(Ordering::Relaxed),
            owned_address_allocations: self
                .counters
                .owned_address_allocations
                .load(Ordering::Relaxed),
        }
    }
}

#[async_trait]
impl CloudStateProbe for SnapshotProbe {
    async fn get_vpc_attribute(
        &self,
        vpc_id: &str,
        attribute: VpcAttribute,
    ) -> std::result::Result<bool, ProbeError> {
        self.counters.vpc_attribute.fetch_add(1, Ordering::Relaxed);
        self.state
            .read()
            .vpc(vpc_id)
            .map(|vpc| vpc.attribute(attribute))
            .ok_or_else(|| ProbeError::not_found("VPC", vpc_id))
    }

    async fn get_internet_gateway(
        &self,
        vpc_id: &str,
    ) -> std::result::Result<Option<String>, ProbeError> {
        self.counters.internet_gateway.fetch_add(1, Ordering::Relaxed);
        let state = self.state.read();
        let vpc = state
            .vpc(vpc_id)
            .ok_or_else(|| ProbeError::not_found("VPC", vpc_id))?;
        Ok(vpc.internet_gateway_id.clone())
    }

    async fn get_address_associations(
        &self,
        allocation_ids: &[String],
    ) -> std::result::Result<HashMap<String, Option<String>>, ProbeError> {
        self.counters
            .address_associations
            .fetch_add(1, Ordering::Relaxed);
        let wanted: HashSet<&str> = allocation_ids.iter().map(String::as_str).collect();
        Ok(self
            .state
            .read()
            .addresses
            .iter()
            .filter(|address| wanted.contains(address.allocation_id.as_str()))
            .map(|address| (address.allocation_id.clone(), address.association_id.clone()))
            .collect())
    }

    async fn get_owned_address_allocations(
        &self,
        cluster_name: &str,
    ) -> std::result::Result<HashSet<String>, ProbeError> {
        self.counters
            .owned_address_allocations
            .fetch_add(1, Ordering::Relaxed);
        Ok(self
            .state
            .read()
            .nat_gateways
            .iter()
            .filter(|gateway| gateway.is_owned_by(cluster_name))
            .flat_map(|gateway| gateway.allocation_ids.iter().cloned())
            .collect())
    }
}

#[async_trait]
impl RouteTableClient for SnapshotProbe {
    async fn describe_route_tables(
        &self,
        vpc_id: &str,
    ) -> std::result::Result<Vec<RouteTable>, ProbeError> {
        Ok(self
            .state
            .read()
            .vpc(vpc_id)
            .map(|vpc| vpc.route_tables.clone())
            .unwrap_or_default())
    }

    async fn create_route(
        &self,
        route_table_id: &str,
        route: Route,
    ) -> std::result::Result<(), ProbeError> {
        let mut state = self.state.write();
        let table = state
            .vpcs
            .iter_mut()
            .flat_map(|vpc| vpc.route_tables.iter_mut())
            .find(|table| table.id == route_table_id)
            .ok_or_else(|| ProbeError::not_found("route table", route_table_id))?;

        if table
            .routes
            .iter()
            .any(|r| r.destination_cidr_block == route.destination_cidr_block)
        {
            return Err(ProbeError::transport(format!(
                "RouteAlreadyExists: route {} already exists in {}",
                route.destination_cidr_block, route_table_id
            )));
        }
        table.routes.push(route);
        Ok(())
    }
}
