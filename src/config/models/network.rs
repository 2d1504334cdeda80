//! Declared network configuration

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

use crate::utils::error::{PreflightError, Result};

/// Per-zone network resources
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneConfig {
    /// Availability zone name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Pre-existing Elastic IP allocation for this zone's NAT gateway
    #[serde(
        default,
        rename = "elasticIPAllocationID",
        skip_serializing_if = "Option::is_none"
    )]
    pub elastic_ip_allocation_id: Option<String>,
}

impl ZoneConfig {
    pub fn with_allocation(allocation_id: impl Into<String>) -> Self {
        Self {
            name: None,
            elastic_ip_allocation_id: Some(allocation_id.into()),
        }
    }

    /// Declared allocation id, ignoring empty strings
    pub fn allocation_id(&self) -> Option<&str> {
        self.elastic_ip_allocation_id
            .as_deref()
            .filter(|id| !id.is_empty())
    }
}

/// Input of a single validation run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NetworkConfig {
    /// Existing VPC to use; `None` means a new VPC will be created
    pub vpc_id: Option<String>,
    /// Scopes NAT gateway ownership
    pub cluster_name: String,
    pub zones: Vec<ZoneConfig>,
}

impl NetworkConfig {
    pub fn new(cluster_name: impl Into<String>) -> Self {
        Self {
            cluster_name: cluster_name.into(),
            ..Default::default()
        }
    }

    pub fn with_vpc(mut self, vpc_id: impl Into<String>) -> Self {
        self.vpc_id = Some(vpc_id.into());
        self
    }

    pub fn with_zone(mut self, zone: ZoneConfig) -> Self {
        self.zones.push(zone);
        self
    }

    /// Referenced VPC, ignoring empty strings
    pub fn vpc_id(&self) -> Option<&str> {
        self.vpc_id.as_deref().filter(|id| !id.is_empty())
    }

    /// Non-empty allocation ids in zone order
    pub fn allocation_ids(&self) -> Vec<&str> {
        allocation_ids(&self.zones)
    }
}

/// Declared allocation ids of `zones` in order, skipping zones without one
pub fn allocation_ids(zones: &[ZoneConfig]) -> Vec<&str> {
    zones.iter().filter_map(ZoneConfig::allocation_id).collect()
}

/// VPC reference inside the infrastructure document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VpcRef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Networks {
    #[serde(default)]
    pub vpc: VpcRef,
    #[serde(default)]
    pub zones: Vec<ZoneConfig>,
}

/// Infrastructure document as written by operators (YAML or JSON)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InfrastructureConfig {
    pub cluster_name: String,
    #[serde(default)]
    pub networks: Networks,
}

impl InfrastructureConfig {
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Load from a `.json` file, or YAML for any other extension
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading infrastructure config from: {:?}", path);

        let content = tokio::fs::read_to_string(path).await.map_err(|e| {
            PreflightError::config(format!(
                "Failed to read infrastructure config {}: {}",
                path.display(),
                e
            ))
        })?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let config = if is_json {
            Self::from_json_str(&content)?
        } else {
            Self::from_yaml_str(&content)?
        };

        if config.cluster_name.trim().is_empty() {
            return Err(PreflightError::config("clusterName must not be empty"));
        }
        Ok(config)
    }
}

impl From<InfrastructureConfig> for NetworkConfig {
    fn from(config: InfrastructureConfig) -> Self {
        Self {
            vpc_id: config.networks.vpc.id,
            cluster_name: config.cluster_name,
            zones: config.networks.zones,
        }
    }
}
