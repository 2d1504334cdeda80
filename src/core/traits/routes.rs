//! Route table client trait definition

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::core::types::ProbeError;

/// A single route entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    pub destination_cidr_block: String,
    pub gateway_id: String,
}

/// Route table as seen by the cloud API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteTable {
    pub id: String,
    #[serde(default)]
    pub routes: Vec<Route>,
}

/// Mutating route table operations, kept apart from [`CloudStateProbe`](super::CloudStateProbe)
#[async_trait]
pub trait RouteTableClient: Send + Sync {
    /// Route tables associated with a VPC
    async fn describe_route_tables(&self, vpc_id: &str) -> Result<Vec<RouteTable>, ProbeError>;

    /// Add a route to a route table
    async fn create_route(&self, route_table_id: &str, route: Route) -> Result<(), ProbeError>;
}
