//! Default route utility
//!
//! Not part of the validation core: a single mutating call that requires the
//! VPC to have exactly one route table.

use tracing::info;

use crate::core::traits::{Route, RouteTableClient};
use crate::utils::error::{PreflightError, Result};

/// Add a route for the VPC's only route table with `destination_cidr` as destination
pub async fn add_default_route(
    client: &dyn RouteTableClient,
    vpc_id: &str,
    gateway_id: &str,
    destination_cidr: &str,
) -> Result<()> {
    let route_tables = client.describe_route_tables(vpc_id).await?;
    if route_tables.len() != 1 {
        return Err(PreflightError::route(format!(
            "expected 1 route table for vpc but got {}",
            route_tables.len()
        )));
    }

    let route_table_id = &route_tables[0].id;
    info!(vpc_id, route_table_id = %route_table_id, destination_cidr, gateway_id, "Adding route");
    client
        .create_route(
            route_table_id,
            Route {
                destination_cidr_block: destination_cidr.to_string(),
                gateway_id: gateway_id.to_string(),
            },
        )
        .await?;
    Ok(())
}
