//! Probe implementations

pub mod snapshot;

pub use snapshot::{
    AddressState, CloudSnapshot, NatGatewayState, ProbeCallCounts, SnapshotProbe, VpcState,
};
