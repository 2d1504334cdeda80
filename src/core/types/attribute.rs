//! VPC attribute names

use serde::{Deserialize, Serialize};
use std::fmt;

/// Boolean VPC attributes the validator requires to be enabled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VpcAttribute {
    #[serde(rename = "enableDnsSupport")]
    EnableDnsSupport,
    #[serde(rename = "enableDnsHostnames")]
    EnableDnsHostnames,
}

impl VpcAttribute {
    /// Attributes in the order they are checked
    pub const REQUIRED: [VpcAttribute; 2] =
        [VpcAttribute::EnableDnsSupport, VpcAttribute::EnableDnsHostnames];

    /// Wire name used by the cloud API
    pub fn as_str(&self) -> &'static str {
        match self {
            VpcAttribute::EnableDnsSupport => "enableDnsSupport",
            VpcAttribute::EnableDnsHostnames => "enableDnsHostnames",
        }
    }
}

impl fmt::Display for VpcAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
