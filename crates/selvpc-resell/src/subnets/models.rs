//! Subnet models.

use chrono::{DateTime, Utc};
use selvpc_core::id::{ProjectId, ServerId, SubnetId};
use selvpc_core::query::QueryParams;
use serde::{Deserialize, Serialize};

/// A public subnet allocated to a project.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Subnet {
    /// Subnet identifier. The API sends it as an integer.
    pub id: SubnetId,
    /// Allocation status, e.g. `ACTIVE` or `DOWN`.
    #[serde(default)]
    pub status: String,
    /// Servers attached to the subnet.
    #[serde(default)]
    pub servers: Vec<Server>,
    /// Region name.
    #[serde(default)]
    pub region: String,
    /// CIDR of the subnet.
    #[serde(default)]
    pub cidr: String,
    /// OpenStack network identifier.
    #[serde(default)]
    pub network_id: String,
    /// OpenStack subnet identifier.
    #[serde(default)]
    pub subnet_id: String,
    /// Owning project.
    #[serde(default)]
    pub project_id: ProjectId,
}

/// A server attached to a subnet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Server {
    /// Server identifier.
    pub id: ServerId,
    /// Server name.
    #[serde(default)]
    pub name: String,
    /// Server status.
    #[serde(default)]
    pub status: String,
    /// Last modification time.
    #[serde(default)]
    pub updated: Option<DateTime<Utc>>,
}

/// IP protocol version of a requested subnet.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum IpVersion {
    /// IPv4
    Ipv4,
    /// IPv6
    Ipv6,
}

/// A single subnet request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SubnetOpt {
    /// Region to allocate in.
    pub region: String,
    /// Number of subnets of this shape.
    pub quantity: u32,
    /// IP version.
    #[serde(rename = "type")]
    pub ip_version: IpVersion,
    /// Prefix length of every allocated subnet.
    pub prefix_length: u8,
}

/// Options for allocating subnets in a project.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SubnetOpts {
    /// Requested subnets.
    pub subnets: Vec<SubnetOpt>,
}

/// Options for listing subnets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListOpts {
    /// Ask the API to include attached servers.
    pub detailed: bool,
}

impl ListOpts {
    pub(crate) fn to_query(self) -> QueryParams {
        let mut query = QueryParams::new();
        query.push_flag("detailed", self.detailed);
        query
    }
}
