//! Public subnets of resell projects.
//!
//! Subnets are allocated in batches: `create` takes a project id and a list
//! of [`SubnetOpt`] shapes and returns every subnet the API allocated.
//!
//! ```no_run
//! # async fn run(client: &selvpc_resell::ServiceClient) -> selvpc_resell::Result<()> {
//! use selvpc_core::id::ProjectId;
//! use selvpc_resell::subnets::{self, IpVersion, ListOpts, SubnetOpt, SubnetOpts};
//!
//! let project = ProjectId::from("9c97bdc75295493096cf5edcb8c37933");
//! let opts = SubnetOpts {
//!     subnets: vec![SubnetOpt {
//!         region: "ru-3".into(),
//!         quantity: 1,
//!         ip_version: IpVersion::Ipv4,
//!         prefix_length: 29,
//!     }],
//! };
//! let (created, _) = subnets::create(client, &project, &opts).await?;
//! let (all, _) = subnets::list(client, ListOpts { detailed: true }).await?;
//! assert!(all.len() >= created.len());
//! # Ok(())
//! # }
//! ```

pub mod models;

pub use models::{IpVersion, ListOpts, Server, Subnet, SubnetOpt, SubnetOpts};

use crate::{request, Result};
use reqwest::Method;
use selvpc_core::id::{ProjectId, SubnetId};
use selvpc_core::{ResponseResult, ServiceClient};

const RESOURCE: &str = "subnets";
const ENTITY_KEY: &str = "subnet";

/// Fetch a single subnet by id.
pub async fn get(client: &ServiceClient, id: &SubnetId) -> Result<(Subnet, ResponseResult)> {
    let url = client.resource_url(&[RESOURCE, id.as_str()])?;
    request::fetch(client, url, ENTITY_KEY).await
}

/// List subnets across all projects of the domain.
pub async fn list(
    client: &ServiceClient,
    opts: ListOpts,
) -> Result<(Vec<Subnet>, ResponseResult)> {
    let mut url = client.resource_url(&[RESOURCE])?;
    opts.to_query().apply_to(&mut url);
    request::fetch(client, url, RESOURCE).await
}

/// Allocate subnets in the project referenced by `project_id`.
pub async fn create(
    client: &ServiceClient,
    project_id: &ProjectId,
    opts: &SubnetOpts,
) -> Result<(Vec<Subnet>, ResponseResult)> {
    let url = client.resource_url(&[RESOURCE, "projects", project_id.as_str()])?;
    request::send(client, Method::POST, url, RESOURCE, opts.subnets.as_slice()).await
}

/// Release the subnet referenced by `id`.
pub async fn delete(client: &ServiceClient, id: &SubnetId) -> Result<ResponseResult> {
    let url = client.resource_url(&[RESOURCE, id.as_str()])?;
    request::delete(client, url).await
}
