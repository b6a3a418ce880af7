//! Projects of the current domain.

pub mod models;

pub use models::{Project, ProjectCreateOpts, ProjectUpdateOpts, Theme, ThemeUpdateOpts};

use crate::{request, Result};
use reqwest::Method;
use selvpc_core::id::ProjectId;
use selvpc_core::{ResponseResult, ServiceClient};

const RESOURCE: &str = "projects";
const ENTITY_KEY: &str = "project";

/// Fetch a single project by id.
pub async fn get(client: &ServiceClient, id: &ProjectId) -> Result<(Project, ResponseResult)> {
    let url = client.resource_url(&[RESOURCE, id.as_str()])?;
    request::fetch(client, url, ENTITY_KEY).await
}

/// List projects of the domain.
pub async fn list(client: &ServiceClient) -> Result<(Vec<Project>, ResponseResult)> {
    let url = client.resource_url(&[RESOURCE])?;
    request::fetch(client, url, RESOURCE).await
}

/// Create a project.
pub async fn create(
    client: &ServiceClient,
    opts: &ProjectCreateOpts,
) -> Result<(Project, ResponseResult)> {
    let url = client.resource_url(&[RESOURCE])?;
    request::send(client, Method::POST, url, ENTITY_KEY, opts).await
}

/// Update the project referenced by `id`.
pub async fn update(
    client: &ServiceClient,
    id: &ProjectId,
    opts: &ProjectUpdateOpts,
) -> Result<(Project, ResponseResult)> {
    let url = client.resource_url(&[RESOURCE, id.as_str()])?;
    request::send(client, Method::PATCH, url, ENTITY_KEY, opts).await
}

/// Delete the project referenced by `id`.
pub async fn delete(client: &ServiceClient, id: &ProjectId) -> Result<ResponseResult> {
    let url = client.resource_url(&[RESOURCE, id.as_str()])?;
    request::delete(client, url).await
}
