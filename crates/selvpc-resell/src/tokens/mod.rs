//! Token issuing.
//!
//! ```no_run
//! # async fn run(client: &selvpc_resell::ServiceClient) -> selvpc_resell::Result<()> {
//! use selvpc_resell::tokens::{self, TokenOpts};
//!
//! let opts = TokenOpts::project("f628616b452f4052b191161c26abba91");
//! let (token, _) = tokens::create(client, &opts).await?;
//! println!("{}", token.id);
//! # Ok(())
//! # }
//! ```

pub mod models;

pub use models::{Token, TokenOpts};

use crate::{request, Result};
use reqwest::Method;
use selvpc_core::{ResponseResult, ServiceClient};

const RESOURCE: &str = "tokens";
const ENTITY_KEY: &str = "token";

/// Create a project- or domain-scoped token.
pub async fn create(client: &ServiceClient, opts: &TokenOpts) -> Result<(Token, ResponseResult)> {
    let url = client.resource_url(&[RESOURCE])?;
    request::send(client, Method::POST, url, ENTITY_KEY, opts).await
}
