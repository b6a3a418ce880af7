//! Resell v2 API client for Selectel VPC.
//!
//! Every resource module exposes one async function per verb. Functions take
//! a shared [`ServiceClient`] and return the decoded entity together with the
//! [`ResponseResult`] it came from.
//!
//! ```no_run
//! # async fn run() -> selvpc_resell::Result<()> {
//! use selvpc_resell::{users, ResellClientBuilder};
//!
//! let client = ResellClientBuilder::new("https://api.selectel.ru/vpc")?
//!     .with_token("my-token")
//!     .build()?;
//!
//! let (all_users, _) = users::list(&client).await?;
//! for user in all_users {
//!     println!("{} {}", user.id, user.name);
//! }
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]

pub mod client;
pub mod projects;
pub mod subnets;
pub mod tokens;
pub mod users;

mod request;

#[cfg(test)]
mod testing;

pub use client::{ResellClientBuilder, API_VERSION, USER_AGENT};
pub use selvpc_core::{Error, ResponseResult, ServiceClient};

/// Convenient result alias that reuses the shared error type.
pub type Result<T> = selvpc_core::Result<T>;
