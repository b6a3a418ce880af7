//! # selvpc-core
//!
//! Core request/response pipeline for the Selectel VPC APIs.
//!
//! This crate provides the shared service client, response classification,
//! JSON envelope handling, and error types that every resource crate builds on.
//!
//! ## Modules
//!
//! - [`client`] - `ServiceClient`, `ResponseResult`, and the transport seam
//! - [`config`] - Serializable, validated client configuration
//! - [`envelope`] - Single-key JSON envelope codec
//! - [`error`] - Error types and HTTP status classification
//! - [`id`] - Strongly-typed resource identifiers
//! - [`query`] - Query-string pair builder

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod client;
pub mod config;
pub mod envelope;
pub mod error;
pub mod id;
pub mod query;

// Re-export commonly used types
pub use client::{ResponseResult, ServiceClient, ServiceClientBuilder, SuccessResponse};
pub use error::{ApiError, Error, Result};
