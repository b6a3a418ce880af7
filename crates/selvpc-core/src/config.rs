//! Configuration for Selectel VPC API clients.
//!
//! [`ResellConfig`] is a plain serde record so it can be loaded from any
//! format the caller prefers, validated with `validator`, and turned into a
//! [`ServiceClientBuilder`].

use crate::client::{
    ClientConfig, ServiceClientBuilder, DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_TIMEOUT_SECS,
};
use crate::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use validator::Validate;

/// Public resell API endpoint, version 2.
pub const DEFAULT_RESELL_ENDPOINT: &str = "https://api.selectel.ru/vpc/resell/v2";

/// Configuration for a resell API client.
#[derive(Clone, Serialize, Deserialize, Validate)]
pub struct ResellConfig {
    /// API endpoint including the version path
    #[validate(url)]
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Auth token sent as `X-Token`
    #[serde(default, skip_serializing)]
    pub token: Option<String>,

    /// Optional `User-Agent` override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,

    /// Request timeout in seconds
    #[validate(range(min = 1, max = 300))]
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Connect timeout in seconds
    #[validate(range(min = 1, max = 60))]
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,

    /// Whether gzip responses are accepted
    #[serde(default = "default_compression")]
    pub enable_compression: bool,
}

fn default_endpoint() -> String {
    DEFAULT_RESELL_ENDPOINT.to_string()
}

const fn default_request_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

const fn default_connect_timeout_secs() -> u64 {
    DEFAULT_CONNECT_TIMEOUT_SECS
}

const fn default_compression() -> bool {
    true
}

impl ResellConfig {
    /// Create a configuration for the given endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint is not a valid URL.
    pub fn new(endpoint: impl Into<String>) -> Result<Self, Error> {
        let config = Self {
            endpoint: endpoint.into(),
            ..Self::default()
        };

        config
            .validate()
            .map_err(|e| Error::ConfigError(format!("Invalid configuration: {e}")))?;

        Ok(config)
    }

    /// Set the auth token.
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the `User-Agent` override.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Set request timeout in seconds.
    #[must_use]
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.request_timeout_secs = seconds;
        self
    }

    /// Get the request timeout as a Duration.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// HTTP settings derived from this configuration.
    #[must_use]
    pub const fn http_config(&self) -> ClientConfig {
        ClientConfig::new()
            .with_timeout(self.timeout())
            .with_connect_timeout(Duration::from_secs(self.connect_timeout_secs))
            .with_compression(self.enable_compression)
    }

    /// Validate and convert into a client builder.
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails or the endpoint is rejected by
    /// [`ServiceClientBuilder::new`].
    pub fn into_builder(self) -> Result<ServiceClientBuilder, Error> {
        self.validate()?;

        let mut builder =
            ServiceClientBuilder::new(&self.endpoint)?.with_http_config(self.http_config());
        if let Some(user_agent) = self.user_agent {
            builder = builder.with_user_agent(user_agent);
        }
        if let Some(token) = self.token {
            builder = builder.with_token(token);
        }
        Ok(builder)
    }
}

impl Default for ResellConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            token: None,
            user_agent: None,
            request_timeout_secs: default_request_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
            enable_compression: default_compression(),
        }
    }
}

impl fmt::Debug for ResellConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResellConfig")
            .field("endpoint", &self.endpoint)
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .field("user_agent", &self.user_agent)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("connect_timeout_secs", &self.connect_timeout_secs)
            .field("enable_compression", &self.enable_compression)
            .finish()
    }
}
