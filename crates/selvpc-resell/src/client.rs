//! Construction of resell v2 service clients.

use crate::Result;
use selvpc_core::client::{ClientConfig, ServiceClientBuilder, Transport};
use selvpc_core::config::ResellConfig;
use selvpc_core::ServiceClient;
use std::sync::Arc;

/// User agent sent by resell clients.
pub const USER_AGENT: &str = concat!("selvpc-resell/", env!("CARGO_PKG_VERSION"));

/// Resell API version served under `{base}/resell/`.
pub const API_VERSION: &str = "v2";

/// Builder producing a [`ServiceClient`] bound to the resell v2 endpoint.
#[derive(Debug)]
pub struct ResellClientBuilder {
    inner: ServiceClientBuilder,
}

impl ResellClientBuilder {
    /// Create a builder for `{base_url}/resell/v2`.
    ///
    /// # Errors
    ///
    /// Returns an error if the resulting endpoint is not an absolute
    /// `http(s)` URL.
    pub fn new(base_url: impl AsRef<str>) -> Result<Self> {
        let endpoint = format!(
            "{}/resell/{API_VERSION}",
            base_url.as_ref().trim_end_matches('/')
        );
        let inner = ServiceClientBuilder::new(endpoint)?.with_user_agent(USER_AGENT);
        Ok(Self { inner })
    }

    /// Create a builder from a validated configuration. The configured
    /// endpoint is used as-is and must already include the version path.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails validation.
    pub fn from_config(config: ResellConfig) -> Result<Self> {
        let keep_agent = config.user_agent.is_some();
        let mut inner = config.into_builder()?;
        if !keep_agent {
            inner = inner.with_user_agent(USER_AGENT);
        }
        Ok(Self { inner })
    }

    /// Configure the auth token.
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.inner = self.inner.with_token(token);
        self
    }

    /// Override the `User-Agent` header.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.inner = self.inner.with_user_agent(user_agent);
        self
    }

    /// Override the HTTP client configuration.
    #[must_use]
    pub fn with_http_config(mut self, config: ClientConfig) -> Self {
        self.inner = self.inner.with_http_config(config);
        self
    }

    /// Use a custom transport.
    #[must_use]
    pub fn with_transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.inner = self.inner.with_transport(transport);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns an error if the token or user agent are invalid header values.
    pub fn build(self) -> Result<ServiceClient> {
        self.inner.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_appends_version_path() {
        let client = ResellClientBuilder::new("https://api.selectel.ru/vpc/")
            .unwrap()
            .with_token("token")
            .build()
            .unwrap();
        assert_eq!(
            client.endpoint().as_str(),
            "https://api.selectel.ru/vpc/resell/v2"
        );
        assert_eq!(client.user_agent(), USER_AGENT);
    }

    #[test]
    fn from_config_keeps_endpoint_and_defaults_agent() {
        let config = ResellConfig::new("http://localhost:8080/resell/v2")
            .unwrap()
            .with_token("token");
        let client = ResellClientBuilder::from_config(config)
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(
            client.endpoint().as_str(),
            "http://localhost:8080/resell/v2"
        );
        assert_eq!(client.user_agent(), USER_AGENT);
    }

    #[test]
    fn from_config_honours_agent_override() {
        let config = ResellConfig::default().with_user_agent("custom/2.0");
        let client = ResellClientBuilder::from_config(config)
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(client.user_agent(), "custom/2.0");
    }
}
