//! Service client and response classification.
//!
//! [`ServiceClient`] issues exactly one HTTP request per call and hands the
//! outcome back as a [`ResponseResult`]. Transport failures surface as an
//! `Err` with no response; any received status becomes a `ResponseResult`
//! whose status classification decides whether a [`SuccessResponse`] (and
//! therefore body extraction) can be obtained.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, CONTENT_TYPE, USER_AGENT};
use reqwest::{Client, Method, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

use crate::envelope;
use crate::error::{ApiError, Error, Result};
use crate::id::validate_id;

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default connect timeout in seconds.
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Header carrying the auth token.
pub const TOKEN_HEADER: &str = "x-token";

/// User agent sent when none is configured.
pub const DEFAULT_USER_AGENT: &str = concat!("selvpc-core/", env!("CARGO_PKG_VERSION"));

const JSON_CONTENT_TYPE: &str = "application/json";

/// HTTP client configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClientConfig {
    /// Total request timeout
    pub timeout: Duration,

    /// Connection establishment timeout
    pub connect_timeout: Duration,

    /// Enable gzip response decompression
    pub enable_compression: bool,
}

impl ClientConfig {
    /// Create a new client configuration with default values.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
            enable_compression: true,
        }
    }

    /// Set request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set connect timeout.
    #[must_use]
    pub const fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Enable or disable compression.
    #[must_use]
    pub const fn with_compression(mut self, enabled: bool) -> Self {
        self.enable_compression = enabled;
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// A fully prepared HTTP request handed to a [`Transport`].
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// HTTP method
    pub method: Method,
    /// Fully-qualified request URL
    pub url: Url,
    /// Request headers, including auth and user agent
    pub headers: HeaderMap,
    /// Serialized JSON body, if any
    pub body: Option<Vec<u8>>,
}

/// Raw status, headers and body returned by a [`Transport`].
#[derive(Debug, Clone)]
pub struct RawResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Fully read response body
    pub body: Vec<u8>,
}

/// Sends a single HTTP request.
///
/// Implementations return `Err` only when no complete response was received.
/// A body that fails to read after the status line arrived counts as a
/// transport failure: the status is logged but no [`ResponseResult`] exists.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Transport: Send + Sync {
    /// Execute the request and read the whole response body.
    async fn execute(&self, request: HttpRequest) -> Result<RawResponse>;
}

/// [`Transport`] backed by a `reqwest` client.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http: Client,
}

impl ReqwestTransport {
    /// Build a transport from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .gzip(config.enable_compression)
            .build()
            .map_err(|err| Error::ConfigError(format!("Failed to build HTTP client: {err}")))?;
        Ok(Self { http })
    }

    /// Wrap an existing `reqwest` client.
    #[must_use]
    pub const fn from_client(http: Client) -> Self {
        Self { http }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn execute(&self, request: HttpRequest) -> Result<RawResponse> {
        let mut builder = self
            .http
            .request(request.method, request.url)
            .headers(request.headers);
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let headers = response.headers().clone();
        let body = match response.bytes().await {
            Ok(body) => body.to_vec(),
            Err(err) => {
                warn!(status = %status, error = %err, "Failed to read response body");
                return Err(err.into());
            }
        };

        Ok(RawResponse {
            status,
            headers,
            body,
        })
    }
}

/// Builder for [`ServiceClient`].
pub struct ServiceClientBuilder {
    endpoint: Url,
    token: Option<SecretString>,
    user_agent: String,
    config: ClientConfig,
    transport: Option<Arc<dyn Transport>>,
}

impl ServiceClientBuilder {
    /// Create a builder for the given API endpoint, e.g.
    /// `https://api.selvpc.ru/resell/v2`.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint is not an absolute `http(s)` URL.
    pub fn new(endpoint: impl AsRef<str>) -> Result<Self> {
        let endpoint = Url::parse(endpoint.as_ref())?;
        if !matches!(endpoint.scheme(), "http" | "https") || endpoint.cannot_be_a_base() {
            return Err(Error::ConfigError(format!(
                "Endpoint `{endpoint}` must be an absolute http(s) URL"
            )));
        }

        Ok(Self {
            endpoint,
            token: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            config: ClientConfig::new(),
            transport: None,
        })
    }

    /// Configure the auth token sent in the `X-Token` header.
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(SecretString::from(token.into()));
        self
    }

    /// Override the `User-Agent` header.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Override the HTTP client configuration.
    #[must_use]
    pub fn with_http_config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    /// Use a custom transport instead of the default `reqwest` one.
    #[must_use]
    pub fn with_transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns an error if the token or user agent are not valid header
    /// values, or the HTTP client cannot be built.
    pub fn build(self) -> Result<ServiceClient> {
        let user_agent = HeaderValue::from_str(&self.user_agent)
            .map_err(|err| Error::ConfigError(format!("Invalid user agent: {err}")))?;

        if let Some(token) = &self.token {
            HeaderValue::from_str(token.expose_secret())
                .map_err(|err| Error::ConfigError(format!("Invalid auth token: {err}")))?;
        }

        let transport = match self.transport {
            Some(transport) => transport,
            None => Arc::new(ReqwestTransport::new(&self.config)?),
        };

        Ok(ServiceClient {
            inner: Arc::new(ClientInner {
                transport,
                endpoint: self.endpoint,
                token: self.token,
                user_agent,
            }),
        })
    }
}

impl fmt::Debug for ServiceClientBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceClientBuilder")
            .field("endpoint", &self.endpoint.as_str())
            .field("token", &self.token)
            .field("user_agent", &self.user_agent)
            .field("config", &self.config)
            .field("custom_transport", &self.transport.is_some())
            .finish()
    }
}

struct ClientInner {
    transport: Arc<dyn Transport>,
    endpoint: Url,
    token: Option<SecretString>,
    user_agent: HeaderValue,
}

/// Shared, immutable handle used to issue API requests.
///
/// Cloning is cheap; clones share the same transport and configuration.
#[derive(Clone)]
pub struct ServiceClient {
    inner: Arc<ClientInner>,
}

impl ServiceClient {
    /// Construct a client from an endpoint and auth token with default settings.
    ///
    /// # Errors
    ///
    /// See [`ServiceClientBuilder::new`] and [`ServiceClientBuilder::build`].
    pub fn new(endpoint: impl AsRef<str>, token: impl Into<String>) -> Result<Self> {
        ServiceClientBuilder::new(endpoint)?.with_token(token).build()
    }

    /// Start a builder for the given endpoint.
    ///
    /// # Errors
    ///
    /// See [`ServiceClientBuilder::new`].
    pub fn builder(endpoint: impl AsRef<str>) -> Result<ServiceClientBuilder> {
        ServiceClientBuilder::new(endpoint)
    }

    /// Return the base endpoint.
    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.inner.endpoint
    }

    /// Return the configured user agent.
    #[must_use]
    pub fn user_agent(&self) -> &str {
        self.inner.user_agent.to_str().unwrap_or_default()
    }

    /// Build `{endpoint}/{segment}/{segment}...`, percent-encoding each segment.
    ///
    /// # Errors
    ///
    /// Returns a validation error for empty segments or segments containing `/`.
    pub fn resource_url(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.inner.endpoint.clone();
        {
            let mut path = url.path_segments_mut().map_err(|()| {
                Error::InvalidEndpoint(format!(
                    "Endpoint `{}` cannot be a base URL",
                    self.inner.endpoint
                ))
            })?;
            path.pop_if_empty();
            for segment in segments {
                path.push(validate_id(segment)?);
            }
        }
        Ok(url)
    }

    /// Send one request and classify the response.
    ///
    /// Returns `Err` only for transport failures; every fully received
    /// response, including 4xx and 5xx, yields `Ok(ResponseResult)`. A body
    /// read failure is a transport failure even when the status arrived.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Timeout`], [`Error::Connection`] or
    /// [`Error::Transport`] when no response was received.
    pub async fn do_request(
        &self,
        method: Method,
        url: Url,
        body: Option<Vec<u8>>,
    ) -> Result<ResponseResult> {
        let headers = self.request_headers(body.is_some())?;

        debug!(method = %method, url = %url, "Sending request");

        let raw = self
            .inner
            .transport
            .execute(HttpRequest {
                method: method.clone(),
                url: url.clone(),
                headers,
                body,
            })
            .await?;

        let response = ResponseResult::new(raw.status, raw.headers, raw.body);
        match response.err() {
            Some(err) => warn!(
                method = %method,
                url = %url,
                status = err.status,
                "Request returned an error status"
            ),
            None => debug!(status = %response.status_code(), "Received response"),
        }

        Ok(response)
    }

    fn request_headers(&self, has_body: bool) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, self.inner.user_agent.clone());
        headers.insert(ACCEPT, HeaderValue::from_static(JSON_CONTENT_TYPE));
        if has_body {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));
        }
        if let Some(token) = &self.inner.token {
            let mut value = HeaderValue::from_str(token.expose_secret())
                .map_err(|err| Error::ConfigError(format!("Invalid auth token: {err}")))?;
            value.set_sensitive(true);
            headers.insert(HeaderName::from_static(TOKEN_HEADER), value);
        }
        Ok(headers)
    }
}

impl fmt::Debug for ServiceClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceClient")
            .field("endpoint", &self.inner.endpoint.as_str())
            .field("token", &self.inner.token)
            .field("user_agent", &self.inner.user_agent)
            .finish_non_exhaustive()
    }
}

/// Outcome of a request that reached the server.
///
/// The classified error is set iff the status is outside `200..=299`.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseResult {
    status: StatusCode,
    headers: HeaderMap,
    body: Vec<u8>,
    err: Option<ApiError>,
}

impl ResponseResult {
    /// Classify a raw response.
    #[must_use]
    pub fn new(status: StatusCode, headers: HeaderMap, body: Vec<u8>) -> Self {
        let err = (!status.is_success()).then(|| ApiError::from_body(status, &body));
        Self {
            status,
            headers,
            body,
            err,
        }
    }

    /// Return the HTTP status code.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        self.status
    }

    /// Return the response headers.
    #[must_use]
    pub const fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Return the raw response body.
    #[must_use]
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Return the classified error for non-2xx responses.
    #[must_use]
    pub const fn err(&self) -> Option<&ApiError> {
        self.err.as_ref()
    }

    /// Returns true for 2xx responses.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.err.is_none()
    }

    /// Message of the classified error, empty for 2xx responses.
    #[must_use]
    pub fn error_message(&self) -> &str {
        self.err.as_ref().map_or("", |err| err.message.as_str())
    }

    /// Obtain the success view needed for body extraction.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Status`] carrying this response when the status is
    /// outside the 2xx range.
    pub fn into_success(self) -> Result<SuccessResponse> {
        if self.err.is_some() {
            return Err(Error::Status(Box::new(self)));
        }
        Ok(SuccessResponse { response: self })
    }
}

/// A 2xx response whose body may be extracted.
#[derive(Debug, Clone, PartialEq)]
pub struct SuccessResponse {
    response: ResponseResult,
}

impl SuccessResponse {
    /// Borrow the underlying response.
    #[must_use]
    pub const fn response(&self) -> &ResponseResult {
        &self.response
    }

    /// Give back the underlying response without decoding the body.
    #[must_use]
    pub fn into_inner(self) -> ResponseResult {
        self.response
    }

    /// Decode the whole body into `T`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Decode`] if the body is not valid JSON for `T`.
    pub fn extract_result<T>(self) -> Result<(T, ResponseResult)>
    where
        T: DeserializeOwned,
    {
        let decoded = serde_json::from_slice(&self.response.body);
        self.finish(decoded)
    }

    /// Decode the payload stored under `key` in a JSON object body.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Decode`] if the body is not an object holding a `key`
    /// value that decodes into `T`.
    pub fn extract_envelope<T>(self, key: &str) -> Result<(T, ResponseResult)>
    where
        T: DeserializeOwned,
    {
        let decoded = envelope::decode(key, &self.response.body);
        self.finish(decoded)
    }

    fn finish<T>(self, decoded: serde_json::Result<T>) -> Result<(T, ResponseResult)> {
        match decoded {
            Ok(value) => Ok((value, self.response)),
            Err(err) => Err(Error::Decode {
                message: err.to_string(),
                response: Box::new(self.response),
            }),
        }
    }
}
