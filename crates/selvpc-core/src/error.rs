//! Error types for Selectel VPC operations.
//!
//! Every request ends in one of three mutually exclusive failure kinds:
//! a transport failure before any response arrived, an HTTP status outside
//! the 2xx range, or a success body that could not be decoded. The latter two
//! keep the [`ResponseResult`] so callers can inspect the status and body.

use reqwest::StatusCode;
use serde::Serialize;
use thiserror::Error;

use crate::client::ResponseResult;

/// Main error type for Selectel VPC operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// The request timed out before a response was received
    #[error("Request timed out: {0}")]
    Timeout(String),

    /// The connection to the API could not be established
    #[error("Connection failed: {0}")]
    Connection(String),

    /// Any other transport-level failure
    #[error("Transport error: {0}")]
    Transport(String),

    /// The server answered with a status outside the 2xx range
    #[error(
        "got the {} status code from the server: {}",
        .0.status_code().as_u16(),
        .0.error_message()
    )]
    Status(Box<ResponseResult>),

    /// A successful response body did not match the expected shape
    #[error("Failed to decode response body: {message}")]
    Decode {
        /// Decoder error message
        message: String,
        /// Response whose body failed to decode
        response: Box<ResponseResult>,
    },

    /// The request payload could not be serialized
    #[error("Failed to encode request body: {0}")]
    Encode(String),

    /// Invalid endpoint or resource URL
    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Validation error
    #[error("Validation error: {0}")]
    ValidationError(String),
}

/// Specialized result type for Selectel VPC operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error payload recorded for a response outside the 2xx range.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ApiError {
    /// HTTP status code returned by the server
    pub status: u16,
    /// Response body with whitespace collapsed, or the status reason when empty
    pub message: String,
    /// Response body decoded as JSON, when it is valid JSON
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ApiError {
    /// Build the error payload from a raw status and body.
    #[must_use]
    pub fn from_body(status: StatusCode, body: &[u8]) -> Self {
        let text = String::from_utf8_lossy(body);
        let message = text.split_whitespace().collect::<Vec<_>>().join(" ");
        let message = if message.is_empty() {
            status
                .canonical_reason()
                .unwrap_or("unknown status")
                .to_string()
        } else {
            message
        };

        Self {
            status: status.as_u16(),
            message,
            details: serde_json::from_slice(body).ok(),
        }
    }
}

impl Error {
    /// Returns the error code for this error type.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Timeout(_) => "TIMEOUT",
            Self::Connection(_) => "CONNECTION_FAILED",
            Self::Transport(_) => "TRANSPORT_ERROR",
            Self::Status(_) => "HTTP_STATUS",
            Self::Decode { .. } => "DECODE_ERROR",
            Self::Encode(_) => "ENCODE_ERROR",
            Self::InvalidEndpoint(_) => "INVALID_ENDPOINT",
            Self::ConfigError(_) => "CONFIG_ERROR",
            Self::ValidationError(_) => "VALIDATION_ERROR",
        }
    }

    /// Returns true when the request failed before any response was received.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::Timeout(_) | Self::Connection(_) | Self::Transport(_)
        )
    }

    /// Returns the response retained by HTTP status and decode failures.
    #[must_use]
    pub fn response(&self) -> Option<&ResponseResult> {
        match self {
            Self::Status(response) | Self::Decode { response, .. } => Some(response),
            _ => None,
        }
    }

    /// Returns the HTTP status code, if a response was received.
    #[must_use]
    pub fn status_code(&self) -> Option<StatusCode> {
        self.response().map(ResponseResult::status_code)
    }
}

// Conversions from external error types
impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(err.to_string())
        } else if err.is_connect() {
            Self::Connection(err.to_string())
        } else {
            Self::Transport(err.to_string())
        }
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Self::InvalidEndpoint(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Encode(err.to_string())
    }
}

impl From<validator::ValidationErrors> for Error {
    fn from(err: validator::ValidationErrors) -> Self {
        Self::ValidationError(err.to_string())
    }
}
