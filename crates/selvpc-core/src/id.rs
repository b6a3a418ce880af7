//! Strongly-typed identifiers for Selectel VPC resources.
//!
//! The resell API mixes identifier shapes: users and projects use 32-digit hex
//! strings, while subnets are numbered. Every identifier is kept as a string
//! and decodes from either a JSON string or a JSON integer.

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Macro to generate strongly-typed identifier wrapper types.
macro_rules! id_type {
    ($(#[$meta:meta])* $name:ident, $doc:expr) => {
        $(#[$meta])*
        #[doc = $doc]
        #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Creates an identifier from any string-like value.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Returns the identifier as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Converts into the inner string.
            #[must_use]
            pub fn into_string(self) -> String {
                self.0
            }

            /// Parses an identifier, rejecting empty input and path separators.
            ///
            /// # Errors
            ///
            /// Returns an error if the string cannot name a single URL segment.
            pub fn parse_str(input: &str) -> Result<Self> {
                validate_id(input).map(|_| Self(input.to_string()))
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                deserializer.deserialize_any(IdVisitor).map(Self)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<$name> for String {
            fn from(wrapper: $name) -> Self {
                wrapper.0
            }
        }

        impl FromStr for $name {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self> {
                Self::parse_str(s)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.0 == *other
            }
        }
    };
}

id_type!(UserId, "User identifier");
id_type!(ProjectId, "Project identifier");
id_type!(SubnetId, "Subnet identifier (numeric in API payloads)");
id_type!(ServerId, "Server identifier");
id_type!(TokenId, "Token identifier");

/// Accepts identifiers encoded as JSON strings or integers.
struct IdVisitor;

impl<'de> Visitor<'de> for IdVisitor {
    type Value = String;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a string or integer identifier")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> std::result::Result<String, E> {
        Ok(value.to_string())
    }

    fn visit_string<E: de::Error>(self, value: String) -> std::result::Result<String, E> {
        Ok(value)
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> std::result::Result<String, E> {
        Ok(value.to_string())
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> std::result::Result<String, E> {
        Ok(value.to_string())
    }
}

/// Validates that an identifier can be used as a single URL path segment.
///
/// # Errors
///
/// Returns an error if the string is empty, contains `/`, or is a `.`/`..`
/// dot segment that URL normalization would drop.
pub fn validate_id(s: &str) -> Result<&str> {
    if s.is_empty() || s.contains('/') || s == "." || s == ".." {
        return Err(Error::ValidationError(format!(
            "invalid resource identifier `{s}`"
        )));
    }
    Ok(s)
}
