//! User models.

use selvpc_core::id::UserId;
use serde::{Deserialize, Serialize};

/// A user of the current domain.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    /// User identifier.
    pub id: UserId,
    /// Login name.
    #[serde(default)]
    pub name: String,
    /// Whether the user may log in.
    #[serde(default)]
    pub enabled: bool,
}

/// Options for creating or updating a user.
///
/// Unset fields are omitted from the request, so an update only touches what
/// is provided; `enabled: Some(false)` explicitly disables the user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct UserOpts {
    /// Login name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Password.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// Enabled flag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}
