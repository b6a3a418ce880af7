//! Project models.

use selvpc_core::id::ProjectId;
use serde::{Deserialize, Serialize};

/// A resell project.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Project {
    /// Project identifier.
    pub id: ProjectId,
    /// Project name.
    #[serde(default)]
    pub name: String,
    /// Panel URL of the project.
    #[serde(default)]
    pub url: String,
    /// Whether the project is enabled.
    #[serde(default)]
    pub enabled: bool,
    /// Custom panel URL, empty when unset.
    #[serde(default)]
    pub custom_url: String,
    /// Panel theme.
    #[serde(default)]
    pub theme: Theme,
}

/// Panel theme of a project.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Theme {
    /// Hex color without `#`.
    #[serde(default)]
    pub color: String,
    /// Logo URL.
    #[serde(default)]
    pub logo: String,
}

/// Options for creating a project.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProjectCreateOpts {
    /// Project name.
    pub name: String,
    /// Apply default quotas to the new project.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_quotas: Option<bool>,
}

/// Options for updating a project. Unset fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProjectUpdateOpts {
    /// New name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New custom panel URL; an empty string removes it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_url: Option<String>,
    /// Theme changes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<ThemeUpdateOpts>,
}

/// Theme changes for [`ProjectUpdateOpts`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ThemeUpdateOpts {
    /// New color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// New logo URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
}
