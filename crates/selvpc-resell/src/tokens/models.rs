//! Token models.

use selvpc_core::id::{ProjectId, TokenId};
use serde::{Deserialize, Serialize};

/// An authentication token issued by the resell API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Token {
    /// Token value, usable as an `X-Token` header.
    pub id: TokenId,
}

/// Scope of a token to create.
///
/// Set `project_id` for a project-scoped token, or `domain_name` for a
/// domain-scoped one.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenOpts {
    /// Project to scope the token to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<ProjectId>,
    /// Domain to scope the token to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain_name: Option<String>,
}

impl TokenOpts {
    /// Options for a token scoped to `project_id`.
    #[must_use]
    pub fn project(project_id: impl Into<ProjectId>) -> Self {
        Self {
            project_id: Some(project_id.into()),
            domain_name: None,
        }
    }

    /// Options for a token scoped to the domain `domain_name`.
    #[must_use]
    pub fn domain(domain_name: impl Into<String>) -> Self {
        Self {
            project_id: None,
            domain_name: Some(domain_name.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn project_scope_serializes_only_project_id() {
        let opts = TokenOpts::project("f628616b452f4052b191161c26abba91");
        assert_eq!(
            serde_json::to_value(&opts).unwrap(),
            json!({ "project_id": "f628616b452f4052b191161c26abba91" })
        );
    }

    #[test]
    fn domain_scope_serializes_only_domain_name() {
        let opts = TokenOpts::domain("1122334455");
        assert_eq!(
            serde_json::to_value(&opts).unwrap(),
            json!({ "domain_name": "1122334455" })
        );
    }
}
