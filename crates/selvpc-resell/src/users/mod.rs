//! Users of the current domain.
//!
//! ```no_run
//! # async fn run(client: &selvpc_resell::ServiceClient) -> selvpc_resell::Result<()> {
//! use selvpc_resell::users::{self, UserOpts};
//!
//! let opts = UserOpts {
//!     name: Some("user0".into()),
//!     password: Some("verysecret".into()),
//!     ..UserOpts::default()
//! };
//! let (created, _) = users::create(client, &opts).await?;
//!
//! let disable = UserOpts {
//!     enabled: Some(false),
//!     ..UserOpts::default()
//! };
//! let (updated, _) = users::update(client, &created.id, &disable).await?;
//! assert!(!updated.enabled);
//! # Ok(())
//! # }
//! ```

pub mod models;

pub use models::{User, UserOpts};

use crate::{request, Result};
use reqwest::Method;
use selvpc_core::id::UserId;
use selvpc_core::{ResponseResult, ServiceClient};

const RESOURCE: &str = "users";
const ENTITY_KEY: &str = "user";

/// Fetch a single user by id.
pub async fn get(client: &ServiceClient, id: &UserId) -> Result<(User, ResponseResult)> {
    let url = client.resource_url(&[RESOURCE, id.as_str()])?;
    request::fetch(client, url, ENTITY_KEY).await
}

/// List users in the current domain.
pub async fn list(client: &ServiceClient) -> Result<(Vec<User>, ResponseResult)> {
    let url = client.resource_url(&[RESOURCE])?;
    request::fetch(client, url, RESOURCE).await
}

/// Create a user.
pub async fn create(client: &ServiceClient, opts: &UserOpts) -> Result<(User, ResponseResult)> {
    let url = client.resource_url(&[RESOURCE])?;
    request::send(client, Method::POST, url, ENTITY_KEY, opts).await
}

/// Update the user referenced by `id`.
pub async fn update(
    client: &ServiceClient,
    id: &UserId,
    opts: &UserOpts,
) -> Result<(User, ResponseResult)> {
    let url = client.resource_url(&[RESOURCE, id.as_str()])?;
    request::send(client, Method::PATCH, url, ENTITY_KEY, opts).await
}

/// Delete the user referenced by `id`.
pub async fn delete(client: &ServiceClient, id: &UserId) -> Result<ResponseResult> {
    let url = client.resource_url(&[RESOURCE, id.as_str()])?;
    request::delete(client, url).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{test_client, unreachable_client, FAKE_TOKEN};
    use reqwest::StatusCode;
    use selvpc_core::Error;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const USER_ID: &str = "4b2e452ed4c940bd87a88499eaf14c4f";

    fn user_id() -> UserId {
        UserId::from(USER_ID)
    }

    fn update_opts() -> UserOpts {
        UserOpts {
            name: Some("user1".into()),
            password: Some("moresecret".into()),
            enabled: Some(false),
        }
    }

    #[tokio::test]
    async fn get_user() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(format!("/resell/v2/users/{USER_ID}")))
            .and(header("x-token", FAKE_TOKEN))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "user": { "id": USER_ID, "name": "user0", "enabled": true }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let (user, response) = get(&test_client(&server), &user_id()).await.unwrap();
        assert_eq!(
            user,
            User {
                id: user_id(),
                name: "user0".into(),
                enabled: true,
            }
        );
        assert_eq!(response.status_code(), StatusCode::OK);
    }

    #[tokio::test]
    async fn get_user_http_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(format!("/resell/v2/users/{USER_ID}")))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({
                "error": "user_not_found"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let err = get(&test_client(&server), &user_id()).await.unwrap_err();
        assert!(matches!(err, Error::Status(_)));
        assert_eq!(err.status_code(), Some(StatusCode::NOT_FOUND));
        let api = err.response().and_then(ResponseResult::err).unwrap();
        assert_eq!(api.details, Some(json!({ "error": "user_not_found" })));
    }

    #[tokio::test]
    async fn list_users() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/resell/v2/users"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "users": [
                    { "id": USER_ID, "name": "user0", "enabled": true },
                    { "id": "c9a5f07b2d674a3e8bde0bb1b8a5d0bd", "name": "user1", "enabled": false }
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let (users, _) = list(&test_client(&server)).await.unwrap();
        assert_eq!(users.len(), 2);
        assert_eq!(users[0].name, "user0");
        assert_eq!(users[1].id, "c9a5f07b2d674a3e8bde0bb1b8a5d0bd");
        assert!(!users[1].enabled);
    }

    #[tokio::test]
    async fn list_users_http_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/resell/v2/users"))
            .respond_with(ResponseTemplate::new(502))
            .expect(1)
            .mount(&server)
            .await;

        let err = list(&test_client(&server)).await.unwrap_err();
        assert_eq!(err.status_code(), Some(StatusCode::BAD_GATEWAY));
    }

    #[tokio::test]
    async fn list_users_timeout_error() {
        let err = list(&unreachable_client()).await.unwrap_err();
        assert!(err.is_transport());
        assert!(err.response().is_none());
    }

    #[tokio::test]
    async fn list_users_unmarshal_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/resell/v2/users"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "users": { "id": USER_ID }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let err = list(&test_client(&server)).await.unwrap_err();
        assert!(matches!(err, Error::Decode { .. }));
        assert_eq!(err.status_code(), Some(StatusCode::OK));
    }

    #[tokio::test]
    async fn create_user() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/resell/v2/users"))
            .and(header("content-type", "application/json"))
            .and(body_json(json!({
                "user": { "name": "user0", "password": "verysecret" }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "user": { "id": USER_ID, "name": "user0", "enabled": true }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let opts = UserOpts {
            name: Some("user0".into()),
            password: Some("verysecret".into()),
            enabled: None,
        };
        let (user, _) = create(&test_client(&server), &opts).await.unwrap();
        assert_eq!(user.id, USER_ID);
        assert!(user.enabled);
    }

    #[tokio::test]
    async fn create_user_http_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/resell/v2/users"))
            .respond_with(ResponseTemplate::new(400))
            .expect(1)
            .mount(&server)
            .await;

        let err = create(&test_client(&server), &UserOpts::default())
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), Some(StatusCode::BAD_REQUEST));
    }

    #[tokio::test]
    async fn create_user_timeout_error() {
        let err = create(&unreachable_client(), &UserOpts::default())
            .await
            .unwrap_err();
        assert!(err.response().is_none());
    }

    #[tokio::test]
    async fn update_user() {
        let server = MockServer::start().await;
        Mock::given(method("PATCH"))
            .and(path(format!("/resell/v2/users/{USER_ID}")))
            .and(body_json(json!({
                "user": { "name": "user1", "password": "moresecret", "enabled": false }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "user": { "id": USER_ID, "name": "user1", "enabled": false }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let (user, _) = update(&test_client(&server), &user_id(), &update_opts())
            .await
            .unwrap();
        assert_eq!(user.name, "user1");
        assert!(!user.enabled);
    }

    #[tokio::test]
    async fn update_user_http_error() {
        let server = MockServer::start().await;
        Mock::given(method("PATCH"))
            .and(path(format!("/resell/v2/users/{USER_ID}")))
            .respond_with(ResponseTemplate::new(400))
            .expect(1)
            .mount(&server)
            .await;

        let err = update(&test_client(&server), &user_id(), &update_opts())
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), Some(StatusCode::BAD_REQUEST));
    }

    #[tokio::test]
    async fn update_user_unmarshal_error() {
        let server = MockServer::start().await;
        Mock::given(method("PATCH"))
            .and(path(format!("/resell/v2/users/{USER_ID}")))
            .respond_with(ResponseTemplate::new(200).set_body_string("{\"user\": "))
            .expect(1)
            .mount(&server)
            .await;

        let err = update(&test_client(&server), &user_id(), &update_opts())
            .await
            .unwrap_err();
        assert_eq!(err.error_code(), "DECODE_ERROR");
    }

    #[tokio::test]
    async fn delete_user() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path(format!("/resell/v2/users/{USER_ID}")))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let response = delete(&test_client(&server), &user_id()).await.unwrap();
        assert_eq!(response.status_code(), StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn delete_user_http_error() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path(format!("/resell/v2/users/{USER_ID}")))
            .respond_with(ResponseTemplate::new(502))
            .expect(1)
            .mount(&server)
            .await;

        let err = delete(&test_client(&server), &user_id()).await.unwrap_err();
        assert_eq!(err.status_code(), Some(StatusCode::BAD_GATEWAY));
    }

    #[tokio::test]
    async fn delete_user_timeout_error() {
        let err = delete(&unreachable_client(), &user_id()).await.unwrap_err();
        assert!(err.is_transport());
    }

    #[tokio::test]
    async fn empty_id_is_rejected_before_sending() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .respond_with(ResponseTemplate::new(204))
            .expect(0)
            .mount(&server)
            .await;

        let err = delete(&test_client(&server), &UserId::default())
            .await
            .unwrap_err();
        assert!(matches!(err, Error::ValidationError(_)));
    }

    #[tokio::test]
    async fn get_user_timeout_error() {
        let err = get(&unreachable_client(), &user_id()).await.unwrap_err();
        assert!(err.is_transport());
        assert!(err.response().is_none());
    }

    #[tokio::test]
    async fn get_user_unmarshal_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(format!("/resell/v2/users/{USER_ID}")))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "user": { "id": USER_ID, "enabled": "yes" }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let err = get(&test_client(&server), &user_id()).await.unwrap_err();
        assert!(matches!(err, Error::Decode { .. }));
        assert_eq!(err.status_code(), Some(StatusCode::OK));
    }

    #[tokio::test]
    async fn create_user_unmarshal_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/resell/v2/users"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "users": [{ "id": USER_ID }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let err = create(&test_client(&server), &UserOpts::default())
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Decode { .. }));
    }

    #[tokio::test]
    async fn dot_segment_id_never_reaches_collection() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/resell/v2/users"))
            .respond_with(ResponseTemplate::new(204))
            .expect(0)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/resell/v2/users"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "user": {} })))
            .expect(0)
            .mount(&server)
            .await;

        let client = test_client(&server);
        for id in ["..", "."] {
            let err = delete(&client, &UserId::from(id)).await.unwrap_err();
            assert!(matches!(err, Error::ValidationError(_)));
            let err = get(&client, &UserId::from(id)).await.unwrap_err();
            assert!(matches!(err, Error::ValidationError(_)));
        }
        assert!(server.received_requests().await.unwrap().is_empty());
    }
}
