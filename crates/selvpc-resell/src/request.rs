//! Shared request flow for resource modules.

use crate::Result;
use reqwest::Method;
use selvpc_core::{envelope, ResponseResult, ServiceClient};
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

/// GET `url` and decode the payload under `key`.
pub(crate) async fn fetch<T>(
    client: &ServiceClient,
    url: Url,
    key: &str,
) -> Result<(T, ResponseResult)>
where
    T: DeserializeOwned,
{
    client
        .do_request(Method::GET, url, None)
        .await?
        .into_success()?
        .extract_envelope(key)
}

/// Send `payload` wrapped under `key` and decode the same envelope back.
pub(crate) async fn send<B, T>(
    client: &ServiceClient,
    method: Method,
    url: Url,
    key: &str,
    payload: &B,
) -> Result<(T, ResponseResult)>
where
    B: Serialize + ?Sized,
    T: DeserializeOwned,
{
    let body = envelope::encode(key, payload)?;
    client
        .do_request(method, url, Some(body))
        .await?
        .into_success()?
        .extract_envelope(key)
}

/// DELETE `url`; the body of a successful response is ignored.
pub(crate) async fn delete(client: &ServiceClient, url: Url) -> Result<ResponseResult> {
    let response = client.do_request(Method::DELETE, url, None).await?;
    Ok(response.into_success()?.into_inner())
}
