//! Helpers shared by the resource module tests.

use crate::ResellClientBuilder;
use selvpc_core::ServiceClient;
use wiremock::MockServer;

pub(crate) const FAKE_TOKEN: &str = "fakeUUID";

/// Client pointed at `{server}/resell/v2`.
pub(crate) fn test_client(server: &MockServer) -> ServiceClient {
    ResellClientBuilder::new(server.uri())
        .unwrap()
        .with_token(FAKE_TOKEN)
        .build()
        .unwrap()
}

/// Client pointed at a local port nothing listens on.
pub(crate) fn unreachable_client() -> ServiceClient {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    ResellClientBuilder::new(format!("http://{addr}"))
        .unwrap()
        .with_token(FAKE_TOKEN)
        .build()
        .unwrap()
}
