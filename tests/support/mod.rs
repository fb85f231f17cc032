//! Shared helpers for the wiremock-based integration tests.

use unibox::ApiClient;
use wiremock::MockServer;

/// Build a client pointed at the mock server.
pub fn client_for(server: &MockServer) -> ApiClient {
    ApiClient::builder(server.uri())
        .build()
        .expect("client should build against the mock server")
}
