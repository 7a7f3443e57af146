//! Common test utilities for memorize client tests.

use memorize_client::MemorizeClient;
use serde::Serialize;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Start a new mock server for testing.
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// A client pointed at the mock server.
pub fn client_for(server: &MockServer) -> MemorizeClient {
    MemorizeClient::builder().url(server.uri()).build()
}

/// Create a successful JSON response.
pub fn mock_ok<T: Serialize>(body: T) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(body)
}

/// Create an error response in the server's `{"error": ...}` shape.
#[allow(dead_code)] // Not all test files use this
pub fn mock_api_error(status: u16, error: &str) -> ResponseTemplate {
    ResponseTemplate::new(status).set_body_json(serde_json::json!({ "error": error }))
}

/// Mount a mock for a method and path.
pub async fn mock_route(server: &MockServer, verb: &str, route: &str, response: ResponseTemplate) {
    Mock::given(method(verb))
        .and(path(route))
        .respond_with(response)
        .expect(1)
        .mount(server)
        .await;
}
