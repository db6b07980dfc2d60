use std::sync::Once;

use base64::Engine;
use lemlist_api::{ClientConfig, LemlistRestClient};
use tracing_subscriber::EnvFilter;
use wiremock::MockServer;

pub const API_KEY: &str = "integration-key";

static TRACING: Once = Once::new();

/// Install a test-writer subscriber once; filtered by `RUST_LOG`.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Start a mock server and a client pointed at it.
pub async fn setup() -> (MockServer, LemlistRestClient) {
    init_tracing();
    let server = MockServer::start().await;
    let config = ClientConfig::builder()
        .with_base_url(format!("{}/api", server.uri()))
        .build();
    let client = LemlistRestClient::with_config(API_KEY, config).unwrap();
    (server, client)
}

/// `Authorization` value the client must send for [`API_KEY`].
pub fn expected_auth_header() -> String {
    let encoded = base64::engine::general_purpose::STANDARD.encode(format!(":{API_KEY}"));
    format!("Basic {encoded}")
}

/// Query string of the most recent request, if any.
pub async fn last_query(server: &MockServer) -> Option<String> {
    let received = server.received_requests().await.unwrap();
    received.last().unwrap().url.query().map(str::to_string)
}
