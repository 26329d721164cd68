//! Common test utilities and fixtures
//!
//! Uses wiremock for HTTP mocking (isolated, parallel-safe) and
//! `#[tokio::test]` for async testing. Response fixtures mirror the JSON
//! bodies the live API returns.

pub mod responses;

use xendit::Client;

/// Secret key used across endpoint tests.
#[allow(dead_code)]
pub const TEST_SECRET_KEY: &str = "xnd_development_test";

/// Basic auth header the test key must produce: base64("xnd_development_test:").
#[allow(dead_code)]
pub const TEST_AUTH_HEADER: &str = "Basic eG5kX2RldmVsb3BtZW50X3Rlc3Q6";

/// Build a client pointed at a mock server.
#[allow(dead_code)]
pub fn test_client(base_url: &str) -> Client {
    Client::builder()
        .secret_key(TEST_SECRET_KEY)
        .base_url(base_url)
        .build()
        .unwrap()
}
