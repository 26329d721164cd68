//! Error mapping tests
//!
//! Each non-2xx status must surface as the matching `Error` variant,
//! carrying the API's error body.

use assert_matches::assert_matches;
use rstest::rstest;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};
use xendit::{Error, RequestOptions};

mod common;
use common::responses::{error_insufficient_balance, error_invalid_api_key, error_not_found};
use common::test_client;

#[tokio::test]
async fn test_bad_request_maps_to_bad_request_with_code() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/disbursements/disb-1"))
        .respond_with(ResponseTemplate::new(400).set_body_json(error_insufficient_balance()))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let result = client
        .disbursements()
        .get("disb-1", RequestOptions::default())
        .await;

    assert_matches!(result, Err(Error::BadRequest { message, error_code }) => {
        assert_eq!(message, "Balance not enough to process disbursement");
        assert_eq!(
            error_code.as_deref(),
            Some("DIRECT_DISBURSEMENT_BALANCE_INSUFFICIENT_ERROR")
        );
    });
}

#[tokio::test]
async fn test_unauthorized_maps_to_authentication() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/balance"))
        .respond_with(ResponseTemplate::new(401).set_body_json(error_invalid_api_key()))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let result = client.balance().get(None, RequestOptions::default()).await;

    assert_matches!(result, Err(Error::Authentication(message)) => {
        assert_eq!(message, "API key is not valid");
    });
}

#[tokio::test]
async fn test_not_found_maps_to_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/disbursements/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(error_not_found()))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let result = client
        .disbursements()
        .get("missing", RequestOptions::default())
        .await;

    assert_matches!(result, Err(Error::NotFound(_)));
}

#[tokio::test]
async fn test_rate_limit_parses_retry_after_header() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/balance"))
        .respond_with(
            ResponseTemplate::new(429)
                .insert_header("retry-after", "15")
                .set_body_json(serde_json::json!({
                    "error_code": "RATE_LIMIT_EXCEEDED",
                    "message": "Too many requests"
                })),
        )
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let result = client.balance().get(None, RequestOptions::default()).await;

    assert_matches!(result, Err(Error::RateLimited { retry_after, .. }) => {
        assert_eq!(retry_after, Some(std::time::Duration::from_secs(15)));
    });
}

#[rstest]
#[case(403, "PermissionDenied")]
#[case(409, "Conflict")]
#[case(500, "InternalServer")]
#[case(503, "InternalServer")]
#[tokio::test]
async fn test_status_to_variant(#[case] status: u16, #[case] expected: &str) {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/balance"))
        .respond_with(
            ResponseTemplate::new(status)
                .set_body_json(serde_json::json!({ "message": "boom" })),
        )
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let error = client
        .balance()
        .get(None, RequestOptions::default())
        .await
        .unwrap_err();

    let variant = match error {
        Error::PermissionDenied(_) => "PermissionDenied",
        Error::Conflict(_) => "Conflict",
        Error::InternalServer(_) => "InternalServer",
        other => panic!("unexpected error: {other:?}"),
    };
    assert_eq!(variant, expected);
}

#[tokio::test]
async fn test_redirect_status_maps_to_api_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/balance"))
        .respond_with(ResponseTemplate::new(300).set_body_json(serde_json::json!({
            "error_code": "MULTIPLE_CHOICES",
            "message": "pick one"
        })))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let result = client.balance().get(None, RequestOptions::default()).await;

    assert_matches!(result, Err(Error::Api { status: 300, error_code, .. }) => {
        assert_eq!(error_code.as_deref(), Some("MULTIPLE_CHOICES"));
    });
}

#[tokio::test]
async fn test_non_json_error_body_falls_back_to_text() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/balance"))
        .respond_with(ResponseTemplate::new(400).set_body_string("upstream blew up"))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server.uri());
    let result = client.balance().get(None, RequestOptions::default()).await;

    assert_matches!(result, Err(Error::BadRequest { message, error_code }) => {
        assert_eq!(message, "upstream blew up");
        assert!(error_code.is_none());
    });
}

#[tokio::test]
async fn test_connection_error_maps_to_connection() {
    // Point at a server that is not listening.
    let client = test_client("http://127.0.0.1:9");

    let result = client.balance().get(None, RequestOptions::default()).await;
    assert_matches!(result, Err(Error::Connection(_)));
}
