//! Client Transport Behavior Tests
//!
//! UNIT UNDER TEST: PetFriendsClient request dispatch
//!
//! BUSINESS RESPONSIBILITY:
//!   - Apply a fixed per-request timeout and surface expiry as PfError::Timeout
//!   - Convert transport failures into PfError::RequestFailed
//!   - Preserve non-JSON bodies as raw text instead of failing the call
//!   - Send the auth key header on authenticated calls
//!
//! TEST COVERAGE:
//!   - Timeout expiry treated as a terminal failure (no retry)
//!   - Connection failure handling
//!   - Raw-text body fallback
//!   - Typed decode failure on a mismatched body

mod common;

use common::{test_auth, test_client, test_config};
use petfriends_client::{PetFilter, PetFriendsClient, PetList, PfError};
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_slow_response_surfaces_as_timeout() {
    // Expiry of the fixed request timeout is a test failure, not a retry

    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/pets"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
        .mount(&mock_server)
        .await;

    let mut config = test_config(&mock_server.uri());
    config.request_timeout = Duration::from_millis(200);
    let client = PetFriendsClient::new(config).unwrap();

    let result = client.list_pets(&test_auth(), PetFilter::MyPets).await;

    assert!(result.is_err(), "Slow response must fail the call");
    match result.unwrap_err() {
        PfError::Timeout { timeout_seconds } => {
            assert_eq!(timeout_seconds, 0, "Sub-second timeout truncates to 0s");
        }
        other => panic!("Expected Timeout error, got: {:?}", other),
    }
}

#[tokio::test]
async fn test_connection_failure_surfaces_as_request_failed() {
    // Use an unroutable URL to trigger a connection failure
    let client = PetFriendsClient::new(test_config("http://localhost:1")).unwrap();

    let result = client.login("owner@example.com", "secret").await;

    assert!(result.is_err());
    match result.unwrap_err() {
        PfError::RequestFailed { .. } => {}
        other => panic!("Expected RequestFailed error, got: {:?}", other),
    }
}

#[tokio::test]
async fn test_non_json_body_is_preserved_as_raw_text() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(200).set_body_string("deleted"))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let outcome = client.delete_pet(&test_auth(), "pet-1").await.unwrap();

    assert_eq!(outcome.status, 200);
    assert_eq!(outcome.body.as_str(), Some("deleted"));
}

#[tokio::test]
async fn test_decode_failure_on_mismatched_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/pets"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "unexpected": true })),
        )
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let outcome = client
        .list_pets(&test_auth(), PetFilter::MyPets)
        .await
        .unwrap();

    // The call itself succeeds; only the typed decode fails
    assert_eq!(outcome.status, 200);
    match outcome.decode::<PetList>() {
        Err(PfError::ResponseParsingError { .. }) => {}
        other => panic!("Expected ResponseParsingError, got: {:?}", other),
    }
}
