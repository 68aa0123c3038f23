//! Test helper utilities for the PetFriends scenario suites
//!
//! This module provides reusable fixtures and helper functions shared across
//! the scenario test binaries: a client wired to a wiremock server, credential
//! constants, in-memory image fixtures, and canned service responses.

// Allow dead code in test utilities - functions are used across different test files
#![allow(dead_code)]

use petfriends_client::{AuthKey, Credentials, PetFriendsClient, PetPhoto, ServiceConfig};
use std::time::Duration;
use wiremock::{MockServer, ResponseTemplate};

// ============================================================================
// Credential and token fixtures
// ============================================================================

pub const VALID_EMAIL: &str = "owner@example.com";
pub const VALID_PASSWORD: &str = "correct-horse";
pub const INVALID_EMAIL: &str = "stranger@example.com";
pub const INVALID_PASSWORD: &str = "battery-staple";

/// Auth key the mock service hands out on successful login.
pub const TEST_KEY: &str = "ea738148a1f19838e1c5d1413877f369";

/// Auth key fixture for scenarios that skip the login step.
pub fn test_auth() -> AuthKey {
    AuthKey {
        key: TEST_KEY.to_string(),
    }
}

// ============================================================================
// Client construction
// ============================================================================

/// Build a config pointing at the mock server with a short timeout.
pub fn test_config(base_url: &str) -> ServiceConfig {
    ServiceConfig {
        base_url: base_url.to_string(),
        request_timeout: Duration::from_secs(5),
        valid_credentials: Credentials::new(VALID_EMAIL, VALID_PASSWORD),
        invalid_credentials: Credentials::new(INVALID_EMAIL, INVALID_PASSWORD),
    }
}

/// Build a client pointed at the given mock server.
pub fn test_client(mock_server: &MockServer) -> PetFriendsClient {
    PetFriendsClient::new(test_config(&mock_server.uri()))
        .expect("Failed to create test PetFriends client")
}

// ============================================================================
// Image fixtures
// ============================================================================

/// Minimal JPEG payload: the magic bytes are all the scenarios assert on.
pub fn jpeg_fixture() -> PetPhoto {
    PetPhoto::from_bytes("cst1.jpg", vec![0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10])
}

/// GIF payload used to exercise the unsupported-format upload path.
pub fn gif_fixture() -> PetPhoto {
    PetPhoto::from_bytes("hobbit.gif", b"GIF89a\x01\x00\x01\x00".to_vec())
}

// ============================================================================
// Canned service responses (for wiremock)
// ============================================================================

/// Successful login body carrying the auth key.
pub fn login_ok_body() -> serde_json::Value {
    serde_json::json!({ "key": TEST_KEY })
}

/// 403 response the service returns for bad credentials.
///
/// The live service answers with an HTML page, not JSON; the body here is
/// deliberately non-JSON to exercise the raw-text fallback.
pub fn forbidden_response() -> ResponseTemplate {
    ResponseTemplate::new(403)
        .set_body_string("<html><body>This user wasn't found in database</body></html>")
}

/// A pet record body as the service echoes it after create/update.
pub fn pet_body(id: &str, name: &str, animal_type: &str, age: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "name": name,
        "animal_type": animal_type,
        "age": age,
        "created_at": "1632563181.0",
        "pet_photo": ""
    })
}

/// A listing body wrapping the given pet records.
pub fn pet_list_body(pets: &[serde_json::Value]) -> serde_json::Value {
    serde_json::json!({ "pets": pets })
}

/// 400 response for rejected input, per the documented contract.
pub fn bad_request_response(message: &str) -> ResponseTemplate {
    ResponseTemplate::new(400).set_body_json(serde_json::json!({ "message": message }))
}

/// 500 response shaped like the live service's photo-upload failures.
pub fn server_error_response() -> ResponseTemplate {
    ResponseTemplate::new(500)
        .set_body_string("<html><body><h1>Internal Server Error</h1></body></html>")
}
