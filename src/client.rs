//! PetFriends HTTP client wrapper.
//!
//! Every call returns an [`ApiOutcome`] carrying the HTTP status and the
//! parsed body, so scenarios can assert on 400/403/404/500 responses
//! directly. Only transport-level problems (connection failure, timeout,
//! unreadable body) become a [`PfError`].

use crate::config::ServiceConfig;
use crate::error::{PfError, PfResult};
use crate::logging::{log_debug, log_warn};
use crate::models::{AuthKey, PetFilter};
use reqwest::multipart::{Form, Part};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::path::Path;
use std::time::Instant;

/// Header carrying the bearer token on authenticated calls.
const AUTH_HEADER: &str = "auth_key";

/// The status and parsed body of one PetFriends API call.
///
/// The body is kept as loose JSON; decode into a typed model with
/// [`decode`](Self::decode) only where a scenario needs one. Non-JSON bodies
/// (the service returns HTML pages on some errors) are preserved as a raw
/// string value.
#[derive(Debug, Clone)]
pub struct ApiOutcome {
    /// HTTP status code of the response.
    pub status: u16,
    /// Parsed response body.
    pub body: Value,
}

impl ApiOutcome {
    /// Whether the status is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Whether the body is a JSON object containing the given top-level field.
    pub fn has_field(&self, name: &str) -> bool {
        self.body.get(name).is_some()
    }

    /// The given top-level field as a string, if present.
    pub fn field_str(&self, name: &str) -> Option<&str> {
        self.body.get(name).and_then(Value::as_str)
    }

    /// Decode the body into a typed model.
    ///
    /// # Errors
    ///
    /// Returns [`PfError::ResponseParsingError`] if the body doesn't match
    /// the model, which usually means the call landed on an error branch the
    /// scenario didn't expect.
    pub fn decode<T: DeserializeOwned>(&self) -> PfResult<T> {
        serde_json::from_value(self.body.clone()).map_err(|e| {
            PfError::response_parsing_error(format!(
                "Failed to decode response body (status {}): {}",
                self.status, e
            ))
        })
    }
}

/// An image payload for the photo-upload calls.
///
/// Construction never rejects a format: whether `.gif` or anything else is
/// accepted is the service's decision and part of the contract under test.
#[derive(Debug, Clone)]
pub struct PetPhoto {
    file_name: String,
    mime: &'static str,
    bytes: Vec<u8>,
}

impl PetPhoto {
    /// Load a photo from disk, inferring the MIME type from the extension.
    ///
    /// # Errors
    ///
    /// Returns [`PfError::ConfigurationError`] if the file can't be read.
    pub fn from_path(path: impl AsRef<Path>) -> PfResult<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|e| {
            PfError::configuration_error(format!(
                "Failed to read photo file {}: {}",
                path.display(),
                e
            ))
        })?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "photo".to_string());
        Ok(Self::from_bytes(file_name, bytes))
    }

    /// Build a photo from in-memory bytes, inferring the MIME type from the
    /// file name's extension.
    pub fn from_bytes(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let file_name = file_name.into();
        let mime = Self::mime_for(&file_name);
        Self {
            file_name,
            mime,
            bytes,
        }
    }

    /// File name sent in the multipart part.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// MIME type sent in the multipart part.
    pub fn mime(&self) -> &'static str {
        self.mime
    }

    fn mime_for(file_name: &str) -> &'static str {
        let extension = file_name.rsplit('.').next().unwrap_or_default();
        match extension.to_ascii_lowercase().as_str() {
            "jpg" | "jpeg" => "image/jpeg",
            "png" => "image/png",
            "gif" => "image/gif",
            _ => "application/octet-stream",
        }
    }

    fn part(&self) -> PfResult<Part> {
        Part::bytes(self.bytes.clone())
            .file_name(self.file_name.clone())
            .mime_str(self.mime)
            .map_err(|e| {
                PfError::configuration_error(format!(
                    "Invalid MIME type for photo {}: {}",
                    self.file_name, e
                ))
            })
    }
}

/// Typed client for the PetFriends pet-management REST service.
///
/// Construct once per test run and pass by reference into each scenario; the
/// client carries no mutable state beyond the connection pool inside reqwest.
#[derive(Debug)]
pub struct PetFriendsClient {
    http: reqwest::Client,
    config: ServiceConfig,
}

impl PetFriendsClient {
    /// Create a new client instance.
    ///
    /// # Errors
    ///
    /// Returns [`PfError::ConfigurationError`] if:
    /// - Configuration validation fails
    /// - HTTP client initialization fails
    pub fn new(config: ServiceConfig) -> PfResult<Self> {
        config.validate()?;

        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| {
                PfError::configuration_error(format!("Failed to build HTTP client: {e}"))
            })?;

        log_debug!(
            base_url = %config.base_url,
            timeout_secs = config.request_timeout.as_secs(),
            "PetFriends client created"
        );

        Ok(Self { http, config })
    }

    /// The configuration this client was built from.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Obtain an auth key for a credential pair.
    ///
    /// Contract: 200 with a non-empty `key` field for valid credentials,
    /// 403 with no `key` field otherwise.
    pub async fn login(&self, email: &str, password: &str) -> PfResult<ApiOutcome> {
        let url = self.config.endpoint("api/key");
        let request = self.http.post(&url).json(&serde_json::json!({
            "email": email,
            "password": password,
        }));
        self.dispatch(request, "login").await
    }

    /// List pets visible under the given filter.
    ///
    /// Contract: 200 with a `pets` array.
    pub async fn list_pets(&self, auth: &AuthKey, filter: PetFilter) -> PfResult<ApiOutcome> {
        self.list_pets_with_filter(auth, filter.as_query_value())
            .await
    }

    /// List pets with a raw `filter` query value.
    ///
    /// Exists so scenarios can probe values outside [`PetFilter`]; the
    /// service's rejection status for an invalid filter has been observed
    /// inconsistently (see the contract expectations).
    pub async fn list_pets_with_filter(
        &self,
        auth: &AuthKey,
        filter: &str,
    ) -> PfResult<ApiOutcome> {
        let url = self.config.endpoint("api/pets");
        let request = self
            .http
            .get(&url)
            .header(AUTH_HEADER, &auth.key)
            .query(&[("filter", filter)]);
        self.dispatch(request, "list_pets").await
    }

    /// Create a pet record with a photo (multipart upload).
    ///
    /// Contract: 200 echoing `name` and carrying the assigned `id`.
    /// Documented to reject an empty name with 400; the live service has been
    /// observed accepting it with 200.
    pub async fn add_pet(
        &self,
        auth: &AuthKey,
        name: &str,
        animal_type: &str,
        age: &str,
        photo: &PetPhoto,
    ) -> PfResult<ApiOutcome> {
        let url = self.config.endpoint("api/pets");
        let form = Form::new()
            .text("name", name.to_string())
            .text("animal_type", animal_type.to_string())
            .text("age", age.to_string())
            .part("pet_photo", photo.part()?);
        let request = self
            .http
            .post(&url)
            .header(AUTH_HEADER, &auth.key)
            .multipart(form);
        self.dispatch(request, "add_pet").await
    }

    /// Create a pet record without a photo.
    ///
    /// Contract: 200 echoing `name`.
    pub async fn create_pet_simple(
        &self,
        auth: &AuthKey,
        name: &str,
        animal_type: &str,
        age: &str,
    ) -> PfResult<ApiOutcome> {
        let url = self.config.endpoint("api/create_pet_simple");
        let request = self
            .http
            .post(&url)
            .header(AUTH_HEADER, &auth.key)
            .form(&[("name", name), ("animal_type", animal_type), ("age", age)]);
        self.dispatch(request, "create_pet_simple").await
    }

    /// Update an existing pet record.
    ///
    /// Contract: 200 echoing `name`. Documented to reject empty fields with
    /// 400; the live service has been observed returning 200 instead.
    pub async fn update_pet(
        &self,
        auth: &AuthKey,
        pet_id: &str,
        name: &str,
        animal_type: &str,
        age: &str,
    ) -> PfResult<ApiOutcome> {
        let url = self.config.endpoint(&format!("api/pets/{pet_id}"));
        let request = self
            .http
            .put(&url)
            .header(AUTH_HEADER, &auth.key)
            .form(&[("name", name), ("animal_type", animal_type), ("age", age)]);
        self.dispatch(request, "update_pet").await
    }

    /// Delete a pet record by id.
    ///
    /// Contract: 200 with an empty/confirmation body for an owned pet,
    /// 404 for an unknown id.
    pub async fn delete_pet(&self, auth: &AuthKey, pet_id: &str) -> PfResult<ApiOutcome> {
        let url = self.config.endpoint(&format!("api/pets/{pet_id}"));
        let request = self.http.delete(&url).header(AUTH_HEADER, &auth.key);
        self.dispatch(request, "delete_pet").await
    }

    /// Attach or replace the photo of an existing pet.
    ///
    /// Contract: 200 with a `pet_photo` field. Documented to reject an
    /// unknown pet id or unsupported image format with 400; the live service
    /// has been observed returning 500 for both.
    pub async fn set_pet_photo(
        &self,
        auth: &AuthKey,
        pet_id: &str,
        photo: &PetPhoto,
    ) -> PfResult<ApiOutcome> {
        let url = self.config.endpoint(&format!("api/pets/set_photo/{pet_id}"));
        let form = Form::new().part("pet_photo", photo.part()?);
        let request = self
            .http
            .post(&url)
            .header(AUTH_HEADER, &auth.key)
            .multipart(form);
        self.dispatch(request, "set_pet_photo").await
    }

    /// Send one request and normalize the response into an [`ApiOutcome`].
    ///
    /// Applies the fixed per-request timeout. No retry, no backoff: the
    /// scenario suite treats every transport failure as a terminal result.
    async fn dispatch(
        &self,
        request: reqwest::RequestBuilder,
        call: &'static str,
    ) -> PfResult<ApiOutcome> {
        let timeout_secs = self.config.request_timeout.as_secs();
        let start = Instant::now();

        let response = tokio::time::timeout(self.config.request_timeout, request.send())
            .await
            .map_err(|_| PfError::timeout(timeout_secs))?
            .map_err(|e| {
                if e.is_timeout() {
                    PfError::timeout(timeout_secs)
                } else {
                    PfError::request_failed(format!("{call} request failed"), Some(Box::new(e)))
                }
            })?;

        let status = response.status().as_u16();
        let text = response.text().await.map_err(|e| {
            PfError::request_failed(
                format!("{call}: failed to read response body"),
                Some(Box::new(e)),
            )
        })?;

        // The service answers some errors with HTML pages rather than JSON.
        let body = match serde_json::from_str::<Value>(&text) {
            Ok(json) => json,
            Err(_) => {
                log_warn!(
                    call = call,
                    status = status,
                    "Non-JSON response body, preserving as raw text"
                );
                Value::String(text)
            }
        };

        log_debug!(
            call = call,
            status = status,
            duration_ms = start.elapsed().as_millis() as u64,
            "PetFriends call completed"
        );

        Ok(ApiOutcome { status, body })
    }
}
