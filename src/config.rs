//! Configuration for the PetFriends client and scenario suite.
//!
//! The scenario fixtures (credential pairs, base URL, request timeout) are
//! external inputs. They can be supplied programmatically or loaded from the
//! environment with [`ServiceConfig::from_env`].

use crate::error::{PfError, PfResult};
use crate::logging::log_debug;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default base URL of the live PetFriends service.
pub const DEFAULT_BASE_URL: &str = "https://petfriends.skillfactory.ru";

/// Default per-request timeout in seconds.
///
/// Expiry is surfaced as [`PfError::Timeout`] and treated by the suite as a
/// test failure, not a retryable condition.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// An email/password fixture pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// PetFriends service configuration.
///
/// Holds the service endpoint, the per-request timeout, and the two credential
/// fixtures the scenarios exercise: a pair the service accepts and a pair it
/// must reject with 403.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Base URL of the service, without a trailing slash.
    pub base_url: String,
    /// Fixed timeout applied to every request.
    pub request_timeout: Duration,
    /// Credentials the service is expected to accept.
    pub valid_credentials: Credentials,
    /// Credentials the service is expected to reject.
    pub invalid_credentials: Credentials,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            valid_credentials: Credentials::new("user@example.com", "secret"),
            invalid_credentials: Credentials::new("nobody@example.com", "wrong-password"),
        }
    }
}

impl ServiceConfig {
    /// Build a config pointing at an arbitrary base URL with fixture defaults.
    ///
    /// Used by the mock-backed scenario suite, where credentials are
    /// whatever the mock was told to accept.
    pub fn for_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Load configuration from environment variables.
    ///
    /// | Variable | Meaning | Default |
    /// |----------|---------|---------|
    /// | `PETFRIENDS_BASE_URL` | service endpoint | [`DEFAULT_BASE_URL`] |
    /// | `PETFRIENDS_EMAIL` | valid fixture email | required |
    /// | `PETFRIENDS_PASSWORD` | valid fixture password | required |
    /// | `PETFRIENDS_INVALID_EMAIL` | rejected fixture email | `nobody@example.com` |
    /// | `PETFRIENDS_INVALID_PASSWORD` | rejected fixture password | `wrong-password` |
    /// | `PETFRIENDS_TIMEOUT_SECS` | per-request timeout | `30` |
    ///
    /// # Errors
    ///
    /// Returns [`PfError::ConfigurationError`] if the required variables are
    /// missing or `PETFRIENDS_TIMEOUT_SECS` is not a positive integer.
    pub fn from_env() -> PfResult<Self> {
        let base_url =
            std::env::var("PETFRIENDS_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let email = std::env::var("PETFRIENDS_EMAIL").map_err(|_| {
            PfError::configuration_error("PETFRIENDS_EMAIL environment variable is required")
        })?;
        let password = std::env::var("PETFRIENDS_PASSWORD").map_err(|_| {
            PfError::configuration_error("PETFRIENDS_PASSWORD environment variable is required")
        })?;

        let invalid_email = std::env::var("PETFRIENDS_INVALID_EMAIL")
            .unwrap_or_else(|_| "nobody@example.com".to_string());
        let invalid_password = std::env::var("PETFRIENDS_INVALID_PASSWORD")
            .unwrap_or_else(|_| "wrong-password".to_string());

        let timeout_secs = match std::env::var("PETFRIENDS_TIMEOUT_SECS") {
            Ok(raw) => raw.parse::<u64>().map_err(|_| {
                PfError::configuration_error(format!(
                    "PETFRIENDS_TIMEOUT_SECS must be a positive integer, got: {raw}"
                ))
            })?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };

        let config = Self {
            base_url,
            request_timeout: Duration::from_secs(timeout_secs),
            valid_credentials: Credentials::new(email, password),
            invalid_credentials: Credentials::new(invalid_email, invalid_password),
        };
        config.validate()?;

        log_debug!(
            base_url = %config.base_url,
            timeout_secs = timeout_secs,
            "Loaded PetFriends configuration from environment"
        );

        Ok(config)
    }

    /// Validate the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns [`PfError::ConfigurationError`] if:
    /// - The base URL is empty or not http(s)
    /// - The valid credential fixture is empty
    /// - The timeout is zero
    pub fn validate(&self) -> PfResult<()> {
        if self.base_url.is_empty() {
            return Err(PfError::configuration_error("Base URL must not be empty"));
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(PfError::configuration_error(format!(
                "Base URL must start with http:// or https://, got: {}",
                self.base_url
            )));
        }
        if self.valid_credentials.email.is_empty() || self.valid_credentials.password.is_empty() {
            return Err(PfError::configuration_error(
                "Valid credential fixture must not be empty",
            ));
        }
        if self.request_timeout.is_zero() {
            return Err(PfError::configuration_error(
                "Request timeout must be greater than zero",
            ));
        }
        Ok(())
    }

    /// Join a path onto the base URL, normalizing slashes.
    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}
