//! Error types for PetFriends API operations.
//!
//! This module provides structured error handling for petfriends-client,
//! including categorization, severity levels, and retry guidance.
//!
//! Only transport-level failures are errors here. HTTP error statuses
//! returned by the service (400, 403, 404, 500) are part of the contract
//! under test and travel back to the caller inside
//! [`ApiOutcome`](crate::client::ApiOutcome), never as an `Err`.
//!
//! # Result Type
//!
//! Use [`PfResult<T>`] as a convenient alias for `Result<T, PfError>`:
//!
//! ```rust
//! use petfriends_client::PfResult;
//!
//! fn my_function() -> PfResult<String> {
//!     Ok("Success".to_string())
//! }
//! ```

use crate::logging::{log_error, log_warn};
use thiserror::Error;

// ============================================================================
// Error categorization types
// ============================================================================

/// High-level categorization of errors for routing and handling decisions.
///
/// Use [`PfError::category()`] to get the category for any error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// External service failures (network issues, unreachable host).
    External,

    /// Client errors (invalid configuration, malformed inputs).
    ///
    /// The caller made a mistake that they can fix (bad base URL,
    /// unreadable photo path, etc.).
    Client,

    /// Temporary failures.
    ///
    /// Request timeouts. The suite treats these as test failures rather
    /// than retrying, but callers embedding the client may choose otherwise.
    Transient,
}

/// Severity level for logging and alerting decisions.
///
/// Use [`PfError::severity()`] to get the severity for any error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Action failed but system is stable.
    Error,

    /// Unexpected but recoverable situation.
    Warning,
}

// ============================================================================
// PetFriends error types
// ============================================================================

/// Convenient result type for PetFriends client operations.
pub type PfResult<T> = std::result::Result<T, PfError>;

/// Errors that can occur while talking to the PetFriends service.
///
/// Each variant can be:
/// - Categorized via [`category()`](Self::category)
/// - Assessed for severity via [`severity()`](Self::severity)
/// - Checked for retryability via [`is_retryable()`](Self::is_retryable)
///
/// # Creating Errors
///
/// Use the constructor methods which automatically log the error:
///
/// ```rust
/// use petfriends_client::PfError;
///
/// let err = PfError::configuration_error("Empty base URL");
/// let err = PfError::timeout(30);
/// ```
///
/// # Error Categories
///
/// | Variant | Category | Retryable |
/// |---------|----------|-----------|
/// | `ConfigurationError` | Client | No |
/// | `RequestFailed` | External | Yes |
/// | `ResponseParsingError` | External | No |
/// | `Timeout` | Transient | Yes |
#[derive(Error, Debug)]
pub enum PfError {
    /// Client configuration is invalid or incomplete.
    ///
    /// Common causes:
    /// - Empty or malformed base URL
    /// - Missing credential fixtures
    /// - Unreadable photo file
    #[error("Client configuration error: {message}")]
    ConfigurationError {
        /// Description of the configuration problem.
        message: String,
    },

    /// The HTTP request to the service failed at the transport level.
    ///
    /// Connection refused, DNS failure, TLS errors. Check the source
    /// error for the underlying cause.
    #[error("Request failed: {message}")]
    RequestFailed {
        /// Description of the failure.
        message: String,
        /// The underlying error, if available.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The service responded, but the body couldn't be decoded as expected.
    ///
    /// This might indicate a service API change or a malformed response.
    #[error("Response parsing failed: {message}")]
    ResponseParsingError {
        /// Details about the parsing failure.
        message: String,
    },

    /// Request timed out.
    ///
    /// The service didn't respond within the configured per-request timeout.
    /// The scenario suite treats expiry as a test failure, not a retryable
    /// condition.
    #[error("Request timed out after {timeout_seconds}s")]
    Timeout {
        /// The timeout duration that was exceeded.
        timeout_seconds: u64,
    },
}

impl PfError {
    /// Get the error category for routing and handling decisions.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ConfigurationError { .. } => ErrorCategory::Client,
            Self::RequestFailed { .. } => ErrorCategory::External,
            Self::ResponseParsingError { .. } => ErrorCategory::External,
            Self::Timeout { .. } => ErrorCategory::Transient,
        }
    }

    /// Get the error severity for logging and alerting.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::ConfigurationError { .. } => ErrorSeverity::Error,
            Self::RequestFailed { .. } => ErrorSeverity::Error,
            Self::ResponseParsingError { .. } => ErrorSeverity::Warning,
            Self::Timeout { .. } => ErrorSeverity::Warning,
        }
    }

    /// Whether this error is transient and could trigger a retry.
    ///
    /// Returns `true` for timeouts and general request failures. The
    /// scenario suite never retries; this exists for callers embedding
    /// the client elsewhere.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Timeout { .. } | Self::RequestFailed { .. })
    }

    // =========================================================================
    // Constructor methods with automatic logging
    // =========================================================================
    //
    // These methods automatically log the error at the appropriate level.
    // Use them instead of constructing variants directly.

    /// Create a configuration error (logs at ERROR level).
    pub fn configuration_error(message: impl Into<String>) -> Self {
        let message = message.into();
        log_error!(
            error_type = "configuration_error",
            message = %message,
            "PetFriends client configuration validation failed"
        );
        Self::ConfigurationError { message }
    }

    pub fn request_failed(
        message: impl Into<String>,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        let message = message.into();
        log_error!(
            error_type = "request_failed",
            message = %message,
            has_source = source.is_some(),
            "PetFriends request execution failed"
        );
        Self::RequestFailed { message, source }
    }

    pub fn response_parsing_error(message: impl Into<String>) -> Self {
        let message = message.into();
        log_warn!(
            error_type = "response_parsing_error",
            message = %message,
            "PetFriends response format invalid"
        );
        Self::ResponseParsingError { message }
    }

    pub fn timeout(timeout_seconds: u64) -> Self {
        log_warn!(
            error_type = "timeout",
            timeout_seconds = timeout_seconds,
            "PetFriends request timed out"
        );
        Self::Timeout { timeout_seconds }
    }
}
