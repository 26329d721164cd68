//! Error types for the Xendit client
//!
//! This module provides one error hierarchy for every failure the client can
//! observe, following Rust idioms with the `thiserror` crate. API failures
//! are mapped from Xendit's `{ "error_code": ..., "message": ... }` error
//! body plus the HTTP status code.

use std::time::Duration;
use thiserror::Error;

/// Result type alias for operations that can fail with a Xendit client error.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the Xendit client.
#[derive(Debug, Error)]
pub enum Error {
    /// API rejected the request parameters (400).
    #[error("Bad request: {message}")]
    BadRequest {
        /// Error message from the API
        message: String,
        /// Xendit error code, e.g. `API_VALIDATION_ERROR`
        error_code: Option<String>,
    },

    /// Authentication failed (401), usually a missing or invalid secret key.
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// Permission denied (403), e.g. the key lacks access to a sub-account.
    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    /// Resource not found (404).
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Conflict (409), e.g. a duplicate external ID or an idempotency replay
    /// with a different body.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Rate limit exceeded (429).
    #[error("Rate limit exceeded: {message}")]
    RateLimited {
        /// Error message from the API
        message: String,
        /// Time to wait before retrying, if provided by the API
        retry_after: Option<Duration>,
    },

    /// Internal server error (500+).
    #[error("Internal server error: {0}")]
    InternalServer(String),

    /// Generic API error for status codes not covered above.
    #[error("API error (status {status}): {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Error message
        message: String,
        /// Xendit error code if provided
        error_code: Option<String>,
        /// Request ID for debugging, from the `request-id` header
        request_id: Option<String>,
    },

    /// Failed to interpret the API response body.
    #[error("Failed to parse API response: {0}")]
    ResponseValidation(String),

    /// Network or connection error.
    #[error("Connection error: {0}")]
    Connection(String),

    /// Request timeout.
    #[error("Request timeout after {0:?}")]
    Timeout(Duration),

    /// Invalid request parameters detected before any HTTP call.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Invalid URL provided.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// HTTP client configuration or initialization error.
    #[error("HTTP client error: {0}")]
    HttpClient(String),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Missing required configuration, e.g. no secret key and no global client.
    #[error("Missing required configuration: {0}")]
    MissingConfig(String),

    /// Other errors not covered by specific variants.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl Error {
    /// Create an API error from an HTTP response status, body, and headers.
    ///
    /// Xendit error bodies look like:
    ///
    /// ```json
    /// { "error_code": "DIRECT_DISBURSEMENT_BALANCE_INSUFFICIENT",
    ///   "message": "Balance not enough to process disbursement" }
    /// ```
    ///
    /// Bodies that do not parse fall back to the raw text.
    pub fn from_response(status: u16, body: &str, headers: &http::HeaderMap) -> Self {
        let (message, error_code) = match serde_json::from_str::<ApiErrorBody>(body) {
            Ok(parsed) => (parsed.message, parsed.error_code),
            Err(_) => (body.to_string(), None),
        };

        match status {
            400 => Error::BadRequest {
                message,
                error_code,
            },
            401 => Error::Authentication(message),
            403 => Error::PermissionDenied(message),
            404 => Error::NotFound(message),
            409 => Error::Conflict(message),
            429 => {
                let retry_after = headers
                    .get("retry-after")
                    .and_then(|v| v.to_str().ok())
                    .and_then(|s| s.parse::<u64>().ok())
                    .map(Duration::from_secs);

                Error::RateLimited {
                    message,
                    retry_after,
                }
            }
            s if s >= 500 => Error::InternalServer(message),
            _ => Error::Api {
                status,
                message,
                error_code,
                request_id: headers
                    .get("request-id")
                    .and_then(|v| v.to_str().ok())
                    .map(String::from),
            },
        }
    }

    /// The Xendit error code carried by this error, if any.
    pub fn error_code(&self) -> Option<&str> {
        match self {
            Error::BadRequest { error_code, .. } | Error::Api { error_code, .. } => {
                error_code.as_deref()
            }
            _ => None,
        }
    }
}

#[derive(Debug, serde::Deserialize)]
struct ApiErrorBody {
    message: String,
    #[serde(default)]
    error_code: Option<String>,
}
