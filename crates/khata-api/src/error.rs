//! # Error Types
//!
//! Transport and backend failures, classified for the host UI.
//!
//! ## Classification
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Failure → Variant                                   │
//! │                                                                         │
//! │  No connection / DNS / TLS        → Network   ("check your internet")  │
//! │  Deadline exceeded                → Timeout                             │
//! │  401 / 403                        → Auth      (sign in again)          │
//! │  429                              → RateLimit                           │
//! │  Other 4xx                        → Client    (carries backend msg)    │
//! │  5xx                              → Server                              │
//! │  Unparseable body                 → Decode                              │
//! │  Rejected before the wire         → Validation (field-level)           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `Validation` is the one variant that never involved the network: the
//! core calculator refused the sale locally and the host shows it on the
//! offending field.

use reqwest::StatusCode;
use thiserror::Error;

use khata_core::ValidationError;
use khata_session::SessionError;

/// Errors surfaced by the backend client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The backend could not be reached at all.
    #[error("network error: {0}")]
    Network(String),

    /// The request exceeded the configured timeout.
    #[error("request timed out")]
    Timeout,

    /// The backend rejected our credentials (401/403), and a token
    /// refresh did not rescue the request.
    #[error("authentication failed: {0}")]
    Auth(String),

    /// The backend throttled us (429).
    #[error("rate limited: {0}")]
    RateLimit(String),

    /// A 4xx the caller can act on; `message` is the backend's own text.
    #[error("request rejected ({status}): {message}")]
    Client { status: u16, message: String },

    /// A 5xx; retrying later is the only remedy.
    #[error("backend error ({status}): {message}")]
    Server { status: u16, message: String },

    /// The response body was not what the DTO expected.
    #[error("failed to decode response: {0}")]
    Decode(String),

    /// The client itself was misconfigured.
    #[error("invalid client configuration: {0}")]
    Config(String),

    /// Rejected locally by the core calculator or field rules.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The session store failed while persisting or clearing tokens.
    #[error(transparent)]
    Session(#[from] SessionError),
}

impl ApiError {
    /// Classifies a non-success HTTP status.
    ///
    /// `message` should already be the human-readable text extracted
    /// from the response body (see [`crate::client`]).
    pub(crate) fn from_status(status: StatusCode, message: String) -> ApiError {
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            ApiError::Auth(message)
        } else if status == StatusCode::TOO_MANY_REQUESTS {
            ApiError::RateLimit(message)
        } else if status.is_server_error() {
            ApiError::Server {
                status: status.as_u16(),
                message,
            }
        } else {
            ApiError::Client {
                status: status.as_u16(),
                message,
            }
        }
    }

    /// Whether the host should route the user back to the login screen.
    pub fn is_auth(&self) -> bool {
        matches!(self, ApiError::Auth(_))
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Timeout
        } else if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// Convenience type alias for Results with ApiError.
pub type ApiResult<T> = Result<T, ApiError>;

// =============================================================================
// Unit Tests
// =============================================================================
