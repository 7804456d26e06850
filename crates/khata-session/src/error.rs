//! # Error Types
//!
//! Failures of the persisted-session store.
//!
//! Note what is NOT an error: a missing or corrupt session file loads as
//! `None` (the user simply signs in again). Errors here are real I/O
//! failures on save/clear, which the host should surface.

use thiserror::Error;

/// Persisted-session store failures.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Underlying filesystem failure.
    #[error("session store I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The session could not be serialized for persistence.
    #[error("session serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Convenience type alias for Results with SessionError.
pub type SessionResult<T> = Result<T, SessionError>;
