//! # Session Value
//!
//! The signed-in session: the user record plus the token pair the
//! backend issued at login.
//!
//! A `Session` is an explicit value. Whoever needs to issue an
//! authenticated request receives one (or a store that can load one);
//! nothing in this workspace reads authentication state from a global.

use serde::{Deserialize, Serialize};

use khata_core::types::User;

/// An authenticated session against the remote backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// The signed-in user.
    pub user: User,
    /// Short-lived bearer token attached to every authenticated request.
    pub access_token: String,
    /// Long-lived token exchanged for a fresh access token on expiry.
    pub refresh_token: String,
}

impl Session {
    /// Creates a session from its parts.
    pub fn new(user: User, access_token: String, refresh_token: String) -> Self {
        Session {
            user,
            access_token,
            refresh_token,
        }
    }

    /// Returns a session with a renewed token pair, keeping the user.
    pub fn with_tokens(&self, access_token: String, refresh_token: String) -> Self {
        Session {
            user: self.user.clone(),
            access_token,
            refresh_token,
        }
    }
}
