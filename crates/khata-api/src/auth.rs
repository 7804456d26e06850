//! # Auth Operations
//!
//! Sign-in, sign-up, sign-out, and the profile lookup.
//!
//! Login and signup install the returned session into the client's
//! store; logout clears it. The session itself lives in
//! [`khata_session`], never here.

use std::sync::Arc;

use tracing::{info, warn};

use khata_core::types::User;
use khata_session::Session;

use crate::client::ApiClient;
use crate::endpoints;
use crate::error::ApiResult;
use crate::types::{ApiResponse, AuthPayload, LoginRequest, SignupRequest};

/// Authentication operations against the backend.
#[derive(Clone)]
pub struct AuthApi {
    client: Arc<ApiClient>,
}

impl AuthApi {
    /// Creates a new AuthApi.
    pub fn new(client: Arc<ApiClient>) -> Self {
        AuthApi { client }
    }

    /// Signs in and persists the returned session.
    pub async fn login(&self, request: &LoginRequest) -> ApiResult<Session> {
        let response: ApiResponse<AuthPayload> =
            self.client.post_public(endpoints::LOGIN, request).await?;

        let session = response.data.into_session();
        self.client.store_session(session.clone()).await?;

        info!(user = %session.user.user_name, "signed in");
        Ok(session)
    }

    /// Registers a new account and persists the returned session.
    pub async fn signup(&self, request: &SignupRequest) -> ApiResult<Session> {
        let response: ApiResponse<AuthPayload> =
            self.client.post_public(endpoints::REGISTER, request).await?;

        let session = response.data.into_session();
        self.client.store_session(session.clone()).await?;

        info!(user = %session.user.user_name, "account created");
        Ok(session)
    }

    /// Signs out.
    ///
    /// The server-side invalidation is best-effort: whatever the
    /// backend says, the local session is cleared. An unreachable
    /// backend must not trap the user in a signed-in state.
    pub async fn logout(&self) -> ApiResult<()> {
        let result: ApiResult<ApiResponse<Option<serde_json::Value>>> =
            self.client.post(endpoints::LOGOUT, &serde_json::json!({})).await;

        if let Err(err) = result {
            warn!(error = %err, "logout request failed, clearing local session anyway");
        }

        self.client.drop_session().await?;
        info!("signed out");
        Ok(())
    }

    /// Fetches the signed-in user's profile.
    pub async fn profile(&self) -> ApiResult<User> {
        let response: ApiResponse<User> = self.client.get(endpoints::PROFILE).await?;
        Ok(response.data)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
