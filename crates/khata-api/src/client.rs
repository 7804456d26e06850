//! # API Client
//!
//! The one component that talks to the backend.
//!
//! ## Request Path
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Request Path                                     │
//! │                                                                         │
//! │  repository / auth call                                                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  attach bearer token (from the explicit session, if signed in)         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  send ──► 2xx ──► decode DTO ──► caller                                │
//! │       │                                                                 │
//! │       ├─► 401 ──► refresh token once ──► retry once ──► ...            │
//! │       │                                                                 │
//! │       └─► other ──► classify (ApiError) with the backend's message     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The client holds the session as an explicit value loaded from a
//! [`SessionStore`] at construction. A successful refresh persists the
//! renewed token pair back through the same store, so the next launch
//! picks it up.

use std::sync::Arc;

use reqwest::header::AUTHORIZATION;
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use khata_session::{Session, SessionStore};

use crate::config::ApiConfig;
use crate::endpoints;
use crate::error::{ApiError, ApiResult};
use crate::types::{ApiResponse, AuthPayload, RefreshRequest};

/// HTTP client for the Khata backend.
///
/// Cheap to share behind an `Arc`; all interior state is the reqwest
/// connection pool and the current session behind an `RwLock`.
pub struct ApiClient {
    http: reqwest::Client,
    config: ApiConfig,
    store: Arc<dyn SessionStore>,
    session: RwLock<Option<Session>>,
}

impl ApiClient {
    /// Creates a client and restores any persisted session.
    ///
    /// ## Errors
    /// Returns `ApiError::Config` if the underlying HTTP client cannot
    /// be built, or a store error if the session file is unreadable at
    /// the I/O level (a *corrupt* file restores as signed-out instead).
    pub fn new(config: ApiConfig, store: Arc<dyn SessionStore>) -> ApiResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|err| ApiError::Config(format!("failed to build HTTP client: {err}")))?;

        let session = store.load()?;
        if let Some(restored) = &session {
            info!(user = %restored.user.user_name, "session restored from store");
        }

        Ok(ApiClient {
            http,
            config,
            store,
            session: RwLock::new(session),
        })
    }

    /// The configured backend origin.
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// A snapshot of the current session, if signed in.
    pub async fn session(&self) -> Option<Session> {
        self.session.read().await.clone()
    }

    /// Whether a session is currently held.
    pub async fn is_signed_in(&self) -> bool {
        self.session.read().await.is_some()
    }

    /// Installs a new session: persisted first, then visible to requests.
    pub(crate) async fn store_session(&self, session: Session) -> ApiResult<()> {
        self.store.save(&session)?;
        *self.session.write().await = Some(session);
        Ok(())
    }

    /// Forgets the session locally and in the store.
    pub(crate) async fn drop_session(&self) -> ApiResult<()> {
        self.store.clear()?;
        *self.session.write().await = None;
        Ok(())
    }

    // =========================================================================
    // Request Verbs
    // =========================================================================

    /// Authenticated GET.
    pub async fn get<R: DeserializeOwned>(&self, path: &str) -> ApiResult<R> {
        self.request(Method::GET, path, None, None, true).await
    }

    /// Authenticated GET with query parameters.
    pub async fn get_query<Q: Serialize, R: DeserializeOwned>(
        &self,
        path: &str,
        query: &Q,
    ) -> ApiResult<R> {
        self.request(Method::GET, path, Some(to_value(query)?), None, true)
            .await
    }

    /// Authenticated POST with a JSON body.
    pub async fn post<B: Serialize, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<R> {
        self.request(Method::POST, path, None, Some(to_value(body)?), true)
            .await
    }

    /// POST without a bearer token (login, signup, refresh).
    pub async fn post_public<B: Serialize, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<R> {
        self.request(Method::POST, path, None, Some(to_value(body)?), false)
            .await
    }

    /// Authenticated PUT with a JSON body.
    pub async fn put<B: Serialize, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<R> {
        self.request(Method::PUT, path, None, Some(to_value(body)?), true)
            .await
    }

    /// Authenticated DELETE.
    pub async fn delete<R: DeserializeOwned>(&self, path: &str) -> ApiResult<R> {
        self.request(Method::DELETE, path, None, None, true).await
    }

    // =========================================================================
    // Internals
    // =========================================================================

    async fn request<R: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        query: Option<Value>,
        body: Option<Value>,
        authenticated: bool,
    ) -> ApiResult<R> {
        debug!(method = %method, path, "request");

        let mut response = self
            .send(method.clone(), path, query.as_ref(), body.as_ref(), authenticated)
            .await?;

        // One refresh, one retry. A second 401 falls through to the
        // classifier below and surfaces as ApiError::Auth.
        if response.status() == StatusCode::UNAUTHORIZED
            && authenticated
            && Box::pin(self.refresh_session()).await?
        {
            debug!(path, "retrying with refreshed token");
            response = self
                .send(method, path, query.as_ref(), body.as_ref(), authenticated)
                .await?;
        }

        let status = response.status();
        if !status.is_success() {
            let body_text = response.text().await.unwrap_or_default();
            let message = extract_message(&body_text, status);
            warn!(path, status = status.as_u16(), %message, "request failed");
            return Err(ApiError::from_status(status, message));
        }

        let parsed = response
            .json::<R>()
            .await
            .map_err(|err| ApiError::Decode(err.to_string()))?;

        debug!(path, status = status.as_u16(), "request ok");
        Ok(parsed)
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        query: Option<&Value>,
        body: Option<&Value>,
        authenticated: bool,
    ) -> ApiResult<reqwest::Response> {
        let url = format!("{}{}", self.config.base_url, path);
        let mut request = self.http.request(method, &url);

        if let Some(query) = query {
            request = request.query(query);
        }
        if let Some(body) = body {
            request = request.json(body);
        }
        if authenticated {
            if let Some(session) = self.session.read().await.as_ref() {
                request = request.header(
                    AUTHORIZATION,
                    format!("Bearer {}", session.access_token),
                );
            }
        }

        Ok(request.send().await?)
    }

    /// Exchanges the refresh token for a new pair.
    ///
    /// Returns `Ok(true)` when a renewed session is installed. A failed
    /// refresh returns `Ok(false)` so the caller surfaces the original
    /// 401; the stored session is left alone (the host decides whether
    /// to sign out).
    async fn refresh_session(&self) -> ApiResult<bool> {
        let Some(current) = self.session.read().await.clone() else {
            return Ok(false);
        };

        info!("access token rejected, attempting refresh");
        let request = RefreshRequest {
            refresh_token: current.refresh_token.clone(),
        };

        let refreshed: ApiResponse<AuthPayload> = match self
            .post_public(endpoints::REFRESH, &request)
            .await
        {
            Ok(response) => response,
            Err(err) => {
                warn!(error = %err, "token refresh failed");
                return Ok(false);
            }
        };

        self.store_session(refreshed.data.into_session()).await?;
        info!("access token refreshed");
        Ok(true)
    }
}

/// Serializes a request payload up front so a retry can reuse it.
fn to_value<T: Serialize>(value: &T) -> ApiResult<Value> {
    serde_json::to_value(value)
        .map_err(|err| ApiError::Decode(format!("failed to serialize request: {err}")))
}

/// Pulls the human-readable message out of an error body.
///
/// The backend writes `{ statusCode, message, ... }`; a few older routes
/// still use `msg`. Anything unparseable falls back to the raw body or
/// the status line.
fn extract_message(body: &str, status: StatusCode) -> String {
    if let Ok(value) = serde_json::from_str::<Value>(body) {
        for key in ["message", "msg"] {
            if let Some(text) = value.get(key).and_then(Value::as_str) {
                return text.to_string();
            }
        }
    }

    if body.is_empty() {
        status
            .canonical_reason()
            .unwrap_or("request failed")
            .to_string()
    } else {
        body.to_string()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use khata_core::types::{Role, User};
    use khata_session::MemoryStore;
    use serde::Deserialize;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[derive(Debug, PartialEq, Deserialize)]
    struct TestResponse {
        message: String,
    }

    fn test_session(access: &str, refresh: &str) -> Session {
        Session::new(
            User {
                id: "u1".into(),
                user_name: "kabir".into(),
                email: "kabir@example.com".into(),
                full_name: "Kabir Hossain".into(),
                phone: "01712345678".into(),
                role: Role::Employee,
                employee_code: "EMP-007".into(),
            },
            access.into(),
            refresh.into(),
        )
    }

    fn signed_in_client(base_url: &str, session: Session) -> (ApiClient, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::new());
        store.save(&session).unwrap();
        let client = ApiClient::new(ApiConfig::new(base_url), store.clone()).unwrap();
        (client, store)
    }

    fn refresh_body(access: &str, refresh: &str) -> serde_json::Value {
        serde_json::json!({
            "statusCode": 200,
            "message": "refreshed",
            "data": {
                "user": {
                    "_id": "u1",
                    "userName": "kabir",
                    "email": "kabir@example.com",
                    "fullName": "Kabir Hossain",
                    "phone": "01712345678",
                    "role": "employee",
                    "employeeCode": "EMP-007"
                },
                "accessToken": access,
                "refreshToken": refresh
            }
        })
    }

    #[tokio::test]
    async fn test_bearer_token_attached_from_store() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/ping"))
            .and(header("Authorization", "Bearer access-1"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"message": "pong"})),
            )
            .mount(&server)
            .await;

        let (client, _) = signed_in_client(&server.uri(), test_session("access-1", "refresh-1"));
        let result: TestResponse = client.get("/ping").await.unwrap();
        assert_eq!(result.message, "pong");
    }

    #[tokio::test]
    async fn test_client_error_carries_backend_message() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/missing"))
            .respond_with(ResponseTemplate::new(404).set_body_json(
                serde_json::json!({"statusCode": 404, "message": "customer not found"}),
            ))
            .mount(&server)
            .await;

        let (client, _) = signed_in_client(&server.uri(), test_session("a", "r"));
        let err = client.get::<TestResponse>("/missing").await.unwrap_err();
        match err {
            ApiError::Client { status, message } => {
                assert_eq!(status, 404);
                assert_eq!(message, "customer not found");
            }
            other => panic!("expected Client error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_legacy_msg_field_is_extracted() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/legacy"))
            .respond_with(
                ResponseTemplate::new(400).set_body_json(serde_json::json!({"msg": "bad input"})),
            )
            .mount(&server)
            .await;

        let (client, _) = signed_in_client(&server.uri(), test_session("a", "r"));
        let err = client.get::<TestResponse>("/legacy").await.unwrap_err();
        assert!(matches!(err, ApiError::Client { message, .. } if message == "bad input"));
    }

    #[tokio::test]
    async fn test_server_and_rate_limit_classification() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/boom"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/limited"))
            .respond_with(ResponseTemplate::new(429))
            .mount(&server)
            .await;

        let (client, _) = signed_in_client(&server.uri(), test_session("a", "r"));
        assert!(matches!(
            client.get::<TestResponse>("/boom").await.unwrap_err(),
            ApiError::Server { status: 500, .. }
        ));
        assert!(matches!(
            client.get::<TestResponse>("/limited").await.unwrap_err(),
            ApiError::RateLimit(_)
        ));
    }

    #[tokio::test]
    async fn test_expired_token_is_refreshed_and_request_retried() {
        let server = MockServer::start().await;

        // Old token bounces exactly once
        Mock::given(method("GET"))
            .and(path("/sales"))
            .and(header("Authorization", "Bearer stale"))
            .respond_with(ResponseTemplate::new(401))
            .up_to_n_times(1)
            .mount(&server)
            .await;

        // The refresh exchange hands out a new pair
        Mock::given(method("POST"))
            .and(path(endpoints::REFRESH))
            .and(body_partial_json(serde_json::json!({"refreshToken": "refresh-1"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(refresh_body("fresh", "refresh-2")))
            .mount(&server)
            .await;

        // Retry with the fresh token succeeds
        Mock::given(method("GET"))
            .and(path("/sales"))
            .and(header("Authorization", "Bearer fresh"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"message": "ok"})),
            )
            .mount(&server)
            .await;

        let (client, store) = signed_in_client(&server.uri(), test_session("stale", "refresh-1"));
        let result: TestResponse = client.get("/sales").await.unwrap();
        assert_eq!(result.message, "ok");

        // The renewed pair was persisted for the next launch
        let persisted = store.load().unwrap().unwrap();
        assert_eq!(persisted.access_token, "fresh");
        assert_eq!(persisted.refresh_token, "refresh-2");
    }

    #[tokio::test]
    async fn test_failed_refresh_surfaces_auth_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/sales"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path(endpoints::REFRESH))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let (client, store) = signed_in_client(&server.uri(), test_session("stale", "dead"));
        let err = client.get::<TestResponse>("/sales").await.unwrap_err();
        assert!(err.is_auth());

        // The session is left for the host to deal with; we never
        // sign the user out behind their back
        assert!(store.load().unwrap().is_some());
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_a_network_error() {
        // Nothing listens on the discard port
        let store = Arc::new(MemoryStore::new());
        let client = ApiClient::new(ApiConfig::new("http://127.0.0.1:9"), store).unwrap();

        let err = client.get::<TestResponse>("/ping").await.unwrap_err();
        assert!(matches!(err, ApiError::Network(_)));
    }

    #[tokio::test]
    async fn test_malformed_body_is_a_decode_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/weird"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let (client, _) = signed_in_client(&server.uri(), test_session("a", "r"));
        let err = client.get::<TestResponse>("/weird").await.unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }
}
