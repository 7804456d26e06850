//! # khata-api: REST Client for the Khata Backend
//!
//! All network traffic between the app and the remote sales backend
//! lives in this crate: the HTTP client, the auth flows, and a typed
//! repository per backend collection.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          khata-api                                      │
//! │                                                                         │
//! │   ┌───────────┐   ┌────────────────────────────────────────────────┐   │
//! │   │  AuthApi  │   │              Repositories                      │   │
//! │   │  login    │   │  CustomerRepository  SaleRepository  Reports   │   │
//! │   │  logout   │   │        (sales run through khata-core)          │   │
//! │   └─────┬─────┘   └───────────────────────┬────────────────────────┘   │
//! │         │                                 │                             │
//! │   ┌─────▼─────────────────────────────────▼────────────────────────┐   │
//! │   │                        ApiClient                               │   │
//! │   │   bearer injection • refresh-on-401 • error classification     │   │
//! │   └─────────────────────────────┬──────────────────────────────────┘   │
//! │                                 │                                       │
//! │                        remote REST backend                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use khata_api::auth::AuthApi;
//! use khata_api::client::ApiClient;
//! use khata_api::config::ApiConfig;
//! use khata_api::types::LoginRequest;
//! use khata_session::FileStore;
//!
//! # async fn run() -> Result<(), khata_api::error::ApiError> {
//! let store = Arc::new(FileStore::in_dir("/data/khata"));
//! let client = Arc::new(ApiClient::new(ApiConfig::from_env(), store)?);
//!
//! let auth = AuthApi::new(client.clone());
//! auth.login(&LoginRequest {
//!     email: "kabir@example.com".into(),
//!     password: "...".into(),
//! })
//! .await?;
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod client;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod repository;
pub mod types;

pub use auth::AuthApi;
pub use client::ApiClient;
pub use config::ApiConfig;
pub use error::{ApiError, ApiResult};
pub use repository::{CustomerRepository, NewSale, ReportRepository, SaleRepository};
