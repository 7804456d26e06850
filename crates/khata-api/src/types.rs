//! # Wire DTOs
//!
//! Request payloads, list-query parameters, and the response envelope.
//!
//! Everything here is `camelCase` on the wire (the backend is a JSON
//! API shared with a JavaScript frontend), amounts are integer poysha,
//! and weights are integer milli-kg, per the conventions in
//! [`khata_core::types`].

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use khata_core::sale::SaleStatus;
use khata_core::types::User;
use khata_session::Session;

// =============================================================================
// Response Envelope
// =============================================================================

/// The backend's standard response wrapper.
///
/// Every route except [`crate::endpoints::REPORTS`] wraps its result:
/// `{ "statusCode": 200, "message": "ok", "data": ... }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    pub status_code: i64,
    pub message: String,
    pub data: T,
}

// =============================================================================
// Auth
// =============================================================================

/// Credentials for [`crate::auth::AuthApi::login`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// New-account request for [`crate::auth::AuthApi::signup`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub user_name: String,
    pub email: String,
    pub full_name: String,
    pub phone: String,
    pub password: String,
}

/// What the backend returns from login, signup, and refresh.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthPayload {
    pub user: User,
    pub access_token: String,
    pub refresh_token: String,
}

impl AuthPayload {
    /// Converts the wire payload into a session value.
    pub fn into_session(self) -> Session {
        Session::new(self.user, self.access_token, self.refresh_token)
    }
}

/// Body of the token-refresh request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshRequest {
    pub refresh_token: String,
}

// =============================================================================
// Pagination
// =============================================================================

/// One page of a listed collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub limit: u32,
    /// Total matching records across all pages.
    pub total: u64,
}

// =============================================================================
// Customers
// =============================================================================

/// Payload for creating a customer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerPayload {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    pub customer_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_product_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_uom: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_price_poysha: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_due_poysha: Option<i64>,
    /// Due ceiling; 0 means no limit. Required by the backend.
    pub due_limit_poysha: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

/// Partial update for an existing customer; unset fields are untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_product_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_uom: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_price_poysha: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_due_poysha: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_limit_poysha: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

/// Filters for the customer list.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    /// Only customers carrying at least this much due.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_due_poysha: Option<i64>,
}

// =============================================================================
// Sales
// =============================================================================

/// The wire form of a submitted sale.
///
/// The amount fields are the calculator's outcome frozen at submission;
/// [`crate::repository::SaleRepository`] fills them, callers never do.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalePayload {
    pub customer_id: String,
    pub employee_id: String,
    pub product_name: String,
    pub uom: String,
    pub quantity_milli: i64,
    pub unit_price_poysha: i64,
    pub paid_poysha: i64,
    pub total_poysha: i64,
    pub due_poysha: i64,
    pub status: SaleStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Filters for the sale list.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<SaleStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<String>,
}

/// Date range for the sales summary. Both ends optional.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
}

// =============================================================================
// Unit Tests
// =============================================================================
