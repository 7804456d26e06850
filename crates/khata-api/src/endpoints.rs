//! # Backend Endpoints
//!
//! Every backend route in one place. Paths are absolute and join onto
//! [`crate::config::ApiConfig::base_url`].

/// Sign in with email + password.
pub const LOGIN: &str = "/api/v1/users/auth/login";

/// Register a new employee account.
pub const REGISTER: &str = "/api/v1/users/auth/register";

/// Invalidate the current token pair server-side.
pub const LOGOUT: &str = "/api/v1/users/auth/logout";

/// Exchange a refresh token for a fresh access token.
pub const REFRESH: &str = "/api/v1/users/auth/refresh";

/// The signed-in user's own profile.
pub const PROFILE: &str = "/api/v1/users/me";

/// Customer collection; `/{id}` addresses one customer.
pub const CUSTOMERS: &str = "/api/v1/customers";

/// Sale collection; `/{id}` addresses one sale.
pub const SALES: &str = "/api/v1/sales";

/// Date-ranged sales totals.
pub const SALES_SUMMARY: &str = "/api/v1/sales/summary";

/// Customer day-reports. Returns a bare array, not the usual envelope.
pub const REPORTS: &str = "/api/v1/reports";
