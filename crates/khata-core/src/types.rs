//! # Domain Types
//!
//! Core domain records shared across the workspace.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Customer     │   │   SaleRecord    │   │ CustomerReport  │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │   │  id             │   │  id             │       │
//! │  │  phone          │   │  status         │   │  date           │       │
//! │  │  previous_due   │   │  total_poysha   │   │  today_sell     │       │
//! │  │  due_limit      │   │  due_poysha     │   │  due            │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Amount Fields
//! Every monetary wire field is integer poysha (`*_poysha: i64`) and
//! every weight is integer milli-kg (`*_milli: i64`), with typed
//! accessors returning [`Money`] / [`Quantity`]. The backend, the
//! calculations, and the persisted session all use the same integers;
//! only display formatting converts out.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::quantity::Quantity;
use crate::sale::SaleStatus;

// =============================================================================
// User & Role
// =============================================================================

/// Access role of a signed-in user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Employee,
}

/// A signed-in user of the app.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Backend-assigned identifier.
    #[serde(rename = "_id")]
    pub id: String,
    pub user_name: String,
    pub email: String,
    pub full_name: String,
    pub phone: String,
    pub role: Role,
    pub employee_code: String,
}

impl User {
    /// Whether this user may see admin-only reports.
    #[inline]
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

// =============================================================================
// Customer
// =============================================================================

/// A customer record with their carried-forward balance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    /// Backend-assigned identifier.
    #[serde(rename = "_id")]
    pub id: String,

    pub name: String,
    pub email: Option<String>,
    pub phone: String,
    pub address: Option<String>,

    /// Free-form classification ("hotel", "retail", ...). Backend-defined.
    pub customer_type: String,

    /// Prefills for the sale entry form.
    pub default_product_name: Option<String>,
    pub default_uom: Option<String>,
    pub default_price_poysha: Option<i64>,

    /// Carried-forward unpaid balance from prior sales, in poysha.
    pub previous_due_poysha: i64,

    /// Ceiling on the balance this customer may carry. 0 = no limit.
    pub due_limit_poysha: i64,

    /// Whether the customer is active (soft delete).
    pub is_active: bool,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Customer {
    /// Returns the carried-forward due as Money.
    #[inline]
    pub fn previous_due(&self) -> Money {
        Money::from_poysha(self.previous_due_poysha)
    }

    /// Returns the due ceiling as Money.
    #[inline]
    pub fn due_limit(&self) -> Money {
        Money::from_poysha(self.due_limit_poysha)
    }

    /// Returns the default per-kg rate, if one is configured.
    #[inline]
    pub fn default_price(&self) -> Option<Money> {
        self.default_price_poysha.map(Money::from_poysha)
    }
}

// =============================================================================
// Sale Record
// =============================================================================

/// A sale as stored by the backend.
///
/// The amounts are the calculator's outcome frozen at submission time;
/// listing screens read them back without recomputing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleRecord {
    /// Backend-assigned identifier.
    #[serde(rename = "_id")]
    pub id: String,

    pub customer_id: String,
    pub employee_id: String,

    pub product_name: String,
    /// Unit of measure, normally "kg".
    pub uom: String,

    /// Weight sold, milli-kg.
    pub quantity_milli: i64,
    /// Rate per kg, poysha.
    pub unit_price_poysha: i64,
    /// Payment received, poysha.
    pub paid_poysha: i64,
    /// Frozen `unit_price × quantity`, poysha.
    pub total_poysha: i64,
    /// Frozen `max(total − paid, 0)`, poysha.
    pub due_poysha: i64,

    pub status: SaleStatus,
    pub notes: Option<String>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl SaleRecord {
    /// Returns the sold weight as a Quantity.
    #[inline]
    pub fn quantity(&self) -> Quantity {
        Quantity::from_milli(self.quantity_milli)
    }

    /// Returns the per-kg rate as Money.
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_poysha(self.unit_price_poysha)
    }

    /// Returns the received payment as Money.
    #[inline]
    pub fn paid(&self) -> Money {
        Money::from_poysha(self.paid_poysha)
    }

    /// Returns the frozen sale total as Money.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_poysha(self.total_poysha)
    }

    /// Returns the frozen due as Money.
    #[inline]
    pub fn due(&self) -> Money {
        Money::from_poysha(self.due_poysha)
    }
}

// =============================================================================
// Customer Report
// =============================================================================

/// One customer's row in the daily sales report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerReport {
    /// Backend-assigned identifier.
    #[serde(rename = "_id")]
    pub id: String,

    pub name: String,
    pub date: NaiveDate,
    pub address: String,
    pub phone: String,

    /// Day's rate per kg, poysha.
    pub rate_poysha: i64,
    /// Today's sale total, poysha.
    pub today_sell_poysha: i64,
    /// Today's payment, poysha.
    pub payment_poysha: i64,
    /// Outstanding due after today, poysha.
    pub due_poysha: i64,

    /// Number of birds sold.
    pub bird_count: i64,
    /// Total weight sold, milli-kg.
    pub weight_milli: i64,
}

impl CustomerReport {
    #[inline]
    pub fn rate(&self) -> Money {
        Money::from_poysha(self.rate_poysha)
    }

    #[inline]
    pub fn today_sell(&self) -> Money {
        Money::from_poysha(self.today_sell_poysha)
    }

    #[inline]
    pub fn payment(&self) -> Money {
        Money::from_poysha(self.payment_poysha)
    }

    #[inline]
    pub fn due(&self) -> Money {
        Money::from_poysha(self.due_poysha)
    }

    #[inline]
    pub fn weight(&self) -> Quantity {
        Quantity::from_milli(self.weight_milli)
    }
}

// =============================================================================
// Sales Summary
// =============================================================================

/// Aggregated totals over a date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesSummary {
    pub sale_count: i64,
    pub total_sold_poysha: i64,
    pub total_paid_poysha: i64,
    pub total_due_poysha: i64,
}

impl SalesSummary {
    #[inline]
    pub fn total_sold(&self) -> Money {
        Money::from_poysha(self.total_sold_poysha)
    }

    #[inline]
    pub fn total_paid(&self) -> Money {
        Money::from_poysha(self.total_paid_poysha)
    }

    #[inline]
    pub fn total_due(&self) -> Money {
        Money::from_poysha(self.total_due_poysha)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
