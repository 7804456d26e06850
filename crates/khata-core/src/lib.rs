//! # khata-core: Pure Business Logic for Khata
//!
//! This crate is the **heart** of Khata, the sales ledger for a broiler
//! meat distribution business. It contains all business logic as pure
//! functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Khata Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                      Host UI (out of scope)                     │   │
//! │  │    Sale Entry ──► Customer Book ──► Day Reports                 │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                khata-api / khata-session                        │   │
//! │  │    REST client, token refresh, persisted session                │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                ★ khata-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   sale    │  │ validation│  │   │
//! │  │   │  Customer │  │   Money   │  │ SaleQuote │  │   rules   │  │   │
//! │  │   │SaleRecord │  │ Quantity  │  │  Outcome  │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • NO PERSISTENCE • PURE FUNCTIONS        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type with integer poysha arithmetic (no floating point!)
//! - [`quantity`] - Weight type in integer milli-kg
//! - [`sale`] - The sale ledger calculator and payment admissibility rule
//! - [`types`] - Domain records (Customer, SaleRecord, reports)
//! - [`validation`] - Field validation
//! - [`format`] - Bengali digit rendering
//! - [`error`] - Typed validation errors
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Network, file system, and persistence access is FORBIDDEN here
//! 3. **Integer Amounts**: Poysha and milli-kg i64 everywhere, floats never
//! 4. **Garbage In, Zero Out**: malformed numeric form input normalizes to
//!    zero at a documented boundary; only admissibility rules produce errors
//!
//! ## Example Usage
//!
//! ```rust
//! use khata_core::sale::{SaleForm, SaleStatus};
//!
//! // A day-report row as typed into the entry form
//! let form = SaleForm {
//!     unit_price: "14".into(),
//!     quantity: "300.5".into(),
//!     paid_amount: "4000".into(),
//!     previous_due: "0".into(),
//!     due_limit: "".into(),
//! };
//!
//! let quote = form.normalize();
//! let outcome = quote.outcome();
//!
//! assert_eq!(outcome.total_price.poysha(), 420_700); // ৳4207.00
//! assert_eq!(outcome.due_amount.poysha(), 20_700);   // ৳207.00
//! assert_eq!(outcome.status, SaleStatus::Partial);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod format;
pub mod money;
pub mod quantity;
pub mod sale;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use khata_core::Money` instead of
// `use khata_core::money::Money`

pub use error::ValidationError;
pub use money::Money;
pub use quantity::Quantity;
pub use sale::{SaleForm, SaleOutcome, SaleQuote, SaleStatus};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum length of customer and product names.
pub const MAX_NAME_LEN: usize = 200;

/// Phone numbers must be 10 to 15 digits.
pub const PHONE_MIN_DIGITS: usize = 10;
pub const PHONE_MAX_DIGITS: usize = 15;

/// Maximum weight accepted on a single sale, in whole kg.
///
/// ## Business Reason
/// A distribution truck tops out around two tonnes; anything past this
/// is a mistyped weight (3005 instead of 300.5), not a real sale.
pub const MAX_SALE_WEIGHT_KG: i64 = 10_000;
