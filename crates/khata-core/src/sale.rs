//! # Sale Ledger Calculator
//!
//! The financial heart of Khata: given a day's rate, the weight sold,
//! the payment received, and the customer's carried-forward due, compute
//! the sale's total, due, and settlement status, and decide whether the
//! offered payment is admissible at all.
//!
//! ## Recomputation Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                  Sale Entry Recomputation Loop                          │
//! │                                                                         │
//! │  rate / weight / paid / previous due   (any field edited)              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SaleForm::normalize() ──► SaleQuote      (garbage-in-zero-out)        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  quote.outcome() ──► SaleOutcome { total, due, status }                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  quote.validate_payment() ──► Ok | field-level error                   │
//! │                                                                         │
//! │  A fresh quote per keystroke; nothing is retained between calls.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every function here is pure and deterministic: no I/O, no hidden
//! state, safe from any number of concurrent callers.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::money::Money;
use crate::quantity::Quantity;
use crate::validation::ValidationResult;

// =============================================================================
// Sale Status
// =============================================================================

/// Three-way settlement classification of a sale.
///
/// Derived solely from the amounts, never from workflow state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SaleStatus {
    /// Fully settled: something was paid and nothing remains due.
    Paid,
    /// Partially settled: something was paid, a due remains.
    Partial,
    /// Nothing was paid.
    Unpaid,
}

impl SaleStatus {
    /// Wire form used in query strings (`status=paid`).
    pub const fn as_str(&self) -> &'static str {
        match self {
            SaleStatus::Paid => "paid",
            SaleStatus::Partial => "partial",
            SaleStatus::Unpaid => "unpaid",
        }
    }
}

// =============================================================================
// Sale Quote
// =============================================================================

/// The inputs of one sale computation.
///
/// A quote is ephemeral: built fresh on every recomputation trigger and
/// discarded after producing its [`SaleOutcome`]. All amounts are
/// non-negative by construction when they arrive through
/// [`SaleForm::normalize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaleQuote {
    /// Rate per kilogram.
    pub unit_price: Money,
    /// Weight sold.
    pub quantity: Quantity,
    /// Payment received today. Zero when absent.
    pub paid_amount: Money,
    /// Customer's carried-forward unpaid balance. Zero without history.
    pub previous_due: Money,
    /// Ceiling on the balance the customer may carry. Zero = no limit.
    pub due_limit: Money,
}

impl SaleQuote {
    /// Creates a quote from already-normalized amounts.
    pub const fn new(
        unit_price: Money,
        quantity: Quantity,
        paid_amount: Money,
        previous_due: Money,
        due_limit: Money,
    ) -> Self {
        SaleQuote {
            unit_price,
            quantity,
            paid_amount,
            previous_due,
            due_limit,
        }
    }

    /// Computes the sale's financial summary.
    ///
    /// ## Computation
    /// 1. `total_price = unit_price × quantity` (half-up to poysha)
    /// 2. `due_amount = max(total_price − paid_amount, 0)`
    /// 3. `status` per [`SaleStatus`]
    ///
    /// Always returns a result; there are no error conditions. Repeated
    /// calls with identical inputs yield identical outputs.
    ///
    /// ## Example
    /// ```rust
    /// use khata_core::money::Money;
    /// use khata_core::quantity::Quantity;
    /// use khata_core::sale::{SaleQuote, SaleStatus};
    ///
    /// let quote = SaleQuote::new(
    ///     Money::from_taka(14),
    ///     Quantity::parse_lenient("300.5"),
    ///     Money::from_taka(4000),
    ///     Money::zero(),
    ///     Money::zero(),
    /// );
    /// let outcome = quote.outcome();
    /// assert_eq!(outcome.total_price, Money::from_taka(4207));
    /// assert_eq!(outcome.due_amount, Money::from_taka(207));
    /// assert_eq!(outcome.status, SaleStatus::Partial);
    /// ```
    pub fn outcome(&self) -> SaleOutcome {
        let total_price = self.unit_price.mul_quantity(self.quantity);
        let due_amount = total_price.sub_or_zero(self.paid_amount);

        let status = if due_amount.is_zero() && self.paid_amount.is_positive() {
            SaleStatus::Paid
        } else if self.paid_amount.is_zero() {
            SaleStatus::Unpaid
        } else {
            SaleStatus::Partial
        };

        SaleOutcome {
            total_price,
            due_amount,
            status,
        }
    }

    /// Checks that the offered payment is admissible.
    ///
    /// ## Rule
    /// A payment above the sale total is only meaningful when a prior
    /// due exists for the surplus to settle. Without one, the overage is
    /// rejected and the sale must not be submitted.
    ///
    /// With `previous_due > 0` the surplus is absorbed as a credit
    /// toward that balance and the check passes.
    pub fn validate_payment(&self) -> ValidationResult<()> {
        let total_price = self.unit_price.mul_quantity(self.quantity);

        if self.previous_due.is_zero() && self.paid_amount > total_price {
            return Err(ValidationError::OverpaymentWithoutPriorDue {
                paid: self.paid_amount,
                total: total_price,
            });
        }

        Ok(())
    }

    /// Advisory check: would this sale push the customer past their
    /// configured due ceiling?
    ///
    /// Never gates submission. `due_limit == 0` means no ceiling is
    /// configured and this always returns `false`. Hosts surface a
    /// warning from it; admissibility is [`Self::validate_payment`]'s
    /// job alone.
    pub fn exceeds_due_limit(&self) -> bool {
        if self.due_limit.is_zero() {
            return false;
        }
        self.previous_due + self.outcome().due_amount > self.due_limit
    }
}

// =============================================================================
// Sale Outcome
// =============================================================================

/// The derived financial summary of one sale.
///
/// Never persisted by this crate; the api layer copies it onto the wire
/// payload it submits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleOutcome {
    /// `unit_price × quantity`, rounded half-up to poysha.
    pub total_price: Money,
    /// `max(total_price − paid_amount, 0)`.
    pub due_amount: Money,
    /// Settlement classification.
    pub status: SaleStatus,
}

// =============================================================================
// Sale Form
// =============================================================================

/// Raw numeric fields as they leave the entry form.
///
/// This is the explicit normalization boundary between user input and
/// the calculator: every field is lenient-parsed, and anything that is
/// not a plain non-negative decimal becomes zero. The coercion is a
/// documented policy, not an accident of the type system.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleForm {
    /// Rate per kilogram as typed.
    pub unit_price: String,
    /// Weight in kilograms as typed.
    pub quantity: String,
    /// Today's payment as typed. Empty means no payment.
    pub paid_amount: String,
    /// Carried-forward due from the customer record.
    pub previous_due: String,
    /// Configured due ceiling from the customer record.
    pub due_limit: String,
}

impl SaleForm {
    /// Normalizes the raw fields into a [`SaleQuote`].
    ///
    /// ## Example
    /// ```rust
    /// use khata_core::money::Money;
    /// use khata_core::sale::SaleForm;
    ///
    /// let form = SaleForm {
    ///     unit_price: "14".into(),
    ///     quantity: "300.5".into(),
    ///     paid_amount: "".into(),        // untouched field → ৳0
    ///     previous_due: "oops".into(),   // malformed → ৳0
    ///     due_limit: "5000".into(),
    /// };
    /// let quote = form.normalize();
    /// assert_eq!(quote.paid_amount, Money::zero());
    /// assert_eq!(quote.previous_due, Money::zero());
    /// ```
    pub fn normalize(&self) -> SaleQuote {
        SaleQuote {
            unit_price: Money::parse_lenient(&self.unit_price),
            quantity: Quantity::parse_lenient(&self.quantity),
            paid_amount: Money::parse_lenient(&self.paid_amount),
            previous_due: Money::parse_lenient(&self.previous_due),
            due_limit: Money::parse_lenient(&self.due_limit),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn quote(rate: &str, qty: &str, paid: &str, prev_due: &str) -> SaleQuote {
        SaleForm {
            unit_price: rate.into(),
            quantity: qty.into(),
            paid_amount: paid.into(),
            previous_due: prev_due.into(),
            due_limit: String::new(),
        }
        .normalize()
    }

    #[test]
    fn test_partial_payment_day_report() {
        // 14/kg × 300.5 kg, ৳4000 paid, no history
        let outcome = quote("14", "300.5", "4000", "0").outcome();
        assert_eq!(outcome.total_price, Money::from_taka(4207));
        assert_eq!(outcome.due_amount, Money::from_taka(207));
        assert_eq!(outcome.status, SaleStatus::Partial);
    }

    #[test]
    fn test_exact_payment_is_paid() {
        let outcome = quote("100", "2", "200", "0").outcome();
        assert_eq!(outcome.total_price, Money::from_taka(200));
        assert_eq!(outcome.due_amount, Money::zero());
        assert_eq!(outcome.status, SaleStatus::Paid);
    }

    #[test]
    fn test_no_payment_is_unpaid() {
        let outcome = quote("50", "10", "0", "0").outcome();
        assert_eq!(outcome.total_price, Money::from_taka(500));
        assert_eq!(outcome.due_amount, Money::from_taka(500));
        assert_eq!(outcome.status, SaleStatus::Unpaid);
    }

    #[test]
    fn test_overpayment_without_prior_due_is_rejected() {
        let result = quote("100", "1", "150", "0").validate_payment();
        assert!(matches!(
            result,
            Err(ValidationError::OverpaymentWithoutPriorDue { .. })
        ));
    }

    #[test]
    fn test_overpayment_with_prior_due_is_absorbed() {
        // ৳50 on the book absorbs the ৳50 surplus; no error, no clamp
        let q = quote("100", "1", "150", "50");
        assert!(q.validate_payment().is_ok());
        let outcome = q.outcome();
        assert_eq!(outcome.due_amount, Money::zero());
        assert_eq!(outcome.status, SaleStatus::Paid);
    }

    #[test]
    fn test_due_never_negative() {
        let outcome = quote("10", "1", "9999", "1").outcome();
        assert_eq!(outcome.due_amount, Money::zero());
    }

    #[test]
    fn test_empty_fields_are_zero() {
        let outcome = quote("", "", "", "").outcome();
        assert_eq!(outcome.total_price, Money::zero());
        assert_eq!(outcome.due_amount, Money::zero());
        assert_eq!(outcome.status, SaleStatus::Unpaid);
    }

    #[test]
    fn test_malformed_input_never_errors() {
        let q = quote("12abc", "-4", "NaN", "১০");
        let outcome = q.outcome();
        assert_eq!(outcome.total_price, Money::zero());
        assert!(q.validate_payment().is_ok());
    }

    #[test]
    fn test_outcome_is_idempotent() {
        let q = quote("14", "300.5", "4000", "0");
        assert_eq!(q.outcome(), q.outcome());
    }

    #[test]
    fn test_status_is_pure_function_of_amounts() {
        // Same amounts, different due metadata: status unchanged
        let a = quote("100", "2", "50", "0").outcome();
        let b = quote("100", "2", "50", "700").outcome();
        assert_eq!(a.status, SaleStatus::Partial);
        assert_eq!(b.status, SaleStatus::Partial);
    }

    #[test]
    fn test_due_limit_is_advisory_only() {
        let form = SaleForm {
            unit_price: "100".into(),
            quantity: "10".into(),
            paid_amount: "0".into(),
            previous_due: "600".into(),
            due_limit: "800".into(),
        };
        let q = form.normalize();
        // 600 carried + 1000 new due > 800 ceiling → advisory fires
        assert!(q.exceeds_due_limit());
        // ...but admissibility is untouched
        assert!(q.validate_payment().is_ok());
    }

    #[test]
    fn test_zero_due_limit_means_no_ceiling() {
        let q = quote("100", "10", "0", "99999");
        assert!(!q.exceeds_due_limit());
    }

    #[test]
    fn test_status_wire_form() {
        assert_eq!(SaleStatus::Paid.as_str(), "paid");
        assert_eq!(SaleStatus::Partial.as_str(), "partial");
        assert_eq!(SaleStatus::Unpaid.as_str(), "unpaid");
    }
}
