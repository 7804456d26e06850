//! # Error Types
//!
//! Validation errors for khata-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  khata-core errors (this file)                                         │
//! │  └── ValidationError  - Field and admissibility failures               │
//! │                                                                         │
//! │  khata-session errors (separate crate)                                 │
//! │  └── SessionError     - Persisted-session I/O failures                 │
//! │                                                                         │
//! │  khata-api errors (separate crate)                                     │
//! │  └── ApiError         - Transport and backend failures                 │
//! │                                                                         │
//! │  Flow: ValidationError → ApiError → host UI field error                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field name, amounts)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing field message
//!
//! Malformed numeric input is NOT an error anywhere in this crate: it is
//! clamped to zero at the parse boundary. The only admissibility rule
//! that can reject a sale is [`ValidationError::OverpaymentWithoutPriorDue`].

use thiserror::Error;

use crate::money::Money;

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when user input doesn't meet requirements.
/// They surface on the host as field-level messages, never as crashes.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g., phone number with letters).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// A payment larger than the sale total was offered by a customer
    /// with no carried-forward due to absorb the surplus.
    ///
    /// ## When This Occurs
    /// - `previous_due == 0` and `paid_amount > total_price`
    ///
    /// With a prior due on the book the surplus is a credit toward that
    /// balance and no error is raised.
    #[error("payment {paid} exceeds the sale total {total} and no prior due exists to absorb it")]
    OverpaymentWithoutPriorDue { paid: Money, total: Money },
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ValidationError::Required {
            field: "phone".to_string(),
        };
        assert_eq!(err.to_string(), "phone is required");

        let err = ValidationError::TooLong {
            field: "name".to_string(),
            max: 200,
        };
        assert_eq!(err.to_string(), "name must be at most 200 characters");
    }

    #[test]
    fn test_overpayment_message_names_amounts() {
        let err = ValidationError::OverpaymentWithoutPriorDue {
            paid: Money::from_taka(150),
            total: Money::from_taka(100),
        };
        assert_eq!(
            err.to_string(),
            "payment ৳150.00 exceeds the sale total ৳100.00 and no prior due exists to absorb it"
        );
    }
}
