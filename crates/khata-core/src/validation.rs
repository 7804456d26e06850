//! # Validation Module
//!
//! Field validation for the customer and sale entry forms.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Host UI                                                      │
//! │  ├── Required-field marks, keyboard types                              │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE (before anything leaves the device)              │
//! │  ├── Field rules (length, digits, ranges)                              │
//! │  └── Payment admissibility lives on SaleQuote                          │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Remote backend                                               │
//! │  └── Authoritative constraints                                         │
//! │                                                                         │
//! │  Defense in depth: multiple layers catch different errors              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use khata_core::validation::{validate_customer_name, validate_phone};
//!
//! validate_customer_name("Rahim Traders").unwrap();
//! validate_phone("01712345678").unwrap();
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::quantity::Quantity;
use crate::{MAX_NAME_LEN, MAX_SALE_WEIGHT_KG, PHONE_MAX_DIGITS, PHONE_MIN_DIGITS};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a customer name.
///
/// ## Rules
/// - Must not be empty
/// - Must be at most 200 characters
pub fn validate_customer_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(())
}

/// Validates a phone number.
///
/// ## Rules
/// - Must not be empty
/// - Must be 10 to 15 ASCII digits, nothing else
///
/// ## Example
/// ```rust
/// use khata_core::validation::validate_phone;
///
/// assert!(validate_phone("01712345678").is_ok());
/// assert!(validate_phone("017-1234").is_err());
/// ```
pub fn validate_phone(phone: &str) -> ValidationResult<()> {
    let phone = phone.trim();

    if phone.is_empty() {
        return Err(ValidationError::Required {
            field: "phone".to_string(),
        });
    }

    let digits_only = phone.bytes().all(|b| b.is_ascii_digit());
    if !digits_only || phone.len() < PHONE_MIN_DIGITS || phone.len() > PHONE_MAX_DIGITS {
        return Err(ValidationError::InvalidFormat {
            field: "phone".to_string(),
            reason: "must be 10 to 15 digits".to_string(),
        });
    }

    Ok(())
}

/// Validates a product name (e.g. "broiler", "sonali").
///
/// ## Rules
/// - Must not be empty
/// - Must be at most 200 characters
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "productName".to_string(),
        });
    }

    if name.chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "productName".to_string(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a sold weight.
///
/// ## Rules
/// - Must be positive (a sale of 0 kg is a typo, not a sale)
/// - Must not exceed MAX_SALE_WEIGHT_KG
pub fn validate_quantity(quantity: Quantity) -> ValidationResult<()> {
    if !quantity.is_positive() {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if quantity.kg() > MAX_SALE_WEIGHT_KG {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_SALE_WEIGHT_KG,
        });
    }

    Ok(())
}

/// Validates a per-kg rate.
///
/// ## Rules
/// - Must be positive; a zero rate would zero the whole ledger row
pub fn validate_rate(rate: Money) -> ValidationResult<()> {
    if !rate.is_positive() {
        return Err(ValidationError::MustBePositive {
            field: "unitPrice".to_string(),
        });
    }

    Ok(())
}

/// Validates a payment amount.
///
/// ## Rules
/// - Must be non-negative
/// - Zero is allowed (an unpaid sale is still a sale)
pub fn validate_payment_amount(amount: Money) -> ValidationResult<()> {
    if amount.is_negative() {
        return Err(ValidationError::OutOfRange {
            field: "paidAmount".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_customer_name() {
        assert!(validate_customer_name("Rahim Traders").is_ok());
        assert!(validate_customer_name("রহিম").is_ok());

        assert!(validate_customer_name("").is_err());
        assert!(validate_customer_name("   ").is_err());
        assert!(validate_customer_name(&"ক".repeat(300)).is_err());
    }

    #[test]
    fn test_validate_phone() {
        assert!(validate_phone("01712345678").is_ok());
        assert!(validate_phone("8801712345678").is_ok());

        assert!(validate_phone("").is_err());
        assert!(validate_phone("12345").is_err()); // too short
        assert!(validate_phone("1234567890123456").is_err()); // too long
        assert!(validate_phone("017-1234567").is_err()); // non-digit
    }

    #[test]
    fn test_validate_product_name() {
        assert!(validate_product_name("broiler").is_ok());
        assert!(validate_product_name("").is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(Quantity::from_milli(500)).is_ok());
        assert!(validate_quantity(Quantity::from_kg(300)).is_ok());

        assert!(validate_quantity(Quantity::zero()).is_err());
        assert!(validate_quantity(Quantity::from_kg(20_000)).is_err());
    }

    #[test]
    fn test_validate_rate() {
        assert!(validate_rate(Money::from_taka(14)).is_ok());
        assert!(validate_rate(Money::zero()).is_err());
    }

    #[test]
    fn test_validate_payment_amount() {
        assert!(validate_payment_amount(Money::zero()).is_ok());
        assert!(validate_payment_amount(Money::from_taka(4000)).is_ok());
        assert!(validate_payment_amount(Money::from_poysha(-1)).is_err());
    }
}
