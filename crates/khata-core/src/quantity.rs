//! # Quantity Module
//!
//! Fixed-point weight type for sold broiler meat.
//!
//! Scale weights read in fractions of a kilogram (300.5 kg is an
//! ordinary day total), so `Quantity` keeps three fractional digits as
//! integer milli-kilograms. The same no-floats rule as [`crate::money`]
//! applies: a weight is an exact integer from form input to ledger row.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::money::parse_scaled;

// =============================================================================
// Quantity Type
// =============================================================================

/// A weight in milli-kilograms (1/1000 kg).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Quantity(i64);

impl Quantity {
    /// Creates a quantity from milli-kilograms.
    ///
    /// ## Example
    /// ```rust
    /// use khata_core::quantity::Quantity;
    ///
    /// let weight = Quantity::from_milli(300_500); // 300.5 kg
    /// assert_eq!(weight.milli(), 300_500);
    /// ```
    #[inline]
    pub const fn from_milli(milli: i64) -> Self {
        Quantity(milli)
    }

    /// Creates a quantity from whole kilograms.
    #[inline]
    pub const fn from_kg(kg: i64) -> Self {
        Quantity(kg * 1000)
    }

    /// Parses user-entered text into a Quantity, coercing garbage to zero.
    ///
    /// Same normalization contract as [`crate::money::Money::parse_lenient`]:
    /// malformed, missing, or negative input becomes 0 kg, never an error.
    ///
    /// ## Example
    /// ```rust
    /// use khata_core::quantity::Quantity;
    ///
    /// assert_eq!(Quantity::parse_lenient("300.5"), Quantity::from_milli(300_500));
    /// assert_eq!(Quantity::parse_lenient("oops"), Quantity::zero());
    /// ```
    pub fn parse_lenient(input: &str) -> Self {
        Quantity(parse_scaled(input, 3).unwrap_or(0))
    }

    /// Returns the weight in milli-kilograms.
    #[inline]
    pub const fn milli(&self) -> i64 {
        self.0
    }

    /// Returns the whole-kilogram portion.
    #[inline]
    pub const fn kg(&self) -> i64 {
        self.0 / 1000
    }

    /// Zero weight.
    #[inline]
    pub const fn zero() -> Self {
        Quantity(0)
    }

    /// Checks if the weight is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the weight is positive.
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Quantity::zero()
    }
}

/// Display prints kilograms with the insignificant zeros trimmed:
/// `300.5`, not `300.500`.
impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let frac = (self.0 % 1000).abs();
        if frac == 0 {
            write!(f, "{}", self.kg())
        } else {
            let text = format!("{:03}", frac);
            write!(f, "{}.{}", self.kg(), text.trim_end_matches('0'))
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_milli() {
        let weight = Quantity::from_milli(300_500);
        assert_eq!(weight.milli(), 300_500);
        assert_eq!(weight.kg(), 300);
    }

    #[test]
    fn test_from_kg() {
        assert_eq!(Quantity::from_kg(12).milli(), 12_000);
    }

    #[test]
    fn test_parse_lenient_valid() {
        assert_eq!(Quantity::parse_lenient("300.5"), Quantity::from_milli(300_500));
        assert_eq!(Quantity::parse_lenient("2"), Quantity::from_kg(2));
        assert_eq!(Quantity::parse_lenient("0.125"), Quantity::from_milli(125));
    }

    #[test]
    fn test_parse_lenient_rounds_fourth_digit() {
        assert_eq!(Quantity::parse_lenient("1.2345"), Quantity::from_milli(1234));
        assert_eq!(Quantity::parse_lenient("1.2335"), Quantity::from_milli(1234));
    }

    #[test]
    fn test_parse_lenient_garbage_is_zero() {
        assert_eq!(Quantity::parse_lenient(""), Quantity::zero());
        assert_eq!(Quantity::parse_lenient("ten"), Quantity::zero());
        assert_eq!(Quantity::parse_lenient("-3"), Quantity::zero());
    }

    #[test]
    fn test_display_trims_zeros() {
        assert_eq!(Quantity::from_milli(300_500).to_string(), "300.5");
        assert_eq!(Quantity::from_milli(12_000).to_string(), "12");
        assert_eq!(Quantity::from_milli(125).to_string(), "0.125");
        assert_eq!(Quantity::from_milli(1_250).to_string(), "1.25");
    }
}
