//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  A day of broiler sales is hundreds of rate × weight products.          │
//! │  Accumulate float error across them and the due column stops            │
//! │  matching the cash box.                                                 │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Poysha                                           │
//! │    ৳42.07 = 4207 poysha (i64)                                           │
//! │    Every amount in the system is an exact integer                       │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use khata_core::money::Money;
//!
//! // Create from poysha (preferred)
//! let rate = Money::from_poysha(1400); // ৳14.00 per kg
//!
//! // Arithmetic operations
//! let total = rate + Money::from_poysha(600); // ৳20.00
//!
//! // Form input goes through the lenient parser, never through floats
//! assert_eq!(Money::parse_lenient("14"), rate);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Sub};

use crate::quantity::Quantity;

// =============================================================================
// Lenient Fixed-Point Parsing
// =============================================================================

/// Parses a decimal string into an integer scaled by `10^scale`.
///
/// Returns `None` for anything that is not a plain non-negative decimal
/// number: empty input, signs, exponents, group separators, overflow.
/// Digits beyond `scale` round half-up.
///
/// This is the single normalization point between raw form text and the
/// fixed-point types; `Money` and `Quantity` both funnel through it.
pub(crate) fn parse_scaled(input: &str, scale: u32) -> Option<i64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }

    let (whole_part, frac_part) = match trimmed.split_once('.') {
        Some((whole, frac)) => (whole, frac),
        None => (trimmed, ""),
    };

    // "." alone is not a number
    if whole_part.is_empty() && frac_part.is_empty() {
        return None;
    }

    // Rejects signs, spaces, separators. Negative amounts are not a thing
    // on these forms; the caller clamps them to zero.
    if !whole_part.bytes().all(|b| b.is_ascii_digit())
        || !frac_part.bytes().all(|b| b.is_ascii_digit())
    {
        return None;
    }

    let factor = 10i64.checked_pow(scale)?;
    let whole: i64 = if whole_part.is_empty() {
        0
    } else {
        whole_part.parse().ok()?
    };

    // Take the first `scale` fractional digits, zero-padded.
    let mut frac: i64 = 0;
    for i in 0..scale as usize {
        let digit = frac_part
            .as_bytes()
            .get(i)
            .map(|b| i64::from(b - b'0'))
            .unwrap_or(0);
        frac = frac * 10 + digit;
    }

    // Round half-up on the first dropped digit. The carry may overflow
    // `frac` into the whole part, which the checked_add below absorbs.
    if let Some(b) = frac_part.as_bytes().get(scale as usize) {
        if *b - b'0' >= 5 {
            frac += 1;
        }
    }

    whole.checked_mul(factor)?.checked_add(frac)
}

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in poysha (1/100 taka).
///
/// ## Design Decisions
/// - **i64 (signed)**: subtraction must be expressible mid-calculation
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support for JSON serialization
///
/// Amounts that reach the ledger calculator are non-negative by
/// construction (`parse_lenient` clamps); negative values only appear as
/// transient differences inside arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from poysha (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use khata_core::money::Money;
    ///
    /// let rate = Money::from_poysha(1400); // ৳14.00
    /// assert_eq!(rate.poysha(), 1400);
    /// ```
    #[inline]
    pub const fn from_poysha(poysha: i64) -> Self {
        Money(poysha)
    }

    /// Creates a Money value from whole taka.
    #[inline]
    pub const fn from_taka(taka: i64) -> Self {
        Money(taka * 100)
    }

    /// Parses user-entered text into Money, coercing garbage to zero.
    ///
    /// This is the documented normalization boundary for numeric form
    /// fields: a missing, malformed, or negative amount becomes ৳0.00
    /// rather than an error, and re-input is the recovery path.
    ///
    /// ## Example
    /// ```rust
    /// use khata_core::money::Money;
    ///
    /// assert_eq!(Money::parse_lenient("4000"), Money::from_taka(4000));
    /// assert_eq!(Money::parse_lenient("14.5"), Money::from_poysha(1450));
    /// assert_eq!(Money::parse_lenient("abc"), Money::zero());
    /// assert_eq!(Money::parse_lenient("-5"), Money::zero());
    /// assert_eq!(Money::parse_lenient(""), Money::zero());
    /// ```
    pub fn parse_lenient(input: &str) -> Self {
        Money(parse_scaled(input, 2).unwrap_or(0))
    }

    /// Returns the value in poysha (smallest currency unit).
    #[inline]
    pub const fn poysha(&self) -> i64 {
        self.0
    }

    /// Returns the whole-taka portion.
    #[inline]
    pub const fn taka(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the poysha portion (always 0-99).
    #[inline]
    pub const fn poysha_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies a per-kg rate by a weight, rounding half-up to poysha.
    ///
    /// ## Implementation
    /// Weight carries three fractional digits (milli-kg), so the raw
    /// product is scaled by 1000. We divide back out with +500 rounding,
    /// through i128 to prevent overflow on large amounts.
    ///
    /// ## Example
    /// ```rust
    /// use khata_core::money::Money;
    /// use khata_core::quantity::Quantity;
    ///
    /// let rate = Money::from_taka(14);
    /// let weight = Quantity::parse_lenient("300.5");
    ///
    /// // 14.00 × 300.5 = ৳4207.00 exactly, every time
    /// assert_eq!(rate.mul_quantity(weight), Money::from_taka(4207));
    /// ```
    pub fn mul_quantity(&self, quantity: Quantity) -> Money {
        let product = self.0 as i128 * quantity.milli() as i128;
        Money::from_poysha(((product + 500) / 1000) as i64)
    }

    /// Subtracts, clamping the result at zero.
    ///
    /// The due column is defined as `max(total − paid, 0)`; an
    /// overpayment never shows as a negative due.
    ///
    /// ## Example
    /// ```rust
    /// use khata_core::money::Money;
    ///
    /// let total = Money::from_taka(200);
    /// let paid = Money::from_taka(250);
    /// assert_eq!(total.sub_or_zero(paid), Money::zero());
    /// ```
    #[inline]
    pub const fn sub_or_zero(&self, other: Money) -> Money {
        let diff = self.0 - other.0;
        if diff > 0 {
            Money(diff)
        } else {
            Money(0)
        }
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// ## Note
/// This is for debugging and logs. Use [`crate::format::format_taka_bn`]
/// for the Bengali-digit rendering shown to end users.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}৳{}.{:02}", sign, self.taka().abs(), self.poysha_part())
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
