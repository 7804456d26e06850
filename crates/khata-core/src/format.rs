//! # Display Formatting
//!
//! Bengali-digit rendering for amounts and counts.
//!
//! The entire UI of this product is in Bengali; every number a user sees
//! is printed with Bengali digits (০–৯). The mapping is character-wise:
//! ASCII digits convert, everything else (currency sign, decimal point,
//! letters) passes through untouched.

use crate::money::Money;

/// Bengali digits indexed by their ASCII value.
const BANGLA_DIGITS: [char; 10] = ['০', '১', '২', '৩', '৪', '৫', '৬', '৭', '৮', '৯'];

/// Converts every ASCII digit in `input` to its Bengali counterpart.
///
/// ## Example
/// ```rust
/// use khata_core::format::to_bangla_digits;
///
/// assert_eq!(to_bangla_digits("4207.50"), "৪২০৭.৫০");
/// assert_eq!(to_bangla_digits("rate 14"), "rate ১৪");
/// ```
pub fn to_bangla_digits(input: &str) -> String {
    input
        .chars()
        .map(|c| match c {
            '0'..='9' => BANGLA_DIGITS[c as usize - '0' as usize],
            other => other,
        })
        .collect()
}

/// Formats an amount for display: taka sign, two decimals, Bengali digits.
///
/// ## Example
/// ```rust
/// use khata_core::format::format_taka_bn;
/// use khata_core::money::Money;
///
/// assert_eq!(format_taka_bn(Money::from_taka(4207)), "৳৪২০৭.০০");
/// ```
pub fn format_taka_bn(amount: Money) -> String {
    to_bangla_digits(&amount.to_string())
}
