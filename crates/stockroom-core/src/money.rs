//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  An inventory valued with floats drifts a little on every               │
//! │  price * quantity sum.                                                  │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    $0.50 is stored as 50. Totals are exact i64 sums.                    │
//! │    Decimal text is parsed to cents once, at the input boundary.         │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use stockroom_core::money::Money;
//!
//! // Create from cents (preferred)
//! let price = Money::from_cents(1099); // $10.99
//!
//! // Parse from user-entered decimal text
//! let parsed = Money::parse_decimal("10.99").unwrap();
//! assert_eq!(parsed, price);
//!
//! // Arithmetic operations
//! let line_total = price * 3;
//! assert_eq!(line_total.cents(), 3297);
//! ```

use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: Totals and differences stay closed under subtraction
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support, total ordering for price sorts
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use stockroom_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from major and minor units (dollars and cents).
    ///
    /// ## Example
    /// ```rust
    /// use stockroom_core::money::Money;
    ///
    /// let price = Money::from_major_minor(10, 99); // $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        let scaled = major.saturating_mul(100);
        if major < 0 {
            Money(scaled.saturating_sub(minor))
        } else {
            Money(scaled.saturating_add(minor))
        }
    }

    /// Parses user-entered decimal text (`"10"`, `"10.5"`, `"10.99"`)
    /// into a non-negative Money value.
    ///
    /// ## Rules
    /// - At most two fraction digits (`"10.999"` is rejected)
    /// - No sign: prices are non-negative at the input boundary
    /// - No currency symbols or grouping separators
    /// - The value must fit in i64 cents (absurdly large text is
    ///   rejected, not wrapped)
    ///
    /// ## Example
    /// ```rust
    /// use stockroom_core::money::Money;
    ///
    /// assert_eq!(Money::parse_decimal("0.50").unwrap().cents(), 50);
    /// assert_eq!(Money::parse_decimal("3").unwrap().cents(), 300);
    /// assert_eq!(Money::parse_decimal("2.5").unwrap().cents(), 250);
    /// assert!(Money::parse_decimal("-1").is_err());
    /// assert!(Money::parse_decimal("1.234").is_err());
    /// ```
    pub fn parse_decimal(input: &str) -> Result<Self, ValidationError> {
        let trimmed = input.trim();

        let invalid = || ValidationError::InvalidPrice {
            input: input.to_string(),
        };

        let (major_text, minor_text) = match trimmed.split_once('.') {
            Some((major, minor)) => (major, minor),
            None => (trimmed, ""),
        };

        if major_text.is_empty() && minor_text.is_empty() {
            return Err(invalid());
        }

        if !major_text.chars().all(|c| c.is_ascii_digit())
            || !minor_text.chars().all(|c| c.is_ascii_digit())
        {
            return Err(invalid());
        }

        if minor_text.len() > 2 {
            return Err(invalid());
        }

        let major: i64 = if major_text.is_empty() {
            0
        } else {
            major_text.parse().map_err(|_| invalid())?
        };

        // Bound so cents fit in i64 after scaling
        if major > (i64::MAX - 99) / 100 {
            return Err(invalid());
        }

        // "2.5" means 50 cents, not 5
        let minor: i64 = match minor_text.len() {
            0 => 0,
            1 => minor_text.parse::<i64>().map_err(|_| invalid())? * 10,
            _ => minor_text.parse().map_err(|_| invalid())?,
        };

        Ok(Money::from_major_minor(major, minor))
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
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

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }
}

/// Formats as `$D.CC` (sign first for negative values).
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

// Arithmetic saturates at the i64 range: inventory totals over
// extreme quantities clamp instead of wrapping or panicking.

/// Addition of two Money values (saturating).
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

/// Addition assignment (+=, saturating).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

/// Subtraction of two Money values (saturating).
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0.saturating_sub(other.0))
    }
}

/// Subtraction assignment (-=, saturating).
impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_sub(other.0);
    }
}

/// Multiplication by i64 (for quantity calculations, saturating).
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0.saturating_mul(qty))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.dollars(), 10);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_from_major_minor() {
        let money = Money::from_major_minor(10, 99);
        assert_eq!(money.cents(), 1099);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1099)), "$10.99");
        assert_eq!(format!("{}", Money::from_cents(500)), "$5.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        assert_eq!((a * 3).cents(), 3000);
    }

    #[test]
    fn test_parse_decimal_whole_and_fractional() {
        assert_eq!(Money::parse_decimal("10").unwrap().cents(), 1000);
        assert_eq!(Money::parse_decimal("10.99").unwrap().cents(), 1099);
        assert_eq!(Money::parse_decimal("0.50").unwrap().cents(), 50);
        assert_eq!(Money::parse_decimal(".50").unwrap().cents(), 50);
        assert_eq!(Money::parse_decimal("2.").unwrap().cents(), 200);
    }

    #[test]
    fn test_parse_decimal_single_fraction_digit_scales() {
        // "2.5" is two dollars fifty, not two dollars five
        assert_eq!(Money::parse_decimal("2.5").unwrap().cents(), 250);
    }

    #[test]
    fn test_parse_decimal_rejects_bad_input() {
        assert!(Money::parse_decimal("").is_err());
        assert!(Money::parse_decimal(".").is_err());
        assert!(Money::parse_decimal("-1").is_err());
        assert!(Money::parse_decimal("1.234").is_err());
        assert!(Money::parse_decimal("ten").is_err());
        assert!(Money::parse_decimal("$5").is_err());
    }

    #[test]
    fn test_parse_decimal_rejects_value_too_large_for_cents() {
        // i64::MAX dollars cannot be represented as i64 cents
        assert!(Money::parse_decimal("9223372036854775807").is_err());
        assert!(Money::parse_decimal("92233720368547758.07").is_err());
        // The largest representable dollar amount still parses
        assert_eq!(
            Money::parse_decimal("92233720368547757").unwrap().cents(),
            9_223_372_036_854_775_700
        );
    }

    #[test]
    fn test_arithmetic_saturates_instead_of_wrapping() {
        let max = Money::from_cents(i64::MAX);
        assert_eq!((max * 2).cents(), i64::MAX);
        assert_eq!((max + Money::from_cents(1)).cents(), i64::MAX);
        assert_eq!(
            (Money::from_cents(i64::MIN) - Money::from_cents(1)).cents(),
            i64::MIN
        );
        assert_eq!((Money::from_cents(100) * i64::MAX).cents(), i64::MAX);
    }

    #[test]
    fn test_inventory_value_sum_is_exact() {
        // 2.00 * 3 + 1.00 * 10 = 16.00 with no float drift
        let total = Money::from_cents(200) * 3 + Money::from_cents(100) * 10;
        assert_eq!(total.cents(), 1600);
        assert_eq!(total.to_string(), "$16.00");
    }
}
