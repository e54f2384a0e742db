//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In binary floating point:                                              │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    A bill is a sum of cent amounts; the only rounding in the whole      │
//! │    system happens where a percentage discount is taken, and it is       │
//! │    explicit (half-up to the nearest cent).                              │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use mesa_core::money::Money;
//!
//! // Create from cents (there is no from_float, on purpose)
//! let price = Money::from_cents(250); // $2.50
//!
//! let line = price * 2;               // $5.00
//! let discounted = line.discount(1000); // 10% off -> $4.50
//! assert_eq!(format!("{}", discounted), "$4.50");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents for USD).
///
/// ## Design Decisions
/// - **i64 (signed)**: negative values exist transiently (e.g. a shortfall
///   computed as `tendered - amount`), even though stored prices never go
///   below zero
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **Derives**: full serde support, total ordering for comparisons
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ```rust
    /// use mesa_core::money::Money;
    ///
    /// let price = Money::from_cents(1250); // $12.50
    /// assert_eq!(price.cents(), 1250);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn units(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion, always 0-99.
    #[inline]
    pub const fn subunits(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Zero money value.
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

    /// Applies a percentage discount and returns the discounted amount.
    ///
    /// The discount itself is rounded half-up to the nearest cent before it
    /// is subtracted, so the result is always a whole number of cents.
    ///
    /// ## Arguments
    /// * `bps` - Discount in basis points (1000 = 10%)
    ///
    /// ```rust
    /// use mesa_core::money::Money;
    ///
    /// let line = Money::from_cents(500);      // $5.00
    /// assert_eq!(line.discount(1000).cents(), 450); // 10% off
    /// ```
    pub fn discount(&self, bps: u32) -> Money {
        // i128 intermediate prevents overflow on large amounts
        let off = (self.0 as i128 * bps as i128 + 5_000) / 10_000;
        Money(self.0 - off as i64)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Renders as `$D.CC` with a leading sign for negative amounts.
///
/// This is the presentation format required on receipts: exactly two decimal
/// places behind a currency symbol.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}${}.{:02}", sign, self.units().abs(), self.subunits())
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by quantity.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
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
        assert_eq!(money.units(), 10);
        assert_eq!(money.subunits(), 99);
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

        let mut acc = Money::zero();
        acc += a;
        acc += b;
        assert_eq!(acc.cents(), 1500);
        acc -= b;
        assert_eq!(acc.cents(), 1000);
    }

    #[test]
    fn test_discount_exact() {
        // 2 x $2.50 at 10% off: no rounding involved
        let line = Money::from_cents(500);
        assert_eq!(line.discount(1000).cents(), 450);
    }

    #[test]
    fn test_discount_rounds_half_up() {
        // $1.05 at 10% -> discount 10.5 cents -> 11 cents off
        let line = Money::from_cents(105);
        assert_eq!(line.discount(1000).cents(), 94);
    }

    #[test]
    fn test_discount_zero_bps_is_identity() {
        let line = Money::from_cents(1234);
        assert_eq!(line.discount(0), line);
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_negative());

        assert!(Money::from_cents(-1).is_negative());
        assert_eq!(Money::default(), Money::zero());
    }
}
