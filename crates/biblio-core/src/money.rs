//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                         │
//! │                                                                     │
//! │  In floating point:                                                 │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                       │
//! │                                                                     │
//! │  After a few discount rounds a $49.99 book drifts off by cents.     │
//! │                                                                     │
//! │  OUR SOLUTION: Integer Cents                                        │
//! │    4999 cents, discounted 10% = 4499 cents, exactly                 │
//! │    Floats appear only at the JSON boundary, one conversion each way │
//! │                                                                     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use biblio_core::money::Money;
//!
//! // Create from cents (preferred)
//! let price = Money::from_cents(2999); // $29.99
//!
//! // Arithmetic operations
//! let two_copies = price * 2i64;                 // $59.98
//! let total = two_copies + Money::from_cents(1); // $59.99
//! # assert_eq!(total.cents(), 5999);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

use crate::types::DiscountRate;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents for USD).
///
/// ## Design Decisions
/// - **i64 (signed)**: intermediate results of subtraction may dip negative;
///   persisted prices are validated non-negative before they reach storage
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support for JSON serialization
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use biblio_core::money::Money;
    ///
    /// let price = Money::from_cents(4999); // Represents $49.99
    /// assert_eq!(price.cents(), 4999);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from a decimal amount as it appears on the wire.
    ///
    /// The catalog API accepts prices as JSON decimals with two fraction
    /// digits (`49.99`); this constructor rounds to the nearest cent.
    /// It exists for the serialization boundary only - internal code never
    /// round-trips through floats.
    ///
    /// ## Example
    /// ```rust
    /// use biblio_core::money::Money;
    ///
    /// assert_eq!(Money::from_decimal(49.99).cents(), 4999);
    /// assert_eq!(Money::from_decimal(0.0).cents(), 0);
    /// ```
    #[inline]
    pub fn from_decimal(amount: f64) -> Self {
        Money((amount * 100.0).round() as i64)
    }

    /// Returns the value as a decimal amount for JSON responses.
    ///
    /// ## Example
    /// ```rust
    /// use biblio_core::money::Money;
    ///
    /// let subtotal = Money::from_cents(5998);
    /// assert_eq!(subtotal.to_decimal(), 59.98);
    /// ```
    #[inline]
    pub fn to_decimal(&self) -> f64 {
        self.0 as f64 / 100.0
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

    /// Applies a percentage discount and returns the discounted price.
    ///
    /// ## Rounding
    /// The new price is `price × (1 - rate)`, rounded **half-up** to the
    /// cent. The rounding applies to the resulting price, not the discount
    /// amount - `$49.99` at 10% becomes exactly `$44.99`.
    ///
    /// ## Implementation
    /// Integer math throughout: `(cents × (10000 - bps) + 5000) / 10000`.
    /// The `+5000` term provides the half-up rounding (5000/10000 = 0.5),
    /// and i128 intermediates rule out overflow for any realistic price.
    ///
    /// ## Example
    /// ```rust
    /// use biblio_core::money::Money;
    /// use biblio_core::types::DiscountRate;
    ///
    /// let price = Money::from_cents(4999);          // $49.99
    /// let rate = DiscountRate::from_bps(1000);      // 10%
    /// assert_eq!(price.apply_discount(rate).cents(), 4499); // $44.99
    /// ```
    pub fn apply_discount(&self, rate: DiscountRate) -> Money {
        let remaining_bps = 10_000 - rate.bps() as i128;
        let new_cents = (self.0 as i128 * remaining_bps + 5_000) / 10_000;
        Money::from_cents(new_cents as i64)
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use biblio_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(2999); // $29.99
    /// let line_total = unit_price.multiply_quantity(2);
    /// assert_eq!(line_total.cents(), 5998); // $59.98
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// ## Note
/// This is for logs and debugging. API responses use [`Money::to_decimal`].
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

/// Subtraction assignment (-=).
impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by integer (for quantity calculations).
impl Mul<i32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i32) -> Self {
        Money(self.0 * qty as i64)
    }
}

/// Multiplication by i64.
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
        let money = Money::from_cents(4999);
        assert_eq!(money.cents(), 4999);
        assert_eq!(money.dollars(), 49);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_decimal_round_trip() {
        assert_eq!(Money::from_decimal(49.99).cents(), 4999);
        assert_eq!(Money::from_decimal(39.99).cents(), 3999);
        assert_eq!(Money::from_decimal(54.99).cents(), 5499);
        assert_eq!(Money::from_cents(5998).to_decimal(), 59.98);
        assert_eq!(Money::from_cents(0).to_decimal(), 0.0);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(4999)), "$49.99");
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
        let result: Money = a * 3;
        assert_eq!(result.cents(), 3000);
    }

    #[test]
    fn test_discount_examples_from_catalog() {
        // The two canonical storefront cases: $49.99 and $39.99 at 10% off.
        let rate = DiscountRate::from_bps(1000);
        assert_eq!(Money::from_cents(4999).apply_discount(rate).cents(), 4499);
        assert_eq!(Money::from_cents(3999).apply_discount(rate).cents(), 3599);
    }

    #[test]
    fn test_discount_half_up_rounding() {
        let rate = DiscountRate::from_bps(1000);
        // 5 cents * 0.9 = 4.5 cents, half-up => 5 cents.
        assert_eq!(Money::from_cents(5).apply_discount(rate).cents(), 5);
        // 15 cents * 0.9 = 13.5 cents, half-up => 14 cents.
        assert_eq!(Money::from_cents(15).apply_discount(rate).cents(), 14);
    }

    #[test]
    fn test_discount_zero_is_identity() {
        let rate = DiscountRate::from_bps(0);
        for cents in [0, 1, 99, 4999, 123_456_789] {
            assert_eq!(Money::from_cents(cents).apply_discount(rate).cents(), cents);
        }
    }

    #[test]
    fn test_discount_full_yields_zero() {
        let rate = DiscountRate::from_bps(10_000);
        assert_eq!(Money::from_cents(4999).apply_discount(rate).cents(), 0);
    }

    #[test]
    fn test_discount_never_negative_in_range() {
        // Any rate within [0%, 100%] keeps a non-negative price.
        for bps in [0, 1, 825, 5000, 9999, 10_000] {
            let rate = DiscountRate::from_bps(bps);
            assert!(!Money::from_cents(1).apply_discount(rate).is_negative());
        }
    }

    #[test]
    fn test_multiply_quantity() {
        let unit_price = Money::from_cents(2999);
        let line_total = unit_price.multiply_quantity(2);
        assert_eq!(line_total.cents(), 5998);
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_negative());

        let negative = Money::from_cents(-100);
        assert!(!negative.is_zero());
        assert!(negative.is_negative());
    }
}
