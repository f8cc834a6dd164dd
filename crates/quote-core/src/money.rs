//! # Money Module
//!
//! Provides the `Money` type for handling Vietnamese đồng amounts safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    19_300_000 × 1.2 / 24 may land on 964_999.9999… instead of 965_000   │
//! │                                                                         │
//! │  OUR SOLUTION: Whole đồng + exact rational scaling                      │
//! │    19_300_000 × 12 / 240 = 965_000 exactly (i128 intermediate)          │
//! │    Rounding happens once, explicitly, half away from zero               │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! VND has no minor unit in practice, so one `Money` unit is one đồng.
//!
//! ## Usage
//! ```rust
//! use quote_core::money::Money;
//!
//! let hardware = Money::from_dong(6_500_000);
//! let install = Money::from_dong(1_600_000) * 3;
//! assert_eq!((hardware + install).dong(), 11_300_000);
//!
//! // 20% markup spread over 24 months
//! let monthly = Money::from_dong(19_300_000).scale_rounded(12, 240);
//! assert_eq!(monthly.dong(), 965_000);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in whole Vietnamese đồng.
///
/// ## Design Decisions
/// - **i64 (signed)**: negative inputs are accepted and simply propagate
/// - **Saturating arithmetic**: the calculation engine must be total, so
///   overflow clamps at the `i64` bounds instead of panicking
/// - **Newtype**: serializes as a bare integer, matching the form payload
///
/// ## Where Money is Used
/// ```text
/// CostComponents ──► compute_comparison ──► PurchaseOption / RentalOption
///                                               │
///                                               └──► MonthlyPayment.amount
///                                                    MonthlyPayment.cumulative_amount
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from whole đồng.
    ///
    /// ## Example
    /// ```rust
    /// use quote_core::money::Money;
    ///
    /// let price = Money::from_dong(6_500_000);
    /// assert_eq!(price.dong(), 6_500_000);
    /// ```
    #[inline]
    pub const fn from_dong(dong: i64) -> Self {
        Money(dong)
    }

    /// Returns the value in whole đồng.
    #[inline]
    pub const fn dong(&self) -> i64 {
        self.0
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

    /// Returns the absolute value (saturating for `i64::MIN`).
    #[inline]
    pub const fn abs(&self) -> Self {
        Money(self.0.saturating_abs())
    }

    /// Multiplies money by a count (stores, months).
    ///
    /// ## Example
    /// ```rust
    /// use quote_core::money::Money;
    ///
    /// let per_store = Money::from_dong(1_200_000);
    /// assert_eq!(per_store.multiply_quantity(3).dong(), 3_600_000);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0.saturating_mul(qty))
    }

    /// Scales the amount by `numerator / denominator`, rounding half away
    /// from zero.
    ///
    /// ## Rounding
    /// ```text
    /// ┌─────────────────────────────────────────────────────────────────────┐
    /// │  ROUND HALF AWAY FROM ZERO                                          │
    /// │                                                                     │
    /// │    2.4 → 2     2.5 → 3     2.6 → 3                                 │
    /// │   -2.4 → -2   -2.5 → -3   -2.6 → -3                                │
    /// │                                                                     │
    /// │  For the positive amounts a valid quote produces this is the same   │
    /// │  as "round half up".                                                │
    /// └─────────────────────────────────────────────────────────────────────┘
    /// ```
    ///
    /// The product is formed in `i128`, so no precision is lost before the
    /// single rounding step. A zero denominator yields zero.
    ///
    /// ## Example
    /// ```rust
    /// use quote_core::money::Money;
    ///
    /// assert_eq!(Money::from_dong(5).scale_rounded(1, 2).dong(), 3);
    /// assert_eq!(Money::from_dong(-5).scale_rounded(1, 2).dong(), -3);
    /// assert_eq!(Money::from_dong(7).scale_rounded(1, 2).dong(), 4);
    /// ```
    pub fn scale_rounded(&self, numerator: i64, denominator: i64) -> Money {
        if denominator == 0 {
            return Money::zero();
        }

        let n = self.0 as i128 * numerator as i128;
        let d = denominator as i128;
        let quotient = n / d;
        let remainder = n % d;

        let rounded = if remainder != 0 && 2 * remainder.abs() >= d.abs() {
            quotient + n.signum() * d.signum()
        } else {
            quotient
        };

        Money(rounded.clamp(i64::MIN as i128, i64::MAX as i128) as i64)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Debug-friendly rendering (`14300000 VND`).
///
/// ## Note
/// Use [`crate::format::format_currency`] for anything a customer sees.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} VND", self.0)
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0.saturating_sub(other.0))
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_sub(other.0);
    }
}

/// Multiplication by a count (stores, months).
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        self.multiply_quantity(qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_dong() {
        let money = Money::from_dong(14_300_000);
        assert_eq!(money.dong(), 14_300_000);
        assert!(money.is_positive());
    }

    #[test]
    fn test_serializes_as_bare_integer() {
        let json = serde_json::to_string(&Money::from_dong(965_000)).unwrap();
        assert_eq!(json, "965000");

        let back: Money = serde_json::from_str("2895000").unwrap();
        assert_eq!(back, Money::from_dong(2_895_000));
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_dong(1000);
        let b = Money::from_dong(500);

        assert_eq!((a + b).dong(), 1500);
        assert_eq!((a - b).dong(), 500);
        assert_eq!((a * 3).dong(), 3000);

        let mut c = a;
        c += b;
        c -= Money::from_dong(200);
        assert_eq!(c.dong(), 1300);
    }

    #[test]
    fn test_arithmetic_saturates() {
        let max = Money::from_dong(i64::MAX);
        assert_eq!((max + Money::from_dong(1)).dong(), i64::MAX);
        assert_eq!((max * 2).dong(), i64::MAX);
        assert_eq!((Money::from_dong(i64::MIN) - Money::from_dong(1)).dong(), i64::MIN);
    }

    #[test]
    fn test_sum() {
        let total: Money = [100, 200, 300].into_iter().map(Money::from_dong).sum();
        assert_eq!(total.dong(), 600);
    }

    #[test]
    fn test_scale_rounded_exact() {
        let base = Money::from_dong(19_300_000);
        assert_eq!(base.scale_rounded(12, 240).dong(), 965_000);
    }

    #[test]
    fn test_scale_rounded_half_away_from_zero() {
        // 10 / 20 = 0.5 → 1, 30 / 20 = 1.5 → 2, 50 / 20 = 2.5 → 3
        assert_eq!(Money::from_dong(10).scale_rounded(1, 20).dong(), 1);
        assert_eq!(Money::from_dong(30).scale_rounded(1, 20).dong(), 2);
        assert_eq!(Money::from_dong(50).scale_rounded(1, 20).dong(), 3);

        assert_eq!(Money::from_dong(-10).scale_rounded(1, 20).dong(), -1);
        assert_eq!(Money::from_dong(-50).scale_rounded(1, 20).dong(), -3);

        // Below half rounds toward zero
        assert_eq!(Money::from_dong(9).scale_rounded(1, 20).dong(), 0);
        assert_eq!(Money::from_dong(-9).scale_rounded(1, 20).dong(), 0);
    }

    #[test]
    fn test_scale_rounded_zero_denominator() {
        assert_eq!(Money::from_dong(100).scale_rounded(1, 0), Money::zero());
    }

    #[test]
    fn test_scale_rounded_large_values_do_not_overflow() {
        let big = Money::from_dong(i64::MAX);
        assert_eq!(big.scale_rounded(12, 240).dong(), 461_168_601_842_738_790);
        assert_eq!(big.scale_rounded(2, 1).dong(), i64::MAX);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_dong(965_000).to_string(), "965000 VND");
        assert_eq!(Money::from_dong(-5).to_string(), "-5 VND");
    }
}
