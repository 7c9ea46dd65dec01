//! # Money Module
//!
//! Provides the `Money` and `Percent` types for handling monetary values
//! and percentage rates safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  In many commerce systems:                                              │
//! │    10% of $10.99 = $1.0990000000001  → rounding drift per line!        │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Minor Units + Basis Points                       │
//! │    Money is i64 cents; Percent is u32 basis points (1000 = 10%)        │
//! │    Percentage application is a single rounded integer division         │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use merx_core::money::{Money, Percent};
//!
//! // Create from cents (preferred)
//! let price = Money::from_cents(1099); // $10.99
//!
//! // Arithmetic operations
//! let line_total: Money = price * 3;                   // $32.97
//! let ten_pct = line_total.percentage_of(Percent::from_bps(1000)); // $3.30
//!
//! // NEVER do this:
//! // let bad = Money::from_float(10.99); // NO SUCH METHOD EXISTS!
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: Intermediate math may go negative; public totals never do
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support for JSON serialization
///
/// ## Where Money Flows
/// ```text
/// CatalogSnapshot.unit_price ──► LineItem.unit_price ──► LineItem.subtotal
///                                                              │
///          DiscountRule.value / max_discount ◄────────────────┤
///                                                              ▼
///          DraftDocument.net_subtotal ──► final_amount (UI display only)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Why Cents?
    /// Using the smallest unit eliminates all floating-point concerns.
    /// The engine, payloads, and API all use cents.
    /// Only the UI converts to major units for display.
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
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

    /// Returns the smaller of two Money values.
    #[inline]
    pub fn min(self, other: Self) -> Self {
        Money(self.0.min(other.0))
    }

    /// Subtracts, flooring the result at zero.
    ///
    /// Every public-facing total in the engine is produced through this
    /// instead of bare subtraction, which is how `final_amount >= 0` holds
    /// even when a fixed discount exceeds the subtotal.
    ///
    /// ## Example
    /// ```rust
    /// use merx_core::money::Money;
    ///
    /// let subtotal = Money::from_cents(15_000);
    /// let discount = Money::from_cents(20_000);
    /// assert_eq!(subtotal.sub_floor_zero(discount).cents(), 0); // not -5000
    /// ```
    #[inline]
    pub fn sub_floor_zero(self, other: Self) -> Self {
        Money((self.0 - other.0).max(0))
    }

    /// Clamps a value into `[0, ceiling]`.
    ///
    /// Used by the discount resolver: an amount may never be negative and
    /// may never exceed the subtotal it applies to.
    #[inline]
    pub fn clamp_to(self, ceiling: Self) -> Self {
        Money(self.0.clamp(0, ceiling.0.max(0)))
    }

    /// Applies a percentage rate and returns the resulting amount,
    /// rounding half-up.
    ///
    /// ## Implementation
    /// Integer math in i128 to prevent overflow on large amounts:
    /// `(amount * bps + 5000) / 10000` (the +5000 rounds the half case up).
    ///
    /// ## Example
    /// ```rust
    /// use merx_core::money::{Money, Percent};
    ///
    /// let subtotal = Money::from_cents(10_000);            // $100.00
    /// let amount = subtotal.percentage_of(Percent::from_bps(1000)); // 10%
    /// assert_eq!(amount.cents(), 1000);                    // $10.00
    /// ```
    pub fn percentage_of(&self, rate: Percent) -> Money {
        let amount = (self.0 as i128 * rate.bps() as i128 + 5000) / 10000;
        Money::from_cents(amount as i64)
    }

    /// Multiplies money by a quantity, saturating at the i64 bounds.
    ///
    /// Unit prices are only validated non-negative, so an absurd-but-valid
    /// price must not panic or wrap to a negative subtotal; the aggregators
    /// are total over their declared input domain.
    ///
    /// ## Example
    /// ```rust
    /// use merx_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(299); // $2.99
    /// let subtotal = unit_price.multiply_quantity(3);
    /// assert_eq!(subtotal.cents(), 897); // $8.97
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0.saturating_mul(qty))
    }
}

// =============================================================================
// Percent Type
// =============================================================================

/// A percentage rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 1000 bps = 10.00% — percentage math stays in integers end to end.
///
/// Discount rules arrive from the catalog as a 0-100 percentage; convert at
/// the boundary with [`Percent::from_percentage`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Percent(u32);

impl Percent {
    /// Creates a rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        Percent(bps)
    }

    /// Creates a rate from a 0-100 percentage (for convenience).
    pub fn from_percentage(pct: f64) -> Self {
        Percent((pct * 100.0).round() as u32)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a 0-100 percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Zero rate.
    #[inline]
    pub const fn zero() -> Self {
        Percent(0)
    }

    /// Checks if the rate is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for Percent {
    fn default() -> Self {
        Percent::zero()
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// ## Note
/// This is for debugging. Use frontend formatting for actual UI display
/// to handle localization properly.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, (self.0 / 100).abs(), (self.0 % 100).abs())
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

/// Sum of Money values (for folding item totals).
impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
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
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1099)), "10.99");
        assert_eq!(format!("{}", Money::from_cents(500)), "5.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-5.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "0.00");
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
    fn test_sum() {
        let total: Money = [100, 250, 50]
            .iter()
            .map(|c| Money::from_cents(*c))
            .sum();
        assert_eq!(total.cents(), 400);
    }

    #[test]
    fn test_percentage_of_basic() {
        // $100.00 at 10% = $10.00
        let amount = Money::from_cents(10_000);
        let pct = amount.percentage_of(Percent::from_bps(1000));
        assert_eq!(pct.cents(), 1000);
    }

    #[test]
    fn test_percentage_of_with_rounding() {
        // $10.99 at 7.5% = $0.82425 → $0.82; half case rounds up
        let amount = Money::from_cents(1099);
        let pct = amount.percentage_of(Percent::from_bps(750));
        assert_eq!(pct.cents(), 82);

        // $10.00 at 8.25% = $0.825 → $0.83
        let amount = Money::from_cents(1000);
        let pct = amount.percentage_of(Percent::from_bps(825));
        assert_eq!(pct.cents(), 83);
    }

    #[test]
    fn test_sub_floor_zero() {
        let a = Money::from_cents(15_000);
        let b = Money::from_cents(20_000);
        assert_eq!(a.sub_floor_zero(b).cents(), 0);
        assert_eq!(b.sub_floor_zero(a).cents(), 5_000);
    }

    #[test]
    fn test_clamp_to() {
        let ceiling = Money::from_cents(1000);
        assert_eq!(Money::from_cents(1500).clamp_to(ceiling).cents(), 1000);
        assert_eq!(Money::from_cents(500).clamp_to(ceiling).cents(), 500);
        assert_eq!(Money::from_cents(-5).clamp_to(ceiling).cents(), 0);
        // negative ceiling behaves as zero
        assert_eq!(Money::from_cents(500).clamp_to(Money::from_cents(-1)).cents(), 0);
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_positive());
        assert!(!zero.is_negative());

        let positive = Money::from_cents(100);
        assert!(positive.is_positive());

        let negative = Money::from_cents(-100);
        assert!(negative.is_negative());
    }

    #[test]
    fn test_multiply_quantity() {
        let unit_price = Money::from_cents(299);
        let subtotal = unit_price.multiply_quantity(3);
        assert_eq!(subtotal.cents(), 897);
    }

    #[test]
    fn test_multiply_quantity_saturates_instead_of_overflowing() {
        let huge = Money::from_cents(i64::MAX / 2);
        let subtotal = huge.multiply_quantity(3);
        assert_eq!(subtotal.cents(), i64::MAX);
        assert!(!subtotal.is_negative());
    }

    #[test]
    fn test_percent_from_bps() {
        let rate = Percent::from_bps(1000);
        assert_eq!(rate.bps(), 1000);
        assert!((rate.percentage() - 10.0).abs() < 0.001);
    }

    #[test]
    fn test_percent_from_percentage() {
        let rate = Percent::from_percentage(8.25);
        assert_eq!(rate.bps(), 825);
    }
}
