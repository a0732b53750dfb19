//! # Money Module
//!
//! Provides the `Money` type for monetary values.
//!
//! ## Why Decimal Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE UNIT COST PROBLEM                                                  │
//! │                                                                         │
//! │  Ingredients are priced per gram or per slice:                          │
//! │    frango: R$ 0.05 / g × 80 g = R$ 4.00                                 │
//! │    queijo: R$ 0.013 / g × 30 g = R$ 0.39                                │
//! │                                                                         │
//! │  Integer cents cannot hold R$ 0.013, and f64 drifts:                    │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌                                  │
//! │                                                                         │
//! │  OUR SOLUTION: exact base-10 decimals                                   │
//! │    Sums stay exact; rounding to cents happens only for display.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use lanchonete_core::money::Money;
//! use rust_decimal::Decimal;
//!
//! let price = Money::from_cents(1500); // R$ 15.00
//! let revenue = price.multiply_quantity(2);
//! assert_eq!(revenue.cents(), 3000);
//!
//! let per_gram = Money::from_decimal(Decimal::new(5, 2)); // R$ 0.05
//! let cost = per_gram * Decimal::from(80);
//! assert_eq!(cost, Money::from_cents(400));
//! ```

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the stall's currency.
///
/// ## Design Decisions
/// - **Decimal (signed)**: negative values appear as losses in closing reports
/// - **Single field tuple struct**: zero-cost wrapper over `Decimal`
/// - **No float constructor**: amounts enter as cents or as decimals
///
/// ## Where Money is Used
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  StockItem.unit_cost ──► ingredient cost ──┐                            │
/// │                                            ├──► ClosingReport           │
/// │  Sale.unit_price ──► Sale.revenue() ───────┘     gross / net profit     │
/// │                                                                         │
/// │  Expense.amount ──────────────────────────────► net profit              │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use lanchonete_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // R$ 10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub fn from_cents(cents: i64) -> Self {
        Money(Decimal::new(cents, 2))
    }

    /// Creates a Money value from an exact decimal amount.
    ///
    /// Sub-cent precision is kept (unit costs like R$ 0.013 per gram).
    #[inline]
    pub const fn from_decimal(amount: Decimal) -> Self {
        Money(amount)
    }

    /// Returns the exact decimal amount.
    #[inline]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns the value in cents, rounded half away from zero.
    ///
    /// Saturates at `i64::MIN` / `i64::MAX` for amounts beyond that range.
    ///
    /// ## Example
    /// ```rust
    /// use lanchonete_core::money::Money;
    /// use rust_decimal::Decimal;
    ///
    /// let m = Money::from_decimal(Decimal::new(12345, 3)); // 12.345
    /// assert_eq!(m.cents(), 1235);
    /// ```
    pub fn cents(&self) -> i64 {
        let mut rounded = self.round_to_cents().0;
        rounded.rescale(2);
        i64::try_from(rounded.mantissa()).unwrap_or(if rounded.is_sign_negative() {
            i64::MIN
        } else {
            i64::MAX
        })
    }

    /// Rounds to two decimal places (half away from zero).
    pub fn round_to_cents(&self) -> Money {
        Money(
            self.0
                .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero),
        )
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(Decimal::ZERO)
    }

    /// Checks if the value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// Returns the absolute value.
    #[inline]
    pub fn abs(&self) -> Self {
        Money(self.0.abs())
    }

    /// Multiplies money by a sold quantity.
    ///
    /// ## Example
    /// ```rust
    /// use lanchonete_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(1500);
    /// assert_eq!(unit_price.multiply_quantity(2).cents(), 3000);
    /// ```
    #[inline]
    pub fn multiply_quantity(&self, qty: u32) -> Self {
        Money(self.0 * Decimal::from(qty))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shows the amount rounded to cents, without a currency symbol.
///
/// The CLI decides symbol and decimals (see its config module).
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.round_to_cents().0)
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

impl Neg for Money {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Money(-self.0)
    }
}

/// Multiplication by a decimal quantity (unit cost × grams, etc.).
impl Mul<Decimal> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: Decimal) -> Self {
        Money(self.0 * qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
