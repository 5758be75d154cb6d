//! # Money Module
//!
//! Amounts in euro cents.
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────────┐
//! │  unit price (cents) × units  ──►  item gross (cents)          │
//! │  Σ item gross                ──►  order gross (cents)         │
//! │  gross × pct / (100 + pct)   ──►  f64, rounded half-up once   │
//! └───────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything a report shows is a whole number of cents; the only float in
//! the crate lives inside [`crate::calculator::TaxCalculator::vat_portion`].
//!
//! ```rust
//! use bestell_core::money::Money;
//!
//! let tasse = Money::from_cents(299);
//! let line = tasse * 3 + Money::from_cents(149);
//! assert_eq!(line.cents(), 1046);
//! assert_eq!(line.to_string(), "10.46");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

// =============================================================================
// Money
// =============================================================================

/// A signed amount of cents.
///
/// Arithmetic may go negative; the entity setters reject negative prices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Wraps a raw cent count.
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Builds `euros.cents`. The sign goes on `major` only, so
    /// `from_major_minor(-5, 50)` is -5.50.
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money(major * 100 - minor)
        } else {
            Money(major * 100 + minor)
        }
    }

    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Whole euros, truncated toward zero.
    #[inline]
    pub const fn major(&self) -> i64 {
        self.0 / 100
    }

    /// Cent part without sign, `0..=99`.
    #[inline]
    pub const fn minor(&self) -> i64 {
        (self.0 % 100).abs()
    }

    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    #[inline]
    pub const fn abs(&self) -> Self {
        Money(self.0.abs())
    }

    /// Gross value of `units` at this unit price.
    ///
    /// ```rust
    /// use bestell_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(4990).multiply_quantity(2).cents(), 9980);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, units: i64) -> Self {
        Money(self.0 * units)
    }

    /// `None` if the product does not fit in an `i64` of cents.
    #[inline]
    pub const fn checked_multiply_quantity(&self, units: i64) -> Option<Self> {
        match self.0.checked_mul(units) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }

    #[inline]
    pub const fn checked_add(&self, rhs: Money) -> Option<Self> {
        match self.0.checked_add(rhs.0) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }
}

// =============================================================================
// Operators
// =============================================================================

/// `"10.99"`, `"-5.50"`. No currency; [`crate::format::Formatter`] adds it.
/// Width and alignment flags apply to the whole number.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };
        f.pad(&format!("{sign}{}.{:02}", self.major().abs(), self.minor()))
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
    fn add(self, rhs: Self) -> Self {
        Money(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Money(self.0 - rhs.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, units: i64) -> Self {
        self.multiply_quantity(units)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}
