//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  With floats:                                                           │
//! │    0.1 + 0.2 = 0.30000000000000004                                      │
//! │                                                                         │
//! │  A discount of 10% on $10 should be exactly $9, not $8.999999...       │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    1000 cents - 10% = 900 cents                                        │
//! │    Floats only appear at the boundary (raw input, exchange rates)      │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use shopkit_core::money::Money;
//!
//! let price = Money::from_cents(1099); // $10.99
//! let doubled = price * 2;             // $21.98
//! let total = price + Money::from_cents(500); // $15.99
//! assert_eq!(total.cents(), 1599);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

use crate::types::DiscountRate;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents for USD).
///
/// ## Design Decisions
/// - **i64 (signed)**: Allows negative values so invalid prices can be
///   represented long enough to be rejected
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Ord**: Range checks are plain comparisons
///
/// ## Where Money is Used
/// ```text
/// raw price (JSON number) ──► validation::parse_price ──► Money
///                                                           │
///        ┌──────────────────────────┬───────────────────────┤
///        ▼                          ▼                       ▼
///  calculate_discount        is_price_in_range        convert(rate)
///  (percentage off)          (inclusive bounds)       (foreign currency)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use shopkit_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from whole dollars.
    ///
    /// ## Example
    /// ```rust
    /// use shopkit_core::money::Money;
    ///
    /// assert_eq!(Money::from_dollars(10).cents(), 1000);
    /// ```
    #[inline]
    pub const fn from_dollars(dollars: i64) -> Self {
        Money(dollars * 100)
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    ///
    /// ## Example
    /// ```rust
    /// use shopkit_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(1099).dollars(), 10);
    /// assert_eq!(Money::from_cents(-550).dollars(), -5);
    /// ```
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

    /// Applies a percentage discount and returns the discounted amount.
    ///
    /// The discount amount is rounded half-up to the nearest cent before
    /// being subtracted.
    ///
    /// ## Example
    /// ```rust
    /// use shopkit_core::money::Money;
    /// use shopkit_core::types::DiscountRate;
    ///
    /// let price = Money::from_dollars(10);
    /// let discounted = price.apply_discount(DiscountRate::from_bps(1000)); // 10% off
    /// assert_eq!(discounted, Money::from_dollars(9));
    /// ```
    pub fn apply_discount(&self, rate: DiscountRate) -> Money {
        // i128 so large amounts cannot overflow during the multiply
        let discount_amount = (self.0 as i128 * rate.bps() as i128 + 5000) / 10000;
        Money::from_cents(self.0 - discount_amount as i64)
    }

    /// Converts into another currency using a floating point exchange rate.
    ///
    /// Rates arrive as floats from the rate provider, so this is one of the
    /// two places floats touch money. The result is rounded to the nearest cent.
    ///
    /// ## Example
    /// ```rust
    /// use shopkit_core::money::Money;
    ///
    /// let price = Money::from_dollars(10);
    /// assert_eq!(price.convert(1.5), Money::from_dollars(15));
    /// ```
    pub fn convert(&self, rate: f64) -> Money {
        Money::from_cents((self.0 as f64 * rate).round() as i64)
    }

    /// Formats without the cents part when it is zero: `$20`, `$20.50`.
    ///
    /// Used for customer-facing sentences such as shipping quotes.
    pub fn to_compact_string(&self) -> String {
        if self.cents_part() == 0 {
            let sign = if self.0 < 0 { "-" } else { "" };
            format!("{}${}", sign, self.dollars().abs())
        } else {
            self.to_string()
        }
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display shows money as `$10.99` / `-$5.50`.
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

/// Multiplication by integer (for quantity calculations).
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
