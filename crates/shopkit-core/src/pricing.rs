//! # Pricing Rules
//!
//! Discount codes, advertised coupons, and the seasonal promotion.
//!
//! ## Discount Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  price ($10)  +  code ("SAVE10")                                        │
//! │       │                 │                                               │
//! │       │                 ▼                                               │
//! │       │     discount_for_code ── DISCOUNT_CODES ──► 1000 bps            │
//! │       │                 │        (unknown code  ──► 0 bps)             │
//! │       ▼                 ▼                                               │
//! │   Money::apply_discount(rate) ──► $9                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::DiscountError;
use crate::money::Money;
use crate::types::{Coupon, DiscountRate};
use crate::validation::parse_price;

/// Recognised discount codes and their rates.
///
/// Also the source of the advertised coupon list.
pub const DISCOUNT_CODES: &[(&str, DiscountRate)] = &[
    ("SAVE10", DiscountRate::from_bps(1000)),
    ("SAVE20", DiscountRate::from_bps(2000)),
];

// =============================================================================
// Discount Codes
// =============================================================================

/// Looks up the rate for a code. Unknown codes give no discount.
pub fn discount_for_code(code: &str) -> DiscountRate {
    DISCOUNT_CODES
        .iter()
        .find(|(known, _)| *known == code)
        .map(|(_, rate)| *rate)
        .unwrap_or_default()
}

/// Applies the discount for `code` to `price`.
///
/// ## Example
/// ```rust
/// use shopkit_core::money::Money;
/// use shopkit_core::pricing::calculate_discount;
///
/// let price = Money::from_dollars(10);
/// assert_eq!(calculate_discount(price, "SAVE10"), Money::from_dollars(9));
/// assert_eq!(calculate_discount(price, "SAVE20"), Money::from_dollars(8));
/// assert_eq!(calculate_discount(price, "SAVE440"), price);
/// ```
pub fn calculate_discount(price: Money, code: &str) -> Money {
    price.apply_discount(discount_for_code(code))
}

/// Untyped variant of [`calculate_discount`].
///
/// ## Errors
/// - [`DiscountError::InvalidPrice`] when `price` is not a non-negative number
///   that fits in cents
/// - [`DiscountError::InvalidCode`] when `code` is not a string
pub fn calculate_discount_value(price: &Value, code: &Value) -> Result<Money, DiscountError> {
    let price = parse_price(price, "price").map_err(|_| DiscountError::InvalidPrice)?;
    let code = code.as_str().ok_or(DiscountError::InvalidCode)?;

    Ok(calculate_discount(price, code))
}

// =============================================================================
// Coupons
// =============================================================================

/// Returns the advertised coupons, freshly built on every call.
pub fn get_coupons() -> Vec<Coupon> {
    DISCOUNT_CODES
        .iter()
        .map(|(code, rate)| Coupon::new(*code, *rate))
        .collect()
}

// =============================================================================
// Holiday Promotion
// =============================================================================

/// A one-day, store-wide discount that repeats every year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayPromotion {
    pub month: u32,
    pub day: u32,
    pub discount_bps: u32,
}

impl HolidayPromotion {
    /// Christmas Day, 20% off.
    pub const CHRISTMAS: HolidayPromotion = HolidayPromotion {
        month: 12,
        day: 25,
        discount_bps: 2000,
    };

    pub fn rate(&self) -> DiscountRate {
        DiscountRate::from_bps(self.discount_bps)
    }

    /// True when `date` is the promotion day, in any year.
    pub fn is_active_on(&self, date: NaiveDate) -> bool {
        date.month() == self.month && date.day() == self.day
    }
}

impl Default for HolidayPromotion {
    fn default() -> Self {
        HolidayPromotion::CHRISTMAS
    }
}

/// Discount that applies on `today`: the promotion rate on the promotion
/// day, zero otherwise.
pub fn holiday_discount(today: NaiveDate, promotion: &HolidayPromotion) -> DiscountRate {
    if promotion.is_active_on(today) {
        promotion.rate()
    } else {
        DiscountRate::zero()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
