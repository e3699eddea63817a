//! # Domain Types
//!
//! Core domain types shared by shopkit-core and shopkit-services.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  DiscountRate   │   │     Coupon      │   │  ShippingQuote  │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  bps (u32)      │   │  code           │   │  cost (Money)   │       │
//! │  │  2000 = 20%     │   │  discount (0,1) │   │  estimated_days │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │     Order       │   │ PaymentMethod   │   │  ChargeStatus   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  total_amount   │   │  CreditCard     │   │  Success        │       │
//! │  │                 │   │  Cash           │   │  Failed         │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::money::Money;

// =============================================================================
// Discount Rate
// =============================================================================

/// Discount rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 2000 bps = 20%. Integer rates keep discount math exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DiscountRate(u32);

impl DiscountRate {
    /// Creates a discount rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        DiscountRate(bps)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a fraction of one (2000 bps → 0.2).
    #[inline]
    pub fn as_fraction(&self) -> f64 {
        self.0 as f64 / 10000.0
    }

    /// Zero discount.
    #[inline]
    pub const fn zero() -> Self {
        DiscountRate(0)
    }

    /// Checks if the rate is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for DiscountRate {
    fn default() -> Self {
        DiscountRate::zero()
    }
}

// =============================================================================
// Coupon
// =============================================================================

/// A publicly advertised coupon.
///
/// `discount` is a fraction strictly between 0 and 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coupon {
    pub code: String,
    pub discount: f64,
}

impl Coupon {
    pub fn new(code: impl Into<String>, rate: DiscountRate) -> Self {
        Coupon {
            code: code.into(),
            discount: rate.as_fraction(),
        }
    }
}

// =============================================================================
// Shipping
// =============================================================================

/// A quote returned by the shipping provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingQuote {
    pub cost: Money,
    pub estimated_days: u32,
}

// =============================================================================
// Orders & Payment
// =============================================================================

/// How the customer pays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PaymentMethod {
    /// Card charged through the payment gateway.
    CreditCard { number: String },
    /// Cash collected on delivery.
    Cash,
}

/// An order ready to be charged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub total_amount: Money,
}

/// Status reported by the payment gateway for a charge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChargeStatus {
    Success,
    Failed,
}

impl ChargeStatus {
    pub fn is_success(&self) -> bool {
        matches!(self, ChargeStatus::Success)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discount_rate_fraction() {
        let rate = DiscountRate::from_bps(2000);
        assert_eq!(rate.bps(), 2000);
        assert_eq!(rate.as_fraction(), 0.2);
        assert_eq!(DiscountRate::default(), DiscountRate::zero());
        assert!(DiscountRate::zero().is_zero());
    }

    #[test]
    fn test_coupon_from_rate() {
        let coupon = Coupon::new("SAVE10", DiscountRate::from_bps(1000));
        assert_eq!(coupon.code, "SAVE10");
        assert_eq!(coupon.discount, 0.1);
    }

    #[test]
    fn test_payment_method_serialization() {
        let card = PaymentMethod::CreditCard {
            number: "12345".to_string(),
        };
        let json = serde_json::to_value(&card).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "type": "credit_card", "number": "12345" })
        );
    }

    #[test]
    fn test_charge_status_parsing() {
        let status: ChargeStatus = serde_json::from_str("\"success\"").unwrap();
        assert!(status.is_success());
        let status: ChargeStatus = serde_json::from_str("\"failed\"").unwrap();
        assert!(!status.is_success());
    }
}
