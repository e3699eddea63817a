//! # Collaborators
//!
//! Interfaces to the external services the storefront calls but does not
//! implement.
//!
//! ## Collaborator Map
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Storefront                                      │
//! │                                                                         │
//! │  get_price_in_currency ──► CurrencyRates::exchange_rate                │
//! │  get_shipping_info ──────► ShippingQuotes::quote                       │
//! │  render_page ────────────► Analytics::track_page_view                  │
//! │  submit_order ───────────► PaymentGateway::charge        (async)       │
//! │  sign_up / login ────────► EmailSender::send_email                     │
//! │  login ──────────────────► CodeGenerator::generate_code                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Currency, shipping and payment have no sensible local fallback and must
//! be supplied. Analytics, email and codes default to [`NoOpAnalytics`],
//! [`TracingEmailSender`] and [`RandomCodeGenerator`].

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use shopkit_core::{ChargeStatus, Money, PaymentMethod, ShippingQuote};
use tracing::info;
use uuid::Uuid;

use crate::error::ServiceResult;

// =============================================================================
// Collaborator Traits
// =============================================================================

/// Exchange rate provider.
pub trait CurrencyRates: Send + Sync {
    /// Units of `currency_code` per unit of the store currency.
    fn exchange_rate(&self, currency_code: &str) -> ServiceResult<f64>;
}

/// Shipping quote provider.
pub trait ShippingQuotes: Send + Sync {
    /// Returns `None` when the destination cannot be served.
    fn quote(&self, destination: &str) -> Option<ShippingQuote>;
}

/// Page view tracking.
pub trait Analytics: Send + Sync {
    fn track_page_view(&self, path: &str);
}

/// Gateway's answer to a charge request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChargeReceipt {
    pub status: ChargeStatus,
}

/// Card/cash payment processor.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Charges `amount` to `method`.
    ///
    /// A declined charge is `Ok` with [`ChargeStatus::Failed`]; `Err` means
    /// the request itself could not be completed.
    async fn charge(&self, method: &PaymentMethod, amount: Money) -> ServiceResult<ChargeReceipt>;
}

/// Outgoing email.
pub trait EmailSender: Send + Sync {
    fn send_email(&self, to: &str, body: &str);
}

/// One-time login code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OneTimeCode(u32);

impl OneTimeCode {
    /// Keeps the last six digits.
    pub fn new(value: u32) -> Self {
        OneTimeCode(value % 1_000_000)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

/// Always six digits, zero padded.
impl fmt::Display for OneTimeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:06}", self.0)
    }
}

/// Source of one-time login codes.
pub trait CodeGenerator: Send + Sync {
    fn generate_code(&self) -> OneTimeCode;
}

// =============================================================================
// Default Implementations
// =============================================================================

/// Drops page views.
pub struct NoOpAnalytics;

impl Analytics for NoOpAnalytics {
    fn track_page_view(&self, _path: &str) {}
}

/// Logs emails instead of delivering them.
pub struct TracingEmailSender;

impl EmailSender for TracingEmailSender {
    fn send_email(&self, to: &str, body: &str) {
        info!(to = %to, bytes = body.len(), "Email queued (not delivered: no mail transport configured)");
    }
}

/// Derives codes from random v4 UUIDs.
pub struct RandomCodeGenerator;

impl CodeGenerator for RandomCodeGenerator {
    fn generate_code(&self) -> OneTimeCode {
        let random = Uuid::new_v4().as_u128();
        OneTimeCode::new((random % 1_000_000) as u32)
    }
}

// =============================================================================
// Collaborator Bundle
// =============================================================================

/// Every collaborator the storefront talks to.
#[derive(Clone)]
pub struct Collaborators {
    pub currency: Arc<dyn CurrencyRates>,
    pub shipping: Arc<dyn ShippingQuotes>,
    pub payment: Arc<dyn PaymentGateway>,
    pub analytics: Arc<dyn Analytics>,
    pub email: Arc<dyn EmailSender>,
    pub security: Arc<dyn CodeGenerator>,
}

impl Collaborators {
    /// Bundles the required collaborators with the default analytics,
    /// email and code generator.
    pub fn new(
        currency: Arc<dyn CurrencyRates>,
        shipping: Arc<dyn ShippingQuotes>,
        payment: Arc<dyn PaymentGateway>,
    ) -> Self {
        Collaborators {
            currency,
            shipping,
            payment,
            analytics: Arc::new(NoOpAnalytics),
            email: Arc::new(TracingEmailSender),
            security: Arc::new(RandomCodeGenerator),
        }
    }

    pub fn with_analytics(mut self, analytics: Arc<dyn Analytics>) -> Self {
        self.analytics = analytics;
        self
    }

    pub fn with_email(mut self, email: Arc<dyn EmailSender>) -> Self {
        self.email = email;
        self
    }

    pub fn with_security(mut self, security: Arc<dyn CodeGenerator>) -> Self {
        self.security = security;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_time_code_is_six_digits() {
        assert_eq!(OneTimeCode::new(42).to_string(), "000042");
        assert_eq!(OneTimeCode::new(123_456).to_string(), "123456");
        assert_eq!(OneTimeCode::new(9_123_456).value(), 123_456);
    }

    #[test]
    fn test_random_codes_stay_in_range() {
        let generator = RandomCodeGenerator;
        for _ in 0..100 {
            let code = generator.generate_code();
            assert!(code.value() < 1_000_000);
            assert_eq!(code.to_string().len(), 6);
        }
    }
}
