//! # Storefront
//!
//! Orchestrates shopkit-core rules and external collaborators.
//!
//! ## Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                           Storefront                                    │
//! │                                                                         │
//! │  Pricing            Fulfilment            Accounts          Clock       │
//! │  ───────            ──────────            ────────          ─────       │
//! │  get_price_in_      get_shipping_info     sign_up           is_online   │
//! │    currency         submit_order (async)  login             get_discount│
//! │                                                                         │
//! │  Pages: render_page (async), fetch_data (async)                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each call owns its local state; the storefront itself holds only shared
//! read-only handles, so it can be cloned into tasks freely.

use std::sync::{Arc, OnceLock};

use regex::Regex;
use serde::Serialize;
use shopkit_core::pricing::holiday_discount;
use shopkit_core::{DiscountRate, Money, Order, PaymentMethod, ValidationError};
use tracing::{debug, info, warn};

use crate::clock::{Clock, SystemClock};
use crate::collaborators::Collaborators;
use crate::config::StorefrontConfig;
use crate::error::{ServiceError, ServiceResult};

// =============================================================================
// Order Outcome
// =============================================================================

/// Why an order was not placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderError {
    /// The gateway declined the charge.
    PaymentError,
}

/// Result of [`Storefront::submit_order`].
///
/// Serialises to `{"success":true}` or
/// `{"success":false,"error":"payment_error"}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OrderOutcome {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<OrderError>,
}

impl OrderOutcome {
    pub fn succeeded() -> Self {
        OrderOutcome {
            success: true,
            error: None,
        }
    }

    pub fn failed(error: OrderError) -> Self {
        OrderOutcome {
            success: false,
            error: Some(error),
        }
    }
}

// =============================================================================
// Storefront
// =============================================================================

/// Entry point for collaborator-backed storefront operations.
#[derive(Clone)]
pub struct Storefront {
    config: Arc<StorefrontConfig>,
    collaborators: Collaborators,
    clock: Arc<dyn Clock>,
}

impl Storefront {
    /// Creates a storefront reading the system clock.
    pub fn new(config: StorefrontConfig, collaborators: Collaborators) -> Self {
        Self::with_clock(config, collaborators, Arc::new(SystemClock))
    }

    /// Creates a storefront with a custom clock.
    pub fn with_clock(
        config: StorefrontConfig,
        collaborators: Collaborators,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Storefront {
            config: Arc::new(config),
            collaborators,
            clock,
        }
    }

    pub fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    // =========================================================================
    // Pricing
    // =========================================================================

    /// Converts `price` into `currency_code` at the provider's current rate.
    pub fn get_price_in_currency(&self, price: Money, currency_code: &str) -> ServiceResult<Money> {
        let rate = self.collaborators.currency.exchange_rate(currency_code)?;
        debug!(currency = %currency_code, rate, "Fetched exchange rate");
        Ok(price.convert(rate))
    }

    /// Today's store-wide discount (non-zero only on the holiday).
    pub fn get_discount(&self) -> DiscountRate {
        holiday_discount(self.clock.now().date(), &self.config.holiday)
    }

    // =========================================================================
    // Fulfilment
    // =========================================================================

    /// Describes shipping to `destination`.
    ///
    /// Returns `"Shipping cost: $20 (2 days)"`, or `"Shipping Unavailable"`
    /// when the provider has no quote.
    pub fn get_shipping_info(&self, destination: &str) -> String {
        match self.collaborators.shipping.quote(destination) {
            Some(quote) => {
                debug!(destination = %destination, cost = %quote.cost, days = quote.estimated_days, "Got shipping quote");
                format!(
                    "Shipping cost: {} ({} days)",
                    quote.cost.to_compact_string(),
                    quote.estimated_days
                )
            }
            None => "Shipping Unavailable".to_string(),
        }
    }

    /// Charges the order total to `payment_method`.
    ///
    /// ## Flow
    /// ```text
    /// order.total_amount < 0? ──yes──► Err(Core(Negative))
    ///         │
    ///         no
    ///         ▼
    /// gateway.charge(method, total) ──Err──► Err(PaymentGateway)
    ///         │
    ///         ▼
    /// status == success? ──yes──► { success: true }
    ///         │
    ///         no ──────────────► { success: false, error: "payment_error" }
    /// ```
    pub async fn submit_order(
        &self,
        order: &Order,
        payment_method: &PaymentMethod,
    ) -> ServiceResult<OrderOutcome> {
        if order.total_amount.is_negative() {
            let err = ValidationError::Negative {
                field: "order total".to_string(),
            };
            return Err(ServiceError::Core(err.into()));
        }

        let receipt = self
            .collaborators
            .payment
            .charge(payment_method, order.total_amount)
            .await?;

        if receipt.status.is_success() {
            info!(amount = %order.total_amount, "Order paid");
            Ok(OrderOutcome::succeeded())
        } else {
            warn!(amount = %order.total_amount, "Payment declined");
            Ok(OrderOutcome::failed(OrderError::PaymentError))
        }
    }

    // =========================================================================
    // Accounts
    // =========================================================================

    /// Registers `email` and sends the welcome message.
    ///
    /// Returns `false` without sending anything when the address is malformed.
    pub fn sign_up(&self, email: &str) -> bool {
        if !is_valid_email(email) {
            debug!(email = %email, "Rejected sign-up with malformed email");
            return false;
        }

        self.collaborators
            .email
            .send_email(email, &self.config.email.welcome_message);
        info!(email = %email, "Signed up");
        true
    }

    /// Emails a fresh one-time login code to `email`.
    pub fn login(&self, email: &str) {
        let code = self.collaborators.security.generate_code();
        self.collaborators.email.send_email(email, &code.to_string());
        debug!(email = %email, "Sent one-time login code");
    }

    // =========================================================================
    // Clock
    // =========================================================================

    /// Whether the store is open right now.
    pub fn is_online(&self) -> bool {
        self.config.hours.is_open_at(self.clock.now().time())
    }

    // =========================================================================
    // Pages
    // =========================================================================

    /// Renders the home page and records the view.
    pub async fn render_page(&self) -> String {
        self.collaborators
            .analytics
            .track_page_view(&self.config.analytics.home_path);

        "<div>content</div>".to_string()
    }

    /// Loads the numbers shown on the dashboard widget.
    pub async fn fetch_data(&self) -> Vec<i64> {
        vec![1, 2, 3]
    }
}

/// Minimal address check: something, `@`, a domain containing a dot.
pub fn is_valid_email(email: &str) -> bool {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    let re = EMAIL.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
    });
    re.is_match(email)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use async_trait::async_trait;
    use chrono::NaiveDate;
    use shopkit_core::{ChargeStatus, ShippingQuote};

    use crate::clock::FixedClock;
    use crate::collaborators::{
        Analytics, ChargeReceipt, CodeGenerator, CurrencyRates, EmailSender, OneTimeCode,
        PaymentGateway, ShippingQuotes,
    };

    // -------------------------------------------------------------------------
    // Test doubles
    // -------------------------------------------------------------------------

    struct FixedRate(f64);

    impl CurrencyRates for FixedRate {
        fn exchange_rate(&self, _currency_code: &str) -> ServiceResult<f64> {
            Ok(self.0)
        }
    }

    struct NoRates;

    impl CurrencyRates for NoRates {
        fn exchange_rate(&self, currency_code: &str) -> ServiceResult<f64> {
            Err(ServiceError::CurrencyRates(currency_code.to_string()))
        }
    }

    struct FixedQuote(Option<ShippingQuote>);

    impl ShippingQuotes for FixedQuote {
        fn quote(&self, _destination: &str) -> Option<ShippingQuote> {
            self.0
        }
    }

    enum ChargeBehavior {
        Status(ChargeStatus),
        Reject,
    }

    struct RecordingGateway {
        behavior: ChargeBehavior,
        calls: Mutex<Vec<(PaymentMethod, Money)>>,
    }

    impl RecordingGateway {
        fn new(behavior: ChargeBehavior) -> Arc<Self> {
            Arc::new(RecordingGateway {
                behavior,
                calls: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl PaymentGateway for RecordingGateway {
        async fn charge(&self, method: &PaymentMethod, amount: Money) -> ServiceResult<ChargeReceipt> {
            self.calls.lock().unwrap().push((method.clone(), amount));
            match self.behavior {
                ChargeBehavior::Status(status) => Ok(ChargeReceipt { status }),
                ChargeBehavior::Reject => Err(ServiceError::PaymentGateway("connection reset".into())),
            }
        }
    }

    #[derive(Default)]
    struct RecordingEmail {
        sent: Mutex<Vec<(String, String)>>,
    }

    impl EmailSender for RecordingEmail {
        fn send_email(&self, to: &str, body: &str) {
            self.sent.lock().unwrap().push((to.to_string(), body.to_string()));
        }
    }

    #[derive(Default)]
    struct RecordingAnalytics {
        paths: Mutex<Vec<String>>,
    }

    impl Analytics for RecordingAnalytics {
        fn track_page_view(&self, path: &str) {
            self.paths.lock().unwrap().push(path.to_string());
        }
    }

    struct RecordingCodes {
        issued: Mutex<Vec<OneTimeCode>>,
    }

    impl CodeGenerator for RecordingCodes {
        fn generate_code(&self) -> OneTimeCode {
            let code = OneTimeCode::new(4242);
            self.issued.lock().unwrap().push(code);
            code
        }
    }

    struct Fixture {
        storefront: Storefront,
        gateway: Arc<RecordingGateway>,
        email: Arc<RecordingEmail>,
        analytics: Arc<RecordingAnalytics>,
        clock: Arc<FixedClock>,
    }

    fn fixture_with(
        currency: Arc<dyn CurrencyRates>,
        quote: Option<ShippingQuote>,
        charge: ChargeBehavior,
    ) -> Fixture {
        let gateway = RecordingGateway::new(charge);
        let email = Arc::new(RecordingEmail::default());
        let analytics = Arc::new(RecordingAnalytics::default());
        let clock = Arc::new(FixedClock::at("2024-10-10 12:00").unwrap());

        let collaborators = Collaborators::new(currency, Arc::new(FixedQuote(quote)), gateway.clone())
            .with_email(email.clone())
            .with_analytics(analytics.clone());

        Fixture {
            storefront: Storefront::with_clock(StorefrontConfig::default(), collaborators, clock.clone()),
            gateway,
            email,
            analytics,
            clock,
        }
    }

    fn fixture() -> Fixture {
        fixture_with(
            Arc::new(FixedRate(1.5)),
            None,
            ChargeBehavior::Status(ChargeStatus::Success),
        )
    }

    fn credit_card() -> PaymentMethod {
        PaymentMethod::CreditCard {
            number: "12345".to_string(),
        }
    }

    fn set_time(clock: &FixedClock, at: &str) {
        clock.set(FixedClock::at(at).unwrap().now());
    }

    // -------------------------------------------------------------------------
    // Pricing
    // -------------------------------------------------------------------------

    #[test]
    fn test_price_in_currency_multiplies_rate() {
        let f = fixture();
        let price = f
            .storefront
            .get_price_in_currency(Money::from_dollars(10), "NGN")
            .unwrap();
        assert_eq!(price, Money::from_dollars(15));
    }

    #[test]
    fn test_price_in_currency_propagates_provider_error() {
        let f = fixture_with(Arc::new(NoRates), None, ChargeBehavior::Status(ChargeStatus::Success));
        let err = f
            .storefront
            .get_price_in_currency(Money::from_dollars(10), "XYZ")
            .unwrap_err();
        assert!(matches!(err, ServiceError::CurrencyRates(_)));
    }

    #[test]
    fn test_discount_on_christmas_day() {
        let f = fixture();
        for at in ["2024-12-25 00:01", "2024-12-25 23:59"] {
            set_time(&f.clock, at);
            assert_eq!(f.storefront.get_discount().as_fraction(), 0.2, "{}", at);
        }
    }

    #[test]
    fn test_no_discount_on_other_days() {
        let f = fixture();
        for at in ["2024-12-26 00:00", "2024-12-24 23:59"] {
            set_time(&f.clock, at);
            assert_eq!(f.storefront.get_discount().as_fraction(), 0.0, "{}", at);
        }
    }

    // -------------------------------------------------------------------------
    // Fulfilment
    // -------------------------------------------------------------------------

    #[test]
    fn test_shipping_unavailable() {
        let f = fixture();
        let info = f.storefront.get_shipping_info("Nigeria");
        assert!(info.to_lowercase().contains("unavailable"));
    }

    #[test]
    fn test_shipping_info_formats_quote() {
        let quote = ShippingQuote {
            cost: Money::from_dollars(20),
            estimated_days: 2,
        };
        let f = fixture_with(
            Arc::new(FixedRate(1.0)),
            Some(quote),
            ChargeBehavior::Status(ChargeStatus::Success),
        );

        assert_eq!(f.storefront.get_shipping_info("Nigeria"), "Shipping cost: $20 (2 days)");
    }

    #[tokio::test]
    async fn test_submit_order_charges_total() {
        let f = fixture();
        let order = Order {
            total_amount: Money::from_dollars(3),
        };

        f.storefront.submit_order(&order, &credit_card()).await.unwrap();

        let calls = f.gateway.calls.lock().unwrap();
        assert_eq!(calls.as_slice(), &[(credit_card(), Money::from_dollars(3))]);
    }

    #[tokio::test]
    async fn test_submit_order_success() {
        let f = fixture();
        let order = Order {
            total_amount: Money::from_dollars(3),
        };

        let outcome = f.storefront.submit_order(&order, &credit_card()).await.unwrap();

        assert!(outcome.success);
        assert_eq!(serde_json::to_value(outcome).unwrap(), serde_json::json!({ "success": true }));
    }

    #[tokio::test]
    async fn test_submit_order_declined() {
        let f = fixture_with(
            Arc::new(FixedRate(1.0)),
            None,
            ChargeBehavior::Status(ChargeStatus::Failed),
        );
        let order = Order {
            total_amount: Money::from_dollars(3),
        };

        let outcome = f.storefront.submit_order(&order, &credit_card()).await.unwrap();

        assert_eq!(outcome, OrderOutcome::failed(OrderError::PaymentError));
        assert_eq!(
            serde_json::to_value(outcome).unwrap(),
            serde_json::json!({ "success": false, "error": "payment_error" })
        );
    }

    #[tokio::test]
    async fn test_submit_order_gateway_rejection_propagates() {
        let f = fixture_with(Arc::new(FixedRate(1.0)), None, ChargeBehavior::Reject);
        let order = Order {
            total_amount: Money::from_dollars(3),
        };

        let err = f.storefront.submit_order(&order, &credit_card()).await.unwrap_err();
        assert!(matches!(err, ServiceError::PaymentGateway(_)));
    }

    #[tokio::test]
    async fn test_submit_order_rejects_negative_total() {
        let f = fixture();
        let order = Order {
            total_amount: Money::from_cents(-1),
        };

        let err = f.storefront.submit_order(&order, &PaymentMethod::Cash).await.unwrap_err();
        assert!(matches!(err, ServiceError::Core(_)));
        assert!(f.gateway.calls.lock().unwrap().is_empty());
    }

    // -------------------------------------------------------------------------
    // Accounts
    // -------------------------------------------------------------------------

    #[test]
    fn test_sign_up_rejects_malformed_email() {
        let f = fixture();
        assert!(!f.storefront.sign_up("a"));
        assert!(!f.storefront.sign_up("ade@gmail"));
        assert!(f.email.sent.lock().unwrap().is_empty());
    }

    #[test]
    fn test_sign_up_sends_welcome_email() {
        let f = fixture();
        assert!(f.storefront.sign_up("ade@gmail.com"));

        let sent = f.email.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].0, "ade@gmail.com");
        assert!(sent[0].1.to_lowercase().contains("welcome"));
    }

    #[test]
    fn test_login_emails_generated_code() {
        let codes = Arc::new(RecordingCodes {
            issued: Mutex::new(Vec::new()),
        });
        let email = Arc::new(RecordingEmail::default());
        let collaborators = Collaborators::new(
            Arc::new(FixedRate(1.0)),
            Arc::new(FixedQuote(None)),
            RecordingGateway::new(ChargeBehavior::Status(ChargeStatus::Success)),
        )
        .with_email(email.clone())
        .with_security(codes.clone());
        let storefront = Storefront::new(StorefrontConfig::default(), collaborators);

        storefront.login("ade@gmail.com");

        let issued = codes.issued.lock().unwrap();
        let sent = email.sent.lock().unwrap();
        assert_eq!(issued.len(), 1);
        assert_eq!(
            sent.as_slice(),
            &[("ade@gmail.com".to_string(), issued[0].to_string())]
        );
    }

    #[test]
    fn test_is_valid_email() {
        assert!(is_valid_email("ade@gmail.com"));
        assert!(is_valid_email("first.last@mail.example.org"));
        assert!(!is_valid_email("a"));
        assert!(!is_valid_email("@gmail.com"));
        assert!(!is_valid_email("ade @gmail.com"));
    }

    // -------------------------------------------------------------------------
    // Clock
    // -------------------------------------------------------------------------

    #[test]
    fn test_offline_outside_hours() {
        let f = fixture();
        for at in ["2024-10-10 07:59", "2024-10-10 20:01"] {
            set_time(&f.clock, at);
            assert!(!f.storefront.is_online(), "{}", at);
        }
    }

    #[test]
    fn test_seconds_past_opening_still_offline() {
        let f = fixture();
        let opening = NaiveDate::from_ymd_opt(2024, 10, 10)
            .and_then(|d| d.and_hms_opt(8, 0, 30))
            .unwrap();
        f.clock.set(opening);
        assert!(!f.storefront.is_online());
    }

    #[test]
    fn test_online_within_hours() {
        let f = fixture();
        for at in ["2024-10-10 08:01", "2024-10-10 19:59"] {
            set_time(&f.clock, at);
            assert!(f.storefront.is_online(), "{}", at);
        }
    }

    // -------------------------------------------------------------------------
    // Pages
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn test_render_page_returns_content() {
        let f = fixture();
        let page = f.storefront.render_page().await;
        assert!(page.to_lowercase().contains("content"));
    }

    #[tokio::test]
    async fn test_render_page_tracks_home_view() {
        let f = fixture();
        f.storefront.render_page().await;
        assert_eq!(f.analytics.paths.lock().unwrap().as_slice(), &["/home".to_string()]);
    }

    #[tokio::test]
    async fn test_fetch_data() {
        let f = fixture();
        assert_eq!(f.storefront.fetch_data().await, vec![1, 2, 3]);
    }
}
