//! # shopkit-services: Collaborator Orchestration for Shopkit
//!
//! Wires the pure rules of `shopkit-core` to currency, shipping, payment,
//! analytics, email and security providers, and to the wall clock.
//!
//! ## Modules
//! - [`storefront`] - The orchestrating operations
//! - [`collaborators`] - Provider traits and default implementations
//! - [`clock`] - Clock abstraction (system / fixed)
//! - [`config`] - TOML + environment configuration
//! - [`telemetry`] - tracing subscriber setup
//! - [`error`] - Service error types
//!
//! ## Usage
//! ```rust,ignore
//! let collaborators = Collaborators::new(rates, shipping, gateway)
//!     .with_email(Arc::new(SmtpSender::new(...)));
//! let storefront = Storefront::new(StorefrontConfig::load_or_default(None), collaborators);
//!
//! if storefront.is_online() {
//!     let outcome = storefront.submit_order(&order, &card).await?;
//! }
//! ```

pub mod clock;
pub mod collaborators;
pub mod config;
pub mod error;
pub mod storefront;
pub mod telemetry;

pub use clock::{Clock, FixedClock, SystemClock};
pub use collaborators::{
    Analytics, ChargeReceipt, CodeGenerator, Collaborators, CurrencyRates, EmailSender,
    OneTimeCode, PaymentGateway, ShippingQuotes,
};
pub use config::StorefrontConfig;
pub use error::{ServiceError, ServiceResult};
pub use storefront::{OrderError, OrderOutcome, Storefront};
