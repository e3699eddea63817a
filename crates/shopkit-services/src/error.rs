//! # Service Error Types
//!
//! Error types for collaborator calls and configuration.
//!
//! ## Error Categories
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Service Error Categories                           │
//! │                                                                         │
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────────────┐ │
//! │  │  Collaborators  │  │  Configuration  │  │     Domain              │ │
//! │  │                 │  │                 │  │                         │ │
//! │  │  PaymentGateway │  │  InvalidConfig  │  │  Core(CoreError)        │ │
//! │  │  CurrencyRates  │  │  ConfigLoad     │  │                         │ │
//! │  │                 │  │  ConfigSave     │  │                         │ │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A declined charge is NOT an error: it is an `OrderOutcome` with
//! `success: false`. `PaymentGateway` means the gateway call itself failed.

use shopkit_core::CoreError;
use thiserror::Error;

/// Result type alias for service operations.
pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, Error)]
pub enum ServiceError {
    // =========================================================================
    // Collaborator Errors
    // =========================================================================
    /// The payment gateway could not process the charge request.
    #[error("Payment gateway error: {0}")]
    PaymentGateway(String),

    /// The exchange rate provider failed or has no rate for the currency.
    #[error("Exchange rate unavailable: {0}")]
    CurrencyRates(String),

    // =========================================================================
    // Configuration Errors
    // =========================================================================
    #[error("Invalid storefront configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to load config: {0}")]
    ConfigLoadFailed(String),

    #[error("Failed to save config: {0}")]
    ConfigSaveFailed(String),

    // =========================================================================
    // Domain Errors
    // =========================================================================
    #[error(transparent)]
    Core(#[from] CoreError),
}

// =============================================================================
// Error Conversions
// =============================================================================

impl From<std::io::Error> for ServiceError {
    fn from(err: std::io::Error) -> Self {
        ServiceError::ConfigLoadFailed(err.to_string())
    }
}

impl From<toml::de::Error> for ServiceError {
    fn from(err: toml::de::Error) -> Self {
        ServiceError::ConfigLoadFailed(err.to_string())
    }
}

impl From<toml::ser::Error> for ServiceError {
    fn from(err: toml::ser::Error) -> Self {
        ServiceError::ConfigSaveFailed(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopkit_core::StackError;

    #[test]
    fn test_error_messages() {
        let err = ServiceError::PaymentGateway("timeout".to_string());
        assert_eq!(err.to_string(), "Payment gateway error: timeout");
    }

    #[test]
    fn test_core_error_is_transparent() {
        let err: ServiceError = CoreError::from(StackError::Empty).into();
        assert_eq!(err.to_string(), "Stack is empty");
    }
}
