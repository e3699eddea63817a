//! # shopkit-core: Pure Business Logic for Shopkit
//!
//! This crate holds the storefront's rules as pure functions with zero I/O
//! dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Shopkit Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  shopkit-services (Storefront)                  │   │
//! │  │    submit_order, sign_up, get_shipping_info, is_online ...     │   │
//! │  │    Collaborators: currency, shipping, payment, email, clock    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ shopkit-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   stack   │  │   money   │  │  pricing  │  │ validation│  │   │
//! │  │   │  Stack<T> │  │   Money   │  │  coupons  │  │   rules   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  product  │  │   user    │  │   hours   │  │  basics   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO CLOCK • NO NETWORK • PURE FUNCTIONS              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`stack`] - LIFO container
//! - [`money`] - Money type with integer arithmetic
//! - [`types`] - Shared domain types (DiscountRate, Coupon, Order, ...)
//! - [`validation`] - Raw input parsing and business rule validation
//! - [`pricing`] - Discount codes, coupons, holiday promotion
//! - [`product`] - Product creation with structured outcomes
//! - [`user`] - Username/age validation
//! - [`hours`] - Business hours
//! - [`basics`] - Arithmetic helpers
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same input = same output, time included
//! 2. **Typed Boundaries**: untyped input is `serde_json::Value` and is
//!    parsed into strict types before any rule runs
//! 3. **Integer Money**: monetary values are cents (i64)
//! 4. **Explicit Errors**: errors are typed enums, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use shopkit_core::money::Money;
//! use shopkit_core::pricing::calculate_discount;
//!
//! let price = Money::from_dollars(10);
//! assert_eq!(calculate_discount(price, "SAVE20").cents(), 800);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod basics;
pub mod error;
pub mod hours;
pub mod money;
pub mod pricing;
pub mod product;
pub mod stack;
pub mod types;
pub mod user;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, DiscountError, StackError, UserInputError, ValidationError};
pub use money::Money;
pub use stack::Stack;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Shortest public display name.
pub const USERNAME_MIN_LENGTH: usize = 5;

/// Longest public display name.
pub const USERNAME_MAX_LENGTH: usize = 15;

/// Account names accepted at registration are looser than display names.
pub const ACCOUNT_NAME_MIN_LENGTH: usize = 3;

pub const ACCOUNT_NAME_MAX_LENGTH: usize = 256;

/// Minimum age to open an account.
pub const MIN_AGE: u64 = 18;

/// Anything above this is treated as a typo.
pub const MAX_AGE: u64 = 200;

pub const MIN_PASSWORD_LENGTH: usize = 8;
