//! # Error Types
//!
//! Domain-specific error types for shopkit-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  shopkit-core errors (this file)                                       │
//! │  ├── CoreError        - Umbrella for everything below                  │
//! │  ├── ValidationError  - Field-level input failures                     │
//! │  ├── StackError       - Underflow on pop/peek                          │
//! │  ├── DiscountError    - Bad input to calculate_discount                │
//! │  └── UserInputError   - Accumulated username/age failures              │
//! │                                                                         │
//! │  shopkit-services errors (separate crate)                              │
//! │  └── ServiceError     - Collaborator and config failures               │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ServiceError → Caller             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field, code, etc.)
//! 3. Errors are enum variants, never String
//! 4. Messages that callers match on ("Invalid ...", "... is empty") are
//!    part of the contract and are covered by tests

use std::fmt;

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Stack underflow.
    #[error(transparent)]
    Stack(#[from] StackError),

    /// Discount calculation rejected its input.
    #[error(transparent)]
    Discount(#[from] DiscountError),

    /// Username/age pair failed validation.
    #[error(transparent)]
    UserInput(#[from] UserInputError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when user input doesn't meet requirements.
/// Used for early validation before business logic runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field has the wrong type (e.g., a string where a number is expected).
    #[error("{field} must be a {expected}")]
    WrongType { field: String, expected: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    Negative { field: String },

    /// Country code has no driving-age rule.
    ///
    /// ## When This Occurs
    /// ```text
    /// can_drive(16, "USA")
    ///      │
    ///      ▼
    /// "USA" is not a recognised code (US, UK)
    ///      │
    ///      ▼
    /// InvalidCountry("USA") → "Invalid country code: USA"
    /// ```
    #[error("Invalid country code: {0}")]
    InvalidCountry(String),
}

// =============================================================================
// Stack Error
// =============================================================================

/// Errors raised by [`crate::stack::Stack`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StackError {
    /// `pop` or `peek` was called on an empty stack.
    #[error("Stack is empty")]
    Empty,
}

// =============================================================================
// Discount Error
// =============================================================================

/// Rejected input to [`crate::pricing::calculate_discount_value`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiscountError {
    /// Price is missing, not a number, or negative.
    #[error("Invalid price")]
    InvalidPrice,

    /// Discount code is not a string.
    #[error("Invalid discount code")]
    InvalidCode,
}

// =============================================================================
// User Input Error
// =============================================================================

/// One reason a username/age pair was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserInputIssue {
    InvalidUsername,
    InvalidAge,
}

impl fmt::Display for UserInputIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserInputIssue::InvalidUsername => write!(f, "Invalid username"),
            UserInputIssue::InvalidAge => write!(f, "Invalid age"),
        }
    }
}

/// Every reason a username/age pair was rejected, in check order.
///
/// Never constructed empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserInputError {
    issues: Vec<UserInputIssue>,
}

impl UserInputError {
    pub(crate) fn new(issues: Vec<UserInputIssue>) -> Self {
        debug_assert!(!issues.is_empty());
        UserInputError { issues }
    }

    /// Returns the individual issues.
    pub fn issues(&self) -> &[UserInputIssue] {
        &self.issues
    }

    /// Checks whether a given issue was reported.
    pub fn has(&self, issue: UserInputIssue) -> bool {
        self.issues.contains(&issue)
    }
}

impl fmt::Display for UserInputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, issue) in self.issues.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", issue)?;
        }
        Ok(())
    }
}

impl std::error::Error for UserInputError {}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
