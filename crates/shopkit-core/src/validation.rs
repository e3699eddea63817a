//! # Validation Module
//!
//! Input validation and raw-input parsing for Shopkit.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Boundary (serde_json::Value)                                 │
//! │  ├── Input arrives untyped: number, string, null, object...            │
//! │  └── parse_* functions turn it into strict types or reject it          │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Business rules (THIS MODULE)                                 │
//! │  ├── Username length, password strength                                │
//! │  ├── Price ranges, driving ages per country                            │
//! │  └── Operates on strict types only                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use serde_json::json;
//! use shopkit_core::validation::{can_drive, is_valid_username_value};
//!
//! assert!(is_valid_username_value(&json!("alice")));
//! assert!(!is_valid_username_value(&json!(3)));
//!
//! assert_eq!(can_drive(&json!(16), "US"), Ok(true));
//! assert!(can_drive(&json!(16), "USA").is_err());
//! ```

use serde_json::Value;
use std::str::FromStr;

use crate::error::ValidationError;
use crate::money::Money;
use crate::{MIN_PASSWORD_LENGTH, USERNAME_MAX_LENGTH, USERNAME_MIN_LENGTH};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Raw Input Parsers
// =============================================================================

/// Parses a raw price into [`Money`].
///
/// ## Rules
/// - Must be a JSON number (the string `"10"` is rejected)
/// - Must be finite and non-negative
/// - Must fit in `i64` cents
/// - Rounded to the nearest cent: `9.999` → `$10.00`
///
/// This is the boundary where a float price becomes integer cents.
///
/// ## Example
/// ```rust
/// use serde_json::json;
/// use shopkit_core::money::Money;
/// use shopkit_core::validation::parse_price;
///
/// assert_eq!(parse_price(&json!(10), "price"), Ok(Money::from_dollars(10)));
/// assert!(parse_price(&json!(-10), "price").is_err());
/// assert!(parse_price(&json!("10"), "price").is_err());
/// ```
pub fn parse_price(value: &Value, field: &str) -> ValidationResult<Money> {
    let amount = match value {
        Value::Null => {
            return Err(ValidationError::Required {
                field: field.to_string(),
            })
        }
        Value::Number(n) => n.as_f64().ok_or_else(|| wrong_type(field, "number"))?,
        _ => return Err(wrong_type(field, "number")),
    };

    if !amount.is_finite() {
        return Err(wrong_type(field, "finite number"));
    }

    if amount < 0.0 {
        return Err(ValidationError::Negative {
            field: field.to_string(),
        });
    }

    // i64::MAX as f64 rounds up to 2^63, which is itself out of range.
    let cents = (amount * 100.0).round();
    if cents >= i64::MAX as f64 {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: 0,
            max: i64::MAX / 100,
        });
    }

    Ok(Money::from_cents(cents as i64))
}

/// Reads a raw value as a number, rejecting strings, null, and the rest.
pub fn parse_number(value: &Value) -> Option<f64> {
    value.as_f64().filter(|n| n.is_finite())
}

fn wrong_type(field: &str, expected: &str) -> ValidationError {
    ValidationError::WrongType {
        field: field.to_string(),
        expected: expected.to_string(),
    }
}

// =============================================================================
// Price Validators
// =============================================================================

/// Checks `min <= price <= max` (both bounds inclusive).
///
/// ## Example
/// ```rust
/// use shopkit_core::money::Money;
/// use shopkit_core::validation::is_price_in_range;
///
/// let min = Money::zero();
/// let max = Money::from_dollars(100);
/// assert!(is_price_in_range(Money::zero(), min, max));
/// assert!(is_price_in_range(max, min, max));
/// assert!(!is_price_in_range(Money::from_dollars(-20), min, max));
/// ```
pub fn is_price_in_range(price: Money, min: Money, max: Money) -> bool {
    min <= price && price <= max
}

// =============================================================================
// String Validators
// =============================================================================

/// Checks that a username is 5 to 15 characters long (inclusive).
///
/// Length counts characters, not bytes.
pub fn is_valid_username(name: &str) -> bool {
    let len = name.chars().count();
    (USERNAME_MIN_LENGTH..=USERNAME_MAX_LENGTH).contains(&len)
}

/// Same as [`is_valid_username`] for untyped input; anything that is not a
/// string is invalid.
pub fn is_valid_username_value(name: &Value) -> bool {
    name.as_str().map(is_valid_username).unwrap_or(false)
}

/// Checks password strength.
///
/// ## Rules
/// - At least 8 characters
/// - At least one uppercase letter, one lowercase letter, one digit
/// - At least one symbol (anything that is not alphanumeric or whitespace)
///
/// ## Example
/// ```rust
/// use shopkit_core::validation::is_strong_password;
///
/// assert!(is_strong_password("Sup3r$ecret"));
/// assert!(!is_strong_password("abcd"));
/// assert!(!is_strong_password("password1!"));
/// ```
pub fn is_strong_password(password: &str) -> bool {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return false;
    }

    let has_upper = password.chars().any(|c| c.is_uppercase());
    let has_lower = password.chars().any(|c| c.is_lowercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_symbol = password
        .chars()
        .any(|c| !c.is_alphanumeric() && !c.is_whitespace());

    has_upper && has_lower && has_digit && has_symbol
}

// =============================================================================
// Driving Age
// =============================================================================

/// Countries with a known minimum driving age.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CountryCode {
    Us,
    Uk,
}

impl CountryCode {
    /// Minimum age at which a licence can be held.
    pub const fn min_driving_age(&self) -> u32 {
        match self {
            CountryCode::Us => 16,
            CountryCode::Uk => 17,
        }
    }
}

impl FromStr for CountryCode {
    type Err = ValidationError;

    /// Codes are matched exactly: `"US"` and `"UK"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "US" => Ok(CountryCode::Us),
            "UK" => Ok(CountryCode::Uk),
            other => Err(ValidationError::InvalidCountry(other.to_string())),
        }
    }
}

/// Checks whether someone of `age` may drive in `country_code`.
///
/// ## Rules
/// ```text
/// country_code ──► recognised? ──no──► Err(InvalidCountry)
///                      │
///                     yes
///                      ▼
/// age ──► a number? ──no──► Ok(false)
///              │
///             yes
///              ▼
///     Ok(age >= minimum)
/// ```
pub fn can_drive(age: &Value, country_code: &str) -> ValidationResult<bool> {
    let country: CountryCode = country_code.parse()?;

    Ok(parse_number(age)
        .map(|age| age >= country.min_driving_age() as f64)
        .unwrap_or(false))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_price() {
        assert_eq!(parse_price(&json!(10), "price"), Ok(Money::from_cents(1000)));
        assert_eq!(parse_price(&json!(0), "price"), Ok(Money::zero()));
        assert_eq!(parse_price(&json!(10.99), "price"), Ok(Money::from_cents(1099)));

        assert!(matches!(
            parse_price(&json!(-10), "price"),
            Err(ValidationError::Negative { .. })
        ));
        assert!(matches!(
            parse_price(&json!("10"), "price"),
            Err(ValidationError::WrongType { .. })
        ));
        assert!(matches!(
            parse_price(&Value::Null, "price"),
            Err(ValidationError::Required { .. })
        ));
    }

    #[test]
    fn test_parse_price_rejects_overflow() {
        assert!(matches!(
            parse_price(&json!(1e30), "price"),
            Err(ValidationError::OutOfRange { .. })
        ));
        assert!(matches!(
            parse_price(&json!(92_233_720_368_547_758.08), "price"),
            Err(ValidationError::OutOfRange { .. })
        ));
        assert_eq!(
            parse_price(&json!(1e15), "price"),
            Ok(Money::from_cents(100_000_000_000_000_000))
        );
    }

    #[test]
    fn test_is_price_in_range() {
        let cases = [
            // (price, min, max, expected)
            (-20, 0, 100, false), // price < min
            (0, 0, 100, true),    // price = min
            (42, 0, 100, true),   // between
            (200, 0, 200, true),  // price = max
            (300, 0, 200, false), // price > max
        ];

        for (price, min, max, expected) in cases {
            assert_eq!(
                is_price_in_range(
                    Money::from_dollars(price),
                    Money::from_dollars(min),
                    Money::from_dollars(max)
                ),
                expected,
                "price={} min={} max={}",
                price,
                min,
                max
            );
        }
    }

    #[test]
    fn test_is_valid_username_bounds() {
        assert!(!is_valid_username("w"));
        assert!(!is_valid_username(&"w".repeat(16)));
        assert!(is_valid_username(&"w".repeat(5)));
        assert!(is_valid_username(&"w".repeat(15)));
        assert!(is_valid_username(&"w".repeat(8)));
    }

    #[test]
    fn test_is_valid_username_counts_chars() {
        // 5 characters, 10 bytes
        assert!(is_valid_username("ééééé"));
    }

    #[test]
    fn test_is_valid_username_non_string() {
        assert!(!is_valid_username_value(&Value::Null));
        assert!(!is_valid_username_value(&json!(3)));
        assert!(!is_valid_username_value(&json!(["alice"])));
        assert!(is_valid_username_value(&json!("alice")));
    }

    #[test]
    fn test_is_strong_password() {
        assert!(is_strong_password("Abcdef1!"));
        assert!(!is_strong_password("Abc1!"));
        assert!(!is_strong_password("abcdefg1!"));
        assert!(!is_strong_password("ABCDEFG1!"));
        assert!(!is_strong_password("Abcdefgh!"));
        assert!(!is_strong_password("Abcdefgh1"));
    }

    #[test]
    fn test_can_drive_by_country() {
        let cases = [
            (15, "US", false),
            (16, "US", true),
            (17, "US", true),
            (16, "UK", false),
            (17, "UK", true),
            (18, "UK", true),
            (200, "US", true),
            (200, "UK", true),
        ];

        for (age, country, expected) in cases {
            assert_eq!(can_drive(&json!(age), country), Ok(expected), "{} {}", age, country);
        }
    }

    #[test]
    fn test_can_drive_unknown_country() {
        let err = can_drive(&json!(16), "USA").unwrap_err();
        assert_eq!(err, ValidationError::InvalidCountry("USA".to_string()));
        assert!(err.to_string().to_lowercase().contains("invalid"));
    }

    #[test]
    fn test_can_drive_non_numeric_age() {
        assert_eq!(can_drive(&json!("200"), "US"), Ok(false));
        assert_eq!(can_drive(&Value::Null, "UK"), Ok(false));
    }

    #[test]
    fn test_country_code_min_age() {
        assert_eq!("US".parse::<CountryCode>().unwrap().min_driving_age(), 16);
        assert_eq!("UK".parse::<CountryCode>().unwrap().min_driving_age(), 17);
        assert!("us".parse::<CountryCode>().is_err());
    }
}
