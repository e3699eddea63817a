//! # Product Creation
//!
//! Validates an untyped product payload and reports the outcome as a value.
//!
//! ## Outcome Shape
//! ```text
//! create_product(json) ──┬──► Success { message: "Product was successfully published" }
//!                        │
//!                        └──► Failure { error: { code: "invalid_product",
//!                                                message: "Missing or invalid product name" } }
//! ```
//! Failures are never returned as `Err`; callers branch on the variant.

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::money::Money;
use crate::validation::parse_price;

/// Error code reported for every malformed product payload.
pub const INVALID_PRODUCT: &str = "invalid_product";

/// A product that passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewProduct {
    pub name: String,
    pub price: Money,
}

impl NewProduct {
    /// Validates the raw `{ name, price }` shape.
    ///
    /// ## Rules
    /// - Payload must be an object
    /// - `name` must be a non-empty string
    /// - `price` must be a non-negative number
    pub fn from_value(value: &Value) -> Result<Self, ProductError> {
        let object = value
            .as_object()
            .ok_or_else(|| ProductError::missing("name"))?;

        let name = object
            .get("name")
            .and_then(Value::as_str)
            .filter(|name| !name.is_empty())
            .ok_or_else(|| ProductError::missing("name"))?;

        let price = object
            .get("price")
            .ok_or_else(|| ProductError::missing("price"))
            .and_then(|raw| parse_price(raw, "price").map_err(|_| ProductError::missing("price")))?;

        Ok(NewProduct {
            name: name.to_string(),
            price,
        })
    }
}

/// Structured failure carried by [`ProductOutcome::Failure`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductError {
    pub code: String,
    pub message: String,
}

impl ProductError {
    fn missing(field: &str) -> Self {
        ProductError {
            code: INVALID_PRODUCT.to_string(),
            message: format!("Missing or invalid product {}", field),
        }
    }
}

/// Result of [`create_product`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductOutcome {
    Success { message: String },
    Failure { error: ProductError },
}

impl ProductOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ProductOutcome::Success { .. })
    }

    pub fn error(&self) -> Option<&ProductError> {
        match self {
            ProductOutcome::Failure { error } => Some(error),
            ProductOutcome::Success { .. } => None,
        }
    }
}

/// Serialises with a `success` discriminant:
/// `{"success":true,"message":..}` / `{"success":false,"error":{..}}`.
impl Serialize for ProductOutcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ProductOutcome", 2)?;
        match self {
            ProductOutcome::Success { message } => {
                state.serialize_field("success", &true)?;
                state.serialize_field("message", message)?;
            }
            ProductOutcome::Failure { error } => {
                state.serialize_field("success", &false)?;
                state.serialize_field("error", error)?;
            }
        }
        state.end()
    }
}

/// Validates a product payload and publishes it.
///
/// ## Example
/// ```rust
/// use serde_json::json;
/// use shopkit_core::product::create_product;
///
/// assert!(create_product(&json!({ "name": "Jean", "price": 5 })).is_success());
/// assert!(!create_product(&json!("Jean")).is_success());
/// ```
pub fn create_product(product: &Value) -> ProductOutcome {
    match NewProduct::from_value(product) {
        Ok(_) => ProductOutcome::Success {
            message: "Product was successfully published".to_string(),
        },
        Err(error) => ProductOutcome::Failure { error },
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
