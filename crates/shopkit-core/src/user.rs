//! # Account Input
//!
//! Validates the username/age pair submitted when registering an account.
//!
//! Both fields are checked independently and every failure is reported,
//! so a form can show all problems at once:
//! ```text
//! ("j", 1)       → Err("Invalid username, Invalid age")
//! ("Jonny", 17)  → Err("Invalid age")
//! ("Jonny", 30)  → Ok(ValidUser) → "Validation successful"
//! ```

use serde::Serialize;
use serde_json::Value;

use crate::error::{UserInputError, UserInputIssue};
use crate::{ACCOUNT_NAME_MAX_LENGTH, ACCOUNT_NAME_MIN_LENGTH, MAX_AGE, MIN_AGE};

/// A username/age pair that passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidUser {
    pub username: String,
    pub age: u32,
}

impl ValidUser {
    /// Confirmation shown to the user.
    pub fn message(&self) -> &'static str {
        "Validation successful"
    }
}

/// Validates a raw username and age.
///
/// ## Rules
/// - username: a string of 3 to 256 characters
/// - age: a whole number from 18 to 200 (`30.0` counts, a numeric string
///   does not)
pub fn validate_user_input(username: &Value, age: &Value) -> Result<ValidUser, UserInputError> {
    let username = username.as_str().filter(|name| {
        let len = name.chars().count();
        (ACCOUNT_NAME_MIN_LENGTH..=ACCOUNT_NAME_MAX_LENGTH).contains(&len)
    });

    let age = age
        .as_f64()
        .filter(|age| age.is_finite() && age.fract() == 0.0)
        .filter(|age| (MIN_AGE as f64..=MAX_AGE as f64).contains(age))
        .map(|age| age as u32);

    match (username, age) {
        (Some(username), Some(age)) => Ok(ValidUser {
            username: username.to_string(),
            age,
        }),
        (username, age) => {
            let mut issues = Vec::with_capacity(2);
            if username.is_none() {
                issues.push(UserInputIssue::InvalidUsername);
            }
            if age.is_none() {
                issues.push(UserInputIssue::InvalidAge);
            }
            Err(UserInputError::new(issues))
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
