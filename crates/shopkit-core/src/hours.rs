//! # Business Hours
//!
//! Decides whether the store is online at a given time of day.
//!
//! The current time is always passed in. Reading the clock is the
//! caller's job, which keeps this module deterministic.
//!
//! ## Boundaries
//! ```text
//!        closed          │           open            │      closed
//!  ──────────────────────●───────────────────────────●──────────────────
//!                      08:00                       20:00
//!   07:59 → false   08:00 → false   08:01 → true   19:59 → true
//!                                   20:00 → false  20:01 → false
//! ```
//! Both endpoints are excluded.

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

/// Opening and closing times of the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessHours {
    #[serde(with = "hhmm")]
    pub opening: NaiveTime,
    #[serde(with = "hhmm")]
    pub closing: NaiveTime,
}

impl BusinessHours {
    pub fn new(opening: NaiveTime, closing: NaiveTime) -> Self {
        BusinessHours { opening, closing }
    }

    /// True strictly after opening and strictly before closing.
    ///
    /// Only hour and minute count: 08:00:30 is still 08:00.
    ///
    /// ## Example
    /// ```rust
    /// use chrono::NaiveTime;
    /// use shopkit_core::hours::BusinessHours;
    ///
    /// let hours = BusinessHours::default();
    /// let at = |h, m| NaiveTime::from_hms_opt(h, m, 0).unwrap();
    ///
    /// assert!(!hours.is_open_at(at(7, 59)));
    /// assert!(hours.is_open_at(at(8, 1)));
    /// assert!(hours.is_open_at(at(19, 59)));
    /// assert!(!hours.is_open_at(at(20, 1)));
    /// ```
    pub fn is_open_at(&self, time: NaiveTime) -> bool {
        let time = time
            .with_second(0)
            .and_then(|t| t.with_nanosecond(0))
            .unwrap_or(time);
        self.opening < time && time < self.closing
    }
}

impl Default for BusinessHours {
    fn default() -> Self {
        BusinessHours {
            opening: NaiveTime::from_hms_opt(8, 0, 0).unwrap_or_default(),
            closing: NaiveTime::from_hms_opt(20, 0, 0).unwrap_or_default(),
        }
    }
}

/// Parses a `HH:MM` time of day.
pub fn parse_hhmm(s: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(s.trim(), hhmm::FORMAT).ok()
}

/// Serde adapter storing times as `"HH:MM"`.
pub mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub(crate) const FORMAT: &str = "%H:%M";

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&time.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let s = String::deserialize(deserializer)?;
        super::parse_hhmm(&s)
            .ok_or_else(|| serde::de::Error::custom(format!("expected HH:MM, got '{}'", s)))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
