//! # Clock
//!
//! Source of "now" for time-dependent storefront rules.
//!
//! ```text
//! Storefront::is_online() ──► clock.now() ──► BusinessHours::is_open_at(time)
//! Storefront::get_discount() ──► clock.now() ──► holiday_discount(date)
//! ```
//! Production uses [`SystemClock`]; tests pin time with [`FixedClock`].

use std::sync::RwLock;

use chrono::{Local, NaiveDateTime};

/// Provides the current local date and time.
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

/// Reads the machine's local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock that stays where it is put.
#[derive(Debug)]
pub struct FixedClock {
    now: RwLock<NaiveDateTime>,
}

impl FixedClock {
    pub fn new(now: NaiveDateTime) -> Self {
        FixedClock {
            now: RwLock::new(now),
        }
    }

    /// Parses `YYYY-MM-DD HH:MM`.
    pub fn at(s: &str) -> Option<Self> {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M")
            .ok()
            .map(FixedClock::new)
    }

    /// Moves the clock.
    pub fn set(&self, now: NaiveDateTime) {
        match self.now.write() {
            Ok(mut guard) => *guard = now,
            Err(poisoned) => *poisoned.into_inner() = now,
        }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        match self.now.read() {
            Ok(guard) => *guard,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_fixed_clock_parse_and_set() {
        let clock = FixedClock::at("2024-10-10 07:59").unwrap();
        assert_eq!(clock.now().hour(), 7);
        assert_eq!(clock.now().minute(), 59);

        let later = NaiveDateTime::parse_from_str("2024-12-25 00:01", "%Y-%m-%d %H:%M").unwrap();
        clock.set(later);
        assert_eq!(clock.now().month(), 12);
        assert_eq!(clock.now().day(), 25);
    }

    #[test]
    fn test_fixed_clock_rejects_bad_input() {
        assert!(FixedClock::at("yesterday").is_none());
    }

    #[test]
    fn test_system_clock_moves_forward() {
        let clock = SystemClock;
        let first = clock.now();
        assert!(clock.now() >= first);
    }
}
