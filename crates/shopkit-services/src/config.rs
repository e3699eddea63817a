//! # Storefront Configuration
//!
//! Configuration management for the storefront services.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     SHOPKIT_OPENING_TIME=09:00                                         │
//! │     SHOPKIT_HOLIDAY_DISCOUNT_BPS=1500                                  │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     ~/.config/storefront/storefront.toml (Linux)                       │
//! │     ~/Library/Application Support/com.shopkit.storefront/... (macOS)   │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     08:00-20:00, Christmas 20% off, home page "/home"                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! [hours]
//! opening = "08:00"
//! closing = "20:00"
//!
//! [holiday]
//! month = 12
//! day = 25
//! discount_bps = 2000
//!
//! [analytics]
//! home_path = "/home"
//!
//! [email]
//! welcome_message = "Welcome aboard!"
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use shopkit_core::hours::{parse_hhmm, BusinessHours};
use shopkit_core::pricing::HolidayPromotion;
use std::path::PathBuf;
use tracing::{debug, info, warn};

use crate::error::{ServiceError, ServiceResult};

// =============================================================================
// Section Settings
// =============================================================================

/// Page tracking settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticsSettings {
    /// Path reported when the home page is rendered.
    #[serde(default = "default_home_path")]
    pub home_path: String,
}

fn default_home_path() -> String {
    "/home".to_string()
}

impl Default for AnalyticsSettings {
    fn default() -> Self {
        AnalyticsSettings {
            home_path: default_home_path(),
        }
    }
}

/// Outgoing email settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailSettings {
    /// Body of the email sent after a successful sign-up.
    #[serde(default = "default_welcome_message")]
    pub welcome_message: String,
}

fn default_welcome_message() -> String {
    "Welcome aboard!".to_string()
}

impl Default for EmailSettings {
    fn default() -> Self {
        EmailSettings {
            welcome_message: default_welcome_message(),
        }
    }
}

// =============================================================================
// Main Storefront Configuration
// =============================================================================

/// Complete storefront configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorefrontConfig {
    /// When the store is online.
    #[serde(default)]
    pub hours: BusinessHours,

    /// Yearly one-day promotion.
    #[serde(default)]
    pub holiday: HolidayPromotion,

    #[serde(default)]
    pub analytics: AnalyticsSettings,

    #[serde(default)]
    pub email: EmailSettings,
}

impl StorefrontConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (storefront.toml)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> ServiceResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading storefront config from file");
                let contents = std::fs::read_to_string(&path)?;
                config = toml::from_str(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns default if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load storefront config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Saves configuration to file.
    pub fn save(&self, config_path: Option<PathBuf>) -> ServiceResult<()> {
        let path = config_path
            .or_else(Self::default_config_path)
            .ok_or_else(|| ServiceError::ConfigSaveFailed("No config path available".into()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        std::fs::write(&path, contents)?;

        info!(?path, "Storefront config saved");
        Ok(())
    }

    /// Validates the configuration.
    pub fn validate(&self) -> ServiceResult<()> {
        if self.hours.opening >= self.hours.closing {
            return Err(ServiceError::InvalidConfig(format!(
                "opening time {} must be before closing time {}",
                self.hours.opening.format("%H:%M"),
                self.hours.closing.format("%H:%M")
            )));
        }

        // 2024 is a leap year, so Feb 29 is accepted
        if NaiveDate::from_ymd_opt(2024, self.holiday.month, self.holiday.day).is_none() {
            return Err(ServiceError::InvalidConfig(format!(
                "holiday {}-{} is not a calendar date",
                self.holiday.month, self.holiday.day
            )));
        }

        if self.holiday.discount_bps > 10000 {
            return Err(ServiceError::InvalidConfig(
                "holiday discount_bps must be at most 10000".into(),
            ));
        }

        if !self.analytics.home_path.starts_with('/') {
            return Err(ServiceError::InvalidConfig(format!(
                "home_path must start with '/', got: {}",
                self.analytics.home_path
            )));
        }

        Ok(())
    }

    /// Applies environment variable overrides.
    fn apply_env_overrides(&mut self) {
        if let Ok(value) = std::env::var("SHOPKIT_OPENING_TIME") {
            match parse_hhmm(&value) {
                Some(time) => {
                    debug!(opening = %value, "Overriding opening time from environment");
                    self.hours.opening = time;
                }
                None => warn!(value = %value, "Ignoring SHOPKIT_OPENING_TIME, expected HH:MM"),
            }
        }

        if let Ok(value) = std::env::var("SHOPKIT_CLOSING_TIME") {
            match parse_hhmm(&value) {
                Some(time) => {
                    debug!(closing = %value, "Overriding closing time from environment");
                    self.hours.closing = time;
                }
                None => warn!(value = %value, "Ignoring SHOPKIT_CLOSING_TIME, expected HH:MM"),
            }
        }

        if let Ok(value) = std::env::var("SHOPKIT_HOLIDAY_DISCOUNT_BPS") {
            match value.trim().parse::<u32>() {
                Ok(bps) => {
                    debug!(discount_bps = bps, "Overriding holiday discount from environment");
                    self.holiday.discount_bps = bps;
                }
                Err(_) => warn!(
                    value = %value,
                    "Ignoring SHOPKIT_HOLIDAY_DISCOUNT_BPS, expected basis points"
                ),
            }
        }

        if let Ok(path) = std::env::var("SHOPKIT_HOME_PATH") {
            self.analytics.home_path = path;
        }
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "shopkit", "storefront")
            .map(|dirs| dirs.config_dir().join("storefront.toml"))
    }
}
