//! # Verification Configuration
//!
//! Holds the expected secret, the target date and the timezone in which
//! "today" is evaluated.
//!
//! The configuration reads from environment variables:
//! - `VERIFY_SECRET` — expected password, compared verbatim (default `the password..`)
//! - `VERIFY_TARGET_DATE` — `YYYY-MM-DD` (default `2025-04-26`)
//! - `VERIFY_TIMEZONE` — IANA timezone name (default `Europe/Oslo`)
//!
//! # Examples
//! ```rust
//! use datelock::config::verify::VerifyConfig;
//!
//! let cfg = VerifyConfig::from_env_with(|_| None).unwrap();
//! assert_eq!(cfg.secret, "the password..");
//! assert_eq!(cfg.target_date.to_string(), "2025-04-26");
//! assert_eq!(cfg.timezone, chrono_tz::Europe::Oslo);
//! ```

use std::fmt;

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use chrono_tz::Tz;

use crate::config::env::read_string_from;
use crate::time::local::parse_timezone;

pub const DEFAULT_SECRET: &str = "the password..";
pub const DEFAULT_TARGET_DATE: &str = "2025-04-26";
pub const DEFAULT_TIMEZONE: &str = "Europe/Oslo";

/// Immutable verification settings, loaded once at startup.
#[derive(Clone, PartialEq, Eq)]
pub struct VerifyConfig {
    pub secret: String,
    pub target_date: NaiveDate,
    pub timezone: Tz,
}

impl VerifyConfig {
    /// Loads configuration using a custom key provider (for testing/mocking).
    ///
    /// # Errors
    /// - `VERIFY_SECRET` is set but empty
    /// - `VERIFY_TARGET_DATE` is not a `YYYY-MM-DD` date
    /// - `VERIFY_TIMEZONE` is not a known IANA timezone
    pub fn from_env_with<F>(get: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let secret = read_string_from(&get, "VERIFY_SECRET", DEFAULT_SECRET);
        if secret.is_empty() {
            bail!("VERIFY_SECRET must not be empty");
        }

        let raw_date = read_string_from(&get, "VERIFY_TARGET_DATE", DEFAULT_TARGET_DATE);
        let target_date = parse_target_date(&raw_date)?;

        let raw_tz = read_string_from(&get, "VERIFY_TIMEZONE", DEFAULT_TIMEZONE);
        let timezone = parse_timezone(&raw_tz).context("VERIFY_TIMEZONE")?;

        Ok(Self {
            secret,
            target_date,
            timezone,
        })
    }
}

impl Default for VerifyConfig {
    fn default() -> Self {
        Self {
            secret: DEFAULT_SECRET.to_string(),
            target_date: NaiveDate::from_ymd_opt(2025, 4, 26).unwrap_or_default(),
            timezone: chrono_tz::Europe::Oslo,
        }
    }
}

// The secret never reaches logs through `{:?}`.
impl fmt::Debug for VerifyConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VerifyConfig")
            .field("secret", &"<redacted>")
            .field("target_date", &self.target_date)
            .field("timezone", &self.timezone)
            .finish()
    }
}

/// Parses a strict ISO `YYYY-MM-DD` calendar date.
pub fn parse_target_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .with_context(|| format!("VERIFY_TARGET_DATE is not a YYYY-MM-DD date: {raw:?}"))
}
