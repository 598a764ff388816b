//! Local time utilities based on `chrono` and `chrono-tz`.
//!
//! Converts instants into civil dates of an IANA timezone, honouring the
//! zone's DST rules for that instant.
//!
//! # Provided Functions
//! - [`parse_timezone`]: Parses an IANA name such as `"Europe/Oslo"`.
//! - [`date_in_zone`]: The civil date of a given UTC instant in a zone.

use anyhow::{Result, anyhow};
use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;
use std::str::FromStr;

/// Parses an IANA timezone name.
///
/// Surrounding whitespace is ignored; the name itself is case-sensitive.
pub fn parse_timezone(tz_name: &str) -> Result<Tz> {
    Tz::from_str(tz_name.trim()).map_err(|_| anyhow!("Invalid timezone name: {}", tz_name))
}

/// Returns the calendar date of `instant` as seen on a wall clock in `tz`.
///
/// ## Example
/// ```
/// use chrono::{NaiveDate, TimeZone, Utc};
/// use datelock::time::local::date_in_zone;
///
/// // 23:30 UTC on 29 March is already 30 March in Oslo (UTC+1).
/// let instant = Utc.with_ymd_and_hms(2025, 3, 29, 23, 30, 0).unwrap();
/// let date = date_in_zone(instant, chrono_tz::Europe::Oslo);
/// assert_eq!(date, NaiveDate::from_ymd_opt(2025, 3, 30).unwrap());
/// ```
pub fn date_in_zone(instant: DateTime<Utc>, tz: Tz) -> NaiveDate {
    instant.with_timezone(&tz).date_naive()
}
