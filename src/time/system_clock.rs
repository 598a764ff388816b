use chrono::{NaiveDate, Utc};
use chrono_tz::Tz;

use crate::time::clock::Clock;
use crate::time::local::date_in_zone;

/// A [`Clock`] implementation backed by the system clock.
///
/// # Overview
/// `SystemClock` provides the current date based on the operating system's
/// current time converted into a configured IANA timezone.
///
/// # Design Notes
/// - The timezone arrives already parsed (see
///   [`VerifyConfig`](crate::config::verify::VerifyConfig)), so an invalid
///   name is a startup error and never surfaces on a request.
/// - Selecting the timezone is the responsibility of the composition root
///   (see `main.rs`).
#[derive(Clone, Copy, Debug)]
pub struct SystemClock {
    tz: Tz,
}

impl SystemClock {
    pub fn with_tz(tz: Tz) -> Self {
        Self { tz }
    }
}

impl Clock for SystemClock {
    /// Returns today's date in the configured timezone.
    fn today(&self) -> NaiveDate {
        date_in_zone(Utc::now(), self.tz)
    }
}
