use chrono::NaiveDate;

/// A port that provides the **current date** for the application.
///
/// # Purpose
/// The verifier compares "today" against a configured target date. Reading
/// today through this trait keeps the comparison independent of the OS clock,
/// so tests can pin any calendar day.
///
/// # Typical Implementations
/// - [`SystemClock`](crate::time::system_clock::SystemClock): OS clock in a configured IANA timezone
/// - [`FixedClock`]: a constant date
pub trait Clock: Send + Sync {
    /// Returns today's date as a [`NaiveDate`].
    fn today(&self) -> NaiveDate;
}

/// A [`Clock`] that always returns the same date.
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use datelock::time::clock::{Clock, FixedClock};
///
/// let date = NaiveDate::from_ymd_opt(2025, 4, 26).unwrap();
/// assert_eq!(FixedClock::new(date).today(), date);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedClock {
    date: NaiveDate,
}

impl FixedClock {
    pub fn new(date: NaiveDate) -> Self {
        Self { date }
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.date
    }
}
