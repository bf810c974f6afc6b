use chrono::{DateTime, NaiveDate, Utc};

use crate::domain::MonthKey;

/// Clock abstracts access to the current timestamp so derived views remain
/// deterministic in tests.
pub trait Clock: Send + Sync {
    /// Returns the current UTC timestamp.
    fn now(&self) -> DateTime<Utc>;

    /// Returns the current UTC date. Defaults to `now().date_naive()`.
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }

    /// Returns the key of the calendar month containing `today()`.
    fn current_month(&self) -> MonthKey {
        MonthKey::from_date(self.today())
    }
}

/// Real-time clock backed by the system UTC time source.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock pinned to a fixed date. Lets callers derive "current month" views
/// for any reference day.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0.and_hms_opt(0, 0, 0).expect("midnight is valid").and_utc()
    }

    fn today(&self) -> NaiveDate {
        self.0
    }
}
