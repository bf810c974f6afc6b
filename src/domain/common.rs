//! Shared traits and the calendar-month value type.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Exposes a stable identifier for entities held in the tracker store.
pub trait Identifiable {
    fn id(&self) -> Uuid;
}

/// Enumerates supported budgeting cadences. Monthly is the only cadence
/// the tracker currently supports.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BudgetPeriod {
    #[default]
    Monthly,
}

impl fmt::Display for BudgetPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BudgetPeriod::Monthly => f.write_str("Monthly"),
        }
    }
}

/// Identifies one calendar month, rendered as a zero-padded `YYYY-MM` key.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey {
    year: i32,
    month: u32,
}

impl MonthKey {
    /// Builds a key from explicit components. Returns `None` when `month`
    /// is outside `1..=12`.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        if (1..=12).contains(&month) {
            Some(Self { year, month })
        } else {
            None
        }
    }

    /// The month containing `date`.
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(self) -> i32 {
        self.year
    }

    pub fn month(self) -> u32 {
        self.month
    }

    /// Returns `true` when `date` falls inside this calendar month.
    pub fn contains(self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// The immediately preceding calendar month.
    pub fn pred(self) -> Self {
        self.minus_months(1)
    }

    /// Steps back `months` whole months, crossing year boundaries as needed.
    pub fn minus_months(self, months: u32) -> Self {
        Self::from_index(self.index() - months as i32)
    }

    /// The `n` months ending at `self` inclusive, in chronological order.
    /// `last_window(0)` is empty.
    pub fn last_window(self, n: u32) -> Vec<Self> {
        (0..n)
            .rev()
            .map(|offset| self.minus_months(offset))
            .collect()
    }

    fn index(self) -> i32 {
        self.year * 12 + self.month as i32 - 1
    }

    fn from_index(index: i32) -> Self {
        Self {
            year: index.div_euclid(12),
            month: (index.rem_euclid(12) + 1) as u32,
        }
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Error returned when a string is not a valid `YYYY-MM` month key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseMonthKeyError;

impl fmt::Display for ParseMonthKeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("expected a month key in YYYY-MM form")
    }
}

impl std::error::Error for ParseMonthKeyError {}

impl FromStr for MonthKey {
    type Err = ParseMonthKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year_part, month_part) = s.split_once('-').ok_or(ParseMonthKeyError)?;
        let year = year_part.parse::<i32>().map_err(|_| ParseMonthKeyError)?;
        let month = month_part.parse::<u32>().map_err(|_| ParseMonthKeyError)?;
        MonthKey::new(year, month).ok_or(ParseMonthKeyError)
    }
}
