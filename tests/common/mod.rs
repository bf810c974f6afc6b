#![allow(dead_code)]

use chrono::NaiveDate;

use finance_core::core::services::ExpenseService;
use finance_core::core::time::FixedClock;
use finance_core::store::{MemoryStore, TrackerStore};

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// A store over a fresh in-memory backend, defaults seeded.
pub fn open_store() -> TrackerStore<MemoryStore> {
    TrackerStore::open(MemoryStore::new()).expect("open in-memory store")
}

/// Clock pinned to mid-January 2024, the reference month used across the
/// suites.
pub fn january_clock() -> FixedClock {
    FixedClock(date(2024, 1, 15))
}

/// Records an expense through the validating service path.
pub fn spend(
    store: &mut TrackerStore<MemoryStore>,
    amount: f64,
    category: &str,
    on: NaiveDate,
) {
    ExpenseService::add(store, amount, category, "", on).expect("record expense");
}
