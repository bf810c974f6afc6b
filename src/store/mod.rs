//! State container: typed tracker collections over an opaque key-value
//! persistence seam supplied by the host.

pub mod memory;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

use crate::domain::{Budget, Category, Expense, Identifiable, DEFAULT_CATEGORIES};
use crate::errors::TrackerError;

pub use memory::MemoryStore;

pub type StoreResult<T> = Result<T, TrackerError>;

/// Keys under which the tracker collections are persisted.
pub const EXPENSES_KEY: &str = "expenses";
pub const BUDGETS_KEY: &str = "budgets";
pub const CATEGORIES_KEY: &str = "categories";

/// Abstraction over host persistence capable of storing JSON values by key.
/// Change notification stays with the host mechanism; `TrackerStore`
/// exposes a revision counter for observation instead.
pub trait KeyValueStore: Send {
    fn get(&self, key: &str) -> StoreResult<Option<Value>>;
    fn set(&mut self, key: &str, value: Value) -> StoreResult<()>;
}

/// Typed facade over a [`KeyValueStore`] holding the three tracker
/// collections. Reads return full snapshots; mutations go through
/// append/remove-by-id only.
#[derive(Debug)]
pub struct TrackerStore<S: KeyValueStore> {
    backend: S,
    revision: u64,
}

impl<S: KeyValueStore> TrackerStore<S> {
    /// Opens a store over `backend`, seeding the default categories when
    /// the category collection is empty.
    pub fn open(backend: S) -> StoreResult<Self> {
        let mut store = Self {
            backend,
            revision: 0,
        };
        let seeded = store.seed_defaults()?;
        if seeded > 0 {
            tracing::debug!(count = seeded, "seeded default categories");
        }
        Ok(store)
    }

    /// Seeds the fixed default category set. Idempotent: a non-empty
    /// category collection is left untouched. Returns the number created.
    pub fn seed_defaults(&mut self) -> StoreResult<usize> {
        if !self.categories()?.is_empty() {
            return Ok(0);
        }
        let categories: Vec<Category> = DEFAULT_CATEGORIES
            .iter()
            .map(|seed| Category::new(seed.name, seed.color, seed.icon))
            .collect();
        self.write(CATEGORIES_KEY, &categories)?;
        Ok(categories.len())
    }

    /// Monotonic counter bumped on every successful mutation. Hosts can
    /// watch it to detect change without a notification channel.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Releases the underlying backend, e.g. to hand it back to the host.
    pub fn into_inner(self) -> S {
        self.backend
    }

    pub fn expenses(&self) -> StoreResult<Vec<Expense>> {
        self.read(EXPENSES_KEY)
    }

    pub fn budgets(&self) -> StoreResult<Vec<Budget>> {
        self.read(BUDGETS_KEY)
    }

    pub fn categories(&self) -> StoreResult<Vec<Category>> {
        self.read(CATEGORIES_KEY)
    }

    pub fn append_expense(&mut self, expense: &Expense) -> StoreResult<()> {
        self.append(EXPENSES_KEY, expense)
    }

    pub fn append_budget(&mut self, budget: &Budget) -> StoreResult<()> {
        self.append(BUDGETS_KEY, budget)
    }

    /// Removes an expense by id. Returns `false` when no record matched.
    pub fn remove_expense(&mut self, id: Uuid) -> StoreResult<bool> {
        self.remove_by_id::<Expense>(EXPENSES_KEY, id)
    }

    /// Removes a budget by id. Returns `false` when no record matched.
    pub fn remove_budget(&mut self, id: Uuid) -> StoreResult<bool> {
        self.remove_by_id::<Budget>(BUDGETS_KEY, id)
    }

    fn append<T: Serialize + DeserializeOwned + Clone>(
        &mut self,
        key: &str,
        record: &T,
    ) -> StoreResult<()> {
        let mut all: Vec<T> = self.read(key)?;
        all.push(record.clone());
        self.write(key, &all)
    }

    fn remove_by_id<T: Serialize + DeserializeOwned + Identifiable>(
        &mut self,
        key: &str,
        id: Uuid,
    ) -> StoreResult<bool> {
        let mut all: Vec<T> = self.read(key)?;
        let before = all.len();
        all.retain(|record| record.id() != id);
        if all.len() == before {
            return Ok(false);
        }
        self.write(key, &all)?;
        Ok(true)
    }

    fn read<T: DeserializeOwned>(&self, key: &str) -> StoreResult<Vec<T>> {
        match self.backend.get(key)? {
            Some(value) => Ok(serde_json::from_value(value)?),
            None => Ok(Vec::new()),
        }
    }

    fn write<T: Serialize>(&mut self, key: &str, records: &[T]) -> StoreResult<()> {
        let value = serde_json::to_value(records)?;
        self.backend.set(key, value)?;
        self.revision += 1;
        Ok(())
    }
}
