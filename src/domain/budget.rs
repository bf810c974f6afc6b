//! Domain type representing a monthly spending ceiling for one category.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::{BudgetPeriod, Identifiable};

/// A spending guardrail for a specific category. At most one budget exists
/// per category value; the creation path enforces that, not this type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Budget {
    pub id: Uuid,
    /// Loose string reference to `Category::name`.
    pub category: String,
    /// Spending ceiling for one period. Always `> 0` for budgets built
    /// through the creation path.
    pub limit: f64,
    pub period: BudgetPeriod,
    pub created_at: DateTime<Utc>,
}

impl Budget {
    pub fn new(category: impl Into<String>, limit: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            category: category.into(),
            limit,
            period: BudgetPeriod::Monthly,
            created_at: Utc::now(),
        }
    }
}

impl Identifiable for Budget {
    fn id(&self) -> Uuid {
        self.id
    }
}
