use uuid::Uuid;

use crate::core::aggregate::{self, BudgetProgress};
use crate::core::time::Clock;
use crate::domain::Budget;
use crate::store::{KeyValueStore, TrackerStore};

use super::{ServiceError, ServiceResult};

/// Creation, removal, and progress reporting for budgets.
pub struct BudgetService;

impl BudgetService {
    /// Validates and records a new monthly budget. At most one budget may
    /// exist per category value; the match is exact and case-sensitive,
    /// like the category references themselves.
    pub fn add<S: KeyValueStore>(
        store: &mut TrackerStore<S>,
        category: &str,
        limit: f64,
    ) -> ServiceResult<Budget> {
        Self::validate_limit(limit)?;
        if category.trim().is_empty() {
            return Err(ServiceError::Invalid(
                "Budget category must not be empty".into(),
            ));
        }
        if store
            .budgets()?
            .iter()
            .any(|budget| budget.category == category)
        {
            return Err(ServiceError::Invalid(format!(
                "A budget already exists for `{category}`"
            )));
        }
        let budget = Budget::new(category, limit);
        store.append_budget(&budget)?;
        tracing::debug!(id = %budget.id, category, limit, "budget created");
        Ok(budget)
    }

    /// Removes a budget by id.
    pub fn remove<S: KeyValueStore>(store: &mut TrackerStore<S>, id: Uuid) -> ServiceResult<()> {
        if store.remove_budget(id)? {
            tracing::debug!(%id, "budget removed");
            Ok(())
        } else {
            Err(ServiceError::NotFound(format!("Budget {id}")))
        }
    }

    /// Progress for one budget in the clock's current month.
    pub fn progress<S: KeyValueStore>(
        store: &TrackerStore<S>,
        budget: &Budget,
        clock: &dyn Clock,
    ) -> ServiceResult<BudgetProgress> {
        let expenses = store.expenses()?;
        Ok(aggregate::budget_progress(
            &expenses,
            budget,
            clock.current_month(),
        ))
    }

    /// Progress for every stored budget, in stored order.
    pub fn progress_all<S: KeyValueStore>(
        store: &TrackerStore<S>,
        clock: &dyn Clock,
    ) -> ServiceResult<Vec<(Budget, BudgetProgress)>> {
        let expenses = store.expenses()?;
        let month = clock.current_month();
        Ok(store
            .budgets()?
            .into_iter()
            .map(|budget| {
                let progress = aggregate::budget_progress(&expenses, &budget, month);
                (budget, progress)
            })
            .collect())
    }

    fn validate_limit(limit: f64) -> ServiceResult<()> {
        if !limit.is_finite() || limit <= 0.0 {
            return Err(ServiceError::Invalid(format!(
                "Budget limit must be positive, got {limit}"
            )));
        }
        Ok(())
    }
}
