use chrono::NaiveDate;
use uuid::Uuid;

use crate::domain::Expense;
use crate::store::{KeyValueStore, TrackerStore};

use super::{ServiceError, ServiceResult};

/// Creation and removal path for expenses. Validation happens here so the
/// aggregation core only ever sees well-formed records.
pub struct ExpenseService;

impl ExpenseService {
    /// Validates and records a new expense, stamping id and creation time.
    pub fn add<S: KeyValueStore>(
        store: &mut TrackerStore<S>,
        amount: f64,
        category: &str,
        description: &str,
        date: NaiveDate,
    ) -> ServiceResult<Expense> {
        Self::validate_amount(amount)?;
        if category.trim().is_empty() {
            return Err(ServiceError::Invalid(
                "Expense category must not be empty".into(),
            ));
        }
        let expense = Expense::new(amount, category, description, date);
        store.append_expense(&expense)?;
        tracing::debug!(id = %expense.id, amount, category, "expense recorded");
        Ok(expense)
    }

    /// Removes an expense by id.
    pub fn remove<S: KeyValueStore>(store: &mut TrackerStore<S>, id: Uuid) -> ServiceResult<()> {
        if store.remove_expense(id)? {
            tracing::debug!(%id, "expense removed");
            Ok(())
        } else {
            Err(ServiceError::NotFound(format!("Expense {id}")))
        }
    }

    /// Expenses ordered newest-first for display. The input collection is
    /// left untouched; equal dates keep their stored order.
    pub fn list_recent(expenses: &[Expense]) -> Vec<Expense> {
        let mut sorted = expenses.to_vec();
        sorted.sort_by(|a, b| b.date.cmp(&a.date));
        sorted
    }

    fn validate_amount(amount: f64) -> ServiceResult<()> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(ServiceError::Invalid(format!(
                "Expense amount must be positive, got {amount}"
            )));
        }
        Ok(())
    }
}
