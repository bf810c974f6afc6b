//! Pure aggregation over expense collections.
//!
//! Every function here is deterministic and side-effect free: it reads a
//! snapshot (or a pre-filtered subset) and derives numbers from it. Nothing
//! in this module mutates its inputs or touches the store.

use crate::domain::{Budget, Expense, MonthKey};

/// Derived spending state for one budget within one calendar month.
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetProgress {
    pub spent: f64,
    /// `limit - spent`; negative once the budget is exceeded.
    pub remaining: f64,
    /// Display percentage, clamped to 100. Callers needing the raw ratio
    /// must recompute it from `spent` and the budget limit.
    pub percentage: f64,
    /// Computed from the unclamped numbers, independent of `percentage`.
    pub is_over_budget: bool,
}

/// Filters `expenses` down to those dated inside `month`, preserving the
/// input order.
pub fn month_expenses(expenses: &[Expense], month: MonthKey) -> Vec<&Expense> {
    expenses
        .iter()
        .filter(|expense| month.contains(expense.date))
        .collect()
}

/// Sums the amounts of expenses whose category matches `name` exactly
/// (case-sensitive). An empty subsequence sums to 0.
pub fn category_total<'a, I>(expenses: I, name: &str) -> f64
where
    I: IntoIterator<Item = &'a Expense>,
{
    expenses
        .into_iter()
        .filter(|expense| expense.category == name)
        .map(|expense| expense.amount)
        .sum()
}

/// Sums all expense amounts.
pub fn total_spent<'a, I>(expenses: I) -> f64
where
    I: IntoIterator<Item = &'a Expense>,
{
    expenses.into_iter().map(|expense| expense.amount).sum()
}

/// Computes spending progress for `budget` within `month`.
///
/// Precondition: `budget.limit > 0`. The budget creation path guarantees
/// this; a zero limit would divide by zero here.
pub fn budget_progress(expenses: &[Expense], budget: &Budget, month: MonthKey) -> BudgetProgress {
    let spent = category_total(month_expenses(expenses, month), &budget.category);
    let remaining = budget.limit - spent;
    let percentage = (spent / budget.limit * 100.0).min(100.0);

    BudgetProgress {
        spent,
        remaining,
        percentage,
        is_over_budget: spent > budget.limit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample_date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_expenses() -> Vec<Expense> {
        vec![
            Expense::new(50.0, "Food & Dining", "groceries", sample_date(2024, 1, 5)),
            Expense::new(30.0, "Food & Dining", "lunch", sample_date(2024, 1, 20)),
            Expense::new(20.0, "Travel", "bus pass", sample_date(2024, 2, 1)),
        ]
    }

    #[test]
    fn category_total_matches_exactly() {
        let expenses = sample_expenses();
        assert_eq!(category_total(&expenses, "Food & Dining"), 80.0);
        assert_eq!(category_total(&expenses, "Travel"), 20.0);
        assert_eq!(category_total(&expenses, "food & dining"), 0.0);

        let empty: Vec<Expense> = Vec::new();
        assert_eq!(category_total(&empty, "Food & Dining"), 0.0);
    }

    #[test]
    fn month_filter_preserves_order() {
        let expenses = sample_expenses();
        let january = month_expenses(&expenses, "2024-01".parse().unwrap());
        assert_eq!(january.len(), 2);
        assert_eq!(january[0].description, "groceries");
        assert_eq!(january[1].description, "lunch");
        assert_eq!(total_spent(january), 80.0);

        let february = month_expenses(&expenses, "2024-02".parse().unwrap());
        assert_eq!(february.len(), 1);
        assert_eq!(total_spent(february), 20.0);
    }

    #[test]
    fn progress_clamps_percentage_but_not_remaining() {
        let expenses = vec![
            Expense::new(120.0, "Food & Dining", "feast", sample_date(2024, 1, 10)),
        ];
        let budget = Budget::new("Food & Dining", 100.0);
        let progress = budget_progress(&expenses, &budget, "2024-01".parse().unwrap());
        assert_eq!(progress.spent, 120.0);
        assert_eq!(progress.remaining, -20.0);
        assert_eq!(progress.percentage, 100.0);
        assert!(progress.is_over_budget);
    }

    #[test]
    fn progress_ignores_other_months() {
        let expenses = sample_expenses();
        let budget = Budget::new("Travel", 50.0);
        let progress = budget_progress(&expenses, &budget, "2024-01".parse().unwrap());
        assert_eq!(progress.spent, 0.0);
        assert_eq!(progress.remaining, 50.0);
        assert_eq!(progress.percentage, 0.0);
        assert!(!progress.is_over_budget);
    }
}
