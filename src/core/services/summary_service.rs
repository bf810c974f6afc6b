use std::cmp::Ordering;

use crate::core::aggregate;
use crate::core::time::Clock;
use crate::currency::month_label;
use crate::domain::MonthKey;
use crate::store::{KeyValueStore, TrackerStore};

use super::ServiceResult;

/// Number of calendar months covered by the monthly trend series, ending at
/// the current month inclusive.
pub const TREND_WINDOW_MONTHS: u32 = 6;

/// Aggregate dashboard numbers for the clock's current month.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSummary {
    pub month: MonthKey,
    pub total_spent: f64,
    /// Percent change versus the previous calendar month. Exactly 0 when
    /// the previous month has no spend, regardless of the current total.
    pub monthly_change_percent: f64,
    pub transaction_count: usize,
    /// Mean amount per current-month transaction; `None` when the month has
    /// no transactions.
    pub average_transaction: Option<f64>,
    pub budgets: BudgetStanding,
}

/// Budget position on the dashboard. `NoBudgets` is a distinct state so the
/// presentation layer never renders a percentage of an undefined total.
#[derive(Debug, Clone, PartialEq)]
pub enum BudgetStanding {
    NoBudgets,
    Tracked {
        total_limit: f64,
        /// `total_limit - total_spent`; negative when overspent.
        remaining: f64,
        percent_remaining: f64,
    },
}

/// The category with the highest current-month spend.
#[derive(Debug, Clone, PartialEq)]
pub struct TopCategory {
    pub name: String,
    pub total: f64,
}

/// One slice of the by-category trend series.
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySlice {
    pub name: String,
    pub amount: f64,
    pub color: String,
}

/// One point of the monthly trend series.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyPoint {
    pub month: MonthKey,
    /// Chart label, e.g. `Jan 2024`.
    pub label: String,
    pub total: f64,
}

/// Read-only derived views composed from the aggregation functions and
/// consumed directly by presentation.
pub struct SummaryService;

impl SummaryService {
    /// Dashboard totals for the clock's current month.
    pub fn dashboard<S: KeyValueStore>(
        store: &TrackerStore<S>,
        clock: &dyn Clock,
    ) -> ServiceResult<DashboardSummary> {
        let expenses = store.expenses()?;
        let budgets = store.budgets()?;
        let month = clock.current_month();

        let current = aggregate::month_expenses(&expenses, month);
        let total_spent = aggregate::total_spent(current.iter().copied());
        let transaction_count = current.len();
        let average_transaction = if transaction_count > 0 {
            Some(total_spent / transaction_count as f64)
        } else {
            None
        };

        let previous_total =
            aggregate::total_spent(aggregate::month_expenses(&expenses, month.pred()));
        let monthly_change_percent = if previous_total > 0.0 {
            (total_spent - previous_total) / previous_total * 100.0
        } else {
            0.0
        };

        let budgets = if budgets.is_empty() {
            BudgetStanding::NoBudgets
        } else {
            // Limits are validated positive at creation, so the total is
            // always a usable divisor here.
            let total_limit: f64 = budgets.iter().map(|budget| budget.limit).sum();
            let remaining = total_limit - total_spent;
            BudgetStanding::Tracked {
                total_limit,
                remaining,
                percent_remaining: remaining / total_limit * 100.0,
            }
        };

        Ok(DashboardSummary {
            month,
            total_spent,
            monthly_change_percent,
            transaction_count,
            average_transaction,
            budgets,
        })
    }

    /// The category with the highest spend in the clock's current month.
    /// Ties break toward the category appearing first in the stored
    /// category collection. `None` when the month has no categorised spend.
    pub fn top_category<S: KeyValueStore>(
        store: &TrackerStore<S>,
        clock: &dyn Clock,
    ) -> ServiceResult<Option<TopCategory>> {
        let expenses = store.expenses()?;
        let categories = store.categories()?;
        let current = aggregate::month_expenses(&expenses, clock.current_month());

        let mut totals: Vec<TopCategory> = categories
            .iter()
            .map(|category| TopCategory {
                name: category.name.clone(),
                total: aggregate::category_total(current.iter().copied(), &category.name),
            })
            .filter(|entry| entry.total > 0.0)
            .collect();
        sort_descending_by(&mut totals, |entry| entry.total);
        Ok(totals.into_iter().next())
    }

    /// Spend per category over the entire expense history, descending by
    /// amount, categories with zero total omitted. Equal totals keep the
    /// stored category order.
    pub fn category_trend<S: KeyValueStore>(
        store: &TrackerStore<S>,
    ) -> ServiceResult<Vec<CategorySlice>> {
        let expenses = store.expenses()?;
        let categories = store.categories()?;

        let mut slices: Vec<CategorySlice> = categories
            .iter()
            .map(|category| CategorySlice {
                name: category.name.clone(),
                amount: aggregate::category_total(&expenses, &category.name),
                color: category.color.clone(),
            })
            .filter(|slice| slice.amount > 0.0)
            .collect();
        sort_descending_by(&mut slices, |slice| slice.amount);
        Ok(slices)
    }

    /// Total spend for each of the last six calendar months ending at the
    /// current month inclusive, oldest first. Months without expenses
    /// appear with a total of 0.
    pub fn monthly_trend<S: KeyValueStore>(
        store: &TrackerStore<S>,
        clock: &dyn Clock,
    ) -> ServiceResult<Vec<MonthlyPoint>> {
        let expenses = store.expenses()?;
        let window = clock.current_month().last_window(TREND_WINDOW_MONTHS);

        Ok(window
            .into_iter()
            .map(|month| MonthlyPoint {
                month,
                label: format!("{} {}", month_label(month.month()), month.year()),
                total: aggregate::total_spent(aggregate::month_expenses(&expenses, month)),
            })
            .collect())
    }
}

/// Stable descending sort on a float key; relative input order is kept for
/// equal keys. Keys are finite because amounts are validated at creation.
fn sort_descending_by<T>(items: &mut [T], key: impl Fn(&T) -> f64) {
    items.sort_by(|a, b| key(b).partial_cmp(&key(a)).unwrap_or(Ordering::Equal));
}
