mod common;

use common::{date, january_clock, open_store, spend};
use finance_core::core::aggregate::{budget_progress, category_total, month_expenses, total_spent};
use finance_core::core::services::BudgetService;
use finance_core::domain::{Budget, Expense, MonthKey};

fn sample_expenses() -> Vec<Expense> {
    vec![
        Expense::new(50.0, "Food", "groceries", date(2024, 1, 5)),
        Expense::new(30.0, "Food", "lunch", date(2024, 1, 20)),
        Expense::new(20.0, "Travel", "bus pass", date(2024, 2, 1)),
    ]
}

#[test]
fn category_total_sums_exact_matches_only() {
    let expenses = sample_expenses();
    assert_eq!(category_total(&expenses, "Food"), 80.0);
    assert_eq!(category_total(&expenses, "Travel"), 20.0);
    assert_eq!(category_total(&expenses, "food"), 0.0);
    assert_eq!(category_total(&expenses, "Rent"), 0.0);

    let empty: Vec<Expense> = Vec::new();
    assert_eq!(category_total(&empty, "Food"), 0.0);
}

#[test]
fn month_filter_selects_by_calendar_month_preserving_order() {
    let expenses = sample_expenses();

    let january = month_expenses(&expenses, "2024-01".parse().unwrap());
    assert_eq!(january.len(), 2);
    assert_eq!(january[0].amount, 50.0);
    assert_eq!(january[1].amount, 30.0);
    assert_eq!(total_spent(january), 80.0);

    let february = month_expenses(&expenses, "2024-02".parse().unwrap());
    assert_eq!(february.len(), 1);
    assert_eq!(total_spent(february), 20.0);

    let march = month_expenses(&expenses, "2024-03".parse().unwrap());
    assert!(march.is_empty());
}

#[test]
fn overspent_budget_reports_clamped_percentage_and_negative_remaining() {
    let expenses = vec![
        Expense::new(70.0, "Food", "groceries", date(2024, 1, 3)),
        Expense::new(50.0, "Food", "dinner", date(2024, 1, 28)),
    ];
    let budget = Budget::new("Food", 100.0);

    let progress = budget_progress(&expenses, &budget, "2024-01".parse().unwrap());
    assert_eq!(progress.spent, 120.0);
    assert_eq!(progress.remaining, -20.0);
    assert_eq!(progress.percentage, 100.0);
    assert!(progress.is_over_budget);
}

#[test]
fn percentage_stays_within_display_bounds() {
    let month: MonthKey = "2024-01".parse().unwrap();
    let budget = Budget::new("Food", 200.0);

    for spent in [0.0, 1.0, 100.0, 199.99, 200.0, 350.0, 10_000.0] {
        let expenses = if spent > 0.0 {
            vec![Expense::new(spent, "Food", "", date(2024, 1, 10))]
        } else {
            Vec::new()
        };
        let progress = budget_progress(&expenses, &budget, month);
        assert!(
            (0.0..=100.0).contains(&progress.percentage),
            "percentage {} out of bounds for spent {spent}",
            progress.percentage
        );
        assert_eq!(progress.is_over_budget, progress.spent > budget.limit);
    }
}

#[test]
fn exactly_at_limit_is_not_over_budget() {
    let expenses = vec![Expense::new(100.0, "Food", "", date(2024, 1, 10))];
    let budget = Budget::new("Food", 100.0);

    let progress = budget_progress(&expenses, &budget, "2024-01".parse().unwrap());
    assert_eq!(progress.percentage, 100.0);
    assert_eq!(progress.remaining, 0.0);
    assert!(!progress.is_over_budget);
}

#[test]
fn service_progress_matches_pure_computation() {
    let mut store = open_store();
    let budget = BudgetService::add(&mut store, "Food", 100.0).unwrap();
    spend(&mut store, 70.0, "Food", date(2024, 1, 3));
    spend(&mut store, 50.0, "Food", date(2024, 1, 28));
    spend(&mut store, 15.0, "Food", date(2023, 12, 30));

    let progress = BudgetService::progress(&store, &budget, &january_clock()).unwrap();
    assert_eq!(progress.spent, 120.0);
    assert_eq!(progress.remaining, -20.0);
    assert_eq!(progress.percentage, 100.0);
    assert!(progress.is_over_budget);
}
