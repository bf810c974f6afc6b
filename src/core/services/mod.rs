pub mod budget_service;
pub mod category_service;
pub mod expense_service;
pub mod summary_service;

pub use budget_service::BudgetService;
pub use category_service::CategoryService;
pub use expense_service::ExpenseService;
pub use summary_service::{
    BudgetStanding, CategorySlice, DashboardSummary, MonthlyPoint, SummaryService, TopCategory,
    TREND_WINDOW_MONTHS,
};

use crate::errors::TrackerError;

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Store(#[from] TrackerError),
    #[error("{0}")]
    Invalid(String),
    #[error("{0} not found")]
    NotFound(String),
}
