//! Domain type representing a named, colored grouping label for expenses.

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::Identifiable;

/// Color used when an expense references a category name with no matching
/// `Category` record.
pub const FALLBACK_COLOR: &str = "#6b7280";

/// Categorises expenses for budgeting and reporting.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    /// Hex display color, e.g. `#ef4444`.
    pub color: String,
    /// Symbolic icon name resolved by the presentation layer.
    pub icon: String,
    pub created_at: DateTime<Utc>,
}

impl Category {
    pub fn new(
        name: impl Into<String>,
        color: impl Into<String>,
        icon: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            color: color.into(),
            icon: icon.into(),
            created_at: Utc::now(),
        }
    }
}

impl Identifiable for Category {
    fn id(&self) -> Uuid {
        self.id
    }
}

/// Seed entry used to initialize the category collection on first load.
#[derive(Debug, Clone, Copy)]
pub struct CategorySeed {
    pub name: &'static str,
    pub color: &'static str,
    pub icon: &'static str,
}

/// The fixed default category set, created once when the category
/// collection is empty.
pub static DEFAULT_CATEGORIES: Lazy<Vec<CategorySeed>> = Lazy::new(|| {
    vec![
        CategorySeed {
            name: "Food & Dining",
            color: "#ef4444",
            icon: "fork-knife",
        },
        CategorySeed {
            name: "Transportation",
            color: "#3b82f6",
            icon: "car",
        },
        CategorySeed {
            name: "Shopping",
            color: "#8b5cf6",
            icon: "shopping-bag",
        },
        CategorySeed {
            name: "Entertainment",
            color: "#f59e0b",
            icon: "film-strip",
        },
        CategorySeed {
            name: "Bills & Utilities",
            color: "#10b981",
            icon: "receipt",
        },
        CategorySeed {
            name: "Healthcare",
            color: "#ec4899",
            icon: "heart",
        },
        CategorySeed {
            name: "Travel",
            color: "#06b6d4",
            icon: "airplane",
        },
        CategorySeed {
            name: "Other",
            color: "#6b7280",
            icon: "dots-three",
        },
    ]
});
