use crate::domain::{Category, FALLBACK_COLOR};

/// Read-side helpers over the category collection. Categories are seeded at
/// store construction and never mutated by the core afterwards.
pub struct CategoryService;

impl CategoryService {
    /// Finds a category by exact name.
    pub fn find_by_name<'a>(categories: &'a [Category], name: &str) -> Option<&'a Category> {
        categories.iter().find(|category| category.name == name)
    }

    /// Display color for a category name. Dangling references (an expense
    /// category with no matching record) fall back to a neutral color
    /// rather than erroring.
    pub fn color_for(categories: &[Category], name: &str) -> String {
        Self::find_by_name(categories, name)
            .map(|category| category.color.clone())
            .unwrap_or_else(|| FALLBACK_COLOR.to_string())
    }
}
