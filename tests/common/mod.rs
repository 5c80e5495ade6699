//! Helpers for integration tests.

use catalog_category::domain::category::{Category, NewCategory};

/// Builds a string of exactly `len` characters.
pub fn text_of_len(len: usize) -> String {
    "x".repeat(len)
}

/// Category used as the starting point for update scenarios.
pub fn sample_category() -> Category {
    Category::create(NewCategory::new("Category Name", "Category Description"))
        .expect("sample category should be valid")
}
