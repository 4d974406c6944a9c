//! Category catalog
//!
//! Categories are stored on transactions and budgets as plain strings. This
//! table only supplies display labels and the list offered at entry time; a
//! value missing from it is still accepted everywhere and shown as-is.

/// One entry of the category catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryInfo {
    /// Stored value
    pub value: &'static str,
    /// Display label
    pub label: &'static str,
}

const fn entry(value: &'static str, label: &'static str) -> CategoryInfo {
    CategoryInfo { value, label }
}

/// The known categories, in display order
pub const CATEGORIES: &[CategoryInfo] = &[
    entry("food", "Food & Dining"),
    entry("transportation", "Transportation"),
    entry("housing", "Housing & Rent"),
    entry("utilities", "Utilities"),
    entry("entertainment", "Entertainment"),
    entry("shopping", "Shopping"),
    entry("healthcare", "Healthcare"),
    entry("education", "Education"),
    entry("travel", "Travel"),
    entry("salary", "Salary"),
    entry("investment", "Investment"),
    entry("other", "Other"),
];

/// Look up a catalog entry by stored value
pub fn find_category(value: &str) -> Option<&'static CategoryInfo> {
    CATEGORIES.iter().find(|c| c.value == value)
}

/// Display label for a category, falling back to the raw value
pub fn category_label(value: &str) -> &str {
    find_category(value).map(|c| c.label).unwrap_or(value)
}

/// Whether a value appears in the catalog
pub fn is_known_category(value: &str) -> bool {
    find_category(value).is_some()
}
