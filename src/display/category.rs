//! Category catalog display

use crate::models::{TransactionType, CATEGORIES};

/// List the catalog values and labels, plus the transaction types
pub fn format_category_list() -> String {
    let mut output = String::new();

    output.push_str("Categories:\n");
    for category in CATEGORIES {
        output.push_str(&format!("  {:<16} {}\n", category.value, category.label));
    }

    output.push_str("\nTypes:\n");
    for kind in TransactionType::ALL {
        output.push_str(&format!("  {:<16} {}\n", kind.as_str(), kind.label()));
    }

    output
}
