//! Expense distribution across the category catalog

use std::fmt::Write;

use crate::models::{Money, Transaction, CATEGORIES};

use super::totals::{category_spend, percent_used};

/// Expense total for one catalog category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryShare {
    pub category: &'static str,
    pub label: &'static str,
    pub total: Money,
    /// Whole percentage of the distribution's grand total
    pub percent: u8,
}

/// Expense totals per catalog category, in catalog order, zero totals dropped
///
/// Expenses in categories outside the catalog are not part of the
/// distribution.
pub fn category_distribution(transactions: &[Transaction]) -> Vec<CategoryShare> {
    let totals: Vec<_> = CATEGORIES
        .iter()
        .map(|info| (info, category_spend(transactions, info.value)))
        .filter(|(_, total)| total.is_positive())
        .collect();

    let grand_total: Money = totals.iter().map(|(_, total)| *total).sum();

    totals
        .into_iter()
        .map(|(info, total)| CategoryShare {
            category: info.value,
            label: info.label,
            total,
            percent: percent_used(total, grand_total),
        })
        .collect()
}

/// Render the distribution as a terminal table
pub fn format_distribution_terminal(shares: &[CategoryShare], symbol: &str) -> String {
    let mut output = String::new();

    if shares.is_empty() {
        output.push_str("No expenses recorded yet.\n");
        return output;
    }

    let _ = writeln!(output, "{:<20} {:>14} {:>6}", "Category", "Spent", "%");
    output.push_str(&"-".repeat(42));
    output.push('\n');

    for share in shares {
        let _ = writeln!(
            output,
            "{:<20} {:>14} {:>5}%",
            share.label,
            share.total.format_with_symbol(symbol),
            share.percent
        );
    }

    output
}
