//! Totals and budget arithmetic
//!
//! Small pure functions over slices of transactions and budgets. None of them
//! allocate or fail; ratios against a zero or negative capacity are zero.

use crate::models::{Budget, Money, Transaction, TransactionType};

/// Sum of amounts for one transaction type
pub fn total_by_type(transactions: &[Transaction], kind: TransactionType) -> Money {
    transactions
        .iter()
        .filter(|t| t.kind == kind)
        .map(|t| t.amount)
        .sum()
}

/// Income minus expenses; negative when spending exceeds income
pub fn balance(transactions: &[Transaction]) -> Money {
    transactions.iter().map(Transaction::signed_amount).sum()
}

/// Sum of every budget amount
///
/// Budgets sharing a category are not merged: each contributes its own amount.
pub fn total_budget(budgets: &[Budget]) -> Money {
    budgets.iter().map(|b| b.amount).sum()
}

/// Total budget minus total expenses
pub fn budget_remaining(transactions: &[Transaction], budgets: &[Budget]) -> Money {
    total_budget(budgets) - total_by_type(transactions, TransactionType::Expense)
}

/// Share of `capacity` used by `spent`, as a whole percentage in `0..=100`
///
/// Rounds half up. A non-positive capacity gives 0; overspending clamps to 100.
pub fn percent_used(spent: Money, capacity: Money) -> u8 {
    if !capacity.is_positive() {
        return 0;
    }

    let capacity = i128::from(capacity.cents());
    let spent = i128::from(spent.cents()).clamp(0, capacity);

    // round(spent / capacity * 100) == floor((200 * spent + capacity) / (2 * capacity))
    ((spent * 200 + capacity) / (capacity * 2)) as u8
}

/// Expense total for one category, matched exactly
pub fn category_spend(transactions: &[Transaction], category: &str) -> Money {
    transactions
        .iter()
        .filter(|t| t.is_expense() && t.category == category)
        .map(|t| t.amount)
        .sum()
}

/// Strictly more spent than the capacity allows
pub fn is_over_budget(spent: Money, capacity: Money) -> bool {
    spent > capacity
}
