//! Filtering and sorting of transaction lists
//!
//! Every function takes a slice and returns a new list or a sub-slice; the
//! input is never reordered in place.

use crate::models::{Transaction, TransactionType};

/// Criteria for narrowing a transaction list
///
/// `None` for `kind` or `category` matches everything, as does an empty
/// search term.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionFilter {
    /// Case-insensitive substring of the title
    pub search: String,
    pub kind: Option<TransactionType>,
    /// Exact category value
    pub category: Option<String>,
}

impl TransactionFilter {
    /// A filter that matches every transaction
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = term.into();
        self
    }

    pub fn kind(mut self, kind: TransactionType) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Whether every criterion is a wildcard
    pub fn is_match_all(&self) -> bool {
        self.search.is_empty() && self.kind.is_none() && self.category.is_none()
    }

    /// Whether one transaction satisfies all criteria
    pub fn matches(&self, txn: &Transaction) -> bool {
        let matches_search = self.search.is_empty()
            || txn
                .title
                .to_lowercase()
                .contains(&self.search.to_lowercase());
        let matches_kind = self.kind.map_or(true, |kind| txn.kind == kind);
        let matches_category = self
            .category
            .as_deref()
            .map_or(true, |category| txn.category == category);

        matches_search && matches_kind && matches_category
    }
}

/// Transactions satisfying `filter`, in their original order
pub fn filter_transactions(
    transactions: &[Transaction],
    filter: &TransactionFilter,
) -> Vec<Transaction> {
    if filter.is_match_all() {
        return transactions.to_vec();
    }

    transactions
        .iter()
        .filter(|t| filter.matches(t))
        .cloned()
        .collect()
}

/// Newest first; transactions on the same date keep their relative order
pub fn sort_by_date_descending(transactions: &[Transaction]) -> Vec<Transaction> {
    let mut sorted = transactions.to_vec();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    sorted
}

/// The first `n` transactions, or all of them if there are fewer
pub fn limit(transactions: &[Transaction], n: usize) -> &[Transaction] {
    &transactions[..n.min(transactions.len())]
}

/// The `n` most recent transactions
pub fn recent(transactions: &[Transaction], n: usize) -> Vec<Transaction> {
    let mut sorted = sort_by_date_descending(transactions);
    sorted.truncate(n);
    sorted
}
