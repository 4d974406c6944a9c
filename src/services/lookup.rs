//! Resolve user-typed identifiers against a snapshot

use crate::error::{FinanceError, FinanceResult};
use crate::models::{Budget, Transaction};
use crate::store::Snapshot;

/// Find the transaction a full or shortened id refers to
pub fn find_transaction<'a>(snapshot: &'a Snapshot, input: &str) -> FinanceResult<&'a Transaction> {
    let mut matches = snapshot.transactions.iter().filter(|t| t.id.matches(input));
    match (matches.next(), matches.next()) {
        (Some(txn), None) => Ok(txn),
        (None, _) => Err(FinanceError::transaction_not_found(input)),
        (Some(_), Some(_)) => Err(FinanceError::Ambiguous {
            entity_type: "Transaction",
            identifier: input.to_string(),
        }),
    }
}

/// Find the budget a full or shortened id refers to
pub fn find_budget<'a>(snapshot: &'a Snapshot, input: &str) -> FinanceResult<&'a Budget> {
    let mut matches = snapshot.budgets.iter().filter(|b| b.id.matches(input));
    match (matches.next(), matches.next()) {
        (Some(budget), None) => Ok(budget),
        (None, _) => Err(FinanceError::budget_not_found(input)),
        (Some(_), Some(_)) => Err(FinanceError::Ambiguous {
            entity_type: "Budget",
            identifier: input.to_string(),
        }),
    }
}
