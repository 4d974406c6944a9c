//! Immutable view of the store's collections
//!
//! A `Snapshot` is also the persisted record: it serializes to
//! `{"transactions": [...], "budgets": [...]}` in insertion order.

use serde::{Deserialize, Serialize};

use crate::models::{Budget, BudgetId, Transaction, TransactionId};

/// The store's collections at one point in time
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    #[serde(default)]
    pub budgets: Vec<Budget>,
}

impl Snapshot {
    pub fn new(transactions: Vec<Transaction>, budgets: Vec<Budget>) -> Self {
        Self {
            transactions,
            budgets,
        }
    }

    pub fn transaction(&self, id: TransactionId) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id == id)
    }

    pub fn budget(&self, id: BudgetId) -> Option<&Budget> {
        self.budgets.iter().find(|b| b.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty() && self.budgets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, TransactionType};
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_serialize_round_trip_preserves_order_and_amounts() {
        let snapshot = Snapshot::new(
            vec![
                Transaction::new("Rent", Money::from_cents(120000), "housing", TransactionType::Expense, date(2024, 1, 1)),
                Transaction::new("Salary", Money::from_cents(350075), "salary", TransactionType::Income, date(2023, 12, 28)),
                Transaction::new("Coffee", Money::from_cents(450), "food", TransactionType::Expense, date(2024, 3, 1)),
            ],
            vec![
                Budget::new("food", Money::from_cents(10000)),
                Budget::new("housing", Money::from_cents(130001)),
            ],
        );

        let json = serde_json::to_string(&snapshot).unwrap();
        let restored: Snapshot = serde_json::from_str(&json).unwrap();

        assert_eq!(restored, snapshot);
    }

    #[test]
    fn test_missing_collections_default_to_empty() {
        let restored: Snapshot = serde_json::from_str(r#"{"transactions": []}"#).unwrap();
        assert!(restored.is_empty());
    }

    #[test]
    fn test_lookup_by_id() {
        let txn = Transaction::new("Bus", Money::from_cents(275), "transportation", TransactionType::Expense, date(2024, 2, 2));
        let budget = Budget::new("transportation", Money::from_cents(5000));
        let snapshot = Snapshot::new(vec![txn.clone()], vec![budget.clone()]);

        assert_eq!(snapshot.transaction(txn.id), Some(&txn));
        assert_eq!(snapshot.budget(budget.id), Some(&budget));
        assert_eq!(snapshot.transaction(TransactionId::new()), None);
    }
}
