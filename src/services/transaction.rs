//! Transaction entry
//!
//! `TransactionDraft` holds the raw text of an entry form. It is checked as a
//! whole so every bad field is reported at once, and only a fully valid draft
//! turns into a [`Transaction`].

use chrono::NaiveDate;

use crate::models::{Transaction, TransactionId, TransactionType};

use super::validation::{check_amount, check_kind, ValidationErrors};

/// Raw field values for creating or editing a transaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionDraft {
    pub title: String,
    pub amount: String,
    pub category: String,
    pub kind: String,
    pub date: String,
}

impl Default for TransactionDraft {
    /// An empty expense form
    fn default() -> Self {
        Self {
            title: String::new(),
            amount: String::new(),
            category: String::new(),
            kind: TransactionType::Expense.as_str().to_string(),
            date: String::new(),
        }
    }
}

impl TransactionDraft {
    /// An empty expense form dated `today`
    pub fn new(today: NaiveDate) -> Self {
        Self {
            date: today.format("%Y-%m-%d").to_string(),
            ..Self::default()
        }
    }

    /// A form prefilled from an existing transaction, for editing
    pub fn from_transaction(txn: &Transaction) -> Self {
        Self {
            title: txn.title.clone(),
            amount: format!("{}.{:02}", txn.amount.units(), txn.amount.cents_part()),
            category: txn.category.clone(),
            kind: txn.kind.as_str().to_string(),
            date: txn.date.format("%Y-%m-%d").to_string(),
        }
    }

    /// Validate into a new transaction with a fresh id
    pub fn into_transaction(self) -> Result<Transaction, ValidationErrors> {
        self.build(TransactionId::new())
    }

    /// Validate into a replacement for `existing`, keeping its id
    pub fn apply_to(self, existing: &Transaction) -> Result<Transaction, ValidationErrors> {
        self.build(existing.id)
    }

    fn build(self, id: TransactionId) -> Result<Transaction, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let title = self.title.trim();
        if title.chars().count() < 2 {
            errors.add("title", "Title must be at least 2 characters.");
        }

        let amount = check_amount(&self.amount, &mut errors);

        let category = self.category.trim();
        if category.is_empty() {
            errors.add("category", "Please select a category.");
        }

        let kind = check_kind(&self.kind, &mut errors);

        let date = if self.date.trim().is_empty() {
            errors.add("date", "Please select a date.");
            None
        } else {
            match NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d") {
                Ok(date) => Some(date),
                Err(_) => {
                    errors.add("date", "Date must be in YYYY-MM-DD format.");
                    None
                }
            }
        };

        match (amount, kind, date) {
            (Some(amount), Some(kind), Some(date)) if errors.is_empty() => Ok(Transaction {
                id,
                title: title.to_string(),
                amount,
                category: category.to_string(),
                kind,
                date,
            }),
            _ => Err(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    fn coffee_draft() -> TransactionDraft {
        TransactionDraft {
            title: "Coffee".into(),
            amount: "4.50".into(),
            category: "food".into(),
            kind: "expense".into(),
            date: "2024-03-01".into(),
        }
    }

    #[test]
    fn test_valid_draft() {
        let txn = coffee_draft().into_transaction().unwrap();
        assert_eq!(txn.title, "Coffee");
        assert_eq!(txn.amount, Money::from_cents(450));
        assert_eq!(txn.kind, TransactionType::Expense);
        assert_eq!(txn.date, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
    }

    #[test]
    fn test_new_draft_defaults() {
        let draft = TransactionDraft::new(NaiveDate::from_ymd_opt(2024, 5, 6).unwrap());
        assert_eq!(draft.kind, "expense");
        assert_eq!(draft.date, "2024-05-06");
        assert!(draft.title.is_empty());
    }

    #[test]
    fn test_reports_every_bad_field() {
        let draft = TransactionDraft {
            title: " x ".into(),
            amount: "-3".into(),
            category: "".into(),
            kind: "transfer".into(),
            date: "03/01/2024".into(),
        };

        let errors = draft.into_transaction().unwrap_err();

        let fields: Vec<_> = errors.errors().iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["title", "amount", "category", "type", "date"]);
        assert_eq!(errors.get("category"), Some("Please select a category."));
    }

    #[test]
    fn test_category_outside_catalog_is_accepted() {
        let draft = TransactionDraft {
            category: "  pets ".into(),
            ..coffee_draft()
        };
        let txn = draft.into_transaction().unwrap();
        assert_eq!(txn.category, "pets");
    }

    #[test]
    fn test_edit_keeps_id() {
        let existing = coffee_draft().into_transaction().unwrap();

        let mut draft = TransactionDraft::from_transaction(&existing);
        assert_eq!(draft.amount, "4.50");
        draft.title = "Dog food".into();
        draft.category = "pets".into();

        let edited = draft.apply_to(&existing).unwrap();
        assert_eq!(edited.id, existing.id);
        assert_eq!(edited.title, "Dog food");
        assert_eq!(edited.category, "pets");
    }

    #[test]
    fn test_rejects_more_than_two_decimals() {
        let draft = TransactionDraft {
            amount: "4.509".into(),
            ..coffee_draft()
        };
        let errors = draft.into_transaction().unwrap_err();
        assert_eq!(
            errors.get("amount"),
            Some("Amount can have at most 2 decimal places.")
        );
    }

    #[test]
    fn test_title_is_trimmed() {
        let draft = TransactionDraft {
            title: "  Lunch  ".into(),
            ..coffee_draft()
        };
        assert_eq!(draft.into_transaction().unwrap().title, "Lunch");
    }
}
