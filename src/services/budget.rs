//! Budget entry

use crate::models::{Budget, BudgetId};

use super::validation::{check_amount, ValidationErrors};

/// Raw field values for a budget form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BudgetDraft {
    pub category: String,
    pub amount: String,
}

impl BudgetDraft {
    pub fn new(category: impl Into<String>, amount: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            amount: amount.into(),
        }
    }

    /// Validate into a new budget with a fresh id
    pub fn into_budget(self) -> Result<Budget, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let category = self.category.trim();
        if category.is_empty() {
            errors.add("category", "Please select a category.");
        }

        let amount = check_amount(&self.amount, &mut errors);

        match amount {
            Some(amount) if errors.is_empty() => Ok(Budget {
                id: BudgetId::new(),
                category: category.to_string(),
                amount,
            }),
            _ => Err(errors),
        }
    }
}
