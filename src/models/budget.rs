//! Budget model
//!
//! A budget is a spending ceiling for one category, measured against every
//! expense in that category the store holds. There is no period reset.
//!
//! Several budgets may name the same category. Each one is tracked and
//! totalled on its own, so two budgets for "food" count twice toward the
//! overall budget.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::BudgetId;
use super::money::Money;

/// A spending ceiling for a category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Budget {
    /// Unique identifier
    pub id: BudgetId,

    /// Category value this ceiling applies to
    pub category: String,

    /// Ceiling amount, always positive
    pub amount: Money,
}

impl Budget {
    /// Create a new budget with a freshly generated id
    pub fn new(category: impl Into<String>, amount: Money) -> Self {
        Self {
            id: BudgetId::new(),
            category: category.into(),
            amount,
        }
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.category, self.amount)
    }
}
