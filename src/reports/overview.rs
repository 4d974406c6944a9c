//! Dashboard overview and per-budget status
//!
//! Combines the totals into the figures a summary screen shows.

use std::fmt::Write;

use crate::models::{category_label, Budget, Money, Transaction, TransactionType};

use super::totals::{
    balance, category_spend, is_over_budget, percent_used, total_budget, total_by_type,
};

/// Headline figures for the whole history
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Overview {
    pub income: Money,
    pub expenses: Money,
    pub balance: Money,
    pub total_budget: Money,
    pub budget_remaining: Money,
    /// Share of the total budget spent, `0..=100`
    pub percent_used: u8,
    /// Expenses exceed a non-zero total budget
    pub over_budget: bool,
}

impl Overview {
    pub fn generate(transactions: &[Transaction], budgets: &[Budget]) -> Self {
        let income = total_by_type(transactions, TransactionType::Income);
        let expenses = total_by_type(transactions, TransactionType::Expense);
        let total_budget = total_budget(budgets);

        Self {
            income,
            expenses,
            balance: balance(transactions),
            total_budget,
            budget_remaining: total_budget - expenses,
            percent_used: percent_used(expenses, total_budget),
            over_budget: total_budget.is_positive() && is_over_budget(expenses, total_budget),
        }
    }

    /// Amount spent past the total budget, zero when within it
    pub fn overspent(&self) -> Money {
        if self.over_budget {
            self.expenses - self.total_budget
        } else {
            Money::zero()
        }
    }

    /// Format the overview for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        let mut output = String::new();
        let money = |m: Money| m.format_with_symbol(symbol);

        output.push_str("Overview\n");
        output.push_str(&"=".repeat(40));
        output.push('\n');
        let _ = writeln!(output, "{:<20} {:>18}", "Total Income", money(self.income));
        let _ = writeln!(output, "{:<20} {:>18}", "Total Expenses", money(self.expenses));
        let _ = writeln!(output, "{:<20} {:>18}", "Balance", money(self.balance));
        let _ = writeln!(output, "{:<20} {:>18}", "Total Budget", money(self.total_budget));
        let _ = writeln!(
            output,
            "{:<20} {:>18}",
            "Budget Remaining",
            money(self.budget_remaining)
        );
        let _ = writeln!(output, "{:<20} {:>17}%", "Budget Used", self.percent_used);

        if self.over_budget {
            let _ = writeln!(
                output,
                "\nYou've exceeded your total budget by {}.",
                money(self.overspent())
            );
        }

        output
    }
}

/// How one budget stands against spending in its category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BudgetStatus {
    pub budget: Budget,
    /// Catalog label, or the raw category when unknown
    pub label: String,
    pub spent: Money,
    pub percent_used: u8,
    pub over_budget: bool,
}

impl BudgetStatus {
    pub fn generate(transactions: &[Transaction], budget: &Budget) -> Self {
        let spent = category_spend(transactions, &budget.category);
        Self {
            label: category_label(&budget.category).to_string(),
            spent,
            percent_used: percent_used(spent, budget.amount),
            over_budget: is_over_budget(spent, budget.amount),
            budget: budget.clone(),
        }
    }

    /// Budget minus spending; negative when over
    pub fn remaining(&self) -> Money {
        self.budget.amount - self.spent
    }
}

/// Status of every budget, in store order
pub fn budget_statuses(transactions: &[Transaction], budgets: &[Budget]) -> Vec<BudgetStatus> {
    budgets
        .iter()
        .map(|b| BudgetStatus::generate(transactions, b))
        .collect()
}
