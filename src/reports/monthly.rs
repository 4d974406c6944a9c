//! Monthly income/expense series
//!
//! Buckets transactions by calendar month. Buckets are keyed and ordered by
//! their first day, so December 2023 comes before January 2024 regardless of
//! how the label sorts.

use chrono::{Datelike, NaiveDate};
use std::collections::BTreeMap;
use std::fmt::Write;

use crate::models::{Money, Transaction, TransactionType};

/// Income and expense totals for one calendar month
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlyBucket {
    /// First day of the month
    pub month_start: NaiveDate,
    /// Display label, e.g. "Dec 2023"
    pub label: String,
    pub income: Money,
    pub expenses: Money,
}

impl MonthlyBucket {
    fn empty(month_start: NaiveDate) -> Self {
        Self {
            month_start,
            label: month_start.format("%b %Y").to_string(),
            income: Money::zero(),
            expenses: Money::zero(),
        }
    }

    pub fn year(&self) -> i32 {
        self.month_start.year()
    }

    pub fn month(&self) -> u32 {
        self.month_start.month()
    }

    /// Income minus expenses for the month
    pub fn net(&self) -> Money {
        self.income - self.expenses
    }
}

/// Group transactions into ascending monthly buckets
pub fn monthly_series(transactions: &[Transaction]) -> Vec<MonthlyBucket> {
    let mut buckets: BTreeMap<NaiveDate, MonthlyBucket> = BTreeMap::new();

    for txn in transactions {
        // Day 1 exists in every month
        let month_start = txn.date.with_day(1).unwrap_or(txn.date);
        let bucket = buckets
            .entry(month_start)
            .or_insert_with(|| MonthlyBucket::empty(month_start));

        match txn.kind {
            TransactionType::Income => bucket.income += txn.amount,
            TransactionType::Expense => bucket.expenses += txn.amount,
        }
    }

    buckets.into_values().collect()
}

/// Render the series as a terminal table
pub fn format_monthly_terminal(series: &[MonthlyBucket], symbol: &str) -> String {
    let mut output = String::new();

    if series.is_empty() {
        output.push_str("No transactions recorded yet.\n");
        return output;
    }

    let _ = writeln!(
        output,
        "{:<10} {:>14} {:>14} {:>14}",
        "Month", "Income", "Expenses", "Net"
    );
    output.push_str(&"-".repeat(55));
    output.push('\n');

    for bucket in series {
        let _ = writeln!(
            output,
            "{:<10} {:>14} {:>14} {:>14}",
            bucket.label,
            bucket.income.format_with_symbol(symbol),
            bucket.expenses.format_with_symbol(symbol),
            bucket.net().format_with_symbol(symbol)
        );
    }

    output
}
