//! Reports module for finance-tracker
//!
//! Pure aggregation over a snapshot's transactions and budgets: totals,
//! budget status, the monthly income/expense series and the category
//! distribution. Nothing here mutates its input or touches storage.

pub mod distribution;
pub mod monthly;
pub mod overview;
pub mod totals;

pub use distribution::{category_distribution, format_distribution_terminal, CategoryShare};
pub use monthly::{format_monthly_terminal, monthly_series, MonthlyBucket};
pub use overview::{budget_statuses, BudgetStatus, Overview};
pub use totals::{
    balance, budget_remaining, category_spend, is_over_budget, percent_used, total_budget,
    total_by_type,
};
