//! Display formatting for terminal output
//!
//! Tables and detail views for transactions, budgets and the category
//! catalog. Categories are always shown by label, falling back to the raw
//! stored value.

pub mod budget;
pub mod category;
pub mod transaction;

pub use budget::{format_budget_table, progress_bar};
pub use category::format_category_list;
pub use transaction::{format_signed_amount, format_transaction_details, format_transaction_table};
