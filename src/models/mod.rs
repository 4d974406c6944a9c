//! Core data models for finance-tracker
//!
//! Transactions and budgets, the money type they share, their ids, and the
//! static category catalog.

pub mod budget;
pub mod category;
pub mod ids;
pub mod money;
pub mod transaction;

pub use budget::Budget;
pub use category::{category_label, is_known_category, CategoryInfo, CATEGORIES};
pub use ids::{BudgetId, TransactionId};
pub use money::{Money, MoneyParseError};
pub use transaction::{Transaction, TransactionType};
