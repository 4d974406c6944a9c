//! Services layer for finance-tracker
//!
//! Everything between raw user input and the store: form validation,
//! identifier lookup, and the filter/sort views over a snapshot.

pub mod budget;
pub mod filter;
pub mod lookup;
pub mod transaction;
pub mod validation;

pub use budget::BudgetDraft;
pub use filter::{filter_transactions, limit, recent, sort_by_date_descending, TransactionFilter};
pub use lookup::{find_budget, find_transaction};
pub use transaction::TransactionDraft;
pub use validation::{FieldError, ValidationErrors};
