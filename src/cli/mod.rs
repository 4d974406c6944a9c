//! CLI command handlers
//!
//! Bridges clap argument parsing with the store, services and reports.

pub mod budget;
pub mod report;
pub mod transaction;

pub use budget::{handle_budget_command, BudgetCommands};
pub use report::{handle_report_command, ReportCommands};
pub use transaction::{handle_transaction_command, TransactionCommands};

use crate::error::FinanceResult;
use crate::models::{is_known_category, TransactionType};
use crate::services::ValidationErrors;
use crate::store::Mutation;

/// Print a persistence warning, if the mutation produced one
pub fn print_warning(outcome: &Mutation) {
    if let Some(warning) = &outcome.warning {
        eprintln!("Warning: {}", warning);
    }
}

/// Advisory line for a category that is not in the catalog, if needed
pub(crate) fn unknown_category_note(category: &str) -> Option<String> {
    if is_known_category(category) {
        None
    } else {
        Some(format!(
            "Note: '{}' is not in the category catalog; it is kept as typed.",
            category
        ))
    }
}

/// `None` for a missing value or the literal "all"
pub(crate) fn wildcard(value: Option<&str>) -> Option<&str> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty() && !v.eq_ignore_ascii_case("all"))
}

/// Parse a `--type` filter, where "all" means no filter
pub(crate) fn parse_kind_filter(value: Option<&str>) -> FinanceResult<Option<TransactionType>> {
    match wildcard(value) {
        None => Ok(None),
        Some(raw) => raw.parse().map(Some).map_err(|message: String| {
            let mut errors = ValidationErrors::new();
            errors.add("type", message);
            errors.into()
        }),
    }
}
