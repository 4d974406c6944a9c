//! Budget CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::display::format_budget_table;
use crate::error::FinanceResult;
use crate::models::category_label;
use crate::reports::budget_statuses;
use crate::services::{find_budget, BudgetDraft};
use crate::storage::KeyValueStore;
use crate::store::FinanceStore;

use super::{print_warning, unknown_category_note};

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Set a spending limit for a category
    Add {
        /// Category value (see 'finance categories')
        category: String,
        /// Limit amount (e.g., "100" or "100.00")
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },

    /// Remove a budget
    Delete {
        /// Budget ID (full or short form)
        id: String,
    },

    /// Show each budget with its spending
    List,
}

/// Handle a budget command
pub fn handle_budget_command<S: KeyValueStore>(
    store: &mut FinanceStore<S>,
    settings: &Settings,
    cmd: BudgetCommands,
) -> FinanceResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        BudgetCommands::Add { category, amount } => {
            let budget = BudgetDraft::new(category, amount).into_budget()?;
            let already_set = store.budgets().iter().any(|b| b.category == budget.category);
            let note = unknown_category_note(&budget.category);
            let message = format!(
                "Added budget: {} for {} ({})",
                budget.amount.format_with_symbol(symbol),
                category_label(&budget.category),
                budget.id
            );

            let outcome = store.add_budget(budget);
            print_warning(&outcome);

            println!("{}", message);
            if let Some(note) = note {
                println!("{}", note);
            }
            if already_set {
                println!("Note: this category already had a budget; limits are combined.");
            }
        }

        BudgetCommands::Delete { id } => {
            let snapshot = store.snapshot();
            let budget = find_budget(&snapshot, &id)?;
            let outcome = store.delete_budget(budget.id);
            print_warning(&outcome);

            println!(
                "Deleted budget: {} for {}",
                budget.amount.format_with_symbol(symbol),
                category_label(&budget.category)
            );
        }

        BudgetCommands::List => {
            let statuses = budget_statuses(store.transactions(), store.budgets());
            println!("Budgets");
            println!();
            print!("{}", format_budget_table(&statuses, symbol));
        }
    }

    Ok(())
}
