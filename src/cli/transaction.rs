//! Transaction CLI commands
//!
//! Add, edit, delete and list transactions. These are top-level commands of
//! the `finance` binary.

use chrono::Local;
use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_transaction_details, format_transaction_table};
use crate::error::FinanceResult;
use crate::services::{
    filter_transactions, find_transaction, limit, recent, sort_by_date_descending,
    TransactionDraft, TransactionFilter,
};
use crate::storage::KeyValueStore;
use crate::store::FinanceStore;

use super::{parse_kind_filter, print_warning, unknown_category_note, wildcard};

/// Transaction commands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Record a new transaction
    Add {
        /// Short description (at least 2 characters)
        title: String,
        /// Amount (e.g., "4.50")
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Category value (see 'finance categories')
        #[arg(short, long)]
        category: String,
        /// income or expense
        #[arg(short = 't', long = "type", default_value = "expense")]
        kind: String,
        /// Transaction date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Change fields of an existing transaction
    Edit {
        /// Transaction ID (full or short form)
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(short, long, allow_hyphen_values = true)]
        amount: Option<String>,
        #[arg(short, long)]
        category: Option<String>,
        #[arg(short = 't', long = "type")]
        kind: Option<String>,
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Delete a transaction
    Delete {
        /// Transaction ID (full or short form)
        id: String,
    },

    /// Show transaction details
    Show {
        /// Transaction ID (full or short form)
        id: String,
    },

    /// List transactions, newest first
    List {
        /// Case-insensitive text to find in the title
        #[arg(short, long)]
        search: Option<String>,
        /// income, expense or all
        #[arg(short = 't', long = "type")]
        kind: Option<String>,
        /// Category value or all
        #[arg(short, long)]
        category: Option<String>,
        /// Maximum number of rows
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Show the most recent transactions
    Recent {
        /// Number of transactions to show
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

/// Handle a transaction command
pub fn handle_transaction_command<S: KeyValueStore>(
    store: &mut FinanceStore<S>,
    settings: &Settings,
    cmd: TransactionCommands,
) -> FinanceResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        TransactionCommands::Add {
            title,
            amount,
            category,
            kind,
            date,
        } => {
            let mut draft = TransactionDraft::new(Local::now().date_naive());
            draft.title = title;
            draft.amount = amount;
            draft.category = category;
            draft.kind = kind;
            if let Some(date) = date {
                draft.date = date;
            }

            let txn = draft.into_transaction()?;
            let summary = txn.to_string();
            let id = txn.id;
            let note = unknown_category_note(&txn.category);
            let outcome = store.add_transaction(txn);
            print_warning(&outcome);

            println!("Added transaction: {}", id);
            println!("  {}", summary);
            if let Some(note) = note {
                println!("{}", note);
            }
        }

        TransactionCommands::Edit {
            id,
            title,
            amount,
            category,
            kind,
            date,
        } => {
            let snapshot = store.snapshot();
            let existing = find_transaction(&snapshot, &id)?;

            if title.is_none()
                && amount.is_none()
                && category.is_none()
                && kind.is_none()
                && date.is_none()
            {
                println!("No changes specified.");
                return Ok(());
            }

            let mut draft = TransactionDraft::from_transaction(existing);
            if let Some(title) = title {
                draft.title = title;
            }
            if let Some(amount) = amount {
                draft.amount = amount;
            }
            if let Some(category) = category {
                draft.category = category;
            }
            if let Some(kind) = kind {
                draft.kind = kind;
            }
            if let Some(date) = date {
                draft.date = date;
            }

            let updated = draft.apply_to(existing)?;
            let summary = updated.to_string();
            let note = unknown_category_note(&updated.category);
            let outcome = store.update_transaction(updated);
            print_warning(&outcome);

            if outcome.found {
                println!("Updated transaction: {}", existing.id);
                println!("  {}", summary);
                if let Some(note) = note {
                    println!("{}", note);
                }
            } else {
                println!("Transaction {} no longer exists.", existing.id);
            }
        }

        TransactionCommands::Delete { id } => {
            let snapshot = store.snapshot();
            let existing = find_transaction(&snapshot, &id)?;
            let outcome = store.delete_transaction(existing.id);
            print_warning(&outcome);

            println!("Deleted transaction: {}", existing.id);
            println!("  {}", existing);
        }

        TransactionCommands::Show { id } => {
            let snapshot = store.snapshot();
            let txn = find_transaction(&snapshot, &id)?;
            print!("{}", format_transaction_details(txn, symbol));
        }

        TransactionCommands::List {
            search,
            kind,
            category,
            limit: max_rows,
        } => {
            let mut filter = TransactionFilter::new();
            if let Some(search) = search {
                filter = filter.search(search);
            }
            if let Some(kind) = parse_kind_filter(kind.as_deref())? {
                filter = filter.kind(kind);
            }
            if let Some(category) = wildcard(category.as_deref()) {
                filter = filter.category(category);
            }

            let sorted = sort_by_date_descending(store.transactions());
            let matched = filter_transactions(&sorted, &filter);
            let shown = match max_rows {
                Some(n) => limit(&matched, n),
                None => &matched[..],
            };

            print!("{}", format_transaction_table(shown, symbol));
            if shown.len() < matched.len() {
                println!("Showing {} of {} transactions.", shown.len(), matched.len());
            }
        }

        TransactionCommands::Recent { limit: count } => {
            let count = count.unwrap_or(settings.recent_limit);
            let latest = recent(store.transactions(), count);
            println!("Recent Transactions");
            println!();
            print!("{}", format_transaction_table(&latest, symbol));
        }
    }

    Ok(())
}
