//! Report CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::error::FinanceResult;
use crate::reports::{
    category_distribution, format_distribution_terminal, format_monthly_terminal, monthly_series,
    Overview,
};
use crate::storage::KeyValueStore;
use crate::store::FinanceStore;

/// Report subcommands
#[derive(Subcommand)]
pub enum ReportCommands {
    /// Income, expenses, balance and overall budget usage
    Overview,

    /// Income and expenses per calendar month
    Monthly,

    /// Share of expenses per category
    Categories,
}

/// Handle a report command
pub fn handle_report_command<S: KeyValueStore>(
    store: &FinanceStore<S>,
    settings: &Settings,
    cmd: ReportCommands,
) -> FinanceResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        ReportCommands::Overview => {
            let overview = Overview::generate(store.transactions(), store.budgets());
            print!("{}", overview.format_terminal(symbol));
        }
        ReportCommands::Monthly => {
            let series = monthly_series(store.transactions());
            print!("{}", format_monthly_terminal(&series, symbol));
        }
        ReportCommands::Categories => {
            let shares = category_distribution(store.transactions());
            print!("{}", format_distribution_terminal(&shares, symbol));
        }
    }

    Ok(())
}
