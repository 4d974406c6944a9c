use anyhow::Result;
use clap::{Parser, Subcommand};

use finance_tracker::cli::{
    handle_budget_command, handle_report_command, handle_transaction_command, BudgetCommands,
    ReportCommands, TransactionCommands,
};
use finance_tracker::config::{FinancePaths, Settings};
use finance_tracker::display::format_category_list;
use finance_tracker::logging::init_tracing;
use finance_tracker::storage::open_file_store;
use finance_tracker::store::{FinanceStore, STORAGE_KEY};

#[derive(Parser)]
#[command(
    name = "finance",
    version,
    about = "Track income, expenses and category budgets from the terminal",
    long_about = "Record income and expense transactions, set spending limits per \
                  category and see where the money went. Data is kept in a single \
                  JSON record under the data directory."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Transaction(TransactionCommands),

    /// Budget management commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Summaries and charts as text
    #[command(subcommand)]
    Report(ReportCommands),

    /// List the available categories and transaction types
    Categories,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = FinancePaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    init_tracing(&settings.log_filter);

    let backend = open_file_store(&paths)?;
    let mut store = FinanceStore::open(backend);
    if let Some(warning) = store.last_warning() {
        eprintln!("Warning: {}", warning);
    }

    match cli.command {
        Some(Commands::Transaction(cmd)) => {
            handle_transaction_command(&mut store, &settings, cmd)?;
        }
        Some(Commands::Budget(cmd)) => {
            handle_budget_command(&mut store, &settings, cmd)?;
        }
        Some(Commands::Report(cmd)) => {
            handle_report_command(&store, &settings, cmd)?;
        }
        Some(Commands::Categories) => {
            print!("{}", format_category_list());
        }
        Some(Commands::Config) => {
            println!("Finance Tracker Configuration");
            println!("=============================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            let record = store.backend().path_for(STORAGE_KEY)?;
            println!("Data record:    {}", record.display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Recent limit:    {}", settings.recent_limit);
            println!("  Log filter:      {}", settings.log_filter);
        }
        None => {
            println!("Finance Tracker - income, expenses and budgets");
            println!();
            println!("Run 'finance --help' for usage information.");
            println!("Run 'finance categories' to see the category catalog.");
        }
    }

    Ok(())
}
