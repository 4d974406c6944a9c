//! Budget display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::reports::BudgetStatus;

const BAR_WIDTH: usize = 20;

#[derive(Tabled)]
struct BudgetRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Spent")]
    spent: String,
    #[tabled(rename = "Budget")]
    budget: String,
    #[tabled(rename = "Used")]
    used: String,
    #[tabled(rename = "")]
    status: String,
}

/// A fixed-width text progress bar for a percentage
pub fn progress_bar(percent: u8) -> String {
    let filled = usize::from(percent.min(100)) * BAR_WIDTH / 100;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled))
}

/// Format budget statuses as a table
pub fn format_budget_table(statuses: &[BudgetStatus], symbol: &str) -> String {
    if statuses.is_empty() {
        return "No budgets set.\n\nRun 'finance budget add <category> <amount>' to create one.\n"
            .to_string();
    }

    let rows = statuses.iter().map(|status| BudgetRow {
        id: status.budget.id.to_string(),
        category: status.label.clone(),
        spent: status.spent.format_with_symbol(symbol),
        budget: status.budget.amount.format_with_symbol(symbol),
        used: format!("{} {:>3}%", progress_bar(status.percent_used), status.percent_used),
        status: if status.over_budget {
            "over".to_string()
        } else {
            String::new()
        },
    });

    let mut table = Table::new(rows);
    table.with(Style::psql());
    format!("{}\n", table)
}
