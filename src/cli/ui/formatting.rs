use chrono::{DateTime, FixedOffset};

use crate::cli::ui::table_renderer::{Alignment, Table, TableColumn};
use crate::ledger::Expense;

const DATE_FORMAT: &str = "%Y-%m-%d";
const DESCRIPTION_MAX_WIDTH: usize = 40;

/// Formats an amount with two decimals, e.g. `$12.50` or `-$3.00`.
pub fn format_amount(amount: f64, symbol: &str) -> String {
    if amount < 0.0 {
        format!("-{symbol}{:.2}", amount.abs())
    } else {
        format!("{symbol}{:.2}", amount)
    }
}

pub fn format_date(date: &DateTime<FixedOffset>) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Builds the `ID / Date / Description / Amount` listing.
pub fn expense_table(expenses: &[Expense], symbol: &str) -> Table {
    let mut table = Table::new(vec![
        TableColumn::new("ID", Alignment::Right),
        TableColumn::new("Date", Alignment::Left),
        TableColumn::new("Description", Alignment::Left).max_width(DESCRIPTION_MAX_WIDTH),
        TableColumn::new("Amount", Alignment::Right),
    ]);
    for expense in expenses {
        table.push_row(vec![
            expense.id.to_string(),
            format_date(&expense.date),
            expense.description.clone(),
            format_amount(expense.amount, symbol),
        ]);
    }
    table
}
