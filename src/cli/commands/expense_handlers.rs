use crate::cli::args::{AddArgs, DeleteArgs, SummaryArgs};
use crate::cli::output;
use crate::cli::ui::formatting::{expense_table, format_amount};
use crate::core::services::{DeleteOutcome, SummaryService};
use crate::storage::LoadStatus;

use super::{CommandContext, CommandResult};

const NO_ENTRIES: &str = "There are no entries.";
const MISSING_ID: &str = "Please enter the ID of the expense to delete.";

/// Tells the user when the ledger file exists but its records could not be used.
fn warn_if_degraded(context: &CommandContext) {
    let problem = match context.tracker.status() {
        LoadStatus::Malformed(reason) => format!("could not be parsed ({reason})"),
        LoadStatus::Unreadable(reason) => format!("could not be read ({reason})"),
        LoadStatus::Loaded | LoadStatus::Missing => return,
    };
    output::warning(format!(
        "Ledger file {} {problem}; treating it as empty.",
        context.data_file.display()
    ));
}

pub fn handle_add(context: &CommandContext, args: AddArgs) -> CommandResult {
    warn_if_degraded(context);
    match context.tracker.add(&args.description, args.amount) {
        Ok(id) => output::success(format!("Expense added successfully (ID: {id})")),
        Err(err) => output::error(format!("Could not save expense: {err}")),
    }
    Ok(())
}

pub fn handle_list(context: &CommandContext) -> CommandResult {
    warn_if_degraded(context);
    let expenses = context.tracker.list();
    if expenses.is_empty() {
        output::info(NO_ENTRIES);
        return Ok(());
    }
    let table = expense_table(&expenses, context.currency_symbol());
    output::info(table.render());
    Ok(())
}

pub fn handle_delete(context: &CommandContext, args: DeleteArgs) -> CommandResult {
    let Some(id) = args.id else {
        output::warning(MISSING_ID);
        return Ok(());
    };
    warn_if_degraded(context);
    match context.tracker.delete(id) {
        Ok(DeleteOutcome::Deleted(_)) => output::success(format!("Expense with ID: {id} deleted!")),
        Ok(DeleteOutcome::NotFound) => output::warning(format!("Expense with ID: {id} not found!")),
        Ok(DeleteOutcome::Empty) => output::info(NO_ENTRIES),
        Err(err) => output::error(format!("Could not delete expense {id}: {err}")),
    }
    Ok(())
}

pub fn handle_summary(context: &CommandContext, args: SummaryArgs) -> CommandResult {
    let month = match args.month.map(SummaryService::parse_month).transpose() {
        Ok(month) => month,
        Err(err) => {
            output::error(err);
            return Ok(());
        }
    };
    warn_if_degraded(context);
    let summary = context.tracker.summarize(month);
    output::info(format!(
        "{}: {}",
        summary.label(),
        format_amount(summary.total, context.currency_symbol())
    ));
    Ok(())
}
