use chrono::Month;

use crate::core::services::{DeleteOutcome, ExpenseService, Summary, SummaryService};
use crate::errors::Result;
use crate::ledger::Expense;
use crate::storage::{ExpenseStore, LoadStatus};
use crate::time::Clock;

/// Runs the ledger operations: each call loads the full ledger, transforms it, and
/// saves it back when it changed.
///
/// Nothing guards against another process saving between our load and save; the
/// later save wins.
pub struct ExpenseTracker {
    store: Box<dyn ExpenseStore>,
    clock: Box<dyn Clock>,
}

impl ExpenseTracker {
    pub fn new(store: Box<dyn ExpenseStore>, clock: Box<dyn Clock>) -> Self {
        Self { store, clock }
    }

    /// How the ledger file currently loads, without changing it.
    pub fn status(&self) -> LoadStatus {
        self.store.load_report().status
    }

    /// Records a new expense dated now and returns its id.
    pub fn add(&self, description: &str, amount: f64) -> Result<i64> {
        let mut ledger = self.store.load();
        let id = ExpenseService::add(&mut ledger, description, amount, self.clock.now())?;
        self.store.save(&ledger)?;
        tracing::info!(id, amount, "expense added");
        Ok(id)
    }

    /// All expenses in stored order. Empty means there are no entries.
    pub fn list(&self) -> Vec<Expense> {
        self.store.load().into_expenses()
    }

    pub fn delete(&self, id: i64) -> Result<DeleteOutcome> {
        let mut ledger = self.store.load();
        let outcome = ExpenseService::remove(&mut ledger, id);
        if let DeleteOutcome::Deleted(_) = outcome {
            self.store.save(&ledger)?;
            tracing::info!(id, "expense deleted");
        }
        Ok(outcome)
    }

    pub fn summarize(&self, month: Option<Month>) -> Summary {
        let ledger = self.store.load();
        SummaryService::summarize(&ledger, month, self.clock.today())
    }
}
