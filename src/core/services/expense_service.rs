//! In-memory helpers for adding and removing expenses.

use chrono::{DateTime, FixedOffset};

use crate::errors::{LedgerError, Result};
use crate::ledger::{Expense, Ledger};

/// Result of a delete request.
#[derive(Debug, Clone, PartialEq)]
pub enum DeleteOutcome {
    /// The expense was removed.
    Deleted(Expense),
    /// The ledger has records, none with the requested id.
    NotFound,
    /// The ledger has no records at all.
    Empty,
}

/// Mutation helpers over a loaded [`Ledger`].
pub struct ExpenseService;

impl ExpenseService {
    /// Appends a new expense dated `date` and returns its identifier.
    ///
    /// Fails without touching the ledger when the last id cannot be incremented.
    pub fn add(
        ledger: &mut Ledger,
        description: impl Into<String>,
        amount: f64,
        date: DateTime<FixedOffset>,
    ) -> Result<i64> {
        let id = ledger.next_id().ok_or_else(|| {
            LedgerError::InvalidInput(format!(
                "no id left after {}; the ledger cannot take more expenses",
                i64::MAX
            ))
        })?;
        Ok(ledger.push(Expense::new(id, description, amount, date)))
    }

    /// Removes the expense identified by `id`. Duplicate ids resolve to the last match.
    pub fn remove(ledger: &mut Ledger, id: i64) -> DeleteOutcome {
        if ledger.is_empty() {
            return DeleteOutcome::Empty;
        }
        match ledger.remove(id) {
            Some(expense) => DeleteOutcome::Deleted(expense),
            None => DeleteOutcome::NotFound,
        }
    }
}
