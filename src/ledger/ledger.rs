use chrono::Month;
use serde::{Deserialize, Deserializer, Serialize};

use super::expense::Expense;

/// Ordered collection of expenses in insertion (file) order.
///
/// Persists as a bare JSON array. A `null` document loads as an empty ledger.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Ledger {
    expenses: Vec<Expense>,
}

impl<'de> Deserialize<'de> for Ledger {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let expenses = Option::<Vec<Expense>>::deserialize(deserializer)?.unwrap_or_default();
        Ok(Self { expenses })
    }
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_expenses(expenses: Vec<Expense>) -> Self {
        Self { expenses }
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    pub fn last_id(&self) -> Option<i64> {
        self.expenses.last().map(|expense| expense.id)
    }

    /// Id for the next appended expense: the last record's id plus one, or 1 when empty.
    ///
    /// Follows record order, not the maximum id. `None` once the last id is `i64::MAX`.
    pub fn next_id(&self) -> Option<i64> {
        match self.last_id() {
            Some(id) => id.checked_add(1),
            None => Some(1),
        }
    }

    pub fn push(&mut self, expense: Expense) -> i64 {
        let id = expense.id;
        self.expenses.push(expense);
        id
    }

    /// Index of the last expense carrying `id`.
    pub fn position_of(&self, id: i64) -> Option<usize> {
        self.expenses.iter().rposition(|expense| expense.id == id)
    }

    /// Removes the last expense carrying `id`, keeping the order of the rest.
    pub fn remove(&mut self, id: i64) -> Option<Expense> {
        let idx = self.position_of(id)?;
        Some(self.expenses.remove(idx))
    }

    pub fn total(&self) -> f64 {
        self.expenses.iter().map(|expense| expense.amount).sum()
    }

    pub fn total_for_month(&self, year: i32, month: Month) -> f64 {
        self.expenses
            .iter()
            .filter(|expense| expense.falls_in(year, month))
            .map(|expense| expense.amount)
            .sum()
    }

    pub fn into_expenses(self) -> Vec<Expense> {
        self.expenses
    }
}
