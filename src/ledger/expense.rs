use chrono::{DateTime, Datelike, FixedOffset, Month};
use serde::{Deserialize, Serialize};

/// A single expense entry as persisted in the ledger file.
///
/// Field order here is the on-disk field order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: i64,
    pub description: String,
    pub amount: f64,
    pub date: DateTime<FixedOffset>,
}

impl Expense {
    pub fn new(
        id: i64,
        description: impl Into<String>,
        amount: f64,
        date: DateTime<FixedOffset>,
    ) -> Self {
        Self {
            id,
            description: description.into(),
            amount,
            date,
        }
    }

    /// True when the expense date, read in its own offset, falls in `month` of `year`.
    pub fn falls_in(&self, year: i32, month: Month) -> bool {
        self.date.year() == year && self.date.month() == month.number_from_month()
    }
}
