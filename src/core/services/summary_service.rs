use std::fmt;

use chrono::{Datelike, Month, NaiveDate};

use crate::errors::{LedgerError, Result};
use crate::ledger::Ledger;

/// Aggregate total over the ledger, optionally scoped to one month of one year.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub scope: SummaryScope,
    pub total: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryScope {
    All,
    Month { year: i32, month: Month },
}

impl Summary {
    /// `Total expenses` or `Total expenses for <Month>`.
    pub fn label(&self) -> String {
        match self.scope {
            SummaryScope::All => "Total expenses".to_string(),
            SummaryScope::Month { month, .. } => format!("Total expenses for {}", month.name()),
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {:.2}", self.label(), self.total)
    }
}

pub struct SummaryService;

impl SummaryService {
    /// Validates a 1-12 month number.
    pub fn parse_month(value: u32) -> Result<Month> {
        u8::try_from(value)
            .ok()
            .and_then(|number| Month::try_from(number).ok())
            .ok_or_else(|| {
                LedgerError::InvalidInput(format!("month must be between 1 and 12, got {value}"))
            })
    }

    /// Sums every amount, or only the amounts dated in `month` of `today`'s year.
    pub fn summarize(ledger: &Ledger, month: Option<Month>, today: NaiveDate) -> Summary {
        match month {
            None => Summary {
                scope: SummaryScope::All,
                total: ledger.total(),
            },
            Some(month) => {
                let year = today.year();
                Summary {
                    scope: SummaryScope::Month { year, month },
                    total: ledger.total_for_month(year, month),
                }
            }
        }
    }
}
