//! Ledger domain models: the expense record and the ordered ledger holding them.

pub mod expense;
#[allow(clippy::module_inception)]
pub mod ledger;

pub use chrono::Month;
pub use expense::Expense;
pub use ledger::Ledger;
