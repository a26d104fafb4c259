pub mod expense_service;
pub mod summary_service;

pub use expense_service::{DeleteOutcome, ExpenseService};
pub use summary_service::{Summary, SummaryScope, SummaryService};
