pub mod json_backend;

use crate::{errors::Result, ledger::Ledger};

/// How a load obtained its ledger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    /// The file existed and parsed.
    Loaded,
    /// No file yet; treated as an empty ledger.
    Missing,
    /// The file exists but could not be read; treated as an empty ledger.
    Unreadable(String),
    /// The file was read but did not parse; treated as an empty ledger.
    Malformed(String),
}

/// Ledger produced by a load, with the reason it looks the way it does.
#[derive(Debug, Clone)]
pub struct LoadReport {
    pub ledger: Ledger,
    pub status: LoadStatus,
}

/// Whole-ledger persistence. Every call transfers the full ledger and holds nothing afterwards.
pub trait ExpenseStore: Send + Sync {
    /// Loads the ledger, falling back to an empty one when the data is missing or unusable.
    fn load_report(&self) -> LoadReport;

    /// Replaces the persisted ledger with `ledger`.
    fn save(&self, ledger: &Ledger) -> Result<()>;

    fn load(&self) -> Ledger {
        self.load_report().ledger
    }
}

pub use json_backend::JsonExpenseStore;
