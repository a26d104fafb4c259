#![allow(dead_code)]

use std::path::PathBuf;

use expense_tracker::{core::ExpenseTracker, storage::JsonExpenseStore, time::FixedClock};
use tempfile::TempDir;

/// Instant every test tracker treats as "now".
pub const NOW: &str = "2025-03-14T09:30:00+01:00";

/// Isolated tracker backed by a ledger file inside its own temp directory.
pub struct TestEnv {
    pub tracker: ExpenseTracker,
    pub data_file: PathBuf,
    _guard: TempDir,
}

pub fn setup_test_env() -> TestEnv {
    setup_test_env_at(NOW)
}

pub fn setup_test_env_at(now: &str) -> TestEnv {
    let temp = TempDir::new().expect("create temp dir");
    let data_file = temp.path().join("expenses.json");
    let tracker = tracker_for(&data_file, now);
    TestEnv {
        tracker,
        data_file,
        _guard: temp,
    }
}

/// Second tracker over an existing file, as a later process invocation would see it.
pub fn tracker_for(data_file: &std::path::Path, now: &str) -> ExpenseTracker {
    let clock = FixedClock::parse(now).expect("valid test timestamp");
    ExpenseTracker::new(
        Box::new(JsonExpenseStore::new(data_file.to_path_buf())),
        Box::new(clock),
    )
}
