use chrono::Local;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::{
    fs, io,
    path::{Path, PathBuf},
};

use crate::{
    core::utils::{ensure_dir, tmp_path, write_file},
    errors::Result,
    ledger::Ledger,
};

use super::{ExpenseStore, LoadReport, LoadStatus};

const CORRUPT_SUFFIX: &str = "corrupt";
const CORRUPT_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";
const INDENT: &[u8] = b"    ";

/// JSON file persistence for the expense ledger.
#[derive(Debug, Clone)]
pub struct JsonExpenseStore {
    path: PathBuf,
}

impl JsonExpenseStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Copies an existing file that no longer parses next to the original so the
    /// upcoming overwrite does not destroy it.
    fn preserve_if_malformed(&self) -> Result<Option<PathBuf>> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(_) => return Ok(None),
        };
        if serde_json::from_slice::<Ledger>(&bytes).is_ok() {
            return Ok(None);
        }
        let copy = corrupt_copy_path(&self.path);
        fs::copy(&self.path, &copy)?;
        tracing::warn!(
            file = %self.path.display(),
            copy = %copy.display(),
            "preserved unparsable ledger file before overwriting it"
        );
        Ok(Some(copy))
    }
}

impl ExpenseStore for JsonExpenseStore {
    fn load_report(&self) -> LoadReport {
        let status = match fs::read(&self.path) {
            Ok(bytes) => match serde_json::from_slice::<Ledger>(&bytes) {
                Ok(ledger) => {
                    tracing::debug!(
                        file = %self.path.display(),
                        records = ledger.len(),
                        "loaded ledger"
                    );
                    return LoadReport {
                        ledger,
                        status: LoadStatus::Loaded,
                    };
                }
                Err(err) => LoadStatus::Malformed(err.to_string()),
            },
            Err(err) if err.kind() == io::ErrorKind::NotFound => LoadStatus::Missing,
            Err(err) => LoadStatus::Unreadable(err.to_string()),
        };

        match &status {
            LoadStatus::Missing => {
                tracing::debug!(file = %self.path.display(), "no ledger file yet");
            }
            LoadStatus::Unreadable(reason) | LoadStatus::Malformed(reason) => {
                tracing::warn!(
                    file = %self.path.display(),
                    %reason,
                    "ledger file unusable, continuing with an empty ledger"
                );
            }
            LoadStatus::Loaded => {}
        }

        LoadReport {
            ledger: Ledger::new(),
            status,
        }
    }

    fn save(&self, ledger: &Ledger) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            ensure_dir(parent)?;
        }
        self.preserve_if_malformed()?;
        let json = serialize_ledger(ledger)?;
        let tmp = tmp_path(&self.path);
        write_file(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        tracing::debug!(
            file = %self.path.display(),
            records = ledger.len(),
            "saved ledger"
        );
        Ok(())
    }
}

/// Pretty JSON with four-space indentation, the layout existing ledger files use.
pub fn serialize_ledger(ledger: &Ledger) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(INDENT);
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    ledger.serialize(&mut serializer)?;
    // serde_json only emits valid UTF-8.
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

fn corrupt_copy_path(path: &Path) -> PathBuf {
    let timestamp = Local::now().format(CORRUPT_TIMESTAMP_FORMAT);
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "ledger".to_string());
    path.with_file_name(format!("{file_name}.{CORRUPT_SUFFIX}-{timestamp}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::Expense;
    use chrono::DateTime;
    use tempfile::TempDir;

    fn store_in_temp_dir() -> (JsonExpenseStore, TempDir) {
        let temp = TempDir::new().expect("temp dir");
        let store = JsonExpenseStore::new(temp.path().join("expenses.json"));
        (store, temp)
    }

    fn sample_ledger() -> Ledger {
        let date = DateTime::parse_from_rfc3339("2025-04-01T09:00:00.123456789+02:00").unwrap();
        Ledger::from_expenses(vec![
            Expense::new(1, "Lunch", 12.5, date),
            Expense::new(2, "Taxi", 8.0, date),
        ])
    }

    #[test]
    fn save_and_load_roundtrip() {
        let (store, _guard) = store_in_temp_dir();
        let ledger = sample_ledger();
        store.save(&ledger).expect("save ledger");
        let report = store.load_report();
        assert_eq!(report.status, LoadStatus::Loaded);
        assert_eq!(report.ledger, ledger);
    }

    #[test]
    fn missing_file_loads_empty() {
        let (store, _guard) = store_in_temp_dir();
        let report = store.load_report();
        assert_eq!(report.status, LoadStatus::Missing);
        assert!(report.ledger.is_empty());
    }

    #[test]
    fn malformed_file_loads_empty() {
        let (store, _guard) = store_in_temp_dir();
        fs::write(store.path(), "{ not json").unwrap();
        let report = store.load_report();
        assert!(matches!(report.status, LoadStatus::Malformed(_)));
        assert!(report.ledger.is_empty());
    }

    #[test]
    fn binary_garbage_is_malformed_not_unreadable() {
        let (store, _guard) = store_in_temp_dir();
        fs::write(store.path(), [0xff, 0xfe, b'[', 0x80]).unwrap();
        let report = store.load_report();
        assert!(matches!(report.status, LoadStatus::Malformed(_)), "{:?}", report.status);
        assert!(report.ledger.is_empty());
    }

    #[test]
    fn save_uses_four_space_indent_and_leaves_no_tmp_file() {
        let (store, guard) = store_in_temp_dir();
        store.save(&sample_ledger()).unwrap();
        let raw = fs::read_to_string(store.path()).unwrap();
        assert!(raw.starts_with("[\n    {\n        \"id\": 1,"), "{raw}");
        let leftovers: Vec<_> = fs::read_dir(guard.path())
            .unwrap()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_name().to_string_lossy().ends_with(".tmp"))
            .collect();
        assert!(leftovers.is_empty());
    }

    #[test]
    fn save_creates_parent_directories() {
        let temp = TempDir::new().unwrap();
        let store = JsonExpenseStore::new(temp.path().join("nested").join("expenses.json"));
        store.save(&Ledger::new()).unwrap();
        assert_eq!(fs::read_to_string(store.path()).unwrap(), "[]");
    }

    #[test]
    fn overwriting_malformed_file_keeps_a_copy() {
        let (store, guard) = store_in_temp_dir();
        fs::write(store.path(), "garbage").unwrap();
        store.save(&sample_ledger()).unwrap();

        let copies: Vec<_> = fs::read_dir(guard.path())
            .unwrap()
            .filter_map(|entry| entry.ok())
            .filter(|entry| {
                entry
                    .file_name()
                    .to_string_lossy()
                    .starts_with("expenses.json.corrupt-")
            })
            .collect();
        assert_eq!(copies.len(), 1);
        assert_eq!(fs::read_to_string(copies[0].path()).unwrap(), "garbage");
        assert_eq!(store.load(), sample_ledger());
    }
}
