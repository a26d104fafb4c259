use dirs::home_dir;
use std::{
    env,
    fs::{self, File},
    io::{self, Write},
    path::{Path, PathBuf},
};

const HOME_ENV: &str = "EXPENSE_TRACKER_HOME";
const FILE_ENV: &str = "EXPENSE_TRACKER_FILE";
const DEFAULT_DIR_NAME: &str = ".expense_tracker";
const CONFIG_FILE: &str = "config.json";
const DATA_FILE: &str = "expenses.json";
const TMP_SUFFIX: &str = "tmp";

/// Resolves the on-disk locations used by the tracker.
pub struct PathResolver;

impl PathResolver {
    /// Application data directory: `$EXPENSE_TRACKER_HOME`, else `~/.expense_tracker`.
    pub fn base_dir() -> PathBuf {
        if let Some(custom) = env::var_os(HOME_ENV) {
            return PathBuf::from(custom);
        }
        home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(DEFAULT_DIR_NAME)
    }

    pub fn config_file_in(base: &Path) -> PathBuf {
        base.join(CONFIG_FILE)
    }

    pub fn default_data_file_in(base: &Path) -> PathBuf {
        base.join(DATA_FILE)
    }

    /// Data file override from `$EXPENSE_TRACKER_FILE`, if set and non-empty.
    pub fn data_file_from_env() -> Option<PathBuf> {
        env::var_os(FILE_ENV)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
    }
}

pub fn ensure_dir(path: &Path) -> io::Result<()> {
    if path.as_os_str().is_empty() || path.exists() {
        return Ok(());
    }
    fs::create_dir_all(path)
}

/// Staging path used before renaming over `path`, e.g. `expenses.json.tmp`.
pub fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

/// Writes `data` to `path` and flushes it to disk. Callers rename the result into place.
pub fn write_file(path: &Path, data: &str) -> io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    file.sync_all()?;
    Ok(())
}
