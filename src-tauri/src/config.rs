//! Application Paths
//!
//! Resolves where the database and log files live.

use std::path::PathBuf;
use tauri::Manager;

/// Environment variable overriding the database location
pub const DB_PATH_ENV: &str = "MONKEY_EXPLORER_DB";

const DB_FILE_NAME: &str = "monkey_explorer.db";
const LOG_PREFIX: &str = "MonkeyExplorer";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub db_path: PathBuf,
    pub log_dir: PathBuf,
    pub log_prefix: String,
}

impl AppConfig {
    /// Resolve paths from the app handle's data and log directories
    pub fn resolve(app_handle: &tauri::AppHandle) -> tauri::Result<Self> {
        let data_dir = app_handle.path().app_data_dir()?;
        let log_dir = app_handle.path().app_log_dir()?;
        let db_override = std::env::var_os(DB_PATH_ENV).map(PathBuf::from);
        Ok(Self::from_dirs(data_dir, log_dir, db_override))
    }

    pub fn from_dirs(data_dir: PathBuf, log_dir: PathBuf, db_override: Option<PathBuf>) -> Self {
        Self {
            db_path: db_override.unwrap_or_else(|| data_dir.join(DB_FILE_NAME)),
            log_dir,
            log_prefix: LOG_PREFIX.to_string(),
        }
    }
}
