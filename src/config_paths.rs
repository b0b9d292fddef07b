//! Where ranklist keeps its files
//!
//! Everything lives under one directory:
//! - Unix/macOS: `$XDG_CONFIG_HOME/ranklist/` or `~/.config/ranklist/`
//! - Windows: `%APPDATA%\ranklist\`
//!
//! ```text
//! ranklist/
//! ├── config.yaml
//! ├── themes/        user themes, `<id>.yaml`
//! └── logs/          daily rolling `ranklist.log.*`
//! ```

use std::{env, fs, path::PathBuf};

const APP_DIR: &str = "ranklist";

/// File name prefix of the rolling log files
pub const LOG_FILE_PREFIX: &str = "ranklist.log";

/// Root of all ranklist files, if the platform has a config location
pub fn config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    let base = env::var_os("APPDATA").map(PathBuf::from);

    #[cfg(not(target_os = "windows"))]
    let base = env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| dirs::home_dir().map(|h| h.join(".config")));

    base.map(|dir| dir.join(APP_DIR))
}

pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.yaml"))
}

/// Directory scanned for user themes; never created by ranklist
pub fn themes_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("themes"))
}

pub fn logs_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("logs"))
}

/// Create the logs directory (and its parents) for the file logger
pub fn ensure_logs_dir() -> Result<PathBuf, String> {
    let logs = logs_dir().ok_or_else(|| "No config directory available".to_string())?;
    fs::create_dir_all(&logs)
        .map_err(|e| format!("Failed to create directory {}: {}", logs.display(), e))?;
    Ok(logs)
}
