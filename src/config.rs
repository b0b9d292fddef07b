//! Application configuration persistence
//!
//! Stores user preferences in `~/.config/ranklist/config.yaml`

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::model::ColumnCount;

/// Configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Selected theme id (e.g., "default-dark", "default-light")
    #[serde(default = "default_theme")]
    pub theme: String,
    /// Column count at startup; clamped into 1..=4 when read
    #[serde(default = "default_columns")]
    pub columns: i64,
    /// Monospace font file to render with. Falls back to system fonts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_path: Option<PathBuf>,
    /// Font size in logical points
    #[serde(default = "default_font_size")]
    pub font_size: f32,
}

fn default_theme() -> String {
    "default-dark".to_string()
}

fn default_columns() -> i64 {
    ColumnCount::default().get() as i64
}

fn default_font_size() -> f32 {
    14.0
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            columns: default_columns(),
            font_path: None,
            font_size: default_font_size(),
        }
    }
}

impl AppConfig {
    /// Startup column count
    pub fn columns(&self) -> ColumnCount {
        ColumnCount::clamped(self.columns)
    }

    /// Load config from the user config dir, creating it with defaults if absent
    pub fn load() -> Self {
        match crate::config_paths::config_file() {
            Some(path) => Self::load_or_create(&path),
            None => {
                tracing::debug!("No config directory available, using defaults");
                Self::default()
            }
        }
    }

    /// Load config from `path`
    ///
    /// Missing, unreadable, or malformed files all yield defaults.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str::<AppConfig>(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Load config from `path`, writing a default file there on first run
    pub fn load_or_create(path: &Path) -> Self {
        if path.exists() {
            return Self::load_from(path);
        }

        let config = Self::default();
        if let Err(e) = config.save_to(path) {
            tracing::warn!("Could not write default config: {}", e);
        }
        config
    }

    /// Save config to `path`, creating parent directories as needed
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }
}
