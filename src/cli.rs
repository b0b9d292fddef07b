//! Command-line argument parsing
//!
//! Supports:
//! - Importing a CSV file at startup
//! - Overriding the configured column count and theme

use clap::Parser;
use std::path::PathBuf;

use crate::config::AppConfig;
use crate::model::ColumnCount;

/// A ranked list with drag-and-drop reordering and CSV import
#[derive(Parser, Debug)]
#[command(
    name = "ranklist",
    version,
    about = "A ranked list with drag-and-drop reordering and CSV import"
)]
pub struct CliArgs {
    /// CSV file to import at startup
    #[arg(value_name = "CSV")]
    pub csv: Option<PathBuf>,

    /// Number of field columns (1-4)
    #[arg(short = 'c', long, value_name = "N", value_parser = clap::value_parser!(u8).range(1..=4))]
    pub columns: Option<u8>,

    /// Theme id (e.g. default-dark, default-light)
    #[arg(short = 't', long, value_name = "ID")]
    pub theme: Option<String>,

    /// Print the available themes and exit
    #[arg(long)]
    pub list_themes: bool,
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone, Default)]
pub struct StartupConfig {
    /// File to import once the window is up
    pub import: Option<PathBuf>,
    pub columns: Option<ColumnCount>,
    pub theme: Option<String>,
    pub list_themes: bool,
}

impl CliArgs {
    /// Convert parsed CLI args into startup configuration
    pub fn into_config(self) -> Result<StartupConfig, String> {
        if let Some(path) = &self.csv {
            if path.is_dir() {
                return Err(format!("{} is a directory, expected a CSV file", path.display()));
            }
        }

        let columns = match self.columns {
            Some(n) => Some(
                ColumnCount::new(n).ok_or_else(|| format!("Column count out of range: {}", n))?,
            ),
            None => None,
        };

        Ok(StartupConfig {
            import: self.csv,
            columns,
            theme: self.theme,
            list_themes: self.list_themes,
        })
    }
}

impl StartupConfig {
    /// Apply CLI overrides on top of the loaded config (not persisted)
    pub fn apply_to(&self, config: &mut AppConfig) {
        if let Some(columns) = self.columns {
            config.columns = columns.get() as i64;
        }
        if let Some(theme) = &self.theme {
            config.theme = theme.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(csv: Option<&str>, columns: Option<u8>, theme: Option<&str>) -> CliArgs {
        CliArgs {
            csv: csv.map(PathBuf::from),
            columns,
            theme: theme.map(str::to_string),
            list_themes: false,
        }
    }

    #[test]
    fn test_empty_args() {
        let config = args(None, None, None).into_config().unwrap();
        assert!(config.import.is_none());
        assert!(config.columns.is_none());
        assert!(!config.list_themes);
    }

    #[test]
    fn test_csv_path_is_kept() {
        let config = args(Some("people.csv"), None, None).into_config().unwrap();
        assert_eq!(config.import, Some(PathBuf::from("people.csv")));
    }

    #[test]
    fn test_directory_is_rejected() {
        let dir = std::env::temp_dir();
        let result = args(dir.to_str(), None, None).into_config();
        assert!(result.is_err());
    }

    #[test]
    fn test_overrides_apply_to_config() {
        let startup = args(None, Some(3), Some("default-light"))
            .into_config()
            .unwrap();
        let mut config = AppConfig::default();
        startup.apply_to(&mut config);
        assert_eq!(config.columns().get(), 3);
        assert_eq!(config.theme, "default-light");
    }

    #[test]
    fn test_clap_rejects_out_of_range_columns() {
        assert!(CliArgs::try_parse_from(["ranklist", "--columns", "0"]).is_err());
        assert!(CliArgs::try_parse_from(["ranklist", "--columns", "5"]).is_err());
        let parsed = CliArgs::try_parse_from(["ranklist", "--columns", "4", "a.csv"]).unwrap();
        assert_eq!(parsed.columns, Some(4));
        assert_eq!(parsed.csv, Some(PathBuf::from("a.csv")));
    }
}
