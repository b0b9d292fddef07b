//! CSV import
//!
//! Deliberately simple format: one row per non-empty line, fields split on
//! commas with no quoting or escaping. At most `columns` segments are kept;
//! shorter lines leave the remaining slots absent.

use std::io::Cursor;
use std::path::Path;

use crate::model::ColumnCount;

/// Field slots of one imported row, sized to the column count
pub type ImportedFields = Vec<Option<String>>;

/// Error type for CSV import
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportError {
    pub message: String,
    pub line: Option<usize>,
}

impl ImportError {
    fn io(path: &Path, err: std::io::Error) -> Self {
        Self {
            message: format!("{}: {}", path.display(), err),
            line: None,
        }
    }
}

impl std::fmt::Display for ImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.line {
            Some(line) => write!(f, "Import failed at line {}: {}", line, self.message),
            None => write!(f, "Import failed: {}", self.message),
        }
    }
}

impl std::error::Error for ImportError {}

/// Non-empty lines of `content`, each trimmed of surrounding whitespace
///
/// Only `\n` separates lines; a trailing `\r` is removed by the trim.
pub fn import_lines(content: &str) -> impl Iterator<Item = &str> {
    content
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
}

/// Parse CSV text into row field slots
///
/// Segments are not trimmed individually, so `"a, b"` yields `"a"` and `" b"`.
pub fn parse_import(content: &str, columns: ColumnCount) -> Result<Vec<ImportedFields>, ImportError> {
    let joined = import_lines(content).collect::<Vec<_>>().join("\n");
    let width = columns.get();

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b',')
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_reader(Cursor::new(joined.as_bytes()));

    let mut rows = Vec::new();
    for (line_num, result) in reader.records().enumerate() {
        let record = result.map_err(|e| ImportError {
            message: e.to_string(),
            line: Some(line_num + 1),
        })?;
        let mut fields: ImportedFields = record
            .iter()
            .take(width)
            .map(|s| Some(s.to_string()))
            .collect();
        fields.resize(width, None);
        rows.push(fields);
    }

    tracing::debug!(rows = rows.len(), columns = width, "parsed import");
    Ok(rows)
}

/// Read and parse an import file
///
/// Invalid UTF-8 is replaced rather than rejected.
pub fn read_import_file(path: &Path, columns: ColumnCount) -> Result<Vec<ImportedFields>, ImportError> {
    let bytes = std::fs::read(path).map_err(|e| ImportError::io(path, e))?;
    let content = String::from_utf8_lossy(&bytes);
    parse_import(&content, columns)
}
