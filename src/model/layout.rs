//! Layout setting - the process-wide column count

use std::fmt;

/// Number of field columns
///
/// Read when a row is built and when the form opens. Changing it never
/// alters existing rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ColumnCount(u8);

impl ColumnCount {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 4;

    /// All selectable column counts, in selector order
    pub fn options() -> impl Iterator<Item = ColumnCount> {
        (Self::MIN..=Self::MAX).map(ColumnCount)
    }

    /// Exact constructor, `None` if out of range
    pub fn new(count: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX).contains(&count).then_some(Self(count))
    }

    /// Clamping constructor for values from config files
    pub fn clamped(count: i64) -> Self {
        Self(count.clamp(Self::MIN as i64, Self::MAX as i64) as u8)
    }

    #[inline]
    pub fn get(self) -> usize {
        self.0 as usize
    }
}

impl Default for ColumnCount {
    fn default() -> Self {
        Self(2)
    }
}

impl fmt::Display for ColumnCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Current layout of the row container
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    columns: ColumnCount,
    container_class: String,
}

impl Layout {
    pub fn new(columns: ColumnCount) -> Self {
        Self {
            columns,
            container_class: container_class_for(columns),
        }
    }

    #[inline]
    pub fn columns(&self) -> ColumnCount {
        self.columns
    }

    /// Style class of the row container, e.g. `list columns-3`
    #[inline]
    pub fn container_class(&self) -> &str {
        &self.container_class
    }

    /// Apply a new column count. Returns true if it changed.
    pub fn set_columns(&mut self, columns: ColumnCount) -> bool {
        if self.columns == columns {
            return false;
        }
        self.columns = columns;
        self.container_class = container_class_for(columns);
        true
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::new(ColumnCount::default())
    }
}

fn container_class_for(columns: ColumnCount) -> String {
    format!("list columns-{}", columns)
}
