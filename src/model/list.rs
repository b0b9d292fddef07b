//! Row sequence - the ordered list of ranked rows
//!
//! The sequence is the authoritative state: there is no shadow structure
//! behind it. A row's displayed position is not derived on the fly; it is
//! written into the row by the renumbering pass, so between a structural
//! change and the next pass a label may be stale (e.g. during a live drag).

use std::fmt;

/// Glyph appended to every renumbered position label ("1.", "2.", ...)
pub const POSITION_SEPARATOR: &str = ".";

/// Unique identifier for a row
///
/// Identity is only used to address rows from messages and hit targets;
/// ordering always comes from the row's index in the sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RowId(pub u64);

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "row#{}", self.0)
    }
}

/// One ranked entry
///
/// `fields` is sized to the column count in effect when the row was built.
/// `None` marks an absent value (a CSV line with fewer segments than columns).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub id: RowId,
    fields: Vec<Option<String>>,
    label: String,
}

impl Row {
    /// Build a row with a provisional label taken from the position hint
    pub fn new(id: RowId, fields: Vec<Option<String>>, position_hint: usize) -> Self {
        Self {
            id,
            fields,
            label: position_hint.to_string(),
        }
    }

    /// Build a row where every slot holds a value
    pub fn with_values(id: RowId, values: Vec<String>, position_hint: usize) -> Self {
        Self::new(id, values.into_iter().map(Some).collect(), position_hint)
    }

    /// Number of field slots (present or absent)
    #[inline]
    pub fn width(&self) -> usize {
        self.fields.len()
    }

    /// All field slots in order
    #[inline]
    pub fn fields(&self) -> &[Option<String>] {
        &self.fields
    }

    /// Value of a single slot, `None` if absent or out of range
    pub fn field(&self, idx: usize) -> Option<&str> {
        self.fields.get(idx).and_then(|f| f.as_deref())
    }

    /// Number of slots that hold a value
    pub fn present_count(&self) -> usize {
        self.fields.iter().filter(|f| f.is_some()).count()
    }

    /// The values currently displayed, in order (absent slots skipped)
    ///
    /// This is what an edit session is pre-populated from.
    pub fn present_values(&self) -> Vec<String> {
        self.fields.iter().flatten().cloned().collect()
    }

    /// Currently displayed position label
    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Overwrite field slots positionally
    ///
    /// Only present slots are touched: absent slots stay absent, values
    /// beyond `width()` are ignored, and present slots without a matching
    /// value become empty strings.
    pub fn overwrite_fields(&mut self, values: &[String]) {
        for (idx, slot) in self.fields.iter_mut().enumerate() {
            if let Some(value) = slot {
                *value = values.get(idx).cloned().unwrap_or_default();
            }
        }
    }
}

/// The ordered, authoritative sequence of rows
#[derive(Debug, Clone)]
pub struct RankedList {
    rows: Vec<Row>,
    /// Default position for the next created row (`len + 1` after a pass)
    next_position: usize,
    next_row_id: u64,
    /// Number of renumbering passes run so far
    renumber_passes: u64,
}

impl Default for RankedList {
    fn default() -> Self {
        Self::new()
    }
}

impl RankedList {
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            next_position: 1,
            next_row_id: 1,
            renumber_passes: 0,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[inline]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn iter(&self) -> impl Iterator<Item = &Row> {
        self.rows.iter()
    }

    pub fn get(&self, id: RowId) -> Option<&Row> {
        self.rows.iter().find(|r| r.id == id)
    }

    pub fn get_mut(&mut self, id: RowId) -> Option<&mut Row> {
        self.rows.iter_mut().find(|r| r.id == id)
    }

    pub fn index_of(&self, id: RowId) -> Option<usize> {
        self.rows.iter().position(|r| r.id == id)
    }

    pub fn contains(&self, id: RowId) -> bool {
        self.index_of(id).is_some()
    }

    /// Row ids in display order
    pub fn ids(&self) -> Vec<RowId> {
        self.rows.iter().map(|r| r.id).collect()
    }

    /// Displayed labels in display order
    pub fn labels(&self) -> Vec<&str> {
        self.rows.iter().map(|r| r.label()).collect()
    }

    #[inline]
    pub fn next_position(&self) -> usize {
        self.next_position
    }

    #[inline]
    pub fn renumber_passes(&self) -> u64 {
        self.renumber_passes
    }

    /// Reserve a fresh row id
    pub fn allocate_id(&mut self) -> RowId {
        let id = RowId(self.next_row_id);
        self.next_row_id += 1;
        id
    }

    /// Build a detached row with a fresh id (not yet part of the sequence)
    pub fn build_row(&mut self, fields: Vec<Option<String>>, position_hint: usize) -> Row {
        let id = self.allocate_id();
        Row::new(id, fields, position_hint)
    }

    /// Append a row at the end of the sequence
    pub fn append(&mut self, row: Row) {
        tracing::debug!(target: "list", row = %row.id, "append");
        self.rows.push(row);
    }

    /// Remove a row, returning it if it was present
    pub fn remove(&mut self, id: RowId) -> Option<Row> {
        let idx = self.index_of(id)?;
        tracing::debug!(target: "list", row = %id, index = idx, "remove");
        Some(self.rows.remove(idx))
    }

    /// Relocate a row so its 1-based index equals `position`
    ///
    /// `position` is clamped into `[1, len]`. Returns true if the order changed.
    pub fn move_to_position(&mut self, id: RowId, position: usize) -> bool {
        let Some(from) = self.index_of(id) else {
            return false;
        };
        let to = position.clamp(1, self.rows.len()) - 1;
        if from == to {
            return false;
        }
        let row = self.rows.remove(from);
        self.rows.insert(to, row);
        tracing::debug!(target: "list", row = %id, from, to, "move to position");
        true
    }

    /// Move `id` so that it sits immediately before `anchor`
    ///
    /// Returns true if the order changed.
    pub fn insert_before(&mut self, id: RowId, anchor: RowId) -> bool {
        if id == anchor {
            return false;
        }
        let (Some(from), Some(anchor_idx)) = (self.index_of(id), self.index_of(anchor)) else {
            return false;
        };
        if from + 1 == anchor_idx {
            return false;
        }
        let row = self.rows.remove(from);
        let to = if from < anchor_idx {
            anchor_idx - 1
        } else {
            anchor_idx
        };
        self.rows.insert(to, row);
        true
    }

    /// Move a row to the end of the sequence
    ///
    /// Returns true if the order changed.
    pub fn move_to_end(&mut self, id: RowId) -> bool {
        let Some(from) = self.index_of(id) else {
            return false;
        };
        if from + 1 == self.rows.len() {
            return false;
        }
        let row = self.rows.remove(from);
        self.rows.push(row);
        true
    }

    /// Replace the whole sequence (destructive, no merge)
    pub fn replace_all(&mut self, rows: Vec<Row>) {
        tracing::debug!(
            target: "list",
            old = self.rows.len(),
            new = rows.len(),
            "replace all rows"
        );
        self.rows = rows;
    }

    /// Renumbering pass
    ///
    /// Writes `index + 1` plus the separator into every row's label and resets
    /// the next default position to `len + 1`. Idempotent.
    pub fn renumber(&mut self) {
        for (i, row) in self.rows.iter_mut().enumerate() {
            row.label = format!("{}{}", i + 1, POSITION_SEPARATOR);
        }
        self.next_position = self.rows.len() + 1;
        self.renumber_passes += 1;
        tracing::debug!(target: "list", count = self.rows.len(), "renumbered");
    }

    /// Check structural invariants (debug builds)
    ///
    /// Panics if two rows share an id.
    #[cfg(debug_assertions)]
    pub fn assert_invariants(&self, context: &str) {
        let mut seen = std::collections::HashSet::new();
        for row in &self.rows {
            assert!(
                seen.insert(row.id),
                "[{}] duplicate row id {} in sequence",
                context,
                row.id
            );
        }
    }
}
