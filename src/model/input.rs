//! Single-line text input state
//!
//! Used by the form session (one per column) and by the position editor.
//! The cursor is a character index, not a byte index.

/// Character filter function type
pub type CharFilter = fn(char) -> bool;

/// Characters a numeric position input accepts
fn numeric_chars(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '-' | '+' | '.' | 'e' | 'E')
}

/// Editing operations on a text input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEdit {
    InsertChar(char),
    /// Insert text at the cursor (paste); line breaks are dropped
    InsertText(String),
    DeleteBackward,
    DeleteForward,
    CursorLeft,
    CursorRight,
    CursorHome,
    CursorEnd,
    SetCursor(usize),
}

#[derive(Debug, Clone, Default)]
pub struct TextInput {
    text: String,
    cursor: usize,
    placeholder: String,
    filter: Option<CharFilter>,
}

impl TextInput {
    /// Empty input with a placeholder
    pub fn new(placeholder: impl Into<String>) -> Self {
        Self {
            placeholder: placeholder.into(),
            ..Self::default()
        }
    }

    /// Input pre-filled with `text`, cursor at the end
    pub fn with_text(text: impl Into<String>, placeholder: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.chars().count();
        Self {
            text,
            cursor,
            placeholder: placeholder.into(),
            filter: None,
        }
    }

    /// Numeric input (position editor), pre-filled with `text`
    pub fn numeric(text: impl Into<String>) -> Self {
        let mut input = Self::with_text(text, "");
        input.filter = Some(numeric_chars);
        input
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Cursor position in characters
    #[inline]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    fn byte_offset(&self, char_idx: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_idx)
            .map(|(b, _)| b)
            .unwrap_or(self.text.len())
    }

    fn accepts(&self, ch: char) -> bool {
        !ch.is_control() && self.filter.map_or(true, |f| f(ch))
    }

    pub fn insert_char(&mut self, ch: char) -> bool {
        if !self.accepts(ch) {
            return false;
        }
        let at = self.byte_offset(self.cursor);
        self.text.insert(at, ch);
        self.cursor += 1;
        true
    }

    pub fn insert_text(&mut self, text: &str) -> bool {
        let mut changed = false;
        for ch in text.chars().filter(|c| *c != '\n' && *c != '\r') {
            changed |= self.insert_char(ch);
        }
        changed
    }

    pub fn delete_backward(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        let at = self.byte_offset(self.cursor);
        self.text.remove(at);
        true
    }

    pub fn delete_forward(&mut self) -> bool {
        if self.cursor >= self.char_count() {
            return false;
        }
        let at = self.byte_offset(self.cursor);
        self.text.remove(at);
        true
    }

    pub fn set_cursor(&mut self, column: usize) {
        self.cursor = column.min(self.char_count());
    }

    /// Apply an edit. Returns true if text or cursor changed.
    pub fn apply(&mut self, edit: InputEdit) -> bool {
        let before = self.cursor;
        match edit {
            InputEdit::InsertChar(ch) => self.insert_char(ch),
            InputEdit::InsertText(text) => self.insert_text(&text),
            InputEdit::DeleteBackward => self.delete_backward(),
            InputEdit::DeleteForward => self.delete_forward(),
            InputEdit::CursorLeft => {
                self.cursor = self.cursor.saturating_sub(1);
                self.cursor != before
            }
            InputEdit::CursorRight => {
                self.set_cursor(self.cursor + 1);
                self.cursor != before
            }
            InputEdit::CursorHome => {
                self.cursor = 0;
                self.cursor != before
            }
            InputEdit::CursorEnd => {
                self.cursor = self.char_count();
                self.cursor != before
            }
            InputEdit::SetCursor(column) => {
                self.set_cursor(column);
                self.cursor != before
            }
        }
    }
}
