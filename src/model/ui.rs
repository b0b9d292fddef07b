//! UI state - status bar, cursor blink, scrolling, and the position editor

use std::path::PathBuf;
use std::time::{Duration, Instant};

use super::input::TextInput;
use super::list::RowId;

/// Inline editor that temporarily replaces a row's position label
#[derive(Debug, Clone)]
pub struct PositionEdit {
    pub row: RowId,
    pub input: TextInput,
}

impl PositionEdit {
    /// Start editing, pre-filled with the row's current 1-based position
    pub fn new(row: RowId, current_position: usize) -> Self {
        Self {
            row,
            input: TextInput::numeric(current_position.to_string()),
        }
    }

    /// The requested position, if the input holds a positive integer
    pub fn requested_position(&self) -> Option<usize> {
        parse_position(self.input.text())
    }
}

/// Parse a manually entered position
///
/// Integer-prefix semantics: leading whitespace, an optional sign, then the
/// leading run of digits. Anything after the digits is ignored. Returns `None`
/// for non-numeric input and for values that are zero or negative.
pub fn parse_position(text: &str) -> Option<usize> {
    let s = text.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    let digits = &digits[..end];
    if digits.is_empty() || negative {
        return None;
    }
    // Out-of-range values saturate; the caller clamps to the row count anyway.
    let value = digits.parse::<usize>().unwrap_or(usize::MAX);
    (value > 0).then_some(value)
}

/// A status message that disappears after a while
#[derive(Debug, Clone)]
pub struct TransientMessage {
    pub text: String,
    pub expires_at: Instant,
}

impl TransientMessage {
    pub fn new(text: impl Into<String>, duration: Duration) -> Self {
        Self {
            text: text.into(),
            expires_at: Instant::now() + duration,
        }
    }

    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

/// UI state
#[derive(Debug, Clone)]
pub struct UiState {
    /// Persistent status text (right side of the status bar)
    pub status_message: String,
    /// Transient message with auto-expiry
    pub transient_message: Option<TransientMessage>,
    /// Whether the text cursor is currently visible (for blinking)
    pub cursor_visible: bool,
    /// Timestamp of last cursor blink state change
    pub last_cursor_blink: Instant,
    /// Vertical scroll offset of the row list, in pixels
    pub scroll_offset: f32,
    /// Active inline position editor, if any
    pub position_edit: Option<PositionEdit>,
    /// Whether an import file read is in flight
    pub is_importing: bool,
    /// Most recently imported file (the import dialog starts in its directory)
    pub last_import: Option<PathBuf>,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            status_message: String::new(),
            transient_message: None,
            cursor_visible: true,
            last_cursor_blink: Instant::now(),
            scroll_offset: 0.0,
            position_edit: None,
            is_importing: false,
            last_import: None,
        }
    }

    /// Reset cursor blink timer (call after user input)
    pub fn reset_cursor_blink(&mut self) {
        self.cursor_visible = true;
        self.last_cursor_blink = Instant::now();
    }

    /// Update cursor blink state based on elapsed time
    /// Returns true if the state changed (needs redraw)
    pub fn update_cursor_blink(&mut self, blink_interval: Duration) -> bool {
        if self.last_cursor_blink.elapsed() >= blink_interval {
            self.cursor_visible = !self.cursor_visible;
            self.last_cursor_blink = Instant::now();
            true
        } else {
            false
        }
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
    }

    pub fn show_transient(&mut self, text: impl Into<String>, duration: Duration) {
        self.transient_message = Some(TransientMessage::new(text, duration));
    }

    /// Drop the transient message once expired. Returns true if it was removed.
    pub fn expire_transient(&mut self) -> bool {
        if self
            .transient_message
            .as_ref()
            .is_some_and(TransientMessage::is_expired)
        {
            self.transient_message = None;
            true
        } else {
            false
        }
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_position_plain() {
        assert_eq!(parse_position("3"), Some(3));
        assert_eq!(parse_position("  12"), Some(12));
        assert_eq!(parse_position("+4"), Some(4));
    }

    #[test]
    fn test_parse_position_integer_prefix() {
        assert_eq!(parse_position("3abc"), Some(3));
        assert_eq!(parse_position("2.7"), Some(2));
        assert_eq!(parse_position("5e2"), Some(5));
    }

    #[test]
    fn test_parse_position_rejects_invalid() {
        assert_eq!(parse_position(""), None);
        assert_eq!(parse_position("x"), None);
        assert_eq!(parse_position("0"), None);
        assert_eq!(parse_position("-1"), None);
        assert_eq!(parse_position("-"), None);
        assert_eq!(parse_position(".5"), None);
    }

    #[test]
    fn test_parse_position_huge_value_saturates() {
        assert_eq!(
            parse_position("99999999999999999999999999"),
            Some(usize::MAX)
        );
    }

    #[test]
    fn test_position_edit_prefilled() {
        let edit = PositionEdit::new(RowId(1), 4);
        assert_eq!(edit.input.text(), "4");
        assert_eq!(edit.requested_position(), Some(4));
    }

    #[test]
    fn test_transient_message_expiry() {
        let mut ui = UiState::new();
        ui.show_transient("hello", Duration::ZERO);
        assert!(ui.expire_transient());
        assert!(ui.transient_message.is_none());
        assert!(!ui.expire_transient());
    }
}
