//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use std::path::PathBuf;

use crate::import::{ImportError, ImportedFields};
use crate::model::{ColumnCount, DragOrigin, InputEdit, RowId};

/// Row sequence messages (removal, manual repositioning, scrolling)
#[derive(Debug, Clone)]
pub enum ListMsg {
    /// Remove a row (remove button)
    Remove(RowId),
    /// Swap a row's position label for the inline position editor
    BeginReposition(RowId),
    /// Edit the text of the position editor
    RepositionInput(InputEdit),
    /// Leave the position editor, moving the row if the value is valid
    CommitReposition,
    /// Leave the position editor without moving the row
    CancelReposition,
    /// Scroll the list vertically by pixels (positive = down)
    Scroll(f32),
}

/// Add/edit form messages
#[derive(Debug, Clone)]
pub enum FormMsg {
    /// Open an empty form for a new row
    OpenCreate,
    /// Open the form bound to an existing row
    OpenEdit(RowId),
    /// Edit the focused input
    Input(InputEdit),
    /// Focus an input by index (mouse click), optionally placing the cursor
    FocusField { index: usize, cursor: Option<usize> },
    /// Focus the next input (Tab)
    FocusNext,
    /// Focus the previous input (Shift+Tab)
    FocusPrev,
    Submit,
    Cancel,
}

/// Drag-reorder messages
#[derive(Debug, Clone)]
pub enum DragMsg {
    /// Begin dragging a row
    Start { row: RowId, origin: DragOrigin },
    /// Pointer moved while dragging (window y coordinate)
    Over { pointer_y: f32 },
    /// Drag finished (pointer released or cancelled)
    End,
}

/// Layout setting messages
#[derive(Debug, Clone)]
pub enum LayoutMsg {
    /// Select a new column count
    SetColumns(ColumnCount),
}

/// CSV import messages
#[derive(Debug, Clone)]
pub enum ImportMsg {
    /// Show the file chooser
    Request,
    /// File chooser returned (None if cancelled) or a file was dropped
    FileChosen(Option<PathBuf>),
    /// Background read finished
    Loaded {
        path: PathBuf,
        columns: ColumnCount,
        result: Result<Vec<ImportedFields>, ImportError>,
    },
}

/// UI messages (status, animation)
#[derive(Debug, Clone)]
pub enum UiMsg {
    /// Set the persistent status bar message
    SetStatus(String),
    /// Set a transient message that auto-expires
    SetTransientMessage { text: String, duration_ms: u64 },
    /// Clear the transient message
    ClearTransientMessage,
    /// Toggle cursor blink state (also expires transient messages)
    BlinkCursor,
}

/// App messages (window, lifecycle)
#[derive(Debug, Clone)]
pub enum AppMsg {
    /// Window resized
    Resize(u32, u32),
    /// Display scale factor changed (e.g., moving between monitors)
    ScaleFactorChanged(f64),
    /// Quit the application
    Quit,
}

/// Top-level message type
#[derive(Debug, Clone)]
pub enum Msg {
    List(ListMsg),
    Form(FormMsg),
    Drag(DragMsg),
    Layout(LayoutMsg),
    Import(ImportMsg),
    Ui(UiMsg),
    App(AppMsg),
}

// Convenience constructors for common messages
impl Msg {
    pub fn resize(width: u32, height: u32) -> Self {
        Msg::App(AppMsg::Resize(width, height))
    }

    pub fn set_columns(columns: ColumnCount) -> Self {
        Msg::Layout(LayoutMsg::SetColumns(columns))
    }
}
