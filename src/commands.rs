//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.

use std::path::PathBuf;

use crate::model::ColumnCount;

/// Commands returned by update functions
#[derive(Debug, Clone, Default)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Request a full redraw of the UI
    Redraw,
    /// Execute multiple commands
    Batch(Vec<Cmd>),

    // === Import ===
    /// Show the native CSV file chooser
    /// Sends `ImportMsg::FileChosen` when the dialog closes
    ShowImportDialog { start_dir: Option<PathBuf> },
    /// Read and parse an import file in a background worker
    /// Sends `ImportMsg::Loaded` when done
    ReadImportFile { path: PathBuf, columns: ColumnCount },

    // === Display Commands ===
    /// Reinitialize the renderer (e.g., after scale factor change)
    ReinitializeRenderer,

    // === Application Commands ===
    /// Request application exit
    Quit,
}

impl Cmd {
    /// Create a batch of commands
    pub fn batch(cmds: Vec<Cmd>) -> Self {
        Cmd::Batch(cmds)
    }

    /// Check if this command requires a redraw
    pub fn needs_redraw(&self) -> bool {
        match self {
            Cmd::None => false,
            Cmd::Redraw => true,
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.needs_redraw()),
            // Dialogs and reads don't need immediate redraw - they'll send messages when done
            Cmd::ShowImportDialog { .. } => false,
            Cmd::ReadImportFile { .. } => false,
            Cmd::ReinitializeRenderer => true,
            Cmd::Quit => false,
        }
    }

    /// Convert Option<Cmd> with None to Cmd::None
    pub fn from_option(opt: Option<Cmd>) -> Self {
        opt.unwrap_or(Cmd::None)
    }
}

// Allow converting Option<Cmd> to Cmd
impl From<Option<Cmd>> for Cmd {
    fn from(opt: Option<Cmd>) -> Self {
        opt.unwrap_or(Cmd::None)
    }
}
