//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

mod app;
mod drag;
mod form;
mod import;
mod layout;
mod list;
mod ui;

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::AppModel;

#[cfg(debug_assertions)]
use crate::tracing::ListSnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use app::update_app;
pub use drag::update_drag;
pub use form::update_form;
pub use import::update_import;
pub use layout::update_layout;
pub use list::{commit_reposition, update_list};
pub use ui::update_ui;

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, msg)
    }
}

/// Inner update logic (no tracing)
fn update_inner(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::List(m) => list::update_list(model, m),
        Msg::Form(m) => form::update_form(model, m),
        Msg::Drag(m) => drag::update_drag(model, m),
        Msg::Layout(m) => layout::update_layout(model, m),
        Msg::Import(m) => import::update_import(model, m),
        Msg::Ui(m) => ui::update_ui(model, m),
        Msg::App(m) => app::update_app(model, m),
    }
}

/// Traced update wrapper (debug builds only)
///
/// Captures the row sequence before and after and logs the diff.
/// Filters out noisy messages like BlinkCursor and DragOver from logging.
#[cfg(debug_assertions)]
fn update_traced(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    use crate::messages::{DragMsg, UiMsg};

    let is_noisy = matches!(
        &msg,
        Msg::Ui(UiMsg::BlinkCursor) | Msg::Drag(DragMsg::Over { .. })
    );

    let msg_name = msg_type_name(&msg);
    let _span = if is_noisy {
        None
    } else {
        Some(span!(Level::DEBUG, "update", msg = %msg_name).entered())
    };

    let before = ListSnapshot::from_list(&model.list);

    if !is_noisy {
        debug!(target: "message", msg = %msg_name, "processing");
    }

    let result = update_inner(model, msg);

    let after = ListSnapshot::from_list(&model.list);
    if let Some(diff) = before.diff(&after) {
        debug!(target: "list", %diff, "state changed");
    }

    model.list.assert_invariants(&msg_name);

    result
}

/// Get a display name for a message type
///
/// Uses Debug formatting to include variant names and arguments.
/// Example outputs:
/// - `List::Remove(RowId(3))`
/// - `Layout::SetColumns(ColumnCount(3))`
/// - `App::Resize(1920, 1080)`
#[cfg(debug_assertions)]
fn msg_type_name(msg: &Msg) -> String {
    use crate::messages::ImportMsg;

    match msg {
        Msg::List(m) => format!("List::{:?}", m),
        Msg::Form(m) => format!("Form::{:?}", m),
        Msg::Drag(m) => format!("Drag::{:?}", m),
        Msg::Layout(m) => format!("Layout::{:?}", m),
        // Loaded results can hold thousands of rows; log the path only
        Msg::Import(ImportMsg::Loaded { path, .. }) => {
            format!("Import::Loaded({})", path.display())
        }
        Msg::Import(m) => format!("Import::{:?}", m),
        Msg::Ui(m) => format!("Ui::{:?}", m),
        Msg::App(m) => format!("App::{:?}", m),
    }
}
