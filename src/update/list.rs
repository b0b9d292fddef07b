//! Row sequence message handlers (remove, manual reposition, scroll)

use std::time::Duration;

use crate::commands::Cmd;
use crate::messages::ListMsg;
use crate::model::{AppModel, DragState, PositionEdit, RowId};

/// Handle row sequence messages
pub fn update_list(model: &mut AppModel, msg: ListMsg) -> Option<Cmd> {
    match msg {
        ListMsg::Remove(id) => remove_row(model, id),

        ListMsg::BeginReposition(id) => {
            let position = model.list.index_of(id)? + 1;
            // Opening a second editor leaves the first one, like a blur
            if model.ui.position_edit.as_ref().is_some_and(|pe| pe.row != id) {
                commit_reposition(model);
            }
            model.ui.position_edit = Some(PositionEdit::new(id, position));
            model.reset_cursor_blink();
            Some(Cmd::Redraw)
        }

        ListMsg::RepositionInput(edit) => {
            let editor = model.ui.position_edit.as_mut()?;
            editor.input.apply(edit);
            model.reset_cursor_blink();
            Some(Cmd::Redraw)
        }

        ListMsg::CommitReposition => commit_reposition(model).then_some(Cmd::Redraw),

        ListMsg::CancelReposition => {
            model.ui.position_edit.take()?;
            model.list.renumber();
            Some(Cmd::Redraw)
        }

        ListMsg::Scroll(delta) => model.scroll_by(delta).then_some(Cmd::Redraw),
    }
}

fn remove_row(model: &mut AppModel, id: RowId) -> Option<Cmd> {
    model.list.remove(id)?;

    if model.ui.position_edit.as_ref().is_some_and(|pe| pe.row == id) {
        model.ui.position_edit = None;
    }
    if model.drag.dragged() == Some(id) {
        model.drag = DragState::Idle;
    }

    model.list.renumber();
    model.clamp_scroll();
    model
        .ui
        .show_transient("Item removed", Duration::from_millis(2000));
    Some(Cmd::Redraw)
}

/// Leave the position editor, moving the row if the entered value is a
/// positive integer. Renumbering runs either way.
///
/// Returns false if no position editor was open.
pub fn commit_reposition(model: &mut AppModel) -> bool {
    let Some(editor) = model.ui.position_edit.take() else {
        return false;
    };

    match editor.requested_position() {
        Some(position) => {
            model.list.move_to_position(editor.row, position);
        }
        None => {
            tracing::debug!(
                input = editor.input.text(),
                "Ignoring invalid position"
            );
        }
    }

    model.list.renumber();
    true
}
