//! Add/edit form message handlers

use crate::commands::Cmd;
use crate::messages::FormMsg;
use crate::model::{AppModel, FormSession, FormTarget, InputEdit};

/// Handle form messages
pub fn update_form(model: &mut AppModel, msg: FormMsg) -> Option<Cmd> {
    match msg {
        FormMsg::OpenCreate => {
            model.form = Some(FormSession::create(model.columns()));
            model.reset_cursor_blink();
            Some(Cmd::Redraw)
        }

        FormMsg::OpenEdit(id) => {
            let values = model.list.get(id)?.present_values();
            model.form = Some(FormSession::edit(id, &values, model.columns()));
            model.reset_cursor_blink();
            Some(Cmd::Redraw)
        }

        FormMsg::Input(edit) => {
            let form = model.form.as_mut()?;
            form.edit_focused(edit);
            model.reset_cursor_blink();
            Some(Cmd::Redraw)
        }

        FormMsg::FocusField { index, cursor } => {
            let form = model.form.as_mut()?;
            form.focus(index);
            if let Some(column) = cursor {
                form.edit_focused(InputEdit::SetCursor(column));
            }
            model.reset_cursor_blink();
            Some(Cmd::Redraw)
        }

        FormMsg::FocusNext => {
            model.form.as_mut()?.focus_next();
            model.reset_cursor_blink();
            Some(Cmd::Redraw)
        }

        FormMsg::FocusPrev => {
            model.form.as_mut()?.focus_prev();
            model.reset_cursor_blink();
            Some(Cmd::Redraw)
        }

        FormMsg::Submit => submit(model),

        FormMsg::Cancel => {
            model.form.take()?;
            Some(Cmd::Redraw)
        }
    }
}

/// Apply the form to the row sequence
///
/// An all-blank form is ignored and stays open.
fn submit(model: &mut AppModel) -> Option<Cmd> {
    let form = model.form.as_ref()?;
    let Some(values) = form.submission() else {
        tracing::debug!("Ignoring blank form submission");
        return None;
    };
    let target = form.target;

    match target {
        FormTarget::Create => {
            let position = model.list.next_position();
            let fields = values.into_iter().map(Some).collect();
            let row = model.list.build_row(fields, position);
            model.list.append(row);
        }
        FormTarget::Edit(id) => match model.list.get_mut(id) {
            Some(row) => row.overwrite_fields(&values),
            None => tracing::debug!(row = %id, "Edited row no longer exists"),
        },
    }

    model.list.renumber();
    model.form = None;

    if target == FormTarget::Create {
        // Reveal the appended row
        model.ui.scroll_offset = model.max_scroll();
    }
    Some(Cmd::Redraw)
}
