//! Mouse event handling using the hit-test system
//!
//! - `hit_test_ui()` determines the target under the pointer
//! - a press on the target is turned into messages
//! - an open position editor is committed by any press outside it (blur)
//! - a press on a row body only becomes a drag once the pointer has moved
//!   past the drag threshold

use winit::event::MouseButton;

use ranklist::commands::Cmd;
use ranklist::messages::{DragMsg, FormMsg, ImportMsg, ListMsg, Msg};
use ranklist::model::{AppModel, DragOrigin, InputEdit, RowId};
use ranklist::update::update;
use ranklist::view::hit_test::{hit_test_ui, EventResult, HitTarget, MouseEvent, Point};

/// A press on a row body that may still turn into a drag
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendingRowDrag {
    pub row: RowId,
    pub start: Point,
}

impl PendingRowDrag {
    /// Whether the pointer has travelled far enough to start dragging
    pub fn exceeded(&self, pt: Point, threshold: f32) -> bool {
        let dx = pt.x - self.start.x;
        let dy = pt.y - self.start.y;
        (dx * dx + dy * dy).sqrt() >= threshold as f64
    }
}

/// Result of mouse press handling
#[derive(Debug, Clone)]
pub struct MousePressResult {
    pub cmd: Option<Cmd>,
    /// Set when the press landed on a row body
    pub pending_drag: Option<PendingRowDrag>,
}

/// Handle a mouse press
pub fn handle_mouse_press(model: &mut AppModel, event: MouseEvent) -> MousePressResult {
    if !event.is_left() || !event.is_pressed() {
        return MousePressResult {
            cmd: None,
            pending_drag: None,
        };
    }
    let pt = event.pos;

    // Blur: committing may move rows, so hit-test again afterwards
    let mut blur_cmd = None;
    if model.ui.position_edit.is_some() {
        let target = hit_test_ui(model, pt);
        if target.as_ref().map_or(true, HitTarget::blurs_position_input) {
            blur_cmd = update(model, Msg::List(ListMsg::CommitReposition));
        }
    }

    let Some(target) = hit_test_ui(model, pt) else {
        return MousePressResult {
            cmd: blur_cmd,
            pending_drag: None,
        };
    };
    tracing::trace!(?target, x = pt.x, y = pt.y, "mouse press");

    let pending_drag = match target {
        HitTarget::RowBody(row) => Some(PendingRowDrag { row, start: pt }),
        _ => None,
    };
    let cmd = dispatch_press(model, target).into_cmd().or(blur_cmd);

    MousePressResult { cmd, pending_drag }
}

fn dispatch_press(model: &mut AppModel, target: HitTarget) -> EventResult {
    let msg = match target {
        HitTarget::ToolbarAdd => Msg::Form(FormMsg::OpenCreate),
        HitTarget::ToolbarImport => Msg::Import(ImportMsg::Request),
        HitTarget::ColumnOption(count) => Msg::set_columns(count),

        HitTarget::FormInput { index, cursor } => Msg::Form(FormMsg::FocusField {
            index,
            cursor: Some(cursor),
        }),
        HitTarget::FormSave => Msg::Form(FormMsg::Submit),
        HitTarget::FormCancel => Msg::Form(FormMsg::Cancel),

        HitTarget::PositionInput { cursor, .. } => {
            Msg::List(ListMsg::RepositionInput(InputEdit::SetCursor(cursor)))
        }
        HitTarget::RowRemove(id) => Msg::List(ListMsg::Remove(id)),
        HitTarget::RowLabel(id) => Msg::List(ListMsg::BeginReposition(id)),
        HitTarget::RowHandle(row) => Msg::Drag(DragMsg::Start {
            row,
            origin: DragOrigin::Handle,
        }),
        HitTarget::RowField { row, .. } => Msg::Form(FormMsg::OpenEdit(row)),

        // The form is modal: presses outside its controls do nothing
        HitTarget::FormPanel | HitTarget::FormBackdrop => {
            return EventResult::consumed_no_redraw()
        }
        HitTarget::RowBody(_)
        | HitTarget::ListBackground
        | HitTarget::Toolbar
        | HitTarget::StatusBar => return EventResult::Bubble,
    };
    EventResult::consumed_with_cmd(update(model, msg))
}

/// Handle pointer movement with the left button possibly held
///
/// Returns the command to run and whether the pending row drag was consumed.
pub fn handle_mouse_move(
    model: &mut AppModel,
    pt: Point,
    pending: Option<PendingRowDrag>,
) -> (Option<Cmd>, bool) {
    if model.drag.is_dragging() {
        let cmd = update(
            model,
            Msg::Drag(DragMsg::Over {
                pointer_y: pt.y as f32,
            }),
        );
        return (cmd, false);
    }

    let Some(pending) = pending else {
        return (None, false);
    };
    if !pending.exceeded(pt, model.metrics.drag_threshold) {
        return (None, false);
    }

    let start = update(
        model,
        Msg::Drag(DragMsg::Start {
            row: pending.row,
            origin: DragOrigin::Row,
        }),
    );
    let over = update(
        model,
        Msg::Drag(DragMsg::Over {
            pointer_y: pt.y as f32,
        }),
    );
    (over.or(start), true)
}

/// Handle a mouse button release
pub fn handle_mouse_release(model: &mut AppModel, button: MouseButton) -> Option<Cmd> {
    if button != MouseButton::Left || !model.drag.is_dragging() {
        return None;
    }
    update(model, Msg::Drag(DragMsg::End))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pending_drag_threshold() {
        let pending = PendingRowDrag {
            row: RowId(1),
            start: Point::new(100.0, 100.0),
        };
        assert!(!pending.exceeded(Point::new(102.0, 102.0), 4.0));
        assert!(pending.exceeded(Point::new(100.0, 104.0), 4.0));
        assert!(pending.exceeded(Point::new(90.0, 100.0), 4.0));
    }
}
