//! Drag-reorder message handlers

use crate::commands::Cmd;
use crate::messages::DragMsg;
use crate::model::{drop_position, AppModel, DragState, DropPosition};
use crate::view::geometry::{list_viewport, row_bounds};

/// Handle drag messages
pub fn update_drag(model: &mut AppModel, msg: DragMsg) -> Option<Cmd> {
    match msg {
        DragMsg::Start { row, origin } => {
            if !model.list.contains(row) {
                return None;
            }
            model.drag = DragState::Dragging { row, origin };
            Some(Cmd::Redraw)
        }

        DragMsg::Over { pointer_y } => {
            let dragged = model.drag.dragged()?;
            let scrolled = autoscroll(model, pointer_y);

            let bounds = row_bounds(model);
            let moved = match drop_position(&bounds, dragged, pointer_y) {
                DropPosition::Before(anchor) => model.list.insert_before(dragged, anchor),
                DropPosition::End => model.list.move_to_end(dragged),
            };

            (moved || scrolled).then_some(Cmd::Redraw)
        }

        DragMsg::End => {
            if !model.drag.is_dragging() {
                return None;
            }
            model.drag = DragState::Idle;
            model.list.renumber();
            Some(Cmd::Redraw)
        }
    }
}

/// Scroll the list when the pointer is near its top or bottom edge
fn autoscroll(model: &mut AppModel, pointer_y: f32) -> bool {
    let viewport = list_viewport(model);
    let margin = model.metrics.autoscroll_margin;
    let step = model.metrics.autoscroll_step;

    if pointer_y < viewport.y + margin {
        model.scroll_by(-step)
    } else if pointer_y > viewport.bottom() - margin {
        model.scroll_by(step)
    } else {
        false
    }
}
