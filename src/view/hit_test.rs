//! Hit-testing types and functions for mouse event handling
//!
//! The runtime follows a "hit-test → dispatch" pattern:
//! 1. `hit_test_ui()` finds the highest-priority `HitTarget` at a point
//! 2. The mouse handler matches on the target to build messages
//! 3. Handlers return `EventResult` to report consumption and redraw needs
//!
//! Priority, highest first: the form panel (modal while open), the toolbar
//! and status bar, then rows. Within a row the remove button wins over the
//! position label, which wins over the drag handle and field cells.

use winit::event::{ElementState, MouseButton};
use winit::keyboard::ModifiersState;

use crate::commands::Cmd;
use crate::model::{AppModel, ColumnCount, RowId};

use super::geometry::{
    char_index_at_x, form_layout, list_viewport, row_layouts, status_bar_rect, toolbar_layout,
    ModalSpacing,
};
use super::text_field::TextFieldRenderer;

// ============================================================================
// Core Types
// ============================================================================

/// A point in window coordinates (physical pixels)
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    fn xf(&self) -> f32 {
        self.x as f32
    }

    #[inline]
    fn yf(&self) -> f32 {
        self.y as f32
    }
}

/// A mouse event with the context needed for dispatch
#[derive(Clone, Debug)]
pub struct MouseEvent {
    pub pos: Point,
    pub button: MouseButton,
    pub state: ElementState,
    pub modifiers: ModifiersState,
}

impl MouseEvent {
    pub fn new(x: f64, y: f64, button: MouseButton, state: ElementState, modifiers: ModifiersState) -> Self {
        Self {
            pos: Point::new(x, y),
            button,
            state,
            modifiers,
        }
    }

    #[inline]
    pub fn is_pressed(&self) -> bool {
        matches!(self.state, ElementState::Pressed)
    }

    #[inline]
    pub fn is_left(&self) -> bool {
        self.button == MouseButton::Left
    }
}

// ============================================================================
// Hit Targets
// ============================================================================

/// Logical targets in the UI that can receive mouse events
#[derive(Clone, Debug, PartialEq)]
pub enum HitTarget {
    /// Toolbar "Add item" button
    ToolbarAdd,
    /// Toolbar "Import CSV…" button
    ToolbarImport,
    /// One option of the column selector
    ColumnOption(ColumnCount),
    /// Toolbar background
    Toolbar,

    /// A form input; `cursor` is the character index under the pointer
    FormInput { index: usize, cursor: usize },
    FormSave,
    FormCancel,
    /// Inside the form panel but not on a control
    FormPanel,
    /// Outside the form panel while the form is open
    FormBackdrop,

    /// The open inline position editor
    PositionInput { row: RowId, cursor: usize },
    /// A row's remove button
    RowRemove(RowId),
    /// A row's position label
    RowLabel(RowId),
    /// A row's drag handle
    RowHandle(RowId),
    /// A present field cell of a row
    RowField { row: RowId, index: usize },
    /// Anywhere else on a row
    RowBody(RowId),
    /// The list area outside any row
    ListBackground,

    StatusBar,
}

impl HitTarget {
    /// The row this target belongs to, if any
    pub fn row(&self) -> Option<RowId> {
        match self {
            HitTarget::PositionInput { row, .. } | HitTarget::RowField { row, .. } => Some(*row),
            HitTarget::RowRemove(id)
            | HitTarget::RowLabel(id)
            | HitTarget::RowHandle(id)
            | HitTarget::RowBody(id) => Some(*id),
            _ => None,
        }
    }

    /// Whether a press here leaves an open position editor (blur)
    pub fn blurs_position_input(&self) -> bool {
        !matches!(self, HitTarget::PositionInput { .. })
    }
}

/// Result of handling a mouse event
#[derive(Clone, Debug)]
pub enum EventResult {
    /// Event was handled; stop propagation
    Consumed {
        /// Whether a redraw is needed (ignored if cmd is Some)
        redraw: bool,
        /// Command to execute (takes precedence over the redraw flag)
        cmd: Option<Cmd>,
    },
    /// Event was not handled by this target
    Bubble,
}

impl EventResult {
    pub fn consumed_redraw() -> Self {
        Self::Consumed {
            redraw: true,
            cmd: None,
        }
    }

    pub fn consumed_no_redraw() -> Self {
        Self::Consumed {
            redraw: false,
            cmd: None,
        }
    }

    pub fn consumed_with_cmd(cmd: Option<Cmd>) -> Self {
        Self::Consumed {
            redraw: cmd.is_none(),
            cmd,
        }
    }

    pub fn needs_redraw(&self) -> bool {
        match self {
            Self::Consumed { redraw, cmd } => *redraw || cmd.as_ref().is_some_and(Cmd::needs_redraw),
            Self::Bubble => false,
        }
    }

    /// Take the command out of this result, if any
    pub fn into_cmd(self) -> Option<Cmd> {
        match self {
            Self::Consumed { cmd, redraw } => cmd.or(redraw.then_some(Cmd::Redraw)),
            Self::Bubble => None,
        }
    }
}

// ============================================================================
// Hit-Testing Functions
// ============================================================================

/// Character index under `x` in a field whose text starts at `text_x`
fn input_cursor_at(text: &str, current_cursor: usize, text_x: f32, width: f32, char_width: f32, x: f32) -> usize {
    let visible = if char_width > 0.0 {
        (width / char_width).floor() as usize
    } else {
        0
    };
    let scroll = TextFieldRenderer::scroll_for(current_cursor, visible);
    let tail: String = text.chars().skip(scroll).collect();
    scroll + char_index_at_x(&tail, text_x, char_width, x)
}

/// Hit-test the form panel
///
/// While the form is open it captures every point: outside the panel
/// yields `FormBackdrop`.
pub fn hit_test_form(model: &AppModel, pt: Point) -> Option<HitTarget> {
    let form = model.form.as_ref()?;
    let (layout, widgets) = form_layout(model)?;
    let (x, y) = (pt.xf(), pt.yf());

    if !layout.rect().contains(x, y) {
        return Some(HitTarget::FormBackdrop);
    }
    if widgets.save.contains(x, y) {
        return Some(HitTarget::FormSave);
    }
    if widgets.cancel.contains(x, y) {
        return Some(HitTarget::FormCancel);
    }
    for (index, rect) in widgets.inputs.iter().enumerate() {
        if rect.contains(x, y) {
            let input = &form.inputs()[index];
            let pad = ModalSpacing::INPUT_PAD_X as f32;
            let cursor = input_cursor_at(
                input.text(),
                input.cursor(),
                rect.x + pad,
                rect.width - pad * 2.0,
                model.char_width,
                x,
            );
            return Some(HitTarget::FormInput { index, cursor });
        }
    }
    Some(HitTarget::FormPanel)
}

/// Hit-test the toolbar buttons and column selector
pub fn hit_test_toolbar(model: &AppModel, pt: Point) -> Option<HitTarget> {
    let toolbar = toolbar_layout(model);
    let (x, y) = (pt.xf(), pt.yf());
    if !toolbar.rect.contains(x, y) {
        return None;
    }
    if toolbar.add.contains(x, y) {
        return Some(HitTarget::ToolbarAdd);
    }
    if toolbar.import.contains(x, y) {
        return Some(HitTarget::ToolbarImport);
    }
    toolbar
        .column_options
        .iter()
        .find(|(_, rect)| rect.contains(x, y))
        .map(|(count, _)| HitTarget::ColumnOption(*count))
        .or(Some(HitTarget::Toolbar))
}

/// Hit-test the status bar at the bottom of the window
pub fn hit_test_status_bar(model: &AppModel, pt: Point) -> Option<HitTarget> {
    status_bar_rect(model)
        .contains(pt.xf(), pt.yf())
        .then_some(HitTarget::StatusBar)
}

/// Hit-test the rows inside the list viewport
pub fn hit_test_rows(model: &AppModel, pt: Point) -> Option<HitTarget> {
    let (x, y) = (pt.xf(), pt.yf());
    if !list_viewport(model).contains(x, y) {
        return None;
    }

    let Some(layout) = row_layouts(model).into_iter().find(|l| l.rect.contains(x, y)) else {
        return Some(HitTarget::ListBackground);
    };
    let id = layout.id;

    if layout.remove.contains(x, y) {
        return Some(HitTarget::RowRemove(id));
    }
    if layout.label.contains(x, y) {
        if let Some(edit) = model.ui.position_edit.as_ref().filter(|e| e.row == id) {
            let cursor = input_cursor_at(
                edit.input.text(),
                edit.input.cursor(),
                layout.label.x,
                layout.label.width,
                model.char_width,
                x,
            );
            return Some(HitTarget::PositionInput { row: id, cursor });
        }
        return Some(HitTarget::RowLabel(id));
    }
    if layout.handle.contains(x, y) {
        return Some(HitTarget::RowHandle(id));
    }
    if let Some((index, _)) = layout.fields.iter().find(|(_, r)| r.contains(x, y)) {
        return Some(HitTarget::RowField { row: id, index: *index });
    }
    Some(HitTarget::RowBody(id))
}

/// Main hit-test entry point: the highest-priority target at `pt`
pub fn hit_test_ui(model: &AppModel, pt: Point) -> Option<HitTarget> {
    if let Some(target) = hit_test_form(model, pt) {
        return Some(target);
    }
    if let Some(target) = hit_test_toolbar(model, pt) {
        return Some(target);
    }
    if let Some(target) = hit_test_status_bar(model, pt) {
        return Some(target);
    }
    hit_test_rows(model, pt)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mouse_event_helpers() {
        let event = MouseEvent::new(
            50.0,
            50.0,
            MouseButton::Left,
            ElementState::Pressed,
            ModifiersState::empty(),
        );
        assert!(event.is_pressed());
        assert!(event.is_left());
        assert_eq!(event.pos, Point::new(50.0, 50.0));
    }

    #[test]
    fn test_hit_target_row() {
        assert_eq!(HitTarget::RowRemove(RowId(3)).row(), Some(RowId(3)));
        assert_eq!(
            HitTarget::RowField {
                row: RowId(2),
                index: 1
            }
            .row(),
            Some(RowId(2))
        );
        assert_eq!(HitTarget::ToolbarAdd.row(), None);
    }

    #[test]
    fn test_event_result_helpers() {
        assert!(EventResult::consumed_redraw().needs_redraw());
        assert!(!EventResult::consumed_no_redraw().needs_redraw());
        assert!(!EventResult::Bubble.needs_redraw());
        assert!(matches!(
            EventResult::consumed_redraw().into_cmd(),
            Some(Cmd::Redraw)
        ));
        assert!(EventResult::Bubble.into_cmd().is_none());
    }

    #[test]
    fn test_input_cursor_at_accounts_for_scroll() {
        // 30 chars, cursor at end, 10 visible: view starts at 21
        let text = "a".repeat(30);
        assert_eq!(input_cursor_at(&text, 30, 0.0, 100.0, 10.0, 0.0), 21);
        assert_eq!(input_cursor_at("abc", 0, 0.0, 100.0, 10.0, 20.0), 2);
    }
}
