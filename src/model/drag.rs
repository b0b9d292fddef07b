//! Drag-reorder state and insertion point search
//!
//! The drag interaction is an explicit value rather than a free-floating
//! "dragged item" reference, so the insertion point algorithm can be tested
//! without pointer events.

use super::list::RowId;

/// Where a drag gesture started
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragOrigin {
    /// The row's drag handle (starts immediately on press)
    Handle,
    /// The row body (starts once the pointer moves past a threshold)
    Row,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging { row: RowId, origin: DragOrigin },
}

impl DragState {
    #[inline]
    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging { .. })
    }

    /// The row currently being dragged
    #[inline]
    pub fn dragged(&self) -> Option<RowId> {
        match self {
            DragState::Dragging { row, .. } => Some(*row),
            DragState::Idle => None,
        }
    }
}

/// Vertical extent of a rendered row, in window pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowBounds {
    pub id: RowId,
    pub top: f32,
    pub height: f32,
}

/// Where the dragged row goes for a pointer at `pointer_y`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropPosition {
    /// Immediately before this row
    Before(RowId),
    /// After every other row
    End,
}

/// Find the insertion point for the dragged row
///
/// Among the rows other than `dragged`, picks the one whose vertical midpoint
/// lies closest below the pointer: the largest `pointer_y - top - height / 2`
/// that is still negative. Rows are visited in order and a later row only
/// wins on a strictly greater offset, so equal offsets keep the first row.
pub fn drop_position(rows: &[RowBounds], dragged: RowId, pointer_y: f32) -> DropPosition {
    let mut closest: Option<(f32, RowId)> = None;
    for bounds in rows.iter().filter(|b| b.id != dragged) {
        let offset = pointer_y - bounds.top - bounds.height / 2.0;
        let beats_closest = closest.map_or(true, |(best, _)| offset > best);
        if offset < 0.0 && beats_closest {
            closest = Some((offset, bounds.id));
        }
    }
    match closest {
        Some((_, id)) => DropPosition::Before(id),
        None => DropPosition::End,
    }
}
