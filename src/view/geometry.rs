//! Centralized geometry helpers for rendering and hit-testing
//!
//! This module provides a single source of truth for layout calculations
//! that is shared between the view (rendering), the runtime (input handling)
//! and the drag update handler (insertion point search).
//!
//! All functions here are pure (no I/O, no side effects) and can be
//! tested independently of the rendering infrastructure.

use crate::model::{AppModel, ColumnCount, Rect, RowBounds, RowId};

// ============================================================================
// Layout Constants
// ============================================================================

/// Toolbar button labels
pub const ADD_BUTTON_LABEL: &str = "Add item";
pub const IMPORT_BUTTON_LABEL: &str = "Import CSV…";
pub const COLUMNS_LABEL: &str = "Columns:";

/// Width of the drag handle, in characters
pub const HANDLE_CHARS: f32 = 2.0;
/// Width of the position label column, in characters ("999." plus slack)
pub const LABEL_CHARS: f32 = 5.0;
/// Width of the remove button, in characters
pub const REMOVE_CHARS: f32 = 1.0;

/// Width of `label` in pixels for a monospace font
#[inline]
pub fn text_width(label: &str, char_width: f32) -> f32 {
    label.chars().count() as f32 * char_width
}

/// Height of a button or single-line input (line height plus padding)
#[inline]
pub fn control_height(model: &AppModel) -> usize {
    model.line_height + model.metrics.button_padding_y * 2
}

// ============================================================================
// Toolbar
// ============================================================================

/// Computed toolbar rects
#[derive(Debug, Clone)]
pub struct ToolbarLayout {
    pub rect: Rect,
    pub add: Rect,
    pub import: Rect,
    /// Origin of the "Columns:" caption
    pub columns_label: (f32, f32),
    /// One button per selectable column count, in selector order
    pub column_options: Vec<(ColumnCount, Rect)>,
}

#[inline]
pub fn toolbar_height(model: &AppModel) -> usize {
    control_height(model) + model.metrics.padding * 2
}

pub fn toolbar_layout(model: &AppModel) -> ToolbarLayout {
    let m = &model.metrics;
    let cw = model.char_width;
    let pad = m.padding as f32;
    let gap = m.gap as f32 * 2.0;
    let btn_h = control_height(model) as f32;
    let button_w = |label: &str| text_width(label, cw) + m.button_padding_x as f32 * 2.0;

    let rect = Rect::new(0.0, 0.0, model.window_size.0 as f32, toolbar_height(model) as f32);

    let mut x = pad;
    let add = Rect::new(x, pad, button_w(ADD_BUTTON_LABEL), btn_h);
    x = add.right() + gap;
    let import = Rect::new(x, pad, button_w(IMPORT_BUTTON_LABEL), btn_h);
    x = import.right() + gap * 2.0;

    let label_y = pad + m.button_padding_y as f32;
    let columns_label = (x, label_y);
    x += text_width(COLUMNS_LABEL, cw) + gap;

    let option_w = button_w("0");
    let column_options = ColumnCount::options()
        .map(|count| {
            let r = Rect::new(x, pad, option_w, btn_h);
            x = r.right() + m.gap as f32;
            (count, r)
        })
        .collect();

    ToolbarLayout {
        rect,
        add,
        import,
        columns_label,
        column_options,
    }
}

// ============================================================================
// Status Bar and List Viewport
// ============================================================================

#[inline]
pub fn status_bar_height(model: &AppModel) -> usize {
    model.line_height + model.metrics.gap * 2
}

pub fn status_bar_rect(model: &AppModel) -> Rect {
    let (w, h) = model.window_size;
    let sh = status_bar_height(model) as f32;
    Rect::new(0.0, (h as f32 - sh).max(0.0), w as f32, sh)
}

/// The scrollable area between the toolbar and the status bar
pub fn list_viewport(model: &AppModel) -> Rect {
    let (w, h) = model.window_size;
    let top = toolbar_height(model) as f32;
    let bottom = (h as f32 - status_bar_height(model) as f32).max(top);
    Rect::new(0.0, top, w as f32, bottom - top)
}

// ============================================================================
// Rows
// ============================================================================

/// Computed rects of one rendered row, in window coordinates
#[derive(Debug, Clone)]
pub struct RowLayout {
    pub id: RowId,
    pub rect: Rect,
    pub handle: Rect,
    pub label: Rect,
    /// Cells for present fields only, with their slot index
    pub fields: Vec<(usize, Rect)>,
    pub remove: Rect,
}

/// Number of grid lines a row of `width` slots needs at `columns` tracks
#[inline]
pub fn grid_lines(width: usize, columns: ColumnCount) -> usize {
    width.div_ceil(columns.get()).max(1)
}

/// Pixel height of a row with `width` field slots
pub fn row_height(model: &AppModel, width: usize) -> f32 {
    let lines = grid_lines(width, model.columns());
    (lines * model.line_height + model.metrics.row_padding * 2) as f32
}

/// Total height of the list content (all rows plus padding and gaps)
pub fn content_height(model: &AppModel) -> f32 {
    let m = &model.metrics;
    let rows: f32 = model
        .list
        .iter()
        .map(|row| row_height(model, row.width()))
        .sum();
    let gaps = model.list.len().saturating_sub(1) as f32 * m.gap as f32;
    rows + gaps + m.padding as f32 * 2.0
}

/// Layout of every row, scrolled into window coordinates
///
/// Rows outside the viewport are included; callers clip.
pub fn row_layouts(model: &AppModel) -> Vec<RowLayout> {
    let m = &model.metrics;
    let cw = model.char_width;
    let lh = model.line_height as f32;
    let columns = model.columns();
    let viewport = list_viewport(model);

    let x = m.padding as f32;
    let width = (viewport.width - m.padding as f32 * 2.0).max(0.0);
    let inner_pad = m.button_padding_x as f32;

    let mut y = viewport.y + m.padding as f32 - model.ui.scroll_offset;
    let mut layouts = Vec::with_capacity(model.list.len());

    for row in model.list.iter() {
        let height = row_height(model, row.width());
        let rect = Rect::new(x, y, width, height);
        let text_y = y + m.row_padding as f32;

        let handle = Rect::new(x + inner_pad, y, HANDLE_CHARS * cw, height);
        let label = Rect::new(handle.right() + inner_pad, text_y, LABEL_CHARS * cw, lh);
        let remove_w = REMOVE_CHARS * cw + inner_pad * 2.0;
        let remove = Rect::new(rect.right() - remove_w, text_y, remove_w, lh);

        let fields_x = label.right() + inner_pad;
        let fields_w = (remove.x - inner_pad - fields_x).max(0.0);
        let cell_w = fields_w / columns.get() as f32;
        let fields = row
            .fields()
            .iter()
            .enumerate()
            .filter(|(_, f)| f.is_some())
            .map(|(idx, _)| {
                let col = idx % columns.get();
                let line = idx / columns.get();
                let cell = Rect::new(
                    fields_x + col as f32 * cell_w,
                    text_y + line as f32 * lh,
                    (cell_w - m.gap as f32).max(0.0),
                    lh,
                );
                (idx, cell)
            })
            .collect();

        layouts.push(RowLayout {
            id: row.id,
            rect,
            handle,
            label,
            fields,
            remove,
        });
        y += height + m.gap as f32;
    }

    layouts
}

/// Vertical extents of every row, in display order
pub fn row_bounds(model: &AppModel) -> Vec<RowBounds> {
    row_layouts(model)
        .into_iter()
        .map(|l| RowBounds {
            id: l.id,
            top: l.rect.y,
            height: l.rect.height,
        })
        .collect()
}

// ============================================================================
// Form Geometry
// ============================================================================

/// Standard padding/spacing constants for the form panel
pub struct ModalSpacing;

impl ModalSpacing {
    /// Outer padding inside the panel border
    pub const PAD: usize = 12;
    /// Small gap (e.g., between inputs)
    pub const GAP_SM: usize = 4;
    /// Medium gap (e.g., between sections)
    pub const GAP_MD: usize = 8;
    /// Input field internal vertical padding (total top+bottom)
    pub const INPUT_PAD_Y: usize = 8;
    /// Input field internal horizontal padding (each side)
    pub const INPUT_PAD_X: usize = 8;
}

/// A positioned widget within a modal layout
#[derive(Clone, Copy, Debug)]
pub struct WidgetRect {
    pub x: usize,
    pub y: usize,
    pub w: usize,
    pub h: usize,
}

impl WidgetRect {
    pub fn to_rect(self) -> Rect {
        Rect::new(self.x as f32, self.y as f32, self.w as f32, self.h as f32)
    }
}

/// Vertical stack layout builder.
///
/// Tracks a cursor position that advances as widgets are pushed.
/// Height is derived automatically from the content that's actually laid out.
pub struct VStack {
    cursor_y: usize,
    content_width: usize,
    widgets: Vec<WidgetRect>,
}

impl VStack {
    pub fn new(content_width: usize) -> Self {
        Self {
            cursor_y: 0,
            content_width,
            widgets: Vec::new(),
        }
    }

    pub fn gap(&mut self, h: usize) {
        self.cursor_y += h;
    }

    /// Push a widget spanning the full content width, returning its index
    pub fn push(&mut self, h: usize) -> usize {
        let idx = self.widgets.len();
        self.widgets.push(WidgetRect {
            x: 0,
            y: self.cursor_y,
            w: self.content_width,
            h,
        });
        self.cursor_y += h;
        idx
    }

    pub fn height(&self) -> usize {
        self.cursor_y
    }
}

/// Computed layout for a centered panel
///
/// The outer rect defines the panel border/background, and widgets are
/// positioned absolutely within the window.
#[derive(Clone, Debug)]
pub struct ModalLayout {
    pub x: usize,
    pub y: usize,
    pub w: usize,
    pub h: usize,
    pub widgets: Vec<WidgetRect>,
}

impl ModalLayout {
    pub fn build(
        vstack: VStack,
        modal_width: usize,
        window_width: usize,
        window_height: usize,
    ) -> Self {
        let pad = ModalSpacing::PAD;
        let modal_height = vstack.height() + pad * 2;
        let modal_x = window_width.saturating_sub(modal_width) / 2;
        let modal_y = (window_height / 4).min(100);
        let content_x = modal_x + pad;
        let content_y = modal_y + pad;

        let widgets = vstack
            .widgets
            .into_iter()
            .map(|w| WidgetRect {
                x: content_x + w.x,
                y: content_y + w.y,
                w: w.w,
                h: w.h,
            })
            .collect();

        Self {
            x: modal_x,
            y: modal_y,
            w: modal_width,
            h: modal_height,
            widgets,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x as f32, self.y as f32, self.w as f32, self.h as f32)
    }

    pub fn widget(&self, idx: usize) -> Rect {
        self.widgets
            .get(idx)
            .map(|w| w.to_rect())
            .unwrap_or_default()
    }

    /// Height of an input field (line_height + padding)
    pub fn input_height(line_height: usize) -> usize {
        line_height + ModalSpacing::INPUT_PAD_Y
    }
}

/// Resolved rects of the add/edit form
#[derive(Debug, Clone)]
pub struct FormWidgets {
    pub title: Rect,
    pub inputs: Vec<Rect>,
    pub save: Rect,
    pub cancel: Rect,
}

pub const SAVE_BUTTON_LABEL: &str = "Save";
pub const CANCEL_BUTTON_LABEL: &str = "Cancel";

/// Layout of the add/edit form for `input_count` inputs
pub fn form_layout_for(
    window_width: usize,
    window_height: usize,
    line_height: usize,
    char_width: f32,
    input_count: usize,
) -> (ModalLayout, FormWidgets) {
    let modal_width = (window_width as f32 * 0.5).clamp(300.0, 520.0) as usize;
    let content_width = modal_width.saturating_sub(ModalSpacing::PAD * 2);
    let input_height = ModalLayout::input_height(line_height);

    let mut v = VStack::new(content_width);
    let title = v.push(line_height);
    v.gap(ModalSpacing::GAP_MD);
    let inputs: Vec<usize> = (0..input_count)
        .map(|i| {
            if i > 0 {
                v.gap(ModalSpacing::GAP_SM);
            }
            v.push(input_height)
        })
        .collect();
    v.gap(ModalSpacing::GAP_MD);
    let buttons = v.push(input_height);

    let layout = ModalLayout::build(v, modal_width, window_width, window_height);

    // Save and Cancel are right-aligned in the button row
    let row = layout.widget(buttons);
    let button_w = |label: &str| text_width(label, char_width) + ModalSpacing::INPUT_PAD_X as f32 * 2.0;
    let cancel_w = button_w(CANCEL_BUTTON_LABEL);
    let save_w = button_w(SAVE_BUTTON_LABEL);
    let cancel = Rect::new(row.right() - cancel_w, row.y, cancel_w, row.height);
    let save = Rect::new(
        cancel.x - ModalSpacing::GAP_MD as f32 - save_w,
        row.y,
        save_w,
        row.height,
    );

    let widgets = FormWidgets {
        title: layout.widget(title),
        inputs: inputs.into_iter().map(|i| layout.widget(i)).collect(),
        save,
        cancel,
    };
    (layout, widgets)
}

/// Layout of the open form, if any
pub fn form_layout(model: &AppModel) -> Option<(ModalLayout, FormWidgets)> {
    let form = model.form.as_ref()?;
    Some(form_layout_for(
        model.window_size.0 as usize,
        model.window_size.1 as usize,
        model.line_height,
        model.char_width,
        form.inputs().len(),
    ))
}

// ============================================================================
// Text Hit Helpers
// ============================================================================

/// Character index in a single-line input for a click at `px`
pub fn char_index_at_x(text: &str, text_x: f32, char_width: f32, px: f32) -> usize {
    if char_width <= 0.0 {
        return 0;
    }
    let col = ((px - text_x) / char_width).round().max(0.0) as usize;
    col.min(text.chars().count())
}
