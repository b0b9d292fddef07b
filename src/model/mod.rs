//! Application model - the complete state of the ranked list
//!
//! This module contains all the state types following the Elm Architecture pattern.

pub mod drag;
pub mod form;
pub mod input;
pub mod layout;
pub mod list;
pub mod ui;

pub use drag::{drop_position, DragOrigin, DragState, DropPosition, RowBounds};
pub use form::{FormSession, FormTarget};
pub use input::{InputEdit, TextInput};
pub use layout::{ColumnCount, Layout};
pub use list::{RankedList, Row, RowId, POSITION_SEPARATOR};
pub use ui::{parse_position, PositionEdit, TransientMessage, UiState};

use crate::config::AppConfig;
use crate::theme::Theme;

/// A rectangle in window coordinates (physical pixels)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px < self.x + self.width && py >= self.y && py < self.y + self.height
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

/// Layout spacing, already multiplied by the window's scale factor
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaledMetrics {
    pub scale_factor: f64,
    /// Outer padding around the toolbar, list and status bar
    pub padding: usize,
    /// Vertical gap between rows and between toolbar buttons
    pub gap: usize,
    /// Padding inside a row, above and below its field grid
    pub row_padding: usize,
    /// Horizontal padding inside buttons
    pub button_padding_x: usize,
    /// Vertical padding inside buttons and inputs
    pub button_padding_y: usize,
    /// Pointer travel needed before a row-body press turns into a drag
    pub drag_threshold: f32,
    /// Distance from the list edge where a drag starts auto-scrolling
    pub autoscroll_margin: f32,
    /// Pixels scrolled per auto-scroll step
    pub autoscroll_step: f32,
}

impl ScaledMetrics {
    pub fn new(scale_factor: f64) -> Self {
        let s = |v: f64| (v * scale_factor).round() as usize;
        Self {
            scale_factor,
            padding: s(8.0),
            gap: s(4.0),
            row_padding: s(6.0),
            button_padding_x: s(10.0),
            button_padding_y: s(4.0),
            drag_threshold: (4.0 * scale_factor) as f32,
            autoscroll_margin: (32.0 * scale_factor) as f32,
            autoscroll_step: (12.0 * scale_factor) as f32,
        }
    }
}

impl Default for ScaledMetrics {
    fn default() -> Self {
        Self::new(1.0)
    }
}

/// The complete application model
#[derive(Debug)]
pub struct AppModel {
    /// The ordered rows
    pub list: RankedList,
    /// Column count and container class
    pub layout: Layout,
    /// Open add/edit form, if any
    pub form: Option<FormSession>,
    /// Current drag-reorder interaction
    pub drag: DragState,
    /// UI state (status bar, cursor blink, scrolling, position editor)
    pub ui: UiState,
    /// Theme for colors and styling
    pub theme: Theme,
    /// Persisted configuration
    pub config: AppConfig,
    /// Window dimensions
    pub window_size: (u32, u32),
    /// Line height in pixels
    pub line_height: usize,
    /// Character width in pixels (monospace)
    pub char_width: f32,
    pub metrics: ScaledMetrics,
}

impl AppModel {
    /// Create a model with an empty list
    ///
    /// Performs no I/O: configuration and theme are loaded by the caller.
    pub fn new(window_width: u32, window_height: u32, config: AppConfig, theme: Theme) -> Self {
        let mut list = RankedList::new();
        list.renumber();

        let mut ui = UiState::new();
        ui.set_status("Ready");

        Self {
            list,
            layout: Layout::new(config.columns()),
            form: None,
            drag: DragState::Idle,
            ui,
            theme,
            config,
            window_size: (window_width, window_height),
            // Corrected by the renderer with actual font metrics
            line_height: 20,
            char_width: 10.0,
            metrics: ScaledMetrics::default(),
        }
    }

    /// Current column count
    #[inline]
    pub fn columns(&self) -> ColumnCount {
        self.layout.columns()
    }

    /// Update window dimensions after a resize
    pub fn resize(&mut self, width: u32, height: u32) {
        self.window_size = (width, height);
        self.clamp_scroll();
    }

    /// Apply font metrics measured by the renderer
    pub fn set_font_metrics(&mut self, line_height: usize, char_width: f32) {
        self.line_height = line_height.max(1);
        self.char_width = char_width;
        self.clamp_scroll();
    }

    pub fn set_scale_factor(&mut self, scale_factor: f64) {
        self.metrics = ScaledMetrics::new(scale_factor);
        self.clamp_scroll();
    }

    pub fn reset_cursor_blink(&mut self) {
        self.ui.reset_cursor_blink();
    }

    /// Whether keyboard text input currently goes to a text field
    pub fn is_editing_text(&self) -> bool {
        self.form.is_some() || self.ui.position_edit.is_some()
    }

    /// Largest valid scroll offset for the current list and window
    pub fn max_scroll(&self) -> f32 {
        let viewport = crate::view::geometry::list_viewport(self);
        let content = crate::view::geometry::content_height(self);
        (content - viewport.height).max(0.0)
    }

    /// Keep the scroll offset within `[0, max_scroll]`
    pub fn clamp_scroll(&mut self) {
        let max = self.max_scroll();
        self.ui.scroll_offset = self.ui.scroll_offset.clamp(0.0, max);
    }

    /// Scroll the list by `delta` pixels. Returns true if the offset changed.
    pub fn scroll_by(&mut self, delta: f32) -> bool {
        let before = self.ui.scroll_offset;
        self.ui.scroll_offset += delta;
        self.clamp_scroll();
        self.ui.scroll_offset != before
    }
}
