//! Single-line text field rendering
//!
//! Used by the form inputs and the inline position editor. Long text scrolls
//! horizontally so the cursor stays inside the field.

use crate::model::TextInput;

use super::frame::{Frame, TextPainter};

/// Options for rendering a text field
#[derive(Debug, Clone)]
pub struct TextFieldOptions {
    /// X position of the text area in pixels
    pub x: usize,
    /// Y position of the text area in pixels
    pub y: usize,
    /// Width of the text area in pixels
    pub width: usize,
    /// Height of the text area in pixels (typically line_height)
    pub height: usize,
    /// Character width (monospace font)
    pub char_width: f32,
    pub text_color: u32,
    /// Color for the placeholder shown while the field is empty
    pub placeholder_color: u32,
    pub cursor_color: u32,
    /// Whether the cursor is drawn at all (focus and blink)
    pub cursor_visible: bool,
}

impl Default for TextFieldOptions {
    fn default() -> Self {
        Self {
            x: 0,
            y: 0,
            width: 200,
            height: 20,
            char_width: 8.0,
            text_color: 0xFFFFFFFF,
            placeholder_color: 0xFF808080,
            cursor_color: 0xFFFFFFFF,
            cursor_visible: true,
        }
    }
}

impl TextFieldOptions {
    /// Whole characters that fit in the field
    pub fn visible_chars(&self) -> usize {
        if self.char_width <= 0.0 {
            return 0;
        }
        (self.width as f32 / self.char_width).floor() as usize
    }
}

pub struct TextFieldRenderer;

impl TextFieldRenderer {
    /// Render `input` with its cursor
    pub fn render(
        frame: &mut Frame,
        painter: &mut TextPainter,
        input: &TextInput,
        opts: &TextFieldOptions,
    ) {
        if input.is_empty() {
            if !input.placeholder().is_empty() {
                painter.draw_limited(
                    frame,
                    opts.x,
                    opts.y,
                    input.placeholder(),
                    opts.width,
                    opts.placeholder_color,
                );
            }
            Self::render_cursor(frame, 0, opts);
            return;
        }

        let scroll_x = Self::scroll_for(input.cursor(), opts.visible_chars());
        let visible: String = input
            .text()
            .chars()
            .skip(scroll_x)
            .take(opts.visible_chars() + 1)
            .collect();
        painter.draw_limited(frame, opts.x, opts.y, &visible, opts.width, opts.text_color);

        Self::render_cursor(frame, input.cursor().saturating_sub(scroll_x), opts);
    }

    fn render_cursor(frame: &mut Frame, col: usize, opts: &TextFieldOptions) {
        if !opts.cursor_visible {
            return;
        }
        let cursor_x = opts.x + (col as f32 * opts.char_width).round() as usize;
        if cursor_x <= opts.x + opts.width {
            frame.fill_rect_px(
                cursor_x,
                opts.y + 1,
                2,
                opts.height.saturating_sub(2),
                opts.cursor_color,
            );
        }
    }

    /// First visible character so that `cursor_col` fits in `visible_chars`
    pub fn scroll_for(cursor_col: usize, visible_chars: usize) -> usize {
        if visible_chars == 0 {
            return cursor_col;
        }
        (cursor_col + 1).saturating_sub(visible_chars)
    }
}
