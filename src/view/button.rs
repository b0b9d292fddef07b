//! Button rendering primitives
//!
//! Pure functions: no widget tree or stored state. Callers derive the
//! visual state from the model and pass it in.

use crate::model::Rect;
use crate::theme::Theme;

use super::frame::{Frame, TextPainter};

/// Visual state of a button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonState {
    #[default]
    Normal,
    /// Mouse is hovering over the button
    Hovered,
    /// Selected option in a segmented control (column selector)
    Pressed,
}

impl ButtonState {
    pub fn hovered_if(hovered: bool) -> Self {
        if hovered {
            ButtonState::Hovered
        } else {
            ButtonState::Normal
        }
    }
}

/// Render a button with a centered label
pub fn render_button(
    frame: &mut Frame,
    painter: &mut TextPainter,
    theme: &Theme,
    rect: Rect,
    label: &str,
    state: ButtonState,
    focused: bool,
) {
    let btn = &theme.button;
    let bg = match state {
        ButtonState::Normal => btn.background,
        ButtonState::Hovered => btn.background_hover,
        ButtonState::Pressed => btn.background_pressed,
    };

    let x = rect.x.round().max(0.0) as usize;
    let y = rect.y.round().max(0.0) as usize;
    let w = rect.width.round() as usize;
    let h = rect.height.round() as usize;

    frame.draw_bordered_rect(x, y, w, h, bg.to_argb_u32(), btn.border.to_argb_u32());

    if focused && w > 2 && h > 2 {
        frame.stroke_rect_px(x + 1, y + 1, w - 2, h - 2, btn.focus_ring.to_argb_u32());
    }

    let text_w = (label.chars().count() as f32 * painter.char_width()).round() as usize;
    let text_x = x + w.saturating_sub(text_w) / 2;
    let text_y = y + h.saturating_sub(painter.line_height()) / 2;
    painter.draw(frame, text_x, text_y, label, btn.foreground.to_argb_u32());
}
