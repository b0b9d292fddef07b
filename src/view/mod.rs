//! View module - rendering for the ranked list window
//!
//! Contains the Renderer struct. Layout comes from `geometry`, so what is
//! drawn here always matches what `hit_test` reports.

pub mod button;
pub mod frame;
pub mod geometry;
pub mod hit_test;
pub mod text_field;

pub use frame::{Frame, TextPainter};
pub use hit_test::{hit_test_ui, EventResult, HitTarget, MouseEvent, Point};
pub use text_field::{TextFieldOptions, TextFieldRenderer};

use std::collections::HashMap;
use std::num::NonZeroU32;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use anyhow::{Context, Result};
use fontdue::{Font, FontSettings, LineMetrics, Metrics};
use softbuffer::Surface;
use winit::window::Window;

use crate::config::AppConfig;
use crate::model::{AppModel, Rect, TextInput};

use button::{render_button, ButtonState};
use geometry::{
    ModalSpacing, RowLayout, ADD_BUTTON_LABEL, CANCEL_BUTTON_LABEL, COLUMNS_LABEL,
    IMPORT_BUTTON_LABEL, SAVE_BUTTON_LABEL,
};

pub type GlyphCacheKey = (char, u32);
pub type GlyphCache = HashMap<GlyphCacheKey, (Metrics, Vec<u8>)>;

/// Text shown in the list area while there are no rows
pub const EMPTY_LIST_HINT: &str = "No items yet. Add one or import a CSV file.";

/// Monospace fonts tried, in order, when no `font_path` is configured
const SYSTEM_FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSansMono.ttf",
    "/usr/share/fonts/TTF/DejaVuSansMono.ttf",
    "/usr/share/fonts/dejavu/DejaVuSansMono.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationMono-Regular.ttf",
    "/usr/share/fonts/liberation-mono/LiberationMono-Regular.ttf",
    "/usr/share/fonts/noto/NotoSansMono-Regular.ttf",
    "/System/Library/Fonts/Menlo.ttc",
    "/System/Library/Fonts/Monaco.ttf",
    "C:\\Windows\\Fonts\\consola.ttf",
    "C:\\Windows\\Fonts\\cour.ttf",
];

/// Font file to use: the configured path, or the first system candidate found
pub fn resolve_font_path(config: &AppConfig) -> Option<PathBuf> {
    if let Some(path) = &config.font_path {
        return Some(path.clone());
    }
    SYSTEM_FONT_CANDIDATES
        .iter()
        .map(Path::new)
        .find(|p| p.is_file())
        .map(Path::to_path_buf)
}

fn load_font(config: &AppConfig) -> Result<Font> {
    let path = resolve_font_path(config).ok_or_else(|| {
        anyhow::anyhow!("No monospace font found; set `font_path` in the config file")
    })?;
    let bytes = std::fs::read(&path)
        .with_context(|| format!("Failed to read font {}", path.display()))?;
    let font = Font::from_bytes(bytes, FontSettings::default())
        .map_err(|e| anyhow::anyhow!("Failed to load font {}: {}", path.display(), e))?;
    tracing::info!(font = %path.display(), "loaded font");
    Ok(font)
}

#[inline]
fn px(v: f32) -> usize {
    v.round().max(0.0) as usize
}

pub struct Renderer {
    font: Font,
    surface: Surface<Rc<Window>, Rc<Window>>,
    /// Softbuffer does not preserve contents between frames, so drawing
    /// happens here and is copied to the surface on present.
    back_buffer: Vec<u32>,
    width: u32,
    height: u32,
    font_size: f32,
    line_metrics: LineMetrics,
    glyph_cache: GlyphCache,
    char_width: f32,
    scale_factor: f64,
}

impl Renderer {
    /// Create a renderer using the window's scale factor
    pub fn new(
        window: Rc<Window>,
        context: &softbuffer::Context<Rc<Window>>,
        config: &AppConfig,
    ) -> Result<Self> {
        let scale_factor = window.scale_factor();
        Self::with_scale_factor(window, context, config, scale_factor)
    }

    pub fn with_scale_factor(
        window: Rc<Window>,
        context: &softbuffer::Context<Rc<Window>>,
        config: &AppConfig,
        scale_factor: f64,
    ) -> Result<Self> {
        let size = window.inner_size();
        let (width, height) = (size.width.max(1), size.height.max(1));

        let mut surface = Surface::new(context, Rc::clone(&window))
            .map_err(|e| anyhow::anyhow!("Failed to create surface: {}", e))?;
        resize_surface(&mut surface, width, height)?;

        let font = load_font(config)?;
        let font_size = config.font_size * scale_factor as f32;
        let line_metrics = font
            .horizontal_line_metrics(font_size)
            .ok_or_else(|| anyhow::anyhow!("Font has no horizontal line metrics"))?;
        let (metrics, _) = font.rasterize('M', font_size);

        Ok(Self {
            font,
            surface,
            back_buffer: vec![0u32; width as usize * height as usize],
            width,
            height,
            font_size,
            line_metrics,
            glyph_cache: HashMap::new(),
            char_width: metrics.advance_width,
            scale_factor,
        })
    }

    pub fn scale_factor(&self) -> f64 {
        self.scale_factor
    }

    pub fn char_width(&self) -> f32 {
        self.char_width
    }

    pub fn line_height(&self) -> usize {
        self.line_metrics.new_line_size.ceil() as usize
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Draw the whole window and present it
    ///
    /// `hover` is the target under the pointer, used for button highlight.
    pub fn render(&mut self, model: &AppModel, hover: Option<&HitTarget>) -> Result<()> {
        let (w, h) = model.window_size;
        if w == 0 || h == 0 {
            return Ok(());
        }
        if (self.width, self.height) != (w, h) {
            self.width = w;
            self.height = h;
            self.back_buffer.resize(w as usize * h as usize, 0);
            resize_surface(&mut self.surface, w, h)?;
        }

        {
            let mut frame = Frame::new(&mut self.back_buffer, w as usize, h as usize);
            let mut painter = TextPainter::new(
                &self.font,
                &mut self.glyph_cache,
                self.font_size,
                self.line_metrics.ascent,
                self.char_width,
                self.line_metrics.new_line_size.ceil() as usize,
            );

            frame.clear(model.theme.window.background.to_argb_u32());
            render_rows(&mut frame, &mut painter, model);
            render_toolbar(&mut frame, &mut painter, model, hover);
            render_status_bar(&mut frame, &mut painter, model);
            render_form(&mut frame, &mut painter, model, hover);
        }

        let mut buffer = self
            .surface
            .buffer_mut()
            .map_err(|e| anyhow::anyhow!("Failed to get surface buffer: {}", e))?;
        let n = buffer.len().min(self.back_buffer.len());
        buffer[..n].copy_from_slice(&self.back_buffer[..n]);
        buffer
            .present()
            .map_err(|e| anyhow::anyhow!("Failed to present buffer: {}", e))?;
        Ok(())
    }
}

fn resize_surface(surface: &mut Surface<Rc<Window>, Rc<Window>>, width: u32, height: u32) -> Result<()> {
    let (Some(w), Some(h)) = (NonZeroU32::new(width), NonZeroU32::new(height)) else {
        return Ok(());
    };
    surface
        .resize(w, h)
        .map_err(|e| anyhow::anyhow!("Failed to resize surface: {}", e))
}

// ============================================================================
// Toolbar
// ============================================================================

fn render_toolbar(frame: &mut Frame, painter: &mut TextPainter, model: &AppModel, hover: Option<&HitTarget>) {
    let theme = &model.theme;
    let toolbar = geometry::toolbar_layout(model);

    frame.fill_rect(toolbar.rect, theme.toolbar.background.to_argb_u32());
    frame.fill_rect_px(
        0,
        px(toolbar.rect.bottom()).saturating_sub(1),
        px(toolbar.rect.width),
        1,
        theme.toolbar.border.to_argb_u32(),
    );

    let is_hovered = |target: HitTarget| hover == Some(&target);
    render_button(
        frame,
        painter,
        theme,
        toolbar.add,
        ADD_BUTTON_LABEL,
        ButtonState::hovered_if(is_hovered(HitTarget::ToolbarAdd)),
        false,
    );

    let import_label = if model.ui.is_importing {
        "Importing…"
    } else {
        IMPORT_BUTTON_LABEL
    };
    render_button(
        frame,
        painter,
        theme,
        toolbar.import,
        import_label,
        ButtonState::hovered_if(is_hovered(HitTarget::ToolbarImport)),
        false,
    );

    let (lx, ly) = toolbar.columns_label;
    painter.draw(
        frame,
        px(lx),
        px(ly),
        COLUMNS_LABEL,
        theme.toolbar.foreground.to_argb_u32(),
    );

    let current = model.columns();
    for (count, rect) in &toolbar.column_options {
        let state = if *count == current {
            ButtonState::Pressed
        } else {
            ButtonState::hovered_if(is_hovered(HitTarget::ColumnOption(*count)))
        };
        render_button(frame, painter, theme, *rect, &count.to_string(), state, *count == current);
    }
}

// ============================================================================
// Rows
// ============================================================================

fn render_rows(frame: &mut Frame, painter: &mut TextPainter, model: &AppModel) {
    let viewport = geometry::list_viewport(model);
    frame.set_clip(viewport);

    if model.list.is_empty() {
        let color = model.theme.window.foreground.with_alpha(140).to_argb_u32();
        let x = model.metrics.padding * 2;
        let y = px(viewport.y) + model.metrics.padding * 2;
        painter.draw(frame, x, y, EMPTY_LIST_HINT, color);
        frame.clear_clip();
        return;
    }

    let dragged = model.drag.dragged();
    for layout in geometry::row_layouts(model) {
        if layout.rect.bottom() < viewport.y || layout.rect.y > viewport.bottom() {
            continue;
        }
        render_row(frame, painter, model, &layout, dragged == Some(layout.id));
    }
    frame.clear_clip();
}

fn render_row(
    frame: &mut Frame,
    painter: &mut TextPainter,
    model: &AppModel,
    layout: &RowLayout,
    dragging: bool,
) {
    let theme = &model.theme.row;
    let Some(row) = model.list.get(layout.id) else {
        return;
    };
    let r = layout.rect;

    let bg = if dragging {
        theme.background_dragging
    } else {
        theme.background
    };
    frame.draw_bordered_rect(
        px(r.x),
        px(r.y),
        px(r.width),
        px(r.height),
        bg.to_argb_u32(),
        theme.border.to_argb_u32(),
    );
    if dragging {
        let accent = (3.0 * model.metrics.scale_factor).round().max(1.0) as usize;
        frame.fill_rect_px(px(r.x), px(r.y), accent, px(r.height), theme.drop_indicator.to_argb_u32());
    }

    let dot = (2.0 * model.metrics.scale_factor).round().max(1.0) as usize;
    frame.draw_grip(layout.handle, 2, 3, dot, theme.handle.to_argb_u32());

    match model.ui.position_edit.as_ref().filter(|e| e.row == layout.id) {
        Some(edit) => render_position_input(frame, painter, model, layout.label, &edit.input),
        None => {
            painter.draw_limited(
                frame,
                px(layout.label.x),
                px(layout.label.y),
                row.label(),
                px(layout.label.width),
                theme.label_foreground.to_argb_u32(),
            );
        }
    }

    let field_bg = theme.field_background.to_argb_u32();
    let field_fg = theme.field_foreground.to_argb_u32();
    for (idx, cell) in &layout.fields {
        frame.blend_rect(*cell, field_bg);
        if let Some(text) = row.field(*idx) {
            painter.draw_limited(frame, px(cell.x), px(cell.y), text, px(cell.width), field_fg);
        }
    }

    let glyph_x = layout.remove.x + (layout.remove.width - painter.char_width()) / 2.0;
    painter.draw(
        frame,
        px(glyph_x),
        px(layout.remove.y),
        "×",
        theme.remove_foreground.to_argb_u32(),
    );
}

fn render_position_input(
    frame: &mut Frame,
    painter: &mut TextPainter,
    model: &AppModel,
    rect: Rect,
    input: &TextInput,
) {
    let form = &model.theme.form;
    frame.draw_bordered_rect(
        px(rect.x).saturating_sub(1),
        px(rect.y),
        px(rect.width) + 2,
        px(rect.height),
        form.input_background.to_argb_u32(),
        form.input_border_focused.to_argb_u32(),
    );
    let opts = TextFieldOptions {
        x: px(rect.x),
        y: px(rect.y),
        width: px(rect.width),
        height: px(rect.height),
        char_width: painter.char_width(),
        text_color: form.foreground.to_argb_u32(),
        placeholder_color: form.placeholder.to_argb_u32(),
        cursor_color: form.cursor.to_argb_u32(),
        cursor_visible: model.ui.cursor_visible,
    };
    TextFieldRenderer::render(frame, painter, input, &opts);
}

// ============================================================================
// Status Bar
// ============================================================================

/// Left-hand status bar text: row count and column count
pub fn status_summary(model: &AppModel) -> String {
    let count = model.list.len();
    let noun = if count == 1 { "item" } else { "items" };
    format!("{} {} · {} columns", count, noun, model.columns())
}

fn render_status_bar(frame: &mut Frame, painter: &mut TextPainter, model: &AppModel) {
    let theme = &model.theme.status_bar;
    let rect = geometry::status_bar_rect(model);
    let fg = theme.foreground.to_argb_u32();
    frame.fill_rect(rect, theme.background.to_argb_u32());

    let text_y = px(rect.y) + model.metrics.gap;
    let pad = model.metrics.padding;
    let summary = status_summary(model);
    painter.draw(frame, pad, text_y, &summary, fg);

    let message = model
        .ui
        .transient_message
        .as_ref()
        .map(|m| m.text.as_str())
        .unwrap_or(&model.ui.status_message);
    if message.is_empty() {
        return;
    }

    let summary_end = pad + px(geometry::text_width(&summary, painter.char_width()));
    let message_w = px(geometry::text_width(message, painter.char_width()));
    let right_x = px(rect.width).saturating_sub(pad + message_w);
    let x = right_x.max(summary_end + pad * 2);
    let room = px(rect.width).saturating_sub(x + pad);
    painter.draw_limited(frame, x, text_y, message, room, fg);
}

// ============================================================================
// Form Panel
// ============================================================================

fn render_form(frame: &mut Frame, painter: &mut TextPainter, model: &AppModel, hover: Option<&HitTarget>) {
    let Some(form) = model.form.as_ref() else {
        return;
    };
    let Some((layout, widgets)) = geometry::form_layout(model) else {
        return;
    };
    let theme = &model.theme;
    let ft = &theme.form;

    frame.dim(0x66);

    let border = ft.border.unwrap_or(theme.row.border).to_argb_u32();
    frame.draw_bordered_rect(layout.x, layout.y, layout.w, layout.h, ft.background.to_argb_u32(), border);

    let title = match form.editing().and_then(|id| model.list.get(id)) {
        Some(row) => format!("Edit item {}", row.label()),
        None => "Add item".to_string(),
    };
    painter.draw(
        frame,
        px(widgets.title.x),
        px(widgets.title.y),
        &title,
        ft.foreground.to_argb_u32(),
    );

    let pad_x = ModalSpacing::INPUT_PAD_X;
    let pad_y = ModalSpacing::INPUT_PAD_Y / 2;
    for (idx, (rect, input)) in widgets.inputs.iter().zip(form.inputs()).enumerate() {
        let focused = idx == form.focused();
        let input_border = if focused { ft.input_border_focused } else { ft.input_background };
        frame.draw_bordered_rect(
            px(rect.x),
            px(rect.y),
            px(rect.width),
            px(rect.height),
            ft.input_background.to_argb_u32(),
            input_border.to_argb_u32(),
        );
        let opts = TextFieldOptions {
            x: px(rect.x) + pad_x,
            y: px(rect.y) + pad_y,
            width: px(rect.width).saturating_sub(pad_x * 2),
            height: painter.line_height(),
            char_width: painter.char_width(),
            text_color: ft.foreground.to_argb_u32(),
            placeholder_color: ft.placeholder.to_argb_u32(),
            cursor_color: ft.cursor.to_argb_u32(),
            cursor_visible: focused && model.ui.cursor_visible,
        };
        TextFieldRenderer::render(frame, painter, input, &opts);
    }

    let is_hovered = |target: HitTarget| hover == Some(&target);
    render_button(
        frame,
        painter,
        theme,
        widgets.save,
        SAVE_BUTTON_LABEL,
        ButtonState::hovered_if(is_hovered(HitTarget::FormSave)),
        false,
    );
    render_button(
        frame,
        painter,
        theme,
        widgets.cancel,
        CANCEL_BUTTON_LABEL,
        ButtonState::hovered_if(is_hovered(HitTarget::FormCancel)),
        false,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Theme;

    #[test]
    fn test_configured_font_path_wins() {
        let config = AppConfig {
            font_path: Some(PathBuf::from("/custom/font.ttf")),
            ..AppConfig::default()
        };
        assert_eq!(
            resolve_font_path(&config),
            Some(PathBuf::from("/custom/font.ttf"))
        );
    }

    #[test]
    fn test_missing_configured_font_is_error() {
        let config = AppConfig {
            font_path: Some(PathBuf::from("/definitely/not/a/font.ttf")),
            ..AppConfig::default()
        };
        assert!(load_font(&config).is_err());
    }

    #[test]
    fn test_status_summary() {
        let mut model = AppModel::new(800, 600, AppConfig::default(), Theme::default());
        assert_eq!(status_summary(&model), "0 items · 2 columns");
        let id = model.list.allocate_id();
        model
            .list
            .append(crate::model::Row::with_values(id, vec!["a".into()], 1));
        assert_eq!(status_summary(&model), "1 item · 2 columns");
    }
}
