//! Frame abstraction for drawing primitives
//!
//! Wraps the ARGB pixel buffer so rendering code never indexes it directly.
//! Every primitive clips against the frame bounds and the optional clip rect.

use fontdue::Font;

use crate::model::Rect;

use super::GlyphCache;

/// Blend `fg` over `bg` with the given coverage, producing an opaque color.
///
/// Both colors are ARGB (0xAARRGGBB); the alpha byte of `fg` is ignored in
/// favour of `alpha`.
#[inline]
pub fn blend_colors(bg: u32, fg: u32, alpha: f32) -> u32 {
    let channel = |shift: u32| {
        let b = ((bg >> shift) & 0xFF) as f32;
        let f = ((fg >> shift) & 0xFF) as f32;
        ((b * (1.0 - alpha) + f * alpha) as u32) << shift
    };
    0xFF000000 | channel(16) | channel(8) | channel(0)
}

#[inline]
fn alpha_of(color: u32) -> f32 {
    ((color >> 24) & 0xFF) as f32 / 255.0
}

/// Pixel region, start inclusive and end exclusive
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Span {
    x0: usize,
    y0: usize,
    x1: usize,
    y1: usize,
}

impl Span {
    fn from_rect(rect: Rect) -> Self {
        let x0 = rect.x.max(0.0) as usize;
        let y0 = rect.y.max(0.0) as usize;
        Self {
            x0,
            y0,
            x1: rect.right().max(0.0) as usize,
            y1: rect.bottom().max(0.0) as usize,
        }
    }

    fn intersect(self, other: Span) -> Span {
        Span {
            x0: self.x0.max(other.x0),
            y0: self.y0.max(other.y0),
            x1: self.x1.min(other.x1),
            y1: self.y1.min(other.y1),
        }
    }

    #[inline]
    fn contains(&self, x: usize, y: usize) -> bool {
        x >= self.x0 && x < self.x1 && y >= self.y0 && y < self.y1
    }
}

/// A frame buffer wrapper providing safe drawing primitives.
///
/// All coordinates are in physical pixels.
pub struct Frame<'a> {
    buffer: &'a mut [u32],
    width: usize,
    height: usize,
    clip: Option<Span>,
}

impl<'a> Frame<'a> {
    /// Create a frame over `buffer`
    ///
    /// A buffer shorter than `width * height` shrinks the height to fit.
    pub fn new(buffer: &'a mut [u32], width: usize, height: usize) -> Self {
        let height = if width > 0 {
            height.min(buffer.len() / width)
        } else {
            0
        };
        Self {
            buffer,
            width,
            height,
            clip: None,
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Restrict subsequent drawing to `rect`
    pub fn set_clip(&mut self, rect: Rect) {
        self.clip = Some(Span::from_rect(rect).intersect(self.bounds()));
    }

    pub fn clear_clip(&mut self) {
        self.clip = None;
    }

    fn bounds(&self) -> Span {
        Span {
            x0: 0,
            y0: 0,
            x1: self.width,
            y1: self.height,
        }
    }

    /// The drawable region: frame bounds narrowed by the clip rect
    #[inline]
    fn drawable(&self) -> Span {
        self.clip.unwrap_or_else(|| self.bounds())
    }

    fn span_px(&self, x: usize, y: usize, w: usize, h: usize) -> Span {
        Span {
            x0: x,
            y0: y,
            x1: x.saturating_add(w),
            y1: y.saturating_add(h),
        }
        .intersect(self.drawable())
    }

    /// Clear the entire buffer, ignoring the clip rect
    #[inline]
    pub fn clear(&mut self, color: u32) {
        self.buffer.fill(color);
    }

    fn fill_span(&mut self, span: Span, color: u32) {
        for y in span.y0..span.y1 {
            let row = y * self.width;
            if span.x1 > span.x0 {
                self.buffer[row + span.x0..row + span.x1].fill(color);
            }
        }
    }

    fn blend_span(&mut self, span: Span, color: u32) {
        let alpha = alpha_of(color);
        if alpha <= 0.0 {
            return;
        }
        if alpha >= 1.0 {
            return self.fill_span(span, color);
        }
        for y in span.y0..span.y1 {
            let row = y * self.width;
            for x in span.x0..span.x1 {
                self.buffer[row + x] = blend_colors(self.buffer[row + x], color, alpha);
            }
        }
    }

    /// Fill a rectangle with a solid color (no alpha blending)
    pub fn fill_rect(&mut self, rect: Rect, color: u32) {
        let span = Span::from_rect(rect).intersect(self.drawable());
        self.fill_span(span, color);
    }

    /// Fill a rectangle specified by pixel coordinates
    pub fn fill_rect_px(&mut self, x: usize, y: usize, w: usize, h: usize, color: u32) {
        let span = self.span_px(x, y, w, h);
        self.fill_span(span, color);
    }

    /// Fill a rectangle, blending by the color's alpha byte
    pub fn blend_rect(&mut self, rect: Rect, color: u32) {
        let span = Span::from_rect(rect).intersect(self.drawable());
        self.blend_span(span, color);
    }

    pub fn blend_rect_px(&mut self, x: usize, y: usize, w: usize, h: usize, color: u32) {
        let span = self.span_px(x, y, w, h);
        self.blend_span(span, color);
    }

    /// Set a single pixel (respects the clip rect)
    #[inline]
    pub fn set_pixel(&mut self, x: usize, y: usize, color: u32) {
        if self.drawable().contains(x, y) {
            self.buffer[y * self.width + x] = color;
        }
    }

    /// Read a single pixel, 0 when out of bounds
    #[inline]
    pub fn get_pixel(&self, x: usize, y: usize) -> u32 {
        if self.bounds().contains(x, y) {
            self.buffer[y * self.width + x]
        } else {
            0
        }
    }

    /// Blend a single pixel by the color's alpha byte
    #[inline]
    pub fn blend_pixel(&mut self, x: usize, y: usize, color: u32) {
        if !self.drawable().contains(x, y) {
            return;
        }
        let alpha = alpha_of(color);
        if alpha <= 0.0 {
            return;
        }
        let idx = y * self.width + x;
        self.buffer[idx] = if alpha >= 1.0 {
            color | 0xFF000000
        } else {
            blend_colors(self.buffer[idx], color, alpha)
        };
    }

    /// Darken everything drawn so far (backdrop behind the form panel)
    pub fn dim(&mut self, alpha: u8) {
        let span = self.bounds();
        self.blend_span(span, (alpha as u32) << 24);
    }

    /// Draw a 1px outline, always opaque
    pub fn stroke_rect_px(&mut self, x: usize, y: usize, w: usize, h: usize, color: u32) {
        if w == 0 || h == 0 {
            return;
        }
        let color = color | 0xFF000000;
        self.fill_rect_px(x, y, w, 1, color);
        self.fill_rect_px(x, y + h - 1, w, 1, color);
        self.fill_rect_px(x, y, 1, h, color);
        self.fill_rect_px(x + w - 1, y, 1, h, color);
    }

    /// Fill a rectangle and outline it with a 1px border
    pub fn draw_bordered_rect(
        &mut self,
        x: usize,
        y: usize,
        w: usize,
        h: usize,
        fill_color: u32,
        border_color: u32,
    ) {
        self.blend_rect_px(x, y, w, h, fill_color);
        self.stroke_rect_px(x, y, w, h, border_color);
    }

    /// Draw a grip of `cols` x `rows` square dots centered in `rect`
    pub fn draw_grip(&mut self, rect: Rect, cols: usize, rows: usize, dot: usize, color: u32) {
        if cols == 0 || rows == 0 || dot == 0 {
            return;
        }
        let pitch = dot * 2;
        let grip_w = cols * pitch - dot;
        let grip_h = rows * pitch - dot;
        let x0 = (rect.x + (rect.width - grip_w as f32) / 2.0).max(0.0) as usize;
        let y0 = (rect.y + (rect.height - grip_h as f32) / 2.0).max(0.0) as usize;
        for r in 0..rows {
            for c in 0..cols {
                self.fill_rect_px(x0 + c * pitch, y0 + r * pitch, dot, dot, color);
            }
        }
    }
}

/// Text rendering context wrapping font and glyph cache.
pub struct TextPainter<'a> {
    font: &'a Font,
    glyph_cache: &'a mut GlyphCache,
    font_size: f32,
    ascent: f32,
    char_width: f32,
    line_height: usize,
}

impl<'a> TextPainter<'a> {
    pub fn new(
        font: &'a Font,
        glyph_cache: &'a mut GlyphCache,
        font_size: f32,
        ascent: f32,
        char_width: f32,
        line_height: usize,
    ) -> Self {
        Self {
            font,
            glyph_cache,
            font_size,
            ascent,
            char_width,
            line_height,
        }
    }

    /// Monospace advance used for layout
    #[inline]
    pub fn char_width(&self) -> f32 {
        self.char_width
    }

    #[inline]
    pub fn line_height(&self) -> usize {
        self.line_height
    }

    /// Draw text with its top-left corner at (x, y)
    pub fn draw(&mut self, frame: &mut Frame, x: usize, y: usize, text: &str, color: u32) {
        self.draw_limited(frame, x, y, text, usize::MAX, color);
    }

    /// Draw text, stopping before any glyph would end past `max_width` pixels
    ///
    /// Returns true if the text was cut short.
    pub fn draw_limited(
        &mut self,
        frame: &mut Frame,
        x: usize,
        y: usize,
        text: &str,
        max_width: usize,
        color: u32,
    ) -> bool {
        let limit = x.saturating_add(max_width) as f32;
        let baseline = y as f32 + self.ascent;
        let mut pen_x = x as f32;

        for ch in text.chars() {
            let (metrics, bitmap) = self
                .glyph_cache
                .entry((ch, self.font_size.to_bits()))
                .or_insert_with(|| self.font.rasterize(ch, self.font_size));

            if pen_x + metrics.advance_width > limit + 0.5 {
                return true;
            }

            let glyph_top = baseline - metrics.height as f32 - metrics.ymin as f32;
            for by in 0..metrics.height {
                let py = (glyph_top + by as f32) as isize;
                if py < 0 {
                    continue;
                }
                for bx in 0..metrics.width {
                    let coverage = bitmap[by * metrics.width + bx];
                    if coverage == 0 {
                        continue;
                    }
                    let px = pen_x as isize + bx as isize + metrics.xmin as isize;
                    if px < 0 {
                        continue;
                    }
                    let tinted = (color & 0x00FFFFFF) | ((coverage as u32) << 24);
                    frame.blend_pixel(px as usize, py as usize, tinted);
                }
            }

            pen_x += metrics.advance_width;
        }
        false
    }
}
