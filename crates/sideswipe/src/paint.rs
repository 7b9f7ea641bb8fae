//! Painting primitives and the host-provided renderer surface.
//!
//! The row does not render pixels itself. It describes what to draw through
//! the [`Painter`] trait, which the embedding application implements on top
//! of whatever rendering system it uses. [`PaintContext`] wraps a painter
//! with the widget's local rectangle for the duration of a paint pass.

use crate::geometry::{Point, Rect};

/// An RGBA color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const TRANSPARENT: Self = Self::from_rgba8(0, 0, 0, 0);
    pub const BLACK: Self = Self::from_rgb8(0, 0, 0);
    pub const WHITE: Self = Self::from_rgb8(255, 255, 255);

    /// Create an opaque color from 8-bit RGB components.
    #[inline]
    pub const fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create a color from 8-bit RGBA components.
    #[inline]
    pub const fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

/// Stroke style for outlines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub width: f32,
}

impl Stroke {
    /// Create a new stroke.
    pub fn new(color: Color, width: f32) -> Self {
        Self { color, width }
    }
}

/// A rectangle with uniformly rounded corners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundedRect {
    pub rect: Rect,
    pub radius: f32,
}

impl RoundedRect {
    /// Create a new rounded rectangle. The radius is clamped to be
    /// non-negative.
    pub fn new(rect: Rect, radius: f32) -> Self {
        Self {
            rect,
            radius: radius.max(0.0),
        }
    }
}

/// Text drawing parameters for a single run of wrapped text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub color: Color,
    /// Wrap width in display units.
    pub max_width: f32,
    /// Maximum number of wrapped lines; further text is truncated.
    pub max_lines: u32,
}

/// The drawing capability a host must provide.
///
/// All coordinates are in the current local space; [`Painter::push_offset`]
/// shifts that space, which is how the row displaces its content while a
/// panel is revealed.
pub trait Painter {
    /// Fill a rectangle with a solid color.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Fill a rounded rectangle with a solid color.
    fn fill_rounded_rect(&mut self, rrect: RoundedRect, color: Color);

    /// Stroke the outline of a rounded rectangle.
    fn stroke_rounded_rect(&mut self, rrect: RoundedRect, stroke: &Stroke);

    /// Draw wrapped text with its top-left corner at `origin`.
    fn draw_text(&mut self, text: &str, origin: Point, style: &TextStyle);

    /// Draw an icon glyph centered horizontally at `origin`.
    fn draw_glyph(&mut self, glyph: &str, origin: Point, color: Color);

    /// Shift the local coordinate space by `offset` until the matching
    /// [`Painter::pop_offset`].
    fn push_offset(&mut self, offset: Point);

    /// Undo the most recent [`Painter::push_offset`].
    fn pop_offset(&mut self);
}

/// Context provided during widget painting.
///
/// Wraps the host painter and the widget's local rectangle (origin always
/// at 0,0) for convenient access during the paint pass.
pub struct PaintContext<'a> {
    painter: &'a mut dyn Painter,
    widget_rect: Rect,
}

impl<'a> PaintContext<'a> {
    /// Create a new paint context.
    pub fn new(painter: &'a mut dyn Painter, widget_rect: Rect) -> Self {
        Self {
            painter,
            widget_rect,
        }
    }

    /// Get the painter.
    #[inline]
    pub fn painter(&mut self) -> &mut dyn Painter {
        self.painter
    }

    /// Get the widget's local rectangle.
    #[inline]
    pub fn rect(&self) -> Rect {
        self.widget_rect
    }

    /// Get the widget's width.
    #[inline]
    pub fn width(&self) -> f32 {
        self.widget_rect.width()
    }

    /// Get the widget's height.
    #[inline]
    pub fn height(&self) -> f32 {
        self.widget_rect.height()
    }

    /// Run `f` with the local coordinate space shifted by `offset`.
    pub fn with_offset(&mut self, offset: Point, f: impl FnOnce(&mut PaintContext<'_>)) {
        self.painter.push_offset(offset);
        let mut shifted = PaintContext::new(self.painter, self.widget_rect);
        f(&mut shifted);
        self.painter.pop_offset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_constructors() {
        let c = Color::from_rgb8(10, 20, 30);
        assert_eq!(c.a, 255);
        let c = Color::from_rgba8(10, 20, 30, 40);
        assert_eq!(c.a, 40);
        assert_eq!(Color::TRANSPARENT.a, 0);
    }

    #[test]
    fn test_rounded_rect_clamps_radius() {
        let rrect = RoundedRect::new(Rect::new(0.0, 0.0, 10.0, 10.0), -4.0);
        assert_eq!(rrect.radius, 0.0);
    }
}
