//! Shape values that know how to rasterize themselves.

use super::circle::draw_circle;
use super::line::draw_line;
use super::scanline::fill_polygon;
use super::sink::PixelSink;
use crate::color::Rgba;
use crate::geometry::{Point2D, Polygon};

/// Trait for drawable primitives.
pub trait Drawable {
    /// Draw this primitive into a sink.
    fn draw(&self, sink: &mut dyn PixelSink, color: Rgba);
}

/// A line segment between two pixels, both ends included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LineSegment {
    /// Start point.
    pub start: Point2D,
    /// End point.
    pub end: Point2D,
}

impl LineSegment {
    /// Create a new line segment.
    #[must_use]
    pub const fn new(start: Point2D, end: Point2D) -> Self {
        Self { start, end }
    }

    /// Create a line from coordinates.
    #[must_use]
    pub const fn from_coords(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self::new(Point2D::new(x0, y0), Point2D::new(x1, y1))
    }
}

/// A circle outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Circle {
    /// Center point.
    pub center: Point2D,
    /// Radius in pixels.
    pub radius: i32,
}

impl Circle {
    /// Create a new circle.
    #[must_use]
    pub const fn new(center: Point2D, radius: i32) -> Self {
        Self { center, radius }
    }
}

impl Drawable for LineSegment {
    fn draw(&self, sink: &mut dyn PixelSink, color: Rgba) {
        draw_line(sink, self.start.x, self.start.y, self.end.x, self.end.y, color);
    }
}

impl Drawable for Circle {
    fn draw(&self, sink: &mut dyn PixelSink, color: Rgba) {
        draw_circle(sink, self.center.x, self.center.y, self.radius, color);
    }
}

/// Polygons draw as a solid scanline fill.
impl Drawable for Polygon {
    fn draw(&self, sink: &mut dyn PixelSink, color: Rgba) {
        fill_polygon(sink, self, color);
    }
}
