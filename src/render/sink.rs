//! Destinations for rasterized points.

use crate::color::Rgba;
use crate::geometry::Point2D;
use std::collections::BTreeMap;

/// Anything the rasterizer can emit pixels into.
///
/// The rasterizer never clips; sinks decide what to do with points outside
/// their extent.
pub trait PixelSink {
    /// Receive one covered pixel.
    fn plot(&mut self, p: Point2D, color: Rgba);

    /// Receive the inclusive run `x_start..=x_end` on row `y`.
    ///
    /// The default forwards each pixel to [`plot`](Self::plot) left to right.
    fn plot_span(&mut self, y: i32, x_start: i32, x_end: i32, color: Rgba) {
        for x in x_start..=x_end {
            self.plot(Point2D::new(x, y), color);
        }
    }
}

/// Records every emission in order, duplicates included.
impl PixelSink for Vec<Point2D> {
    fn plot(&mut self, p: Point2D, _color: Rgba) {
        self.push(p);
    }
}

/// A deduplicated set of colored points; the last write to a point wins.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointSet {
    points: BTreeMap<Point2D, Rgba>,
}

impl PointSet {
    /// Create an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether no point has been emitted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Whether `p` has been emitted.
    #[must_use]
    pub fn contains(&self, p: Point2D) -> bool {
        self.points.contains_key(&p)
    }

    /// Color last written at `p`.
    #[must_use]
    pub fn color_at(&self, p: Point2D) -> Option<Rgba> {
        self.points.get(&p).copied()
    }

    /// Distinct points in `(x, y)` order.
    pub fn points(&self) -> impl Iterator<Item = Point2D> + '_ {
        self.points.keys().copied()
    }

    /// Distinct rows touched, ascending.
    #[must_use]
    pub fn rows(&self) -> Vec<i32> {
        let mut rows: Vec<i32> = self.points.keys().map(|p| p.y).collect();
        rows.sort_unstable();
        rows.dedup();
        rows
    }

    /// Remove all points.
    pub fn clear(&mut self) {
        self.points.clear();
    }
}

impl PixelSink for PointSet {
    fn plot(&mut self, p: Point2D, color: Rgba) {
        self.points.insert(p, color);
    }
}

impl FromIterator<Point2D> for PointSet {
    fn from_iter<I: IntoIterator<Item = Point2D>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().map(|p| (p, Rgba::WHITE)).collect(),
        }
    }
}
