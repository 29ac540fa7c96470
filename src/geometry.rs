//! Pixel-space geometric primitives.
//!
//! All rasterizer input lives on the integer pixel grid: points, closed
//! polygons, and the horizontal spans a fill produces.

use std::f64::consts::PI;

/// A point on the integer pixel grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Point2D {
    /// X coordinate.
    pub x: i32,
    /// Y coordinate.
    pub y: i32,
}

impl Point2D {
    /// Origin point (0, 0).
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Create a new point.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Offset this point by `(dx, dy)`.
    #[must_use]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

impl From<(i32, i32)> for Point2D {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// How fractional vertex coordinates are snapped to the pixel grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VertexRounding {
    /// Drop the fractional part (round toward zero).
    #[default]
    Truncate,
    /// Round to the nearest integer, halves away from zero.
    Round,
}

impl VertexRounding {
    #[inline]
    fn apply(self, v: f64) -> i32 {
        match self {
            Self::Truncate => v.trunc() as i32,
            Self::Round => v.round() as i32,
        }
    }
}

/// A closed polygon given by its vertices in order.
///
/// Edges are implicit: vertex `i` connects to vertex `(i + 1) % n`. The fill
/// is only well defined for simple (non-self-intersecting) polygons with at
/// least three vertices; fewer vertices make the polygon degenerate.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Polygon {
    vertices: Vec<Point2D>,
}

impl Polygon {
    /// Create a polygon from its vertices.
    #[must_use]
    pub fn new(vertices: Vec<Point2D>) -> Self {
        Self { vertices }
    }

    /// Create a polygon from `(x, y)` pairs.
    #[must_use]
    pub fn from_coords(coords: &[(i32, i32)]) -> Self {
        Self::new(coords.iter().copied().map(Point2D::from).collect())
    }

    /// Approximate a disk with one vertex per degree.
    ///
    /// Vertex `a` sits at `(cx + r·cos a, cy + r·sin a)` for `a` in `0..360`,
    /// snapped with `rounding`. Wheels in the park scene truncate, firework
    /// bursts round.
    #[must_use]
    pub fn circle(cx: i32, cy: i32, radius: f32, rounding: VertexRounding) -> Self {
        let r = f64::from(radius);
        let vertices = (0..360)
            .map(|deg| {
                let rad = f64::from(deg) * PI / 180.0;
                Point2D::new(
                    cx + rounding.apply(r * rad.cos()),
                    cy + rounding.apply(r * rad.sin()),
                )
            })
            .collect();
        Self::new(vertices)
    }

    /// The vertices in order.
    #[must_use]
    pub fn vertices(&self) -> &[Point2D] {
        &self.vertices
    }

    /// Number of vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Whether the polygon has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Whether the polygon has too few vertices to enclose an area.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.vertices.len() < 3
    }

    /// Iterate over edges as `(start, end)` pairs, closing back to vertex 0.
    pub fn edges(&self) -> impl Iterator<Item = (Point2D, Point2D)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (self.vertices[i], self.vertices[(i + 1) % n]))
    }

    /// Lowest and highest y over all vertices, or `None` when empty.
    #[must_use]
    pub fn y_range(&self) -> Option<(i32, i32)> {
        let first = self.vertices.first()?;
        Some(
            self.vertices
                .iter()
                .fold((first.y, first.y), |(lo, hi), v| (lo.min(v.y), hi.max(v.y))),
        )
    }

    /// A copy of this polygon moved by `(dx, dy)`.
    #[must_use]
    pub fn translated(&self, dx: i32, dy: i32) -> Self {
        Self::new(self.vertices.iter().map(|v| v.offset(dx, dy)).collect())
    }
}

impl From<Vec<Point2D>> for Polygon {
    fn from(vertices: Vec<Point2D>) -> Self {
        Self::new(vertices)
    }
}

/// An inclusive horizontal run of pixels on one row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// Row.
    pub y: i32,
    /// First covered column.
    pub x_start: i32,
    /// Last covered column (inclusive).
    pub x_end: i32,
}

impl Span {
    /// Create a new span.
    #[must_use]
    pub const fn new(y: i32, x_start: i32, x_end: i32) -> Self {
        Self { y, x_start, x_end }
    }

    /// Number of pixels covered (zero if the span is inverted).
    #[must_use]
    pub fn len(&self) -> u64 {
        if self.x_end < self.x_start {
            0
        } else {
            (i64::from(self.x_end) - i64::from(self.x_start) + 1) as u64
        }
    }

    /// Whether the span covers no pixels.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.x_end < self.x_start
    }

    /// Iterate over the covered points left to right.
    pub fn points(&self) -> impl Iterator<Item = Point2D> {
        let y = self.y;
        (self.x_start..=self.x_end).map(move |x| Point2D::new(x, y))
    }
}
