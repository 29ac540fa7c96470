//! Midpoint circle rasterization.
//!
//! One octant is walked with an integer decision variable and mirrored into
//! the other seven.

use super::sink::PixelSink;
use crate::color::Rgba;
use crate::geometry::Point2D;

/// Walks the second octant of a circle of radius `r` centered on the origin,
/// yielding `(x, y)` offsets from `(0, r)` until `x > y`.
///
/// The decision variable is kept in `i64`; its increments reach `2r` and
/// would overflow `i32` for radii above about 2^30.
#[derive(Debug, Clone)]
pub struct OctantSteps {
    x: i32,
    y: i32,
    p: i64,
}

impl OctantSteps {
    /// Start walking a circle of radius `r`.
    #[must_use]
    pub fn new(r: i32) -> Self {
        Self {
            x: 0,
            y: r,
            p: 1 - i64::from(r),
        }
    }
}

impl Iterator for OctantSteps {
    type Item = (i32, i32);

    fn next(&mut self) -> Option<(i32, i32)> {
        if self.x > self.y {
            return None;
        }

        let step = (self.x, self.y);
        if self.p < 0 {
            self.p += 2 * i64::from(self.x) + 3;
        } else {
            self.p += 2 * (i64::from(self.x) - i64::from(self.y)) + 5;
            self.y -= 1;
        }
        self.x += 1;

        Some(step)
    }
}

impl std::iter::FusedIterator for OctantSteps {}

/// The eight mirror images of octant offset `(x, y)` around `(cx, cy)`.
///
/// Coordinates that leave the `i32` range saturate at its bounds; such points
/// are far outside any surface and get clipped by the sink.
#[inline]
fn mirrored(cx: i32, cy: i32, x: i32, y: i32) -> [Point2D; 8] {
    [
        Point2D::new(cx.saturating_add(x), cy.saturating_add(y)),
        Point2D::new(cx.saturating_sub(x), cy.saturating_add(y)),
        Point2D::new(cx.saturating_add(x), cy.saturating_sub(y)),
        Point2D::new(cx.saturating_sub(x), cy.saturating_sub(y)),
        Point2D::new(cx.saturating_add(y), cy.saturating_add(x)),
        Point2D::new(cx.saturating_sub(y), cy.saturating_add(x)),
        Point2D::new(cx.saturating_add(y), cy.saturating_sub(x)),
        Point2D::new(cx.saturating_sub(y), cy.saturating_sub(x)),
    ]
}

/// Points of the circle outline in emission order.
///
/// Mirrored points that coincide (on the axes, on the diagonals, or all
/// eight when `r == 0`) are emitted more than once. A negative radius
/// yields nothing.
pub fn circle_points(cx: i32, cy: i32, r: i32) -> impl Iterator<Item = Point2D> {
    OctantSteps::new(r).flat_map(move |(x, y)| mirrored(cx, cy, x, y))
}

/// Draw a circle outline using the midpoint algorithm.
///
/// # Arguments
///
/// * `sink` - Target surface
/// * `cx`, `cy` - Center coordinates
/// * `r` - Radius in pixels
/// * `color` - Stroke color
pub fn draw_circle<S: PixelSink + ?Sized>(sink: &mut S, cx: i32, cy: i32, r: i32, color: Rgba) {
    for p in circle_points(cx, cy, r) {
        sink.plot(p, color);
    }
}
