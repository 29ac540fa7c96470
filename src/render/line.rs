//! Bresenham line rasterization.
//!
//! Integer-only stepping along the 8-connected path between two pixels,
//! both endpoints included.
//!
//! # References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."

use super::sink::PixelSink;
use crate::color::Rgba;
use crate::geometry::Point2D;

/// Iterator over the pixels of a Bresenham line.
///
/// The error term starts at `dx - dy`. Each step doubles it and may move x
/// (when `e2 > -dy`), y (when `e2 < dx`), or both in the same iteration,
/// which is how diagonal moves happen. Deltas and the error term are kept
/// in `i64` so endpoints anywhere in the `i32` range step without overflow.
#[derive(Debug, Clone)]
pub struct BresenhamLine {
    x: i32,
    y: i32,
    x1: i32,
    y1: i32,
    dx: i64,
    dy: i64,
    sx: i32,
    sy: i32,
    err: i64,
    done: bool,
}

impl BresenhamLine {
    /// Start a line from `(x0, y0)` to `(x1, y1)`.
    #[must_use]
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        let dx = (i64::from(x1) - i64::from(x0)).abs();
        let dy = (i64::from(y1) - i64::from(y0)).abs();
        Self {
            x: x0,
            y: y0,
            x1,
            y1,
            dx,
            dy,
            sx: if x0 < x1 { 1 } else { -1 },
            sy: if y0 < y1 { 1 } else { -1 },
            err: dx - dy,
            done: false,
        }
    }
}

impl Iterator for BresenhamLine {
    type Item = Point2D;

    fn next(&mut self) -> Option<Point2D> {
        if self.done {
            return None;
        }

        let current = Point2D::new(self.x, self.y);
        if self.x == self.x1 && self.y == self.y1 {
            self.done = true;
            return Some(current);
        }

        let e2 = 2 * self.err;
        if e2 > -self.dy {
            self.err -= self.dy;
            self.x += self.sx;
        }
        if e2 < self.dx {
            self.err += self.dx;
            self.y += self.sy;
        }

        Some(current)
    }
}

impl std::iter::FusedIterator for BresenhamLine {}

/// Pixels of the line from `(x0, y0)` to `(x1, y1)`, start to end.
#[must_use]
pub fn line_points(x0: i32, y0: i32, x1: i32, y1: i32) -> BresenhamLine {
    BresenhamLine::new(x0, y0, x1, y1)
}

/// Draw a line using Bresenham's algorithm.
///
/// # Arguments
///
/// * `sink` - Target surface
/// * `x0`, `y0` - Start coordinates
/// * `x1`, `y1` - End coordinates
/// * `color` - Line color
pub fn draw_line<S: PixelSink + ?Sized>(
    sink: &mut S,
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
    color: Rgba,
) {
    for p in BresenhamLine::new(x0, y0, x1, y1) {
        sink.plot(p, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(x0: i32, y0: i32, x1: i32, y1: i32) -> Vec<(i32, i32)> {
        line_points(x0, y0, x1, y1).map(|p| (p.x, p.y)).collect()
    }

    #[test]
    fn test_single_point() {
        assert_eq!(collect(3, 7, 3, 7), vec![(3, 7)]);
    }

    #[test]
    fn test_horizontal() {
        assert_eq!(collect(0, 0, 4, 0), vec![(0, 0), (1, 0), (2, 0), (3, 0), (4, 0)]);
    }

    #[test]
    fn test_vertical_reversed() {
        assert_eq!(collect(2, 3, 2, 0), vec![(2, 3), (2, 2), (2, 1), (2, 0)]);
    }

    #[test]
    fn test_diagonal_moves_both_axes() {
        assert_eq!(collect(0, 0, 3, 3), vec![(0, 0), (1, 1), (2, 2), (3, 3)]);
        assert_eq!(collect(0, 0, -2, 2), vec![(0, 0), (-1, 1), (-2, 2)]);
    }

    #[test]
    fn test_shallow_slope() {
        assert_eq!(
            collect(0, 0, 6, 2),
            vec![(0, 0), (1, 0), (2, 1), (3, 1), (4, 1), (5, 2), (6, 2)]
        );
    }

    #[test]
    fn test_steep_slope_hits_endpoint() {
        let pts = collect(10, 5, 7, 15);
        assert_eq!(pts.first(), Some(&(10, 5)));
        assert_eq!(pts.last(), Some(&(7, 15)));
        assert_eq!(pts.len(), 11);
    }

    #[test]
    fn test_far_off_canvas_endpoints() {
        let pts: Vec<_> = line_points(0, 0, 1_100_000_000, 0).take(3).collect();
        assert_eq!(pts, vec![Point2D::new(0, 0), Point2D::new(1, 0), Point2D::new(2, 0)]);

        let mut extreme = line_points(i32::MIN, i32::MAX, i32::MAX, i32::MIN);
        assert_eq!(extreme.next(), Some(Point2D::new(i32::MIN, i32::MAX)));
        assert_eq!(extreme.next(), Some(Point2D::new(i32::MIN + 1, i32::MAX - 1)));

        let mut steep = line_points(-2_000_000_000, -2_000_000_000, 5, 2_000_000_000);
        assert_eq!(steep.nth(1), Some(Point2D::new(-1_999_999_999, -1_999_999_999)));
        assert_eq!(steep.next(), Some(Point2D::new(-1_999_999_999, -1_999_999_998)));
    }

    #[test]
    fn test_iterator_is_fused() {
        let mut line = line_points(0, 0, 1, 0);
        assert!(line.next().is_some());
        assert!(line.next().is_some());
        assert!(line.next().is_none());
        assert!(line.next().is_none());
    }

    #[test]
    fn test_draw_line_into_sink() {
        let mut log: Vec<Point2D> = Vec::new();
        draw_line(&mut log, 0, 0, 4, 0, Rgba::BLACK);
        assert_eq!(log.len(), 5);
        assert_eq!(log[4], Point2D::new(4, 0));
    }
}
