//! A sink adapter that moves rasterized pixels through a transform.
//!
//! Shapes are rasterized in their own coordinates; each emitted pixel is
//! mapped through a [`Matrix4`] (z = 0) and rounded to the nearest integer
//! before reaching the wrapped sink. This is how a scene draws a flag
//! sheared about its pole or a spoke rotated about a hub:
//!
//! ```
//! use raster_core::prelude::*;
//!
//! let mut ctx = TransformContext::new();
//! ctx.translate(700.0, 300.0, 0.0);
//! ctx.rotate(90.0, 0.0, 0.0, 1.0);
//! ctx.translate(-700.0, -300.0, 0.0);
//!
//! let mut set = PointSet::new();
//! draw_line(&mut TransformedSink::from_context(&mut set, &ctx), 600, 300, 800, 300, Rgba::WHITE);
//! assert!(set.contains(Point2D::new(700, 200)));
//! assert!(set.contains(Point2D::new(700, 400)));
//! ```
//!
//! Pixels are transformed, not geometry: a rotation by a non-right angle or
//! a scale above one leaves gaps between the mapped pixels.

use super::sink::PixelSink;
use crate::color::Rgba;
use crate::geometry::Point2D;
use crate::transform::{Matrix4, TransformContext, Vec3};

/// Wraps a sink and maps every point through a fixed matrix.
#[derive(Debug)]
pub struct TransformedSink<'a, S: PixelSink + ?Sized> {
    inner: &'a mut S,
    matrix: Matrix4,
}

impl<'a, S: PixelSink + ?Sized> TransformedSink<'a, S> {
    /// Forward into `inner` through `matrix`.
    pub fn new(inner: &'a mut S, matrix: Matrix4) -> Self {
        Self { inner, matrix }
    }

    /// Forward into `inner` through the context's current transform.
    ///
    /// The matrix is copied, so later changes to `ctx` do not affect the sink.
    pub fn from_context(inner: &'a mut S, ctx: &TransformContext) -> Self {
        Self::new(inner, *ctx.current())
    }

    /// The matrix applied to each point.
    #[must_use]
    pub fn matrix(&self) -> &Matrix4 {
        &self.matrix
    }

    /// Where `p` lands after the transform.
    #[must_use]
    pub fn map(&self, p: Point2D) -> Point2D {
        let q = self
            .matrix
            .transform_point(Vec3::new(p.x as f32, p.y as f32, 0.0));
        Point2D::new(q.x.round() as i32, q.y.round() as i32)
    }
}

impl<S: PixelSink + ?Sized> PixelSink for TransformedSink<'_, S> {
    fn plot(&mut self, p: Point2D, color: Rgba) {
        let mapped = self.map(p);
        self.inner.plot(mapped, color);
    }
}
