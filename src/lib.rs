//! # Raster-Core
//!
//! Software rasterization of 2D primitives and the 3D transform math that
//! sits beside it, with no dependency on a graphics API's own drawing calls.
//!
//! ## Features
//!
//! - **Exact pixels**: Bresenham lines, midpoint circles and scanline polygon
//!   fill produce integer pixel sets into any [`PixelSink`](render::PixelSink)
//! - **Framebuffer**: RGBA target with configurable origin and alpha blending
//! - **Transforms**: column-major [`Matrix4`](transform::Matrix4), a bounded
//!   push/pop [`TransformContext`](transform::TransformContext) and `look_at`
//!
//! ## Quick Start
//!
//! ```rust
//! use raster_core::prelude::*;
//!
//! let mut fb = Framebuffer::new(16, 16)?;
//! let square = Polygon::from_coords(&[(2, 2), (8, 2), (8, 8), (2, 8)]);
//! fill_polygon(&mut fb, &square, Rgba::RED);
//! draw_line(&mut fb, 0, 0, 15, 15, Rgba::WHITE);
//! assert_eq!(fb.get_logical(Point2D::new(6, 3)), Some(Rgba::RED));
//! assert_eq!(fb.get_logical(Point2D::new(4, 4)), Some(Rgba::WHITE));
//! # Ok::<(), raster_core::Error>(())
//! ```
//!
//! ## References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
//! - Foley, J. D. et al. (1990). *Computer Graphics: Principles and Practice*.

#![warn(missing_docs)]
// Allow unwrap() in tests only
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in graphics code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Core Modules
// ============================================================================

/// Color types.
pub mod color;

/// Canvas and transform configuration.
pub mod config;

/// RGBA framebuffer target.
pub mod framebuffer;

/// Integer points, polygons and spans.
pub mod geometry;

// ============================================================================
// Rendering Modules
// ============================================================================

/// Line, circle and polygon rasterization.
pub mod render;

/// Vectors, matrices and the transform stack.
pub mod transform;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for raster-core operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and traits for convenient imports.
///
/// ```rust
/// use raster_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::color::Rgba;
    pub use crate::config::{BlendMode, Config, Origin};
    pub use crate::error::{Error, Result};
    pub use crate::framebuffer::Framebuffer;
    pub use crate::geometry::{Point2D, Polygon, Span, VertexRounding};
    pub use crate::render::{
        circle_points, draw_circle, draw_line, fill_polygon, line_points, Circle, Drawable,
        LineSegment, PixelSink, PointSet, ScanlineFill, TransformedSink,
    };
    pub use crate::transform::{look_at, Matrix4, OrbitCamera, TransformContext, Vec3};
}
