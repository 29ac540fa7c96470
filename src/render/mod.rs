//! Software rasterization of 2D primitives.
//!
//! Every algorithm emits exact integer pixels into a [`PixelSink`] without
//! relying on any graphics API's own stroke or fill support.
//!
//! # Algorithms
//!
//! - **Bresenham's Line**: integer stepping, both endpoints included
//! - **Midpoint Circle**: one octant mirrored eight ways
//! - **Scanline Fill**: edge table plus active edge list, even-odd pairing
//!
//! [`TransformedSink`] maps emitted pixels through a [`Matrix4`](crate::transform::Matrix4)
//! so shapes can be rotated or sheared about a pivot.
//!
//! # References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
//! - Foley, J. D. et al. (1990). *Computer Graphics: Principles and Practice*, §3.6.

mod circle;
mod line;
mod primitives;
mod scanline;
mod sink;
mod transformed;

pub use circle::{circle_points, draw_circle, OctantSteps};
pub use line::{draw_line, line_points, BresenhamLine};
pub use primitives::{Circle, Drawable, LineSegment};
pub use scanline::{fill_polygon, ActiveEdgeList, Edge, EdgeTable, FillStats, ScanlineFill};
pub use sink::{PixelSink, PointSet};
pub use transformed::TransformedSink;
