//! 3D transform math.
//!
//! - [`Vec3`]: vector value type
//! - [`Matrix4`]: column-major 4x4 matrix with rotation, translation and scale
//! - [`TransformContext`]: current transform plus a bounded push/pop stack
//! - [`look_at`], [`perspective`] and [`OrbitCamera`]: view and projection

mod camera;
mod context;
mod matrix;
mod vec3;

pub use camera::{aspect_ratio, look_at, perspective, OrbitCamera, DEFAULT_ORBIT_STEP};
pub use context::{TransformContext, TransformGuard, DEFAULT_MAX_DEPTH};
pub use matrix::Matrix4;
pub use vec3::{Vec3, NORMALIZE_EPSILON};
