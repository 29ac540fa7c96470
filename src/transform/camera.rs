//! View and projection matrices.

use super::matrix::Matrix4;
use super::vec3::Vec3;

/// Right-handed view transform looking from `eye` toward `center`.
///
/// With `f = normalize(center - eye)`, `s = normalize(f × up)` and
/// `u = s × f`, the rotation rows are `s`, `u` and `-f`, followed by a
/// translation by `-eye`. The eye lands on the origin and the view
/// direction on `-Z`.
///
/// An `up` parallel to the view direction, or `eye == center`, collapses `s`
/// to zero and yields a singular matrix; no correction is attempted.
#[must_use]
pub fn look_at(eye: Vec3, center: Vec3, up: Vec3) -> Matrix4 {
    let f = (center - eye).normalize();
    let s = f.cross(up).normalize();
    let u = s.cross(f);

    let view = Matrix4::from_cols_array([
        s.x, u.x, -f.x, 0.0, //
        s.y, u.y, -f.y, 0.0, //
        s.z, u.z, -f.z, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    ]);
    view * Matrix4::translation(-eye.x, -eye.y, -eye.z)
}

/// Symmetric perspective projection with a vertical field of view in degrees.
#[must_use]
pub fn perspective(fovy_degrees: f32, aspect: f32, near: f32, far: f32) -> Matrix4 {
    let f = 1.0 / (fovy_degrees.to_radians() * 0.5).tan();
    let depth = near - far;

    let mut m = [0.0; 16];
    m[0] = f / aspect;
    m[5] = f;
    m[10] = (far + near) / depth;
    m[11] = -1.0;
    m[14] = 2.0 * far * near / depth;
    Matrix4::from_cols_array(m)
}

/// Width over height, treating a zero height as one.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn aspect_ratio(width: u32, height: u32) -> f32 {
    width as f32 / height.max(1) as f32
}

/// Default per-frame angle increment for [`OrbitCamera::tick`], in degrees.
pub const DEFAULT_ORBIT_STEP: f32 = 0.04;

/// Camera circling a target on a horizontal ring with a gentle vertical bob.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitCamera {
    /// Position on the ring in degrees, kept in `[0, 360)`.
    pub angle: f32,
    /// Ring radius.
    pub radius: f32,
    /// Height around which the eye bobs.
    pub base_height: f32,
    /// Bob amplitude.
    pub bob: f32,
    /// Point the camera looks at.
    pub target: Vec3,
    /// Up direction.
    pub up: Vec3,
    /// Increment applied by [`tick`](Self::tick).
    pub step: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            angle: 20.0,
            radius: 65.0,
            base_height: 18.0,
            bob: 1.5,
            target: Vec3::new(0.0, 2.5, 0.0),
            up: Vec3::Y,
            step: DEFAULT_ORBIT_STEP,
        }
    }
}

impl OrbitCamera {
    /// Camera at the default ring position.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current eye height.
    ///
    /// The bob phase is `angle * 0.5` taken as radians, so the camera bobs
    /// many times per orbit.
    #[must_use]
    pub fn height(&self) -> f32 {
        self.base_height + (self.angle * 0.5).sin() * self.bob
    }

    /// Current eye position.
    #[must_use]
    pub fn eye(&self) -> Vec3 {
        let rad = self.angle.to_radians();
        Vec3::new(self.radius * rad.cos(), self.height(), self.radius * rad.sin())
    }

    /// View matrix for the current position.
    #[must_use]
    pub fn view(&self) -> Matrix4 {
        look_at(self.eye(), self.target, self.up)
    }

    /// Move along the ring by `delta_degrees`, wrapping into `[0, 360)`.
    pub fn advance(&mut self, delta_degrees: f32) {
        self.angle = (self.angle + delta_degrees).rem_euclid(360.0);
    }

    /// Advance by [`step`](Self::step).
    pub fn tick(&mut self) {
        self.advance(self.step);
    }
}
