//! Color type used by fills and strokes.
//!
//! Colors arrive from the caller as floating-point RGBA in `[0, 1]` and are
//! applied uniformly to every pixel a primitive covers. The rasterizer performs
//! no color-space conversion; the only transformation is 8-bit quantization
//! when a color is written into a [`Framebuffer`](crate::framebuffer::Framebuffer).

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// RGBA color with floating-point components.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rgba {
    /// Red component (0.0-1.0).
    pub r: f32,
    /// Green component (0.0-1.0).
    pub g: f32,
    /// Blue component (0.0-1.0).
    pub b: f32,
    /// Alpha component (0.0-1.0, 1.0 = fully opaque).
    pub a: f32,
}

impl Rgba {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);
    /// Opaque black.
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);
    /// Opaque white.
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);
    /// Opaque red.
    pub const RED: Self = Self::new(1.0, 0.0, 0.0, 1.0);
    /// Opaque green.
    pub const GREEN: Self = Self::new(0.0, 1.0, 0.0, 1.0);
    /// Opaque blue.
    pub const BLUE: Self = Self::new(0.0, 0.0, 1.0, 1.0);

    /// Create a new RGBA color without range checks.
    #[must_use]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque RGB color (alpha = 1.0).
    #[must_use]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Create a color, rejecting components outside `[0, 1]` or NaN.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidColor`] naming the first bad component.
    pub fn try_new(r: f32, g: f32, b: f32, a: f32) -> Result<Self> {
        for (name, value) in [("r", r), ("g", g), ("b", b), ("a", a)] {
            if !(0.0..=1.0).contains(&value) {
                return Err(Error::InvalidColor(format!(
                    "component {name} = {value} is outside [0, 1]"
                )));
            }
        }
        Ok(Self::new(r, g, b, a))
    }

    /// Create a color with modified alpha.
    #[must_use]
    pub const fn with_alpha(self, a: f32) -> Self {
        Self::new(self.r, self.g, self.b, a)
    }

    /// Whether the color fully covers what is underneath it.
    #[must_use]
    pub fn is_opaque(self) -> bool {
        self.a >= 1.0
    }

    /// Quantize to 8-bit channels, rounding to nearest.
    #[must_use]
    pub fn to_bytes(self) -> [u8; 4] {
        [
            quantize(self.r),
            quantize(self.g),
            quantize(self.b),
            quantize(self.a),
        ]
    }

    /// Expand 8-bit channels back into `[0, 1]`.
    #[must_use]
    pub fn from_bytes(bytes: [u8; 4]) -> Self {
        Self::new(
            f32::from(bytes[0]) / 255.0,
            f32::from(bytes[1]) / 255.0,
            f32::from(bytes[2]) / 255.0,
            f32::from(bytes[3]) / 255.0,
        )
    }

    /// Linear interpolation between two colors.
    #[must_use]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        let inv_t = 1.0 - t;

        Self::new(
            self.r * inv_t + other.r * t,
            self.g * inv_t + other.g * t,
            self.b * inv_t + other.b * t,
            self.a * inv_t + other.a * t,
        )
    }
}

#[inline]
fn quantize(channel: f32) -> u8 {
    (channel.clamp(0.0, 1.0) * 255.0).round() as u8
}
