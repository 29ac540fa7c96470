//! RGBA pixel surface the rasterizer draws into.
//!
//! Rows are padded to a 64-byte stride so each row starts on a cache-line
//! boundary. The framebuffer stores raw rows (row 0 at the top); logical
//! canvas coordinates are mapped through its [`Origin`] when it is used as a
//! [`PixelSink`].

use crate::color::Rgba;
use crate::config::{BlendMode, CanvasConfig, Origin};
use crate::error::{Error, Result};
use crate::geometry::Point2D;
use crate::render::PixelSink;

/// Row alignment in bytes.
const ROW_ALIGNMENT: usize = 64;

/// RGBA8 framebuffer with logical-coordinate mapping.
#[derive(Debug, Clone)]
pub struct Framebuffer {
    /// Width in pixels.
    width: u32,
    /// Height in pixels.
    height: u32,
    /// RGBA pixels in row-major order, 4 bytes per pixel.
    pixels: Vec<u8>,
    /// Stride in bytes (may include padding for alignment).
    stride: usize,
    origin: Origin,
    blend: BlendMode,
}

impl Framebuffer {
    /// Create a new framebuffer with bottom-left origin and source-over blending.
    ///
    /// # Errors
    ///
    /// Returns an error if width or height is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use raster_core::framebuffer::Framebuffer;
    ///
    /// let fb = Framebuffer::new(900, 700).unwrap();
    /// assert_eq!(fb.width(), 900);
    /// assert_eq!(fb.height(), 700);
    /// ```
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }

        let row_bytes = (width as usize) * 4;
        let stride = (row_bytes + ROW_ALIGNMENT - 1) & !(ROW_ALIGNMENT - 1);

        Ok(Self {
            width,
            height,
            pixels: vec![0; stride * (height as usize)],
            stride,
            origin: Origin::default(),
            blend: BlendMode::default(),
        })
    }

    /// Create a framebuffer sized and configured from a canvas config.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured width or height is zero.
    pub fn from_config(config: &CanvasConfig) -> Result<Self> {
        Ok(Self::new(config.width, config.height)?
            .with_origin(config.origin)
            .with_blend(config.blend))
    }

    /// Set the vertical orientation used for logical coordinates.
    #[must_use]
    pub fn with_origin(mut self, origin: Origin) -> Self {
        self.origin = origin;
        self
    }

    /// Set the compositing rule for translucent colors.
    #[must_use]
    pub fn with_blend(mut self, blend: BlendMode) -> Self {
        self.blend = blend;
        self
    }

    /// Get the width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Get the height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Get the stride (row width in bytes, including any padding).
    #[must_use]
    pub const fn stride(&self) -> usize {
        self.stride
    }

    /// Get the origin used for logical coordinates.
    #[must_use]
    pub const fn origin(&self) -> Origin {
        self.origin
    }

    /// Get the blend mode used for translucent colors.
    #[must_use]
    pub const fn blend(&self) -> BlendMode {
        self.blend
    }

    /// Get the raw pixel data as a slice.
    #[must_use]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Get a row of pixels as a slice.
    #[must_use]
    pub fn row(&self, y: u32) -> Option<&[u8]> {
        if y >= self.height {
            return None;
        }
        let start = (y as usize) * self.stride;
        let end = start + (self.width as usize) * 4;
        Some(&self.pixels[start..end])
    }

    /// Clear the framebuffer to a solid color.
    pub fn clear(&mut self, color: Rgba) {
        let bytes = color.to_bytes();
        let row_bytes = (self.width as usize) * 4;

        for y in 0..self.height as usize {
            let row_start = y * self.stride;
            for chunk in self.pixels[row_start..row_start + row_bytes].chunks_exact_mut(4) {
                chunk.copy_from_slice(&bytes);
            }
        }
    }

    /// Get the color at a raw pixel coordinate.
    ///
    /// Returns `None` if the coordinates are out of bounds.
    #[must_use]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        self.get_bytes(x, y).map(Rgba::from_bytes)
    }

    /// Get the stored bytes at a raw pixel coordinate.
    #[must_use]
    pub fn get_bytes(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }

        let idx = self.pixel_index(x, y);
        Some([
            self.pixels[idx],
            self.pixels[idx + 1],
            self.pixels[idx + 2],
            self.pixels[idx + 3],
        ])
    }

    /// Get the color at a logical canvas coordinate.
    #[must_use]
    pub fn get_logical(&self, p: Point2D) -> Option<Rgba> {
        let (x, y) = self.to_raw(p)?;
        self.get_pixel(x, y)
    }

    /// Set the color at a raw pixel coordinate, ignoring alpha.
    ///
    /// Does nothing if the coordinates are out of bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Rgba) {
        if x >= self.width || y >= self.height {
            return;
        }

        let idx = self.pixel_index(x, y);
        self.pixels[idx..idx + 4].copy_from_slice(&color.to_bytes());
    }

    /// Blend a color at a raw pixel coordinate.
    ///
    /// Color channels use `src * a + dst * (1 - a)`; the stored alpha
    /// accumulates as `a + dst_a * (1 - a)`.
    pub fn blend_pixel(&mut self, x: u32, y: u32, color: Rgba) {
        if x >= self.width || y >= self.height {
            return;
        }

        let idx = self.pixel_index(x, y);
        let src_a = color.a.clamp(0.0, 1.0);
        let inv_a = 1.0 - src_a;
        let dst = Rgba::from_bytes([
            self.pixels[idx],
            self.pixels[idx + 1],
            self.pixels[idx + 2],
            self.pixels[idx + 3],
        ]);

        let out = Rgba::new(
            color.r * src_a + dst.r * inv_a,
            color.g * src_a + dst.g * inv_a,
            color.b * src_a + dst.b * inv_a,
            src_a + dst.a * inv_a,
        );
        self.pixels[idx..idx + 4].copy_from_slice(&out.to_bytes());
    }

    /// Fill columns `x_start..=x_end` of a raw row with a solid color.
    ///
    /// Columns are clamped to the framebuffer; rows outside it are ignored.
    pub fn fill_row_span(&mut self, y: u32, x_start: i32, x_end: i32, color: Rgba) {
        if y >= self.height || x_end < 0 || x_start >= self.width as i32 || x_start > x_end {
            return;
        }

        let x1 = x_start.max(0) as usize;
        let x2 = (x_end.min(self.width as i32 - 1)) as usize;
        let bytes = color.to_bytes();
        let row_start = (y as usize) * self.stride;
        let row = &mut self.pixels[row_start + x1 * 4..row_start + (x2 + 1) * 4];

        for chunk in row.chunks_exact_mut(4) {
            chunk.copy_from_slice(&bytes);
        }
    }

    /// Count pixels whose stored bytes match `color` after quantization.
    #[must_use]
    pub fn count_pixels(&self, color: Rgba) -> usize {
        let target = color.to_bytes();
        (0..self.height)
            .filter_map(|y| self.row(y))
            .flat_map(|row| row.chunks_exact(4))
            .filter(|chunk| *chunk == target)
            .count()
    }

    /// Map a logical coordinate to a raw `(column, row)`, or `None` if clipped.
    #[must_use]
    pub fn to_raw(&self, p: Point2D) -> Option<(u32, u32)> {
        if p.x < 0 || p.y < 0 || p.x >= self.width as i32 || p.y >= self.height as i32 {
            return None;
        }
        let row = match self.origin {
            Origin::TopLeft => p.y as u32,
            Origin::BottomLeft => self.height - 1 - p.y as u32,
        };
        Some((p.x as u32, row))
    }

    /// Calculate the byte index for a pixel coordinate.
    #[inline]
    fn pixel_index(&self, x: u32, y: u32) -> usize {
        (y as usize) * self.stride + (x as usize) * 4
    }

    fn writes_directly(&self, color: Rgba) -> bool {
        self.blend == BlendMode::Replace || color.is_opaque()
    }
}

impl PixelSink for Framebuffer {
    fn plot(&mut self, p: Point2D, color: Rgba) {
        let Some((x, y)) = self.to_raw(p) else {
            return;
        };
        if self.writes_directly(color) {
            self.set_pixel(x, y, color);
        } else {
            self.blend_pixel(x, y, color);
        }
    }

    fn plot_span(&mut self, y: i32, x_start: i32, x_end: i32, color: Rgba) {
        // Column 0 is in bounds whenever the row is, so it resolves the raw row.
        let Some((_, row)) = self.to_raw(Point2D::new(0, y)) else {
            return;
        };
        if self.writes_directly(color) {
            self.fill_row_span(row, x_start, x_end, color);
            return;
        }
        let lo = x_start.max(0);
        let hi = x_end.min(self.width as i32 - 1);
        for x in lo..=hi {
            self.blend_pixel(x as u32, row, color);
        }
    }
}
