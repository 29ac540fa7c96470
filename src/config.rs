//! Configuration for canvases and transform contexts.
//!
//! Supports YAML configuration; every field has a default so partial files
//! are accepted.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Where logical y = 0 lands on the pixel surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Origin {
    /// y grows upward from the bottom row (orthographic scene convention).
    #[default]
    BottomLeft,
    /// y grows downward from the top row (image convention).
    TopLeft,
}

/// How a translucent color combines with the pixel already on the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlendMode {
    /// Overwrite the destination.
    Replace,
    /// `src * a + dst * (1 - a)`.
    #[default]
    SourceOver,
}

/// Logical canvas the 2D rasterizer draws into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanvasConfig {
    /// Width in pixels.
    #[serde(default = "default_width")]
    pub width: u32,

    /// Height in pixels.
    #[serde(default = "default_height")]
    pub height: u32,

    /// Vertical orientation of logical coordinates.
    #[serde(default)]
    pub origin: Origin,

    /// Compositing rule for translucent fills.
    #[serde(default)]
    pub blend: BlendMode,
}

fn default_width() -> u32 {
    900
}
fn default_height() -> u32 {
    700
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            origin: Origin::default(),
            blend: BlendMode::default(),
        }
    }
}

/// Limits for a [`TransformContext`](crate::transform::TransformContext).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransformConfig {
    /// Maximum number of saved transforms.
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
}

fn default_max_depth() -> usize {
    32
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self {
            max_depth: default_max_depth(),
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Configuration version.
    #[serde(default = "default_version")]
    pub version: u32,

    /// 2D canvas settings.
    #[serde(default)]
    pub canvas: CanvasConfig,

    /// Transform stack settings.
    #[serde(default)]
    pub transform: TransformConfig,
}

fn default_version() -> u32 {
    1
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: default_version(),
            canvas: CanvasConfig::default(),
            transform: TransformConfig::default(),
        }
    }
}

impl Config {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads and validates configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or validated.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "loading config");

        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parses and validates configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error with line number if parsing fails, or
    /// [`Error::InvalidConfig`]/[`Error::InvalidDimensions`] if validation fails.
    pub fn parse(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml_ng::from_str(yaml).map_err(|e| {
            let line = e.location().map_or(0, |l| l.line());
            Error::ConfigParse {
                line,
                message: e.to_string(),
            }
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration with fallback to defaults.
    #[must_use]
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(path).unwrap_or_else(|err| {
            tracing::debug!(%err, "falling back to default config");
            Self::default()
        })
    }

    /// Checks that the configuration describes a usable canvas and stack.
    ///
    /// # Errors
    ///
    /// Returns an error for a zero-sized canvas or a zero stack depth.
    pub fn validate(&self) -> Result<()> {
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(Error::InvalidDimensions {
                width: self.canvas.width,
                height: self.canvas.height,
            });
        }
        if self.transform.max_depth == 0 {
            return Err(Error::InvalidConfig(
                "transform.max_depth must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
