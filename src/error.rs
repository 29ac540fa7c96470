//! Error types for raster-core operations.

use std::fmt;
use std::io;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Transform stack operation that can leave the stack in an invalid state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackOp {
    /// Saving the current transform.
    Push,
    /// Restoring the previously saved transform.
    Pop,
}

impl fmt::Display for StackOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Push => f.write_str("push"),
            Self::Pop => f.write_str("pop"),
        }
    }
}

/// Errors that can occur in raster-core operations.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error (config file reads).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Configuration could not be parsed.
    #[error("Config parse error at line {line}: {message}")]
    ConfigParse {
        /// 1-based line of the offending YAML.
        line: usize,
        /// Parser message.
        message: String,
    },

    /// Configuration parsed but holds unusable values.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// Invalid dimensions for a framebuffer or canvas.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },

    /// Color component outside [0, 1] or not a number.
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    /// Unbalanced push/pop on a transform stack.
    #[error("Invalid transform stack state: cannot {operation} at depth {depth}")]
    InvalidStackState {
        /// Operation that was rejected.
        operation: StackOp,
        /// Stack depth when the operation was attempted.
        depth: usize,
    },
}
