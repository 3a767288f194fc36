//! Error types for the raster backend.

use thiserror::Error;

/// Result type for canvas and drawing operations.
pub type RasterResult<T> = Result<T, RasterError>;

/// Result type for PNG encoding operations.
pub type EncodeResult<T> = Result<T, EncodeError>;

/// Errors from canvas construction and drawing operations.
///
/// Drawing primitives never fail on coordinates; anything off-canvas is
/// silently clipped. These errors cover structural parameters only.
#[derive(Debug, Error)]
pub enum RasterError {
    /// Canvas dimensions that cannot form a valid pixel grid.
    #[error("invalid canvas dimensions: {width}x{height}")]
    InvalidDimension {
        /// Requested width in pixels.
        width: u32,
        /// Requested height in pixels.
        height: u32,
    },

    /// Invalid structural parameter (scale factor, aura radius).
    #[error("invalid argument '{name}': {message}")]
    InvalidArgument {
        /// Parameter name.
        name: String,
        /// Error message.
        message: String,
    },
}

impl RasterError {
    /// Creates an invalid argument error.
    pub fn invalid_argument(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name: name.into(),
            message: message.into(),
        }
    }
}

/// Errors from PNG serialization.
///
/// Validation happens before any byte reaches the sink, so a failed encode
/// never leaves a partial file behind.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Canvas dimensions exceed what the PNG container can declare.
    #[error("canvas dimensions {width}x{height} exceed the PNG limit of {max} per side")]
    TooLarge {
        /// Canvas width in pixels.
        width: u32,
        /// Canvas height in pixels.
        height: u32,
        /// Largest representable dimension.
        max: u32,
    },

    /// A chunk payload exceeds the 2^31 - 1 byte chunk-length limit.
    #[error("chunk payload of {len} bytes exceeds the PNG chunk-length limit")]
    ChunkTooLarge {
        /// Payload length in bytes.
        len: usize,
    },

    /// I/O error while writing to the sink.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
