//! Error types for raster tiling and the surrounding helpers

use thiserror::Error;

use crate::models::Rect;

/// Main error type for rust_tiler operations
#[derive(Error, Debug)]
pub enum Error {
    /// Caller-supplied arguments cannot be honoured
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A computed region falls outside the raster it addresses
    #[error("Region {rect} out of bounds for raster of size {width}x{height}")]
    RegionOutOfBounds {
        /// The offending region
        rect: Rect,
        /// Raster width
        width: usize,
        /// Raster height
        height: usize,
    },

    /// Pixel buffer length does not match the declared shape
    #[error("Buffer size mismatch: expected {expected} elements, got {actual}")]
    BufferSize {
        /// `width * height * channels`
        expected: usize,
        /// Length actually supplied
        actual: usize,
    },

    /// Channel count has no image-format counterpart
    #[error("Unsupported channel count: {0}")]
    UnsupportedChannels(usize),

    /// Image colour type has no raster counterpart
    #[error("Unsupported color type: {0}")]
    UnsupportedColor(String),

    /// Text could not be parsed as a rectangle
    #[error("Invalid rect '{input}': {reason}")]
    RectParse {
        /// Original text
        input: String,
        /// What went wrong
        reason: String,
    },

    /// Image decode/encode failure
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// I/O failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Subscriber installation failed
    #[error("Logging setup failed: {0}")]
    Logging(String),
}

/// Result type alias for rust_tiler operations
pub type Result<T> = std::result::Result<T, Error>;
