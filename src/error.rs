//! # Error Types
//!
//! This module defines error types used throughout the bitsprite library.

use thiserror::Error;

/// Main error type for bitsprite operations
#[derive(Debug, Error)]
pub enum BitspriteError {
    /// Invalid invocation (no inputs)
    #[error("Usage error: {0}")]
    Usage(String),

    /// An input image could not be decoded or processed
    #[error("Failed to process '{path}': {message}")]
    Decode { path: String, message: String },

    /// Pixel buffer length does not match its declared dimensions
    #[error("Shape error: expected {expected} pixels ({width}x{height}), got {actual}")]
    Shape {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },

    /// Sprite sheet composition was asked to compose zero sprites
    #[error("No sprites to compose")]
    NoInput,

    /// Serialization was handed a bitmap with no bytes
    #[error("Cannot serialize empty bitmap '{0}'")]
    EmptyBitmap(String),

    /// Image encoding/decoding error from the image crate
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
