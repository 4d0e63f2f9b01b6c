//! # Preview Rendering
//!
//! Writes a normalized binary buffer back out as a lossless two-tone PNG so
//! the result can be eyeballed before the header is wired into firmware.
//! The preview is pixel-exact: what you see is the bit pattern the packer
//! emits.

use std::path::Path;

use image::GrayImage;

use crate::error::BitspriteError;
use crate::raster::BinaryBuffer;

/// Convert a binary buffer to an 8-bit grayscale image (values 0 and 255).
pub fn to_gray_image(buffer: &BinaryBuffer) -> GrayImage {
    // from_raw only fails on a length mismatch, which the buffer type
    // already guarantees against.
    GrayImage::from_raw(buffer.width(), buffer.height(), buffer.pixels().to_vec())
        .unwrap_or_else(|| GrayImage::new(buffer.width(), buffer.height()))
}

/// Save a binary buffer as a PNG preview at `path`.
pub fn save_preview(path: &Path, buffer: &BinaryBuffer) -> Result<(), BitspriteError> {
    to_gray_image(buffer).save(path)?;
    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================
