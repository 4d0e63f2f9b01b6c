//! # Pixel Buffers
//!
//! Owned, row-major, 8-bit single-channel pixel buffers. Two types exist:
//!
//! - [`GrayBuffer`]: luminance values 0-255, as handed over by the decode
//!   stage. Construction validates that the pixel count matches the declared
//!   dimensions.
//! - [`BinaryBuffer`]: a buffer whose every value is exactly 0 or 255. Only
//!   the normalizer (and the sheet composer, which copies already-binary
//!   pixels) can construct one, so downstream stages can rely on the
//!   invariant through the type alone.
//!
//! Both are immutable after construction and move stage-to-stage by value.

use crate::error::BitspriteError;

/// Canonical "on" pixel value.
pub const ON: u8 = 255;

/// Canonical "off" pixel value.
pub const OFF: u8 = 0;

/// An 8-bit grayscale pixel buffer.
///
/// Row-major, one byte per pixel, `pixels.len() == width * height`.
///
/// ## Example
///
/// ```
/// use bitsprite::raster::GrayBuffer;
///
/// let buf = GrayBuffer::new(2, 2, vec![0, 64, 128, 255]).unwrap();
/// assert_eq!(buf.get(1, 1), 255);
///
/// // Length mismatch is a shape error
/// assert!(GrayBuffer::new(2, 2, vec![0, 64, 128]).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct GrayBuffer {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl GrayBuffer {
    /// Create a buffer, validating that `pixels.len() == width * height`.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, BitspriteError> {
        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(BitspriteError::Shape {
                width,
                height,
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Buffer width in pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Buffer height in pixels
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw row-major pixel data
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Pixel value at (x, y). Panics if out of bounds.
    pub fn get(&self, x: u32, y: u32) -> u8 {
        self.pixels[y as usize * self.width as usize + x as usize]
    }
}

/// A [`GrayBuffer`] whose every pixel is exactly 0 or 255.
///
/// This is the normalizer's exit contract: every stage past normalization
/// (packing, sheet composition, preview rendering) takes a `BinaryBuffer`
/// and never re-checks pixel values.
#[derive(Debug, Clone)]
pub struct BinaryBuffer(GrayBuffer);

impl BinaryBuffer {
    /// Wrap an already-binary buffer.
    ///
    /// Callers must guarantee every pixel is 0 or 255; this is checked only
    /// in debug builds. Crate-private so the invariant cannot be violated
    /// from outside.
    pub(crate) fn from_raw(buffer: GrayBuffer) -> Self {
        debug_assert!(
            buffer.pixels.iter().all(|&v| v == ON || v == OFF),
            "BinaryBuffer constructed from non-binary pixels"
        );
        Self(buffer)
    }

    /// Buffer width in pixels
    pub fn width(&self) -> u32 {
        self.0.width
    }

    /// Buffer height in pixels
    pub fn height(&self) -> u32 {
        self.0.height
    }

    /// Raw row-major pixel data (every value 0 or 255)
    pub fn pixels(&self) -> &[u8] {
        &self.0.pixels
    }

    /// Pixel value at (x, y). Panics if out of bounds.
    pub fn get(&self, x: u32, y: u32) -> u8 {
        self.0.get(x, y)
    }
}

// ============================================================================
// TESTS
// ============================================================================
