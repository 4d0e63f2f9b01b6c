//! # Pixel Normalization
//!
//! Turns the 8-bit grayscale output of the decode stage into a canonical
//! binary buffer where every pixel is exactly 0 or 255.
//!
//! Two policies exist:
//!
//! | Policy | Input | Rule |
//! |--------|-------|------|
//! | [`NormalizePolicy::Threshold`] | continuous grayscale | `v > t` → on |
//! | [`NormalizePolicy::PreDithered`] | already dithered to 2 levels | coerce to {0, 255} |
//!
//! The threshold comparison is strictly greater-than: a pixel equal to the
//! cut value maps to off. `PreDithered` trusts the external dithering stage
//! and only coerces stray values, using the same `> 128` cut the bit packer
//! uses so no third decision value exists anywhere in the pipeline.
//!
//! ## Multi-channel inputs
//!
//! A dithered image reloaded through a palette codec can come back with 2-4
//! channels per pixel. In a 2-level grayscale result all channels are equal,
//! so `PreDithered` takes channel 0 and drops the rest. `Threshold` requires
//! a single channel; anything else is a [`BitspriteError::Shape`].

use crate::error::BitspriteError;
use crate::raster::buffer::{BinaryBuffer, GrayBuffer, OFF, ON};

/// Cut value shared with the bit packer for coercing nearly-binary pixels.
const BINARY_CUT: u8 = 128;

/// How to map grayscale values onto {0, 255}.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NormalizePolicy {
    /// Fixed luminance cut: `v > t` is on, everything else off.
    Threshold(u8),
    /// Input was already dithered to two levels externally; only coerce.
    PreDithered,
}

/// Normalize a raw pixel buffer into a [`BinaryBuffer`].
///
/// `pixels` is row-major with one byte per pixel for `Threshold`, or
/// 1-4 bytes per pixel for `PreDithered` (extra channels are dropped).
///
/// ## Example
///
/// ```
/// use bitsprite::raster::{NormalizePolicy, normalize};
///
/// let bin = normalize(4, 1, vec![0, 128, 129, 255], NormalizePolicy::Threshold(128)).unwrap();
/// // 128 is not strictly greater than the cut, so it stays off
/// assert_eq!(bin.pixels(), &[0, 0, 255, 255]);
/// ```
pub fn normalize(
    width: u32,
    height: u32,
    pixels: Vec<u8>,
    policy: NormalizePolicy,
) -> Result<BinaryBuffer, BitspriteError> {
    let single = flatten_channels(width, height, pixels, policy)?;

    let mapped: Vec<u8> = match policy {
        NormalizePolicy::Threshold(t) => single
            .into_iter()
            .map(|v| if v > t { ON } else { OFF })
            .collect(),
        NormalizePolicy::PreDithered => single
            .into_iter()
            .map(|v| if v > BINARY_CUT { ON } else { OFF })
            .collect(),
    };

    let buffer = GrayBuffer::new(width, height, mapped)?;
    Ok(BinaryBuffer::from_raw(buffer))
}

/// Reduce a possibly multi-channel buffer to one byte per pixel.
fn flatten_channels(
    width: u32,
    height: u32,
    pixels: Vec<u8>,
    policy: NormalizePolicy,
) -> Result<Vec<u8>, BitspriteError> {
    let expected = width as usize * height as usize;
    if pixels.len() == expected {
        return Ok(pixels);
    }

    if policy == NormalizePolicy::PreDithered
        && expected > 0
        && pixels.len() % expected == 0
        && (2..=4).contains(&(pixels.len() / expected))
    {
        let channels = pixels.len() / expected;
        return Ok(pixels.into_iter().step_by(channels).collect());
    }

    Err(BitspriteError::Shape {
        width,
        height,
        expected,
        actual: pixels.len(),
    })
}

// ============================================================================
// TESTS
// ============================================================================
