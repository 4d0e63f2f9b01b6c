//! # Bit Packing
//!
//! Packs a binary pixel buffer into the 1-bit-per-pixel layout consumed by
//! common embedded graphics libraries (Adafruit GFX `drawBitmap`, SSD1306
//! and friends): row-major, byte-aligned, most-significant-bit-first.
//!
//! ## Layout
//!
//! Each row occupies a whole number of bytes. Within a byte, the leftmost
//! pixel is the highest-order bit:
//!
//! ```text
//! Byte value 0xF0 = 11110000 = ████░░░░
//! Byte value 0x0F = 00001111 = ░░░░████
//! Byte value 0xAA = 10101010 = █░█░█░█░
//! ```
//!
//! When the width is not a multiple of 8, the trailing bits of each row's
//! last byte are left 0 (off). That padding policy is part of the format:
//! consumers address rows as `byte_width` strides and ignore the pad bits.
//!
//! ## Bit addressing
//!
//! ```text
//! byte_width = ceil(width / 8)
//! byte index = y * byte_width + x / 8
//! bit mask   = 0x80 >> (x % 8)
//! ```

use crate::raster::buffer::BinaryBuffer;

/// Cut value for the on/off decision during packing.
///
/// On a canonical 0/255 buffer `v > 128` is equivalent to `v == 255`; the
/// comparison form is kept so packing agrees bit-for-bit with the
/// normalizer's coercion rule.
const ON_CUT: u8 = 128;

/// A packed 1-bit bitmap.
///
/// `bytes.len() == byte_width * height`, always. Constructed on demand from
/// a [`BinaryBuffer`] and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackedBitmap {
    byte_width: u32,
    height: u32,
    bytes: Vec<u8>,
}

impl PackedBitmap {
    /// Row stride in bytes (`ceil(width / 8)`)
    pub fn byte_width(&self) -> u32 {
        self.byte_width
    }

    /// Bitmap height in rows
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Packed bytes, row-major
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Read back the bit for pixel (x, y).
    ///
    /// Mainly useful for verifying round-trips; `x` may address pad bits,
    /// which always read as `false`.
    pub fn bit(&self, x: u32, y: u32) -> bool {
        let byte = self.bytes[y as usize * self.byte_width as usize + x as usize / 8];
        byte & (0x80 >> (x % 8)) != 0
    }
}

/// Pack a binary buffer into a [`PackedBitmap`].
///
/// Pure function of its input: no error conditions.
///
/// ## Example
///
/// ```
/// use bitsprite::raster::{NormalizePolicy, normalize, pack};
///
/// // 8 pixels: first four on, last four off
/// let bin = normalize(8, 1, vec![255, 255, 255, 255, 0, 0, 0, 0],
///                     NormalizePolicy::PreDithered).unwrap();
/// let packed = pack(&bin);
/// assert_eq!(packed.bytes(), &[0xF0]);
/// ```
pub fn pack(buffer: &BinaryBuffer) -> PackedBitmap {
    let width = buffer.width();
    let height = buffer.height();
    let byte_width = width.div_ceil(8);
    let mut bytes = vec![0u8; byte_width as usize * height as usize];

    for y in 0..height {
        let row = y as usize * byte_width as usize;
        for x in 0..width {
            if buffer.get(x, y) > ON_CUT {
                bytes[row + x as usize / 8] |= 0x80 >> (x % 8);
            }
        }
    }

    PackedBitmap {
        byte_width,
        height,
        bytes,
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::buffer::{OFF, ON};
    use crate::raster::normalize::{NormalizePolicy, normalize};
    use pretty_assertions::assert_eq;

    fn binary(width: u32, height: u32, pixels: Vec<u8>) -> BinaryBuffer {
        normalize(width, height, pixels, NormalizePolicy::PreDithered).unwrap()
    }

    #[test]
    fn test_byte_width_rounding() {
        // width 8 packs into exactly 1 byte per row
        let packed = pack(&binary(8, 1, vec![ON; 8]));
        assert_eq!(packed.byte_width(), 1);
        assert_eq!(packed.bytes(), &[0xFF]);

        // width 10 needs 2 bytes, bits 10-15 padded off
        let packed = pack(&binary(10, 1, vec![ON; 10]));
        assert_eq!(packed.byte_width(), 2);
        assert_eq!(packed.bytes(), &[0xFF, 0xC0]);
    }

    #[test]
    fn test_msb_first() {
        // Leftmost pixel lands in bit 7
        let mut pixels = vec![OFF; 8];
        pixels[0] = ON;
        let packed = pack(&binary(8, 1, pixels));
        assert_eq!(packed.bytes(), &[0x80]);

        // Rightmost pixel lands in bit 0
        let mut pixels = vec![OFF; 8];
        pixels[7] = ON;
        let packed = pack(&binary(8, 1, pixels));
        assert_eq!(packed.bytes(), &[0x01]);
    }

    #[test]
    fn test_checkerboard() {
        let pixels = vec![
            ON, OFF, ON, OFF, ON, OFF, ON, OFF, //
            OFF, ON, OFF, ON, OFF, ON, OFF, ON,
        ];
        let packed = pack(&binary(8, 2, pixels));
        assert_eq!(packed.bytes(), &[0xAA, 0x55]);
    }

    #[test]
    fn test_row_stride() {
        // 10x3 all-on: each row is a fresh 2-byte stride
        let packed = pack(&binary(10, 3, vec![ON; 30]));
        assert_eq!(packed.bytes().len(), 6);
        assert_eq!(packed.bytes(), &[0xFF, 0xC0, 0xFF, 0xC0, 0xFF, 0xC0]);
    }

    #[test]
    fn test_round_trip() {
        // Pseudo-random on/off pattern survives pack + bit read-back
        let width = 13u32;
        let height = 7u32;
        let pixels: Vec<u8> = (0..width * height)
            .map(|i| if (i * 7 + 3) % 5 < 2 { ON } else { OFF })
            .collect();
        let bin = binary(width, height, pixels);
        let packed = pack(&bin);

        for y in 0..height {
            for x in 0..width {
                assert_eq!(
                    packed.bit(x, y),
                    bin.get(x, y) == ON,
                    "mismatch at ({x},{y})"
                );
            }
        }
    }

    #[test]
    fn test_padding_bits_stay_off() {
        // 13 wide all-on: bits 13-15 of each row's last byte must be 0
        let packed = pack(&binary(13, 2, vec![ON; 26]));
        for y in 0..2 {
            for x in 13..16 {
                assert!(!packed.bit(x, y), "pad bit ({x},{y}) should be off");
            }
        }
    }

    #[test]
    fn test_all_off() {
        let packed = pack(&binary(16, 2, vec![OFF; 32]));
        assert!(packed.bytes().iter().all(|&b| b == 0x00));
    }
}
