//! # Sprite Sheet Composition
//!
//! Concatenates independently sized sprites into one horizontal canvas:
//!
//! ```text
//! x=0       x=5    x=8
//! ┌─────────┬──────┬────────────┐
//! │ sprite0 │ spr1 │  sprite2   │  height = max(heights)
//! │  (5w)   │ (3w) ├────────────┤
//! ├─────────┤      │ (off rows) │
//! │ (off)   │      │            │
//! └─────────┴──────┴────────────┘
//! ```
//!
//! Sprites are placed at cumulative x-offsets in input order and top-aligned;
//! rows below a short sprite stay off. Each placement is recorded so callers
//! can report frame coordinates for downstream animation code.

use crate::error::BitspriteError;
use crate::raster::buffer::{BinaryBuffer, GrayBuffer, OFF};

/// One named input image, normalized and ready to compose.
#[derive(Debug, Clone)]
pub struct Sprite {
    /// Human-readable name (input file stem)
    pub name: String,
    /// Normalized pixels
    pub buffer: BinaryBuffer,
}

/// Where a sprite landed on the sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    /// Sprite name, in input order
    pub name: String,
    /// Left edge on the sheet; cumulative sum of preceding widths
    pub x_offset: u32,
    /// Sprite width in pixels
    pub width: u32,
}

/// A composed horizontal sprite sheet.
#[derive(Debug, Clone)]
pub struct SpriteSheet {
    /// The composed canvas; width = sum of sprite widths, height = max
    pub buffer: BinaryBuffer,
    /// Per-sprite placement records, in input order
    pub placements: Vec<Placement>,
}

/// Compose sprites into a single sheet.
///
/// The sprite order is load-bearing: offsets are cumulative widths, so the
/// caller must pass sprites in original input order. An empty slice is a
/// caller bug and returns [`BitspriteError::NoInput`] rather than a
/// degenerate zero-size canvas.
pub fn compose(sprites: &[Sprite]) -> Result<SpriteSheet, BitspriteError> {
    if sprites.is_empty() {
        return Err(BitspriteError::NoInput);
    }

    let sheet_width: u32 = sprites.iter().map(|s| s.buffer.width()).sum();
    let sheet_height: u32 = sprites
        .iter()
        .map(|s| s.buffer.height())
        .max()
        .unwrap_or(0);

    let mut canvas = vec![OFF; sheet_width as usize * sheet_height as usize];
    let mut placements = Vec::with_capacity(sprites.len());

    let mut current_x: u32 = 0;
    for sprite in sprites {
        let width = sprite.buffer.width();
        for y in 0..sprite.buffer.height() {
            let src_row = y as usize * width as usize;
            let dst_row = y as usize * sheet_width as usize + current_x as usize;
            canvas[dst_row..dst_row + width as usize]
                .copy_from_slice(&sprite.buffer.pixels()[src_row..src_row + width as usize]);
        }
        placements.push(Placement {
            name: sprite.name.clone(),
            x_offset: current_x,
            width,
        });
        current_x += width;
    }

    // Canvas holds only copied binary pixels and off-fill, so the binary
    // invariant carries over.
    let buffer = BinaryBuffer::from_raw(GrayBuffer::new(sheet_width, sheet_height, canvas)?);

    Ok(SpriteSheet { buffer, placements })
}

// ============================================================================
// TESTS
// ============================================================================
