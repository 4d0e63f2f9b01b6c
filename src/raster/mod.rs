//! # Raster Module
//!
//! The core pixel-to-bitmap transform pipeline:
//!
//! - [`buffer`]: owned grayscale and binary pixel buffers
//! - [`normalize`]: grayscale → canonical 0/255 binarization
//! - [`pack`]: binary pixels → 1-bit row-major MSB-first bitmap
//! - [`sheet`]: horizontal sprite sheet composition
//!
//! Every stage here is a pure, synchronous transform over in-memory buffers;
//! decoding, resizing and dithering live in [`crate::pipeline`].

pub mod buffer;
pub mod normalize;
pub mod pack;
pub mod sheet;

pub use buffer::{BinaryBuffer, GrayBuffer, OFF, ON};
pub use normalize::{NormalizePolicy, normalize};
pub use pack::{PackedBitmap, pack};
pub use sheet::{Placement, Sprite, SpriteSheet, compose};
