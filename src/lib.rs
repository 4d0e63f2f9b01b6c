//! # Bitsprite - 1-bit Bitmap Asset Converter
//!
//! Bitsprite converts raster images into monochrome bitmap assets for
//! memory-constrained display hardware (SSD1306 OLEDs, small LCDs, anything
//! drawn through Adafruit GFX-style `drawBitmap`). It provides:
//!
//! - **Normalization**: threshold or pre-dithered binarization to canonical
//!   0/255 pixels
//! - **Bit packing**: row-major, byte-aligned, MSB-first 1-bit bitmaps
//! - **Sprite sheets**: horizontal composition with placement bookkeeping
//! - **Emission**: guarded C header output plus a pixel-exact PNG preview
//!
//! ## Quick Start
//!
//! ```
//! use bitsprite::emit::{EmitRecord, render_header};
//! use bitsprite::raster::{NormalizePolicy, normalize, pack};
//!
//! // An 8x2 grayscale buffer from some decode stage
//! let pixels = vec![
//!     0, 0, 0, 0, 200, 200, 200, 200,
//!     200, 200, 200, 200, 0, 0, 0, 0,
//! ];
//!
//! // Binarize with a hard threshold, then pack 1 bit per pixel
//! let binary = normalize(8, 2, pixels, NormalizePolicy::Threshold(128))?;
//! let packed = pack(&binary);
//! assert_eq!(packed.bytes(), &[0x0F, 0xF0]);
//!
//! // Serialize as an embeddable C header
//! let record = EmitRecord::new("stripes", 8, 2, packed);
//! let header = render_header(&record)?;
//! assert!(header.contains("const unsigned char bitmap_stripes[] PROGMEM"));
//! # Ok::<(), bitsprite::BitspriteError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`raster`] | Normalization, bit packing, sheet composition |
//! | [`emit`] | C header serialization and PNG previews |
//! | [`pipeline`] | Batch orchestration and image-crate stages |
//! | [`error`] | Error types |

pub mod emit;
pub mod error;
pub mod pipeline;
pub mod raster;

// Re-exports for convenience
pub use error::BitspriteError;
pub use pipeline::ConvertConfig;
