//! # C Header Serialization
//!
//! Renders a packed bitmap into a guarded C header containing a
//! `PROGMEM` byte array, ready to drop next to a sketch or firmware source
//! tree:
//!
//! ```c
//! // Generated by bitsprite - do not edit
//! // Source: arrow-left
//! // Size: 16x16
//!
//! #ifndef _BMP_ARROW_LEFT_H_
//! #define _BMP_ARROW_LEFT_H_
//!
//! #include <stdint.h>
//! #include <pgmspace.h>
//!
//! const unsigned char bitmap_arrow_left[] PROGMEM = {
//!   0x00, 0x01, 0x80, 0x03, ...
//! };
//!
//! #endif // _BMP_ARROW_LEFT_H_
//! ```
//!
//! The size comment records the logical pixel dimensions, not the packed
//! byte count: consumers recompute the byte stride as `ceil(width / 8)`
//! themselves.

use crate::error::BitspriteError;
use crate::raster::PackedBitmap;

/// Hex values per line in the generated array.
const VALUES_PER_LINE: usize = 12;

/// Everything the serializer needs for one output header.
#[derive(Debug, Clone)]
pub struct EmitRecord {
    /// Original human-readable name (written into the header comment)
    pub name: String,
    /// Sanitized C identifier derived from `name`
    pub symbol: String,
    /// Logical bitmap width in pixels
    pub width: u32,
    /// Logical bitmap height in pixels
    pub height: u32,
    /// The packed bytes
    pub packed: PackedBitmap,
}

impl EmitRecord {
    /// Build a record, deriving the symbol from the human name.
    pub fn new(name: &str, width: u32, height: u32, packed: PackedBitmap) -> Self {
        Self {
            name: name.to_string(),
            symbol: sanitize_symbol(name),
            width,
            height,
            packed,
        }
    }
}

/// Turn an arbitrary name into a C identifier.
///
/// Every character outside `[A-Za-z0-9_]` becomes a single `_` (no
/// collapsing of runs), then the whole string is lowercased. Distinct names
/// can collide after sanitization; avoiding that is the caller's problem.
///
/// ```
/// use bitsprite::emit::sanitize_symbol;
///
/// assert_eq!(sanitize_symbol("Icon-42!"), "icon_42_");
/// assert_eq!(sanitize_symbol("a  b"), "a__b"); // two spaces, two underscores
/// ```
pub fn sanitize_symbol(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect::<String>()
        .to_lowercase()
}

/// Render a record as C header source.
///
/// Deterministic: the same record always yields byte-identical text. An
/// empty packed bitmap means an upstream invariant was violated and fails
/// with [`BitspriteError::EmptyBitmap`].
pub fn render_header(record: &EmitRecord) -> Result<String, BitspriteError> {
    if record.packed.bytes().is_empty() {
        return Err(BitspriteError::EmptyBitmap(record.name.clone()));
    }

    let guard = format!("_BMP_{}_H_", record.symbol.to_uppercase());

    let hex_lines: Vec<String> = record
        .packed
        .bytes()
        .chunks(VALUES_PER_LINE)
        .map(|chunk| {
            chunk
                .iter()
                .map(|b| format!("0x{b:02X}"))
                .collect::<Vec<_>>()
                .join(", ")
        })
        .collect();
    let hex_data = hex_lines.join(",\n  ");

    Ok(format!(
        "// Generated by bitsprite - do not edit\n\
         // Source: {name}\n\
         // Size: {width}x{height}\n\
         \n\
         #ifndef {guard}\n\
         #define {guard}\n\
         \n\
         #include <stdint.h>\n\
         #include <pgmspace.h>\n\
         \n\
         const unsigned char bitmap_{symbol}[] PROGMEM = {{\n  {hex_data}\n}};\n\
         \n\
         #endif // {guard}\n",
        name = record.name,
        width = record.width,
        height = record.height,
        symbol = record.symbol,
    ))
}

// ============================================================================
// TESTS
// ============================================================================
