//! # Bitsprite CLI
//!
//! Command-line interface for converting images into 1-bit display assets.
//!
//! ## Usage
//!
//! ```bash
//! # Convert one icon, threshold at the default cut of 128
//! bitsprite icon.png
//!
//! # Scale to 16px tall (aspect preserved) with Floyd-Steinberg dithering
//! bitsprite --height 16 --dither photo.jpg
//!
//! # Invert for OLEDs where a set bit lights the pixel
//! bitsprite --invert --threshold 100 logo.png
//!
//! # Combine animation frames into one horizontal sheet
//! bitsprite --spritesheet --height 32 frame0.png frame1.png frame2.png
//!
//! # Preview only, no C header
//! bitsprite --c-header false sketch.png
//! ```
//!
//! Outputs are written next to the first input: `<name>_preview.png` always,
//! `<name>.h` unless header emission is disabled.

use clap::{ArgAction, Parser};
use std::path::PathBuf;

use bitsprite::{BitspriteError, ConvertConfig, pipeline};

/// Bitsprite - convert images to 1-bit bitmaps for embedded displays
#[derive(Parser, Debug)]
#[command(name = "bitsprite")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input image paths (at least one required)
    #[arg(value_name = "INPUTS")]
    inputs: Vec<PathBuf>,

    /// Target width in pixels (preserves aspect ratio if height is omitted)
    #[arg(long)]
    width: Option<u32>,

    /// Target height in pixels (preserves aspect ratio if width is omitted)
    #[arg(long)]
    height: Option<u32>,

    /// Enable Floyd-Steinberg dithering instead of a hard threshold
    #[arg(long)]
    dither: bool,

    /// Invert colors (for OLEDs where on = white)
    #[arg(long)]
    invert: bool,

    /// Threshold for black/white conversion (0-255)
    #[arg(long, default_value_t = 128)]
    threshold: u8,

    /// Generate C header file output
    #[arg(
        long = "c-header",
        value_name = "BOOL",
        default_value_t = true,
        action = ArgAction::Set
    )]
    c_header: bool,

    /// Combine inputs into a horizontal sprite sheet
    #[arg(long)]
    spritesheet: bool,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), BitspriteError> {
    let cli = Cli::parse();

    let config = ConvertConfig {
        width: cli.width,
        height: cli.height,
        dither: cli.dither,
        invert: cli.invert,
        threshold: cli.threshold,
        c_header: cli.c_header,
        spritesheet: cli.spritesheet,
    };

    pipeline::run_batch(&cli.inputs, &config)
}
