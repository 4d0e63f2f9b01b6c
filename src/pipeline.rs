//! # Conversion Pipeline
//!
//! Orchestrates a batch of input images through the full conversion:
//!
//! ```text
//! decode → flatten → trim → resize → invert → dither   (image crate)
//!        → normalize → [compose] → pack → serialize    (raster / emit)
//! ```
//!
//! The image-crate stages are pure and independent per input, so they fan
//! out over rayon. `par_iter().map().collect()` is an indexed parallel
//! collect and hands results back in original input order, which the
//! sheet composer's cumulative offsets and the per-image output order both
//! depend on.
//!
//! A failing input is reported and dropped; the batch continues with the
//! remaining images in their original relative order.

use std::fs;
use std::path::{Path, PathBuf};

use image::imageops::{self, FilterType};
use image::{DynamicImage, GrayImage};
use rayon::prelude::*;

use crate::emit::{EmitRecord, render_header, save_preview};
use crate::error::BitspriteError;
use crate::raster::{BinaryBuffer, NormalizePolicy, Sprite, compose, normalize, pack};

/// Name used for the composed sheet's outputs.
const SHEET_NAME: &str = "spritesheet";

/// Immutable conversion settings.
///
/// Built once from the CLI and passed by reference into every stage; no
/// stage reads ambient state.
#[derive(Debug, Clone)]
pub struct ConvertConfig {
    /// Target width in pixels (aspect-preserving when height is absent)
    pub width: Option<u32>,
    /// Target height in pixels (aspect-preserving when width is absent)
    pub height: Option<u32>,
    /// Floyd-Steinberg dithering instead of a hard threshold
    pub dither: bool,
    /// Invert luminance before normalization (for on = lit displays)
    pub invert: bool,
    /// Threshold cut value for the non-dithered path
    pub threshold: u8,
    /// Emit the C header next to the preview
    pub c_header: bool,
    /// Compose all inputs into one horizontal sheet
    pub spritesheet: bool,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            width: None,
            height: None,
            dither: false,
            invert: false,
            threshold: 128,
            c_header: true,
            spritesheet: false,
        }
    }
}

impl ConvertConfig {
    /// The normalization policy this configuration selects.
    pub fn policy(&self) -> NormalizePolicy {
        if self.dither {
            NormalizePolicy::PreDithered
        } else {
            NormalizePolicy::Threshold(self.threshold)
        }
    }
}

/// Load one input image and run it through the external stages up to and
/// including normalization.
pub fn load_sprite(path: &Path, config: &ConvertConfig) -> Result<Sprite, BitspriteError> {
    let name = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "sprite".to_string());

    let img = image::open(path).map_err(|e| BitspriteError::Decode {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    let mut gray = flatten_to_gray(&img);
    gray = trim_border(&gray);
    gray = resize_to_target(gray, config);
    if config.invert {
        imageops::invert(&mut gray);
    }
    if config.dither {
        imageops::dither(&mut gray, &imageops::BiLevel);
    }

    let (width, height) = gray.dimensions();
    let buffer = normalize(width, height, gray.into_raw(), config.policy())?;
    Ok(Sprite { name, buffer })
}

/// Composite alpha onto a white background and convert to grayscale.
///
/// Drawings exported with transparent backgrounds become black-on-white,
/// which is what the threshold and dither stages expect.
fn flatten_to_gray(img: &DynamicImage) -> GrayImage {
    let rgba = img.to_rgba8();
    let mut flat = image::RgbImage::new(rgba.width(), rgba.height());
    for (x, y, pixel) in rgba.enumerate_pixels() {
        let [r, g, b, a] = pixel.0;
        let blend = |c: u8| -> u8 {
            let a = a as u32;
            ((c as u32 * a + 255 * (255 - a)) / 255) as u8
        };
        flat.put_pixel(x, y, image::Rgb([blend(r), blend(g), blend(b)]));
    }
    DynamicImage::ImageRgb8(flat).to_luma8()
}

/// Crop away a uniform border matching the top-left pixel.
///
/// An image that is entirely one value has no content box and is returned
/// unchanged.
fn trim_border(gray: &GrayImage) -> GrayImage {
    let (width, height) = gray.dimensions();
    if width == 0 || height == 0 {
        return gray.clone();
    }

    let background = gray.get_pixel(0, 0).0[0];
    let (mut min_x, mut min_y) = (width, height);
    let (mut max_x, mut max_y) = (0u32, 0u32);
    let mut found = false;

    for (x, y, pixel) in gray.enumerate_pixels() {
        if pixel.0[0] != background {
            found = true;
            min_x = min_x.min(x);
            min_y = min_y.min(y);
            max_x = max_x.max(x);
            max_y = max_y.max(y);
        }
    }

    if !found {
        return gray.clone();
    }

    imageops::crop_imm(gray, min_x, min_y, max_x - min_x + 1, max_y - min_y + 1).to_image()
}

/// Resize to the configured target dimensions.
///
/// One dimension given scales the other to preserve aspect ratio. Nearest
/// neighbor keeps pixel-art edges crisp at small icon sizes.
fn resize_to_target(gray: GrayImage, config: &ConvertConfig) -> GrayImage {
    let (width, height) = gray.dimensions();
    if width == 0 || height == 0 {
        return gray;
    }

    let (target_w, target_h) = match (config.width, config.height) {
        (None, None) => return gray,
        (Some(w), Some(h)) => (w, h),
        (Some(w), None) => {
            let h = ((height as u64 * w as u64 + width as u64 / 2) / width as u64).max(1);
            (w, h as u32)
        }
        (None, Some(h)) => {
            let w = ((width as u64 * h as u64 + height as u64 / 2) / height as u64).max(1);
            (w as u32, h)
        }
    };

    imageops::resize(&gray, target_w.max(1), target_h.max(1), FilterType::Nearest)
}

/// Convert a batch of inputs and write outputs beside the first input.
///
/// Per-image failures are logged to stderr and skipped. The run fails only
/// when there are no inputs at all or when every input failed.
pub fn run_batch(inputs: &[PathBuf], config: &ConvertConfig) -> Result<(), BitspriteError> {
    if inputs.is_empty() {
        return Err(BitspriteError::Usage("no input files provided".to_string()));
    }

    let total = inputs.len();

    // Fan out the decode/resize/dither stages; collect keeps input order.
    let results: Vec<Result<Sprite, BitspriteError>> = inputs
        .par_iter()
        .map(|path| load_sprite(path, config))
        .collect();

    let mut sprites = Vec::new();
    for (index, (path, result)) in inputs.iter().zip(results).enumerate() {
        match result {
            Ok(sprite) => {
                println!("Processing [{}/{}]: {}", index + 1, total, sprite.name);
                sprites.push(sprite);
            }
            Err(e) => eprintln!("Skipping {}: {e}", path.display()),
        }
    }

    if sprites.is_empty() {
        // Nothing survived decoding; short-circuit before composition.
        return Err(BitspriteError::NoInput);
    }

    let out_dir = output_dir(&inputs[0]);

    if config.spritesheet {
        let sheet = compose(&sprites)?;
        for placement in &sheet.placements {
            println!(
                "  Frame {}: x={}, w={}",
                placement.name, placement.x_offset, placement.width
            );
        }
        write_outputs(SHEET_NAME, &sheet.buffer, config, &out_dir)?;
        println!(
            "Sprite sheet created: {}x{}",
            sheet.buffer.width(),
            sheet.buffer.height()
        );
    } else {
        for sprite in &sprites {
            write_outputs(&sprite.name, &sprite.buffer, config, &out_dir)?;
        }
    }

    Ok(())
}

/// Outputs land in the directory of the first input.
fn output_dir(first_input: &Path) -> PathBuf {
    match first_input.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

/// Write the preview PNG and, when enabled, the C header for one result.
fn write_outputs(
    name: &str,
    buffer: &BinaryBuffer,
    config: &ConvertConfig,
    dir: &Path,
) -> Result<(), BitspriteError> {
    let preview_path = dir.join(format!("{name}_preview.png"));
    save_preview(&preview_path, buffer)?;
    println!("  -> Saved preview: {}", preview_path.display());

    if config.c_header {
        let record = EmitRecord::new(name, buffer.width(), buffer.height(), pack(buffer));
        let header = render_header(&record)?;
        let header_path = dir.join(format!("{name}.h"));
        fs::write(&header_path, header)?;
        println!("  -> Saved C header: {}", header_path.display());
    }

    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================
