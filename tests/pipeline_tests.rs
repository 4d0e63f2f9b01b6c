//! # Pipeline Integration Tests
//!
//! End-to-end coverage of the conversion batch: real PNG inputs on disk, a
//! real `run_batch` invocation, and assertions on the files it writes.
//!
//! Each test gets its own scratch directory under the system temp dir so
//! tests can run in parallel without clobbering one another's outputs.

use std::fs;
use std::path::{Path, PathBuf};

use image::{GrayImage, Luma};
use pretty_assertions::assert_eq;

use bitsprite::pipeline::{self, ConvertConfig};
use bitsprite::BitspriteError;

/// Create (or recreate) a per-test scratch directory.
fn scratch_dir(test_name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "bitsprite-test-{}-{}",
        std::process::id(),
        test_name
    ));
    if dir.exists() {
        fs::remove_dir_all(&dir).unwrap();
    }
    fs::create_dir_all(&dir).unwrap();
    dir
}

/// Write an 8x8 checkerboard PNG (0/255). The pattern touches every edge,
/// so the auto-trim stage leaves its dimensions alone.
fn write_checkerboard(path: &Path) {
    let img = GrayImage::from_fn(8, 8, |x, y| {
        if (x + y) % 2 == 0 {
            Luma([255u8])
        } else {
            Luma([0u8])
        }
    });
    img.save(path).unwrap();
}

/// Write a solid PNG of the given size and value (uniform, trim no-op).
fn write_solid(path: &Path, width: u32, height: u32, value: u8) {
    GrayImage::from_pixel(width, height, Luma([value]))
        .save(path)
        .unwrap();
}

#[test]
fn test_single_image_emits_preview_and_header() {
    let dir = scratch_dir("single");
    let input = dir.join("checker.png");
    write_checkerboard(&input);

    pipeline::run_batch(&[input], &ConvertConfig::default()).unwrap();

    let preview = dir.join("checker_preview.png");
    let header = dir.join("checker.h");
    assert!(preview.exists(), "preview should be written");
    assert!(header.exists(), "header should be written");

    // Preview is pixel-exact: the checkerboard survives thresholding
    let img = image::open(&preview).unwrap().to_luma8();
    assert_eq!(img.dimensions(), (8, 8));
    assert_eq!(img.get_pixel(0, 0).0[0], 255);
    assert_eq!(img.get_pixel(1, 0).0[0], 0);

    let text = fs::read_to_string(&header).unwrap();
    assert!(text.contains("// Source: checker"));
    assert!(text.contains("// Size: 8x8"));
    assert!(text.contains("#ifndef _BMP_CHECKER_H_"));
    assert!(text.contains("const unsigned char bitmap_checker[] PROGMEM"));
    // 8x8 checkerboard packs to alternating 0xAA / 0x55 rows
    assert!(text.contains("0xAA, 0x55"));
}

#[test]
fn test_header_emission_can_be_disabled() {
    let dir = scratch_dir("no_header");
    let input = dir.join("icon.png");
    write_checkerboard(&input);

    let config = ConvertConfig {
        c_header: false,
        ..Default::default()
    };
    pipeline::run_batch(&[input], &config).unwrap();

    assert!(dir.join("icon_preview.png").exists());
    assert!(!dir.join("icon.h").exists(), "header emission was disabled");
}

#[test]
fn test_spritesheet_dimensions() {
    let dir = scratch_dir("sheet");
    let a = dir.join("a.png");
    let b = dir.join("b.png");
    // Solid black inputs: uniform (no trim), threshold maps them all-off
    write_solid(&a, 4, 6, 0);
    write_solid(&b, 6, 3, 0);

    let config = ConvertConfig {
        spritesheet: true,
        ..Default::default()
    };
    pipeline::run_batch(&[a, b], &config).unwrap();

    // Sheet width = 4 + 6, height = max(6, 3); outputs use the fixed name
    let preview = dir.join("spritesheet_preview.png");
    assert!(preview.exists());
    let img = image::open(&preview).unwrap().to_luma8();
    assert_eq!(img.dimensions(), (10, 6));

    let text = fs::read_to_string(dir.join("spritesheet.h")).unwrap();
    assert!(text.contains("const unsigned char bitmap_spritesheet[] PROGMEM"));
    assert!(text.contains("// Size: 10x6"));
}

#[test]
fn test_partial_failure_drops_image_and_continues() {
    let dir = scratch_dir("partial");
    let good1 = dir.join("first.png");
    let bad = dir.join("broken.png");
    let good2 = dir.join("third.png");
    write_checkerboard(&good1);
    fs::write(&bad, b"this is not a png").unwrap();
    write_checkerboard(&good2);

    // The batch succeeds: two of three images converted
    pipeline::run_batch(&[good1, bad, good2], &ConvertConfig::default()).unwrap();

    assert!(dir.join("first.h").exists());
    assert!(dir.join("third.h").exists());
    assert!(!dir.join("broken.h").exists());
    assert!(!dir.join("broken_preview.png").exists());
}

#[test]
fn test_partial_failure_preserves_sheet_order() {
    let dir = scratch_dir("partial_sheet");
    let good1 = dir.join("one.png");
    let bad = dir.join("two.png");
    let good2 = dir.join("three.png");
    write_solid(&good1, 5, 2, 0);
    fs::write(&bad, b"garbage").unwrap();
    write_solid(&good2, 3, 2, 0);

    let config = ConvertConfig {
        spritesheet: true,
        ..Default::default()
    };
    pipeline::run_batch(&[good1, bad, good2], &config).unwrap();

    // Only the surviving sprites compose: 5 + 3 wide
    let img = image::open(dir.join("spritesheet_preview.png"))
        .unwrap()
        .to_luma8();
    assert_eq!(img.dimensions(), (8, 2));
}

#[test]
fn test_all_inputs_failing_is_an_error() {
    let dir = scratch_dir("all_fail");
    let bad = dir.join("junk.png");
    fs::write(&bad, b"junk").unwrap();

    let err = pipeline::run_batch(&[bad], &ConvertConfig::default()).unwrap_err();
    assert!(matches!(err, BitspriteError::NoInput));
}

#[test]
fn test_no_inputs_is_usage_error() {
    let err = pipeline::run_batch(&[], &ConvertConfig::default()).unwrap_err();
    assert!(matches!(err, BitspriteError::Usage(_)));
}

#[test]
fn test_threshold_cut_is_strict() {
    let dir = scratch_dir("threshold");
    let input = dir.join("mid.png");
    // Uniform 128: exactly the default cut, so every pixel maps to off
    write_solid(&input, 4, 4, 128);

    pipeline::run_batch(&[input], &ConvertConfig::default()).unwrap();

    let img = image::open(dir.join("mid_preview.png")).unwrap().to_luma8();
    assert!(img.pixels().all(|p| p.0[0] == 0));

    let text = fs::read_to_string(dir.join("mid.h")).unwrap();
    assert!(text.contains("0x00"));
    assert!(!text.contains("0xF0"));
}

#[test]
fn test_invert_flips_luminance() {
    let dir = scratch_dir("invert");
    let input = dir.join("dark.png");
    write_solid(&input, 4, 4, 0);

    let config = ConvertConfig {
        invert: true,
        ..Default::default()
    };
    pipeline::run_batch(&[input], &config).unwrap();

    // Black input inverted to white, which thresholds to all-on
    let img = image::open(dir.join("dark_preview.png")).unwrap().to_luma8();
    assert!(img.pixels().all(|p| p.0[0] == 255));
}

#[test]
fn test_resize_applies_before_packing() {
    let dir = scratch_dir("resize");
    let input = dir.join("big.png");
    write_checkerboard(&input); // 8x8

    let config = ConvertConfig {
        width: Some(16),
        height: Some(16),
        ..Default::default()
    };
    pipeline::run_batch(&[input], &config).unwrap();

    let text = fs::read_to_string(dir.join("big.h")).unwrap();
    assert!(text.contains("// Size: 16x16"));
}

#[test]
fn test_dithered_run_produces_binary_preview() {
    let dir = scratch_dir("dither");
    let input = dir.join("gray.png");
    // Mid-gray field: dithering must resolve it to a mix of pure 0 and 255
    let img = GrayImage::from_fn(16, 16, |x, _| Luma([(96 + x * 4) as u8]));
    img.save(&input).unwrap();

    let config = ConvertConfig {
        dither: true,
        ..Default::default()
    };
    pipeline::run_batch(&[input], &config).unwrap();

    let preview = image::open(dir.join("gray_preview.png")).unwrap().to_luma8();
    assert!(preview.pixels().all(|p| p.0[0] == 0 || p.0[0] == 255));
}
