//! Integration tests for the complete color toolkit pipeline
//!
//! These tests exercise the tools end to end over synthetic images and
//! known color values:
//! - palette extraction: decode -> preview render -> sample -> cluster
//! - contrast checking: hex input -> ratio -> compliance flags
//! - scheme generation: hex input -> HSL rotation -> hex output
//! - gradient generation: colors -> CSS declaration

use chromakit::{
    extract_palette_with, scheme, ChromaError, ContrastReport, ExtractionConfig, Gradient, Rgb,
    SchemeType,
};
use image::{Rgba, RgbaImage};
use std::path::{Path, PathBuf};

/// Write a synthetic test image to the temp directory
fn write_test_image(name: &str, img: RgbaImage) -> PathBuf {
    let path = std::env::temp_dir().join(format!("chromakit_{}_{}.png", std::process::id(), name));
    img.save(&path).expect("failed to write test image");
    path
}

fn seeded_config() -> ExtractionConfig {
    ExtractionConfig {
        seed: Some(0xC0FFEE),
        ..ExtractionConfig::default()
    }
}

// ============================================================================
// Palette Extraction
// ============================================================================

#[test]
fn test_extract_palette_uniform_image() {
    let color = Rgb::new(10, 200, 30);
    let img = RgbaImage::from_pixel(120, 80, Rgba([color.r, color.g, color.b, 255]));
    let path = write_test_image("uniform", img);

    let palette = extract_palette_with(&path, &seeded_config()).unwrap();
    std::fs::remove_file(&path).ok();

    // A single-color image is a fixed point of the clustering: every
    // centroid initializes to and stays at that color
    assert_eq!(palette.len(), 6);
    assert!(palette.iter().all(|&c| c == color));
}

#[test]
fn test_extract_palette_two_color_image() {
    let left = Rgb::new(200, 30, 40);
    let right = Rgb::new(20, 40, 200);
    let img = RgbaImage::from_fn(200, 100, |x, _| {
        let c = if x < 100 { left } else { right };
        Rgba([c.r, c.g, c.b, 255])
    });
    let path = write_test_image("two_color", img);

    let config = ExtractionConfig {
        palette_size: 2,
        ..seeded_config()
    };
    let mut palette = extract_palette_with(&path, &config).unwrap();
    std::fs::remove_file(&path).ok();

    // With two solid regions and k = 2 the centroids settle on the two
    // exact region colors within the pass budget
    palette.sort_by_key(|c| c.r);
    assert_eq!(palette, vec![right, left]);
}

#[test]
fn test_extract_palette_caps_preview_width() {
    // A wide image still samples fine after the 600px preview cap
    let img = RgbaImage::from_pixel(1500, 20, Rgba([90, 90, 90, 255]));
    let path = write_test_image("wide", img);

    let palette = extract_palette_with(&path, &seeded_config()).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(palette.len(), 6);
}

#[test]
fn test_extract_palette_tiny_image() {
    // Fewer samples than centroids is allowed; duplicates expected
    let img = RgbaImage::from_pixel(2, 2, Rgba([1, 2, 3, 255]));
    let path = write_test_image("tiny", img);

    let palette = extract_palette_with(&path, &seeded_config()).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(palette.len(), 6);
    assert!(palette.iter().all(|&c| c == Rgb::new(1, 2, 3)));
}

#[test]
fn test_extract_palette_missing_file() {
    let result = extract_palette_with(Path::new("no_such_image.png"), &seeded_config());

    match result.unwrap_err() {
        ChromaError::ImageLoad { .. } => {}
        err => panic!("Expected ImageLoad, got: {:?}", err),
    }
}

// ============================================================================
// Contrast Checker
// ============================================================================

#[test]
fn test_contrast_black_on_white_end_to_end() {
    let text = Rgb::from_hex("#000000").unwrap();
    let background = Rgb::from_hex("#ffffff").unwrap();

    let report = ContrastReport::evaluate(text, background);

    assert_eq!(format!("{:.2}", report.ratio), "21.00");
    assert!(report.aa_normal);
    assert!(report.aa_large);
    assert!(report.aaa_normal);
    assert!(report.aaa_large);
}

#[test]
fn test_contrast_mid_gray_passes_aa_only() {
    // #767676 on white is ~4.54:1, above AA-normal but below AAA-normal
    let report = ContrastReport::evaluate(
        Rgb::from_hex("#767676").unwrap(),
        Rgb::from_hex("#ffffff").unwrap(),
    );

    assert!(report.aa_normal);
    assert!(report.aa_large);
    assert!(!report.aaa_normal);
    assert!(report.aaa_large);
}

// ============================================================================
// Scheme Generator
// ============================================================================

#[test]
fn test_scheme_complementary_red_end_to_end() {
    let base = Rgb::from_hex("#ff0000").unwrap();
    let colors = scheme::generate(base, SchemeType::Complementary);

    let hex: Vec<String> = colors.iter().map(|c| c.to_hex()).collect();
    assert_eq!(hex, vec!["#FF0000", "#00FFFF"]);
}

#[test]
fn test_scheme_monochromatic_ladder_end_to_end() {
    // Pure red has lightness 50, so no clamp engages
    let base = Rgb::from_hex("#ff0000").unwrap();
    let colors = scheme::generate(base, SchemeType::Monochromatic);

    let lightness: Vec<u8> = colors.iter().map(|c| c.to_hsl().l).collect();
    assert_eq!(lightness, vec![20, 35, 50, 65, 80]);

    // Hue and saturation are held constant across the ladder
    assert!(colors.iter().all(|c| {
        let hsl = c.to_hsl();
        hsl.h == 0 && hsl.s == 100
    }));
}

#[test]
fn test_scheme_counts_per_type() {
    let base = Rgb::from_hex("#667eea").unwrap();
    let expected = [2, 3, 3, 4, 5];
    for (scheme_type, count) in SchemeType::ALL.into_iter().zip(expected) {
        assert_eq!(scheme::generate(base, scheme_type).len(), count);
    }
}

// ============================================================================
// Gradient Generator
// ============================================================================

#[test]
fn test_gradient_css_end_to_end() {
    let start = Rgb::from_hex("#667eea").unwrap();
    let end = Rgb::from_hex("#764ba2").unwrap();

    let linear = Gradient::linear(135, start, end);
    assert_eq!(linear.css(), "linear-gradient(135deg, #667eea, #764ba2)");
    assert_eq!(
        linear.declaration(),
        "background: linear-gradient(135deg, #667eea, #764ba2);"
    );

    let radial = Gradient::radial(start, end);
    assert_eq!(radial.css(), "radial-gradient(circle, #667eea, #764ba2)");
}

// ============================================================================
// Serialization
// ============================================================================

#[test]
fn test_contrast_report_json_serialization() {
    let report = ContrastReport::evaluate(Rgb::new(0, 0, 0), Rgb::new(255, 255, 255));
    let json = serde_json::to_string(&report).unwrap();

    assert!(json.contains("\"ratio\""));
    assert!(json.contains("\"aa_normal\":true"));

    let back: ContrastReport = serde_json::from_str(&json).unwrap();
    assert_eq!(back, report);
}

#[test]
fn test_palette_json_serialization() {
    let palette = vec![Rgb::new(1, 2, 3), Rgb::new(4, 5, 6)];
    let json = serde_json::to_string(&palette).unwrap();
    let back: Vec<Rgb> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, palette);
}
