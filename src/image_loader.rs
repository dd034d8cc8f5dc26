//! Image loading and capped-width preview rendering
//!
//! Decodes an uploaded image (PNG, JPEG, GIF, and the other formats
//! the `image` crate supports) and re-renders it at a capped preview
//! width before any pixels are sampled. The cap keeps the sample
//! sequence small regardless of the original image size.
//!
//! Decode failures are the caller's to surface; the rest of the crate
//! only ever sees successfully decoded pixel buffers.

use crate::constants::sampling::MAX_PREVIEW_WIDTH;
use crate::error::{ChromaError, Result};
use crate::palette::sampler::sample_rgba;
use crate::Rgb;
use image::{imageops::FilterType, DynamicImage, ImageReader};
use std::path::Path;

/// A decoded, preview-sized RGBA pixel buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewImage {
    pub width: u32,
    pub height: u32,
    /// Interleaved RGBA bytes, row-major, `width * height * 4` long
    pub rgba: Vec<u8>,
}

impl PreviewImage {
    /// Wrap an already-decoded RGBA buffer
    ///
    /// For presentation layers that decode elsewhere (e.g. a canvas)
    /// and hand the core raw pixels.
    ///
    /// # Errors
    ///
    /// Returns `ChromaError::InvalidParameter` if the buffer length
    /// does not match the dimensions.
    pub fn from_rgba(width: u32, height: u32, rgba: Vec<u8>) -> Result<Self> {
        let expected = width as usize * height as usize * 4;
        if rgba.len() != expected {
            return Err(ChromaError::invalid_parameter(
                "rgba.len()",
                format!("{} (expected {})", rgba.len(), expected),
            ));
        }
        Ok(Self {
            width,
            height,
            rgba,
        })
    }

    /// Number of pixels in the preview
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Sample every `stride`-th pixel into an ordered color sequence
    pub fn samples(&self, stride: usize) -> Vec<Rgb> {
        sample_rgba(&self.rgba, stride)
    }
}

/// Load an image and render it at the default preview width cap (600px)
pub fn load_preview(path: &Path) -> Result<PreviewImage> {
    load_preview_capped(path, MAX_PREVIEW_WIDTH)
}

/// Load an image and render it at a custom preview width cap
///
/// Images narrower than the cap are kept at their original size; wider
/// images are downscaled with their aspect ratio preserved. A cap of 0
/// disables scaling.
///
/// # Errors
///
/// Returns `ChromaError::ImageLoad` if the file cannot be opened or
/// decoded.
pub fn load_preview_capped(path: &Path, max_width: u32) -> Result<PreviewImage> {
    let reader = ImageReader::open(path).map_err(|e| {
        ChromaError::image_load(
            format!("Failed to open image file: {}", path.display()),
            e,
        )
    })?;

    let img: DynamicImage = reader.decode().map_err(|e| {
        ChromaError::image_load(format!("Failed to decode image: {}", path.display()), e)
    })?;

    let img = scale_to_width(img, max_width);
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();

    Ok(PreviewImage {
        width,
        height,
        rgba: rgba.into_raw(),
    })
}

fn scale_to_width(img: DynamicImage, max_width: u32) -> DynamicImage {
    if max_width == 0 || img.width() <= max_width {
        return img;
    }
    let height = (img.height() as u64 * max_width as u64 / img.width() as u64).max(1) as u32;
    img.resize_exact(max_width, height, FilterType::Triangle)
}
