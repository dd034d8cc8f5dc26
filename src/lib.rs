//! # chromakit
//!
//! Computation core for a four-tool color toolkit:
//! - palette extraction: image to dominant colors via k-means clustering
//! - gradient generation: CSS `linear-gradient`/`radial-gradient` values
//! - contrast checking: WCAG 2.x luminance, ratio, and compliance flags
//! - scheme generation: deterministic hue-rotation color schemes
//!
//! The crate is pure computation over value types: no DOM, no
//! persistence, no shared state. A presentation layer feeds it raw
//! pixel/color data and renders the structured results it returns.
//!
//! ## Example
//!
//! ```rust,no_run
//! use chromakit::{extract_palette, ContrastReport, Rgb};
//! use std::path::Path;
//!
//! let palette = extract_palette(Path::new("photo.jpg"))?;
//! for color in &palette {
//!     println!("{}", color.to_hex());
//! }
//!
//! let report = ContrastReport::evaluate(Rgb::new(0, 0, 0), Rgb::new(255, 255, 255));
//! println!("ratio {:.2}:1", report.ratio);
//! # Ok::<(), chromakit::ChromaError>(())
//! ```

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::Path;

pub mod color;
pub mod config;
pub mod constants;
pub mod error;
pub mod gradient;
pub mod image_loader;
pub mod palette;
pub mod scheme;

pub use color::{contrast_ratio, relative_luminance, ContrastReport, Hsl, Rgb};
pub use config::ExtractionConfig;
pub use error::{ChromaError, Result};
pub use gradient::{Gradient, GradientKind};
pub use image_loader::PreviewImage;
pub use palette::KMeans;
pub use scheme::SchemeType;

/// Extract the dominant color palette from an image file
///
/// This is the one-call entry for the palette tool: decode the image,
/// render it at the capped preview width, sample every Nth pixel, and
/// cluster the samples into six representative colors. Clustering
/// initialization is randomized, so repeated calls on the same image
/// may order or shade the palette differently; use
/// [`extract_palette_with`] and a seeded [`ExtractionConfig`] for
/// reproducible output.
///
/// # Errors
///
/// Returns `ChromaError::ImageLoad` if the file cannot be decoded and
/// `ChromaError::EmptySamples` if the decoded image has no pixels.
pub fn extract_palette(path: &Path) -> Result<Vec<Rgb>> {
    extract_palette_with(path, &ExtractionConfig::default())
}

/// Extract a palette with explicit pipeline parameters
pub fn extract_palette_with(path: &Path, config: &ExtractionConfig) -> Result<Vec<Rgb>> {
    let preview = image_loader::load_preview_capped(path, config.max_preview_width)?;
    let samples = preview.samples(config.sample_stride);

    let kmeans = KMeans::with_params(config.palette_size, config.refinement_passes);
    match config.seed {
        Some(seed) => kmeans.cluster_with(&samples, &mut StdRng::seed_from_u64(seed)),
        None => kmeans.cluster(&samples),
    }
}
