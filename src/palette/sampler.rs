//! Pixel subsampling for palette extraction
//!
//! Turns a decoded RGBA pixel buffer into the ordered sample sequence
//! the clusterer consumes. Only every Nth pixel is kept, which bounds
//! the O(k * n * passes) clustering cost on large previews; alpha is
//! ignored throughout.

use crate::color::Rgb;

/// Sample every `stride`-th pixel of an RGBA byte buffer
///
/// The buffer is interpreted as consecutive 4-byte RGBA pixels; a
/// trailing partial pixel is ignored. A stride of 0 is treated as 1
/// (every pixel).
pub fn sample_rgba(rgba: &[u8], stride: usize) -> Vec<Rgb> {
    rgba.chunks_exact(4)
        .step_by(stride.max(1))
        .map(|px| Rgb::new(px[0], px[1], px[2]))
        .collect()
}
