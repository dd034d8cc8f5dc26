//! Color value types, colorspace conversions, and contrast computation
//!
//! This module is the foundation the tools build on: the `Rgb`/`Hsl`
//! value types, hex parsing and formatting, and WCAG luminance and
//! contrast functions.

pub mod contrast;
pub mod conversion;

pub use contrast::{contrast_ratio, relative_luminance, ContrastReport};
pub use conversion::{Hsl, Rgb};
