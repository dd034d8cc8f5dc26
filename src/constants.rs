//! Fixed thresholds and defaults for the color toolkit core
//!
//! This module contains compile-time constants shared across the tools:
//! WCAG contrast thresholds, image sampling parameters, and clustering
//! defaults.

/// WCAG 2.x contrast compliance thresholds
///
/// Source: WCAG 2.1, Success Criteria 1.4.3 (AA) and 1.4.6 (AAA).
/// Large text is defined as 18pt regular or 14pt bold and above.
pub mod wcag {
    /// Minimum ratio for AA compliance, normal text
    pub const AA_NORMAL: f64 = 4.5;

    /// Minimum ratio for AA compliance, large text
    pub const AA_LARGE: f64 = 3.0;

    /// Minimum ratio for AAA compliance, normal text
    pub const AAA_NORMAL: f64 = 7.0;

    /// Minimum ratio for AAA compliance, large text
    pub const AAA_LARGE: f64 = 4.5;

    /// Knee of the sRGB linearization curve; channels at or below this
    /// value are scaled linearly, channels above are gamma-expanded
    pub const SRGB_LINEAR_KNEE: f64 = 0.03928;

    /// Offset added to both luminances in the contrast ratio formula
    pub const LUMINANCE_OFFSET: f64 = 0.05;

    /// Perceptual channel weights for relative luminance (R, G, B)
    pub const LUMINANCE_WEIGHTS: [f64; 3] = [0.2126, 0.7152, 0.0722];
}

/// Image preview and pixel sampling parameters
pub mod sampling {
    /// Uploaded images are re-rendered at most this wide before sampling
    pub const MAX_PREVIEW_WIDTH: u32 = 600;

    /// Every Nth pixel of the preview enters the sample sequence;
    /// bounds the clustering cost on large images
    pub const SAMPLE_STRIDE: usize = 10;
}

/// K-means clustering defaults
pub mod clustering {
    /// Number of representative colors extracted per image
    pub const DEFAULT_PALETTE_SIZE: usize = 6;

    /// Refinement passes per clustering run; a fixed budget, not a
    /// convergence check
    pub const REFINEMENT_PASSES: usize = 10;
}
