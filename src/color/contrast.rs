//! Relative luminance and WCAG contrast computation
//!
//! Implements the WCAG 2.x contrast model: per-channel sRGB
//! linearization, perceptually weighted luminance, and the
//! (L1 + 0.05) / (L2 + 0.05) contrast ratio, classified against the
//! four fixed AA/AAA thresholds.

use crate::color::Rgb;
use crate::constants::wcag;
use serde::{Deserialize, Serialize};

/// Compute the relative luminance of a color, in [0,1]
///
/// Each channel is linearized (divide by 255; at or below the knee,
/// scale by 1/12.92, otherwise gamma-expand via ((v+0.055)/1.055)^2.4),
/// then the channels are weighted 0.2126/0.7152/0.0722 and summed.
pub fn relative_luminance(color: Rgb) -> f64 {
    let [wr, wg, wb] = wcag::LUMINANCE_WEIGHTS;
    wr * linearize(color.r) + wg * linearize(color.g) + wb * linearize(color.b)
}

fn linearize(channel: u8) -> f64 {
    let v = channel as f64 / 255.0;
    if v <= wcag::SRGB_LINEAR_KNEE {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// Compute the WCAG contrast ratio between two colors
///
/// Always at least 1.0 and symmetric in its arguments; black on white
/// yields 21:1.
pub fn contrast_ratio(a: Rgb, b: Rgb) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let lighter = la.max(lb);
    let darker = la.min(lb);
    (lighter + wcag::LUMINANCE_OFFSET) / (darker + wcag::LUMINANCE_OFFSET)
}

/// Contrast ratio with pass/fail flags for each WCAG level
///
/// Stateless: recomputed from scratch on every input change.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContrastReport {
    /// Contrast ratio, >= 1.0
    pub ratio: f64,
    /// AA compliance for normal text (ratio >= 4.5)
    pub aa_normal: bool,
    /// AA compliance for large text (ratio >= 3.0)
    pub aa_large: bool,
    /// AAA compliance for normal text (ratio >= 7.0)
    pub aaa_normal: bool,
    /// AAA compliance for large text (ratio >= 4.5)
    pub aaa_large: bool,
}

impl ContrastReport {
    /// Evaluate a text/background color pair against all four thresholds
    pub fn evaluate(text: Rgb, background: Rgb) -> Self {
        Self::from_ratio(contrast_ratio(text, background))
    }

    /// Classify an already-computed contrast ratio
    pub fn from_ratio(ratio: f64) -> Self {
        Self {
            ratio,
            aa_normal: ratio >= wcag::AA_NORMAL,
            aa_large: ratio >= wcag::AA_LARGE,
            aaa_normal: ratio >= wcag::AAA_NORMAL,
            aaa_large: ratio >= wcag::AAA_LARGE,
        }
    }

    /// True when every compliance flag passes
    pub fn passes_all(&self) -> bool {
        self.aa_normal && self.aa_large && self.aaa_normal && self.aaa_large
    }
}
