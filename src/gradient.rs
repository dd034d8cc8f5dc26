//! CSS gradient declaration generation
//!
//! Builds the `linear-gradient`/`radial-gradient` declaration strings
//! the gradient tool previews and copies to the clipboard. The output
//! is a plain CSS value; the presentation layer decides what property
//! to attach it to.

use crate::color::Rgb;
use serde::{Deserialize, Serialize};

/// Gradient geometry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum GradientKind {
    /// Straight-line gradient at an angle in degrees (0-360)
    Linear { angle_deg: u16 },
    /// Circular gradient from the center outward
    Radial,
}

/// A two-stop gradient between `start` and `end`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gradient {
    pub kind: GradientKind,
    pub start: Rgb,
    pub end: Rgb,
}

impl Gradient {
    /// Create a linear gradient at the given angle
    pub fn linear(angle_deg: u16, start: Rgb, end: Rgb) -> Self {
        Self {
            kind: GradientKind::Linear { angle_deg },
            start,
            end,
        }
    }

    /// Create a radial gradient
    pub fn radial(start: Rgb, end: Rgb) -> Self {
        Self {
            kind: GradientKind::Radial,
            start,
            end,
        }
    }

    /// The CSS gradient value, e.g. `linear-gradient(135deg, #667eea, #764ba2)`
    ///
    /// Hex stops are lowercase per CSS convention; displays wanting
    /// uppercase use [`Rgb::to_hex`] instead.
    pub fn css(&self) -> String {
        match self.kind {
            GradientKind::Linear { angle_deg } => format!(
                "linear-gradient({}deg, {}, {})",
                angle_deg,
                css_hex(self.start),
                css_hex(self.end)
            ),
            GradientKind::Radial => format!(
                "radial-gradient(circle, {}, {})",
                css_hex(self.start),
                css_hex(self.end)
            ),
        }
    }

    /// The full `background` declaration shown in the copyable code block
    pub fn declaration(&self) -> String {
        format!("background: {};", self.css())
    }
}

fn css_hex(color: Rgb) -> String {
    format!("#{:02x}{:02x}{:02x}", color.r, color.g, color.b)
}
