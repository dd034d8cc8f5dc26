//! Color scheme generation from hue-rotation theory
//!
//! Produces an ordered set of 2-5 colors from one base color by
//! rotating its HSL hue through fixed offsets (or, for monochromatic
//! schemes, stepping its lightness). Fully deterministic: the same
//! base color and scheme type always produce the same colors.

use crate::color::{Hsl, Rgb};
use crate::error::ChromaError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The closed set of supported scheme types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemeType {
    /// Base hue and its opposite (2 colors)
    Complementary,
    /// Base hue and its neighbors at +/-30 degrees (3 colors)
    Analogous,
    /// Three hues spaced 120 degrees apart (3 colors)
    Triadic,
    /// Four hues spaced 90 degrees apart (4 colors)
    Tetradic,
    /// One hue across five lightness steps (5 colors)
    Monochromatic,
}

impl SchemeType {
    /// All scheme types, in presentation order
    pub const ALL: [SchemeType; 5] = [
        SchemeType::Complementary,
        SchemeType::Analogous,
        SchemeType::Triadic,
        SchemeType::Tetradic,
        SchemeType::Monochromatic,
    ];

    /// The lowercase tag used by the UI and in serialized form
    pub fn tag(&self) -> &'static str {
        match self {
            SchemeType::Complementary => "complementary",
            SchemeType::Analogous => "analogous",
            SchemeType::Triadic => "triadic",
            SchemeType::Tetradic => "tetradic",
            SchemeType::Monochromatic => "monochromatic",
        }
    }

    /// Number of colors this scheme produces
    pub fn color_count(&self) -> usize {
        match self {
            SchemeType::Complementary => 2,
            SchemeType::Analogous | SchemeType::Triadic => 3,
            SchemeType::Tetradic => 4,
            SchemeType::Monochromatic => 5,
        }
    }
}

impl FromStr for SchemeType {
    type Err = ChromaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SchemeType::ALL
            .into_iter()
            .find(|t| t.tag() == s)
            .ok_or_else(|| ChromaError::invalid_parameter("scheme_type", s))
    }
}

/// Generate a color scheme from a base color
///
/// Hue offsets are applied mod 360 with saturation and lightness held
/// constant; the monochromatic ladder instead steps lightness through
/// [l-30, l-15, l, l+15, l+30] with asymmetric clamps (floors 20/10,
/// caps 90/95). Every output passes back through HSL to RGB.
pub fn generate(base: Rgb, scheme: SchemeType) -> Vec<Rgb> {
    let Hsl { h, s, l } = base.to_hsl();

    let rotate = |offset: i32| {
        let hue = (h as i32 + offset).rem_euclid(360) as u16;
        Hsl::new(hue, s, l)
    };

    let entries = match scheme {
        SchemeType::Complementary => vec![rotate(0), rotate(180)],
        SchemeType::Analogous => vec![rotate(-30), rotate(0), rotate(30)],
        SchemeType::Triadic => vec![rotate(0), rotate(120), rotate(240)],
        SchemeType::Tetradic => vec![rotate(0), rotate(90), rotate(180), rotate(270)],
        SchemeType::Monochromatic => {
            let step = |offset: i32, floor: u8, cap: u8| {
                let lightness = (l as i32 + offset).clamp(floor as i32, cap as i32) as u8;
                Hsl::new(h, s, lightness)
            };
            vec![
                step(-30, 20, 100),
                step(-15, 10, 100),
                Hsl::new(h, s, l),
                step(15, 0, 90),
                step(30, 0, 95),
            ]
        }
    };

    entries.into_iter().map(|hsl| hsl.to_rgb()).collect()
}
