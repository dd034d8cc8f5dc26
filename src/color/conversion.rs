//! Color value types and colorspace conversions
//!
//! Provides the `Rgb` and `Hsl` value types and conversions between
//! hex, RGB, and HSL representations. All components are stored as
//! integers: channels in [0,255], hue in whole degrees [0,360),
//! saturation/lightness in whole percent [0,100]. Every transform
//! rounds and clamps back into these ranges.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An 8-bit-per-channel RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// An HSL color with integer components
///
/// Hue in degrees [0,360), saturation and lightness in percent [0,100].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hsl {
    pub h: u16,
    pub s: u8,
    pub l: u8,
}

impl Rgb {
    /// Create a color from channel values
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a hex color string
    ///
    /// Accepts an optional `#` prefix followed by exactly six hex
    /// digits, case-insensitive. Returns `None` for any other shape;
    /// callers must handle the `None` case.
    ///
    /// # Example
    ///
    /// ```
    /// use chromakit::Rgb;
    ///
    /// assert_eq!(Rgb::from_hex("#FF8000"), Some(Rgb::new(255, 128, 0)));
    /// assert_eq!(Rgb::from_hex("ff8000"), Some(Rgb::new(255, 128, 0)));
    /// assert_eq!(Rgb::from_hex("#fff"), None);
    /// ```
    pub fn from_hex(hex: &str) -> Option<Rgb> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }

        let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
        let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
        let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
        Some(Rgb::new(r, g, b))
    }

    /// Format as a 7-character uppercase hex string (e.g. `#FF0000`)
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Convert to HSL
    ///
    /// Hue is rounded to the nearest degree and reduced mod 360;
    /// saturation and lightness are rounded to the nearest percent.
    /// Achromatic colors (r = g = b) yield h = s = 0.
    pub fn to_hsl(&self) -> Hsl {
        let r = self.r as f64 / 255.0;
        let g = self.g as f64 / 255.0;
        let b = self.b as f64 / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        let (h, s) = if self.r == self.g && self.g == self.b {
            (0.0, 0.0)
        } else {
            let d = max - min;
            let s = if l > 0.5 {
                d / (2.0 - max - min)
            } else {
                d / (max + min)
            };
            let h = if max == r {
                ((g - b) / d + if g < b { 6.0 } else { 0.0 }) / 6.0
            } else if max == g {
                ((b - r) / d + 2.0) / 6.0
            } else {
                ((r - g) / d + 4.0) / 6.0
            };
            (h, s)
        };

        Hsl {
            // Hues rounding up to 360 wrap back to 0
            h: ((h * 360.0).round() as u16) % 360,
            s: (s * 100.0).round() as u8,
            l: (l * 100.0).round() as u8,
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl Hsl {
    /// Create an HSL color; hue is expected in [0,360), saturation and
    /// lightness in [0,100]
    pub const fn new(h: u16, s: u8, l: u8) -> Self {
        Self { h, s, l }
    }

    /// Convert to RGB
    ///
    /// Channels are rounded to the nearest integer and clamped to
    /// [0,255]. The RGB→HSL→RGB round trip is lossy by up to ±1 per
    /// channel due to integer rounding.
    pub fn to_rgb(&self) -> Rgb {
        let h = self.h as f64 / 360.0;
        let s = self.s as f64 / 100.0;
        let l = self.l as f64 / 100.0;

        let (r, g, b) = if s == 0.0 {
            (l, l, l)
        } else {
            let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
            let p = 2.0 * l - q;
            (
                hue_to_channel(p, q, h + 1.0 / 3.0),
                hue_to_channel(p, q, h),
                hue_to_channel(p, q, h - 1.0 / 3.0),
            )
        };

        Rgb {
            r: channel_to_byte(r),
            g: channel_to_byte(g),
            b: channel_to_byte(b),
        }
    }
}

/// Resolve one RGB channel from the p/q helper values and a hue offset
fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let t = if t < 0.0 {
        t + 1.0
    } else if t > 1.0 {
        t - 1.0
    } else {
        t
    };

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

fn channel_to_byte(v: f64) -> u8 {
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}
