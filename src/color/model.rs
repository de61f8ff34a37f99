//! Canonical color representation and format tags
//!
//! Every parser produces a [`Color`] and every formatter consumes one.
//! [`Format`] is the closed set of grammars the detector understands.

use std::fmt;
use std::str::FromStr;

use crate::color::constants::{ALPHA_MAX, ALPHA_MIN, RGB_MAX};
use crate::color::error::ColorError;

/// A color in canonical RGB space with alpha
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// Red component (0-255)
    pub r: f64,
    /// Green component (0-255)
    pub g: f64,
    /// Blue component (0-255)
    pub b: f64,
    /// Alpha component (0.0-1.0), 1.0 when the input carried no alpha
    pub a: f64,
}

impl Color {
    /// Create a new color with RGB components and full opacity
    pub fn new_rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b, a: ALPHA_MAX }
    }

    /// Create a new color with RGBA components
    pub fn new_rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Build a color from transform output, clamping each channel to 0-255
    /// and alpha to 0-1
    pub fn clamped(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self {
            r: clamp(r, 0.0, RGB_MAX),
            g: clamp(g, 0.0, RGB_MAX),
            b: clamp(b, 0.0, RGB_MAX),
            a: clamp(a, ALPHA_MIN, ALPHA_MAX),
        }
    }

    /// Get RGB components as a tuple
    pub fn rgb(&self) -> (f64, f64, f64) {
        (self.r, self.g, self.b)
    }

    /// Same color, fully opaque
    pub fn opaque(self) -> Self {
        Self { a: ALPHA_MAX, ..self }
    }

    pub fn has_alpha(&self) -> bool {
        self.a < ALPHA_MAX
    }
}

/// A parsed color together with the grammar it was written in
#[derive(Debug, Clone, PartialEq)]
pub struct ColorData {
    pub color: Color,
    pub format: Format,
    /// Trimmed input text, kept for comparison reports
    pub original: String,
}

/// The supported color grammars
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    Hex,
    Rgb,
    Rgba,
    Hsl,
    Hsla,
    Hsb,
    Hsv,
    Oklch,
    Lab,
    Xyz,
    Hwb,
    Cmyk,
}

impl Format {
    /// All formats in their listing order
    pub const ALL: [Format; 12] = [
        Format::Hex,
        Format::Rgb,
        Format::Rgba,
        Format::Hsl,
        Format::Hsla,
        Format::Hsb,
        Format::Hsv,
        Format::Oklch,
        Format::Lab,
        Format::Xyz,
        Format::Hwb,
        Format::Cmyk,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Format::Hex => "hex",
            Format::Rgb => "rgb",
            Format::Rgba => "rgba",
            Format::Hsl => "hsl",
            Format::Hsla => "hsla",
            Format::Hsb => "hsb",
            Format::Hsv => "hsv",
            Format::Oklch => "oklch",
            Format::Lab => "lab",
            Format::Xyz => "xyz",
            Format::Hwb => "hwb",
            Format::Cmyk => "cmyk",
        }
    }

    /// Comma separated list of every format name
    pub fn supported_list() -> String {
        Self::ALL
            .iter()
            .map(Format::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Format {
    type Err = ColorError;

    /// Case-insensitive lookup of a target format name
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|format| format.as_str() == lower)
            .ok_or_else(|| ColorError::InvalidTargetFormat {
                format: s.to_string(),
                supported: Self::supported_list(),
            })
    }
}

/// Clamp a value between min and max. NaN maps to `min`.
pub(crate) fn clamp(v: f64, min: f64, max: f64) -> f64 {
    if v.is_nan() || v < min {
        min
    } else if v > max {
        max
    } else {
        v
    }
}
