//! Perceptual and contrast comparison of two colors
//!
//! The perceptual difference is a Euclidean distance in OKLab (the Cartesian
//! form of OKLCH), not CIE delta E. Component deltas come from HSL, and the
//! contrast ratio follows WCAG 2.x.

use std::fmt;

use crate::color::constants::*;
use crate::color::error::ColorResult;
use crate::color::model::{Color, ColorData};
use crate::color::parser::detect_format;
use crate::color::transform;

/// How different two colors look
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Identical,
    Indistinguishable,
    SlightlyDifferent,
    Different,
}

impl Verdict {
    /// Map a perceptual difference onto a verdict
    pub fn from_delta_e(delta_e: f64) -> Self {
        if delta_e == DELTA_E_IDENTICAL {
            Verdict::Identical
        } else if delta_e <= DELTA_E_INDISTINGUISHABLE {
            Verdict::Indistinguishable
        } else if delta_e <= DELTA_E_SLIGHTLY_DIFFERENT {
            Verdict::SlightlyDifferent
        } else {
            Verdict::Different
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Identical => "identical",
            Verdict::Indistinguishable => "indistinguishable",
            Verdict::SlightlyDifferent => "slightly different",
            Verdict::Different => "different",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// WCAG grade for a contrast ratio
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WcagGrade {
    Aaa,
    Aa,
    AaLargeText,
    Fail,
}

impl WcagGrade {
    pub fn from_contrast(ratio: f64) -> Self {
        if ratio >= WCAG_AAA_NORMAL {
            WcagGrade::Aaa
        } else if ratio >= WCAG_AA_NORMAL {
            WcagGrade::Aa
        } else if ratio >= WCAG_AA_LARGE {
            WcagGrade::AaLargeText
        } else {
            WcagGrade::Fail
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WcagGrade::Aaa => "AAA",
            WcagGrade::Aa => "AA",
            WcagGrade::AaLargeText => "AA (large text only)",
            WcagGrade::Fail => "Fail",
        }
    }
}

impl fmt::Display for WcagGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Metrics comparing two parsed colors
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonResult {
    pub color1: ColorData,
    pub color2: ColorData,
    /// OKLCH delta E, 0 and up
    pub perceptual_diff: f64,
    pub verdict: Verdict,
    /// Shortest hue arc in degrees, 0-180
    pub hue_diff: f64,
    /// HSL lightness delta, 0-100
    pub lightness_diff: f64,
    /// HSL saturation delta, 0-100
    pub saturation_diff: f64,
    /// WCAG contrast ratio, 1-21
    pub contrast_ratio: f64,
    pub wcag_grade: WcagGrade,
}

/// Compare two color strings in any supported formats
pub fn compare(color1: &str, color2: &str) -> ColorResult<ComparisonResult> {
    let data1 = detect_format(color1).map_err(|e| e.for_input("color1"))?;
    let data2 = detect_format(color2).map_err(|e| e.for_input("color2"))?;

    let perceptual_diff = oklch_delta_e(&data1.color, &data2.color);

    let (h1, s1, l1) = transform::rgb_to_hsl(data1.color.r, data1.color.g, data1.color.b);
    let (h2, s2, l2) = transform::rgb_to_hsl(data2.color.r, data2.color.g, data2.color.b);

    let contrast_ratio = contrast_ratio(&data1.color, &data2.color);

    let result = ComparisonResult {
        perceptual_diff,
        verdict: Verdict::from_delta_e(perceptual_diff),
        hue_diff: hue_difference(h1, h2),
        lightness_diff: (l2 - l1).abs(),
        saturation_diff: (s2 - s1).abs(),
        contrast_ratio,
        wcag_grade: WcagGrade::from_contrast(contrast_ratio),
        color1: data1,
        color2: data2,
    };
    log::debug!(
        "Compared '{}' and '{}': delta E {:.4}, contrast {:.2}",
        result.color1.original,
        result.color2.original,
        result.perceptual_diff,
        result.contrast_ratio
    );
    Ok(result)
}

/// Euclidean distance between two colors in OKLab
pub fn oklch_delta_e(c1: &Color, c2: &Color) -> f64 {
    let cartesian = |color: &Color| {
        let (l, c, h) = transform::rgb_to_oklch(color.r, color.g, color.b);
        let h_rad = h.to_radians();
        (l, c * h_rad.cos(), c * h_rad.sin())
    };
    let (l1, a1, b1) = cartesian(c1);
    let (l2, a2, b2) = cartesian(c2);

    let (dl, da, db) = (l2 - l1, a2 - a1, b2 - b1);
    (dl * dl + da * da + db * db).sqrt()
}

/// Shortest distance between two hues around the color wheel
pub fn hue_difference(h1: f64, h2: f64) -> f64 {
    let diff = (h1 - h2).abs();
    if diff > 180.0 { HUE_MAX - diff } else { diff }
}

/// WCAG contrast ratio between two colors, 1 to 21
pub fn contrast_ratio(c1: &Color, c2: &Color) -> f64 {
    let l1 = transform::relative_luminance(c1.r, c1.g, c1.b);
    let l2 = transform::relative_luminance(c2.r, c2.g, c2.b);
    let (lighter, darker) = if l1 >= l2 { (l1, l2) } else { (l2, l1) };
    (lighter + CONTRAST_OFFSET) / (darker + CONTRAST_OFFSET)
}

/// Short multi-line summary
pub fn format_basic(result: &ComparisonResult) -> String {
    format!(
        "Color Comparison: {} vs {}\n\
         Perceptual Difference: {:.3} ΔE\n\
         Verdict: {}\n\
         Contrast Ratio: {:.2}:1 ({})",
        result.color1.original,
        result.color2.original,
        result.perceptual_diff,
        result.verdict,
        result.contrast_ratio,
        result.wcag_grade,
    )
}

/// Full report with the component breakdown
pub fn format_detailed(result: &ComparisonResult) -> String {
    format!(
        "Color Comparison: {} ({}) vs {} ({})\n\n\
         Perceptual Difference: {:.3} ΔE\n\
         Verdict: {}\n\n\
         Component Breakdown:\n  \
         Hue Difference: {:.1}°\n  \
         Lightness Difference: {:.1}%\n  \
         Saturation Difference: {:.1}%\n\n\
         Contrast Ratio: {:.2}:1\n\
         WCAG Grade: {}",
        result.color1.original,
        result.color1.format,
        result.color2.original,
        result.color2.format,
        result.perceptual_diff,
        result.verdict,
        result.hue_diff,
        result.lightness_diff,
        result.saturation_diff,
        result.contrast_ratio,
        result.wcag_grade,
    )
}
