//! Color Space Constants
//!
//! Ranges, transfer-function parameters, white point and threshold tables
//! shared by the parsers, transforms and comparator.

// Channel ranges
/// Upper bound of an 8-bit RGB channel
pub const RGB_MAX: f64 = 255.0;
/// Percentages are expressed on 0-100
pub const PERCENT_MAX: f64 = 100.0;
/// Hue is an angle on 0-360
pub const HUE_MAX: f64 = 360.0;
/// OKLCH lightness upper bound as a fraction
pub const OKLCH_L_MAX: f64 = 1.0;
/// Largest chroma accepted for OKLCH input
pub const OKLCH_C_MAX: f64 = 0.4;
pub const ALPHA_MIN: f64 = 0.0;
pub const ALPHA_MAX: f64 = 1.0;

// sRGB transfer function
/// Linear values at or below this are encoded linearly
pub const SRGB_GAMMA_THRESHOLD: f64 = 0.0031308;
/// Encoded values at or below this are decoded linearly
pub const SRGB_INVERSE_THRESHOLD: f64 = 0.04045;
pub const SRGB_GAMMA_FACTOR: f64 = 12.92;
pub const SRGB_GAMMA_EXPONENT: f64 = 2.4;
pub const SRGB_GAMMA_OFFSET: f64 = 1.055;
pub const SRGB_GAMMA_SUBTRACT: f64 = 0.055;

// CIE LAB
/// 29^3 / 3^3, roughly 903.3
pub const LAB_K: f64 = 29.0 * 29.0 * 29.0 / (3.0 * 3.0 * 3.0);
/// 6^3 / 29^3, roughly 0.008856
pub const LAB_E: f64 = 6.0 * 6.0 * 6.0 / (29.0 * 29.0 * 29.0);

/// D65 white point in XYZ, derived from chromaticity (0.3127, 0.3290)
pub const XYZ_D65: [f64; 3] = [
    0.3127 / 0.3290,
    1.0,
    (1.0 - 0.3127 - 0.3290) / 0.3290,
];

/// Linear sRGB to XYZ (D65)
pub const SRGB_TO_XYZ: [[f64; 3]; 3] = [
    [0.41239079926595934, 0.357584339383878, 0.1804807884018343],
    [0.21263900587151027, 0.715168678767756, 0.07219231536073371],
    [0.019330818715591841, 0.11919477979462587, 0.9505321522496607],
];

/// XYZ (D65) to linear sRGB
pub const XYZ_TO_SRGB: [[f64; 3]; 3] = [
    [3.240969941904521, -1.537383177570093, -0.498610760293],
    [-0.96924363628087, 1.8759675015077202, 0.041555057407175],
    [0.055630079696993, -0.20397695888897, 1.0569715142428786],
];

// OKLab
/// Linear sRGB to LMS
pub const SRGB_TO_LMS: [[f64; 3]; 3] = [
    [0.412221469470763, 0.5363325372617348, 0.0514459932675022],
    [0.2119034958178252, 0.6806995506452344, 0.1073969535369406],
    [0.0883024591900564, 0.2817188391361215, 0.6299787016738222],
];

/// Cube-rooted LMS to OKLab
pub const LMS_TO_OKLAB: [[f64; 3]; 3] = [
    [0.210454268309314, 0.7936177747023054, -0.0040720430116193],
    [1.9779985324311684, -2.4285922420485799, 0.450593709617411],
    [0.0259040424655478, 0.7827717124575296, -0.8086757549230774],
];

/// OKLab to cube-rooted LMS
pub const OKLAB_TO_LMS: [[f64; 3]; 3] = [
    [1.0, 0.3963377773761749, 0.2158037573099136],
    [1.0, -0.1055613458156586, -0.0638541728258133],
    [1.0, -0.0894841775298119, -1.2914855480194092],
];

/// LMS to linear sRGB
pub const LMS_TO_SRGB: [[f64; 3]; 3] = [
    [4.0767416360759574, -3.3077115392580616, 0.2309699031821044],
    [-1.2684379732850317, 2.6097573492876887, -0.3413193760026573],
    [-0.0041960761386756, -0.7034186179359362, 1.7076146940746117],
];

// WCAG relative luminance weights
pub const LUMINANCE_R: f64 = 0.2126;
pub const LUMINANCE_G: f64 = 0.7152;
pub const LUMINANCE_B: f64 = 0.0722;
/// Flare term added to both luminances in the contrast ratio
pub const CONTRAST_OFFSET: f64 = 0.05;

// Perceptual difference thresholds (OKLCH delta E)
pub const DELTA_E_IDENTICAL: f64 = 0.0;
/// Just noticeable difference
pub const DELTA_E_INDISTINGUISHABLE: f64 = 0.02;
pub const DELTA_E_SLIGHTLY_DIFFERENT: f64 = 0.10;

// WCAG contrast thresholds
pub const WCAG_AAA_NORMAL: f64 = 7.0;
pub const WCAG_AA_NORMAL: f64 = 4.5;
pub const WCAG_AA_LARGE: f64 = 3.0;
