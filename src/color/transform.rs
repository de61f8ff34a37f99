//! Color-space transform library
//!
//! Pure numeric conversions between canonical RGB (0-255) and the other
//! supported spaces. Percent-style outputs (saturation, lightness, value,
//! whiteness, blackness, CMYK) are on 0-100, hues on 0-360.

use crate::color::constants::*;
use crate::color::model::clamp;

const ONE_THIRD: f64 = 1.0 / 3.0;
const TWO_THIRDS: f64 = 2.0 / 3.0;
const ONE_SIXTH: f64 = 1.0 / 6.0;

/// sRGB gamma encode: linear light to display value, both on 0-1
pub fn srgb_gamma(v: f64) -> f64 {
    if v <= SRGB_GAMMA_THRESHOLD {
        SRGB_GAMMA_FACTOR * v
    } else {
        SRGB_GAMMA_OFFSET * v.powf(1.0 / SRGB_GAMMA_EXPONENT) - SRGB_GAMMA_SUBTRACT
    }
}

/// sRGB gamma decode: display value to linear light, both on 0-1
pub fn srgb_inverse_gamma(v: f64) -> f64 {
    if v <= SRGB_INVERSE_THRESHOLD {
        v / SRGB_GAMMA_FACTOR
    } else {
        ((v + SRGB_GAMMA_SUBTRACT) / SRGB_GAMMA_OFFSET).powf(SRGB_GAMMA_EXPONENT)
    }
}

fn mul(m: &[[f64; 3]; 3], v: [f64; 3]) -> [f64; 3] {
    [
        m[0][0] * v[0] + m[0][1] * v[1] + m[0][2] * v[2],
        m[1][0] * v[0] + m[1][1] * v[1] + m[1][2] * v[2],
        m[2][0] * v[0] + m[2][1] * v[1] + m[2][2] * v[2],
    ]
}

/// Canonical RGB to linear-light RGB on 0-1
pub fn rgb_to_linear(r: f64, g: f64, b: f64) -> [f64; 3] {
    [
        srgb_inverse_gamma(r / RGB_MAX),
        srgb_inverse_gamma(g / RGB_MAX),
        srgb_inverse_gamma(b / RGB_MAX),
    ]
}

/// Linear-light RGB to canonical RGB, clamped to 0-255
fn linear_to_rgb(lin: [f64; 3]) -> (f64, f64, f64) {
    (
        clamp(srgb_gamma(lin[0]) * RGB_MAX, 0.0, RGB_MAX),
        clamp(srgb_gamma(lin[1]) * RGB_MAX, 0.0, RGB_MAX),
        clamp(srgb_gamma(lin[2]) * RGB_MAX, 0.0, RGB_MAX),
    )
}

fn is_achromatic(r: f64, g: f64, b: f64) -> bool {
    r == g && g == b
}

/// Hue in degrees of the RGB cube, shared by HSL, HSB and HWB
fn rgb_hue(r: f64, g: f64, b: f64, max: f64, delta: f64) -> f64 {
    if delta == 0.0 {
        return 0.0;
    }
    let sector = if r == max {
        (g - b) / delta
    } else if g == max {
        2.0 + (b - r) / delta
    } else {
        4.0 + (r - g) / delta
    };
    let h = sector * 60.0;
    if h < 0.0 { h + HUE_MAX } else { h }
}

// HSL

pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> (f64, f64, f64) {
    let s = s / PERCENT_MAX;
    let l = l / PERCENT_MAX;

    if s == 0.0 {
        let gray = l * RGB_MAX;
        return (gray, gray, gray);
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;
    let hk = h / HUE_MAX;

    (
        hue_to_rgb(p, q, hk + ONE_THIRD) * RGB_MAX,
        hue_to_rgb(p, q, hk) * RGB_MAX,
        hue_to_rgb(p, q, hk - ONE_THIRD) * RGB_MAX,
    )
}

fn hue_to_rgb(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < ONE_SIXTH {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < TWO_THIRDS {
        p + (q - p) * (TWO_THIRDS - t) * 6.0
    } else {
        p
    }
}

pub fn rgb_to_hsl(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let (r, g, b) = (r / RGB_MAX, g / RGB_MAX, b / RGB_MAX);
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let l = (max + min) / 2.0;
    let s = if delta == 0.0 {
        0.0
    } else if l < 0.5 {
        delta / (max + min)
    } else {
        delta / (2.0 - max - min)
    };
    let h = rgb_hue(r, g, b, max, delta);

    (h, s * PERCENT_MAX, l * PERCENT_MAX)
}

// HSB / HSV

pub fn hsb_to_rgb(h: f64, s: f64, v: f64) -> (f64, f64, f64) {
    let s = s / PERCENT_MAX;
    let v = v / PERCENT_MAX;

    let c = v * s;
    let hk = h / 60.0;
    let x = c * (1.0 - ((hk % 2.0) - 1.0).abs());

    let (r1, g1, b1) = if hk < 1.0 {
        (c, x, 0.0)
    } else if hk < 2.0 {
        (x, c, 0.0)
    } else if hk < 3.0 {
        (0.0, c, x)
    } else if hk < 4.0 {
        (0.0, x, c)
    } else if hk < 5.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    let m = v - c;
    ((r1 + m) * RGB_MAX, (g1 + m) * RGB_MAX, (b1 + m) * RGB_MAX)
}

pub fn rgb_to_hsb(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let (r, g, b) = (r / RGB_MAX, g / RGB_MAX, b / RGB_MAX);
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let s = if max == 0.0 { 0.0 } else { delta / max };
    let h = rgb_hue(r, g, b, max, delta);

    (h, s * PERCENT_MAX, max * PERCENT_MAX)
}

// OKLCH

/// OKLCH (l 0-1, c 0-0.4, h degrees) to clamped canonical RGB
pub fn oklch_to_rgb(l: f64, c: f64, h: f64) -> (f64, f64, f64) {
    let h_rad = h.to_radians();
    let lab = [l, c * h_rad.cos(), c * h_rad.sin()];

    let lms = mul(&OKLAB_TO_LMS, lab).map(|v| v * v * v);
    linear_to_rgb(mul(&LMS_TO_SRGB, lms))
}

/// Canonical RGB to OKLab (l, a, b)
pub fn rgb_to_oklab(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let lms = mul(&SRGB_TO_LMS, rgb_to_linear(r, g, b)).map(f64::cbrt);
    let [l, a, b_val] = mul(&LMS_TO_OKLAB, lms);

    if is_achromatic(r, g, b) {
        (l, 0.0, 0.0)
    } else {
        (l, a, b_val)
    }
}

/// Canonical RGB to OKLCH (l 0-1, c, h degrees 0-360)
pub fn rgb_to_oklch(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let (l, a, b_val) = rgb_to_oklab(r, g, b);
    let c = (a * a + b_val * b_val).sqrt();
    let h = b_val.atan2(a).to_degrees();
    (l, c, if h < 0.0 { h + HUE_MAX } else { h })
}

// CIE LAB / XYZ

fn lab_f(t: f64) -> f64 {
    if t > LAB_E { t.cbrt() } else { (LAB_K * t + 16.0) / 116.0 }
}

fn lab_f_inverse(f: f64) -> f64 {
    let f3 = f * f * f;
    if f3 > LAB_E { f3 } else { (116.0 * f - 16.0) / LAB_K }
}

pub fn lab_to_xyz(l: f64, a: f64, b: f64) -> (f64, f64, f64) {
    let fy = (l + 16.0) / 116.0;
    let fx = fy + a / 500.0;
    let fz = fy - b / 200.0;
    (
        XYZ_D65[0] * lab_f_inverse(fx),
        XYZ_D65[1] * lab_f_inverse(fy),
        XYZ_D65[2] * lab_f_inverse(fz),
    )
}

pub fn lab_to_rgb(l: f64, a: f64, b: f64) -> (f64, f64, f64) {
    let (x, y, z) = lab_to_xyz(l, a, b);
    xyz_to_rgb(x, y, z)
}

pub fn rgb_to_lab(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let (x, y, z) = rgb_to_xyz(r, g, b);
    let fx = lab_f(x / XYZ_D65[0]);
    let fy = lab_f(y / XYZ_D65[1]);
    let fz = lab_f(z / XYZ_D65[2]);

    let l = 116.0 * fy - 16.0;
    if is_achromatic(r, g, b) {
        return (l, 0.0, 0.0);
    }
    (l, 500.0 * (fx - fy), 200.0 * (fy - fz))
}

pub fn xyz_to_rgb(x: f64, y: f64, z: f64) -> (f64, f64, f64) {
    linear_to_rgb(mul(&XYZ_TO_SRGB, [x, y, z]))
}

pub fn rgb_to_xyz(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let [x, y, z] = mul(&SRGB_TO_XYZ, rgb_to_linear(r, g, b));
    (x, y, z)
}

// HWB

pub fn hwb_to_rgb(h: f64, w: f64, b: f64) -> (f64, f64, f64) {
    let w = w / PERCENT_MAX;
    let black = b / PERCENT_MAX;
    let (r, g, b) = hsl_to_rgb(h, PERCENT_MAX, PERCENT_MAX / 2.0);

    let mix = |channel: f64| (channel / RGB_MAX * (1.0 - w - black) + w) * RGB_MAX;
    (mix(r), mix(g), mix(b))
}

pub fn rgb_to_hwb(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let (h, _, _) = rgb_to_hsl(r, g, b);
    let (rf, gf, bf) = (r / RGB_MAX, g / RGB_MAX, b / RGB_MAX);
    let min = rf.min(gf).min(bf);
    let max = rf.max(gf).max(bf);
    (h, min * PERCENT_MAX, (1.0 - max) * PERCENT_MAX)
}

// CMYK

pub fn cmyk_to_rgb(c: f64, m: f64, y: f64, k: f64) -> (f64, f64, f64) {
    let ink = |v: f64| v / PERCENT_MAX;
    let k = ink(k);
    let channel = |v: f64| clamp((1.0 - ink(v)) * (1.0 - k) * RGB_MAX, 0.0, RGB_MAX);
    (channel(c), channel(m), channel(y))
}

pub fn rgb_to_cmyk(r: f64, g: f64, b: f64) -> (f64, f64, f64, f64) {
    let r = 1.0 - r / RGB_MAX;
    let g = 1.0 - g / RGB_MAX;
    let b = 1.0 - b / RGB_MAX;

    let k = r.min(g).min(b);
    if k >= 1.0 {
        return (0.0, 0.0, 0.0, PERCENT_MAX);
    }
    let ink = |v: f64| (v - k) / (1.0 - k) * PERCENT_MAX;
    (ink(r), ink(g), ink(b), k * PERCENT_MAX)
}

// WCAG

/// WCAG relative luminance of a canonical RGB color, 0 (black) to 1 (white)
pub fn relative_luminance(r: f64, g: f64, b: f64) -> f64 {
    let [r_lin, g_lin, b_lin] = rgb_to_linear(r, g, b);
    LUMINANCE_R * r_lin + LUMINANCE_G * g_lin + LUMINANCE_B * b_lin
}
