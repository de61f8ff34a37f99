//! Tests for the color-space transform library

use crate::color::transform::*;

fn assert_close(actual: f64, expected: f64, tolerance: f64, what: &str) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "{}: expected {} (±{}), got {}",
        what,
        expected,
        tolerance,
        actual
    );
}

fn assert_rgb_close(actual: (f64, f64, f64), expected: (f64, f64, f64), tolerance: f64) {
    assert_close(actual.0, expected.0, tolerance, "red");
    assert_close(actual.1, expected.1, tolerance, "green");
    assert_close(actual.2, expected.2, tolerance, "blue");
}

const SAMPLE_COLORS: [(f64, f64, f64); 10] = [
    (0.0, 0.0, 0.0),
    (255.0, 255.0, 255.0),
    (255.0, 0.0, 0.0),
    (0.0, 255.0, 0.0),
    (0.0, 0.0, 255.0),
    (128.0, 128.0, 128.0),
    (255.0, 87.0, 51.0),
    (163.0, 146.0, 214.0),
    (250.0, 206.0, 0.0),
    (18.0, 52.0, 86.0),
];

#[test]
fn test_rgb_to_hsl_known_values() {
    assert_eq!(rgb_to_hsl(255.0, 0.0, 0.0), (0.0, 100.0, 50.0));
    assert_eq!(rgb_to_hsl(0.0, 255.0, 0.0), (120.0, 100.0, 50.0));
    assert_eq!(rgb_to_hsl(0.0, 0.0, 255.0), (240.0, 100.0, 50.0));
    assert_eq!(rgb_to_hsl(255.0, 255.0, 255.0), (0.0, 0.0, 100.0));
    assert_eq!(rgb_to_hsl(0.0, 0.0, 0.0), (0.0, 0.0, 0.0));
}

#[test]
fn test_hsl_to_rgb_known_values() {
    assert_rgb_close(hsl_to_rgb(0.0, 100.0, 50.0), (255.0, 0.0, 0.0), 1e-9);
    assert_rgb_close(hsl_to_rgb(120.0, 100.0, 50.0), (0.0, 255.0, 0.0), 1e-9);
    assert_rgb_close(hsl_to_rgb(240.0, 100.0, 50.0), (0.0, 0.0, 255.0), 1e-9);
    assert_rgb_close(hsl_to_rgb(0.0, 0.0, 50.0), (127.5, 127.5, 127.5), 1e-9);
}

#[test]
fn test_hsl_round_trip() {
    for &(r, g, b) in &SAMPLE_COLORS {
        let (h, s, l) = rgb_to_hsl(r, g, b);
        assert_rgb_close(hsl_to_rgb(h, s, l), (r, g, b), 1.0);
    }
}

#[test]
fn test_hsb_round_trip() {
    for &(r, g, b) in &SAMPLE_COLORS {
        let (h, s, v) = rgb_to_hsb(r, g, b);
        assert_rgb_close(hsb_to_rgb(h, s, v), (r, g, b), 1.0);
    }
}

#[test]
fn test_hsb_sectors() {
    assert_rgb_close(hsb_to_rgb(0.0, 100.0, 100.0), (255.0, 0.0, 0.0), 1e-9);
    assert_rgb_close(hsb_to_rgb(60.0, 100.0, 100.0), (255.0, 255.0, 0.0), 1e-9);
    assert_rgb_close(hsb_to_rgb(180.0, 100.0, 100.0), (0.0, 255.0, 255.0), 1e-9);
    assert_rgb_close(hsb_to_rgb(300.0, 100.0, 100.0), (255.0, 0.0, 255.0), 1e-9);
    assert_rgb_close(hsb_to_rgb(360.0, 100.0, 100.0), (255.0, 0.0, 0.0), 1e-9);
}

#[test]
fn test_gamma_functions_are_inverse() {
    for v in [0.0, 0.001, 0.04, 0.2, 0.5, 0.9, 1.0] {
        assert_close(srgb_gamma(srgb_inverse_gamma(v)), v, 1e-12, "gamma round trip");
    }
}

#[test]
fn test_rgb_to_oklch_red() {
    let (l, c, h) = rgb_to_oklch(255.0, 0.0, 0.0);
    assert_close(l, 0.628, 0.001, "lightness");
    assert_close(c, 0.2577, 0.001, "chroma");
    assert_close(h, 29.23, 0.05, "hue");
}

#[test]
fn test_rgb_to_oklch_white_and_black() {
    let (l, c, h) = rgb_to_oklch(255.0, 255.0, 255.0);
    assert_close(l, 1.0, 1e-4, "white lightness");
    assert_eq!(c, 0.0);
    assert_eq!(h, 0.0);

    let (l, c, _) = rgb_to_oklch(0.0, 0.0, 0.0);
    assert_close(l, 0.0, 1e-9, "black lightness");
    assert_eq!(c, 0.0);
}

#[test]
fn test_oklch_round_trip() {
    for &(r, g, b) in &SAMPLE_COLORS {
        let (l, c, h) = rgb_to_oklch(r, g, b);
        assert_rgb_close(oklch_to_rgb(l, c, h), (r, g, b), 1.0);
    }
}

#[test]
fn test_oklch_to_rgb_clamps_out_of_gamut() {
    let (r, g, b) = oklch_to_rgb(0.9, 0.4, 140.0);
    for channel in [r, g, b] {
        assert!((0.0..=255.0).contains(&channel), "channel {} out of range", channel);
    }
}

#[test]
fn test_lab_known_values_and_round_trip() {
    let (l, a, b) = rgb_to_lab(255.0, 255.0, 255.0);
    assert_close(l, 100.0, 0.01, "white L");
    assert_eq!((a, b), (0.0, 0.0));

    let (l, a, b) = rgb_to_lab(255.0, 0.0, 0.0);
    assert_close(l, 53.24, 0.05, "red L");
    assert_close(a, 80.09, 0.2, "red a");
    assert_close(b, 67.20, 0.2, "red b");

    for &(r, g, b) in &SAMPLE_COLORS {
        let (l, a, bb) = rgb_to_lab(r, g, b);
        assert_rgb_close(lab_to_rgb(l, a, bb), (r, g, b), 1.0);
    }
}

#[test]
fn test_xyz_known_values_and_round_trip() {
    let (x, y, z) = rgb_to_xyz(255.0, 255.0, 255.0);
    assert_close(x, 0.9505, 0.001, "white X");
    assert_close(y, 1.0, 0.001, "white Y");
    assert_close(z, 1.089, 0.001, "white Z");

    for &(r, g, b) in &SAMPLE_COLORS {
        let (x, y, z) = rgb_to_xyz(r, g, b);
        assert_rgb_close(xyz_to_rgb(x, y, z), (r, g, b), 1.0);
    }
}

#[test]
fn test_hwb_conversions() {
    assert_rgb_close(hwb_to_rgb(0.0, 0.0, 0.0), (255.0, 0.0, 0.0), 1e-9);
    assert_rgb_close(hwb_to_rgb(0.0, 100.0, 0.0), (255.0, 255.0, 255.0), 1e-9);
    assert_rgb_close(hwb_to_rgb(0.0, 0.0, 100.0), (0.0, 0.0, 0.0), 1e-9);

    assert_eq!(rgb_to_hwb(255.0, 0.0, 0.0), (0.0, 0.0, 0.0));
    for &(r, g, b) in &SAMPLE_COLORS {
        let (h, w, bl) = rgb_to_hwb(r, g, b);
        assert_rgb_close(hwb_to_rgb(h, w, bl), (r, g, b), 1.0);
    }
}

#[test]
fn test_cmyk_conversions() {
    assert_rgb_close(cmyk_to_rgb(0.0, 100.0, 100.0, 0.0), (255.0, 0.0, 0.0), 1e-9);
    assert_rgb_close(cmyk_to_rgb(0.0, 0.0, 0.0, 100.0), (0.0, 0.0, 0.0), 1e-9);
    assert_eq!(rgb_to_cmyk(255.0, 0.0, 0.0), (0.0, 100.0, 100.0, 0.0));
    assert_eq!(rgb_to_cmyk(255.0, 255.0, 255.0), (0.0, 0.0, 0.0, 0.0));
}

#[test]
fn test_cmyk_pure_black_has_no_nan() {
    let (c, m, y, k) = rgb_to_cmyk(0.0, 0.0, 0.0);
    assert_eq!((c, m, y, k), (0.0, 0.0, 0.0, 100.0));
}

#[test]
fn test_relative_luminance() {
    assert_close(relative_luminance(0.0, 0.0, 0.0), 0.0, 1e-3, "black");
    assert_close(relative_luminance(255.0, 255.0, 255.0), 1.0, 1e-3, "white");
}
