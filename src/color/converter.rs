//! Conversion between color formats
//!
//! `convert` runs detect, canonicalize, transform and render. Each target
//! format has its own renderer using that grammar's punctuation and display
//! precision.

use crate::color::error::{ColorError, ColorResult};
use crate::color::model::{Color, Format};
use crate::color::parser::detect_format;
use crate::color::transform;

/// Convert `input` to `target_format`.
///
/// With `preserve_alpha` off the output is always rendered opaque.
pub fn convert(input: &str, target_format: &str, preserve_alpha: bool) -> ColorResult<String> {
    let data = detect_format(input).map_err(ColorError::detection)?;
    let target: Format = target_format.parse()?;

    let color = if preserve_alpha { data.color } else { data.color.opaque() };
    let output = render(&color, target);
    log::debug!("Converted '{}' ({}) to {}: {}", data.original, data.format, target, output);
    Ok(output)
}

/// Every supported format name in listing order
pub fn supported_formats() -> Vec<&'static str> {
    Format::ALL.iter().map(Format::as_str).collect()
}

/// Render a canonical color in the given format
pub fn render(color: &Color, format: Format) -> String {
    let (r, g, b) = color.rgb();
    let a = color.a;

    match format {
        Format::Hex => render_hex(r, g, b, a),
        Format::Rgb => format!("rgb({}, {}, {})", r, g, b),
        Format::Rgba => format!("rgba({}, {}, {}, {:.2})", r, g, b, a),
        Format::Hsl | Format::Hsla => {
            let (h, s, l) = transform::rgb_to_hsl(r, g, b);
            if format == Format::Hsla {
                format!("hsla({}, {}%, {}%, {:.2})", h, s, l, a)
            } else {
                format!("hsl({}, {}%, {}%)", h, s, l)
            }
        }
        // HSB has no alpha slot
        Format::Hsb | Format::Hsv => {
            let (h, s, v) = transform::rgb_to_hsb(r, g, b);
            format!("hsb({}, {}%, {}%)", h, s, v)
        }
        Format::Oklch => {
            let (l, c, h) = transform::rgb_to_oklch(r, g, b);
            format!("oklch({:.4} {:.4} {:.2}{})", l, c, h, alpha_suffix(a))
        }
        Format::Lab => {
            let (l, a_axis, b_axis) = transform::rgb_to_lab(r, g, b);
            format!("lab({:.2} {:.2} {:.2}{})", l, a_axis, b_axis, alpha_suffix(a))
        }
        Format::Xyz => {
            let (x, y, z) = transform::rgb_to_xyz(r, g, b);
            format!("xyz({:.4} {:.4} {:.4}{})", x, y, z, alpha_suffix(a))
        }
        Format::Hwb => {
            let (h, w, black) = transform::rgb_to_hwb(r, g, b);
            format!("hwb({} {}% {}%{})", h, w, black, alpha_suffix(a))
        }
        Format::Cmyk => {
            let (c, m, y, k) = transform::rgb_to_cmyk(r, g, b);
            format!("cmyk({:.2}% {:.2}% {:.2}% {:.2}%{})", c, m, y, k, alpha_suffix(a))
        }
    }
}

fn render_hex(r: f64, g: f64, b: f64, a: f64) -> String {
    let byte = |v: f64| v.round().clamp(0.0, 255.0) as u8;
    if a < 1.0 {
        format!("#{:02X}{:02X}{:02X}{:02X}", byte(r), byte(g), byte(b), byte(a * 255.0))
    } else {
        format!("#{:02X}{:02X}{:02X}", byte(r), byte(g), byte(b))
    }
}

/// ` / a` suffix for the space-separated grammars, empty when opaque
fn alpha_suffix(a: f64) -> String {
    if a < 1.0 {
        format!(" / {:.2}", a)
    } else {
        String::new()
    }
}
