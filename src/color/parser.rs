//! Grammar detection and format-specific parsing
//!
//! Detection walks a fixed list of grammars and the first structural match
//! wins. The grammars are mutually exclusive by keyword or prefix, so the
//! order only matters for malformed input. Each grammar extracts its raw
//! fields and resolves them through the channel model into a canonical
//! [`Color`].

use std::sync::OnceLock;

use regex::{Captures, Regex};

use crate::color::channel::{
    parse_number, AlphaChannel, ChromaChannel, HueChannel, LightnessChannel, PercentChannel,
    RgbChannel,
};
use crate::color::constants::RGB_MAX;
use crate::color::error::{ColorError, ColorResult};
use crate::color::model::{Color, ColorData, Format};
use crate::color::transform;

// Field fragments
/// Unsigned number with optional fraction: `12`, `12.`, `12.5`
const NUM: &str = r"[0-9]+\.?[0-9]*";
/// Unsigned number that may start with a dot: `.5`, `0.5`, `5`
const FRAC: &str = r"[0-9]*\.?[0-9]+";
/// Signed variant of [`FRAC`]
const SIGNED: &str = r"-?[0-9]*\.?[0-9]+";

/// One supported grammar. `Rgb`, `Hsl` and `Hsb` each cover two format tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Grammar {
    Hex,
    Rgb,
    Hsl,
    Hsb,
    Oklch,
    Lab,
    Xyz,
    Hwb,
    Cmyk,
}

/// Detection priority
pub(super) const DETECTION_ORDER: [Grammar; 9] = [
    Grammar::Hex,
    Grammar::Rgb,
    Grammar::Hsl,
    Grammar::Hsb,
    Grammar::Oklch,
    Grammar::Lab,
    Grammar::Xyz,
    Grammar::Hwb,
    Grammar::Cmyk,
];

static PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();

fn build_patterns() -> Vec<Regex> {
    let alpha_comma = format!(r"(?:,\s*(?P<alpha>{FRAC})\s*)?");
    let alpha_slash = format!(r"(?:/\s*(?P<alpha>{FRAC})\s*)?");

    let sources = [
        // Hex
        r"^#(?P<digits>[0-9a-fA-F]{3}|[0-9a-fA-F]{4}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})$".to_string(),
        // Rgb
        format!(
            r"^rgba?\s*\(\s*(?P<r>{NUM})(?P<rp>%)?\s*,\s*(?P<g>{NUM})(?P<gp>%)?\s*,\s*(?P<b>{NUM})(?P<bp>%)?\s*{alpha_comma}\)$"
        ),
        // Hsl
        format!(
            r"^hsla?\s*\(\s*(?P<h>{NUM})\s*,\s*(?P<s>{NUM})%\s*,\s*(?P<l>{NUM})%\s*{alpha_comma}\)$"
        ),
        // Hsb
        format!(
            r"(?i)^hs(?P<kind>[bv])\s*\(\s*(?P<h>{NUM})\s*,\s*(?P<s>{NUM})%\s*,\s*(?P<v>{NUM})%\s*{alpha_comma}\)$"
        ),
        // Oklch
        format!(
            r"(?i)^oklch\s*\(\s*(?P<l>{FRAC})(?P<lp>%)?\s+(?P<c>{FRAC})(?:\s+(?P<h>{FRAC}))?\s*{alpha_slash}\)$"
        ),
        // Lab
        format!(
            r"(?i)^lab\s*\(\s*(?P<l>{FRAC})\s+(?P<a>{SIGNED})\s+(?P<b>{SIGNED})\s*{alpha_slash}\)$"
        ),
        // Xyz
        format!(
            r"(?i)^xyz\s*\(\s*(?P<x>{SIGNED})\s+(?P<y>{SIGNED})\s+(?P<z>{SIGNED})\s*{alpha_slash}\)$"
        ),
        // Hwb
        format!(
            r"(?i)^hwb\s*\(\s*(?P<h>{NUM})\s+(?P<w>{NUM})%\s+(?P<b>{NUM})%\s*{alpha_slash}\)$"
        ),
        // Cmyk
        format!(
            r"(?i)^cmyk\s*\(\s*(?P<c>{NUM})%\s+(?P<m>{NUM})%\s+(?P<y>{NUM})%\s+(?P<k>{NUM})%\s*{alpha_slash}\)$"
        ),
    ];

    sources
        .iter()
        .map(|source| Regex::new(source).expect("color grammar pattern must compile"))
        .collect()
}

impl Grammar {
    /// Compiled pattern; `build_patterns` lists sources in declaration order
    pub(super) fn pattern(self) -> &'static Regex {
        &PATTERNS.get_or_init(build_patterns)[self as usize]
    }

    /// Resolve the captured fields into a color and its format tag
    fn parse(self, caps: &Captures) -> ColorResult<(Color, Format)> {
        match self {
            Grammar::Hex => parse_hex(field(caps, "digits")).map(|color| (color, Format::Hex)),
            Grammar::Rgb => parse_rgb(caps),
            Grammar::Hsl => parse_hsl(caps),
            Grammar::Hsb => parse_hsb(caps),
            Grammar::Oklch => parse_oklch(caps).map(|color| (color, Format::Oklch)),
            Grammar::Lab => parse_lab(caps).map(|color| (color, Format::Lab)),
            Grammar::Xyz => parse_xyz(caps).map(|color| (color, Format::Xyz)),
            Grammar::Hwb => parse_hwb(caps).map(|color| (color, Format::Hwb)),
            Grammar::Cmyk => parse_cmyk(caps).map(|color| (color, Format::Cmyk)),
        }
    }
}

/// Detect the grammar of `input` and parse it into canonical RGB
pub fn detect_format(input: &str) -> ColorResult<ColorData> {
    let input = input.trim();

    for grammar in DETECTION_ORDER {
        if let Some(caps) = grammar.pattern().captures(input) {
            let (color, format) = grammar.parse(&caps)?;
            log::debug!("Detected {} color '{}' as {:?}", format, input, color);
            return Ok(ColorData {
                color,
                format,
                original: input.to_string(),
            });
        }
    }

    Err(ColorError::unrecognized(input))
}

/// Format tag of an input color string
pub fn detect_input_format(input: &str) -> ColorResult<Format> {
    detect_format(input).map(|data| data.format)
}

fn field<'a>(caps: &'a Captures, name: &str) -> &'a str {
    caps.name(name).map_or("", |m| m.as_str())
}

fn optional<'a>(caps: &'a Captures, name: &str) -> Option<&'a str> {
    caps.name(name).map(|m| m.as_str())
}

fn has(caps: &Captures, name: &str) -> bool {
    caps.name(name).is_some()
}

/// Parse 3, 4, 6 or 8 hex digits (without the leading `#`)
fn parse_hex(digits: &str) -> ColorResult<Color> {
    let nibble = |i: usize| -> ColorResult<f64> {
        u8::from_str_radix(&digits[i..i + 1].repeat(2), 16)
            .map(f64::from)
            .map_err(|_| ColorError::not_numeric("hex digit", &digits[i..i + 1]))
    };
    let byte = |i: usize| -> ColorResult<f64> {
        u8::from_str_radix(&digits[i..i + 2], 16)
            .map(f64::from)
            .map_err(|_| ColorError::not_numeric("hex byte", &digits[i..i + 2]))
    };

    match digits.len() {
        3 => Ok(Color::new_rgb(nibble(0)?, nibble(1)?, nibble(2)?)),
        4 => Ok(Color::new_rgba(nibble(0)?, nibble(1)?, nibble(2)?, nibble(3)? / RGB_MAX)),
        6 => Ok(Color::new_rgb(byte(0)?, byte(2)?, byte(4)?)),
        8 => Ok(Color::new_rgba(byte(0)?, byte(2)?, byte(4)?, byte(6)? / RGB_MAX)),
        _ => Err(ColorError::unrecognized(&format!("#{}", digits))),
    }
}

fn parse_rgb(caps: &Captures) -> ColorResult<(Color, Format)> {
    let r = RgbChannel::parse("red", field(caps, "r"), has(caps, "rp"))?;
    let g = RgbChannel::parse("green", field(caps, "g"), has(caps, "gp"))?;
    let b = RgbChannel::parse("blue", field(caps, "b"), has(caps, "bp"))?;
    let alpha = optional(caps, "alpha");
    let a = AlphaChannel::parse_optional(alpha)?;

    let format = if alpha.is_some() { Format::Rgba } else { Format::Rgb };
    Ok((Color::new_rgba(r.to_rgb(), g.to_rgb(), b.to_rgb(), a), format))
}

fn parse_hsl(caps: &Captures) -> ColorResult<(Color, Format)> {
    let h = HueChannel::parse("hue", field(caps, "h"))?.value();
    let s = PercentChannel::parse("saturation", field(caps, "s"))?.value();
    let l = PercentChannel::parse("lightness", field(caps, "l"))?.value();
    let alpha = optional(caps, "alpha");
    let a = AlphaChannel::parse_optional(alpha)?;

    let (r, g, b) = transform::hsl_to_rgb(h, s, l);
    let format = if alpha.is_some() { Format::Hsla } else { Format::Hsl };
    Ok((Color::clamped(r, g, b, a), format))
}

fn parse_hsb(caps: &Captures) -> ColorResult<(Color, Format)> {
    let h = HueChannel::parse("hue", field(caps, "h"))?.value();
    let s = PercentChannel::parse("saturation", field(caps, "s"))?.value();
    let v = PercentChannel::parse("brightness", field(caps, "v"))?.value();
    let a = AlphaChannel::parse_optional(optional(caps, "alpha"))?;

    let (r, g, b) = transform::hsb_to_rgb(h, s, v);
    let format = if field(caps, "kind").eq_ignore_ascii_case("v") {
        Format::Hsv
    } else {
        Format::Hsb
    };
    Ok((Color::clamped(r, g, b, a), format))
}

fn parse_oklch(caps: &Captures) -> ColorResult<Color> {
    let l = LightnessChannel::parse("lightness", field(caps, "l"), has(caps, "lp"))?.to_fraction();
    let c = ChromaChannel::parse("chroma", field(caps, "c"))?.value();
    // Hue may be omitted; it is meaningless for achromatic colors
    let h = match optional(caps, "h") {
        Some(text) => HueChannel::parse("hue", text)?.value(),
        None => 0.0,
    };
    let a = AlphaChannel::parse_optional(optional(caps, "alpha"))?;

    let (r, g, b) = transform::oklch_to_rgb(l, c, h);
    Ok(Color::clamped(r, g, b, a))
}

fn parse_lab(caps: &Captures) -> ColorResult<Color> {
    let l = parse_number("lightness", field(caps, "l"))?;
    let a_axis = parse_number("a", field(caps, "a"))?;
    let b_axis = parse_number("b", field(caps, "b"))?;
    let a = AlphaChannel::parse_optional(optional(caps, "alpha"))?;

    let (r, g, b) = transform::lab_to_rgb(l, a_axis, b_axis);
    Ok(Color::clamped(r, g, b, a))
}

fn parse_xyz(caps: &Captures) -> ColorResult<Color> {
    let x = parse_number("x", field(caps, "x"))?;
    let y = parse_number("y", field(caps, "y"))?;
    let z = parse_number("z", field(caps, "z"))?;
    let a = AlphaChannel::parse_optional(optional(caps, "alpha"))?;

    let (r, g, b) = transform::xyz_to_rgb(x, y, z);
    Ok(Color::clamped(r, g, b, a))
}

fn parse_hwb(caps: &Captures) -> ColorResult<Color> {
    let h = HueChannel::parse("hue", field(caps, "h"))?.value();
    let w = PercentChannel::parse("whiteness", field(caps, "w"))?.value();
    let black = PercentChannel::parse("blackness", field(caps, "b"))?.value();
    let a = AlphaChannel::parse_optional(optional(caps, "alpha"))?;

    let (r, g, b) = transform::hwb_to_rgb(h, w, black);
    Ok(Color::clamped(r, g, b, a))
}

fn parse_cmyk(caps: &Captures) -> ColorResult<Color> {
    let c = PercentChannel::parse("cyan", field(caps, "c"))?.value();
    let m = PercentChannel::parse("magenta", field(caps, "m"))?.value();
    let y = PercentChannel::parse("yellow", field(caps, "y"))?.value();
    let k = PercentChannel::parse("black", field(caps, "k"))?.value();
    let a = AlphaChannel::parse_optional(optional(caps, "alpha"))?;

    let (r, g, b) = transform::cmyk_to_rgb(c, m, y, k);
    Ok(Color::clamped(r, g, b, a))
}
